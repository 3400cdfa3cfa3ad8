use super::*;

/// Key-value storage shared with whatever edits the settings.
pub trait SettingsStore {
  /// Values for the requested keys; absent keys are simply missing from the
  /// returned map.
  fn get(&self, keys: &[&str]) -> Result<Map<String, Value>>;

  /// Merges `values` into the store.
  fn set(&mut self, values: Map<String, Value>) -> Result;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  values: Map<String, Value>,
}

impl From<Value> for MemoryStore {
  fn from(value: Value) -> Self {
    match value {
      Value::Object(values) => Self { values },
      _ => Self::default(),
    }
  }
}

impl SettingsStore for MemoryStore {
  fn get(&self, keys: &[&str]) -> Result<Map<String, Value>> {
    Ok(pick(&self.values, keys))
  }

  fn set(&mut self, values: Map<String, Value>) -> Result {
    self.values.extend(values);
    Ok(())
  }
}

/// A JSON object on disk. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  fn read_all(&self) -> Result<Map<String, Value>> {
    if !self.path.exists() {
      return Ok(Map::new());
    }

    Ok(serde_json::from_str(&fs::read_to_string(&self.path)?)?)
  }
}

impl SettingsStore for JsonFileStore {
  fn get(&self, keys: &[&str]) -> Result<Map<String, Value>> {
    Ok(pick(&self.read_all()?, keys))
  }

  fn set(&mut self, values: Map<String, Value>) -> Result {
    let mut all = self.read_all()?;

    all.extend(values);

    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent)?;
    }

    let mut json = serde_json::to_string_pretty(&all)?;
    json.push('\n');

    fs::write(&self.path, json)?;

    Ok(())
  }
}

fn pick(values: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
  keys
    .iter()
    .filter_map(|key| {
      values
        .get(*key)
        .map(|value| ((*key).to_string(), value.clone()))
    })
    .collect()
}
