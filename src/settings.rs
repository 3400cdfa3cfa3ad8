use super::*;

pub(crate) const ALLOWED_PLATFORMS: &str = "allowedPlatforms";
pub(crate) const DISABLED_SITES: &str = "disabledSites";
pub(crate) const GLOBAL_ENABLED: &str = "globalEnabled";

const KEYS: &[&str] = &[ALLOWED_PLATFORMS, DISABLED_SITES, GLOBAL_ENABLED];

/// User configuration, as read once per page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
  pub allowed_platforms: Vec<String>,
  pub disabled_sites: Vec<String>,
  pub global_enabled: bool,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      allowed_platforms: Vec::new(),
      disabled_sites: Vec::new(),
      global_enabled: true,
    }
  }
}

/// Raw store contents, where any key may be absent or null.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSettings {
  allowed_platforms: Option<Vec<String>>,
  disabled_sites: Option<Vec<String>>,
  global_enabled: Option<bool>,
}

impl From<StoredSettings> for Settings {
  fn from(stored: StoredSettings) -> Self {
    Self {
      allowed_platforms: stored.allowed_platforms.unwrap_or_default(),
      disabled_sites: stored.disabled_sites.unwrap_or_default(),
      global_enabled: stored.global_enabled != Some(false),
    }
  }
}

impl Settings {
  #[must_use]
  pub fn allow_list(&self) -> AllowList {
    for name in &self.allowed_platforms {
      if platform(name).is_none() {
        debug!(name = name.as_str(), "ignoring unknown platform on allow-list");
      }
    }

    AllowList::new(self.allowed_platforms.iter().cloned())
  }

  #[must_use]
  pub fn builder() -> SettingsBuilder {
    SettingsBuilder::default()
  }

  /// Whether `host`, with a leading `www.` removed, is switched off.
  #[must_use]
  pub fn is_site_disabled(&self, host: &str) -> bool {
    let host = strip_www(host);

    self
      .disabled_sites
      .iter()
      .any(|site| site.eq_ignore_ascii_case(host))
  }

  /// Reads the settings, falling back to the defaults (everything cleansed,
  /// no site disabled, enabled) when the store fails.
  #[must_use]
  pub fn load(store: &dyn SettingsStore) -> Self {
    match Self::read(store) {
      Ok(settings) => settings,
      Err(error) => {
        warn!(%error, "failed to read settings, using defaults");
        Self::default()
      }
    }
  }

  fn read(store: &dyn SettingsStore) -> Result<Self> {
    let values = store.get(KEYS)?;

    let stored =
      serde_json::from_value::<StoredSettings>(Value::Object(values))?;

    Ok(stored.into())
  }
}

#[derive(Default)]
pub struct SettingsBuilder {
  inner: Settings,
}

impl SettingsBuilder {
  #[must_use]
  pub fn allowed_platforms<I, S>(self, platforms: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: Settings {
        allowed_platforms: platforms.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> Settings {
    self.inner
  }

  #[must_use]
  pub fn disabled_sites<I, S>(self, sites: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      inner: Settings {
        disabled_sites: sites.into_iter().map(Into::into).collect(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn global_enabled(self, global_enabled: bool) -> Self {
    Self {
      inner: Settings {
        global_enabled,
        ..self.inner
      },
    }
  }
}

fn read_list(store: &dyn SettingsStore, key: &str) -> Result<Vec<String>> {
  let mut values = store.get(&[key])?;

  match values.remove(key) {
    None | Some(Value::Null) => Ok(Vec::new()),
    Some(value) => Ok(serde_json::from_value(value)?),
  }
}

fn write(store: &mut dyn SettingsStore, key: &str, value: Value) -> Result {
  let mut values = Map::new();
  values.insert(key.to_string(), value);
  store.set(values)
}

/// Switches the extension on or off everywhere.
pub fn set_global_enabled(
  store: &mut dyn SettingsStore,
  enabled: bool,
) -> Result {
  write(store, GLOBAL_ENABLED, Value::Bool(enabled))
}

/// Adds `name` to, or removes it from, the stored allow-list.
pub fn set_platform_allowed(
  store: &mut dyn SettingsStore,
  name: &str,
  allowed: bool,
) -> Result {
  if platform(name).is_none() {
    return Err(Error::UnknownPlatform(name.to_string()));
  }

  let mut platforms = read_list(store, ALLOWED_PLATFORMS)?;

  if allowed {
    if !platforms.iter().any(|platform| platform == name) {
      platforms.push(name.to_string());
    }
  } else {
    platforms.retain(|platform| platform != name);
  }

  write(store, ALLOWED_PLATFORMS, platforms.into())
}

/// Adds `host`, minus any leading `www.`, to the stored disabled sites, or
/// removes it.
pub fn set_site_disabled(
  store: &mut dyn SettingsStore,
  host: &str,
  disabled: bool,
) -> Result {
  let host = strip_www(host);

  let mut sites = read_list(store, DISABLED_SITES)?;

  if disabled {
    if !sites.iter().any(|site| site == host) {
      sites.push(host.to_string());
    }
  } else {
    sites.retain(|site| site != host);
  }

  write(store, DISABLED_SITES, sites.into())
}

#[must_use]
pub fn strip_www(host: &str) -> &str {
  host.strip_prefix("www.").unwrap_or(host)
}
