use super::*;

#[derive(Parser)]
#[command(name = "social-cleanse")]
#[command(
  about = "Remove social media links, icons and widgets from HTML pages",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    global = true,
    value_name = "PATH",
    help = "JSON settings file shared by every command"
  )]
  settings: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  #[command(about = "Keep a platform visible")]
  Allow { platform: String },
  #[command(about = "Cleanse a platform again")]
  Block { platform: String },
  #[command(about = "Cleanse an HTML file and print the result")]
  Clean {
    #[arg(value_name = "FILE", help = "Path to the HTML file to cleanse")]
    input: PathBuf,
    #[arg(long, help = "Address the page was loaded from")]
    url: String,
    #[arg(long, help = "Print a JSON report of removals to stderr")]
    report: bool,
  },
  #[command(about = "Stop cleansing everywhere")]
  Disable,
  #[command(about = "Stop cleansing pages on a site")]
  DisableSite { host: String },
  #[command(about = "Resume cleansing everywhere")]
  Enable,
  #[command(about = "Resume cleansing pages on a site")]
  EnableSite { host: String },
  #[command(about = "List platforms and whether they are cleansed")]
  Platforms,
}

impl Arguments {
  fn clean(
    store: &dyn SettingsStore,
    input: &Path,
    url: &str,
    report: bool,
  ) -> Result {
    let html = fs::read_to_string(input).with_context(|| {
      format!("failed to read file from `{}`", input.display())
    })?;

    let mut page = Page::parse(&html, url)
      .with_context(|| format!("failed to load page at `{url}`"))?;

    match Engine::start(&mut page, store) {
      Activation::Active(engine) => {
        if report {
          eprintln!(
            "{}",
            serde_json::to_string_pretty(engine.initial_report())
              .context("failed to serialize report")?
          );
        }
      }
      Activation::Disabled(DisabledReason::Global) => {
        eprintln!("cleansing is disabled");
      }
      Activation::Disabled(DisabledReason::Site(host)) => {
        eprintln!("cleansing is disabled on {host}");
      }
    }

    println!("{}", page.html());

    Ok(())
  }

  fn list_platforms(store: &dyn SettingsStore) {
    let allow_list = Settings::load(store).allow_list();

    for platform in platforms() {
      let status = if allow_list.contains(platform.name) {
        "allowed"
      } else {
        "cleansed"
      };

      println!(
        "{:<20} {:<9} {}",
        platform.name,
        status,
        platform.domains.join(", ")
      );
    }
  }

  pub(crate) fn run(self) -> Result {
    let mut store: Box<dyn SettingsStore> = match &self.settings {
      Some(path) => Box::new(JsonFileStore::new(path)),
      None => Box::new(MemoryStore::default()),
    };

    match &self.command {
      Command::Clean { input, url, report } => {
        return Self::clean(store.as_ref(), input, url, *report);
      }
      Command::Platforms => {
        Self::list_platforms(store.as_ref());
        return Ok(());
      }
      _ => {}
    }

    if self.settings.is_none() {
      return Err(anyhow!("editing settings requires --settings <PATH>"));
    }

    let store = store.as_mut();

    match self.command {
      Command::Allow { platform } => set_platform_allowed(store, &platform, true),
      Command::Block { platform } => {
        set_platform_allowed(store, &platform, false)
      }
      Command::Disable => set_global_enabled(store, false),
      Command::DisableSite { host } => set_site_disabled(store, &host, true),
      Command::Enable => set_global_enabled(store, true),
      Command::EnableSite { host } => set_site_disabled(store, &host, false),
      Command::Clean { .. } | Command::Platforms => Ok(()),
    }
    .context("failed to update settings")
  }
}
