use super::*;

/// Why the engine stayed inactive for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisabledReason {
  Global,
  Site(String),
}

/// Outcome of starting the engine on a page.
pub enum Activation {
  Active(Engine),
  Disabled(DisabledReason),
}

impl Activation {
  #[must_use]
  pub fn engine(self) -> Option<Engine> {
    match self {
      Self::Active(engine) => Some(engine),
      Self::Disabled(_) => None,
    }
  }

  #[must_use]
  pub fn is_active(&self) -> bool {
    matches!(self, Self::Active(_))
  }
}

/// Cleanses one page load: an initial scan, then a rescan for every batch
/// of mutations that inserts nodes.
pub struct Engine {
  initial_report: ScanReport,
  watcher: MutationWatcher,
}

impl Engine {
  /// Applies the activation gate, runs the initial scan and arms the
  /// watcher.
  ///
  /// Mutations recorded before the watcher is armed, including the initial
  /// scan's own removals, are discarded.
  pub fn activate(page: &mut Page, settings: &Settings) -> Activation {
    if !settings.global_enabled {
      info!("cleansing disabled globally");
      return Activation::Disabled(DisabledReason::Global);
    }

    if let Some(host) = page.hostname()
      && settings.is_site_disabled(host)
    {
      info!(host, "cleansing disabled for site");
      return Activation::Disabled(DisabledReason::Site(host.to_string()));
    }

    let scanner = Scanner::new(settings.allow_list(), page.url().clone());

    debug!(
      blocked_domains = scanner.blocked().len(),
      url = %page.url(),
      "starting initial scan"
    );

    let initial_report = scanner.scan(page);

    page.take_records();

    Activation::Active(Self {
      initial_report,
      watcher: MutationWatcher::new(scanner),
    })
  }

  #[must_use]
  pub fn initial_report(&self) -> &ScanReport {
    &self.initial_report
  }

  /// Delivers the page's pending mutation records as one batch.
  pub fn on_mutations(&self, page: &mut Page) -> Option<ScanReport> {
    let batch = page.take_records();

    if batch.is_empty() {
      return None;
    }

    self.watcher.notify(page, &batch)
  }

  #[must_use]
  pub fn scanner(&self) -> &Scanner {
    self.watcher.scanner()
  }

  /// Loads settings from `store`, failing open, and activates.
  pub fn start(page: &mut Page, store: &dyn SettingsStore) -> Activation {
    Self::activate(page, &Settings::load(store))
  }
}
