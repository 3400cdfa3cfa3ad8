use {
  context::Context,
  ego_tree::{NodeId, NodeRef, Tree},
  heuristic::{
    FrameHeuristic, Heuristic, IconClassHeuristic, ImageSourceHeuristic,
    LabelHeuristic, LinkHeuristic, ShareWidgetHeuristic,
  },
  regex::Regex,
  scraper::{ElementRef, Html, Node, Selector},
  serde::{Deserialize, Serialize},
  serde_json::{Map, Value},
  std::{collections::BTreeSet, fs, path::PathBuf, sync::LazyLock},
  tracing::{debug, info, trace, warn},
  url::Url,
};

pub use crate::{
  allow_list::AllowList,
  domain::BlockedDomains,
  engine::{Activation, DisabledReason, Engine},
  error::Error,
  mutation::MutationRecord,
  page::Page,
  platform::{
    Platform, fragment_platforms, platform, platform_for_host, platforms,
    resolve_fragment,
  },
  scanner::{Removal, ScanReport, Scanner},
  settings::{
    Settings, SettingsBuilder, set_global_enabled, set_platform_allowed,
    set_site_disabled, strip_www,
  },
  store::{JsonFileStore, MemoryStore, SettingsStore},
  verdict::Verdict,
  watcher::MutationWatcher,
};

mod allow_list;
mod context;
mod domain;
mod engine;
mod error;
mod heuristic;
mod mutation;
mod page;
mod platform;
mod re;
mod removal;
mod scanner;
mod settings;
mod store;
mod verdict;
mod watcher;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
