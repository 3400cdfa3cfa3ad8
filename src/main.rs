use {
  anyhow::{Context, anyhow},
  arguments::Arguments,
  clap::{Parser, Subcommand},
  social_cleanse::{
    Activation, DisabledReason, Engine, JsonFileStore, MemoryStore, Page,
    Settings, SettingsStore, platforms, set_global_enabled,
    set_platform_allowed, set_site_disabled,
  },
  std::{
    fs,
    path::{Path, PathBuf},
    process,
  },
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error:#}");
    process::exit(1);
  }
}
