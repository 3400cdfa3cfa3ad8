#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid page url: {source}")]
  InvalidPageUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("invalid selector: {0}")]
  InvalidSelector(String),
  #[error("no element matches `{selector}`")]
  MissingParent { selector: String },
  #[error("settings store i/o failed: {source}")]
  StoreIo {
    #[from]
    source: std::io::Error,
  },
  #[error("settings store holds malformed json: {source}")]
  StoreJson {
    #[from]
    source: serde_json::Error,
  },
  #[error("unknown platform `{0}`")]
  UnknownPlatform(String),
}
