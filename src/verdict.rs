use super::*;

/// Outcome of one heuristic applied to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "platform", rename_all = "snake_case")]
pub enum Verdict {
  /// Social-looking, but no specific platform could be named.
  MatchedGeneric,
  MatchedPlatform(&'static str),
  NoMatch,
}

impl Verdict {
  #[must_use]
  pub fn is_match(self) -> bool {
    !matches!(self, Self::NoMatch)
  }

  #[must_use]
  pub fn platform(self) -> Option<&'static str> {
    match self {
      Self::MatchedPlatform(platform) => Some(platform),
      Self::MatchedGeneric | Self::NoMatch => None,
    }
  }
}
