use super::*;

/// Read-only state shared by every heuristic during a page's lifetime.
#[derive(Debug, Clone)]
pub(crate) struct Context {
  allow_list: AllowList,
  base_url: Url,
  blocked: BlockedDomains,
}

impl Context {
  pub(crate) fn allow_list(&self) -> &AllowList {
    &self.allow_list
  }

  pub(crate) fn base_url(&self) -> &Url {
    &self.base_url
  }

  pub(crate) fn blocked(&self) -> &BlockedDomains {
    &self.blocked
  }

  pub(crate) fn new(allow_list: AllowList, base_url: Url) -> Self {
    Self {
      blocked: BlockedDomains::from_allow_list(&allow_list),
      allow_list,
      base_url,
    }
  }

  /// Resolves `url` against the page, keeping the raw value when it does
  /// not parse.
  pub(crate) fn resolve(&self, url: &str) -> String {
    self
      .base_url
      .join(url.trim())
      .map_or_else(|_| url.to_string(), |url| url.to_string())
  }
}
