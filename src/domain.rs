use super::*;

/// Domains whose links, frames and embeds are removed from a page.
///
/// Derived once from the registry by leaving out every platform on the
/// allow-list, so a domain of an allowed platform can never appear here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDomains {
  domains: BTreeSet<&'static str>,
}

impl BlockedDomains {
  /// Whether `host` is a blocked domain or a subdomain of one.
  #[must_use]
  pub fn blocks_host(&self, host: &str) -> bool {
    let host = normalize_host(host);

    self
      .domains
      .iter()
      .any(|domain| host_matches(&host, domain))
  }

  /// Resolves `url` against `base` and checks its host.
  ///
  /// Missing, unparseable or host-less URLs never match.
  #[must_use]
  pub fn blocks_url(&self, url: Option<&str>, base: &Url) -> bool {
    let Some(url) = url else {
      return false;
    };

    let Ok(resolved) = base.join(url.trim()) else {
      trace!(url, "unparseable url treated as non-social");
      return false;
    };

    resolved
      .host_str()
      .is_some_and(|host| self.blocks_host(host))
  }

  #[must_use]
  pub fn contains(&self, domain: &str) -> bool {
    self.domains.contains(domain)
  }

  #[must_use]
  pub fn from_allow_list(allow_list: &AllowList) -> Self {
    let domains = platforms()
      .iter()
      .filter(|platform| !allow_list.contains(platform.name))
      .flat_map(|platform| platform.domains.iter().copied())
      .collect();

    Self { domains }
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.domains.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.domains.len()
  }
}

/// Exact or subdomain match; `notx.com` does not match `x.com`.
pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
  host == domain
    || host
      .strip_suffix(domain)
      .is_some_and(|prefix| prefix.ends_with('.'))
}

pub(crate) fn normalize_host(host: &str) -> String {
  strip_www(&host.to_lowercase()).to_string()
}
