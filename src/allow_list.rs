use super::*;

/// Snapshot of the platforms the user keeps visible.
///
/// This is the one place that decides whether a detection is overridden by
/// the allow-list; every heuristic goes through [`AllowList::judge`] or
/// [`AllowList::allowed_in`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
  platforms: BTreeSet<String>,
}

impl AllowList {
  /// An allowed platform whose name fragment occurs in `text`, if any.
  #[must_use]
  pub fn allowed_in(&self, text: &str) -> Option<&'static str> {
    fragment_platforms(text).find(|platform| self.contains(platform))
  }

  #[must_use]
  pub fn contains(&self, platform: &str) -> bool {
    self.platforms.contains(platform)
  }

  /// Turns a raw detection over `text` into a verdict.
  ///
  /// Any allowed platform named in `text` wins over the detection. Otherwise
  /// a detected element is attributed to the first platform named in `text`,
  /// or reported as a generic match when none is.
  #[must_use]
  pub fn judge(&self, text: &str, detected: bool) -> Verdict {
    if !detected || self.allowed_in(text).is_some() {
      return Verdict::NoMatch;
    }

    resolve_fragment(text)
      .map_or(Verdict::MatchedGeneric, Verdict::MatchedPlatform)
  }

  pub fn new<I, S>(platforms: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      platforms: platforms.into_iter().map(Into::into).collect(),
    }
  }

  /// The platform owning the host of `url`, if that platform is allowed.
  #[must_use]
  pub fn owner_of_url(
    &self,
    url: Option<&str>,
    base: &Url,
  ) -> Option<&'static str> {
    let resolved = base.join(url?.trim()).ok()?;

    platform_for_host(resolved.host_str()?)
      .map(|platform| platform.name)
      .filter(|name| self.contains(name))
  }
}
