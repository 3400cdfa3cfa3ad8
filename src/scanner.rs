use super::*;

/// A single removal performed during a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removal {
  pub heuristic: &'static str,
  /// Tag of the element the heuristic matched.
  pub matched: String,
  /// Tag of the node actually detached, which is the matched element or its
  /// wrapper.
  pub removed: String,
  pub verdict: Verdict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
  pub removals: Vec<Removal>,
}

impl ScanReport {
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.removals.is_empty()
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.removals.len()
  }
}

/// Runs every heuristic over a page and removes what they match.
pub struct Scanner {
  context: Context,
  heuristics: Vec<Box<dyn Heuristic>>,
}

impl Scanner {
  fn add_heuristic(&mut self, heuristic: Box<dyn Heuristic>) {
    self.heuristics.push(heuristic);
  }

  /// The first allowed platform any heuristic attributes `element` to.
  fn allowed_platform(&self, element: ElementRef<'_>) -> Option<&'static str> {
    self
      .heuristics
      .iter()
      .filter(|heuristic| heuristic.candidates().matches(&element))
      .find_map(|heuristic| heuristic.allowed_platform(element, &self.context))
  }

  #[must_use]
  pub fn blocked(&self) -> &BlockedDomains {
    self.context.blocked()
  }

  /// A scanner using the default heuristics, in their default order.
  #[must_use]
  pub fn new(allow_list: AllowList, base_url: Url) -> Self {
    Self::with_default_heuristics(Context::new(allow_list, base_url))
  }

  /// Classifies and removes social media elements from the current
  /// document.
  ///
  /// Each heuristic runs in turn over a snapshot of its candidates; a
  /// candidate already detached by an earlier removal is skipped. Running a
  /// scan again on the same document removes nothing further.
  pub fn scan(&self, page: &mut Page) -> ScanReport {
    let mut report = ScanReport::default();

    for heuristic in &self.heuristics {
      for id in page.select_with(heuristic.candidates()) {
        let Some(element) = page.element(id).filter(|_| page.is_attached(id))
        else {
          trace!(heuristic = heuristic.name(), "skipping detached candidate");
          continue;
        };

        let verdict = heuristic.classify(element, &self.context);

        if !verdict.is_match() {
          continue;
        }

        if let Some(platform) = self.allowed_platform(element) {
          debug!(
            heuristic = heuristic.name(),
            platform, "keeping element of allowed platform"
          );
          continue;
        }

        let matched = element.value().name().to_string();

        let Some(target) = removal::remove(page, id) else {
          continue;
        };

        let removed = page
          .element(target)
          .map(|element| element.value().name().to_string())
          .unwrap_or_default();

        debug!(
          heuristic = heuristic.name(),
          ?verdict,
          %matched,
          %removed,
          "removed social media element"
        );

        report.removals.push(Removal {
          heuristic: heuristic.name(),
          matched,
          removed,
          verdict,
        });
      }
    }

    info!(
      removed = report.len(),
      elements = page.element_count(),
      "scan complete"
    );

    report
  }

  pub(crate) fn with_default_heuristics(context: Context) -> Self {
    let mut scanner = Self {
      context,
      heuristics: Vec::new(),
    };

    scanner.add_heuristic(Box::new(LinkHeuristic));
    scanner.add_heuristic(Box::new(IconClassHeuristic));
    scanner.add_heuristic(Box::new(LabelHeuristic));
    scanner.add_heuristic(Box::new(ImageSourceHeuristic));
    scanner.add_heuristic(Box::new(ShareWidgetHeuristic));
    scanner.add_heuristic(Box::new(FrameHeuristic));

    scanner
  }
}
