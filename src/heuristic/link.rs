use super::*;

static CANDIDATES: LazyLock<Selector> = selector!("a[href]");

/// Links whose destination is a blocked domain.
///
/// The blocked set already leaves out allowed platforms, so a match here is
/// reported as generic.
pub struct LinkHeuristic;

impl Heuristic for LinkHeuristic {
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str> {
    context
      .allow_list()
      .owner_of_url(element.value().attr("href"), context.base_url())
  }

  fn candidates(&self) -> &Selector {
    &CANDIDATES
  }

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict {
    if context
      .blocked()
      .blocks_url(element.value().attr("href"), context.base_url())
    {
      Verdict::MatchedGeneric
    } else {
      Verdict::NoMatch
    }
  }

  fn name(&self) -> &'static str {
    "link"
  }
}
