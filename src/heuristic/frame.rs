use super::*;

static CANDIDATES: LazyLock<Selector> = selector!("iframe");

/// Embedded frames served from a blocked domain.
pub struct FrameHeuristic;

impl Heuristic for FrameHeuristic {
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str> {
    context
      .allow_list()
      .owner_of_url(element.value().attr("src"), context.base_url())
  }

  fn candidates(&self) -> &Selector {
    &CANDIDATES
  }

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict {
    if context
      .blocked()
      .blocks_url(element.value().attr("src"), context.base_url())
    {
      Verdict::MatchedGeneric
    } else {
      Verdict::NoMatch
    }
  }

  fn name(&self) -> &'static str {
    "frame"
  }
}
