use super::*;

static CANDIDATES: LazyLock<Selector> = selector!("svg");

const LABEL_ATTRIBUTES: &[&str] = &["aria-label", "title", "alt"];

/// Vector graphics whose accessible label names a platform.
pub struct LabelHeuristic;

impl Heuristic for LabelHeuristic {
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str> {
    context
      .allow_list()
      .allowed_in(&joined_attrs(element, LABEL_ATTRIBUTES))
  }

  fn candidates(&self) -> &Selector {
    &CANDIDATES
  }

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict {
    let label = joined_attrs(element, LABEL_ATTRIBUTES);

    context.allow_list().judge(&label, re::BRAND_NAME.is_match(&label))
  }

  fn name(&self) -> &'static str {
    "label"
  }
}
