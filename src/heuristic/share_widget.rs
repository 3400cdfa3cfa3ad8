use super::*;

static CANDIDATES: LazyLock<Selector> =
  selector!("body [class], body [id]");

/// Generic "share this" and "follow us" containers.
///
/// These rarely carry brand-specific classes, so the element has to look
/// like a share widget by class or id and mention a platform in its text.
pub struct ShareWidgetHeuristic;

impl ShareWidgetHeuristic {
  fn is_share_widget(element: ElementRef<'_>) -> bool {
    let hint = joined_attrs(element, &["class", "id"]);

    re::SHARE_HINT.is_match(&hint) && re::SHARE_WORD.is_match(&hint)
  }

  fn text(element: ElementRef<'_>) -> String {
    element.text().collect()
  }
}

impl Heuristic for ShareWidgetHeuristic {
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str> {
    if !Self::is_share_widget(element) {
      return None;
    }

    context.allow_list().allowed_in(&Self::text(element))
  }

  fn candidates(&self) -> &Selector {
    &CANDIDATES
  }

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict {
    if !Self::is_share_widget(element) {
      return Verdict::NoMatch;
    }

    let text = Self::text(element);

    context.allow_list().judge(&text, re::BRAND_NAME.is_match(&text))
  }

  fn name(&self) -> &'static str {
    "share-widget"
  }
}
