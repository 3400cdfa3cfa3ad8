use super::*;

static CANDIDATES: LazyLock<Selector> = selector!("i, span, svg, img");

/// Icon elements named after a platform by icon-font or theme conventions,
/// such as `fa-twitter`, `icon-linkedin` or `social-icon`.
pub struct IconClassHeuristic;

impl IconClassHeuristic {
  fn class(element: ElementRef<'_>) -> &str {
    element.value().attr("class").unwrap_or_default()
  }
}

impl Heuristic for IconClassHeuristic {
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str> {
    let class = Self::class(element);

    if re::ICON_CLASS.is_match(class) {
      context.allow_list().allowed_in(class)
    } else {
      None
    }
  }

  fn candidates(&self) -> &Selector {
    &CANDIDATES
  }

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict {
    let class = Self::class(element);

    context
      .allow_list()
      .judge(class, re::ICON_CLASS.is_match(class))
  }

  fn name(&self) -> &'static str {
    "icon-class"
  }
}
