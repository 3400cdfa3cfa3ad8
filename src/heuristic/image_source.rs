use super::*;

static CANDIDATES: LazyLock<Selector> = selector!("img");

/// Images whose source or alt text names a platform, like logo sprites and
/// badge images.
pub struct ImageSourceHeuristic;

impl ImageSourceHeuristic {
  fn source_and_alt(
    element: ElementRef<'_>,
    context: &Context,
  ) -> (String, String) {
    let source = element
      .value()
      .attr("src")
      .map(|src| context.resolve(src))
      .unwrap_or_default();

    let alt = element.value().attr("alt").unwrap_or_default().to_string();

    (source, alt)
  }
}

impl Heuristic for ImageSourceHeuristic {
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str> {
    let (source, alt) = Self::source_and_alt(element, context);

    context.allow_list().allowed_in(&format!("{source} {alt}"))
  }

  fn candidates(&self) -> &Selector {
    &CANDIDATES
  }

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict {
    let (source, alt) = Self::source_and_alt(element, context);

    let detected =
      re::BRAND_NAME.is_match(&source) || re::BRAND_NAME.is_match(&alt);

    context
      .allow_list()
      .judge(&format!("{source} {alt}"), detected)
  }

  fn name(&self) -> &'static str {
    "image-source"
  }
}
