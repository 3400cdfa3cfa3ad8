use super::*;

macro_rules! selector {
  ($selector:expr) => {
    LazyLock::new(|| Selector::parse($selector).unwrap())
  };
}

mod frame;
mod icon_class;
mod image_source;
mod label;
mod link;
mod share_widget;

pub use {
  frame::FrameHeuristic, icon_class::IconClassHeuristic,
  image_source::ImageSourceHeuristic, label::LabelHeuristic,
  link::LinkHeuristic, share_widget::ShareWidgetHeuristic,
};

/// One independent way of recognising social media markup.
pub trait Heuristic {
  /// The platform an element is attributed to by this heuristic, when that
  /// platform is on the allow-list. Such an element is never removed, no
  /// matter what other heuristics conclude.
  fn allowed_platform(
    &self,
    element: ElementRef<'_>,
    context: &Context,
  ) -> Option<&'static str>;

  /// Elements this heuristic knows how to inspect.
  fn candidates(&self) -> &Selector;

  fn classify(&self, element: ElementRef<'_>, context: &Context) -> Verdict;

  fn name(&self) -> &'static str;
}

/// `name` attribute values joined by spaces, missing ones read as empty.
fn joined_attrs(element: ElementRef<'_>, names: &[&str]) -> String {
  names
    .iter()
    .map(|name| element.value().attr(name).unwrap_or_default())
    .collect::<Vec<_>>()
    .join(" ")
}

#[cfg(test)]
fn fixture(body: &str, allowed: &[&str]) -> (Html, Context) {
  let html = Html::parse_document(&format!("<html><body>{body}</body></html>"));

  let context = Context::new(
    AllowList::new(allowed.iter().copied()),
    Url::parse("https://news.example.org/story").unwrap(),
  );

  (html, context)
}

#[cfg(test)]
fn verdicts(
  heuristic: &dyn Heuristic,
  body: &str,
  allowed: &[&str],
) -> Vec<Verdict> {
  let (html, context) = fixture(body, allowed);

  html
    .select(heuristic.candidates())
    .map(|element| heuristic.classify(element, &context))
    .collect()
}
