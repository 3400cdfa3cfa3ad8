use super::*;

/// The node to detach for a matched element.
///
/// A parent `<li>`, or a parent `<div>`/`<span>` whose only element child is
/// the match, is removed in its place so no empty wrapper is left behind.
/// This looks exactly one level up.
pub(crate) fn removal_target(page: &Page, id: NodeId) -> Option<NodeId> {
  let element = page.element(id)?;

  let Some(parent) = element.parent().and_then(ElementRef::wrap) else {
    return Some(id);
  };

  let wraps_only_match = || {
    parent
      .children()
      .filter(|child| child.value().is_element())
      .count()
      == 1
  };

  match parent.value().name() {
    "li" => Some(parent.id()),
    "div" | "span" if wraps_only_match() => Some(parent.id()),
    _ => Some(id),
  }
}

/// Removes a matched element, or its single-purpose wrapper.
///
/// Returns the detached node, or `None` when the element was already gone.
pub(crate) fn remove(page: &mut Page, id: NodeId) -> Option<NodeId> {
  if !page.is_attached(id) {
    return None;
  }

  let target = removal_target(page, id)?;

  page.detach(target).then_some(target)
}
