use super::*;

/// A parsed HTML page together with its location and the mutation records
/// produced since they were last taken.
///
/// Node ids handed out by a page stay valid after the node is detached, so
/// every method accepts ids of nodes that are no longer in the document.
pub struct Page {
  html: Html,
  records: Vec<MutationRecord>,
  url: Url,
}

impl Page {
  /// Parses `markup` and appends its top-level nodes to the first element
  /// matching `parent_selector`, as a script on the page would.
  pub fn append_html(
    &mut self,
    parent_selector: &str,
    markup: &str,
  ) -> Result<Vec<NodeId>> {
    let selector = Self::parse_selector(parent_selector)?;

    let parent = self
      .select_with(&selector)
      .into_iter()
      .next()
      .ok_or_else(|| Error::MissingParent {
        selector: parent_selector.to_string(),
      })?;

    let fragment = Html::parse_fragment(markup);

    let added = fragment
      .root_element()
      .children()
      .filter_map(|child| Self::graft(&mut self.html.tree, parent, child))
      .collect::<Vec<NodeId>>();

    if !added.is_empty() && self.is_observed(parent) {
      self
        .records
        .push(MutationRecord::addition(parent, added.clone()));
    }

    Ok(added)
  }

  fn body(&self) -> Option<NodeId> {
    self
      .html
      .root_element()
      .children()
      .filter_map(ElementRef::wrap)
      .find(|element| element.value().name() == "body")
      .map(|element| element.id())
  }

  pub fn count(&self, selector: &str) -> Result<usize> {
    Ok(self.select(selector)?.len())
  }

  /// Removes the node with `id` from the document.
  ///
  /// Returns `false` without touching anything when the node is already
  /// detached, so removals are idempotent.
  pub fn detach(&mut self, id: NodeId) -> bool {
    if !self.is_attached(id) {
      return false;
    }

    let Some(parent) = self
      .html
      .tree
      .get(id)
      .and_then(|node| node.parent())
      .map(|parent| parent.id())
    else {
      return false;
    };

    let observed = self.is_observed(parent);

    let Some(mut node) = self.html.tree.get_mut(id) else {
      return false;
    };

    node.detach();

    if observed {
      self.records.push(MutationRecord::removal(parent, id));
    }

    true
  }

  #[must_use]
  pub fn element(&self, id: NodeId) -> Option<ElementRef<'_>> {
    self.html.tree.get(id).and_then(ElementRef::wrap)
  }

  #[must_use]
  pub fn element_count(&self) -> usize {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter(|node| node.value().is_element())
      .count()
  }

  fn graft(
    tree: &mut Tree<Node>,
    parent: NodeId,
    source: NodeRef<'_, Node>,
  ) -> Option<NodeId> {
    let id = tree.get_mut(parent)?.append(source.value().clone()).id();

    for child in source.children() {
      Self::graft(tree, id, child);
    }

    Some(id)
  }

  /// The page's host with a leading `www.` removed.
  #[must_use]
  pub fn hostname(&self) -> Option<&str> {
    self.url.host_str().map(strip_www)
  }

  /// Serializes the current document.
  #[must_use]
  pub fn html(&self) -> String {
    self.html.html()
  }

  #[must_use]
  pub fn is_attached(&self, id: NodeId) -> bool {
    let root = self.html.tree.root().id();

    self.html.tree.get(id).is_some_and(|node| {
      node.id() == root || node.ancestors().any(|ancestor| ancestor.id() == root)
    })
  }

  fn is_observed(&self, target: NodeId) -> bool {
    let Some(body) = self.body() else {
      return false;
    };

    self.html.tree.get(target).is_some_and(|node| {
      node.id() == body || node.ancestors().any(|ancestor| ancestor.id() == body)
    })
  }

  pub fn parse(markup: &str, url: &str) -> Result<Self> {
    Ok(Self {
      html: Html::parse_document(markup),
      records: Vec::new(),
      url: Url::parse(url)?,
    })
  }

  fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
      .map_err(|error| Error::InvalidSelector(error.to_string()))
  }

  #[must_use]
  pub fn pending_records(&self) -> &[MutationRecord] {
    &self.records
  }

  /// Detaches every element matching `selector`, returning how many were
  /// removed.
  pub fn remove_matching(&mut self, selector: &str) -> Result<usize> {
    let ids = self.select(selector)?;

    Ok(ids.into_iter().filter(|id| self.detach(*id)).count())
  }

  pub fn select(&self, selector: &str) -> Result<Vec<NodeId>> {
    Ok(self.select_with(&Self::parse_selector(selector)?))
  }

  /// Elements in the document matching `selector`, in document order.
  ///
  /// Only nodes reachable from the root are visited, so detached subtrees
  /// are neither returned nor walked again by later scans.
  pub(crate) fn select_with(&self, selector: &Selector) -> Vec<NodeId> {
    self
      .html
      .tree
      .root()
      .descendants()
      .filter_map(ElementRef::wrap)
      .filter(|element| selector.matches(element))
      .map(|element| element.id())
      .collect()
  }

  /// Drains the records accumulated since the previous call, as one batch.
  pub fn take_records(&mut self) -> Vec<MutationRecord> {
    std::mem::take(&mut self.records)
  }

  #[must_use]
  pub fn url(&self) -> &Url {
    &self.url
  }
}
