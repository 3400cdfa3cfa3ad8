use super::*;

/// A child-list change below the observed `<body>` subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationRecord {
  pub added: Vec<NodeId>,
  pub removed: Vec<NodeId>,
  pub target: NodeId,
}

impl MutationRecord {
  pub(crate) fn addition(target: NodeId, added: Vec<NodeId>) -> Self {
    Self {
      added,
      removed: Vec::new(),
      target,
    }
  }

  #[must_use]
  pub fn adds_nodes(&self) -> bool {
    !self.added.is_empty()
  }

  pub(crate) fn removal(target: NodeId, removed: NodeId) -> Self {
    Self {
      added: Vec::new(),
      removed: vec![removed],
      target,
    }
  }
}
