use super::*;

/// Re-runs the scanner when the page gains new nodes.
///
/// Batches that only remove nodes are ignored, which keeps the scanner's own
/// removals from triggering another scan.
pub struct MutationWatcher {
  scanner: Scanner,
}

impl MutationWatcher {
  #[must_use]
  pub fn new(scanner: Scanner) -> Self {
    Self { scanner }
  }

  /// Handles one delivered batch, scanning at most once however many nodes
  /// it added.
  pub fn notify(
    &self,
    page: &mut Page,
    batch: &[MutationRecord],
  ) -> Option<ScanReport> {
    if !Self::should_rescan(batch) {
      trace!(records = batch.len(), "ignoring batch without added nodes");
      return None;
    }

    debug!(records = batch.len(), "rescanning after node insertion");

    Some(self.scanner.scan(page))
  }

  #[must_use]
  pub fn scanner(&self) -> &Scanner {
    &self.scanner
  }

  #[must_use]
  pub fn should_rescan(batch: &[MutationRecord]) -> bool {
    batch.iter().any(MutationRecord::adds_nodes)
  }
}
