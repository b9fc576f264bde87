/// Bounds applied while flattening a comment tree.
///
/// `max_depth` is inclusive: a node at exactly `max_depth` still emits its
/// line, its children do not. `max_children` caps how many children of
/// each node are visited, in their original order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ThreadLimits {
  pub max_children: usize,
  pub max_depth: usize,
}

impl Default for ThreadLimits {
  fn default() -> Self {
    Self {
      max_children: 3,
      max_depth: 3,
    }
  }
}
