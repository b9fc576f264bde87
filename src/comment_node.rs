use super::*;

const INDENT: &str = "  ";

const UNKNOWN_AUTHOR: &str = "unknown";

/// One node of an item's comment tree, as served by the Algolia items API.
///
/// The story itself has the same shape, so a fetched item is flattened
/// starting from its root.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct CommentNode {
  pub author: Option<String>,
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub children: Vec<Option<CommentNode>>,
  pub created_at: Option<String>,
  pub text: Option<String>,
}

impl CommentNode {
  /// Method form of [`flatten`].
  ///
  /// # Errors
  ///
  /// Returns [`Error::MalformedTimestamp`] if any emitted node carries an
  /// unparseable `created_at`.
  pub fn flatten(
    &self,
    limits: ThreadLimits,
    current_depth: usize,
  ) -> Result<Vec<String>> {
    flatten(Some(self), limits, current_depth)
  }

  fn line(&self, depth: usize) -> Result<Option<String>> {
    let Some(text) = self.text.as_deref().filter(|text| !text.is_empty())
    else {
      return Ok(None);
    };

    let created_at = self.created_at.as_deref().unwrap_or_default();

    let timestamp = format_timestamp(&parse_timestamp(created_at)?);

    let author = self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR);

    let text = decode_entities(text);

    Ok(Some(format!(
      "{}[{timestamp}] {author}: {text}",
      INDENT.repeat(depth)
    )))
  }

  fn push_lines(
    &self,
    limits: ThreadLimits,
    depth: usize,
    lines: &mut Vec<String>,
  ) -> Result {
    if depth > limits.max_depth {
      return Ok(());
    }

    if let Some(line) = self.line(depth)? {
      lines.push(line);
    }

    for child in self.children.iter().take(limits.max_children).flatten() {
      child.push_lines(limits, depth + 1, lines)?;
    }

    Ok(())
  }
}

/// Flattens a comment tree into depth-indented lines in pre-order.
///
/// Nodes deeper than `limits.max_depth` and children past
/// `limits.max_children` are dropped along with their whole subtree. A null
/// child takes up a slot but emits nothing. A node without text emits
/// nothing but its children are still visited.
///
/// # Errors
///
/// Returns [`Error::MalformedTimestamp`] if any emitted node carries an
/// unparseable `created_at`. No lines are returned in that case.
pub fn flatten(
  node: Option<&CommentNode>,
  limits: ThreadLimits,
  current_depth: usize,
) -> Result<Vec<String>> {
  let mut lines = Vec::new();

  if let Some(node) = node {
    node.push_lines(limits, current_depth, &mut lines)?;
  }

  Ok(lines)
}
