use super::*;

/// A story rendered as a plain-text evidence document.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct WebSource {
  pub text: Option<String>,
  pub title: Option<String>,
  pub url: Option<String>,
}

impl Display for WebSource {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for field in [&self.url, &self.title, &self.text] {
      writeln!(f, "{}", field.as_deref().unwrap_or("None"))?;
    }

    Ok(())
  }
}

impl WebSource {
  /// Joins flattened thread lines with newlines. No lines means no text.
  #[must_use]
  pub fn from_thread(
    url: Option<String>,
    title: Option<String>,
    lines: Vec<String>,
  ) -> Self {
    Self {
      text: (!lines.is_empty()).then(|| lines.join("\n")),
      title,
      url,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_thread_has_no_text() {
    let source = WebSource::from_thread(
      Some("https://news.ycombinator.com/item?id=1".to_string()),
      Some("Quiet".to_string()),
      Vec::new(),
    );

    assert_eq!(source.text, None);
  }

  #[test]
  fn lines_are_newline_joined() {
    let source = WebSource::from_thread(
      None,
      None,
      vec!["[2024-01-01 00:00] a: x".to_string(), "  [2024-01-01 00:01] b: y".to_string()],
    );

    assert_eq!(
      source.text.as_deref(),
      Some("[2024-01-01 00:00] a: x\n  [2024-01-01 00:01] b: y")
    );
  }

  #[test]
  fn display_prints_each_field_on_its_own_line() {
    let source = WebSource {
      text: None,
      title: Some("Example".to_string()),
      url: Some("https://news.ycombinator.com/item?id=123".to_string()),
    };

    assert_eq!(
      source.to_string(),
      "https://news.ycombinator.com/item?id=123\nExample\nNone\n"
    );
  }

  #[test]
  fn serializes_absent_fields_as_null() {
    let source = WebSource::from_thread(None, Some("T".to_string()), Vec::new());

    assert_eq!(
      serde_json::to_value(&source).unwrap(),
      serde_json::json!({"text": null, "title": "T", "url": null})
    );
  }
}
