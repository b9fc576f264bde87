use super::*;

/// One story matched by the search call.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SearchHit {
  #[serde(
    default,
    deserialize_with = "deserialize_optional_string",
    rename = "objectID"
  )]
  pub object_id: Option<String>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  pub story_id: Option<String>,
  pub title: Option<String>,
}

impl SearchHit {
  /// The story to fetch. A story's object id is its story id, so that is
  /// used when `story_id` is missing.
  ///
  /// # Errors
  ///
  /// Returns [`Error::MissingStoryId`] if the hit carries neither.
  pub fn id(&self) -> Result<&str> {
    self
      .story_id
      .as_deref()
      .or(self.object_id.as_deref())
      .ok_or(Error::MissingStoryId)
  }
}
