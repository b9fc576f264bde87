#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to build HTTP client")]
  ClientBuild(#[source] reqwest::Error),
  #[error("search query must not be empty")]
  EmptyQuery,
  #[error("result limit must be at least 1")]
  InvalidLimit,
  #[error("failed to fetch item {story_id}")]
  ItemRequest {
    #[source]
    source: reqwest::Error,
    story_id: String,
  },
  #[error("malformed comment timestamp `{timestamp}`")]
  MalformedTimestamp {
    #[source]
    source: chrono::ParseError,
    timestamp: String,
  },
  #[error("search hit has neither a story id nor an object id")]
  MissingStoryId,
  #[error("search request for `{query}` failed")]
  SearchRequest {
    query: String,
    #[source]
    source: reqwest::Error,
  },
}

impl Error {
  pub(crate) fn malformed_timestamp(
    timestamp: &str,
    source: chrono::ParseError,
  ) -> Self {
    Self::MalformedTimestamp {
      source,
      timestamp: timestamp.to_string(),
    }
  }
}
