use super::*;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
  #[serde(default, deserialize_with = "deserialize_null_default")]
  pub hits: Vec<SearchHit>,
  #[serde(default, rename = "nbPages")]
  pub nb_pages: Option<usize>,
  #[serde(default)]
  pub page: Option<usize>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_hits_decode_as_empty() {
    let response = serde_json::from_str::<SearchResponse>("{}").unwrap();

    assert!(response.hits.is_empty());
    assert_eq!(response.nb_pages, None);
  }

  #[test]
  fn hits_keep_backend_order() {
    let response = serde_json::from_str::<SearchResponse>(
      r#"{
        "hits": [
          {"story_id": 3, "title": "newest"},
          {"story_id": 1, "title": "older"},
          {"story_id": 2, "title": "oldest"}
        ],
        "nbPages": 7,
        "page": 0
      }"#,
    )
    .unwrap();

    let ids = response
      .hits
      .iter()
      .map(|hit| hit.id().unwrap())
      .collect::<Vec<_>>();

    assert_eq!(ids, vec!["3", "1", "2"]);
    assert_eq!(response.nb_pages, Some(7));
    assert_eq!(response.page, Some(0));
  }
}
