use super::*;

#[derive(Clone, Debug)]
pub struct Client {
  client: reqwest::Client,
  config: Config,
}

impl Client {
  pub const DEFAULT_LIMIT: usize = 5;

  /// Fetches one story with its full comment tree.
  ///
  /// # Errors
  ///
  /// Returns [`Error::ItemRequest`] on transport failure, a non-success
  /// status or an undecodable body.
  pub async fn fetch_item(&self, story_id: &str) -> Result<CommentNode> {
    let url = format!("{}/{story_id}", self.config.item_url.trim_end_matches('/'));

    tracing::debug!(story_id, "fetching item");

    let response = async {
      self
        .client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<CommentNode>()
        .await
    };

    response.await.map_err(|source| Error::ItemRequest {
      source,
      story_id: story_id.to_string(),
    })
  }

  async fn fetch_source(&self, hit: SearchHit) -> Result<WebSource> {
    let story_id = hit.id()?.to_string();

    let item = self.fetch_item(&story_id).await?;

    let lines = item.flatten(self.config.limits, 0)?;

    tracing::debug!(%story_id, lines = lines.len(), "flattened comment thread");

    Ok(WebSource::from_thread(
      Some(permalink(&self.config.site_url, &story_id)),
      hit.title,
      lines,
    ))
  }

  /// Searches for stories matching `query` and turns each into a
  /// [`WebSource`], in the order the search returned them.
  ///
  /// Issues one search call followed by one item call per hit. The first
  /// failure aborts the whole operation and no further item calls are
  /// started.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EmptyQuery`] or [`Error::InvalidLimit`] for bad input,
  /// [`Error::SearchRequest`] or [`Error::ItemRequest`] when a call fails,
  /// and [`Error::MalformedTimestamp`] when a comment cannot be rendered.
  pub async fn fetch_sources(
    &self,
    query: &str,
    limit: usize,
  ) -> Result<Vec<WebSource>> {
    let hits = self.search(query, limit).await?;

    let sources = stream::iter(hits.into_iter().map(|hit| self.fetch_source(hit)))
      .buffered(self.config.concurrency.max(1))
      .try_collect::<Vec<_>>()
      .await?;

    tracing::info!(query, sources = sources.len(), "collected web sources");

    Ok(sources)
  }

  /// # Errors
  ///
  /// Returns [`Error::ClientBuild`] if the HTTP client cannot be
  /// constructed.
  pub fn new(config: Config) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(Error::ClientBuild)?;

    Ok(Self { client, config })
  }

  /// Runs one page of a by-date story search restricted to stories that
  /// have comments.
  ///
  /// # Errors
  ///
  /// Returns [`Error::EmptyQuery`] or [`Error::InvalidLimit`] before any
  /// request is made, and [`Error::SearchRequest`] if the call fails.
  pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
    if query.is_empty() {
      return Err(Error::EmptyQuery);
    }

    if limit == 0 {
      return Err(Error::InvalidLimit);
    }

    tracing::debug!(query, limit, "searching stories");

    let hits_per_page = limit.to_string();

    let response = async {
      self
        .client
        .get(&self.config.search_url)
        .query(&[
          ("query", query),
          ("tags", "story"),
          ("numericFilters", "num_comments>0"),
          ("hitsPerPage", hits_per_page.as_str()),
          ("page", "0"),
        ])
        .send()
        .await?
        .error_for_status()?
        .json::<SearchResponse>()
        .await
    };

    let response = response.await.map_err(|source| Error::SearchRequest {
      query: query.to_string(),
      source,
    })?;

    tracing::info!(
      query,
      hits = response.hits.len(),
      pages = ?response.nb_pages,
      "search returned"
    );

    Ok(response.hits)
  }
}

/// Fetches sources with the default configuration.
///
/// # Errors
///
/// See [`Client::fetch_sources`].
pub async fn fetch_sources(query: &str, limit: usize) -> Result<Vec<WebSource>> {
  Client::new(Config::default())?
    .fetch_sources(query, limit)
    .await
}

/// Public discussion link for a story.
#[must_use]
pub fn permalink(site_url: &str, story_id: &str) -> String {
  format!("{}/item?id={story_id}", site_url.trim_end_matches('/'))
}
