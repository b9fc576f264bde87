use {super::*, anyhow::Context};

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  /// Item requests allowed in flight at once. 1 fetches strictly in order.
  pub concurrency: usize,
  pub item_url: String,
  pub limits: ThreadLimits,
  pub search_url: String,
  pub site_url: String,
  /// Per-request timeout.
  pub timeout: Duration,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      concurrency: 1,
      item_url: Self::ITEM_URL.to_string(),
      limits: ThreadLimits::default(),
      search_url: Self::SEARCH_URL.to_string(),
      site_url: Self::SITE_URL.to_string(),
      timeout: Self::TIMEOUT,
    }
  }
}

impl Config {
  const CONCURRENCY_VAR: &str = "HN_SOURCES_CONCURRENCY";

  const ITEM_URL: &str = "https://hn.algolia.com/api/v1/items";

  const ITEM_URL_VAR: &str = "HN_SOURCES_ITEM_URL";

  const SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search_by_date";

  const SEARCH_URL_VAR: &str = "HN_SOURCES_SEARCH_URL";

  const SITE_URL: &str = "https://news.ycombinator.com";

  const SITE_URL_VAR: &str = "HN_SOURCES_SITE_URL";

  const TIMEOUT: Duration = Duration::from_secs(30);

  const TIMEOUT_VAR: &str = "HN_SOURCES_TIMEOUT_SECS";

  /// Defaults overlaid with `HN_SOURCES_*` environment variables.
  ///
  /// # Errors
  ///
  /// Fails if a numeric variable does not parse.
  pub fn from_env() -> anyhow::Result<Self> {
    Self::from_lookup(|key| env::var(key).ok())
  }

  pub(crate) fn from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
  ) -> anyhow::Result<Self> {
    let mut config = Self::default();

    if let Some(url) = lookup(Self::SEARCH_URL_VAR) {
      config.search_url = url;
    }

    if let Some(url) = lookup(Self::ITEM_URL_VAR) {
      config.item_url = url;
    }

    if let Some(url) = lookup(Self::SITE_URL_VAR) {
      config.site_url = url;
    }

    if let Some(secs) = lookup(Self::TIMEOUT_VAR) {
      config.timeout = Duration::from_secs(
        secs
          .trim()
          .parse()
          .with_context(|| format!("invalid {}: `{secs}`", Self::TIMEOUT_VAR))?,
      );
    }

    if let Some(count) = lookup(Self::CONCURRENCY_VAR) {
      config.concurrency = count.trim().parse().with_context(|| {
        format!("invalid {}: `{count}`", Self::CONCURRENCY_VAR)
      })?;
    }

    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::collections::HashMap};

  fn lookup(
    pairs: &[(&'static str, &'static str)],
  ) -> impl Fn(&str) -> Option<String> {
    let map = pairs.iter().copied().collect::<HashMap<_, _>>();

    move |key| map.get(key).map(ToString::to_string)
  }

  #[test]
  fn defaults_point_at_algolia_and_hacker_news() {
    let config = Config::default();

    assert_eq!(config.search_url, "https://hn.algolia.com/api/v1/search_by_date");
    assert_eq!(config.item_url, "https://hn.algolia.com/api/v1/items");
    assert_eq!(config.site_url, "https://news.ycombinator.com");
    assert_eq!(config.concurrency, 1);
    assert_eq!(config.limits, ThreadLimits::default());
  }

  #[test]
  fn environment_overrides_defaults() {
    let config = Config::from_lookup(lookup(&[
      ("HN_SOURCES_SEARCH_URL", "http://localhost:1/search"),
      ("HN_SOURCES_ITEM_URL", "http://localhost:1/items"),
      ("HN_SOURCES_SITE_URL", "http://localhost:1"),
      ("HN_SOURCES_TIMEOUT_SECS", " 5 "),
      ("HN_SOURCES_CONCURRENCY", "4"),
    ]))
    .unwrap();

    assert_eq!(config.search_url, "http://localhost:1/search");
    assert_eq!(config.item_url, "http://localhost:1/items");
    assert_eq!(config.site_url, "http://localhost:1");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.concurrency, 4);
  }

  #[test]
  fn unparseable_numbers_are_reported() {
    let error =
      Config::from_lookup(lookup(&[("HN_SOURCES_TIMEOUT_SECS", "soon")]))
        .unwrap_err();

    assert_eq!(error.to_string(), "invalid HN_SOURCES_TIMEOUT_SECS: `soon`");
  }
}
