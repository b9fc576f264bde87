//! Turn Hacker News discussions into plain-text evidence documents.
//!
//! A query is run against the Algolia search API, every matching story's
//! comment tree is fetched and flattened into an indented transcript, and
//! each story comes back as a [`WebSource`].

use {
  chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime},
  futures::stream::{self, StreamExt, TryStreamExt},
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  std::{
    env,
    fmt::{self, Display, Formatter},
    time::Duration,
  },
  utils::{
    decode_entities, deserialize_null_default, deserialize_optional_string,
  },
};

pub use {
  client::{Client, fetch_sources, permalink},
  comment_node::{CommentNode, flatten},
  config::Config,
  error::Error,
  search_hit::SearchHit,
  search_response::SearchResponse,
  thread_limits::ThreadLimits,
  timestamp::{ParsedTimestamp, format_timestamp, parse_timestamp},
  web_source::WebSource,
};

mod client;
mod comment_node;
mod config;
mod error;
mod search_hit;
mod search_response;
mod thread_limits;
mod timestamp;
mod utils;
mod web_source;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
