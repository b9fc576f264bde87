use super::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

const NAIVE_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f%:z",
  "%Y-%m-%d %H:%M:%S%.f%:z",
  "%Y-%m-%dT%H:%M%:z",
  "%Y-%m-%d %H:%M%:z",
];

/// An ISO-8601 timestamp as written, with or without a UTC offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParsedTimestamp {
  Naive(NaiveDateTime),
  Offset(DateTime<FixedOffset>),
}

impl ParsedTimestamp {
  /// Wall-clock time in the timestamp's own offset. Never converted.
  #[must_use]
  pub fn naive_local(&self) -> NaiveDateTime {
    match self {
      Self::Naive(datetime) => *datetime,
      Self::Offset(datetime) => datetime.naive_local(),
    }
  }
}

/// Renders `YYYY-MM-DD HH:MM`.
#[must_use]
pub fn format_timestamp(timestamp: &ParsedTimestamp) -> String {
  timestamp.naive_local().format(DISPLAY_FORMAT).to_string()
}

/// Parses an ISO-8601 date or date-time.
///
/// A trailing `Z` is rewritten to `+00:00` before parsing.
///
/// # Errors
///
/// Returns [`Error::MalformedTimestamp`] if no supported layout matches.
pub fn parse_timestamp(input: &str) -> Result<ParsedTimestamp> {
  let normalized = match input.strip_suffix('Z') {
    Some(rest) => format!("{rest}+00:00"),
    None => input.to_string(),
  };

  for format in OFFSET_FORMATS {
    if let Ok(datetime) = DateTime::parse_from_str(&normalized, format) {
      return Ok(ParsedTimestamp::Offset(datetime));
    }
  }

  for format in NAIVE_FORMATS {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(&normalized, format) {
      return Ok(ParsedTimestamp::Naive(datetime));
    }
  }

  match NaiveDate::parse_from_str(&normalized, DATE_FORMAT) {
    Ok(date) => Ok(ParsedTimestamp::Naive(date.and_time(NaiveTime::default()))),
    Err(source) => Err(Error::malformed_timestamp(input, source)),
  }
}
