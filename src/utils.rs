use super::*;

const LEGACY_ENTITIES: &[(&str, char)] = &[
  ("amp", '&'),
  ("copy", '\u{a9}'),
  ("gt", '>'),
  ("lt", '<'),
  ("nbsp", '\u{a0}'),
  ("quot", '"'),
  ("reg", '\u{ae}'),
];

/// Decodes HTML character references in a single pass.
///
/// Terminated references go through `html_escape`. The common legacy
/// references that browsers accept without a trailing `;` (`&amp`, `&copy`,
/// `&#39`, ...) are decoded here. Anything else is kept verbatim.
pub(crate) fn decode_entities(text: &str) -> String {
  let mut decoded = String::with_capacity(text.len());
  let mut rest = text;

  while let Some(start) = rest.find('&') {
    decoded.push_str(&rest[..start]);
    rest = &rest[start..];

    let body = &rest[1..];

    let name_len = body
      .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '#'))
      .unwrap_or(body.len());

    let name = &body[..name_len];

    if !name.is_empty() && body[name_len..].starts_with(';') {
      let reference = &rest[..name_len + 2];
      decoded.push_str(&html_escape::decode_html_entities(reference));
      rest = &rest[name_len + 2..];
    } else if let Some((ch, consumed)) = legacy_reference(name) {
      decoded.push(ch);
      rest = &rest[1 + consumed..];
    } else {
      decoded.push('&');
      rest = body;
    }
  }

  decoded.push_str(rest);

  decoded
}

pub(crate) fn deserialize_null_default<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn deserialize_optional_string<'de, D>(
  deserializer: D,
) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  let value = Option::<Value>::deserialize(deserializer)?;

  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s)),
    Some(Value::Number(n)) => Ok(Some(n.to_string())),
    Some(Value::Bool(b)) => Err(de::Error::invalid_type(
      Unexpected::Bool(b),
      &"string or number",
    )),
    Some(Value::Array(_)) => Err(de::Error::invalid_type(
      Unexpected::Seq,
      &"string or number",
    )),
    Some(Value::Object(_)) => Err(de::Error::invalid_type(
      Unexpected::Map,
      &"string or number",
    )),
  }
}

fn legacy_reference(name: &str) -> Option<(char, usize)> {
  if let Some(number) = name.strip_prefix('#') {
    let (digits, radix, prefix) = match number.strip_prefix(['x', 'X']) {
      Some(hex) => (hex, 16, 2),
      None => (number, 10, 1),
    };

    let len = digits
      .find(|ch: char| !ch.is_digit(radix))
      .unwrap_or(digits.len());

    let ch = u32::from_str_radix(&digits[..len], radix)
      .ok()
      .and_then(char::from_u32)?;

    return Some((ch, prefix + len));
  }

  LEGACY_ENTITIES
    .iter()
    .filter(|(entity, _)| name.starts_with(*entity))
    .max_by_key(|(entity, _)| entity.len())
    .map(|(entity, ch)| (*ch, entity.len()))
}
