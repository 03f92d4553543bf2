//! Request-body validation for contact create and update.
//!
//! Bodies arrive as raw bytes so that a missing or empty body is judged here
//! instead of by a JSON extractor. Fields are checked in the order `name`,
//! `email`, `phone`, then unknown keys; the first failure is reported.

use std::sync::LazyLock;

use contacts_core::{ContactPatch, NewContact};
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

pub const NAME: &str = "name";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";

const FIELDS: [&str; 3] = [NAME, EMAIL, PHONE];

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 30;

// TODO: confirm with product whether this whitelist is a business rule or
// can be lifted to any public-suffix TLD.
pub const ALLOWED_TLDS: &[&str] = &["com", "net", "uk"];
const MIN_DOMAIN_SEGMENTS: usize = 2;
const MAX_EMAIL_LEN: usize = 254;
const MAX_LOCAL_LEN: usize = 64;

static PHONE_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$").expect("valid regex"));

/// RFC 5322 atext plus any non-ASCII character.
static LOCAL_ATOM: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]|[^\x00-\x7F])+$").expect("valid regex")
});

static DOMAIN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").expect("valid regex")
});

/// Why a request body was rejected. The display text is the message
/// returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Nieprawidłowy format JSON")]
  MalformedJson,

  #[error("Treść żądania musi być obiektem JSON")]
  NotAnObject,

  #[error("Brak wprowadzonych zmian")]
  NoChanges,

  #[error("\"{0}\" jest wymagane")]
  Required(&'static str),

  #[error("\"{0}\" musi być tekstem")]
  NotAString(&'static str),

  #[error("\"{0}\" nie może być puste")]
  Empty(&'static str),

  #[error("\"{field}\" musi mieć co najmniej {min} znaki")]
  TooShort { field: &'static str, min: usize },

  #[error("\"{field}\" może mieć co najwyżej {max} znaków")]
  TooLong { field: &'static str, max: usize },

  #[error("\"{0}\" musi być poprawnym adresem e-mail")]
  InvalidEmail(&'static str),

  #[error("\"{0}\" musi mieć format (XXX) XXX-XXXX")]
  InvalidPhone(&'static str),

  #[error("\"{0}\" nie jest dozwolone")]
  UnknownField(String),
}

// ─── Bodies ──────────────────────────────────────────────────────────────────

/// Validate a create body: all three fields required.
pub fn new_contact(body: &[u8]) -> Result<NewContact, ValidationError> {
  let map = parse_object(body)?;
  let name = required(&map, NAME)?;
  let email = required(&map, EMAIL)?;
  let phone = required(&map, PHONE)?;
  reject_unknown(&map)?;
  Ok(NewContact { name, email, phone })
}

/// Validate an update body: every field optional, at least one present.
pub fn contact_patch(body: &[u8]) -> Result<ContactPatch, ValidationError> {
  let map = parse_object(body)?;
  if map.is_empty() {
    return Err(ValidationError::NoChanges);
  }
  let name = optional(&map, NAME)?;
  let email = optional(&map, EMAIL)?;
  let phone = optional(&map, PHONE)?;
  reject_unknown(&map)?;
  Ok(ContactPatch { name, email, phone })
}

/// An empty or all-whitespace body counts as an empty object.
fn parse_object(body: &[u8]) -> Result<Map<String, Value>, ValidationError> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(Map::new());
  }
  match serde_json::from_slice(body) {
    Ok(Value::Object(map)) => Ok(map),
    Ok(_) => Err(ValidationError::NotAnObject),
    Err(_) => Err(ValidationError::MalformedJson),
  }
}

fn required(map: &Map<String, Value>, field: &'static str) -> Result<String, ValidationError> {
  optional(map, field)?.ok_or(ValidationError::Required(field))
}

fn optional(
  map: &Map<String, Value>,
  field: &'static str,
) -> Result<Option<String>, ValidationError> {
  let value = match map.get(field) {
    None => return Ok(None),
    Some(Value::String(s)) => s,
    Some(_) => return Err(ValidationError::NotAString(field)),
  };
  if value.is_empty() {
    return Err(ValidationError::Empty(field));
  }
  match field {
    NAME => check_name(value)?,
    EMAIL => check_email(value)?,
    PHONE => check_phone(value)?,
    _ => {}
  }
  Ok(Some(value.clone()))
}

fn reject_unknown(map: &Map<String, Value>) -> Result<(), ValidationError> {
  match map.keys().find(|k| !FIELDS.contains(&k.as_str())) {
    Some(key) => Err(ValidationError::UnknownField(key.clone())),
    None => Ok(()),
  }
}

// ─── Field rules ─────────────────────────────────────────────────────────────

pub fn check_name(name: &str) -> Result<(), ValidationError> {
  let len = name.chars().count();
  if len < NAME_MIN_CHARS {
    return Err(ValidationError::TooShort {
      field: NAME,
      min:   NAME_MIN_CHARS,
    });
  }
  if len > NAME_MAX_CHARS {
    return Err(ValidationError::TooLong {
      field: NAME,
      max:   NAME_MAX_CHARS,
    });
  }
  Ok(())
}

pub fn check_email(email: &str) -> Result<(), ValidationError> {
  if is_valid_email(email) {
    Ok(())
  } else {
    Err(ValidationError::InvalidEmail(EMAIL))
  }
}

pub fn check_phone(phone: &str) -> Result<(), ValidationError> {
  if PHONE_PATTERN.is_match(phone) {
    Ok(())
  } else {
    Err(ValidationError::InvalidPhone(PHONE))
  }
}

fn is_valid_email(email: &str) -> bool {
  if email.len() > MAX_EMAIL_LEN {
    return false;
  }
  let Some((local, domain)) = email.split_once('@') else {
    return false;
  };
  if domain.contains('@') {
    return false;
  }

  if local.len() > MAX_LOCAL_LEN || !local.split('.').all(|atom| LOCAL_ATOM.is_match(atom)) {
    return false;
  }

  let labels: Vec<&str> = domain.split('.').collect();
  if labels.len() < MIN_DOMAIN_SEGMENTS || !labels.iter().all(|l| DOMAIN_LABEL.is_match(l)) {
    return false;
  }
  labels
    .last()
    .is_some_and(|tld| ALLOWED_TLDS.iter().any(|allowed| allowed.eq_ignore_ascii_case(tld)))
}
