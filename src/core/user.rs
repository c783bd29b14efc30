use std::fmt;

use serde::{Serialize, Serializer, Deserialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub type UserId = i64;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("user record has no `id` field")]
    MissingId,
    #[error("user record id {0} is not an integer")]
    NonIntegerId(Value)
}

/// A single user record. Only `id` is interpreted; the record itself
/// is kept whole and written back exactly as it was read, key order
/// included.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct User {
    id: UserId,
    record: Map<String, Value>,
}

impl User {
    pub fn new(id: UserId) -> User {
        let mut record = Map::new();
        record.insert("id".to_owned(), Value::from(id));
        User { id, record }
    }

    /// Appends a field after the existing ones. `id` cannot be set this way.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> User {
        debug_assert_ne!(key, "id");
        if key != "id" {
            self.record.insert(key.to_owned(), value.into());
        }
        return self;
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.record.get(key)
    }

    /// The whole record, `id` included, in stored order.
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

impl TryFrom<Map<String, Value>> for User {
    type Error = RecordError;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match record.get("id") {
            None => return Err(RecordError::MissingId),
            Some(value) => value.as_i64()
                .ok_or_else(|| RecordError::NonIntegerId(value.clone()))?
        };
        return Ok(User { id, record });
    }
}

impl Serialize for User {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get("name").and_then(Value::as_str) {
            Some(name) => write!(f, "{} ({})", name, self.id),
            None => write!(f, "{}", self.id)
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {}", self.id)
    }
}

/// Reads a user id from a path segment the way `parseInt` does with no
/// radix: leading whitespace and an optional sign, then either a `0x`
/// prefix and hex digits or plain decimal digits, as many as there are.
/// Anything after the digits is ignored, so `"7abc"` and `"1.5"` still
/// yield 7 and 1. Returns `None` when there are no digits at all or the
/// value does not fit a `UserId`.
pub fn parse_user_id(raw: &str) -> Option<UserId> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let negative = trimmed.starts_with('-');

    let (digits, radix) = match unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (unsigned, 10)
    };

    let digits_len = digits.bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let sign = if negative { "-" } else { "" };
    return UserId::from_str_radix(&format!("{}{}", sign, &digits[..digits_len]), radix).ok();
}
