use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Visibility of an owned entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    /// Numeric form stored in entity payloads.
    pub fn code(self) -> u8 {
        match self {
            Access::Public => 0,
            Access::Protected => 1,
            Access::Private => 2,
        }
    }

    pub fn to_value(self) -> Value {
        Value::from(self.code())
    }
}

/// Role selection used to filter run listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub key: String,
    pub label: String,
}
