use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cached record (run, action, schema, ...). Only `id` is interpreted by
/// the store, everything else is opaque payload.
pub type Entity = Map<String, Value>;

/// Identity of an entity inside one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Int(i64),
    Str(String),
}

impl EntityId {
    /// Reads the `id` field of `entity`. Integral numbers and strings are
    /// accepted; anything else means the entity has no usable identity.
    pub fn of(entity: &Entity) -> Option<EntityId> {
        match entity.get("id")? {
            Value::Number(n) => n.as_i64().map(EntityId::Int),
            Value::String(s) => Some(EntityId::Str(s.clone())),
            _ => None,
        }
    }

    /// `1` and `"1"` collapse onto the same key.
    pub fn to_string_key(&self) -> EntityId {
        match self {
            EntityId::Str(_) => self.clone(),
            EntityId::Int(n) => EntityId::Str(n.to_string()),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Int(n) => write!(f, "{n}"),
            EntityId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId::Int(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        EntityId::Str(id.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        EntityId::Str(id)
    }
}

/// How a collection normalizes ids into map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyPolicy {
    /// Keys are used as they arrive.
    #[default]
    Native,
    /// Every key is coerced to its string form.
    StringCoerced,
}

impl KeyPolicy {
    pub fn key(self, id: &EntityId) -> EntityId {
        match self {
            KeyPolicy::Native => id.clone(),
            KeyPolicy::StringCoerced => id.to_string_key(),
        }
    }
}

/// Converts a JSON value into an entity. Non-objects yield `None`.
pub fn into_entity(value: Value) -> Option<Entity> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
