use std::fmt;
use std::sync::Arc;

use horreum_util::merge::merged;

use crate::entity::Entity;

/// A targeted update of a cached entity.
///
/// The same `Patch` value is applied to every copy of the entity, so all
/// indices agree on the patched fields afterwards.
#[derive(Clone)]
pub enum Patch {
    /// Field-wise overwrite, other fields are kept.
    Fields(Entity),
    /// Pure transformation of the whole entity.
    With(Arc<dyn Fn(&Entity) -> Entity + Send + Sync>),
}

impl Patch {
    pub fn fields(fields: Entity) -> Self {
        Patch::Fields(fields)
    }

    pub fn with<F>(f: F) -> Self
    where
        F: Fn(&Entity) -> Entity + Send + Sync + 'static,
    {
        Patch::With(Arc::new(f))
    }

    pub fn apply(&self, current: &Entity) -> Entity {
        match self {
            Patch::Fields(fields) => merged(current, fields),
            Patch::With(f) => f(current),
        }
    }
}

impl fmt::Debug for Patch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Patch::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Patch::With(_) => f.write_str("With(<fn>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::into_entity;
    use serde_json::json;

    #[test]
    fn fields_merge_over_current() {
        let current = into_entity(json!({"id": 1, "trashed": false, "owner": "a"})).unwrap();
        let patch = Patch::fields(into_entity(json!({"trashed": true})).unwrap());
        let out = patch.apply(&current);
        assert_eq!(out.get("trashed"), Some(&json!(true)));
        assert_eq!(out.get("owner"), Some(&json!("a")));
    }

    #[test]
    fn function_sees_current_value() {
        let current = into_entity(json!({"id": 1, "datasets": [1]})).unwrap();
        let patch = Patch::with(|e| {
            let mut copy = e.clone();
            copy.insert("datasets".into(), json!([1, 2]));
            copy
        });
        assert_eq!(patch.apply(&current).get("datasets"), Some(&json!([1, 2])));
        assert_eq!(format!("{patch:?}"), "With(<fn>)");
    }
}
