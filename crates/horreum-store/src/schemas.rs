use serde_json::{Map, Value};
use tracing::trace;

use crate::entity::{Entity, EntityId};
use crate::entity_store::EntityStore;
use crate::model::Access;
use crate::patch::Patch;

#[derive(Debug, Clone)]
pub enum SchemasEvent {
    Loaded { schemas: Vec<Entity> },
    Delete { id: i64 },
    UpdateToken { id: i64, token: Option<String> },
    UpdateAccess { id: i64, owner: String, access: Access },
    Unknown(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchemasState {
    pub by_id: Option<EntityStore>,
}

impl SchemasState {
    pub fn get(&self, id: i64) -> Option<&Entity> {
        self.by_id.as_ref()?.get(&EntityId::Int(id))
    }
}

pub fn reduce(state: &SchemasState, event: SchemasEvent) -> SchemasState {
    let mut next = state.clone();
    match event {
        SchemasEvent::Loaded { schemas } => {
            next.by_id.get_or_insert_with(EntityStore::new).load(schemas);
        }
        SchemasEvent::Delete { id } => {
            if let Some(store) = next.by_id.as_mut() {
                store.remove(&EntityId::Int(id));
            }
        }
        SchemasEvent::UpdateToken { id, token } => {
            let mut fields = Map::new();
            fields.insert("token".into(), token.map_or(Value::Null, Value::String));
            patch_schema(&mut next, id, Patch::Fields(fields));
        }
        SchemasEvent::UpdateAccess { id, owner, access } => {
            let mut fields = Map::new();
            fields.insert("owner".into(), Value::String(owner));
            fields.insert("access".into(), access.to_value());
            patch_schema(&mut next, id, Patch::Fields(fields));
        }
        SchemasEvent::Unknown(kind) => trace!(kind = %kind, "ignoring unknown schemas event"),
    }
    next
}

fn patch_schema(state: &mut SchemasState, id: i64, patch: Patch) {
    if let Some(store) = state.by_id.as_mut() {
        store.patch(&EntityId::Int(id), &patch);
    }
}
