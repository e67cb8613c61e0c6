//! Cache of configured event actions (webhooks, notifications, ...).
//!
//! Action ids arrive as numbers but the collection is keyed by their string
//! form, so lookups by `12` and `"12"` hit the same entry.

use tracing::trace;

use crate::entity::{Entity, EntityId, KeyPolicy};
use crate::entity_store::EntityStore;

#[derive(Debug, Clone)]
pub enum ActionsEvent {
    Loaded { actions: Vec<Entity> },
    Delete { id: i64 },
    Unknown(String),
}

/// `by_id` is `None` until the first listing arrives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionsState {
    pub by_id: Option<EntityStore>,
}

impl ActionsState {
    pub fn get(&self, id: i64) -> Option<&Entity> {
        self.by_id.as_ref()?.get(&EntityId::Int(id))
    }
}

pub fn reduce(state: &ActionsState, event: ActionsEvent) -> ActionsState {
    let mut next = state.clone();
    match event {
        ActionsEvent::Loaded { actions } => {
            next.by_id
                .get_or_insert_with(|| EntityStore::with_key_policy(KeyPolicy::StringCoerced))
                .load(actions);
        }
        ActionsEvent::Delete { id } => {
            if let Some(store) = next.by_id.as_mut() {
                store.remove(&EntityId::Int(id));
            }
        }
        ActionsEvent::Unknown(kind) => trace!(kind = %kind, "ignoring unknown actions event"),
    }
    next
}
