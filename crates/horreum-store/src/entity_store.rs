//! Normalized collection of entities keyed by id.
//!
//! The map lives behind an [`Arc`] and every entity behind its own [`Arc`],
//! so cloning a store is cheap and a mutation copies only the map spine and
//! the entities it actually touches ([`Arc::make_mut`] copy-on-write). A
//! reducer can therefore clone the previous state, mutate the clone and hand
//! back a new snapshot while older snapshots stay valid.

use std::sync::Arc;

use horreum_util::merge::merge_fields;
use indexmap::IndexMap;
use tracing::warn;

use crate::entity::{Entity, EntityId, KeyPolicy};
use crate::patch::Patch;

pub(crate) type EntityMap = IndexMap<EntityId, Arc<Entity>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityStore {
    policy: KeyPolicy,
    by_id: Arc<EntityMap>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_policy(policy: KeyPolicy) -> Self {
        Self {
            policy,
            by_id: Arc::default(),
        }
    }

    pub fn key_policy(&self) -> KeyPolicy {
        self.policy
    }

    /// Normalized map key for `id`.
    pub fn key_for(&self, id: &EntityId) -> EntityId {
        self.policy.key(id)
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.by_id.get(&self.key_for(id)).map(Arc::as_ref)
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.by_id.contains_key(&self.key_for(id))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EntityId, &Entity)> {
        self.by_id.iter().map(|(k, v)| (k, &**v))
    }

    /// `true` when both stores share the same underlying map.
    pub fn ptr_eq(&self, other: &EntityStore) -> bool {
        Arc::ptr_eq(&self.by_id, &other.by_id)
    }

    /// Upserts `entities`. An entity already present is shallow-merged with
    /// the incoming fields winning; a new one is inserted as-is. Entities
    /// without a usable `id` are skipped.
    pub fn load<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut entities = entities.into_iter().peekable();
        if entities.peek().is_none() {
            return;
        }
        let by_id = Arc::make_mut(&mut self.by_id);
        for entity in entities {
            let Some(id) = EntityId::of(&entity) else {
                warn!(fields = entity.len(), "skipping entity without id");
                continue;
            };
            upsert(by_id, self.policy.key(&id), &entity);
        }
    }

    /// Removes `id`. Returns `false` (and leaves the map untouched) when the
    /// id is not cached.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        let key = self.key_for(id);
        if !self.by_id.contains_key(&key) {
            return false;
        }
        Arc::make_mut(&mut self.by_id).shift_remove(&key);
        true
    }

    /// Applies `patch` to the cached entity. Unknown ids are left alone:
    /// patches never create entities.
    pub fn patch(&mut self, id: &EntityId, patch: &Patch) -> bool {
        let key = self.key_for(id);
        if !self.by_id.contains_key(&key) {
            return false;
        }
        apply_patch(Arc::make_mut(&mut self.by_id), &key, patch)
    }
}

pub(crate) fn upsert(map: &mut EntityMap, key: EntityId, entity: &Entity) {
    match map.get_mut(&key) {
        Some(existing) => merge_fields(Arc::make_mut(existing), entity),
        None => {
            map.insert(key, Arc::new(entity.clone()));
        }
    }
}

pub(crate) fn apply_patch(map: &mut EntityMap, key: &EntityId, patch: &Patch) -> bool {
    match map.get_mut(key) {
        Some(current) => {
            *current = Arc::new(patch.apply(current));
            true
        }
        None => false,
    }
}
