//! Entity cache indexed both flat (by id) and by an owning group.
//!
//! Runs are listed per test: a test page load delivers run summaries that
//! belong in the test's group, while opening a single run delivers the full
//! run into the flat index. The two copies of one run are allowed to differ
//! in the fields their respective loads carry, but any targeted update must
//! reach both, and [`DualIndexStore::patch`] is the only way to do that.

use std::sync::Arc;

use horreum_util::merge::merge_fields;
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::entity::{Entity, EntityId};
use crate::entity_store::{apply_patch, EntityMap, EntityStore};
use crate::patch::Patch;

pub type GroupId = EntityId;

/// Ordered ids delivered by the most recent load of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub ids: Vec<EntityId>,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DualIndexStore {
    flat: EntityStore,
    groups: Arc<IndexMap<GroupId, Arc<EntityMap>>>,
    pages: Arc<IndexMap<GroupId, Page>>,
    current_group: Option<GroupId>,
    group_defaults: Arc<Entity>,
}

impl DualIndexStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields every group load resets before overlaying the incoming
    /// payload.
    pub fn with_group_defaults(defaults: Entity) -> Self {
        Self {
            group_defaults: Arc::new(defaults),
            ..Self::default()
        }
    }

    pub fn flat(&self) -> &EntityStore {
        &self.flat
    }

    pub fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.flat.get(id)
    }

    pub fn group_member(&self, group: &GroupId, id: &EntityId) -> Option<&Entity> {
        let key = self.flat.key_for(id);
        self.groups.get(group)?.get(&key).map(Arc::as_ref)
    }

    pub fn group_len(&self, group: &GroupId) -> usize {
        self.groups.get(group).map_or(0, |members| members.len())
    }

    pub fn group_ids(&self) -> impl Iterator<Item = &GroupId> {
        self.groups.keys()
    }

    pub fn page(&self, group: &GroupId) -> Option<&Page> {
        self.pages.get(group)
    }

    /// Page of the group loaded last.
    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current_group.as_ref()?)
    }

    /// Upserts into the flat index only.
    pub fn load<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = Entity>,
    {
        self.flat.load(entities);
    }

    /// Drops `id` from the flat index. Group copies and page listings keep
    /// referencing it until the next load of that group.
    pub fn remove(&mut self, id: &EntityId) -> bool {
        self.flat.remove(id)
    }

    /// Merges `entities` into the group and into the flat index and replaces
    /// the group's page with their ids, in the order given.
    pub fn load_group<I>(&mut self, group: GroupId, entities: I, total: u64)
    where
        I: IntoIterator<Item = Entity>,
    {
        let entities: Vec<Entity> = entities.into_iter().collect();
        let mut ids = Vec::with_capacity(entities.len());

        let groups = Arc::make_mut(&mut self.groups);
        let members = Arc::make_mut(groups.entry(group.clone()).or_default());
        for entity in &entities {
            let Some(id) = EntityId::of(entity) else {
                warn!(group = %group, "skipping group member without id");
                continue;
            };
            let key = self.flat.key_for(&id);
            let mut next = members
                .get(&key)
                .map(|existing| existing.as_ref().clone())
                .unwrap_or_default();
            merge_fields(&mut next, &self.group_defaults);
            merge_fields(&mut next, entity);
            members.insert(key.clone(), Arc::new(next));
            ids.push(key);
        }

        debug!(group = %group, members = ids.len(), total, "loaded group page");
        self.flat.load(entities);
        Arc::make_mut(&mut self.pages).insert(group.clone(), Page { ids, total });
        self.current_group = Some(group);
    }

    /// Applies `patch` to the flat copy of `id` and to its copy in `group`,
    /// whichever exist. Returns `false` when neither exists; nothing is
    /// created in that case.
    pub fn patch(&mut self, id: &EntityId, group: &GroupId, patch: &Patch) -> bool {
        let mut touched = self.flat.patch(id, patch);

        let key = self.flat.key_for(id);
        let in_group = self
            .groups
            .get(group)
            .is_some_and(|members| members.contains_key(&key));
        if in_group {
            let groups = Arc::make_mut(&mut self.groups);
            if let Some(members) = groups.get_mut(group) {
                touched |= apply_patch(Arc::make_mut(members), &key, patch);
            }
        }
        touched
    }
}
