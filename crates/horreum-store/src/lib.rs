//! Client-side cache for the horreum dashboard.
//!
//! Collections fetched from the server are normalized by id into an
//! [`EntityStore`]. Runs are additionally indexed by their owning test in a
//! [`DualIndexStore`]. State transitions are pure reducer functions
//! `(&State, Event) -> State`: each one clones the previous snapshot (cheap,
//! the maps are reference counted) and mutates the copy.
//!
//! Store operations never fail. Loading an entity without an id skips it,
//! and removing or patching an unknown id leaves the state as it was.

pub mod actions;
pub mod alerts;
pub mod dual_index;
pub mod entity;
pub mod entity_store;
pub mod model;
pub mod patch;
pub mod runs;
pub mod schemas;
pub mod state;
pub mod suggestion;

pub use alerts::{Alert, AlertsEvent, AlertsState};
pub use dual_index::{DualIndexStore, GroupId, Page};
pub use entity::{into_entity, Entity, EntityId, KeyPolicy};
pub use entity_store::EntityStore;
pub use model::{Access, Team};
pub use patch::Patch;
pub use state::{DashboardState, Event};
pub use suggestion::SuggestionQueue;
