//! Runs cache: a dual index keyed by run id and by owning test.

use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::trace;

use crate::dual_index::DualIndexStore;
use crate::entity::{Entity, EntityId};
use crate::model::{Access, Team};
use crate::patch::Patch;
use crate::suggestion::SuggestionQueue;

/// Schema id -> schema URI.
pub type RunSchemas = IndexMap<String, String>;

#[derive(Debug, Clone)]
pub enum RunsEvent {
    Loading,
    Loaded {
        run: Option<Entity>,
        total: Option<u64>,
    },
    /// A page of run summaries for one test.
    TestId {
        id: i64,
        runs: Vec<Entity>,
        total: u64,
    },
    LoadSuggestions {
        query: String,
    },
    Suggest {
        response_received: bool,
        options: Vec<String>,
    },
    SelectRoles {
        selection: Team,
    },
    UpdateToken {
        id: i64,
        test_id: i64,
        token: Option<String>,
    },
    UpdateAccess {
        id: i64,
        test_id: i64,
        owner: String,
        access: Access,
    },
    Trash {
        id: i64,
        test_id: i64,
        is_trashed: bool,
    },
    UpdateDescription {
        id: i64,
        test_id: i64,
        description: String,
    },
    UpdateSchema {
        id: i64,
        test_id: i64,
        schemas: RunSchemas,
    },
    UpdateDatasets {
        id: i64,
        test_id: i64,
        datasets: Vec<i64>,
    },
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunsState {
    pub loading: bool,
    pub runs: DualIndexStore,
    pub current_total: u64,
    pub selected_roles: Option<Team>,
    pub suggest: SuggestionQueue,
}

impl Default for RunsState {
    fn default() -> Self {
        Self {
            loading: false,
            runs: DualIndexStore::with_group_defaults(summary_defaults()),
            current_total: 0,
            selected_roles: None,
            suggest: SuggestionQueue::default(),
        }
    }
}

impl RunsState {
    /// Run ids of the page shown last.
    pub fn current_page(&self) -> &[EntityId] {
        self.runs
            .current_page()
            .map(|page| page.ids.as_slice())
            .unwrap_or(&[])
    }
}

fn summary_defaults() -> Entity {
    let mut defaults = Entity::new();
    defaults.insert("data".into(), Value::String(String::new()));
    defaults.insert("schemas".into(), Value::Array(Vec::new()));
    defaults
}

fn fields(pairs: Value) -> Patch {
    match pairs {
        Value::Object(map) => Patch::Fields(map),
        _ => Patch::Fields(Entity::new()),
    }
}

pub fn reduce(state: &RunsState, event: RunsEvent) -> RunsState {
    let mut next = state.clone();
    match event {
        RunsEvent::Loading => next.loading = true,
        RunsEvent::Loaded { run, total } => {
            next.loading = false;
            if let Some(run) = run {
                next.runs.load([run]);
            }
            if let Some(total) = total.filter(|t| *t > 0) {
                next.current_total = total;
            }
        }
        RunsEvent::TestId { id, runs, total } => {
            next.loading = false;
            next.runs.load_group(EntityId::Int(id), runs, total);
            next.current_total = total;
        }
        RunsEvent::LoadSuggestions { query } => next.suggest.enqueue(query),
        RunsEvent::Suggest {
            response_received,
            options,
        } => next.suggest.resolve(options, response_received),
        RunsEvent::SelectRoles { selection } => next.selected_roles = Some(selection),
        RunsEvent::UpdateToken { id, test_id, token } => {
            update_run(&mut next, id, test_id, &fields(json!({ "token": token })));
        }
        RunsEvent::UpdateAccess {
            id,
            test_id,
            owner,
            access,
        } => {
            let patch = fields(json!({ "owner": owner, "access": access.to_value() }));
            update_run(&mut next, id, test_id, &patch);
        }
        RunsEvent::Trash {
            id,
            test_id,
            is_trashed,
        } => {
            update_run(&mut next, id, test_id, &fields(json!({ "trashed": is_trashed })));
        }
        RunsEvent::UpdateDescription {
            id,
            test_id,
            description,
        } => {
            let patch = fields(json!({ "description": description }));
            update_run(&mut next, id, test_id, &patch);
        }
        RunsEvent::UpdateSchema {
            id,
            test_id,
            schemas,
        } => {
            let schemas = json!(schemas);
            let patch = Patch::with(move |run| {
                let mut copy = run.clone();
                copy.insert("schema".into(), schemas.clone());
                copy
            });
            update_run(&mut next, id, test_id, &patch);
        }
        RunsEvent::UpdateDatasets {
            id,
            test_id,
            datasets,
        } => {
            update_run(&mut next, id, test_id, &fields(json!({ "datasets": datasets })));
        }
        RunsEvent::Unknown(kind) => trace!(kind = %kind, "ignoring unknown runs event"),
    }
    next
}

fn update_run(state: &mut RunsState, id: i64, test_id: i64, patch: &Patch) {
    let touched = state
        .runs
        .patch(&EntityId::Int(id), &EntityId::Int(test_id), patch);
    if !touched {
        trace!(run_id = id, test_id, "update for uncached run");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::into_entity;

    fn e(v: Value) -> Entity {
        into_entity(v).unwrap()
    }

    fn loaded_state() -> RunsState {
        let s = reduce(
            &RunsState::default(),
            RunsEvent::Loaded {
                run: Some(e(json!({"id": 1, "testid": 7, "data": {"x": 1}}))),
                total: None,
            },
        );
        reduce(
            &s,
            RunsEvent::TestId {
                id: 7,
                runs: vec![e(json!({"id": 1, "testid": 7})), e(json!({"id": 2, "testid": 7}))],
                total: 42,
            },
        )
    }

    #[test]
    fn loading_flag() {
        let s = reduce(&RunsState::default(), RunsEvent::Loading);
        assert!(s.loading);
        let s = reduce(&s, RunsEvent::Loaded { run: None, total: Some(3) });
        assert!(!s.loading);
        assert_eq!(s.current_total, 3);
    }

    #[test]
    fn zero_total_is_ignored_by_single_load() {
        let s = RunsState {
            current_total: 9,
            ..RunsState::default()
        };
        let s = reduce(&s, RunsEvent::Loaded { run: None, total: Some(0) });
        assert_eq!(s.current_total, 9);
    }

    #[test]
    fn test_page_sets_page_and_total() {
        let s = loaded_state();
        assert_eq!(s.current_page(), [EntityId::Int(1), EntityId::Int(2)]);
        assert_eq!(s.current_total, 42);
        let member = s.runs.group_member(&EntityId::Int(7), &EntityId::Int(1)).unwrap();
        assert_eq!(member.get("data"), Some(&json!("")));
    }

    #[test]
    fn trash_updates_both_copies() {
        let s = reduce(
            &loaded_state(),
            RunsEvent::Trash {
                id: 1,
                test_id: 7,
                is_trashed: true,
            },
        );
        assert_eq!(s.runs.get(&EntityId::Int(1)).unwrap().get("trashed"), Some(&json!(true)));
        assert_eq!(
            s.runs
                .group_member(&EntityId::Int(7), &EntityId::Int(1))
                .unwrap()
                .get("trashed"),
            Some(&json!(true))
        );
    }

    #[test]
    fn access_is_stored_as_code() {
        let s = reduce(
            &loaded_state(),
            RunsEvent::UpdateAccess {
                id: 2,
                test_id: 7,
                owner: "perf-team".into(),
                access: Access::Private,
            },
        );
        let run = s.runs.get(&EntityId::Int(2)).unwrap();
        assert_eq!(run.get("owner"), Some(&json!("perf-team")));
        assert_eq!(run.get("access"), Some(&json!(2)));
    }

    #[test]
    fn schema_update_uses_function_patch() {
        let mut schemas = RunSchemas::new();
        schemas.insert("5".into(), "urn:foo:1.0".into());
        let s = reduce(
            &loaded_state(),
            RunsEvent::UpdateSchema {
                id: 1,
                test_id: 7,
                schemas,
            },
        );
        let expected = json!({"5": "urn:foo:1.0"});
        assert_eq!(s.runs.get(&EntityId::Int(1)).unwrap().get("schema"), Some(&expected));
        assert_eq!(
            s.runs
                .group_member(&EntityId::Int(7), &EntityId::Int(1))
                .unwrap()
                .get("schema"),
            Some(&expected)
        );
    }

    #[test]
    fn token_can_be_dropped() {
        let s = reduce(
            &loaded_state(),
            RunsEvent::UpdateToken {
                id: 1,
                test_id: 7,
                token: None,
            },
        );
        assert_eq!(s.runs.get(&EntityId::Int(1)).unwrap().get("token"), Some(&Value::Null));
    }

    #[test]
    fn updates_to_uncached_runs_are_ignored() {
        let before = loaded_state();
        let after = reduce(
            &before,
            RunsEvent::UpdateDescription {
                id: 99,
                test_id: 7,
                description: "nope".into(),
            },
        );
        assert_eq!(after, before);
    }

    #[test]
    fn suggestions_flow() {
        let s = reduce(&RunsState::default(), RunsEvent::LoadSuggestions { query: "ab".into() });
        let s = reduce(&s, RunsEvent::LoadSuggestions { query: "abc".into() });
        let s = reduce(
            &s,
            RunsEvent::Suggest {
                response_received: true,
                options: vec!["$.abc".into()],
            },
        );
        assert_eq!(s.suggest.pending(), ["abc"]);
        assert_eq!(s.suggest.suggestions(), ["$.abc"]);
    }

    #[test]
    fn unknown_event_keeps_state() {
        let before = loaded_state();
        assert_eq!(reduce(&before, RunsEvent::Unknown("runs/other".into())), before);
    }

    #[test]
    fn previous_snapshot_survives_reduce() {
        let before = loaded_state();
        let _after = reduce(
            &before,
            RunsEvent::UpdateDatasets {
                id: 1,
                test_id: 7,
                datasets: vec![10, 11],
            },
        );
        assert_eq!(before.runs.get(&EntityId::Int(1)).unwrap().get("datasets"), None);
    }
}
