use horreum_store::runs::{self, RunsEvent, RunsState};
use horreum_store::{into_entity, Entity, EntityId, EntityStore};
use serde_json::{json, Value};

fn e(v: Value) -> Entity {
    into_entity(v).expect("object literal")
}

#[test]
fn sequential_loads_merge_fields() {
    let mut store = EntityStore::new();
    store.load([e(json!({"id": 1, "name": "a"}))]);
    store.load([e(json!({"id": 1, "owner": "x"}))]);
    let expected = e(json!({"id": 1, "name": "a", "owner": "x"}));
    assert_eq!(store.get(&EntityId::Int(1)), Some(&expected));
}

#[test]
fn removed_run_stays_on_the_current_page() {
    let mut store = horreum_store::DualIndexStore::new();
    store.load_group(EntityId::Int(7), [e(json!({"id": 1})), e(json!({"id": 2}))], 2);
    store.remove(&EntityId::Int(1));
    assert!(store.get(&EntityId::Int(1)).is_none());
    assert_eq!(
        store.page(&EntityId::Int(7)).map(|p| p.ids.clone()),
        Some(vec![EntityId::Int(1), EntityId::Int(2)])
    );

    store.load_group(EntityId::Int(7), [e(json!({"id": 2}))], 1);
    assert_eq!(store.page(&EntityId::Int(7)).map(|p| p.ids.clone()), Some(vec![EntityId::Int(2)]));
}

#[test]
fn typeahead_keeps_latest_query() {
    let s = RunsState::default();
    let s = runs::reduce(&s, RunsEvent::LoadSuggestions { query: "ab".into() });
    let s = runs::reduce(&s, RunsEvent::LoadSuggestions { query: "abc".into() });
    assert_eq!(s.suggest.pending(), ["ab", "abc"]);

    let opts = vec!["$.abc.x".to_string(), "$.abc.y".to_string()];
    let s = runs::reduce(
        &s,
        RunsEvent::Suggest {
            response_received: true,
            options: opts.clone(),
        },
    );
    assert_eq!(s.suggest.pending(), ["abc"]);
    assert_eq!(s.suggest.suggestions(), opts.as_slice());
}

#[test]
fn page_listing_then_run_detail() {
    let s = runs::reduce(&RunsState::default(), RunsEvent::Loading);
    let s = runs::reduce(
        &s,
        RunsEvent::TestId {
            id: 10,
            runs: vec![
                e(json!({"id": 100, "testid": 10, "start": 1})),
                e(json!({"id": 101, "testid": 10, "start": 2})),
            ],
            total: 2,
        },
    );
    assert!(!s.loading);
    let s = runs::reduce(
        &s,
        RunsEvent::Loaded {
            run: Some(e(json!({"id": 100, "data": {"throughput": 12.5}}))),
            total: None,
        },
    );
    let detail = s.runs.get(&EntityId::Int(100)).expect("run cached");
    assert_eq!(detail.get("start"), Some(&json!(1)));
    assert_eq!(detail.get("data"), Some(&json!({"throughput": 12.5})));

    let summary = s
        .runs
        .group_member(&EntityId::Int(10), &EntityId::Int(100))
        .expect("summary cached");
    assert_eq!(summary.get("data"), Some(&json!("")));
    assert_eq!(s.current_page(), [EntityId::Int(100), EntityId::Int(101)]);
}
