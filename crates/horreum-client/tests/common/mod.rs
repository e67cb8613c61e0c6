//! In-memory [`DashboardApi`] for integration tests.
//!
//! Replies are either ready up front or deferred behind a oneshot channel so
//! a test can decide when, and in which order, fetches complete.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::channel::oneshot;
use horreum_client::{
    ApiError, DashboardApi, DatasetSummary, LabelValue, PageRequest, RunFilters, RunsPage, Test,
};
use horreum_store::{into_entity, Entity};
use serde_json::Value;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

type Reply<T> = Result<T, ApiError>;

enum Slot<T> {
    Ready(Reply<T>),
    Deferred(oneshot::Receiver<Reply<T>>),
}

fn not_found(what: &str, id: i64) -> ApiError {
    ApiError::Http {
        status: 404,
        message: format!("{what} {id} not found"),
    }
}

fn take<T: Clone>(slots: &Mutex<HashMap<i64, Slot<T>>>, id: i64, what: &str) -> Slot<T> {
    let mut slots = slots.lock().unwrap();
    if let Some(Slot::Ready(reply)) = slots.get(&id) {
        return Slot::Ready(reply.clone());
    }
    slots
        .remove(&id)
        .unwrap_or_else(|| Slot::Ready(Err(not_found(what, id))))
}

async fn wait<T>(slot: Slot<T>) -> Reply<T> {
    match slot {
        Slot::Ready(reply) => reply,
        Slot::Deferred(rx) => rx
            .await
            .unwrap_or_else(|_| Err(ApiError::Transport("request dropped".into()))),
    }
}

/// Counts `WARN` events emitted on the current thread.
struct WarnCounter(Arc<AtomicUsize>);

impl Subscriber for WarnCounter {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

/// Runs `f` and returns its result with the number of warnings it logged.
pub fn count_warnings<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let count = Arc::new(AtomicUsize::new(0));
    let result = tracing::subscriber::with_default(WarnCounter(count.clone()), f);
    (result, count.load(Ordering::SeqCst))
}

pub fn labels(pairs: &[(&str, Value)]) -> Vec<LabelValue> {
    pairs
        .iter()
        .map(|(name, value)| LabelValue::new(*name, value.clone()))
        .collect()
}

pub fn entity(value: Value) -> Entity {
    into_entity(value).unwrap()
}

pub fn server_error() -> ApiError {
    ApiError::Http {
        status: 500,
        message: "Internal Server Error".into(),
    }
}

#[derive(Default)]
pub struct FakeApi {
    labels: Mutex<HashMap<i64, Slot<Vec<LabelValue>>>>,
    summaries: Mutex<HashMap<i64, Slot<DatasetSummary>>>,
    tests: Mutex<HashMap<i64, Test>>,
    actions: Mutex<Option<Reply<Vec<Entity>>>>,
    runs: Mutex<HashMap<i64, Entity>>,
    pages: Mutex<HashMap<i64, RunsPage>>,
    label_calls: Mutex<Vec<i64>>,
    view_calls: Mutex<Vec<(i64, i64)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(self, dataset_id: i64, values: Vec<LabelValue>) -> Self {
        self.set_labels(dataset_id, Ok(values));
        self
    }

    pub fn with_failing_labels(self, dataset_id: i64, err: ApiError) -> Self {
        self.set_labels(dataset_id, Err(err));
        self
    }

    pub fn set_labels(&self, dataset_id: i64, reply: Reply<Vec<LabelValue>>) {
        self.labels
            .lock()
            .unwrap()
            .insert(dataset_id, Slot::Ready(reply));
    }

    /// The next label fetch for `dataset_id` waits until the returned sender
    /// fires.
    pub fn defer_labels(&self, dataset_id: i64) -> oneshot::Sender<Reply<Vec<LabelValue>>> {
        let (tx, rx) = oneshot::channel();
        self.labels
            .lock()
            .unwrap()
            .insert(dataset_id, Slot::Deferred(rx));
        tx
    }

    pub fn with_summary(self, dataset_id: i64, view: Value) -> Self {
        let summary: DatasetSummary =
            serde_json::from_value(serde_json::json!({ "view": view, "id": dataset_id })).unwrap();
        self.summaries
            .lock()
            .unwrap()
            .insert(dataset_id, Slot::Ready(Ok(summary)));
        self
    }

    pub fn with_failing_summary(self, dataset_id: i64, err: ApiError) -> Self {
        self.summaries
            .lock()
            .unwrap()
            .insert(dataset_id, Slot::Ready(Err(err)));
        self
    }

    pub fn with_test(self, test: Test) -> Self {
        self.tests.lock().unwrap().insert(test.id, test);
        self
    }

    pub fn with_actions(self, reply: Reply<Vec<Entity>>) -> Self {
        *self.actions.lock().unwrap() = Some(reply);
        self
    }

    pub fn with_run(self, run: Entity) -> Self {
        let id = run.get("id").and_then(Value::as_i64).unwrap();
        self.runs.lock().unwrap().insert(id, run);
        self
    }

    pub fn with_runs_page(self, test_id: i64, page: RunsPage) -> Self {
        self.pages.lock().unwrap().insert(test_id, page);
        self
    }

    pub fn label_calls(&self) -> Vec<i64> {
        self.label_calls.lock().unwrap().clone()
    }

    pub fn view_calls(&self) -> Vec<(i64, i64)> {
        self.view_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn fetch_label_values(&self, dataset_id: i64) -> Result<Vec<LabelValue>, ApiError> {
        self.label_calls.lock().unwrap().push(dataset_id);
        let slot = take(&self.labels, dataset_id, "dataset");
        wait(slot).await
    }

    async fn get_view_summary(
        &self,
        dataset_id: i64,
        view_id: i64,
    ) -> Result<DatasetSummary, ApiError> {
        self.view_calls.lock().unwrap().push((dataset_id, view_id));
        let slot = take(&self.summaries, dataset_id, "dataset");
        wait(slot).await
    }

    async fn get_test(&self, test_id: i64) -> Result<Test, ApiError> {
        let test = self.tests.lock().unwrap().get(&test_id).cloned();
        test.ok_or_else(|| not_found("test", test_id))
    }

    async fn list_actions(&self) -> Result<Vec<Entity>, ApiError> {
        let reply = self.actions.lock().unwrap().clone();
        reply.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_run(&self, run_id: i64) -> Result<Entity, ApiError> {
        let run = self.runs.lock().unwrap().get(&run_id).cloned();
        run.ok_or_else(|| not_found("run", run_id))
    }

    async fn list_runs_for_test(
        &self,
        test_id: i64,
        _page: &PageRequest,
        _filters: &RunFilters,
    ) -> Result<RunsPage, ApiError> {
        let page = self.pages.lock().unwrap().get(&test_id).cloned();
        page.ok_or_else(|| not_found("test", test_id))
    }
}
