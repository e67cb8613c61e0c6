//! Fetch-then-dispatch helpers.
//!
//! Each loader awaits the remote API and returns the events to feed into
//! [`horreum_store::DashboardState::dispatch_all`]. On failure the events
//! leave the cache usable and carry one alert.

use horreum_store::actions::ActionsEvent;
use horreum_store::runs::RunsEvent;
use horreum_store::Event;
use tracing::{debug, warn};

use crate::api::{DashboardApi, PageRequest, RunFilters, Test, View};
use crate::error::{AlertCategory, CompareError};

pub async fn fetch_test<A>(api: &A, test_id: i64) -> Result<Test, CompareError>
where
    A: DashboardApi + ?Sized,
{
    api.get_test(test_id)
        .await
        .map_err(|source| {
            warn!(test_id, error = %source, "test fetch failed");
            CompareError::Test { test_id, source }
        })
}

/// The view named `name`, normally [`crate::config::DEFAULT_VIEW_NAME`].
pub fn default_view<'a>(test: &'a Test, name: &str) -> Option<&'a View> {
    test.view_named(name)
}

pub async fn load_actions<A>(api: &A) -> Vec<Event>
where
    A: DashboardApi + ?Sized,
{
    match api.list_actions().await {
        Ok(actions) => {
            debug!(actions = actions.len(), "actions loaded");
            vec![ActionsEvent::Loaded { actions }.into()]
        }
        Err(err) => {
            warn!(error = %err, "actions fetch failed");
            vec![
                ActionsEvent::Loaded { actions: Vec::new() }.into(),
                AlertCategory::FetchActions.alert(&err).into(),
            ]
        }
    }
}

pub async fn load_run<A>(api: &A, run_id: i64) -> Vec<Event>
where
    A: DashboardApi + ?Sized,
{
    let mut events: Vec<Event> = vec![RunsEvent::Loading.into()];
    match api.get_run(run_id).await {
        Ok(run) => events.push(
            RunsEvent::Loaded {
                run: Some(run),
                total: None,
            }
            .into(),
        ),
        Err(err) => {
            warn!(run_id, error = %err, "run fetch failed");
            events.push(
                RunsEvent::Loaded {
                    run: None,
                    total: None,
                }
                .into(),
            );
            events.push(AlertCategory::FetchRun.alert(&err).into());
        }
    }
    events
}

pub async fn load_test_runs<A>(
    api: &A,
    test_id: i64,
    page: &PageRequest,
    filters: &RunFilters,
) -> Vec<Event>
where
    A: DashboardApi + ?Sized,
{
    let mut events: Vec<Event> = vec![RunsEvent::Loading.into()];
    match api.list_runs_for_test(test_id, page, filters).await {
        Ok(listing) => {
            debug!(test_id, runs = listing.runs.len(), total = listing.total, "runs page loaded");
            events.push(
                RunsEvent::TestId {
                    id: test_id,
                    runs: listing.runs,
                    total: listing.total,
                }
                .into(),
            );
        }
        Err(err) => {
            warn!(test_id, error = %err, "runs page fetch failed");
            events.push(
                RunsEvent::Loaded {
                    run: None,
                    total: None,
                }
                .into(),
            );
            events.push(AlertCategory::FetchRuns.alert(&err).into());
        }
    }
    events
}
