//! Root state container: every mutation of the cache goes through
//! [`DashboardState::dispatch`], one event at a time.

use crate::actions::{self, ActionsEvent, ActionsState};
use crate::alerts::{self, Alert, AlertsEvent, AlertsState};
use crate::runs::{self, RunsEvent, RunsState};
use crate::schemas::{self, SchemasEvent, SchemasState};

#[derive(Debug, Clone)]
pub enum Event {
    Runs(RunsEvent),
    Actions(ActionsEvent),
    Schemas(SchemasEvent),
    Alerts(AlertsEvent),
}

impl From<RunsEvent> for Event {
    fn from(event: RunsEvent) -> Self {
        Event::Runs(event)
    }
}

impl From<ActionsEvent> for Event {
    fn from(event: ActionsEvent) -> Self {
        Event::Actions(event)
    }
}

impl From<SchemasEvent> for Event {
    fn from(event: SchemasEvent) -> Self {
        Event::Schemas(event)
    }
}

impl From<AlertsEvent> for Event {
    fn from(event: AlertsEvent) -> Self {
        Event::Alerts(event)
    }
}

impl From<Alert> for Event {
    fn from(alert: Alert) -> Self {
        Event::Alerts(AlertsEvent::Add(alert))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub runs: RunsState,
    pub actions: ActionsState,
    pub schemas: SchemasState,
    pub alerts: AlertsState,
}

impl DashboardState {
    pub fn dispatch(&mut self, event: impl Into<Event>) {
        *self = reduce(self, event.into());
    }

    pub fn dispatch_all<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            self.dispatch(event);
        }
    }
}

/// Routes `event` to the reducer of its slice; the other slices are shared
/// with the previous snapshot.
pub fn reduce(state: &DashboardState, event: Event) -> DashboardState {
    let mut next = state.clone();
    match event {
        Event::Runs(e) => next.runs = runs::reduce(&state.runs, e),
        Event::Actions(e) => next.actions = actions::reduce(&state.actions, e),
        Event::Schemas(e) => next.schemas = schemas::reduce(&state.schemas, e),
        Event::Alerts(e) => next.alerts = alerts::reduce(&state.alerts, e),
    }
    next
}
