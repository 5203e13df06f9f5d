//! # Scripted Navigation Session
//!
//! Drives the example app through the interactions a user would perform
//! and records a snapshot after each one:
//!
//! 1. The persons tab mounts.
//! 2. A profile is pushed, a second screen is pushed and popped.
//! 3. A sheet is presented and dismissed.
//! 4. A button switches to the random tab and opens its home screen once
//!    the tab acknowledges it is mounted.
//! 5. A transient profile flow opens above the tabs and closes again.
//! 6. A deep link switches back to the persons tab; the follow-up push
//!    runs on the timer because that tab is already mounted.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::Serialize;

use navkit_core::{NavigationConfig, NavkitError, Route, SheetStyle};
use navkit_registry::DestinationRegistry;
use navkit_state::{Router, RouterManager, RouterState};

use crate::app::{AppDestination, AppFlow, PersonStore, RandomDestination};
use crate::view::{build_registry, TextView};

/// State of the whole app after one step.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// What the user just did.
    pub step: String,
    /// The active flow.
    pub selected_flow: AppFlow,
    /// The flow active before the last switch.
    pub previous_flow: Option<AppFlow>,
    /// State of every registered router.
    pub routers: BTreeMap<AppFlow, RouterState<AppDestination>>,
    /// What the selected flow shows on top, resolved through the registry.
    pub visible: Option<TextView>,
    /// How many dismiss actions have run so far.
    pub dismiss_actions_run: usize,
}

/// The example app's navigation objects.
pub struct Session {
    manager: RouterManager<AppFlow, AppDestination>,
    registry: DestinationRegistry<TextView>,
    dismiss_actions_run: Arc<AtomicUsize>,
    snapshots: Vec<Snapshot>,
}

impl Session {
    /// A fresh app on the persons tab with nothing mounted.
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            manager: RouterManager::with_config(AppFlow::ProfileList, config),
            registry: build_registry(PersonStore::sample()),
            dismiss_actions_run: Arc::new(AtomicUsize::new(0)),
            snapshots: Vec::new(),
        }
    }

    /// The app's router manager.
    pub fn manager(&self) -> &RouterManager<AppFlow, AppDestination> {
        &self.manager
    }

    /// Snapshots recorded so far.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Resolve what the selected flow currently shows on top of its root.
    pub fn visible(&self) -> Option<TextView> {
        let router = self.manager.current_router()?;
        let top = router
            .overlay()
            .map(|overlay| overlay.destination)
            .or_else(|| router.top())?;
        Some(self.registry.resolve(&top))
    }

    fn record(&mut self, step: &str) {
        let routers = self
            .manager
            .registered_flows()
            .into_iter()
            .filter_map(|flow| Some((flow, self.manager.get_router(flow)?.snapshot())))
            .collect();
        let selection = self.manager.selection();
        let snapshot = Snapshot {
            step: step.to_owned(),
            selected_flow: selection.selected,
            previous_flow: selection.previous,
            routers,
            visible: self.visible(),
            dismiss_actions_run: self.dismiss_actions_run.load(Ordering::SeqCst),
        };
        tracing::info!(step, flow = %snapshot.selected_flow, "recorded snapshot");
        self.snapshots.push(snapshot);
    }

    /// Push `destination` onto whichever router is current when it runs.
    fn push_on_current(&self, destination: AppDestination) -> impl FnOnce() + Send + 'static {
        let manager = self.manager.downgrade();
        move || match manager.upgrade().and_then(|m| m.current_router()) {
            Some(router) => router.push(destination),
            None => tracing::warn!(?destination, "no current router for deferred push"),
        }
    }

    /// Run the full script. Needs a tokio runtime for the timer step.
    pub async fn run(mut self) -> Result<Vec<Snapshot>, NavkitError> {
        let persons: Router<AppDestination> = Router::new();
        self.manager.on_flow_appear(persons.clone(), AppFlow::ProfileList);
        self.record("persons tab mounted");

        persons.push(AppDestination::profile_details("42"));
        self.record("opened profile 42");

        persons.push(AppDestination::profile_full_name("42"));
        persons.pop();
        self.record("opened and closed full name");

        let counter = Arc::clone(&self.dismiss_actions_run);
        persons.present_with(
            Route::Sheet(SheetStyle::Large),
            AppDestination::profile_full_name("7"),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        )?;
        self.record("presented full name sheet");

        persons.dismiss();
        self.record("dismissed sheet");

        let random: Router<AppDestination> = Router::new();
        let pending = self.manager.navigate_to_flow(
            AppFlow::Random,
            self.push_on_current(AppDestination::Random(RandomDestination::Home)),
        );
        self.manager.on_flow_appear(random.clone(), AppFlow::Random);
        tracing::debug!(still_pending = pending.is_pending(), "random tab mounted");
        self.record("switched to random tab");

        let profile: Router<AppDestination> = Router::new();
        self.manager.on_flow_appear(profile.clone(), AppFlow::Profile);
        profile.push(AppDestination::profile_details("3"));
        profile.present(Route::Modal, AppDestination::profile_full_name("3"))?;
        self.record("opened transient profile flow");

        self.manager.on_flow_disappear(AppFlow::Profile);
        self.record("closed transient profile flow");

        let delay = self.manager.config().flow_switch_delay;
        self.manager.navigate_to_flow(
            AppFlow::ProfileList,
            self.push_on_current(AppDestination::profile_details("7")),
        );
        tokio::time::sleep(delay * 2).await;
        self.record("deep link to profile 7");

        Ok(self.snapshots)
    }
}
