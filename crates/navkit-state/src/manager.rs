//! # RouterManager: Cross-Flow Coordinator
//!
//! Owns one [`Router`] per application flow and tracks which flow is active.
//!
//! ## Registration
//!
//! A section's router is re-created each time its view appears, but the
//! manager keeps using the first instance for as long as the flow stays
//! registered: `register` is first-registration-wins.
//!
//! ## Flow Switching With a Follow-Up Action
//!
//! `navigate_to_flow(flow, then)` selects `flow` and defers `then` until the
//! new flow's content is mounted, so `then` can navigate inside it (for
//! example push a detail screen right after a tab switch). Two triggers race,
//! and the first one wins:
//!
//! 1. **Mount acknowledgement.** The flow's view calls `set_current_flow`
//!    (via `on_flow_appear`) once mounted. If that flow is the pending
//!    target, `then` runs right there.
//! 2. **Timer fallback.** After `NavigationConfig::flow_switch_delay` a tokio
//!    task fires `then` if it is still pending. On a slow mount the timer
//!    can fire before the target section has registered its router.
//!
//! The action runs at most once. A newer `navigate_to_flow` replaces an
//! older pending action, which is then dropped without running.
//!
//! ## Threading
//!
//! The acknowledgement trigger runs `then` on the thread that called
//! `set_current_flow`. The timer trigger runs it on whichever runtime
//! thread polls the timer task: on a multi-thread runtime that is an
//! arbitrary worker. Routers are `Send + Sync`, so this is sound, but an
//! app whose views must only be touched from one thread should drive the
//! manager from a `current_thread` runtime (as `navkit-demo` does) or from
//! a [`tokio::task::LocalSet`] on that thread.
//!
//! ## Teardown
//!
//! The timer holds only a weak reference to the manager. If every manager
//! handle is dropped before the delay elapses, the pending action is dropped
//! unrun. Actions that need the manager should capture a
//! [`WeakRouterManager`] so the pending action does not keep the manager
//! alive.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use navkit_core::{Destination, Flow, NavigationConfig, Published, SubscriptionId};

use crate::router::Router;

/// Follow-up action run after a flow switch.
pub type FlowAction = Box<dyn FnOnce() + Send>;

/// Published flow selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSelection<F> {
    /// The active flow.
    pub selected: F,
    /// The flow active before the last `set_current_flow`.
    pub previous: Option<F>,
}

struct PendingSlot<F> {
    generation: u64,
    flow: F,
    action: FlowAction,
}

struct ManagerInner<F: Flow, D: Destination> {
    routers: RwLock<HashMap<F, Router<D>>>,
    selection: Published<FlowSelection<F>>,
    pending: Mutex<Option<PendingSlot<F>>>,
    generation: AtomicU64,
    config: NavigationConfig,
}

impl<F: Flow, D: Destination> ManagerInner<F, D> {
    /// Remove the pending action if `matches` accepts it.
    fn take_pending(&self, matches: impl FnOnce(&PendingSlot<F>) -> bool) -> Option<PendingSlot<F>> {
        let mut pending = self.pending.lock();
        if pending.as_ref().is_some_and(matches) {
            pending.take()
        } else {
            None
        }
    }

    fn run(slot: PendingSlot<F>, trigger: &'static str) {
        tracing::debug!(
            flow = ?slot.flow,
            generation = slot.generation,
            trigger,
            "running deferred flow action"
        );
        (slot.action)();
    }
}

/// Coordinator of the per-flow routers.
///
/// Cheap to clone; clones share state.
pub struct RouterManager<F: Flow, D: Destination> {
    inner: Arc<ManagerInner<F, D>>,
}

impl<F: Flow, D: Destination> Clone for RouterManager<F, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: Flow, D: Destination> std::fmt::Debug for RouterManager<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterManager")
            .field("selection", &self.inner.selection)
            .field("flows", &self.registered_flows())
            .field("pending", &self.inner.pending.lock().as_ref().map(|p| p.flow))
            .field("config", &self.inner.config)
            .finish()
    }
}

impl<F: Flow, D: Destination> RouterManager<F, D> {
    /// Create a manager with `selected_flow` active and no routers.
    pub fn new(selected_flow: F) -> Self {
        Self::with_config(selected_flow, NavigationConfig::default())
    }

    /// Create a manager with explicit configuration.
    pub fn with_config(selected_flow: F, config: NavigationConfig) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                routers: RwLock::new(HashMap::new()),
                selection: Published::new(FlowSelection {
                    selected: selected_flow,
                    previous: None,
                }),
                pending: Mutex::new(None),
                generation: AtomicU64::new(0),
                config,
            }),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &NavigationConfig {
        &self.inner.config
    }

    /// Non-owning handle, for capture inside deferred actions.
    pub fn downgrade(&self) -> WeakRouterManager<F, D> {
        WeakRouterManager {
            inner: Arc::downgrade(&self.inner),
        }
    }

    // ── Router registry ──────────────────────────────────────────────

    /// The router registered for `flow`.
    pub fn get_router(&self, flow: F) -> Option<Router<D>> {
        self.inner.routers.read().get(&flow).cloned()
    }

    /// The router of the selected flow.
    pub fn current_router(&self) -> Option<Router<D>> {
        self.get_router(self.selected_flow())
    }

    /// Register `router` for `flow` unless one is already registered.
    ///
    /// Returns `true` if `router` was stored. When `flow` already has a
    /// router, the existing one is kept and `router` is ignored.
    pub fn register(&self, router: Router<D>, flow: F) -> bool {
        match self.inner.routers.write().entry(flow) {
            Entry::Occupied(existing) => {
                tracing::debug!(
                    ?flow,
                    kept = %existing.get().id(),
                    ignored = %router.id(),
                    "flow already has a router; keeping the first"
                );
                false
            }
            Entry::Vacant(slot) => {
                tracing::debug!(?flow, router = %router.id(), "registered router");
                slot.insert(router);
                true
            }
        }
    }

    /// Remove the router registered for `flow`.
    pub fn unregister(&self, flow: F) -> Option<Router<D>> {
        let removed = self.inner.routers.write().remove(&flow);
        if let Some(router) = &removed {
            tracing::debug!(?flow, router = %router.id(), "unregistered router");
        }
        removed
    }

    /// Flows that currently have a router.
    pub fn registered_flows(&self) -> Vec<F> {
        self.inner.routers.read().keys().copied().collect()
    }

    // ── Flow selection ───────────────────────────────────────────────

    /// The active flow.
    pub fn selected_flow(&self) -> F {
        self.inner.selection.read(|s| s.selected)
    }

    /// The flow active before the last `set_current_flow`.
    pub fn previous_flow(&self) -> Option<F> {
        self.inner.selection.read(|s| s.previous)
    }

    /// Both selection fields at once.
    pub fn selection(&self) -> FlowSelection<F> {
        self.inner.selection.get()
    }

    /// Make `flow` active, remembering the current flow as previous.
    ///
    /// This is also the mount acknowledgement: if a deferred action from
    /// `navigate_to_flow` targets `flow`, it runs before this returns.
    pub fn set_current_flow(&self, flow: F) {
        self.inner.selection.update(|s| {
            s.previous = Some(s.selected);
            s.selected = flow;
        });
        tracing::debug!(?flow, "current flow set");

        if let Some(slot) = self.inner.take_pending(|p| p.flow == flow) {
            ManagerInner::<F, D>::run(slot, "mount");
        }
    }

    /// Return to the previous flow. No-op when there is none.
    pub fn set_previous_flow(&self) -> Option<F> {
        let restored = self.inner.selection.try_update(|s| {
            let previous = s.previous?;
            s.selected = previous;
            Some(previous)
        });
        match restored {
            Some(flow) => tracing::debug!(?flow, "restored previous flow"),
            None => tracing::debug!("no previous flow to restore"),
        }
        restored
    }

    /// Select `flow` and run `then` once its content is mounted.
    ///
    /// `previous_flow` is left untouched. The timer fallback needs a tokio
    /// runtime; without one only the mount acknowledgement can fire `then`.
    pub fn navigate_to_flow(
        &self,
        flow: F,
        then: impl FnOnce() + Send + 'static,
    ) -> PendingFlowAction<F, D> {
        let generation = self.inner.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let superseded = self.inner.pending.lock().replace(PendingSlot {
            generation,
            flow,
            action: Box::new(then),
        });
        if let Some(old) = superseded {
            tracing::debug!(
                flow = ?old.flow,
                generation = old.generation,
                "pending flow action superseded"
            );
        }

        self.inner.selection.update(|s| s.selected = flow);

        let timer = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                let weak = Arc::downgrade(&self.inner);
                let delay = self.inner.config.flow_switch_delay;
                Some(runtime.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let Some(inner) = weak.upgrade() else {
                        tracing::debug!(generation, "router manager dropped; deferred flow action discarded");
                        return;
                    };
                    if let Some(slot) = inner.take_pending(|p| p.generation == generation) {
                        ManagerInner::<F, D>::run(slot, "timer");
                    }
                }))
            }
            Err(_) => {
                tracing::warn!(
                    ?flow,
                    "no tokio runtime; deferred flow action waits for mount acknowledgement"
                );
                None
            }
        };

        tracing::debug!(?flow, generation, "navigating to flow");
        PendingFlowAction {
            manager: Arc::downgrade(&self.inner),
            generation,
            flow,
            timer,
        }
    }

    // ── Lifecycle hooks ──────────────────────────────────────────────

    /// A section's view became visible: register its router, then make its
    /// flow current.
    pub fn on_flow_appear(&self, router: Router<D>, flow: F) {
        self.register(router, flow);
        self.set_current_flow(flow);
    }

    /// A section's view disappeared. For transient flows, return to the
    /// previous flow and unregister the router; persistent flows are left
    /// alone. Returns whether anything was torn down.
    pub fn on_flow_disappear(&self, flow: F) -> bool {
        if !flow.is_transient() {
            return false;
        }
        self.set_previous_flow();
        self.unregister(flow);
        true
    }

    // ── Observation ──────────────────────────────────────────────────

    /// Observe flow selection changes.
    pub fn subscribe(
        &self,
        observer: impl Fn(&FlowSelection<F>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.selection.subscribe(observer)
    }

    /// Stop observing. Returns whether the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.selection.unsubscribe(id)
    }
}

/// Non-owning handle to a [`RouterManager`].
pub struct WeakRouterManager<F: Flow, D: Destination> {
    inner: Weak<ManagerInner<F, D>>,
}

impl<F: Flow, D: Destination> Clone for WeakRouterManager<F, D> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<F: Flow, D: Destination> WeakRouterManager<F, D> {
    /// The manager, if any strong handle is still alive.
    pub fn upgrade(&self) -> Option<RouterManager<F, D>> {
        self.inner.upgrade().map(|inner| RouterManager { inner })
    }
}

/// Handle to the follow-up action of one `navigate_to_flow` call.
///
/// Dropping the handle does not cancel the action.
pub struct PendingFlowAction<F: Flow, D: Destination> {
    manager: Weak<ManagerInner<F, D>>,
    generation: u64,
    flow: F,
    timer: Option<JoinHandle<()>>,
}

impl<F: Flow, D: Destination> PendingFlowAction<F, D> {
    /// The flow the action waits for.
    pub fn flow(&self) -> F {
        self.flow
    }

    /// Whether a timer fallback was armed.
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Whether the action has neither run nor been dropped yet.
    pub fn is_pending(&self) -> bool {
        self.manager.upgrade().is_some_and(|inner| {
            inner
                .pending
                .lock()
                .as_ref()
                .is_some_and(|p| p.generation == self.generation)
        })
    }

    /// Drop the action without running it. Returns `false` if it already
    /// ran, was superseded, or its manager is gone.
    pub fn cancel(self) -> bool {
        if let Some(timer) = &self.timer {
            timer.abort();
        }
        let generation = self.generation;
        let cancelled = self
            .manager
            .upgrade()
            .and_then(|inner| inner.take_pending(|p| p.generation == generation))
            .is_some();
        tracing::debug!(flow = ?self.flow, generation, cancelled, "pending flow action cancelled");
        cancelled
    }
}

impl<F: Flow, D: Destination> std::fmt::Debug for PendingFlowAction<F, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingFlowAction")
            .field("flow", &self.flow)
            .field("generation", &self.generation)
            .field("has_timer", &self.has_timer())
            .finish()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    enum AppFlow {
        ProfileList,
        Random,
        Profile,
    }

    impl Flow for AppFlow {
        fn is_transient(&self) -> bool {
            matches!(self, AppFlow::Profile)
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Screen {
        Details(u32),
    }

    type Manager = RouterManager<AppFlow, Screen>;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let handle = Arc::clone(&count);
        (count, move || {
            handle.fetch_add(1, Ordering::SeqCst);
        })
    }

    // ── Registry ─────────────────────────────────────────────────────

    #[test]
    fn get_router_is_absent_until_registered() {
        let manager = Manager::new(AppFlow::ProfileList);
        assert!(manager.get_router(AppFlow::ProfileList).is_none());
        assert!(manager.current_router().is_none());
    }

    #[test]
    fn register_then_get_observes_router() {
        let manager = Manager::new(AppFlow::ProfileList);
        let router = Router::new();
        assert!(manager.register(router.clone(), AppFlow::ProfileList));
        let found = manager.get_router(AppFlow::ProfileList).unwrap();
        assert!(found.same_router(&router));
        assert!(manager.current_router().unwrap().same_router(&router));
    }

    #[test]
    fn first_registration_wins() {
        let manager = Manager::new(AppFlow::ProfileList);
        let first = Router::new();
        let second = Router::new();
        assert!(manager.register(first.clone(), AppFlow::Random));
        assert!(!manager.register(second.clone(), AppFlow::Random));
        assert_eq!(manager.get_router(AppFlow::Random).unwrap().id(), first.id());
    }

    #[test]
    fn unregister_removes_mapping() {
        let manager = Manager::new(AppFlow::ProfileList);
        manager.register(Router::new(), AppFlow::Random);
        assert!(manager.unregister(AppFlow::Random).is_some());
        assert!(manager.get_router(AppFlow::Random).is_none());
        assert!(manager.unregister(AppFlow::Random).is_none());

        let replacement = Router::new();
        assert!(manager.register(replacement.clone(), AppFlow::Random));
        assert!(manager
            .get_router(AppFlow::Random)
            .unwrap()
            .same_router(&replacement));
    }

    #[test]
    fn registered_flows_lists_keys() {
        let manager = Manager::new(AppFlow::ProfileList);
        manager.register(Router::new(), AppFlow::ProfileList);
        manager.register(Router::new(), AppFlow::Random);
        let mut flows = manager.registered_flows();
        flows.sort_by_key(|f| *f as u8);
        assert_eq!(flows, vec![AppFlow::ProfileList, AppFlow::Random]);
    }

    // ── Selection ────────────────────────────────────────────────────

    #[test]
    fn set_current_flow_records_previous() {
        let manager = Manager::new(AppFlow::ProfileList);
        manager.set_current_flow(AppFlow::Profile);
        assert_eq!(manager.selected_flow(), AppFlow::Profile);
        assert_eq!(manager.previous_flow(), Some(AppFlow::ProfileList));
    }

    #[test]
    fn set_previous_flow_restores() {
        let manager = Manager::new(AppFlow::Random);
        manager.set_current_flow(AppFlow::Profile);
        assert_eq!(manager.set_previous_flow(), Some(AppFlow::Random));
        assert_eq!(manager.selected_flow(), AppFlow::Random);
    }

    #[test]
    fn set_previous_flow_without_previous_is_no_op() {
        let manager = Manager::new(AppFlow::Random);
        assert_eq!(manager.set_previous_flow(), None);
        assert_eq!(manager.selected_flow(), AppFlow::Random);
    }

    #[test]
    fn current_router_follows_selection() {
        let manager = Manager::new(AppFlow::ProfileList);
        let list = Router::new();
        let random = Router::new();
        manager.register(list.clone(), AppFlow::ProfileList);
        manager.register(random.clone(), AppFlow::Random);
        manager.set_current_flow(AppFlow::Random);
        assert!(manager.current_router().unwrap().same_router(&random));
    }

    #[test]
    fn selection_observers_are_notified() {
        let manager = Manager::new(AppFlow::ProfileList);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = manager.subscribe(move |s: &FlowSelection<AppFlow>| sink.lock().push(s.selected));

        manager.set_current_flow(AppFlow::Random);
        manager.set_previous_flow();
        assert!(manager.unsubscribe(id));
        manager.set_current_flow(AppFlow::Profile);

        assert_eq!(*seen.lock(), vec![AppFlow::Random, AppFlow::ProfileList]);
    }

    // ── Lifecycle hooks ──────────────────────────────────────────────

    #[test]
    fn appear_registers_then_selects() {
        let manager = Manager::new(AppFlow::ProfileList);
        let router = Router::new();
        manager.on_flow_appear(router.clone(), AppFlow::Random);
        assert_eq!(manager.selected_flow(), AppFlow::Random);
        assert!(manager.current_router().unwrap().same_router(&router));

        // Re-appearing with a fresh router keeps the first one.
        manager.on_flow_appear(Router::new(), AppFlow::Random);
        assert!(manager.current_router().unwrap().same_router(&router));
    }

    #[test]
    fn transient_flow_disappear_restores_and_unregisters() {
        let manager = Manager::new(AppFlow::ProfileList);
        manager.on_flow_appear(Router::new(), AppFlow::ProfileList);
        manager.on_flow_appear(Router::new(), AppFlow::Profile);
        assert_eq!(manager.selected_flow(), AppFlow::Profile);

        assert!(manager.on_flow_disappear(AppFlow::Profile));
        assert_eq!(manager.selected_flow(), AppFlow::ProfileList);
        assert!(manager.get_router(AppFlow::Profile).is_none());
    }

    #[test]
    fn persistent_flow_disappear_is_ignored() {
        let manager = Manager::new(AppFlow::ProfileList);
        manager.on_flow_appear(Router::new(), AppFlow::Random);
        assert!(!manager.on_flow_disappear(AppFlow::Random));
        assert!(manager.get_router(AppFlow::Random).is_some());
        assert_eq!(manager.selected_flow(), AppFlow::Random);
    }

    // ── Deferred flow actions ────────────────────────────────────────

    #[tokio::test(start_paused = true)]
    async fn deferred_action_runs_after_delay() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (count, action) = counter();

        let pending = manager.navigate_to_flow(AppFlow::Random, action);
        assert_eq!(manager.selected_flow(), AppFlow::Random);
        assert_eq!(manager.previous_flow(), None);
        assert!(pending.has_timer());
        assert!(pending.is_pending());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!pending.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn deferred_action_can_navigate_inside_new_flow() {
        let manager = Manager::new(AppFlow::ProfileList);
        let random = Router::new();
        manager.register(random.clone(), AppFlow::Random);

        let weak = manager.downgrade();
        manager.navigate_to_flow(AppFlow::Random, move || {
            if let Some(router) = weak.upgrade().and_then(|m| m.current_router()) {
                router.push(Screen::Details(42));
            }
        });

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(random.stack(), vec![Screen::Details(42)]);
    }

    #[tokio::test(start_paused = true)]
    async fn mount_acknowledgement_runs_action_early_and_once() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (count, action) = counter();

        let pending = manager.navigate_to_flow(AppFlow::Random, action);
        manager.on_flow_appear(Router::new(), AppFlow::Random);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(!pending.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledgement_for_other_flow_does_not_fire() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (count, action) = counter();

        let pending = manager.navigate_to_flow(AppFlow::Random, action);
        manager.set_current_flow(AppFlow::ProfileList);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(pending.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_action() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (count, action) = counter();

        let pending = manager.navigate_to_flow(AppFlow::Random, action);
        assert!(pending.cancel());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        // The flow switch itself is not undone.
        assert_eq!(manager.selected_flow(), AppFlow::Random);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_navigation_supersedes_older_action() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (first, first_action) = counter();
        let (second, second_action) = counter();

        let older = manager.navigate_to_flow(AppFlow::Random, first_action);
        let newer = manager.navigate_to_flow(AppFlow::ProfileList, second_action);
        assert!(!older.is_pending());
        assert!(newer.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert!(!older.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_manager_discards_pending_action() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (count, action) = counter();

        let pending = manager.navigate_to_flow(AppFlow::Random, action);
        drop(manager);
        assert!(!pending.is_pending());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!pending.cancel());
    }

    #[tokio::test(start_paused = true)]
    async fn configured_delay_is_honored() {
        let config = NavigationConfig::default().with_flow_switch_delay(Duration::from_secs(2));
        let manager = Manager::with_config(AppFlow::ProfileList, config);
        let (count, action) = counter();

        manager.navigate_to_flow(AppFlow::Random, action);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn timer_action_runs_on_current_thread_runtime_thread() {
        let manager = Manager::new(AppFlow::ProfileList);
        let ran_on = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&ran_on);

        manager.navigate_to_flow(AppFlow::Random, move || {
            *sink.lock() = Some(std::thread::current().id());
        });
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(*ran_on.lock(), Some(std::thread::current().id()));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn acknowledgement_runs_action_on_calling_thread() {
        let config = NavigationConfig::default().with_flow_switch_delay(Duration::from_secs(60));
        let manager = Manager::with_config(AppFlow::ProfileList, config);
        let ran_on = Arc::new(Mutex::new(None));
        let sink = Arc::clone(&ran_on);

        manager.navigate_to_flow(AppFlow::Random, move || {
            *sink.lock() = Some(std::thread::current().id());
        });
        let caller = std::thread::spawn({
            let manager = manager.clone();
            move || {
                manager.set_current_flow(AppFlow::Random);
                std::thread::current().id()
            }
        })
        .join()
        .unwrap();

        assert_eq!(*ran_on.lock(), Some(caller));
    }

    #[test]
    fn without_runtime_only_acknowledgement_fires() {
        let manager = Manager::new(AppFlow::ProfileList);
        let (count, action) = counter();

        let pending = manager.navigate_to_flow(AppFlow::Random, action);
        assert!(!pending.has_timer());
        assert!(pending.is_pending());

        manager.set_current_flow(AppFlow::Random);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
