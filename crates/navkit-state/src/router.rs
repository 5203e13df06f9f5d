//! # Router: Per-Section Navigation State Machine
//!
//! A router owns one navigation stack and one overlay for a single section
//! of the app. The two axes are independent:
//!
//! ```text
//!            push / pop / pop_to_root
//!   Root ◀──────────────────────────────▶ Pushed(n ≥ 1)
//!     ×                                      ×
//!   NoOverlay ◀──── present / dismiss ────▶ OverlayActive(slot)
//! ```
//!
//! `Root × NoOverlay` is both the initial and the terminal state.
//! `dismiss()` closes the overlay when one is shown and otherwise pops the
//! top page.
//!
//! ## Overlay Exclusivity
//!
//! There are six overlay slots (one per presentable [`Route`]), but the
//! state stores a single `Option<Overlay<D>>`. At most one slot can be
//! occupied; presenting into any slot replaces the current overlay. The
//! per-slot accessors (`sheet()`, `is_modal_presented()`, ...) read through
//! that single field.
//!
//! ## Preconditions
//!
//! - `present(Route::Push, ..)` returns [`RouterError::NotPresentable`] and
//!   leaves the state untouched.
//! - `pop()` on an empty stack is a no-op that logs a warning.
//!
//! Neither panics, in debug or release builds. There is no
//! `debug_assert!`: the loud signal is the `error!`/`warn!` log and the
//! returned `Err`/`None`, so a debug build behaves exactly like release.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use navkit_core::{
    Destination, NavkitError, OverlaySlot, Published, Route, RouterId, SubscriptionId,
};

/// Callback run once when the current presentation closes.
pub type DismissAction = Box<dyn FnOnce() + Send>;

// ─── State ───────────────────────────────────────────────────────────

/// The destination currently shown in an overlay slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlay<D> {
    /// Which slot holds the destination.
    pub slot: OverlaySlot,
    /// The presented destination.
    pub destination: D,
}

/// Published state of one router, as the rendering layer observes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterState<D> {
    /// Navigation history; the last element is the visible pushed screen.
    pub stack: Vec<D>,
    /// The single occupied overlay slot, if any.
    pub overlay: Option<Overlay<D>>,
    /// Route most recently used to fill an overlay slot.
    pub selected_route: Option<Route>,
}

impl<D> Default for RouterState<D> {
    fn default() -> Self {
        Self {
            stack: Vec::new(),
            overlay: None,
            selected_route: None,
        }
    }
}

impl<D> RouterState<D> {
    /// The destination in `slot`, if that slot is the occupied one.
    pub fn presented(&self, slot: OverlaySlot) -> Option<&D> {
        self.overlay
            .as_ref()
            .filter(|overlay| overlay.slot == slot)
            .map(|overlay| &overlay.destination)
    }

    /// True when no overlay slot is occupied.
    pub fn is_page_presented(&self) -> bool {
        self.overlay.is_none()
    }

    /// Number of pushed destinations.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// What a call to [`Router::dismiss`] closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal<D> {
    /// An overlay was closed.
    Overlay {
        /// The slot that was emptied.
        slot: OverlaySlot,
        /// The destination it held.
        destination: D,
    },
    /// No overlay was shown; the top page was popped.
    Page(D),
    /// Nothing was shown above the root.
    Nothing,
}

impl<D> Dismissal<D> {
    /// Whether anything was closed.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Errors returned by router operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// `present` was called with a route that does not fill an overlay slot.
    #[error("route {route} is not presentable; use push instead")]
    NotPresentable {
        /// The rejected route.
        route: Route,
    },
}

impl From<RouterError> for NavkitError {
    fn from(err: RouterError) -> Self {
        NavkitError::Precondition(err.to_string())
    }
}

// ─── The Router ──────────────────────────────────────────────────────

struct RouterInner<D> {
    id: RouterId,
    state: Published<RouterState<D>>,
    dismiss_action: Mutex<Option<DismissAction>>,
}

/// Navigation state for one section.
///
/// Cheap to clone: clones share the same state, like handles to one store.
/// All operations take `&self` and never hold a lock while running a
/// dismiss action or an observer, so callbacks may navigate again.
pub struct Router<D: Destination> {
    inner: Arc<RouterInner<D>>,
}

impl<D: Destination> Clone for Router<D> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D: Destination> Default for Router<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Destination> std::fmt::Debug for Router<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("id", &self.inner.id)
            .field("state", &self.inner.state)
            .field("has_dismiss_action", &self.has_dismiss_action())
            .finish()
    }
}

impl<D: Destination> Router<D> {
    /// Create a router at `Root × NoOverlay`.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RouterInner {
                id: RouterId::new(),
                state: Published::default(),
                dismiss_action: Mutex::new(None),
            }),
        }
    }

    /// Identity of this router instance (shared by its clones).
    pub fn id(&self) -> RouterId {
        self.inner.id
    }

    /// Whether `other` is a handle to the same router.
    pub fn same_router(&self, other: &Router<D>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    // ── Stack axis ───────────────────────────────────────────────────

    /// Push one destination and clear the selected route.
    pub fn push(&self, destination: D) {
        let depth = self.inner.state.update(|state| {
            state.stack.push(destination);
            state.selected_route = None;
            state.stack.len()
        });
        tracing::debug!(router = %self.inner.id, depth, "pushed destination");
    }

    /// Push several destinations in order and clear the selected route.
    pub fn push_many(&self, destinations: impl IntoIterator<Item = D>) {
        let destinations: Vec<D> = destinations.into_iter().collect();
        let pushed = destinations.len();
        let depth = self.inner.state.update(|state| {
            state.stack.extend(destinations);
            state.selected_route = None;
            state.stack.len()
        });
        tracing::debug!(router = %self.inner.id, pushed, depth, "pushed destinations");
    }

    /// Pop the top destination.
    ///
    /// Popping an empty stack is a no-op: it logs a warning and returns
    /// `None` without notifying observers.
    pub fn pop(&self) -> Option<D> {
        let popped = self.inner.state.try_update(|state| state.stack.pop());
        match &popped {
            Some(_) => {
                tracing::debug!(router = %self.inner.id, depth = self.depth(), "popped destination")
            }
            None => tracing::warn!(router = %self.inner.id, "pop on empty navigation stack ignored"),
        }
        popped
    }

    /// Clear the stack. Returns how many destinations were removed.
    pub fn pop_to_root(&self) -> usize {
        let removed = self
            .inner
            .state
            .try_update(|state| {
                if state.stack.is_empty() {
                    None
                } else {
                    let removed = state.stack.len();
                    state.stack.clear();
                    Some(removed)
                }
            })
            .unwrap_or(0);
        tracing::debug!(router = %self.inner.id, removed, "popped to root");
        removed
    }

    /// Overwrite the stack with the path the rendering layer now shows
    /// (for example after a system back gesture).
    pub fn replace_stack(&self, path: Vec<D>) {
        let depth = path.len();
        self.inner.state.update(|state| state.stack = path);
        tracing::debug!(router = %self.inner.id, depth, "navigation stack replaced");
    }

    // ── Overlay axis ─────────────────────────────────────────────────

    /// Present `destination` in the slot for `route`, with no dismiss action.
    pub fn present(&self, route: Route, destination: D) -> Result<(), RouterError> {
        self.present_boxed(route, destination, None)
    }

    /// Present `destination` and run `on_dismiss` once when it closes.
    pub fn present_with(
        &self,
        route: Route,
        destination: D,
        on_dismiss: impl FnOnce() + Send + 'static,
    ) -> Result<(), RouterError> {
        self.present_boxed(route, destination, Some(Box::new(on_dismiss)))
    }

    /// Present with an optional, already boxed, dismiss action.
    ///
    /// Any overlay already shown is replaced. Its dismiss action is dropped
    /// without running.
    pub fn present_boxed(
        &self,
        route: Route,
        destination: D,
        on_dismiss: Option<DismissAction>,
    ) -> Result<(), RouterError> {
        let Some(slot) = route.overlay_slot() else {
            tracing::error!(router = %self.inner.id, %route, "present called with a non-presentable route");
            return Err(RouterError::NotPresentable { route });
        };

        let has_action = on_dismiss.is_some();
        let (replaced, stale_action) = self.inner.state.update(|state| {
            let stale_action =
                std::mem::replace(&mut *self.inner.dismiss_action.lock(), on_dismiss);
            state.selected_route = Some(route);
            let replaced = state
                .overlay
                .replace(Overlay { slot, destination })
                .map(|previous| previous.slot);
            (replaced, stale_action)
        });
        // Dropped unrun, with no lock held: its captures may touch this router.
        drop(stale_action);

        tracing::debug!(
            router = %self.inner.id,
            %route,
            ?slot,
            replaced = ?replaced,
            has_action,
            "presented destination"
        );
        Ok(())
    }

    /// Close the current overlay, or pop the top page when no overlay is
    /// shown, then run the stored dismiss action.
    pub fn dismiss(&self) -> Dismissal<D> {
        let closed = self.inner.state.try_update(|state| {
            let dismissal = if let Some(overlay) = state.overlay.take() {
                state.selected_route = None;
                Dismissal::Overlay {
                    slot: overlay.slot,
                    destination: overlay.destination,
                }
            } else {
                Dismissal::Page(state.stack.pop()?)
            };
            Some((dismissal, self.inner.dismiss_action.lock().take()))
        });

        let Some((dismissal, action)) = closed else {
            tracing::warn!(router = %self.inner.id, "dismiss with nothing presented ignored");
            return Dismissal::Nothing;
        };

        match &dismissal {
            Dismissal::Overlay { slot, .. } => {
                tracing::debug!(router = %self.inner.id, ?slot, "dismissed overlay")
            }
            _ => tracing::debug!(router = %self.inner.id, depth = self.depth(), "dismissed page"),
        }

        if let Some(action) = action {
            action();
        }
        dismissal
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Clone of the full published state.
    pub fn snapshot(&self) -> RouterState<D> {
        self.inner.state.get()
    }

    /// Clone of the navigation stack.
    pub fn stack(&self) -> Vec<D> {
        self.inner.state.read(|state| state.stack.clone())
    }

    /// Number of pushed destinations.
    pub fn depth(&self) -> usize {
        self.inner.state.read(RouterState::depth)
    }

    /// The visible pushed destination.
    pub fn top(&self) -> Option<D> {
        self.inner.state.read(|state| state.stack.last().cloned())
    }

    /// Route most recently used to fill an overlay slot.
    pub fn selected_route(&self) -> Option<Route> {
        self.inner.state.read(|state| state.selected_route)
    }

    /// The current overlay, if any.
    pub fn overlay(&self) -> Option<Overlay<D>> {
        self.inner.state.read(|state| state.overlay.clone())
    }

    /// The destination held by `slot`.
    pub fn presented(&self, slot: OverlaySlot) -> Option<D> {
        self.inner.state.read(|state| state.presented(slot).cloned())
    }

    /// Whether `slot` is occupied.
    pub fn is_presented(&self, slot: OverlaySlot) -> bool {
        self.inner.state.read(|state| state.presented(slot).is_some())
    }

    /// True iff no overlay slot is occupied.
    pub fn is_page_presented(&self) -> bool {
        self.inner.state.read(RouterState::is_page_presented)
    }

    /// Whether a dismiss action is waiting for the current presentation.
    pub fn has_dismiss_action(&self) -> bool {
        self.inner.dismiss_action.lock().is_some()
    }

    /// The destination in the sheet slot.
    pub fn sheet(&self) -> Option<D> {
        self.presented(OverlaySlot::Sheet)
    }

    /// The destination in the full-screen cover slot.
    pub fn full_screen_cover(&self) -> Option<D> {
        self.presented(OverlaySlot::FullScreenCover)
    }

    /// The destination in the modal slot.
    pub fn modal(&self) -> Option<D> {
        self.presented(OverlaySlot::Modal)
    }

    /// The destination in the expandable modal slot.
    pub fn modal_can_full_screen(&self) -> Option<D> {
        self.presented(OverlaySlot::ModalCanFullScreen)
    }

    /// The destination in the content-sized modal slot.
    pub fn modal_fit_content(&self) -> Option<D> {
        self.presented(OverlaySlot::ModalFitContent)
    }

    /// The destination in the inset modal slot.
    pub fn modal_apple_like(&self) -> Option<D> {
        self.presented(OverlaySlot::ModalAppleLike)
    }

    /// Whether the sheet slot is occupied.
    pub fn is_sheet_presented(&self) -> bool {
        self.is_presented(OverlaySlot::Sheet)
    }

    /// Whether the full-screen cover slot is occupied.
    pub fn is_full_screen_cover_presented(&self) -> bool {
        self.is_presented(OverlaySlot::FullScreenCover)
    }

    /// Whether the modal slot is occupied.
    pub fn is_modal_presented(&self) -> bool {
        self.is_presented(OverlaySlot::Modal)
    }

    /// Whether the expandable modal slot is occupied.
    pub fn is_modal_can_full_screen_presented(&self) -> bool {
        self.is_presented(OverlaySlot::ModalCanFullScreen)
    }

    /// Whether the content-sized modal slot is occupied.
    pub fn is_modal_fit_content_presented(&self) -> bool {
        self.is_presented(OverlaySlot::ModalFitContent)
    }

    /// Whether the inset modal slot is occupied.
    pub fn is_modal_apple_like_presented(&self) -> bool {
        self.is_presented(OverlaySlot::ModalAppleLike)
    }

    // ── Observation ──────────────────────────────────────────────────

    /// Observe every state change. The observer runs synchronously on the
    /// mutating call, after the lock is released.
    pub fn subscribe(
        &self,
        observer: impl Fn(&RouterState<D>) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.inner.state.subscribe(observer)
    }

    /// Stop observing. Returns whether the subscription existed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.state.unsubscribe(id)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(u8),
        Pop,
        Dismiss,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::Push),
            Just(Op::Pop),
            Just(Op::Dismiss),
        ]
    }

    proptest! {
        /// Depth equals pushes minus successful pops and never underflows.
        #[test]
        fn depth_tracks_pushes_minus_pops(ops in prop::collection::vec(op(), 0..64)) {
            let router: Router<u8> = Router::new();
            let mut expected: Vec<u8> = Vec::new();
            for op in ops {
                match op {
                    Op::Push(d) => {
                        router.push(d);
                        expected.push(d);
                    }
                    Op::Pop | Op::Dismiss => {
                        let closed = if matches!(op, Op::Pop) {
                            router.pop()
                        } else {
                            match router.dismiss() {
                                Dismissal::Page(d) => Some(d),
                                _ => None,
                            }
                        };
                        prop_assert_eq!(closed, expected.pop());
                    }
                }
                prop_assert_eq!(router.depth(), expected.len());
            }
            prop_assert_eq!(router.stack(), expected);
        }

        /// Presenting never touches the stack, and at most one slot is filled.
        #[test]
        fn overlay_axis_is_independent(pushes in 0usize..8, slot in 0usize..6) {
            let router: Router<usize> = Router::new();
            router.push_many(0..pushes);
            let route = [
                Route::Sheet(navkit_core::SheetStyle::Medium),
                Route::FullScreenCover,
                Route::Modal,
                Route::ModalCanFullScreen,
                Route::ModalFitContent,
                Route::ModalAppleLike,
            ][slot];
            router.present(route, 99).unwrap();
            prop_assert_eq!(router.depth(), pushes);
            let filled = OverlaySlot::PRECEDENCE
                .iter()
                .filter(|s| router.is_presented(**s))
                .count();
            prop_assert_eq!(filled, 1);
            prop_assert!(!router.dismiss().is_nothing());
            prop_assert_eq!(router.depth(), pushes);
            prop_assert!(router.is_page_presented());
        }
    }
}
