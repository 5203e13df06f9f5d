//! Route table: every presentation kind with its overlay slot and detents.

use serde::Serialize;

use navkit_core::{Detent, OverlaySlot, Route, SheetStyle};

/// One row of the route table.
#[derive(Debug, Clone, Serialize)]
pub struct RouteInfo {
    /// Display form of the route, e.g. `sheet(Large)`.
    pub route: String,
    /// Whether the route fills an overlay slot.
    pub presentable: bool,
    /// The slot it fills.
    pub slot: Option<OverlaySlot>,
    /// Position in the order `dismiss()` checks slots.
    pub dismiss_precedence: Option<usize>,
    /// Resting heights offered for the presentation.
    pub detents: Vec<Detent>,
}

impl From<Route> for RouteInfo {
    fn from(route: Route) -> Self {
        let slot = route.overlay_slot();
        Self {
            route: route.to_string(),
            presentable: route.is_presentable(),
            slot,
            dismiss_precedence: slot.map(|s| s.precedence()),
            detents: route.detents().to_vec(),
        }
    }
}

/// Every route kind, sheets expanded per style.
pub fn route_table() -> Vec<RouteInfo> {
    let mut routes = vec![Route::Push];
    routes.extend(SheetStyle::ALL.into_iter().map(Route::Sheet));
    routes.extend([
        Route::FullScreenCover,
        Route::Modal,
        Route::ModalCanFullScreen,
        Route::ModalFitContent,
        Route::ModalAppleLike,
    ]);
    routes.into_iter().map(RouteInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_slot_once_per_kind() {
        let table = route_table();
        assert_eq!(table.len(), 1 + SheetStyle::ALL.len() + 5);
        assert!(!table[0].presentable);
        for slot in OverlaySlot::PRECEDENCE {
            assert!(table.iter().any(|r| r.slot == Some(slot)));
        }
    }
}
