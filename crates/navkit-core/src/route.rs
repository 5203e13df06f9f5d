//! # Route Kinds and Overlay Slots
//!
//! A [`Route`] describes *how* a destination is shown: pushed onto the
//! navigation stack, or presented in one of six overlay slots.
//!
//! ## Invariant
//!
//! `Route::Push` is the only non-presentable kind. Every other kind maps to
//! exactly one [`OverlaySlot`], and every slot is reachable from at least one
//! route. The mapping is an exhaustive `match`; adding a route forces every
//! consumer to decide its slot.

use serde::{Deserialize, Serialize};

/// Style options for a `Route::Sheet` presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetStyle {
    /// Half-height sheet.
    Medium,
    /// Full-height sheet.
    Large,
    /// Starts at half height and can be dragged to full height.
    CanFullScreen,
    /// Sized to its content.
    FitContent,
    /// Compact card floating above the bottom edge, sized to content.
    AirpodsLike,
}

impl SheetStyle {
    /// All sheet styles, in declaration order.
    pub const ALL: [SheetStyle; 5] = [
        Self::Medium,
        Self::Large,
        Self::CanFullScreen,
        Self::FitContent,
        Self::AirpodsLike,
    ];

    /// Detents the rendering layer should offer for this style.
    pub fn detents(&self) -> &'static [Detent] {
        match self {
            Self::Medium => &[Detent::Medium],
            Self::Large => &[Detent::Large],
            Self::CanFullScreen => &[Detent::Medium, Detent::Large],
            Self::FitContent | Self::AirpodsLike => &[Detent::Fitted],
        }
    }
}

/// A height stop an overlay may rest at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Detent {
    /// Roughly half the container height.
    Medium,
    /// The full container height.
    Large,
    /// Exactly the height of the presented content.
    Fitted,
}

/// How a destination should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    /// Append to the navigation stack.
    Push,
    /// Sheet overlay with a style.
    Sheet(SheetStyle),
    /// Overlay covering the whole screen.
    FullScreenCover,
    /// Half-height modal.
    Modal,
    /// Modal that can be expanded to full height.
    ModalCanFullScreen,
    /// Modal sized to its content.
    ModalFitContent,
    /// Inset, rounded modal sized to its content.
    ModalAppleLike,
}

impl Route {
    /// Whether this route occupies an overlay slot (everything but `Push`).
    pub fn is_presentable(&self) -> bool {
        !matches!(self, Self::Push)
    }

    /// The overlay slot this route writes to, or `None` for `Push`.
    pub fn overlay_slot(&self) -> Option<OverlaySlot> {
        match self {
            Self::Push => None,
            Self::Sheet(_) => Some(OverlaySlot::Sheet),
            Self::FullScreenCover => Some(OverlaySlot::FullScreenCover),
            Self::Modal => Some(OverlaySlot::Modal),
            Self::ModalCanFullScreen => Some(OverlaySlot::ModalCanFullScreen),
            Self::ModalFitContent => Some(OverlaySlot::ModalFitContent),
            Self::ModalAppleLike => Some(OverlaySlot::ModalAppleLike),
        }
    }

    /// The sheet style, if this is a sheet route.
    pub fn sheet_style(&self) -> Option<SheetStyle> {
        match self {
            Self::Sheet(style) => Some(*style),
            _ => None,
        }
    }

    /// Detents the rendering layer should offer for this presentation.
    ///
    /// Empty for `Push` and `FullScreenCover`, which have no resting heights.
    pub fn detents(&self) -> &'static [Detent] {
        match self {
            Self::Push | Self::FullScreenCover => &[],
            Self::Sheet(style) => style.detents(),
            Self::Modal => &[Detent::Medium],
            Self::ModalCanFullScreen => &[Detent::Medium, Detent::Large],
            Self::ModalFitContent | Self::ModalAppleLike => &[Detent::Fitted],
        }
    }

    /// Short lowercase name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Sheet(_) => "sheet",
            Self::FullScreenCover => "full_screen_cover",
            Self::Modal => "modal",
            Self::ModalCanFullScreen => "modal_can_full_screen",
            Self::ModalFitContent => "modal_fit_content",
            Self::ModalAppleLike => "modal_apple_like",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sheet(style) => write!(f, "sheet({style:?})"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A single-destination holding cell dedicated to one presentable route kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlaySlot {
    /// Filled by `Route::Sheet(_)`, whatever the style.
    Sheet,
    /// Filled by `Route::FullScreenCover`.
    FullScreenCover,
    /// Filled by `Route::Modal`.
    Modal,
    /// Filled by `Route::ModalCanFullScreen`.
    ModalCanFullScreen,
    /// Filled by `Route::ModalFitContent`.
    ModalFitContent,
    /// Filled by `Route::ModalAppleLike`.
    ModalAppleLike,
}

impl OverlaySlot {
    /// Slots in the order `dismiss()` checks them.
    pub const PRECEDENCE: [OverlaySlot; 6] = [
        Self::Sheet,
        Self::FullScreenCover,
        Self::Modal,
        Self::ModalCanFullScreen,
        Self::ModalFitContent,
        Self::ModalAppleLike,
    ];

    /// Position of this slot in [`OverlaySlot::PRECEDENCE`].
    pub fn precedence(&self) -> usize {
        match self {
            Self::Sheet => 0,
            Self::FullScreenCover => 1,
            Self::Modal => 2,
            Self::ModalCanFullScreen => 3,
            Self::ModalFitContent => 4,
            Self::ModalAppleLike => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_routes() -> Vec<Route> {
        let mut routes = vec![
            Route::Push,
            Route::FullScreenCover,
            Route::Modal,
            Route::ModalCanFullScreen,
            Route::ModalFitContent,
            Route::ModalAppleLike,
        ];
        routes.extend(SheetStyle::ALL.iter().map(|s| Route::Sheet(*s)));
        routes
    }

    #[test]
    fn push_is_the_only_non_presentable_route() {
        for route in all_routes() {
            assert_eq!(route.is_presentable(), route != Route::Push, "{route}");
            assert_eq!(route.overlay_slot().is_some(), route.is_presentable());
        }
    }

    #[test]
    fn every_slot_is_reachable() {
        let reached: Vec<OverlaySlot> = all_routes()
            .iter()
            .filter_map(Route::overlay_slot)
            .collect();
        for slot in OverlaySlot::PRECEDENCE {
            assert!(reached.contains(&slot), "{slot:?} unreachable");
        }
    }

    #[test]
    fn all_sheet_styles_share_the_sheet_slot() {
        for style in SheetStyle::ALL {
            assert_eq!(Route::Sheet(style).overlay_slot(), Some(OverlaySlot::Sheet));
            assert_eq!(Route::Sheet(style).sheet_style(), Some(style));
        }
        assert_eq!(Route::Modal.sheet_style(), None);
    }

    #[test]
    fn precedence_index_matches_table() {
        for (i, slot) in OverlaySlot::PRECEDENCE.iter().enumerate() {
            assert_eq!(slot.precedence(), i);
        }
    }

    #[test]
    fn detents_follow_presentation_kind() {
        assert!(Route::Push.detents().is_empty());
        assert!(Route::FullScreenCover.detents().is_empty());
        assert_eq!(Route::Modal.detents(), &[Detent::Medium]);
        assert_eq!(
            Route::ModalCanFullScreen.detents(),
            &[Detent::Medium, Detent::Large]
        );
        assert_eq!(Route::ModalAppleLike.detents(), &[Detent::Fitted]);
        assert_eq!(
            Route::Sheet(SheetStyle::AirpodsLike).detents(),
            &[Detent::Fitted]
        );
        assert_eq!(Route::Sheet(SheetStyle::Large).detents(), &[Detent::Large]);
    }

    #[test]
    fn route_serde_is_snake_case() {
        let json = serde_json::to_string(&Route::Sheet(SheetStyle::CanFullScreen)).unwrap();
        assert_eq!(json, r#"{"sheet":"can_full_screen"}"#);
        let json = serde_json::to_string(&Route::ModalFitContent).unwrap();
        assert_eq!(json, r#""modal_fit_content""#);
        let parsed: Route = serde_json::from_str(r#"{"sheet":"medium"}"#).unwrap();
        assert_eq!(parsed, Route::Sheet(SheetStyle::Medium));
    }

    #[test]
    fn display_includes_sheet_style() {
        assert_eq!(Route::Sheet(SheetStyle::Large).to_string(), "sheet(Large)");
        assert_eq!(Route::FullScreenCover.to_string(), "full_screen_cover");
    }
}
