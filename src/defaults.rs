//! Default placement margins (all in drawing-surface units).
//!
//! Callers pass these to the placement operations; they are plain named
//! constants, not mutable global state.

/// Fixed top margin for [`Placement::TopLeft`](crate::Placement::TopLeft).
pub const TOP_MARGIN: f64 = 4.0;
/// Fixed left margin for [`Placement::TopLeft`](crate::Placement::TopLeft).
pub const LEFT_MARGIN: f64 = 4.0;
/// Gap kept below bottom-anchored icons.
pub const BOTTOM_MARGIN: f64 = 7.0;
/// Leftward shift applied by the bottom-left-offset placement.
pub const FROM_CENTER_MARGIN: f64 = 4.0;
/// Divisor for the proportional top-left placement (margin = extent / divisor).
pub const PROPORTIONAL_DIVISOR: f64 = 20.0;
