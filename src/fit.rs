//! Proportional icon fitting.
//!
//! Computes the size an icon authored at a fixed reference size should
//! occupy inside a shape box, preserving its aspect ratio and leaving
//! room for the stroke.

use crate::style::IconStyle;
use crate::types::{ShapeBox, Size};

/// Compute the fitted size for an icon painted into `shape`.
///
/// The limiting axis is chosen from the icon's aspect relative to the
/// shape: a wide icon fits to the shape's width, a tall icon to its
/// height. A square icon is routed by shape orientation (a shape that is
/// not wider than tall fits by width); this tie-break is load-bearing and
/// must not be simplified.
///
/// `ratio_from_shape` scales the fitted dimension (1.0 = fill the limiting
/// axis completely), and the style's stroke inset is subtracted from both
/// axes afterwards.
///
/// The function is total over f64: a zero natural dimension divides to
/// Infinity/NaN, which propagates to the caller unchanged. Upstream
/// layers own geometry validation.
pub fn fitted_size(
    natural: Size,
    style: &IconStyle,
    shape: ShapeBox,
    ratio_from_shape: f64,
) -> Size {
    let (prop_w, prop_h) = if natural.h < natural.w || (natural.h == natural.w && shape.w <= shape.h)
    {
        // Width-limited: span the shape's width, derive height.
        (shape.w, shape.w * natural.h / natural.w)
    } else {
        // Height-limited: span the shape's height, derive width.
        (shape.h * natural.w / natural.h, shape.h)
    };

    let inset = style.stroke_inset();
    Size::new(
        prop_w * ratio_from_shape - inset,
        prop_h * ratio_from_shape - inset,
    )
}
