//! Paint attributes applied once per painting session.

use crate::types::Color;

/// Stroke/fill attributes for one icon painting session.
///
/// The style is pushed to the drawing surface exactly once, at session
/// construction, before any primitive is emitted. `stroke_width` also
/// feeds the fit computation through [`IconStyle::stroke_inset`].
#[derive(Clone, Debug, PartialEq)]
pub struct IconStyle {
    /// When set, the icon is painted solid: the surface's fill color is
    /// set to `stroke_color` instead of `fill_color`.
    pub filled: bool,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub stroke_width: f64,
}

impl IconStyle {
    /// Outline style: stroked with the given color, filled with `fill`.
    pub fn outlined(stroke: Color, fill: Color, stroke_width: f64) -> IconStyle {
        IconStyle {
            filled: false,
            stroke_color: stroke,
            fill_color: fill,
            stroke_width,
        }
    }

    /// Solid style: the stroke color doubles as the fill color.
    pub fn solid(stroke: Color, stroke_width: f64) -> IconStyle {
        IconStyle {
            filled: true,
            fill_color: stroke.clone(),
            stroke_color: stroke,
            stroke_width,
        }
    }

    /// Inset subtracted from the fitted icon size so a thick stroke eats
    /// into the icon footprint instead of overflowing the shape.
    ///
    /// `(stroke_width - 1) * 2` for a non-zero stroke width, else 0.
    /// A 1px stroke therefore causes no shrinkage.
    #[inline]
    pub fn stroke_inset(&self) -> f64 {
        if self.stroke_width != 0.0 {
            (self.stroke_width - 1.0) * 2.0
        } else {
            0.0
        }
    }
}

impl Default for IconStyle {
    fn default() -> Self {
        IconStyle {
            filled: false,
            stroke_color: Color::named("black"),
            fill_color: Color::named("none"),
            stroke_width: 1.0,
        }
    }
}
