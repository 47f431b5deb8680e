//! The low-level drawing surface boundary.
//!
//! The icon engine never rasterizes anything itself: it resolves
//! coordinates and forwards to a [`Surface`], which is assumed to already
//! exist (an SVG serializer, a raster canvas, a test recorder). All
//! methods are synchronous and infallible; surfaces that can fail should
//! panic or buffer their own error state rather than widen this boundary.

use crate::types::{Color, LineJoin};

/// Primitive draw operations accepting surface-space coordinates.
///
/// Style setters mutate surface-global state: whatever fill/stroke is
/// current applies to subsequent paint calls. Callers must therefore set
/// style before emitting primitives (the session object in
/// [`canvas`](crate::canvas) enforces this ordering).
pub trait Surface {
    fn begin(&mut self);
    fn close(&mut self);

    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64);
    #[allow(clippy::too_many_arguments)]
    fn arc_to(&mut self, rx: f64, ry: f64, angle: f64, large_arc: bool, sweep: bool, x: f64, y: f64);

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn roundrect(&mut self, x: f64, y: f64, w: f64, h: f64, dx: f64, dy: f64);
    fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Rotate subsequent output by `theta` degrees about `(cx, cy)`,
    /// optionally flipping horizontally/vertically first.
    fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64);

    fn fill(&mut self);
    fn stroke(&mut self);
    fn fill_and_stroke(&mut self);

    fn set_fill_color(&mut self, color: &Color);
    fn set_stroke_color(&mut self, color: &Color);
    fn set_stroke_width(&mut self, width: f64);
    fn set_line_join(&mut self, join: LineJoin);
}

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Begin,
    Close,
    MoveTo(f64, f64),
    LineTo(f64, f64),
    CurveTo(f64, f64, f64, f64, f64, f64),
    ArcTo(f64, f64, f64, bool, bool, f64, f64),
    Rect(f64, f64, f64, f64),
    RoundRect(f64, f64, f64, f64, f64, f64),
    Ellipse(f64, f64, f64, f64),
    Rotate(f64, bool, bool, f64, f64),
    Fill,
    Stroke,
    FillAndStroke,
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetStrokeWidth(f64),
    SetLineJoin(LineJoin),
}

/// A [`Surface`] that records every call it receives.
///
/// Used by the test suite to observe the exact coordinates a wrapper
/// emits; also handy for replaying one primitive stream onto several
/// real surfaces.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded ops, oldest first.
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// The most recent recorded op, if any.
    pub fn last(&self) -> Option<&Op> {
        self.ops.last()
    }
}

impl Surface for RecordingSurface {
    fn begin(&mut self) {
        self.ops.push(Op::Begin);
    }

    fn close(&mut self) {
        self.ops.push(Op::Close);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::LineTo(x, y));
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        self.ops.push(Op::CurveTo(x1, y1, x2, y2, x3, y3));
    }

    fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) {
        self.ops.push(Op::ArcTo(rx, ry, angle, large_arc, sweep, x, y));
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Rect(x, y, w, h));
    }

    fn roundrect(&mut self, x: f64, y: f64, w: f64, h: f64, dx: f64, dy: f64) {
        self.ops.push(Op::RoundRect(x, y, w, h, dx, dy));
    }

    fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::Ellipse(x, y, w, h));
    }

    fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64) {
        self.ops.push(Op::Rotate(theta, flip_h, flip_v, cx, cy));
    }

    fn fill(&mut self) {
        self.ops.push(Op::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }

    fn fill_and_stroke(&mut self) {
        self.ops.push(Op::FillAndStroke);
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.ops.push(Op::SetFillColor(color.clone()));
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.ops.push(Op::SetStrokeColor(color.clone()));
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.ops.push(Op::SetStrokeWidth(width));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ops.push(Op::SetLineJoin(join));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_preserves_call_order() {
        let mut surface = RecordingSurface::new();
        surface.set_stroke_width(2.0);
        surface.begin();
        surface.move_to(1.0, 2.0);
        surface.line_to(3.0, 4.0);
        surface.stroke();

        assert_eq!(
            surface.ops(),
            &[
                Op::SetStrokeWidth(2.0),
                Op::Begin,
                Op::MoveTo(1.0, 2.0),
                Op::LineTo(3.0, 4.0),
                Op::Stroke,
            ]
        );
        assert_eq!(surface.last(), Some(&Op::Stroke));
    }
}
