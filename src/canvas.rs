//! The scaled drawing canvas: one icon painting session.
//!
//! An [`IconCanvas`] wraps a [`Surface`] for the duration of painting one
//! icon onto one shape. It owns the session's scale factors (fixed at
//! construction) and the icon-local origin (movable via the placement
//! operations), and forwards every primitive to the surface after mapping
//! icon-local coordinates into surface space:
//!
//! ```text
//! x -> origin.x + x * scale.x
//! y -> origin.y + y * scale.y
//! ```
//!
//! Sessions are single-threaded and single-use; construct a fresh one per
//! shape, per redraw. Nothing is cached across sessions.

use glam::{DVec2, dvec2};

use crate::errors::IconError;
use crate::fit::fitted_size;
use crate::log::{debug, warn};
use crate::style::IconStyle;
use crate::surface::Surface;
use crate::types::{Color, LineJoin, ShapeBox, Size};

/// Where the icon's local (0,0) lands inside the shape box.
///
/// Each variant overwrites the origin; all are expressed relative to the
/// shape box, in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Placement {
    /// Margin expressed as a fraction of the shape's own extent:
    /// origin = (shape.x + shape.w/divisor, shape.y + shape.h/divisor).
    TopLeftProportional { divisor: f64 },
    /// Fixed-pixel margins from the shape's top-left corner.
    TopLeft { top_margin: f64, left_margin: f64 },
    /// Center the scaled icon footprint within the shape.
    Centered,
    /// Horizontally centered, resting `bottom_margin` above the shape's
    /// bottom edge.
    BottomCentered { bottom_margin: f64 },
    /// Bottom-anchored like [`Placement::BottomCentered`], but the X
    /// offset divides the free width by 3 (left-biased, not a true third
    /// point) and then shifts left by `from_center_margin`.
    BottomLeftOffset {
        bottom_margin: f64,
        from_center_margin: f64,
    },
}

/// Configuration for one painting session.
#[derive(Clone, Debug)]
pub struct IconConfig {
    /// The icon asset's authored size, before any scaling.
    pub natural_size: Size,
    pub style: IconStyle,
    /// Fraction of the shape's fitted dimension the icon should occupy.
    /// `None` (or zero) paints the icon unscaled at its natural size.
    pub ratio_from_shape: Option<f64>,
    pub placement: Placement,
}

impl IconConfig {
    /// Create a config (unchecked; degenerate geometry flows through the
    /// engine as-is).
    pub fn new(
        natural_size: Size,
        style: IconStyle,
        ratio_from_shape: Option<f64>,
        placement: Placement,
    ) -> IconConfig {
        IconConfig {
            natural_size,
            style,
            ratio_from_shape,
            placement,
        }
    }

    /// Create a config with validation, for callers that want degenerate
    /// geometry rejected up front rather than propagated.
    pub fn try_new(
        natural_size: Size,
        style: IconStyle,
        ratio_from_shape: Option<f64>,
        placement: Placement,
    ) -> Result<IconConfig, IconError> {
        if !natural_size.is_finite() || natural_size.w < 0.0 || natural_size.h < 0.0 {
            return Err(IconError::InvalidNaturalSize {
                width: natural_size.w,
                height: natural_size.h,
            });
        }
        if let Some(ratio) = ratio_from_shape {
            if !ratio.is_finite() {
                return Err(IconError::InvalidRatio { value: ratio });
            }
        }
        if !style.stroke_width.is_finite() || style.stroke_width < 0.0 {
            return Err(IconError::InvalidStrokeWidth {
                value: style.stroke_width,
            });
        }
        Ok(IconConfig::new(natural_size, style, ratio_from_shape, placement))
    }
}

/// One icon painting session over a drawing surface.
///
/// Scale factors never change after construction; only the origin moves.
pub struct IconCanvas<'a, S: Surface> {
    surface: &'a mut S,
    shape: ShapeBox,
    natural: Size,
    scale: DVec2,
    origin: DVec2,
}

impl<'a, S: Surface> IconCanvas<'a, S> {
    /// Start a painting session.
    ///
    /// Derives the session scale factors (via the fit computation when a
    /// ratio is configured, identity otherwise), pushes the style to the
    /// surface, then applies the configured placement. The style push
    /// happens exactly once, before any primitive can be emitted: fill
    /// color is the stroke color for filled icons (solid glyphs paint in
    /// their stroke color), the fill color otherwise.
    pub fn new(surface: &'a mut S, shape: ShapeBox, config: &IconConfig) -> IconCanvas<'a, S> {
        let scale = match config.ratio_from_shape {
            Some(ratio) if ratio != 0.0 => {
                let fitted = fitted_size(config.natural_size, &config.style, shape, ratio);
                if !fitted.is_finite() {
                    warn!(
                        natural = %config.natural_size,
                        "fitted icon size is not finite; painting will emit degenerate coordinates"
                    );
                }
                dvec2(
                    fitted.w / config.natural_size.w,
                    fitted.h / config.natural_size.h,
                )
            }
            _ => DVec2::ONE,
        };

        let fill = if config.style.filled {
            &config.style.stroke_color
        } else {
            &config.style.fill_color
        };
        surface.set_fill_color(fill);
        surface.set_stroke_width(config.style.stroke_width);

        debug!(
            shape = ?shape,
            scale_x = scale.x,
            scale_y = scale.y,
            "icon painting session started"
        );

        let mut canvas = IconCanvas {
            surface,
            shape,
            natural: config.natural_size,
            scale,
            origin: DVec2::ZERO,
        };
        canvas.place(config.placement);
        canvas
    }

    /// Current origin (surface-space location of icon-local (0,0)).
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Session scale factors (fixed at construction).
    pub fn scale(&self) -> DVec2 {
        self.scale
    }

    /// Apply a placement, overwriting the origin.
    pub fn place(&mut self, placement: Placement) {
        match placement {
            Placement::TopLeftProportional { divisor } => self.top_left_proportional(divisor),
            Placement::TopLeft {
                top_margin,
                left_margin,
            } => self.top_left(top_margin, left_margin),
            Placement::Centered => self.centered(),
            Placement::BottomCentered { bottom_margin } => self.bottom_centered(bottom_margin),
            Placement::BottomLeftOffset {
                bottom_margin,
                from_center_margin,
            } => self.bottom_left_offset(bottom_margin, from_center_margin),
        }
    }

    // ---- placement operations -------------------------------------------

    /// Origin at a margin that is a fraction of the shape's own extent.
    pub fn top_left_proportional(&mut self, divisor: f64) {
        self.origin = dvec2(
            self.shape.x + self.shape.w / divisor,
            self.shape.y + self.shape.h / divisor,
        );
    }

    /// Origin at fixed-pixel margins from the shape's top-left corner.
    pub fn top_left(&mut self, top_margin: f64, left_margin: f64) {
        self.origin = dvec2(self.shape.x + left_margin, self.shape.y + top_margin);
    }

    /// Center the scaled icon footprint within the shape.
    pub fn centered(&mut self) {
        self.origin = dvec2(
            self.shape.x + (self.shape.w - self.natural.w * self.scale.x) / 2.0,
            self.shape.y + (self.shape.h - self.natural.h * self.scale.y) / 2.0,
        );
    }

    /// Horizontally centered, bottom-anchored with the given gap below.
    pub fn bottom_centered(&mut self, bottom_margin: f64) {
        self.origin = dvec2(
            self.shape.x + (self.shape.w - self.natural.w * self.scale.x) / 2.0,
            self.shape.y + (self.shape.h - self.natural.h * self.scale.y - bottom_margin),
        );
    }

    /// Bottom-anchored, left of center.
    ///
    /// The free width divides by 3 here, not 2: the observed behavior is
    /// deliberately left-biased and is kept exactly as-is.
    pub fn bottom_left_offset(&mut self, bottom_margin: f64, from_center_margin: f64) {
        self.origin = dvec2(
            self.shape.x + (self.shape.w - self.natural.w * self.scale.x) / 3.0
                - from_center_margin,
            self.shape.y + (self.shape.h - self.natural.h * self.scale.y - bottom_margin),
        );
    }

    /// Move the origin by an icon-local delta.
    ///
    /// The only operation whose argument is itself scaled: the delta is in
    /// icon-local units, so further movement after an initial placement
    /// composes with the session's scale.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.origin += dvec2(self.scale.x * dx, self.scale.y * dy);
    }

    // ---- coordinate mapping ---------------------------------------------

    #[inline]
    fn px(&self, x: f64) -> f64 {
        self.origin.x + x * self.scale.x
    }

    #[inline]
    fn py(&self, y: f64) -> f64 {
        self.origin.y + y * self.scale.y
    }

    // ---- primitive forwarding -------------------------------------------

    pub fn begin(&mut self) {
        self.surface.begin();
    }

    pub fn close(&mut self) {
        self.surface.close();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let (x, y) = (self.px(x), self.py(y));
        self.surface.move_to(x, y);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let (x, y) = (self.px(x), self.py(y));
        self.surface.line_to(x, y);
    }

    pub fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        let (x1, y1) = (self.px(x1), self.py(y1));
        let (x2, y2) = (self.px(x2), self.py(y2));
        let (x3, y3) = (self.px(x3), self.py(y3));
        self.surface.curve_to(x1, y1, x2, y2, x3, y3);
    }

    /// Arc radii scale without origin offset; angle and flags pass
    /// through untouched.
    #[allow(clippy::too_many_arguments)]
    pub fn arc_to(
        &mut self,
        rx: f64,
        ry: f64,
        angle: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) {
        let (rx, ry) = (rx * self.scale.x, ry * self.scale.y);
        let (x, y) = (self.px(x), self.py(y));
        self.surface.arc_to(rx, ry, angle, large_arc, sweep, x, y);
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let (x, y) = (self.px(x), self.py(y));
        self.surface.rect(x, y, w * self.scale.x, h * self.scale.y);
    }

    /// Corner radii `dx`/`dy` pass through unscaled.
    pub fn roundrect(&mut self, x: f64, y: f64, w: f64, h: f64, dx: f64, dy: f64) {
        let (x, y) = (self.px(x), self.py(y));
        self.surface
            .roundrect(x, y, w * self.scale.x, h * self.scale.y, dx, dy);
    }

    pub fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let (x, y) = (self.px(x), self.py(y));
        self.surface.ellipse(x, y, w * self.scale.x, h * self.scale.y);
    }

    /// Rotation center is icon-local but deliberately NOT scaled: it is
    /// offset against the already-placed icon, not a size needing
    /// proportional fitting. Only the origin translation applies.
    pub fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64) {
        self.surface
            .rotate(theta, flip_h, flip_v, cx + self.origin.x, cy + self.origin.y);
    }

    pub fn fill(&mut self) {
        self.surface.fill();
    }

    pub fn stroke(&mut self) {
        self.surface.stroke();
    }

    pub fn fill_and_stroke(&mut self) {
        self.surface.fill_and_stroke();
    }

    pub fn set_stroke_color(&mut self, color: &Color) {
        self.surface.set_stroke_color(color);
    }

    /// Switch the surface to round line joins.
    pub fn set_round_line_join(&mut self) {
        self.surface.set_line_join(LineJoin::Round);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{Op, RecordingSurface};

    const EPSILON: f64 = 1e-10;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "{} != {}",
            actual,
            expected
        );
    }

    fn test_style() -> IconStyle {
        IconStyle::outlined(Color::named("black"), Color::named("white"), 1.0)
    }

    /// The worked example: 100x50 icon, (10,10,40,40) shape, ratio 1.
    fn example_config(placement: Placement) -> IconConfig {
        IconConfig::new(Size::new(100.0, 50.0), test_style(), Some(1.0), placement)
    }

    #[test]
    fn session_scale_from_worked_example() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let canvas = IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        assert_close(canvas.scale().x, 0.4);
        assert_close(canvas.scale().y, 0.4);
    }

    #[test]
    fn omitted_ratio_paints_unscaled() {
        let mut surface = RecordingSurface::new();
        let config = IconConfig::new(
            Size::new(100.0, 50.0),
            test_style(),
            None,
            Placement::Centered,
        );
        let canvas = IconCanvas::new(&mut surface, ShapeBox::new(0.0, 0.0, 40.0, 40.0), &config);
        assert_close(canvas.scale().x, 1.0);
        assert_close(canvas.scale().y, 1.0);
    }

    #[test]
    fn zero_ratio_paints_unscaled() {
        let mut surface = RecordingSurface::new();
        let config = IconConfig::new(
            Size::new(100.0, 50.0),
            test_style(),
            Some(0.0),
            Placement::Centered,
        );
        let canvas = IconCanvas::new(&mut surface, ShapeBox::new(0.0, 0.0, 40.0, 40.0), &config);
        assert_close(canvas.scale().x, 1.0);
        assert_close(canvas.scale().y, 1.0);
    }

    #[test]
    fn style_applied_before_any_primitive() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        {
            let mut canvas =
                IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
            canvas.begin();
            canvas.move_to(0.0, 0.0);
        }
        assert_eq!(surface.ops()[0], Op::SetFillColor(Color::named("white")));
        assert_eq!(surface.ops()[1], Op::SetStrokeWidth(1.0));
        assert_eq!(surface.ops()[2], Op::Begin);
    }

    #[test]
    fn filled_icon_fills_with_stroke_color() {
        let mut surface = RecordingSurface::new();
        let config = IconConfig::new(
            Size::new(10.0, 10.0),
            IconStyle::solid(Color::named("red"), 2.0),
            None,
            Placement::Centered,
        );
        IconCanvas::new(&mut surface, ShapeBox::new(0.0, 0.0, 40.0, 40.0), &config);
        assert_eq!(surface.ops()[0], Op::SetFillColor(Color::named("red")));
        assert_eq!(surface.ops()[1], Op::SetStrokeWidth(2.0));
    }

    #[test]
    fn centered_origin_matches_scaled_footprint() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        // scaled footprint is 40x20: x centered exactly, y padded by 10.
        canvas.move_to(0.0, 0.0);
        assert_eq!(surface.last(), Some(&Op::MoveTo(10.0, 20.0)));
    }

    #[test]
    fn top_left_uses_fixed_margins() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas = IconCanvas::new(
            &mut surface,
            shape,
            &example_config(Placement::TopLeft {
                top_margin: 4.0,
                left_margin: 6.0,
            }),
        );
        canvas.move_to(0.0, 0.0);
        assert_eq!(surface.last(), Some(&Op::MoveTo(16.0, 14.0)));
    }

    #[test]
    fn top_left_proportional_divides_shape_extent() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 80.0);
        let mut canvas = IconCanvas::new(
            &mut surface,
            shape,
            &example_config(Placement::TopLeftProportional { divisor: 20.0 }),
        );
        canvas.move_to(0.0, 0.0);
        assert_eq!(surface.last(), Some(&Op::MoveTo(12.0, 14.0)));
    }

    #[test]
    fn bottom_centered_rests_above_bottom_edge() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas = IconCanvas::new(
            &mut surface,
            shape,
            &example_config(Placement::BottomCentered { bottom_margin: 7.0 }),
        );
        // x as centered; y = 10 + (40 - 20 - 7) = 23
        canvas.move_to(0.0, 0.0);
        assert_eq!(surface.last(), Some(&Op::MoveTo(10.0, 23.0)));
    }

    #[test]
    fn bottom_left_offset_uses_third_not_half() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas = IconCanvas::new(
            &mut surface,
            shape,
            &example_config(Placement::BottomLeftOffset {
                bottom_margin: 7.0,
                from_center_margin: 4.0,
            }),
        );
        canvas.move_to(0.0, 0.0);
        // scaled width 40 fills the shape: x = 10 + 0/3 - 4 = 6; y as bottom_centered.
        assert_eq!(surface.last(), Some(&Op::MoveTo(6.0, 23.0)));
    }

    #[test]
    fn translate_scales_its_delta() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        {
            let mut canvas =
                IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
            canvas.move_to(5.0, 5.0);
            canvas.translate(10.0, 20.0);
            canvas.move_to(5.0, 5.0);
        }

        // ops[0..2] are the construction-time style push.
        let (Op::MoveTo(x0, y0), Op::MoveTo(x1, y1)) = (&surface.ops()[2], &surface.ops()[3])
        else {
            panic!("expected two recorded move_to ops");
        };
        // scale is (0.4, 0.4), so the origin moved by (4, 8).
        assert_close(x1 - x0, 4.0);
        assert_close(y1 - y0, 8.0);
    }

    #[test]
    fn coordinates_scale_and_offset() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        // origin (10, 20), scale (0.4, 0.4)
        canvas.line_to(50.0, 25.0);
        assert_eq!(surface.last(), Some(&Op::LineTo(30.0, 30.0)));
    }

    #[test]
    fn curve_to_maps_all_three_points() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        canvas.curve_to(0.0, 0.0, 10.0, 10.0, 100.0, 50.0);
        assert_eq!(
            surface.last(),
            Some(&Op::CurveTo(10.0, 20.0, 14.0, 24.0, 50.0, 40.0))
        );
    }

    #[test]
    fn arc_radii_scale_without_origin_offset() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        canvas.arc_to(10.0, 5.0, 30.0, true, false, 100.0, 50.0);
        assert_eq!(
            surface.last(),
            Some(&Op::ArcTo(4.0, 2.0, 30.0, true, false, 50.0, 40.0))
        );
    }

    #[test]
    fn rect_scales_extent_without_origin_offset() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        canvas.rect(0.0, 0.0, 100.0, 50.0);
        assert_eq!(surface.last(), Some(&Op::Rect(10.0, 20.0, 40.0, 20.0)));
    }

    #[test]
    fn roundrect_corner_radii_pass_through() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        canvas.roundrect(0.0, 0.0, 100.0, 50.0, 3.0, 3.0);
        assert_eq!(
            surface.last(),
            Some(&Op::RoundRect(10.0, 20.0, 40.0, 20.0, 3.0, 3.0))
        );
    }

    #[test]
    fn ellipse_maps_like_rect() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        canvas.ellipse(10.0, 10.0, 20.0, 20.0);
        assert_eq!(surface.last(), Some(&Op::Ellipse(14.0, 24.0, 8.0, 8.0)));
    }

    #[test]
    fn rotation_center_is_never_scaled() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        // scale is 0.4 but the center offsets by exactly (5, 5).
        canvas.rotate(45.0, false, false, 5.0, 5.0);
        assert_eq!(
            surface.last(),
            Some(&Op::Rotate(45.0, false, false, 15.0, 25.0))
        );
    }

    #[test]
    fn set_round_line_join_forwards_round() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(0.0, 0.0, 40.0, 40.0);
        let mut canvas =
            IconCanvas::new(&mut surface, shape, &example_config(Placement::Centered));
        canvas.set_round_line_join();
        assert_eq!(surface.last(), Some(&Op::SetLineJoin(LineJoin::Round)));
    }

    #[test]
    fn replacement_overwrites_origin() {
        let mut surface = RecordingSurface::new();
        let shape = ShapeBox::new(10.0, 10.0, 40.0, 40.0);
        let mut canvas = IconCanvas::new(
            &mut surface,
            shape,
            &example_config(Placement::TopLeft {
                top_margin: 0.0,
                left_margin: 0.0,
            }),
        );
        canvas.translate(1.0, 1.0);
        canvas.centered();
        assert_close(canvas.origin().x, 10.0);
        assert_close(canvas.origin().y, 20.0);
    }

    #[test]
    fn try_new_rejects_bad_geometry() {
        assert!(
            IconConfig::try_new(
                Size::new(f64::NAN, 10.0),
                test_style(),
                None,
                Placement::Centered
            )
            .is_err()
        );
        assert!(
            IconConfig::try_new(
                Size::new(10.0, 10.0),
                test_style(),
                Some(f64::INFINITY),
                Placement::Centered
            )
            .is_err()
        );
        let mut bad_style = test_style();
        bad_style.stroke_width = -1.0;
        assert!(
            IconConfig::try_new(Size::new(10.0, 10.0), bad_style, None, Placement::Centered)
                .is_err()
        );
        assert!(
            IconConfig::try_new(Size::new(10.0, 10.0), test_style(), Some(1.0), Placement::Centered)
                .is_ok()
        );
    }
}
