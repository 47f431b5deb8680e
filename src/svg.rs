//! SVG-emitting drawing surface.
//!
//! Serializes the primitive stream into `<path>`/`<rect>`/`<ellipse>`
//! markup. Style setters mutate surface-global state; each `fill`,
//! `stroke` or `fill_and_stroke` call flushes the pending shape as one
//! element carrying the state current at flush time. `rotate` composes a
//! `transform` attribute applied to every element flushed afterwards.

use std::fmt::Write as _;

use crate::surface::Surface;
use crate::types::{Color, LineJoin};

/// How a flushed shape gets painted.
#[derive(Clone, Copy, PartialEq)]
enum PaintMode {
    Fill,
    Stroke,
    FillAndStroke,
}

/// Shape accumulated since the last `begin`/`rect`/`ellipse`.
enum Pending {
    None,
    Path(String),
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        radii: Option<(f64, f64)>,
    },
    Ellipse {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
    },
}

/// A [`Surface`] that renders the primitive stream to SVG markup.
pub struct SvgSurface {
    elements: Vec<String>,
    pending: Pending,
    fill: String,
    stroke: String,
    stroke_width: f64,
    line_join: LineJoin,
    transform: Option<String>,
}

impl SvgSurface {
    pub fn new() -> SvgSurface {
        SvgSurface {
            elements: Vec::new(),
            pending: Pending::None,
            fill: "none".to_string(),
            stroke: "black".to_string(),
            stroke_width: 1.0,
            line_join: LineJoin::Miter,
            transform: None,
        }
    }

    /// Consume the surface and return the emitted markup, one element per
    /// line.
    pub fn finish(self) -> String {
        self.elements.join("\n")
    }

    fn path_data(&mut self) -> &mut String {
        // Path commands arriving without an explicit begin still land
        // somewhere sensible.
        if !matches!(self.pending, Pending::Path(_)) {
            self.pending = Pending::Path(String::new());
        }
        match &mut self.pending {
            Pending::Path(d) => d,
            _ => unreachable!(),
        }
    }

    fn flush(&mut self, mode: PaintMode) {
        let fill = match mode {
            PaintMode::Fill | PaintMode::FillAndStroke => self.fill.as_str(),
            PaintMode::Stroke => "none",
        };
        let stroke = match mode {
            PaintMode::Stroke | PaintMode::FillAndStroke => self.stroke.as_str(),
            PaintMode::Fill => "none",
        };

        let mut attrs = String::new();
        write!(attrs, " fill=\"{}\" stroke=\"{}\"", fill, stroke).unwrap();
        if stroke != "none" {
            write!(attrs, " stroke-width=\"{}\"", fmt_num(self.stroke_width)).unwrap();
            if self.line_join != LineJoin::Miter {
                write!(attrs, " stroke-linejoin=\"{}\"", self.line_join).unwrap();
            }
        }
        if let Some(transform) = &self.transform {
            write!(attrs, " transform=\"{}\"", transform).unwrap();
        }

        let element = match std::mem::replace(&mut self.pending, Pending::None) {
            Pending::None => return,
            Pending::Path(d) => format!("<path d=\"{}\"{}/>", d, attrs),
            Pending::Rect { x, y, w, h, radii } => {
                let mut el = format!(
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                    fmt_num(x),
                    fmt_num(y),
                    fmt_num(w),
                    fmt_num(h)
                );
                if let Some((rx, ry)) = radii {
                    write!(el, " rx=\"{}\" ry=\"{}\"", fmt_num(rx), fmt_num(ry)).unwrap();
                }
                el.push_str(&attrs);
                el.push_str("/>");
                el
            }
            Pending::Ellipse { x, y, w, h } => format!(
                "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\"{}/>",
                fmt_num(x + w / 2.0),
                fmt_num(y + h / 2.0),
                fmt_num(w / 2.0),
                fmt_num(h / 2.0),
                attrs
            ),
        };
        self.elements.push(element);
    }
}

impl Default for SvgSurface {
    fn default() -> Self {
        SvgSurface::new()
    }
}

impl Surface for SvgSurface {
    fn begin(&mut self) {
        self.pending = Pending::Path(String::new());
    }

    fn close(&mut self) {
        self.path_data().push('Z');
    }

    fn move_to(&mut self, x: f64, y: f64) {
        let cmd = format!("M{},{}", fmt_num(x), fmt_num(y));
        self.path_data().push_str(&cmd);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        let cmd = format!("L{},{}", fmt_num(x), fmt_num(y));
        self.path_data().push_str(&cmd);
    }

    fn curve_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        let cmd = format!(
            "C{},{} {},{} {},{}",
            fmt_num(x1),
            fmt_num(y1),
            fmt_num(x2),
            fmt_num(y2),
            fmt_num(x3),
            fmt_num(y3)
        );
        self.path_data().push_str(&cmd);
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
        let cmd = format!(
            "A{},{} {} {} {} {},{}",
            fmt_num(rx),
            fmt_num(ry),
            fmt_num(angle),
            large_arc as u8,
            sweep as u8,
            fmt_num(x),
            fmt_num(y)
        );
        self.path_data().push_str(&cmd);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.pending = Pending::Rect {
            x,
            y,
            w,
            h,
            radii: None,
        };
    }

    fn roundrect(&mut self, x: f64, y: f64, w: f64, h: f64, dx: f64, dy: f64) {
        self.pending = Pending::Rect {
            x,
            y,
            w,
            h,
            radii: Some((dx, dy)),
        };
    }

    fn ellipse(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.pending = Pending::Ellipse { x, y, w, h };
    }

    fn rotate(&mut self, theta: f64, flip_h: bool, flip_v: bool, cx: f64, cy: f64) {
        let mut t = self.transform.take().unwrap_or_default();
        if flip_h || flip_v {
            let sx = if flip_h { -1.0 } else { 1.0 };
            let sy = if flip_v { -1.0 } else { 1.0 };
            if !t.is_empty() {
                t.push(' ');
            }
            write!(
                t,
                "translate({},{}) scale({},{}) translate({},{})",
                fmt_num(cx),
                fmt_num(cy),
                fmt_num(sx),
                fmt_num(sy),
                fmt_num(-cx),
                fmt_num(-cy)
            )
            .unwrap();
        }
        if theta != 0.0 {
            if !t.is_empty() {
                t.push(' ');
            }
            write!(t, "rotate({},{},{})", fmt_num(theta), fmt_num(cx), fmt_num(cy)).unwrap();
        }
        self.transform = if t.is_empty() { None } else { Some(t) };
    }

    fn fill(&mut self) {
        self.flush(PaintMode::Fill);
    }

    fn stroke(&mut self) {
        self.flush(PaintMode::Stroke);
    }

    fn fill_and_stroke(&mut self) {
        self.flush(PaintMode::FillAndStroke);
    }

    fn set_fill_color(&mut self, color: &Color) {
        self.fill = color.to_string();
    }

    fn set_stroke_color(&mut self, color: &Color) {
        self.stroke = color.to_string();
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.line_join = join;
    }
}

/// Format a number in `%g` style: 6 significant figures, trailing zeros
/// trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    const SIG_FIGS: i32 = 6;

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(SIG_FIGS - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (SIG_FIGS - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    s.to_string()
}
