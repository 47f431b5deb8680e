//! Shared value types for icon painting.
//!
//! The painting path itself is deliberately unchecked (degenerate geometry
//! flows through as Infinity/NaN, see crate docs); the `try_*` constructors
//! exist for callers that want to validate user-provided geometry up front.

use std::fmt;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative when non-negative required
    Negative,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::Negative => write!(f, "value is negative"),
        }
    }
}

impl std::error::Error for NumericError {}

fn check_finite(val: f64) -> Result<f64, NumericError> {
    if val.is_nan() {
        Err(NumericError::NaN)
    } else if val.is_infinite() {
        Err(NumericError::Infinite)
    } else {
        Ok(val)
    }
}

fn check_non_negative(val: f64) -> Result<f64, NumericError> {
    let val = check_finite(val)?;
    if val < 0.0 {
        Err(NumericError::Negative)
    } else {
        Ok(val)
    }
}

/// A 2D size: an icon's natural (authored) dimensions, or a computed
/// fitted size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    /// Create a Size (unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(w: f64, h: f64) -> Size {
        Size { w, h }
    }

    /// Create a Size with validation (rejects NaN, infinite, negative).
    pub fn try_new(w: f64, h: f64) -> Result<Size, NumericError> {
        Ok(Size {
            w: check_non_negative(w)?,
            h: check_non_negative(h)?,
        })
    }

    /// Check if both dimensions are finite (not NaN or infinite)
    #[inline]
    pub fn is_finite(self) -> bool {
        self.w.is_finite() && self.h.is_finite()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// Target shape bounding box in drawing-surface coordinates.
///
/// Immutable for the lifetime of one painting session. A box with
/// `w` or `h` <= 0 is accepted and yields zero-area scaled output.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ShapeBox {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl ShapeBox {
    /// Create a ShapeBox (unchecked).
    /// Use `try_new` for user-provided values.
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> ShapeBox {
        ShapeBox { x, y, w, h }
    }

    /// Create a ShapeBox with validation (rejects NaN and infinite
    /// coordinates; degenerate non-positive extents remain allowed).
    pub fn try_new(x: f64, y: f64, w: f64, h: f64) -> Result<ShapeBox, NumericError> {
        Ok(ShapeBox {
            x: check_finite(x)?,
            y: check_finite(y)?,
            w: check_finite(w)?,
            h: check_finite(h)?,
        })
    }

    /// Get the size of the box
    #[inline]
    pub fn size(self) -> Size {
        Size::new(self.w, self.h)
    }
}

/// Simple color model; raw strings are passed through untouched so
/// surface-specific notations (CSS variables etc.) survive.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Named(String),
    Rgb(u8, u8, u8),
    Raw(String),
}

impl Color {
    /// Convenience constructor for named colors.
    pub fn named(name: impl Into<String>) -> Color {
        Color::Named(name.into())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(s) | Color::Raw(s) => write!(f, "{}", s),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

/// Line join style for stroked paths.
///
/// `Display` emits the SVG keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineJoin::Miter => write!(f, "miter"),
            LineJoin::Round => write!(f, "round"),
            LineJoin::Bevel => write!(f, "bevel"),
        }
    }
}
