//! Configuration diagnostics.
//!
//! The painting path itself is total and never fails; these errors exist
//! only for the validating `try_new` constructors callers can opt into
//! before geometry reaches the engine.

use miette::Diagnostic;
use thiserror::Error;

/// Errors from validating an icon configuration
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("invalid natural size: {width}x{height}")]
    #[diagnostic(
        code(iconru::config::invalid_natural_size),
        help("icon natural dimensions must be finite and non-negative")
    )]
    InvalidNaturalSize { width: f64, height: f64 },

    #[error("invalid ratio from shape: {value}")]
    #[diagnostic(
        code(iconru::config::invalid_ratio),
        help("ratio must be a finite number; omit it to paint at natural size")
    )]
    InvalidRatio { value: f64 },

    #[error("invalid stroke width: {value}")]
    #[diagnostic(code(iconru::config::invalid_stroke_width))]
    InvalidStrokeWidth { value: f64 },
}
