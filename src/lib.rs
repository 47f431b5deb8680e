//! Scale-and-anchor engine for painting vector icon glyphs onto diagram
//! shapes.
//!
//! An icon is authored once at a fixed reference size. At draw time it
//! must render inside an arbitrary shape bounding box, proportionally
//! scaled and anchored by a placement policy. This crate provides:
//!
//! - [`fit::fitted_size`] — the aspect-preserving fit of an icon's
//!   natural size into a shape box,
//! - [`IconCanvas`] — a per-shape painting session that owns the derived
//!   scale factors and a movable icon-local origin, and forwards every
//!   drawing primitive to an underlying [`Surface`] with the scale and
//!   origin applied,
//! - [`kinds`] — the suffix-derived element-kind category sets
//!   (events / tasks / gateways).
//!
//! The engine is total over f64: degenerate geometry (zero-size icons or
//! shapes) produces degenerate coordinates, not errors. Upstream layers
//! own validation; [`IconConfig::try_new`] is available when rejection is
//! preferred.
//!
//! ```
//! use iconru::{
//!     Color, IconCanvas, IconConfig, IconStyle, Placement, ShapeBox, Size,
//!     surface::RecordingSurface,
//! };
//!
//! let config = IconConfig::new(
//!     Size::new(100.0, 50.0),
//!     IconStyle::outlined(Color::named("black"), Color::named("none"), 1.0),
//!     Some(1.0),
//!     Placement::Centered,
//! );
//!
//! let mut surface = RecordingSurface::new();
//! let mut canvas = IconCanvas::new(&mut surface, ShapeBox::new(10.0, 10.0, 40.0, 40.0), &config);
//! assert_eq!(canvas.scale().x, 0.4);
//!
//! canvas.begin();
//! canvas.move_to(0.0, 25.0);
//! canvas.line_to(100.0, 25.0);
//! canvas.stroke();
//! ```

pub mod canvas;
pub mod defaults;
pub mod errors;
pub mod fit;
pub mod kinds;
pub(crate) mod log;
pub mod style;
pub mod surface;
pub mod svg;
pub mod types;

pub use canvas::{IconCanvas, IconConfig, Placement};
pub use errors::IconError;
pub use fit::fitted_size;
pub use kinds::ElementKind;
pub use style::IconStyle;
pub use surface::Surface;
pub use svg::SvgSurface;
pub use types::{Color, LineJoin, NumericError, ShapeBox, Size};
