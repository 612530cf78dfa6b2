//! Reference renderer for card outlines using tiny-skia.
//!
//! Draws a [`cardtrip_rs::CardPath`] in two passes (a white fill with a
//! drop shadow, then the border stroke) and exports the result as PNG or SVG.
//!
//! # Example
//!
//! ```rust,ignore
//! use cardtrip_canvas::CardCanvas;
//! use cardtrip_rs::{CardKind, CardSpec};
//!
//! let spec = CardSpec::new(CardKind::TripHeader, 300.0, 100.0)?;
//! let png_data = CardCanvas::render(&spec)?.to_png(None)?;
//! ```

mod canvas;
mod convert;
mod error;
mod paint;
pub mod svg;

// Re-export public API
pub use canvas::CardCanvas;
pub use convert::to_skia_path;
pub use error::{CanvasError, CanvasResult};
pub use paint::{CardPaint, ShadowLayer, CARD_SHADOW_OFFSET_Y};
