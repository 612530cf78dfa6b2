//! Card outline construction.
//!
//! Builds the closed outline of a card with rounded, cut or notched
//! ("curve") corners. The outline is a plain list of commands that any 2D
//! backend can fill and stroke; see `cardtrip-canvas` for a `tiny-skia`
//! renderer.
//!
//! # Example
//!
//! ```rust
//! use cardtrip_rs::{CardAttributes, CardKind};
//!
//! let attrs = CardAttributes::from_json(r#"{"cornerValue": 20, "allCornerType": 2}"#)?;
//! let spec = attrs.resolve(CardKind::Special, 200.0, 120.0)?;
//! let path = spec.build_path();
//! assert!(path.is_closed());
//! assert_eq!(path.quad_count(), 0);
//! # Ok::<(), cardtrip_rs::CardError>(())
//! ```

mod attributes;
mod corner;
mod error;
mod geometry;
mod path;
mod spec;
mod special;
mod svg;
mod tab;
mod trip;

// Re-export public API
pub use attributes::CardAttributes;
pub use corner::{Corner, CornerStyle, CornerValues};
pub use error::{CardError, CardResult};
pub use geometry::{CardColor, Insets, Point, Rect};
pub use path::{ArcSegment, CardPath, PathCommand};
pub use spec::{CardKind, CardSpec, TRIP_CORNER_VALUE};
pub use special::build_special_card_path;
pub use tab::{notch_oval, TAB_INSET, TAB_RISE_FACTOR, TAB_STEP};
pub use trip::{build_trip_content_path, build_trip_header_path};
