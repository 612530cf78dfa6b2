//! Error types for cardtrip-rs.

use crate::corner::Corner;
use thiserror::Error;

/// Result type alias using CardError.
pub type CardResult<T> = Result<T, CardError>;

/// Errors raised while turning host attributes into a [`crate::CardSpec`].
///
/// Building an outline never fails; these only come from the attribute
/// boundary.
#[derive(Debug, Error)]
pub enum CardError {
    /// Corner style ordinal outside the 0..=2 markup table.
    #[error("Unknown corner style ordinal: {0} (expected 0=rounded, 1=curve, 2=cut)")]
    UnknownCornerStyle(i32),

    /// Corner style name not one of rounded, curve, cut.
    #[error("Unknown corner style name: {0:?}")]
    UnknownCornerStyleName(String),

    /// Corner radius is negative or not finite.
    #[error("Invalid {corner} radius: {value}")]
    InvalidRadius { corner: Corner, value: f32 },

    /// Card dimensions must be finite and positive.
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: f32, height: f32 },

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// Attribute document is not valid JSON or has unexpected keys.
    #[error("Failed to parse card attributes: {0}")]
    AttributesParseError(#[from] serde_json::Error),
}
