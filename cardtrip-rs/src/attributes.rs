//! Host attribute sets and their resolution into a [`CardSpec`].
//!
//! Attributes mirror the markup a host view is declared with: every field is
//! optional, and per-corner fields fall back to the shared `cornerValue` /
//! `allCornerType`. Resolution applies those fallbacks once, so builders only
//! ever see concrete values.

use crate::corner::{Corner, CornerStyle, CornerValues};
use crate::error::CardResult;
use crate::geometry::CardColor;
use crate::spec::{validate_radius, CardKind, CardSpec};
use serde::{Deserialize, Serialize};

/// Raw card attributes, as declared by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CardAttributes {
    /// CSS color string for the border and shadow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_value: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_top_left_value: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_top_right_value: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_bottom_right_value: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_bottom_left_value: Option<f32>,

    /// Corner style ordinals: 0 = rounded, 1 = curve, 2 = cut.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_corner_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_left_corner_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_right_corner_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right_corner_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left_corner_type: Option<i32>,
}

impl CardAttributes {
    /// Parse an attribute document.
    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Per-corner radii after applying the `cornerValue` fallback.
    pub fn resolve_radii(&self) -> CardResult<CornerValues<f32>> {
        let shared = self.corner_value.unwrap_or(0.0);
        let radii = CornerValues {
            top_left: self.corner_top_left_value.unwrap_or(shared),
            top_right: self.corner_top_right_value.unwrap_or(shared),
            bottom_right: self.corner_bottom_right_value.unwrap_or(shared),
            bottom_left: self.corner_bottom_left_value.unwrap_or(shared),
        };
        for (corner, value) in radii.iter() {
            validate_radius(corner, value)?;
        }
        Ok(radii)
    }

    /// Per-corner styles after applying the `allCornerType` fallback.
    ///
    /// Ordinals are checked even when a per-corner value overrides them.
    pub fn resolve_styles(&self) -> CardResult<CornerValues<CornerStyle>> {
        let shared = match self.all_corner_type {
            Some(ordinal) => CornerStyle::try_from(ordinal)?,
            None => CornerStyle::Rounded,
        };
        let pick = |ordinal: Option<i32>| -> CardResult<CornerStyle> {
            ordinal.map_or(Ok(shared), CornerStyle::try_from)
        };
        Ok(CornerValues {
            top_left: pick(self.top_left_corner_type)?,
            top_right: pick(self.top_right_corner_type)?,
            bottom_right: pick(self.bottom_right_corner_type)?,
            bottom_left: pick(self.bottom_left_corner_type)?,
        })
    }

    /// Resolve into a spec for a `width` x `height` card of `kind`.
    ///
    /// Trip halves have a fixed style: only `borderColor` applies to them.
    pub fn resolve(&self, kind: CardKind, width: f32, height: f32) -> CardResult<CardSpec> {
        let mut spec = CardSpec::new(kind, width, height)?;

        if let Some(color) = &self.border_color {
            spec = spec.with_border_color(CardColor::parse(color)?);
        }

        if kind == CardKind::Special {
            spec = spec
                .with_radii(self.resolve_radii()?)?
                .with_styles(self.resolve_styles()?);
        } else if self.has_corner_fields() {
            log::warn!(
                target: "outline",
                "{} has a fixed corner style; corner attributes ignored",
                kind
            );
        }

        log::debug!(
            target: "outline",
            "resolved {} card: radii={:?} styles={:?} border={:?}",
            kind,
            spec.radii(),
            spec.styles(),
            spec.border_color()
        );
        Ok(spec)
    }

    /// Set the radius for one corner.
    pub fn set_corner_value(&mut self, corner: Corner, value: f32) {
        let slot = match corner {
            Corner::TopLeft => &mut self.corner_top_left_value,
            Corner::TopRight => &mut self.corner_top_right_value,
            Corner::BottomRight => &mut self.corner_bottom_right_value,
            Corner::BottomLeft => &mut self.corner_bottom_left_value,
        };
        *slot = Some(value);
    }

    /// Set the style ordinal for one corner.
    pub fn set_corner_type(&mut self, corner: Corner, style: CornerStyle) {
        let slot = match corner {
            Corner::TopLeft => &mut self.top_left_corner_type,
            Corner::TopRight => &mut self.top_right_corner_type,
            Corner::BottomRight => &mut self.bottom_right_corner_type,
            Corner::BottomLeft => &mut self.bottom_left_corner_type,
        };
        *slot = Some(style.ordinal());
    }

    fn has_corner_fields(&self) -> bool {
        self.corner_value.is_some()
            || self.corner_top_left_value.is_some()
            || self.corner_top_right_value.is_some()
            || self.corner_bottom_right_value.is_some()
            || self.corner_bottom_left_value.is_some()
            || self.all_corner_type.is_some()
            || self.top_left_corner_type.is_some()
            || self.top_right_corner_type.is_some()
            || self.bottom_right_corner_type.is_some()
            || self.bottom_left_corner_type.is_some()
    }
}
