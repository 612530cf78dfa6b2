//! Corner identities, corner styles and per-corner value sets.

use crate::error::{CardError, CardResult};
use std::fmt;
use std::str::FromStr;

/// One of the four rectangle corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    /// All corners in top-left, top-right, bottom-right, bottom-left order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Corner::TopLeft => "top-left",
            Corner::TopRight => "top-right",
            Corner::BottomRight => "bottom-right",
            Corner::BottomLeft => "bottom-left",
        };
        f.write_str(name)
    }
}

/// Treatment applied to a single corner of the card outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CornerStyle {
    /// Quarter-round fillet tangent to both edges.
    #[default]
    Rounded,
    /// Half-circle notch, followed by a stepped tab on the top-left and
    /// bottom-right corners.
    Curve,
    /// Flat bevel between the two offset points; the corner is never visited.
    Cut,
}

impl CornerStyle {
    /// Integer used by the markup attributes (`0`, `1`, `2`).
    pub const fn ordinal(self) -> i32 {
        match self {
            CornerStyle::Rounded => 0,
            CornerStyle::Curve => 1,
            CornerStyle::Cut => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            CornerStyle::Rounded => "rounded",
            CornerStyle::Curve => "curve",
            CornerStyle::Cut => "cut",
        }
    }
}

impl TryFrom<i32> for CornerStyle {
    type Error = CardError;

    fn try_from(value: i32) -> CardResult<Self> {
        match value {
            0 => Ok(CornerStyle::Rounded),
            1 => Ok(CornerStyle::Curve),
            2 => Ok(CornerStyle::Cut),
            other => Err(CardError::UnknownCornerStyle(other)),
        }
    }
}

impl FromStr for CornerStyle {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rounded" => Ok(CornerStyle::Rounded),
            "curve" => Ok(CornerStyle::Curve),
            "cut" => Ok(CornerStyle::Cut),
            _ => Err(CardError::UnknownCornerStyleName(s.to_string())),
        }
    }
}

impl fmt::Display for CornerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One value per corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerValues<T> {
    pub top_left: T,
    pub top_right: T,
    pub bottom_right: T,
    pub bottom_left: T,
}

impl<T: Copy> CornerValues<T> {
    /// The same value on every corner.
    pub const fn uniform(value: T) -> Self {
        Self {
            top_left: value,
            top_right: value,
            bottom_right: value,
            bottom_left: value,
        }
    }

    pub fn get(&self, corner: Corner) -> T {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomRight => self.bottom_right,
            Corner::BottomLeft => self.bottom_left,
        }
    }

    pub fn set(&mut self, corner: Corner, value: T) {
        match corner {
            Corner::TopLeft => self.top_left = value,
            Corner::TopRight => self.top_right = value,
            Corner::BottomRight => self.bottom_right = value,
            Corner::BottomLeft => self.bottom_left = value,
        }
    }

    /// Copy with a single corner replaced.
    pub fn with(mut self, corner: Corner, value: T) -> Self {
        self.set(corner, value);
        self
    }

    /// Iterate `(corner, value)` pairs in [`Corner::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, T)> + '_ {
        Corner::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
