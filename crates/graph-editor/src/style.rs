//! Visual attributes of vertices and edges.
//!
//! Every vertex and edge carries its own copy of a style. A session holds a
//! [`StyleConfig`] that is copied into new entities when they are created, so
//! changing it never restyles what already exists.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Allowed vertex radius.
pub const RADIUS_RANGE: RangeInclusive<u32> = 20..=200;
/// Allowed label text size.
pub const TEXT_SIZE_RANGE: RangeInclusive<u32> = 12..=50;
/// Allowed edge stroke width.
pub const EDGE_WIDTH_RANGE: RangeInclusive<u32> = 1..=5;

/// An RGBA colour, written as `0xrrggbbaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Opaque colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = GraphError;

    /// Accepts `0xrrggbb[aa]`, `0Xrrggbb[aa]` and `#rrggbb[aa]`.
    fn from_str(s: &str) -> GraphResult<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('#'))
            .ok_or_else(|| GraphError::InvalidStyle(format!("colour \"{s}\" has no 0x or # prefix")))?;

        if !(digits.len() == 6 || digits.len() == 8) || !digits.is_ascii() {
            return Err(GraphError::InvalidStyle(format!(
                "colour \"{s}\" must have 6 or 8 hex digits"
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| GraphError::InvalidStyle(format!("colour \"{s}\" is not hex")))
        };

        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }
}

impl TryFrom<String> for Color {
    type Error = GraphError;

    fn try_from(value: String) -> GraphResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Appearance of a single vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VertexStyle {
    pub fill: Color,
    pub radius: u32,
    pub font_name: String,
    pub text_size: u32,
}

impl Default for VertexStyle {
    fn default() -> Self {
        Self {
            fill: Color::YELLOW,
            radius: 30,
            font_name: "System Regular".to_string(),
            text_size: 12,
        }
    }
}

impl VertexStyle {
    /// Check every attribute against its allowed range.
    pub fn validate(&self) -> GraphResult<()> {
        if !RADIUS_RANGE.contains(&self.radius) {
            return Err(GraphError::InvalidStyle(format!(
                "radius {} outside {}..={}",
                self.radius,
                RADIUS_RANGE.start(),
                RADIUS_RANGE.end()
            )));
        }
        if !TEXT_SIZE_RANGE.contains(&self.text_size) {
            return Err(GraphError::InvalidStyle(format!(
                "text size {} outside {}..={}",
                self.text_size,
                TEXT_SIZE_RANGE.start(),
                TEXT_SIZE_RANGE.end()
            )));
        }
        if self.font_name.trim().is_empty() {
            return Err(GraphError::InvalidStyle("font name is empty".to_string()));
        }
        // Graph files store the font as the space-joined tail of a line.
        if self.font_name.split_whitespace().collect::<Vec<_>>().join(" ") != self.font_name {
            return Err(GraphError::InvalidStyle(format!(
                "font name \"{}\" must be words separated by single spaces",
                self.font_name
            )));
        }
        Ok(())
    }
}

/// Appearance of a single edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EdgeStyle {
    pub color: Color,
    pub width: u32,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1,
        }
    }
}

impl EdgeStyle {
    /// Check the width against its allowed range.
    pub fn validate(&self) -> GraphResult<()> {
        if !EDGE_WIDTH_RANGE.contains(&self.width) {
            return Err(GraphError::InvalidStyle(format!(
                "edge width {} outside {}..={}",
                self.width,
                EDGE_WIDTH_RANGE.start(),
                EDGE_WIDTH_RANGE.end()
            )));
        }
        Ok(())
    }
}

/// Styles applied to entities created from now on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    pub vertex: VertexStyle,
    pub edge: EdgeStyle,
}

impl StyleConfig {
    pub fn validate(&self) -> GraphResult<()> {
        self.vertex.validate()?;
        self.edge.validate()
    }
}
