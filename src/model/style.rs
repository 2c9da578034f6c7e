//! Fill, stroke, font and color styling.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Visual style attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    pub fill: Option<Fill>,
    pub stroke: Option<Stroke>,
    pub font: Option<Font>,
    pub text_attributes: Option<TextAttributes>,
    pub opacity: Option<f32>,
    pub isolation: Option<String>,
}

impl Style {
    /// Pattern fill of this style, if the fill is a pattern.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.fill.as_ref().and_then(|fill| fill.pattern.as_ref())
    }

    /// Opacity, treating an absent value as fully opaque.
    pub fn opacity_or_opaque(&self) -> f32 {
        self.opacity.unwrap_or(1.0)
    }
}

/// Shape fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub color: Option<Color>,
    pub pattern: Option<Pattern>,
}

/// Shape stroke.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stroke {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub color: Option<Color>,
    pub width: f32,
    pub align: Option<String>,
    pub cap: Option<String>,
    pub join: Option<String>,
    pub miter_limit: Option<f32>,
    pub dash: Option<Vec<f32>>,
}

impl Stroke {
    /// A stroke is drawn unless its type is `none`.
    pub fn is_visible(&self) -> bool {
        self.kind.as_deref() != Some("none")
    }
}

/// Font selection for text nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Font {
    pub family: Option<String>,
    pub postscript_name: Option<String>,
    pub size: f32,
    pub style: Option<String>,
}

/// Paragraph-level text attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextAttributes {
    /// Absent means left-aligned
    pub paragraph_align: Option<String>,
    pub line_height: Option<f32>,
}

/// Image pattern used as a fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pattern {
    pub width: f32,
    pub height: f32,
    pub meta: Option<PatternMeta>,
    pub href: Option<String>,
}

/// Metadata wrapper of a pattern fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternMeta {
    pub ux: Option<PatternMetaUx>,
}

impl PatternMeta {
    /// Content id of the referenced asset, if present and not blank.
    pub fn uid(&self) -> Option<&str> {
        self.ux
            .as_ref()
            .and_then(|ux| ux.uid.as_deref())
            .filter(|uid| !uid.trim().is_empty())
    }
}

/// Placement of a pattern asset inside its shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatternMetaUx {
    pub scale_behavior: Option<String>,
    pub uid: Option<String>,
    pub href_last_modified_date: u64,
    pub flip_x: bool,
    pub flip_y: bool,
    pub offset_x: f32,
    pub offset_y: f32,
    pub scale: Option<f32>,
}

impl PatternMetaUx {
    /// Asset modification time (seconds since the epoch).
    pub fn href_modified_at(&self) -> Option<DateTime<Utc>> {
        if self.href_last_modified_date == 0 {
            return None;
        }
        DateTime::from_timestamp(self.href_last_modified_date as i64, 0)
    }
}

/// Color with an optional alpha.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Color {
    pub mode: Option<String>,
    pub value: Option<ColorValue>,
    pub alpha: Option<f32>,
}

impl Color {
    /// Alpha, treating an absent value as fully opaque.
    pub fn alpha_or_opaque(&self) -> f32 {
        self.alpha.unwrap_or(1.0)
    }
}

/// RGB channels in 0..=255.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorValue {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl ColorValue {
    /// `#rrggbb` representation; channels are clamped to 0..=255.
    pub fn to_hex(&self) -> String {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            clamp(self.r),
            clamp(self.g),
            clamp(self.b)
        )
    }
}
