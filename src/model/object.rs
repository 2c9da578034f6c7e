//! Scene graph nodes: groups, shapes, text and their metadata.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Size, Style, Transform};

/// A node of an artboard's scene graph.
///
/// The `type` tag decides which payload is meaningful: `group` nodes carry
/// [`Group`], `shape` nodes [`Shape`], `text` nodes [`Text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct XdObject {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub meta: Option<ObjectMeta>,
    pub transform: Option<Transform>,
    pub group: Option<Group>,
    pub style: Option<Style>,
    pub shape: Option<Shape>,
    pub text: Option<Text>,
    pub guid: Option<String>,
    pub sync_source_guid: Option<String>,
    pub visible: Option<bool>,
    pub marked_for_export: Option<bool>,
}

impl XdObject {
    /// Discriminant derived from the `type` tag.
    pub fn kind(&self) -> ObjectKind {
        ObjectKind::from_tag(self.kind.as_deref())
    }

    /// Direct children of a group node; empty for other kinds.
    pub fn children(&self) -> &[XdObject] {
        self.group
            .as_ref()
            .map(|group| group.children.as_slice())
            .unwrap_or_default()
    }

    /// UX metadata block, if any.
    pub fn ux(&self) -> Option<&ObjectMetaUx> {
        self.meta.as_ref().and_then(|meta| meta.ux.as_ref())
    }

    /// Nodes defining the clip mask of this node.
    pub fn clip_path_children(&self) -> &[XdObject] {
        self.ux()
            .and_then(|ux| ux.clip_path_resources.as_ref())
            .map(|clip| clip.children.as_slice())
            .unwrap_or_default()
    }

    /// Alternate component states; empty unless this is a symbol master.
    pub fn states(&self) -> &[XdObject] {
        self.ux()
            .map(|ux| ux.states.as_slice())
            .unwrap_or_default()
    }

    /// Absent visibility means visible.
    pub fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }

    /// Localized display name from the UX metadata, falling back to `name`.
    pub fn display_name(&self) -> Option<&str> {
        self.ux()
            .and_then(|ux| ux.name_l10n.as_deref())
            .or(self.name.as_deref())
    }
}

/// Node discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Container of child nodes
    Group,
    /// Vector geometry
    Shape,
    /// Text frame
    Text,
    /// Instance of a library symbol
    SymbolInstance,
    /// Nested artboard
    Artboard,
    /// Missing or unrecognized tag
    Unknown,
}

impl ObjectKind {
    /// Map a raw `type` tag to a kind.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("group") => ObjectKind::Group,
            Some("shape") => ObjectKind::Shape,
            Some("text") => ObjectKind::Text,
            Some("syncRef") => ObjectKind::SymbolInstance,
            Some("artboard") => ObjectKind::Artboard,
            _ => ObjectKind::Unknown,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Group => write!(f, "group"),
            ObjectKind::Shape => write!(f, "shape"),
            ObjectKind::Text => write!(f, "text"),
            ObjectKind::SymbolInstance => write!(f, "syncRef"),
            ObjectKind::Artboard => write!(f, "artboard"),
            ObjectKind::Unknown => write!(f, "unknown"),
        }
    }
}

/// Children of a group node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Group {
    pub children: Vec<XdObject>,
}

/// Vector geometry payload.
///
/// Which coordinates apply depends on `type` (`rect`, `ellipse`, `line`,
/// `path`, `compound`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub path: Option<String>,
    pub winding: Option<String>,
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    /// Corner radius: a single number or one value per corner
    pub r: Option<Value>,
    pub operation: Option<String>,
}

impl Shape {
    /// Corner radii as top-left, top-right, bottom-right, bottom-left.
    ///
    /// A single radius applies to all four corners. Returns `None` when
    /// `r` is absent or not numeric.
    pub fn corner_radii(&self) -> Option<[f32; 4]> {
        match self.r.as_ref()? {
            Value::Number(n) => {
                let r = n.as_f64()? as f32;
                Some([r; 4])
            }
            Value::Array(values) => {
                let mut radii = [0.0f32; 4];
                for (slot, value) in radii.iter_mut().zip(values) {
                    *slot = value.as_f64()? as f32;
                }
                Some(radii)
            }
            _ => None,
        }
    }
}

/// Text payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Text {
    pub frame: Option<TextFrame>,
    pub paragraphs: Vec<TextParagraph>,
    pub raw_text: Option<String>,
}

/// Text frame sizing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFrame {
    /// `positioned` (auto width) or `area` (fixed box)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub width: f32,
    pub height: f32,
}

/// One paragraph; each line is a list of styled runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextParagraph {
    pub lines: Vec<Vec<TextLine>>,
}

/// A run of characters `from..to` placed at `(x, y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLine {
    pub from: f32,
    pub to: f32,
    pub x: f32,
    pub y: f32,
}

/// Metadata wrapper of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectMeta {
    pub ux: Option<ObjectMetaUx>,
}

/// Editor metadata of a node: symbols, constraints, states, interactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ObjectMetaUx {
    #[serde(rename = "nameL10N")]
    pub name_l10n: Option<String>,
    pub symbol_id: Option<String>,
    pub width: f32,
    pub height: f32,
    pub component_type: Option<String>,
    pub is_master: bool,
    pub sync_map: Option<HashMap<String, String>>,
    pub has_custom_name: bool,
    pub aspect_lock: Option<Size>,
    pub custom_constraints: bool,
    pub constraint_width: bool,
    pub constraint_height: bool,
    pub constraint_right: bool,
    pub constraint_left: bool,
    pub constraint_top: bool,
    pub constraint_bottom: bool,
    pub local_transform: Option<Transform>,
    pub mod_time: u64,
    pub state_id: Option<String>,
    pub states: Vec<XdObject>,
    pub interactions: Vec<Interaction>,
    pub repeat_grid: Option<RepeatGrid>,
    pub scrolling_type: Option<String>,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub marked_for_export: bool,
    pub clip_path_resources: Option<ClipPathResources>,
    pub rotation: f32,
}

impl ObjectMetaUx {
    /// Modification time (`modTime`, milliseconds since the epoch).
    pub fn modified_at(&self) -> Option<DateTime<Utc>> {
        if self.mod_time == 0 {
            return None;
        }
        DateTime::from_timestamp_millis(self.mod_time as i64)
    }

    /// The state currently shown, looked up by `stateId`.
    pub fn current_state(&self) -> Option<&XdObject> {
        let state_id = self.state_id.as_deref()?;
        self.states
            .iter()
            .find(|state| state.id.as_deref() == Some(state_id))
    }
}

/// Clip mask definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipPathResources {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub children: Vec<XdObject>,
}

/// Repeat grid layout parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RepeatGrid {
    pub cell_width: Option<f32>,
    pub cell_height: Option<f32>,
    pub width: f32,
    pub height: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub columns: i32,
    pub rows: i32,
}

/// Prototype interaction attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interaction {
    pub data: Option<InteractionData>,
    pub enabled: bool,
    pub guid: Option<String>,
    pub inherited: bool,
    pub valid: bool,
}

/// Versioned interaction body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionData {
    pub interaction: Option<InteractionDetail>,
    pub version: Option<String>,
}

/// Trigger and action of an interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionDetail {
    pub action: Option<String>,
    pub properties: Option<InteractionProperties>,
    pub trigger_event: Option<String>,
}

/// Action parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InteractionProperties {
    pub destination: Option<String>,
    pub duration: f32,
    pub easing: Option<String>,
    pub transition: Option<String>,
    pub voice_locale: Option<String>,
}
