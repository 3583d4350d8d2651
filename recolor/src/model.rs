use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Region id -> fill color string. Colors are kept verbatim; no color-space handling.
pub type ColorMapping = HashMap<String, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Path,
    Rect,
    Circle,
    Polygon,
}

impl ShapeKind {
    pub fn from_tag(tag: &str) -> Option<ShapeKind> {
        match tag {
            "path" => Some(ShapeKind::Path),
            "rect" => Some(ShapeKind::Rect),
            "circle" => Some(ShapeKind::Circle),
            "polygon" => Some(ShapeKind::Polygon),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            ShapeKind::Path => "path",
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Polygon => "polygon",
        }
    }
}

/// One clickable region parsed from the uploaded document.
///
/// `attributes` is a full copy of the source element's attributes in source order,
/// including `fill`. The effective fill at render time comes from the store instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    pub id: String,
    pub kind: ShapeKind,
    pub attributes: Vec<(String, String)>,
}

impl ShapeDescriptor {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }
}

/// Output of ingestion: shapes in document order plus the initial fill of each id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parsed {
    pub shapes: Vec<ShapeDescriptor>,
    pub colors: ColorMapping,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// Clicking selects one region; recolor keeps it selected.
    Single,
    /// Clicking selects every region that shared the clicked region's original color.
    #[default]
    Grouped,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Selection {
    Region(String),
    /// Keyed by an original fill color, not an id.
    Group(String),
}

impl Selection {
    pub fn value(&self) -> &str {
        match self {
            Selection::Region(v) | Selection::Group(v) => v,
        }
    }
}

/// File metadata as reported by the browser's file picker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMeta {
    pub name: String,
    pub mime: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Ingest(Parsed),
    Select(String),
    ApplyColor(String),
}
