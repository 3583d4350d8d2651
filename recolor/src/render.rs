//! Pure view model of the loaded state, plus markup for hosts that draw with
//! `innerHTML`.
//!
//! The canvas is a fixed 300x300 logical viewbox. Shapes keep their source
//! geometry unmodified, so artwork outside that box is clipped.

use crate::model::{Selection, ShapeKind};
use crate::{State, PALETTE};
use serde::Serialize;
use std::fmt::Write as _;

pub const VIEW_BOX_SIZE: u32 = 300;
pub const ACTIVE_STROKE: &str = "black";
pub const ACTIVE_STROKE_WIDTH: &str = "2";

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const CANVAS_STYLE: &str = ".recolor-canvas > * { cursor: pointer; }";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    /// Absent while no shapes are loaded; only the upload control is shown then.
    pub canvas: Option<Canvas>,
    /// Present exactly when something is selected.
    pub picker: Option<Picker>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub view_box: String,
    pub width: u32,
    pub height: u32,
    pub elements: Vec<ElementView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ElementView {
    pub kind: ShapeKind,
    pub id: String,
    pub attributes: Vec<(String, String)>,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Picker {
    pub caption: Option<String>,
    pub swatches: Vec<Swatch>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub color: &'static str,
    pub marked: bool,
}

pub fn render_impl(s: &State) -> View {
    let canvas = (!s.shapes.is_empty()).then(|| Canvas {
        view_box: format!("0 0 {} {}", VIEW_BOX_SIZE, VIEW_BOX_SIZE),
        width: VIEW_BOX_SIZE,
        height: VIEW_BOX_SIZE,
        elements: s
            .shapes
            .iter()
            .map(|shape| {
                let active = crate::store::is_active_impl(s, &shape.id);
                let fill = s.current.get(&shape.id).unwrap_or(&s.config.default_fill);
                let mut attributes = shape.attributes.clone();
                set_attr(&mut attributes, "id", &shape.id);
                set_attr(&mut attributes, "fill", fill);
                if active {
                    set_attr(&mut attributes, "stroke", ACTIVE_STROKE);
                    set_attr(&mut attributes, "stroke-width", ACTIVE_STROKE_WIDTH);
                }
                ElementView { kind: shape.kind, id: shape.id.clone(), attributes, active }
            })
            .collect(),
    });
    let picker = s.selection.as_ref().map(|sel| match sel {
        Selection::Region(_) => Picker {
            caption: None,
            swatches: PALETTE.iter().map(|&color| Swatch { color, marked: false }).collect(),
        },
        Selection::Group(key) => Picker {
            caption: Some(format!("Selected original color: {}", key)),
            swatches: PALETTE.iter().map(|&color| Swatch { color, marked: color == key.as_str() }).collect(),
        },
    });
    View { canvas, picker }
}

fn set_attr(attrs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match attrs.iter_mut().find(|(k, _)| k == name) {
        Some(slot) => slot.1 = value.to_string(),
        None => attrs.push((name.to_string(), value.to_string())),
    }
}

impl Canvas {
    pub fn to_svg_markup(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg class=\"recolor-canvas\" viewBox=\"{}\" xmlns=\"{}\" width=\"{}\" height=\"{}\">",
            escape(&self.view_box),
            SVG_NS,
            self.width,
            self.height
        );
        let _ = write!(out, "<style>{}</style>", CANVAS_STYLE);
        for el in &self.elements {
            out.push('<');
            out.push_str(el.kind.tag());
            // Descriptors can be built without going through ingest.
            for (k, v) in el.attributes.iter().filter(|(k, _)| is_markup_safe_name(k)) {
                let _ = write!(out, " {}=\"{}\"", k, escape(v));
            }
            out.push_str("/>");
        }
        out.push_str("</svg>");
        out
    }
}

impl Picker {
    pub fn to_html_markup(&self) -> String {
        let mut out = String::from("<div class=\"recolor-picker\">");
        if let Some(caption) = &self.caption {
            let _ = write!(out, "<p>{}</p>", escape(caption));
        }
        out.push_str("<div class=\"recolor-swatches\">");
        for sw in &self.swatches {
            let border = if sw.marked { "2px solid black" } else { "1px solid #333" };
            let _ = write!(
                out,
                "<button type=\"button\" data-color=\"{c}\" aria-label=\"{c}\" style=\"width: 40px; height: 40px; background-color: {c}; border: {b}; cursor: pointer\"></button>",
                c = sw.color,
                b = border
            );
        }
        out.push_str("</div></div>");
        out
    }
}

fn is_markup_safe_name(name: &str) -> bool {
    !name.is_empty()
        && !crate::svg::is_event_handler(name)
        && name.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
