pub mod config;
pub mod error;
pub mod limits;
pub mod model;
pub mod render;
mod json;
mod store;
mod svg;

pub use config::{Config, MalformedPolicy};
pub use error::{ConfigError, IngestError};
pub use model::{
    Action, ColorMapping, Parsed, Selection, SelectionMode, ShapeDescriptor, ShapeKind, UploadMeta,
};
pub use render::{Canvas, ElementView, Picker, Swatch, View};

/// The fixed recolor palette offered whenever something is selected.
pub const PALETTE: [&str; 5] = ["#f87171", "#60a5fa", "#34d399", "#fbbf24", "#a78bfa"];

/// Validate what the file picker reports before reading the file.
pub fn check_upload(meta: Option<&UploadMeta>) -> Result<(), IngestError> {
    svg::check_upload_impl(meta)
}

/// Parse SVG text into shapes (document order) and their initial fills.
pub fn parse_svg(text: &str, config: &Config) -> Result<Parsed, IngestError> {
    svg::parse_svg_impl(text, config)
}

pub fn render(state: &State) -> View {
    render::render_impl(state)
}

/// Session state for one loaded document.
///
/// Transitions take the state by value and return the next one; nothing is
/// mutated behind a shared reference. Every transition is total.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct State {
    pub(crate) config: Config,
    pub(crate) shapes: Vec<ShapeDescriptor>,
    pub(crate) current: ColorMapping,
    // Frozen at ingest; only read for group membership.
    pub(crate) original: ColorMapping,
    pub(crate) selection: Option<Selection>,
}

impl State {
    pub fn new(config: Config) -> Self {
        State { config, ..State::default() }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn mode(&self) -> SelectionMode {
        self.config.mode
    }
    pub fn shapes(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
    pub fn is_loaded(&self) -> bool {
        !self.shapes.is_empty()
    }
    pub fn current(&self) -> &ColorMapping {
        &self.current
    }
    pub fn original(&self) -> &ColorMapping {
        &self.original
    }
    pub fn contains(&self, id: &str) -> bool {
        self.current.contains_key(id)
    }
    pub fn color_of(&self, id: &str) -> Option<&str> {
        self.current.get(id).map(String::as_str)
    }
    pub fn original_color_of(&self, id: &str) -> Option<&str> {
        self.original.get(id).map(String::as_str)
    }
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Whether the region with `id` is drawn highlighted.
    pub fn is_active(&self, id: &str) -> bool {
        store::is_active_impl(self, id)
    }

    /// Replace everything with a freshly parsed document and clear the selection.
    #[must_use]
    pub fn ingest(self, parsed: Parsed) -> Self {
        store::ingest_impl(self, parsed)
    }

    /// Single mode selects the region; grouped mode selects its original color.
    /// Unknown ids leave the state unchanged.
    #[must_use]
    pub fn select(self, id: &str) -> Self {
        store::select_impl(self, id)
    }

    #[must_use]
    pub fn apply_color(self, color: &str) -> Self {
        store::apply_color_impl(self, color).0
    }

    /// Like [`State::apply_color`], also returning how many regions were written.
    pub fn apply_color_counted(self, color: &str) -> (Self, usize) {
        store::apply_color_impl(self, color)
    }

    #[must_use]
    pub fn update(self, action: Action) -> Self {
        match action {
            Action::Ingest(parsed) => self.ingest(parsed),
            Action::Select(id) => self.select(&id),
            Action::ApplyColor(color) => self.apply_color(&color),
        }
    }

    pub fn render(&self) -> View {
        render::render_impl(self)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        json::to_json_impl(self)
    }
}
