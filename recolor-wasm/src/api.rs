use crate::error;
use crate::interop::{str_array, to_js};
use crate::Session;
use recolor::{Config, IngestError, SelectionMode, State, UploadMeta, PALETTE};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Route `log` output to the browser console. Level defaults to `info`.
#[wasm_bindgen]
pub fn init_logging(level: Option<String>) {
    let level = level.as_deref().and_then(|l| l.parse::<log::Level>().ok()).unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::debug_1(&JsValue::from_str("recolor: logger already installed"));
    }
}

#[wasm_bindgen]
impl Session {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Session {
        Session::rs_new(Config::default())
    }

    /// Replace the configuration. This unloads the current document.
    pub fn configure_res(&mut self, config: JsValue) -> JsValue {
        let v = match serde_wasm_bindgen::from_value::<serde_json::Value>(config) {
            Ok(v) => v,
            Err(e) => return error::err("invalid_config", format!("{}", e), None),
        };
        match Config::from_json_value(v) {
            Ok(cfg) => {
                self.state = State::new(cfg);
                error::ok(JsValue::from_bool(true))
            }
            Err(e) => error::config(&e),
        }
    }
    pub fn mode(&self) -> String {
        match self.state.mode() {
            SelectionMode::Single => "single".to_string(),
            SelectionMode::Grouped => "grouped".to_string(),
        }
    }

    // Upload + ingest
    pub fn check_upload_res(&self, mime: Option<String>, name: Option<String>) -> JsValue {
        let meta = mime.map(|mime| UploadMeta { name: name.unwrap_or_default(), mime });
        match recolor::check_upload(meta.as_ref()) {
            Ok(()) => error::ok(JsValue::from_bool(true)),
            Err(e) => error::ingest(&e),
        }
    }
    pub fn load_svg(&mut self, text: &str) -> bool {
        self.load(text).is_ok()
    }
    pub fn load_svg_res(&mut self, text: &str) -> JsValue {
        match self.load(text) {
            Ok(n) => error::ok(JsValue::from_f64(n as f64)),
            Err(e) => error::ingest(&e),
        }
    }
    /// Validate the picker's metadata and ingest the file text in one step.
    pub fn load_file_res(&mut self, mime: Option<String>, text: &str) -> JsValue {
        let meta = mime.map(|mime| UploadMeta { name: String::new(), mime });
        if let Err(e) = recolor::check_upload(meta.as_ref()) {
            return error::ingest(&e);
        }
        self.load_svg_res(text)
    }

    // Selection + recolor
    pub fn select(&mut self, id: &str) -> bool {
        if !self.state.contains(id) {
            return false;
        }
        self.transition(|s| s.select(id));
        true
    }
    pub fn select_res(&mut self, id: &str) -> JsValue {
        if !self.select(id) {
            return error::invalid_id("region", id);
        }
        error::ok(self.selection())
    }
    pub fn apply_color(&mut self, color: &str) -> u32 {
        let prev = std::mem::take(&mut self.state);
        let (next, written) = prev.apply_color_counted(color);
        self.state = next;
        written as u32
    }
    pub fn apply_color_res(&mut self, color: &str) -> JsValue {
        if color.trim().is_empty() {
            return error::invalid_color(color);
        }
        if self.state.selection().is_none() {
            return error::no_selection();
        }
        error::ok(JsValue::from_f64(self.apply_color(color) as f64))
    }

    // Read-only views
    pub fn shape_count(&self) -> u32 {
        self.state.shape_count() as u32
    }
    pub fn shapes(&self) -> JsValue {
        to_js(self.state.shapes())
    }
    pub fn current_colors(&self) -> JsValue {
        to_js(self.state.current())
    }
    pub fn original_colors(&self) -> JsValue {
        to_js(self.state.original())
    }
    pub fn color_of(&self, id: &str) -> Option<String> {
        self.state.color_of(id).map(str::to_string)
    }
    /// `null`, or `{ kind: "region" | "group", value }`.
    pub fn selection(&self) -> JsValue {
        match self.state.selection() {
            Some(sel) => to_js(sel),
            None => JsValue::NULL,
        }
    }
    pub fn is_active(&self, id: &str) -> bool {
        self.state.is_active(id)
    }
    pub fn palette(&self) -> JsValue {
        str_array(&PALETTE)
    }
    pub fn view(&self) -> JsValue {
        to_js(&self.state.render())
    }
    pub fn canvas_markup(&self) -> Option<String> {
        self.state.render().canvas.map(|c| c.to_svg_markup())
    }
    pub fn picker_markup(&self) -> Option<String> {
        self.state.render().picker.map(|p| p.to_html_markup())
    }
    pub fn to_json(&self) -> JsValue {
        to_js(&self.state.to_json_value())
    }
}

impl Session {
    fn load(&mut self, text: &str) -> Result<usize, IngestError> {
        let parsed = recolor::parse_svg(text, self.state.config())?;
        self.transition(|s| s.ingest(parsed));
        Ok(self.state.shape_count())
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
