//! Browser front end for recoloring the regions of an uploaded SVG.
//!
//! `mount` builds the upload control, the canvas and the palette inside a host
//! element and wires DOM events into [`recolor::State`] transitions. The only
//! asynchronous step is reading the picked file; everything else runs inside a
//! single event handler.

use log::{info, warn};
use recolor::{Action, Config, IngestError, SelectionMode, ShapeKind, State};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};

mod interop;
mod upload;

pub(crate) struct Inner {
    state: RefCell<State>,
    canvas_host: Element,
    picker_host: Element,
}

impl Inner {
    pub(crate) fn dispatch(&self, action: Action) {
        let prev = self.state.take();
        *self.state.borrow_mut() = prev.update(action);
        self.render();
    }

    pub(crate) fn load_text(&self, text: &str) -> Result<usize, IngestError> {
        let parsed = recolor::parse_svg(text, self.state.borrow().config())?;
        let n = parsed.shapes.len();
        self.dispatch(Action::Ingest(parsed));
        info!("loaded {} regions", n);
        Ok(n)
    }

    fn render(&self) {
        let view = self.state.borrow().render();
        self.canvas_host.set_inner_html(&view.canvas.map(|c| c.to_svg_markup()).unwrap_or_default());
        self.picker_host.set_inner_html(&view.picker.map(|p| p.to_html_markup()).unwrap_or_default());
    }
}

/// Handle to a mounted app.
#[wasm_bindgen]
pub struct App {
    inner: Rc<Inner>,
}

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the app into the element with id `container_id`.
/// `config` may be `undefined` or an object such as `{ mode: "single" }`.
#[wasm_bindgen]
pub fn mount(container_id: &str, config: JsValue) -> Result<App, JsValue> {
    set_panic_hook();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value::<Config>(config)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {}", e)))?
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
    };

    let doc = interop::document()?;
    let root = doc
        .get_element_by_id(container_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", container_id)))?;

    let heading = interop::element(&doc, "h2", "")?;
    heading.set_text_content(Some(match config.mode {
        SelectionMode::Single => "SVG Recoloring",
        SelectionMode::Grouped => "SVG Recoloring (Grouped by Original Color)",
    }));
    let input: HtmlInputElement = interop::element(&doc, "input", "recolor-upload")?.dyn_into()?;
    input.set_type("file");
    input.set_accept(".svg");
    let canvas_host = interop::element(&doc, "div", "recolor-canvas-host")?;
    let picker_host = interop::element(&doc, "div", "recolor-picker-host")?;
    root.append_child(&heading)?;
    root.append_child(&input)?;
    root.append_child(&canvas_host)?;
    root.append_child(&picker_host)?;

    let inner = Rc::new(Inner { state: RefCell::new(State::new(config)), canvas_host, picker_host });

    let on_upload = Rc::clone(&inner);
    interop::listen(&input, "change", move |ev| upload::on_change(&on_upload, &ev))?;

    let on_region = Rc::clone(&inner);
    interop::listen(&inner.canvas_host, "click", move |ev| {
        let Some(el) = interop::event_element(&ev) else { return };
        // The <svg> root itself is not a region.
        if ShapeKind::from_tag(&el.local_name()).is_none() {
            return;
        }
        if let Some(id) = el.get_attribute("id") {
            on_region.dispatch(Action::Select(id));
        }
    })?;

    let on_swatch = Rc::clone(&inner);
    interop::listen(&inner.picker_host, "click", move |ev| {
        let swatch = interop::event_element(&ev).and_then(|el| el.closest("button[data-color]").ok().flatten());
        if let Some(color) = swatch.and_then(|el| el.get_attribute("data-color")) {
            on_swatch.dispatch(Action::ApplyColor(color));
        }
    })?;

    inner.render();
    Ok(App { inner })
}

#[wasm_bindgen]
impl App {
    /// Ingest SVG text obtained some other way (drag and drop, fetch).
    pub fn load_text(&self, text: &str) -> Result<u32, JsValue> {
        match self.inner.load_text(text) {
            Ok(n) => Ok(n as u32),
            Err(e) => {
                warn!("rejected document: {}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    /// Same as clicking the region. Returns false for unknown ids.
    pub fn click_region(&self, id: &str) -> bool {
        if !self.inner.state.borrow().contains(id) {
            return false;
        }
        self.inner.dispatch(Action::Select(id.to_string()));
        true
    }

    /// Same as clicking a swatch. Returns false when nothing is selected.
    pub fn pick_color(&self, color: &str) -> bool {
        if self.inner.state.borrow().selection().is_none() {
            return false;
        }
        self.inner.dispatch(Action::ApplyColor(color.to_string()));
        true
    }

    pub fn shape_count(&self) -> u32 {
        self.inner.state.borrow().shape_count() as u32
    }

    /// Selected region id, or selected original color in grouped mode.
    pub fn selection(&self) -> Option<String> {
        self.inner.state.borrow().selection().map(|s| s.value().to_string())
    }

    pub fn color_of(&self, id: &str) -> Option<String> {
        self.inner.state.borrow().color_of(id).map(str::to_string)
    }
}
