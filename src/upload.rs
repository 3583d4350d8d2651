use crate::{interop, Inner};
use log::warn;
use recolor::UploadMeta;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Event, File, HtmlInputElement};

pub const INVALID_FILE_ALERT: &str = "Please upload a valid SVG file";

pub(crate) fn on_change(inner: &Rc<Inner>, ev: &Event) {
    let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else { return };
    let file = input.files().and_then(|list| list.get(0));
    let meta = file.as_ref().map(|f| UploadMeta { name: f.name(), mime: f.type_() });
    if let Err(e) = recolor::check_upload(meta.as_ref()) {
        warn!("upload rejected: {}", e);
        interop::alert(INVALID_FILE_ALERT);
        return;
    }
    let Some(file) = file else { return };
    let inner = Rc::clone(inner);
    // No cancellation: the prior state stays on screen until the read resolves.
    spawn_local(async move {
        let text = match read_text(&file).await {
            Ok(t) => t,
            Err(e) => {
                warn!("reading '{}' failed: {:?}", file.name(), e);
                interop::alert(INVALID_FILE_ALERT);
                return;
            }
        };
        if let Err(e) = inner.load_text(&text) {
            warn!("rejected '{}': {}", file.name(), e);
            interop::alert(&format!("{}: {}", INVALID_FILE_ALERT, e));
        }
    });
}

async fn read_text(file: &File) -> Result<String, JsValue> {
    let promise: js_sys::Promise = file.text();
    let v = JsFuture::from(promise).await?;
    v.as_string().ok_or_else(|| JsValue::from_str("file contents are not text"))
}
