use crate::interop::{new_obj, set_kv};
use recolor::{ConfigError, IngestError};
use wasm_bindgen::prelude::*;

pub fn ok(v: JsValue) -> JsValue {
    let o = new_obj();
    set_kv(&o, "ok", &JsValue::from_bool(true));
    set_kv(&o, "value", &v);
    o.into()
}

pub fn err(code: &'static str, message: impl Into<String>, data: Option<JsValue>) -> JsValue {
    let root = new_obj();
    set_kv(&root, "ok", &JsValue::from_bool(false));
    let e = new_obj();
    set_kv(&e, "code", &JsValue::from_str(code));
    set_kv(&e, "message", &JsValue::from_str(&message.into()));
    if let Some(d) = data { set_kv(&e, "data", &d); }
    set_kv(&root, "error", &e.into());
    root.into()
}

pub fn ingest(e: &IngestError) -> JsValue {
    let data = match e {
        IngestError::NotSvgMimeType { mime } => {
            let d = new_obj(); set_kv(&d, "mime", &JsValue::from_str(mime));
            Some(d.into())
        }
        IngestError::NotSvg { root } => {
            let d = new_obj(); set_kv(&d, "root", &JsValue::from_str(root));
            Some(d.into())
        }
        IngestError::TooLarge { len, max } => {
            let d = new_obj();
            set_kv(&d, "len", &JsValue::from_f64(*len as f64));
            set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            Some(d.into())
        }
        IngestError::TooManyShapes { max } => {
            let d = new_obj(); set_kv(&d, "max", &JsValue::from_f64(*max as f64));
            Some(d.into())
        }
        IngestError::NoFileSelected | IngestError::Malformed(_) => None,
    };
    err(e.code(), e.to_string(), data)
}

#[inline]
pub fn config(e: &ConfigError) -> JsValue { err(e.code(), e.to_string(), None) }

#[inline]
pub fn invalid_id(kind: &str, id: &str) -> JsValue {
    let d = new_obj();
    set_kv(&d, "kind", &JsValue::from_str(kind));
    set_kv(&d, "id", &JsValue::from_str(id));
    err("invalid_id", format!("invalid {} id", kind), Some(d.into()))
}

#[inline]
pub fn no_selection() -> JsValue { err("no_selection", "select a region before choosing a color", None) }

#[inline]
pub fn invalid_color(got: &str) -> JsValue {
    let d = new_obj(); set_kv(&d, "got", &JsValue::from_str(got));
    err("invalid_color", "color must be a non-empty string", Some(d.into()))
}
