use recolor_wasm::Session;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const DOC: &str = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect id="r1" fill="#ff0000"/><circle fill="#00ff00"/></svg>"##;
const GROUPS: &str = r##"<svg xmlns="http://www.w3.org/2000/svg"><rect id="A" fill="#000"/><rect id="B" fill="#000"/><rect id="C" fill="#fff"/></svg>"##;

#[derive(Deserialize, Debug, PartialEq)]
struct Sel {
    kind: String,
    value: String,
}

fn js(v: serde_json::Value) -> JsValue {
    v.serialize(&serde_wasm_bindgen::Serializer::json_compatible()).unwrap()
}

fn single_session() -> Session {
    let mut s = Session::new();
    let _ = s.configure_res(js(serde_json::json!({"mode": "single"})));
    s
}

#[wasm_bindgen_test]
fn single_region_flow() {
    let mut s = single_session();
    assert_eq!(s.mode(), "single");
    assert!(s.load_svg(DOC));
    assert_eq!(s.shape_count(), 2);

    let colors: HashMap<String, String> = serde_wasm_bindgen::from_value(s.current_colors()).unwrap();
    assert_eq!(colors["r1"], "#ff0000");
    assert_eq!(colors["region-1"], "#00ff00");

    assert!(s.select("region-1"));
    let sel: Sel = serde_wasm_bindgen::from_value(s.selection()).unwrap();
    assert_eq!(sel, Sel { kind: "region".into(), value: "region-1".into() });

    assert_eq!(s.apply_color("#60a5fa"), 1);
    assert_eq!(s.color_of("region-1").as_deref(), Some("#60a5fa"));
    assert_eq!(s.color_of("r1").as_deref(), Some("#ff0000"));
    assert!(s.is_active("region-1"));
}

#[wasm_bindgen_test]
fn grouped_flow_is_default() {
    let mut s = Session::new();
    assert_eq!(s.mode(), "grouped");
    assert!(s.load_svg(GROUPS));
    assert!(s.select("A"));
    let sel: Sel = serde_wasm_bindgen::from_value(s.selection()).unwrap();
    assert_eq!(sel.kind, "group");
    assert_eq!(sel.value, "#000");
    assert!(s.picker_markup().unwrap().contains("Selected original color: #000"));

    assert_eq!(s.apply_color("#111"), 2);
    assert!(s.selection().is_null());
    assert!(s.picker_markup().is_none());
    let original: HashMap<String, String> = serde_wasm_bindgen::from_value(s.original_colors()).unwrap();
    assert_eq!(original["A"], "#000");
    assert_eq!(s.color_of("C").as_deref(), Some("#fff"));
}

#[wasm_bindgen_test]
fn view_and_markup() {
    let mut s = Session::new();
    assert!(s.canvas_markup().is_none());
    assert!(s.load_svg(GROUPS));
    let markup = s.canvas_markup().unwrap();
    assert!(markup.contains("viewBox=\"0 0 300 300\""));
    assert!(markup.contains("<rect id=\"C\" fill=\"#fff\"/>"));

    #[derive(Deserialize)]
    struct ElementView {
        id: String,
        active: bool,
    }
    #[derive(Deserialize)]
    struct Canvas {
        elements: Vec<ElementView>,
    }
    #[derive(Deserialize)]
    struct View {
        canvas: Option<Canvas>,
        picker: Option<serde_json::Value>,
    }
    let v: View = serde_wasm_bindgen::from_value(s.view()).unwrap();
    let canvas = v.canvas.unwrap();
    assert_eq!(canvas.elements.len(), 3);
    assert_eq!(canvas.elements[0].id, "A");
    assert!(canvas.elements.iter().all(|e| !e.active));
    assert!(v.picker.is_none());
}

#[wasm_bindgen_test]
fn palette_and_snapshot() {
    let mut s = Session::new();
    let palette: Vec<String> = serde_wasm_bindgen::from_value(s.palette()).unwrap();
    assert_eq!(palette, vec!["#f87171", "#60a5fa", "#34d399", "#fbbf24", "#a78bfa"]);

    assert!(s.load_svg(DOC));
    let snap: serde_json::Value = serde_wasm_bindgen::from_value(s.to_json()).unwrap();
    assert_eq!(snap["version"].as_f64(), Some(1.0));
    assert_eq!(snap["shapes"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(snap["selection"], serde_json::Value::Null);
}

#[wasm_bindgen_test]
fn reload_clears_selection() {
    let mut s = single_session();
    assert!(s.load_svg(DOC));
    assert!(s.select("r1"));
    assert!(s.load_svg(DOC));
    assert!(s.selection().is_null());
    assert_eq!(s.shape_count(), 2);
}
