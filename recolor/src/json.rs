use crate::model::{ColorMapping, Selection, SelectionMode, ShapeKind};
use crate::State;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const SNAPSHOT_VERSION: u32 = 1;

pub fn to_json_impl(s: &State) -> Value {
    #[derive(Serialize)]
    struct ShapeSer<'a> {
        id: &'a str,
        kind: ShapeKind,
        attributes: &'a [(String, String)],
    }
    #[derive(Serialize)]
    struct Snapshot<'a> {
        version: u32,
        mode: SelectionMode,
        shapes: Vec<ShapeSer<'a>>,
        // Sorted so snapshots diff cleanly.
        current: BTreeMap<&'a str, &'a str>,
        original: BTreeMap<&'a str, &'a str>,
        selection: Option<&'a Selection>,
    }
    fn sorted(m: &ColorMapping) -> BTreeMap<&str, &str> {
        m.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
    let snap = Snapshot {
        version: SNAPSHOT_VERSION,
        mode: s.config.mode,
        shapes: s
            .shapes
            .iter()
            .map(|sh| ShapeSer { id: &sh.id, kind: sh.kind, attributes: &sh.attributes })
            .collect(),
        current: sorted(&s.current),
        original: sorted(&s.original),
        selection: s.selection.as_ref(),
    };
    serde_json::to_value(snap).unwrap_or(Value::Null)
}
