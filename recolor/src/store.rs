use crate::model::{Parsed, Selection, SelectionMode};
use crate::State;
use log::debug;

pub fn ingest_impl(mut s: State, parsed: Parsed) -> State {
    s.original = parsed.colors.clone();
    s.current = parsed.colors;
    s.shapes = parsed.shapes;
    s.selection = None;
    s
}

pub fn select_impl(mut s: State, id: &str) -> State {
    let next = match s.config.mode {
        SelectionMode::Single => s.current.contains_key(id).then(|| Selection::Region(id.to_string())),
        SelectionMode::Grouped => s.original.get(id).cloned().map(Selection::Group),
    };
    match next {
        Some(sel) => {
            debug!("selected {:?}", sel);
            s.selection = Some(sel);
        }
        None => debug!("ignoring selection of unknown region '{}'", id),
    }
    s
}

// Returns the new state and how many regions were written.
pub fn apply_color_impl(mut s: State, color: &str) -> (State, usize) {
    let written = match s.selection.take() {
        None => 0,
        Some(Selection::Region(id)) => {
            let n = match s.current.get_mut(&id) {
                Some(c) => {
                    *c = color.to_string();
                    1
                }
                None => 0,
            };
            // Single-region edits keep the region active for repeated edits.
            s.selection = Some(Selection::Region(id));
            n
        }
        Some(Selection::Group(key)) => {
            // Membership is decided by the frozen original colors, never the current ones.
            let mut n = 0;
            for (id, orig) in s.original.iter() {
                if *orig == key {
                    s.current.insert(id.clone(), color.to_string());
                    n += 1;
                }
            }
            n
        }
    };
    debug!("applied {} to {} regions", color, written);
    (s, written)
}

pub fn is_active_impl(s: &State, id: &str) -> bool {
    match &s.selection {
        None => false,
        Some(Selection::Region(sel)) => sel == id,
        Some(Selection::Group(key)) => s.original.get(id).map_or(false, |orig| orig == key),
    }
}
