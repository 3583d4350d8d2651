use proptest::prelude::*;
use recolor::{parse_svg, Config, Selection, State, PALETTE};
use std::collections::HashSet;

#[derive(Clone, Debug)]
struct ShapeSpec {
    tag: &'static str,
    id: Option<u8>,
    fill: Option<u8>,
}

const TAGS: [&str; 6] = ["path", "rect", "circle", "polygon", "g", "ellipse"];
const FILLS: [&str; 3] = ["#000", "#fff", "#f00"];

fn shape_strategy() -> impl Strategy<Value = ShapeSpec> {
    (0usize..TAGS.len(), proptest::option::of(any::<u8>()), proptest::option::of(0u8..3)).prop_map(
        |(t, id, fill)| ShapeSpec { tag: TAGS[t], id, fill },
    )
}

// Explicit ids get a prefix that can never collide with positional ids.
fn build_doc(specs: &[ShapeSpec]) -> String {
    let mut body = String::new();
    let mut used = HashSet::new();
    for s in specs {
        body.push('<');
        body.push_str(s.tag);
        if let Some(id) = s.id {
            if used.insert(id) {
                body.push_str(&format!(" id=\"s{}\"", id));
            }
        }
        if let Some(f) = s.fill {
            body.push_str(&format!(" fill=\"{}\"", FILLS[f as usize]));
        }
        body.push_str("/>");
    }
    format!("<svg xmlns=\"http://www.w3.org/2000/svg\">{}</svg>", body)
}

fn is_shape(tag: &str) -> bool {
    matches!(tag, "path" | "rect" | "circle" | "polygon")
}

proptest! {
    #[test]
    fn ingest_yields_one_unique_id_per_shape(specs in proptest::collection::vec(shape_strategy(), 0..40)) {
        let doc = build_doc(&specs);
        let p = parse_svg(&doc, &Config::default()).unwrap();
        let n = specs.iter().filter(|s| is_shape(s.tag)).count();
        prop_assert_eq!(p.shapes.len(), n);
        let ids: HashSet<&str> = p.shapes.iter().map(|s| s.id.as_str()).collect();
        prop_assert_eq!(ids.len(), n);
        prop_assert_eq!(p.colors.len(), n);
        for (i, sh) in p.shapes.iter().enumerate() {
            if sh.attr("id").is_none() {
                prop_assert_eq!(sh.id.clone(), format!("region-{}", i));
            }
        }
    }

    #[test]
    fn single_recolor_touches_only_the_selected_region(
        specs in proptest::collection::vec(shape_strategy(), 1..30),
        pick in any::<prop::sample::Index>(),
        color in 0usize..PALETTE.len(),
    ) {
        let cfg = Config::single();
        let p = parse_svg(&build_doc(&specs), &cfg).unwrap();
        prop_assume!(!p.shapes.is_empty());
        let s = State::new(cfg).ingest(p);
        let target = s.shapes()[pick.index(s.shape_count())].id.clone();
        let before = s.current().clone();
        let s = s.select(&target).apply_color(PALETTE[color]);
        for (id, c) in s.current() {
            if *id == target {
                prop_assert_eq!(c.as_str(), PALETTE[color]);
            } else {
                prop_assert_eq!(c, &before[id]);
            }
        }
        prop_assert_eq!(s.selection(), Some(&Selection::Region(target)));
    }

    #[test]
    fn grouped_recolor_matches_original_partition(
        specs in proptest::collection::vec(shape_strategy(), 1..30),
        picks in proptest::collection::vec((any::<prop::sample::Index>(), 0usize..5), 1..6),
    ) {
        let cfg = Config::grouped();
        let p = parse_svg(&build_doc(&specs), &cfg).unwrap();
        prop_assume!(!p.shapes.is_empty());
        let mut s = State::new(cfg).ingest(p);
        let original = s.original().clone();
        for (pick, color) in picks {
            let id = s.shapes()[pick.index(s.shape_count())].id.clone();
            let key = original[&id].clone();
            let before = s.current().clone();
            s = s.select(&id).apply_color(PALETTE[color]);
            prop_assert!(s.selection().is_none());
            prop_assert_eq!(s.original(), &original);
            for (rid, c) in s.current() {
                if original[rid] == key {
                    prop_assert_eq!(c.as_str(), PALETTE[color]);
                } else {
                    prop_assert_eq!(c, &before[rid]);
                }
            }
        }
    }
}
