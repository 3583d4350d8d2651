use recolor::{parse_svg, Config, State, PALETTE};
use std::time::Instant;

// Grid of cells cycling through a handful of fills, so grouped recolors hit many regions.
fn build_grid_doc(w: usize, h: usize, fills: usize) -> String {
    let mut body = String::with_capacity(w * h * 64);
    for j in 0..h {
        for i in 0..w {
            let fill = (i + j) % fills.max(1);
            body.push_str(&format!(
                "<rect x=\"{}\" y=\"{}\" width=\"8\" height=\"8\" fill=\"#{:06x}\"/>",
                i * 8,
                j * 8,
                fill * 0x111111
            ));
        }
    }
    format!("<svg xmlns=\"http://www.w3.org/2000/svg\">{}</svg>", body)
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut w = 100usize;
    let mut h = 100usize;
    let mut fills = 8usize;
    let mut repeats = 50usize;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--w=") {
            if let Ok(v) = val.parse() {
                w = v;
            }
        } else if let Some(val) = a.strip_prefix("--h=") {
            if let Ok(v) = val.parse() {
                h = v;
            }
        } else if let Some(val) = a.strip_prefix("--fills=") {
            if let Ok(v) = val.parse() {
                fills = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        }
    }

    let doc = build_grid_doc(w, h, fills);
    let cfg = Config::grouped();

    let t0 = Instant::now();
    let parsed = match parse_svg(&doc, &cfg) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("ingest failed: {}", e);
            std::process::exit(1);
        }
    };
    let parse_ms = t0.elapsed().as_secs_f64() * 1000.0;
    let mut state = State::new(cfg).ingest(parsed);

    let mut recolor_times: Vec<f64> = Vec::with_capacity(repeats);
    let mut written_total = 0usize;
    for r in 0..repeats {
        if !state.is_loaded() {
            break;
        }
        let id = state.shapes()[(r * 7919) % state.shape_count()].id.clone();
        let t = Instant::now();
        let (next, written) = state.select(&id).apply_color_counted(PALETTE[r % PALETTE.len()]);
        let _ = next.render();
        recolor_times.push(t.elapsed().as_secs_f64() * 1000.0);
        written_total += written;
        state = next;
    }
    let avg_recolor = if recolor_times.is_empty() {
        0.0
    } else {
        recolor_times.iter().sum::<f64>() / (recolor_times.len() as f64)
    };

    println!(
        "grid={}x{} shapes={} bytes={} parse_ms={:.3} avg_recolor_render_ms={:.3} regions_written={}",
        w,
        h,
        state.shape_count(),
        doc.len(),
        parse_ms,
        avg_recolor,
        written_total
    );
}
