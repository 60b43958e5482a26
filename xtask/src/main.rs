use camino::Utf8Path;
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo xtask <command>");
        eprintln!("Commands:");
        eprintln!("  gallery    Render every spiral size into one HTML page");
        std::process::exit(1);
    }

    match args[1].as_str() {
        "gallery" => gallery(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn gallery() {
    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"));
    let output_path = manifest_dir.join("../gallery.html");

    // (n, svg or error message)
    let mut results: Vec<(i64, Result<String, String>)> = (1..=50)
        .into_par_iter()
        .map(|n| (n, fibspiral::render_spiral(n).map_err(|e| e.to_string())))
        .collect();
    results.sort_by_key(|(n, _)| *n);

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>fibspiral gallery</title>\n<style>\n");
    html.push_str("body { font-family: sans-serif; margin: 20px; }\n");
    html.push_str(".grid { display: flex; flex-wrap: wrap; gap: 16px; }\n");
    html.push_str(".cell { border: 1px solid #ddd; padding: 8px; }\n");
    html.push_str(".error { color: #c00; }\n");
    html.push_str("</style>\n</head>\n<body>\n");
    html.push_str(&format!(
        "<h1>Fibonacci spirals, n = 1..50</h1>\n<p>{} rendered, {} failed</p>\n<div class=\"grid\">\n",
        results.len() - failures,
        failures
    ));
    for (n, result) in &results {
        html.push_str(&format!("<div class=\"cell\"><h3>n = {}</h3>\n", n));
        match result {
            Ok(svg) => html.push_str(svg),
            Err(e) => html.push_str(&format!("<p class=\"error\">{}</p>", e)),
        }
        html.push_str("\n</div>\n");
    }
    html.push_str("</div>\n</body>\n</html>\n");

    fs::write(&output_path, html).expect("Failed to write gallery.html");
    eprintln!("Wrote {} ({} failures)", output_path, failures);
}
