use std::path::PathBuf;

use miette::{IntoDiagnostic, WrapErr};

fn main() -> miette::Result<()> {
    // Logs go to stderr; stdout carries the SVG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: fibspiral <n> [output.svg]");
        std::process::exit(2);
    }

    let count = fibspiral::parse_count(args.get(1).map(String::as_str))?;
    let svg = fibspiral::render_spiral(count.get() as i64)?;

    match args.get(2).map(PathBuf::from) {
        Some(path) => {
            std::fs::write(&path, &svg)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(n = %count, path = %path.display(), "spiral written");
        }
        None => println!("{svg}"),
    }
    Ok(())
}
