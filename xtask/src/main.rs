use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use std::fs;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        usage();
    }

    match args[1].as_str() {
        "bless" => bless(),
        "render" => match args.get(2) {
            Some(path) => render(Utf8Path::new(path)),
            None => usage(),
        },
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn usage() -> ! {
    eprintln!("Usage: cargo xtask <command>");
    eprintln!("Commands:");
    eprintln!("  bless           Rewrite tests/scripts/*.expected from the current renderer");
    eprintln!("  render <file>   Print the grid and diagnostics for one script");
    std::process::exit(1);
}

fn scripts_dir() -> Utf8PathBuf {
    Utf8Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/scripts")
}

fn bless() {
    let dir = scripts_dir();
    let mut scripts: Vec<Utf8PathBuf> = dir
        .read_dir_utf8()
        .expect("Failed to read scripts directory")
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension() == Some("txt"))
        .collect();
    scripts.sort();

    // (name, changed, diagnostics)
    let results: Vec<(String, bool, usize)> = scripts
        .par_iter()
        .map(|path| {
            let source = fs::read_to_string(path).expect("Failed to read script");
            let plot = gridplot::plot(path.as_str(), &source);
            let expected_path = path.with_extension("expected");
            let changed = fs::read_to_string(&expected_path).ok().as_deref() != Some(plot.output.as_str());
            if changed {
                fs::write(&expected_path, &plot.output).expect("Failed to write expectation");
            }
            let name = path.file_name().unwrap_or(path.as_str()).to_string();
            (name, changed, plot.diagnostics.len())
        })
        .collect();

    for (name, changed, diagnostics) in &results {
        let status = if *changed { "updated" } else { "ok" };
        eprintln!("{:<32} {:<8} {} rejected line(s)", name, status, diagnostics);
    }
    let updated = results.iter().filter(|r| r.1).count();
    eprintln!("{} script(s), {} updated", results.len(), updated);
}

fn render(path: &Utf8Path) {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };
    let plot = gridplot::plot(path.as_str(), &source);
    for diagnostic in plot.diagnostics {
        eprintln!("{:?}", miette::Report::new(diagnostic));
    }
    print!("{}", plot.output);
}
