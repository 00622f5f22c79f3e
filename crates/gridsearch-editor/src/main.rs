//! Terminal demo: runs every search strategy over a built-in map and prints
//! the painted result.
//!
//! Run: cargo run --bin gridsearch-demo [-- <strategy>...] [--diagonal]

use gridsearch_core::{Layout, render};
use gridsearch_editor::{Editor, EditorConfig, EditorError};
use gridsearch_paths::{Reachability, Strategy};

const MAP: &str = "
    S.........
    .######.#.
    .#....#.#.
    .#.##.#.#.
    .#.#E.#.#.
    .#.####.#.
    .#......#.
    .########.
    ..........";

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut strategies = Vec::new();
    let mut diagonal = false;
    for arg in std::env::args().skip(1) {
        if arg == "--diagonal" {
            diagonal = true;
        } else {
            strategies.push(arg.parse::<Strategy>()?);
        }
    }
    if strategies.is_empty() {
        strategies.extend(Strategy::ALL);
    }

    let grid = Layout::new(MAP)?.to_grid()?;
    let mut editor = Editor::with_grid(EditorConfig::default(), grid)?;
    if diagonal {
        editor.set_reachability(Reachability::all());
    }

    for strategy in strategies {
        println!("== {strategy}");
        match editor.find_path(Some(strategy)) {
            Ok(report) => println!("{} ({:?})", report.outcome, report.elapsed),
            Err(EditorError::Search(e)) => {
                println!("{e}");
                continue;
            }
            Err(e) => return Err(e.into()),
        }
        println!("{}\n", render(editor.grid()));
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
