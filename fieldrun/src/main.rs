//! fieldrun — load an ASCII field map, search it, draw the result.

use std::env;
use std::io;
use std::process;
use std::time::Instant;

use octile_field::FieldMap;
use octile_paths::{OctileCost, Search, SearchOutcome, Status};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let file = env::args()
        .nth(1)
        .unwrap_or_else(|| String::from("fields/field_3.txt"));
    let field = match FieldMap::load(&file) {
        Ok(field) => field,
        Err(e) => {
            eprintln!("{file}: {e}");
            process::exit(1);
        }
    };
    log::info!(
        "loaded {file}: {}x{} cells, start {}, goal {}",
        field.width(),
        field.height(),
        field.start(),
        field.goal()
    );

    let model = OctileCost::new();
    let started = Instant::now();
    let mut search = Search::new(field.grid(), &model, field.start(), field.goal());
    while search.step() == Status::Running {}
    let discovered = search.discovered();
    let outcome = search.into_outcome();
    let elapsed = started.elapsed();
    log::debug!("search discovered {discovered} nodes");

    let mut stdout = io::stdout();
    match &outcome {
        SearchOutcome::Found(path) => {
            octile_term::render(&mut stdout, &field, Some(path))?;
            println!("{} cells, cost {}", path.len(), path.cost());
        }
        SearchOutcome::NoPath => {
            octile_term::render(&mut stdout, &field, None)?;
            println!("Couldn't find path.");
        }
    }
    println!("took {elapsed:.2?}");
    Ok(())
}
