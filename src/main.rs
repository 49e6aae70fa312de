use clap::Parser;

use quizgenius::catalog::Catalog;
use quizgenius::cli::Cli;
use quizgenius::logger;
use quizgenius::state::AppState;
use quizgenius::term::TermCaps;
use quizgenius::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    if cli.log {
        logger::init();
    }

    let catalog = Catalog::load()?;

    // Headless paths first
    if cli.catalog {
        for q in catalog.all() {
            println!(
                "{:>3}  {:<18} {:<8} {}",
                q.id,
                q.subject,
                q.difficulty.label(),
                q.text
            );
        }
        return Ok(());
    }

    if let Some(ref path) = cli.export_catalog {
        std::fs::write(path, catalog.to_csv())
            .map_err(|e| format!("Cannot write {}: {}", path, e))?;
        eprintln!("Catalog exported to {}", path);
        return Ok(());
    }

    if let Some(ref term) = cli.search {
        let hits = catalog.search(term, cli.subject.as_deref(), cli.difficulty)?;
        if hits.is_empty() {
            eprintln!("No questions matched '{}'.", term);
            return Ok(());
        }
        for q in hits {
            println!("{:>3}  [{}] {}", q.id, q.subject, q.text);
        }
        return Ok(());
    }

    let state = AppState::new(catalog, TermCaps::detect());
    tui::run_tui(state)
}
