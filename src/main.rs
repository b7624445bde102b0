mod app;
mod consolidate;
mod db;
mod ingest;
mod models;
mod report;
mod run;
mod workbook;

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let db_path = get_db_path()?;
    let db = db::Database::open(&db_path)?;
    let mut app = app::App::new(db);

    match args.len() {
        2.. => run::as_cli(&args, &mut app),
        _ => {
            run::print_usage();
            Ok(())
        }
    }
}

fn get_db_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "consolida", "Consolida")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("consolida.db"))
}
