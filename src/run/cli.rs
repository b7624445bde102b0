use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use crate::app::App;
use crate::models::FileKind;
use crate::report::{self, build_pivots, rank_stores, summarize, ReportFilter};

pub(crate) fn as_cli(args: &[String], app: &mut App) -> Result<()> {
    match args[1].as_str() {
        "upload" => cli_upload(&args[2..], app),
        "files" => cli_files(app),
        "delete" => cli_delete(&args[2..], app),
        "report" => cli_report(&args[2..], app),
        "ranking" => cli_ranking(&args[2..], app),
        "summary" | "s" => cli_summary(app),
        "inventory" => cli_inventory(app),
        "export" => cli_export(&args[2..], app),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("consolida {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

pub(crate) fn print_usage() {
    println!("Consolida — sales consolidation for heterogeneous retail spreadsheets");
    println!();
    println!("Usage: consolida <command>");
    println!();
    println!("Commands:");
    println!("  upload <file> --type <kind>   Ingest a spreadsheet (first sheet only)");
    println!("                                kinds: history2025, report2026, sku-master,");
    println!("                                inventory");
    println!("  files                         List uploaded files");
    println!("  delete <id> [--yes]           Delete a file and its rows (asks first)");
    println!("  report [view]                 Print a pivot table; views: store-category,");
    println!("                                store-month, product-month, product-store");
    println!("    --year <YYYY|all>           Keep one campaign year (default: all)");
    println!("    --category <name>           Keep a category; repeatable");
    println!("    --month <1-12>              Keep a month; repeatable");
    println!("    --store <name|all>          Keep one store (default: all)");
    println!("  ranking                       Month-by-month store ranking (same filters)");
    println!("  summary                       Totals, 2025-vs-2026 trend, category mix");
    println!("  inventory                     List stored stock rows");
    println!("  export [path]                 Write the consolidated records as CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

fn cli_upload(args: &[String], app: &mut App) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: consolida upload <file> --type <kind>");
    }

    let file_path = &args[0];
    let path = Path::new(file_path);
    if !path.exists() {
        anyhow::bail!("File not found: {file_path}");
    }

    let kind_arg = args
        .windows(2)
        .find(|w| w[0] == "--type")
        .map(|w| w[1].as_str())
        .ok_or_else(|| anyhow::anyhow!("Missing --type <kind>"))?;
    let kind = FileKind::parse(kind_arg).ok_or_else(|| {
        let known: Vec<&str> = FileKind::all().iter().map(|k| k.as_str()).collect();
        anyhow::anyhow!(
            "Unknown file type: {kind_arg} (expected one of: {})",
            known.join(", ")
        )
    })?;

    let (file, state) = app.upload(path, kind)?;
    println!(
        "Stored #{} {} ({}, {} rows)",
        file.id,
        file.name,
        file.kind.label(),
        file.row_count
    );

    let has_report = state.files.iter().any(|f| f.kind == FileKind::Report2026);
    let has_master = state.files.iter().any(|f| f.kind == FileKind::SkuMaster);
    if has_report && !has_master {
        eprintln!("Warning: 2026 reports present without a SKU master; their rows stay unassigned");
    }
    Ok(())
}

fn cli_files(app: &mut App) -> Result<()> {
    let state = app.load()?;
    if state.files.is_empty() {
        println!("No files uploaded");
        return Ok(());
    }

    println!(
        "{:<4} {:<32} {:<14} {:<12} Rows",
        "ID", "Name", "Kind", "Uploaded"
    );
    println!("{}", "─".repeat(72));
    for file in &state.files {
        println!(
            "{:<4} {:<32} {:<14} {:<12} {}",
            file.id,
            file.name,
            file.kind.label(),
            format_upload_date(file.uploaded_at),
            file.row_count,
        );
    }
    Ok(())
}

fn format_upload_date(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn cli_delete(args: &[String], app: &mut App) -> Result<()> {
    let id: i64 = args
        .first()
        .ok_or_else(|| anyhow::anyhow!("Usage: consolida delete <id> [--yes]"))?
        .parse()
        .context("File id must be a number")?;

    let file = app
        .file_by_id(id)?
        .ok_or_else(|| anyhow::anyhow!("File {id} not found"))?;

    if file.kind == FileKind::SkuMaster {
        println!("Note: deleting a SKU master clears the entire SKU table");
    }

    let skip_confirm = args.iter().any(|a| a == "--yes" || a == "-y");
    if !skip_confirm && !confirm(&format!("Delete #{} {}?", file.id, file.name))? {
        println!("Cancelled");
        return Ok(());
    }

    let state = app.delete_file(id)?;
    println!(
        "Deleted #{} {} ({} files remain)",
        file.id,
        file.name,
        state.files.len()
    );
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}

fn parse_filter(args: &[String]) -> Result<ReportFilter> {
    let mut filter = ReportFilter::default();
    for pair in args.windows(2) {
        match pair[0].as_str() {
            "--year" => {
                if pair[1] != "all" {
                    filter.year = Some(pair[1].clone());
                }
            }
            "--store" => {
                if pair[1] != "all" {
                    filter.store = Some(pair[1].clone());
                }
            }
            "--category" => {
                filter.categories.insert(pair[1].clone());
            }
            "--month" => {
                let month: u32 = pair[1].parse().context("Month must be a number")?;
                if !(1..=12).contains(&month) {
                    anyhow::bail!("Month must be between 1 and 12");
                }
                filter.months.insert(month - 1);
            }
            _ => {}
        }
    }
    Ok(filter)
}

fn cli_report(args: &[String], app: &mut App) -> Result<()> {
    let view = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(String::as_str)
        .unwrap_or("store-month");

    let filter = parse_filter(args)?;
    let state = app.load()?;
    let pivots = build_pivots(&state.unified, &filter);

    let Some((title, matrix)) = matrix_for(&pivots, view) else {
        anyhow::bail!("Unknown report view: {view}");
    };
    print_matrix(title, matrix);
    Ok(())
}

fn matrix_for<'a>(
    pivots: &'a report::SalesPivots,
    view: &str,
) -> Option<(&'static str, &'a report::PivotMatrix)> {
    match view {
        "store-category" => Some(("Store × Category (units)", &pivots.store_category)),
        "store-month" => Some(("Store × Month (units)", &pivots.store_month)),
        "product-month" => Some(("Product × Month (units)", &pivots.product_month)),
        "product-store" => Some(("Product × Store (units)", &pivots.product_store)),
        _ => None,
    }
}

fn print_matrix(title: &str, matrix: &report::PivotMatrix) {
    println!("{title}");
    if matrix.rows.is_empty() {
        println!("No data");
        return;
    }

    let name_w = matrix
        .rows
        .iter()
        .map(|r| r.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);
    let col_w: Vec<usize> = matrix
        .cols
        .iter()
        .map(|c| {
            c.chars()
                .count()
                .max(matrix.col_total(c).to_string().len())
                .max(4)
        })
        .collect();

    print!("{:<name_w$}", "");
    for (col, &w) in matrix.cols.iter().zip(&col_w) {
        print!(" {col:>w$}");
    }
    println!(" {:>8}", "Total");

    let line_w = name_w + col_w.iter().map(|w| w + 1).sum::<usize>() + 9;
    println!("{}", "─".repeat(line_w));

    for row in &matrix.rows {
        print!("{row:<name_w$}");
        for (col, &w) in matrix.cols.iter().zip(&col_w) {
            match matrix.get(row, col) {
                Some(value) => print!(" {value:>w$}"),
                None => print!(" {:>w$}", "-"),
            }
        }
        println!(" {:>8}", matrix.row_total(row));
    }

    println!("{}", "─".repeat(line_w));
    print!("{:<name_w$}", "Total");
    for (col, &w) in matrix.cols.iter().zip(&col_w) {
        print!(" {:>w$}", matrix.col_total(col));
    }
    println!(" {:>8}", matrix.grand_total());
}

fn cli_ranking(args: &[String], app: &mut App) -> Result<()> {
    let filter = parse_filter(args)?;
    let state = app.load()?;
    let pivots = build_pivots(&state.unified, &filter);
    let rankings = rank_stores(&pivots.store_month, &pivots.store_month.rows);
    print_ranking(&rankings);
    Ok(())
}

fn print_ranking(rankings: &[report::StoreRanking]) {
    if rankings.is_empty() {
        println!("No data");
        return;
    }

    let name_w = rankings
        .iter()
        .map(|r| r.store.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    print!("{:<4} {:<name_w$}", "Pos", "Store");
    for abbr in report::MONTH_ABBREV {
        print!(" {abbr:>4}");
    }
    println!(" {:>7}", "Total");
    println!("{}", "─".repeat(name_w + 5 + 12 * 5 + 8));

    for (position, ranking) in rankings.iter().enumerate() {
        print!("{:<4} {:<name_w$}", position + 1, ranking.store);
        for rank in &ranking.monthly_ranks {
            match rank {
                Some(r) => print!(" {r:>4}"),
                None => print!(" {:>4}", "-"),
            }
        }
        println!(" {:>7}", ranking.total);
    }
    println!();
    println!("Lower is better: rank points accumulate across months.");
}

fn cli_summary(app: &mut App) -> Result<()> {
    let state = app.load()?;
    let summary = summarize(&state.unified);
    print_summary(&summary, state.files.len());
    Ok(())
}

fn print_summary(summary: &report::SummaryReport, file_count: usize) {
    println!("Consolida — summary");
    println!("{}", "─".repeat(44));
    println!("  Units:       {}", summary.total_quantity);
    println!("  Revenue:     ${:.2}", summary.total_revenue);
    match &summary.top_store {
        Some((store, qty)) => println!("  Top store:   {store} ({qty} un)"),
        None => println!("  Top store:   -"),
    }
    match &summary.top_product {
        Some((product, qty)) => println!("  Top product: {product} ({qty} un)"),
        None => println!("  Top product: -"),
    }
    println!("  Files:       {file_count}");

    if !summary.monthly_trend.is_empty() {
        println!();
        println!("Monthly trend (units):");
        println!("  {:<12} {:>8} {:>8}", "Month", "2025", "2026");
        for point in &summary.monthly_trend {
            let name = report::MONTH_NAMES[(point.month - 1) as usize];
            println!("  {name:<12} {:>8} {:>8}", point.qty_2025, point.qty_2026);
        }
    }

    if !summary.category_mix.is_empty() {
        println!();
        println!("Top categories (units):");
        for (category, qty) in &summary.category_mix {
            println!("  {category:<28} {qty:>8}");
        }
    }
}

fn cli_inventory(app: &mut App) -> Result<()> {
    let items = app.inventory()?;
    if items.is_empty() {
        println!("No inventory rows");
        return Ok(());
    }

    println!(
        "{:<14} {:<32} {:>8}  {:<20} Date",
        "SKU", "Description", "Qty", "Store"
    );
    println!("{}", "─".repeat(90));
    for item in &items {
        println!(
            "{:<14} {:<32} {:>8}  {:<20} {}",
            item.sku, item.description, item.quantity, item.store, item.date,
        );
    }
    println!("{} rows", items.len());
    Ok(())
}

fn cli_export(args: &[String], app: &mut App) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| shellexpand(a))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
            format!("{home}/consolida-export.csv")
        });

    let count = app.export_csv(&output_path)?;
    if count == 0 {
        println!("No records to export");
    } else {
        println!("Exported {count} records to {output_path}");
    }
    Ok(())
}

fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
