use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use suppliers::api::{CmdMessage, ConfigAction, MessageLevel, SuppliersApi};
use suppliers::commands::SuppliersPaths;
use suppliers::config::SuppliersConfig;
use suppliers::error::{Result, SupplierError};
use suppliers::model::Supplier;
use suppliers::store::{CsvBackend, SupplierStore};
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const DATA_DIR_ENV: &str = "SUPPLIERS_DATA";
const COLUMN_GAP: &str = "  ";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "suppliers=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

struct AppContext {
    api: SuppliersApi<CsvBackend>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add { name, email }) => handle_add(&mut ctx, &name, &email),
        Some(Commands::Remove { ids, yes }) => handle_remove(&mut ctx, ids, yes),
        Some(Commands::List { search }) => handle_list(&ctx, search.as_deref()),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "suppliers", "suppliers")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            SupplierError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine a data directory, pass --data-dir",
            ))
        })
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = SuppliersConfig::load(&data_dir)?;

    let paths = SuppliersPaths {
        csv_file: config.csv_path(&data_dir),
        export_file: config.export_path(&data_dir),
        data_dir,
    };
    tracing::debug!(csv = %paths.csv_file.display(), "opening supplier register");

    let store = SupplierStore::open(CsvBackend::new(paths.csv_file.clone()))?
        .with_import_policy(config.import_policy());
    let api = SuppliersApi::new(store, paths);

    Ok(AppContext { api })
}

fn handle_add(ctx: &mut AppContext, name: &str, email: &str) -> Result<()> {
    let result = ctx.api.add_supplier(name, email)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, ids: Vec<String>, yes: bool) -> Result<()> {
    if !yes {
        // Resolve first so unknown ids fail before the prompt.
        let mut targets = Vec::with_capacity(ids.len());
        for id in &ids {
            targets.extend(ctx.api.show_supplier(id)?.listed);
        }
        print_suppliers(&targets);

        let question = if targets.len() == 1 {
            "Are you sure you want to delete this supplier?".to_string()
        } else {
            format!("Are you sure you want to delete these {} suppliers?", targets.len())
        };
        if !confirm(&question)? {
            println!("{}", "Aborted.".dimmed());
            return Ok(());
        }
        // The CSV may have changed while waiting for an answer.
        ctx.api.reload()?;
    }

    let result = ctx.api.remove_suppliers(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<&str>) -> Result<()> {
    let result = ctx.api.list_suppliers(search)?;
    print_suppliers(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_supplier(id)?;
    for supplier in &result.listed {
        println!("{:<12}{}", "ID".dimmed(), supplier.id);
        println!("{:<12}{}", "Name".dimmed(), supplier.name.bold());
        println!("{:<12}{}", "Email".dimmed(), supplier.email);
        println!("{:<12}{}", "Created At".dimmed(), supplier.created_at);
    }
    Ok(())
}

fn handle_export(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_suppliers(path.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.import_suppliers(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let data_dir = &ctx.api.paths().data_dir;
            println!("data-dir = {}", data_dir.display());
            println!("csv-file = {}", config.csv_path(data_dir).display());
            println!("export-file = {}", config.export_path(data_dir).display());
            println!("validate-imports = {}", config.validate_imports);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const HEADERS: [&str; 4] = ["ID", "Name", "Email", "Created At"];

fn print_suppliers(suppliers: &[Supplier]) {
    if suppliers.is_empty() {
        return;
    }

    let rows: Vec<[&str; 4]> = suppliers
        .iter()
        .map(|s| {
            [
                s.id.as_str(),
                s.name.as_str(),
                s.email.as_str(),
                s.created_at.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let header_line = format_row(&HEADERS, &widths);
    println!("{}", header_line.bold());
    for row in &rows {
        println!("{}", format_row(row, &widths));
    }
}

fn format_row(cells: &[&str; 4], widths: &[usize; 4]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(width.saturating_sub(cell.width())));
        }
    }
    line
}
