//! Paxfinder - passenger manifest parser and search
//!
//! Main entry point for the Paxfinder CLI.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use dialoguer::Confirm;
use manifest::SearchResults;
use paxfinder::book::{IngestReport, PassengerBook};
use paxfinder::config::{validate_config_result, PaxfinderConfig};
use paxfinder::display::Renderer;
use paxfinder::storage::SqliteStore;
use paxfinder::style::{self, paint};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Initialize logging
    if let Err(e) = paxfinder::logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        if e.is_warning() {
            eprintln!("{}", paint(style::warning(&e.to_string()), color));
            return;
        }
        eprintln!("{} {}", paint(style::error("Error:"), color), e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> paxfinder::Result<()> {
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(PaxfinderConfig::default_path);

    // Handle init command first (creates config)
    if let Commands::Init = cli.command {
        return handle_init_command(&config_path);
    }

    // An explicit --config must exist; the default location is optional
    let mut config = if cli.config.is_some() {
        PaxfinderConfig::load(&config_path)?
    } else {
        PaxfinderConfig::load_default()?
    };

    if let Some(db) = &cli.db {
        config.storage.path = PathBuf::from(db);
    }
    if cli.expanded {
        config.display.expanded = true;
    }
    if cli.no_color {
        config.display.color = false;
    }
    validate_config_result(&config)?;

    let store = SqliteStore::open(&config.storage)?;
    let mut book = PassengerBook::new(store, config.storage.state_key.clone());
    let renderer = Renderer::new(&config.display);

    match cli.command {
        Commands::Add { file } => {
            let raw = read_input(file.as_deref())?;
            let report = book.ingest(&raw)?;
            print_ingest_report(&report, &renderer, cli.json, config.display.color)?;
        }

        Commands::List => match book.show_all()? {
            Some(results) => print_results(&results, &renderer, cli.json)?,
            None => println!(
                "{}",
                paint(
                    style::dim("No passengers stored yet. Add a manifest with: paxfinder add <file>"),
                    config.display.color
                )
            ),
        },

        Commands::Search { terms } => {
            // Empty query with nothing stored shows nothing, like an empty list
            if let Some(results) = book.search(&terms.join(" "))? {
                print_results(&results, &renderer, cli.json)?;
            }
        }

        Commands::Stats => {
            let data = book.records()?.unwrap_or_default();
            let store_stats = book.repository().store().stats()?;
            let color = config.display.color;

            println!("{}", paint(style::header("Paxfinder Statistics:"), color));
            println!();
            println!("  Flights:          {}", data.group_count());
            println!("  Passengers:       {}", data.record_count());

            if !data.is_empty() {
                println!();
                println!("Flights:");
                for group in &data {
                    let seated = group.records.iter().filter(|r| r.has_seat()).count();
                    println!(
                        "  {:<15} {} passengers ({} seated)",
                        group.name,
                        group.len(),
                        seated
                    );
                }
            }

            println!();
            println!("Storage:");
            if let Some(path) = book.repository().store().path() {
                println!(
                    "  Database:         {}",
                    paint(style::path(&path.display().to_string()), color)
                );
            }
            println!("  State key:        {}", book.repository().key());
            if let Some(last_update) = store_stats.last_update {
                println!("  Last saved:       {}", last_update.to_rfc3339());
            }
        }

        Commands::Clear { yes } => {
            let confirmed = yes
                || Confirm::new()
                    .with_prompt("Are you sure you want to clear all data?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);

            if !confirmed {
                println!("{}", paint(style::dim("Nothing cleared"), config.display.color));
                return Ok(());
            }

            book.clear()?;
            println!("{}", paint(style::success("✓ All data cleared"), config.display.color));
            println!("0 resultados encontrados");
        }

        Commands::Export { output } => {
            let json = book.export()?.ok_or(paxfinder::PaxError::NoData)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    println!(
                        "{} {}",
                        paint(style::success("✓ Exported to"), config.display.color),
                        path.display()
                    );
                }
                None => println!("{}", json),
            }
        }

        Commands::Import { file } => {
            let json = std::fs::read_to_string(&file)?;
            let report = book.import_json(&json)?;
            print_ingest_report(&report, &renderer, cli.json, config.display.color)?;
        }

        Commands::Init => {
            // Handled earlier in the function
            unreachable!("Init command should be handled before opening storage")
        }
    }

    Ok(())
}

fn handle_init_command(config_file: &Path) -> paxfinder::Result<()> {
    if config_file.exists() {
        println!("Configuration already exists at {}", config_file.display());
        return Ok(());
    }

    let config = PaxfinderConfig::new();
    config.save(config_file)?;

    println!("✓ Created configuration at {}", config_file.display());
    println!();
    println!("Next steps:");
    println!("  1. Add a manifest:");
    println!("     paxfinder add manifest.txt");
    println!();
    println!("  2. Find passengers:");
    println!("     paxfinder search 0906 17b");

    Ok(())
}

/// Read manifest text from a file, or stdin for None/"-"
fn read_input(file: Option<&Path>) -> paxfinder::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

fn print_results(results: &SearchResults, renderer: &Renderer, json: bool) -> paxfinder::Result<()> {
    if json {
        println!("{}", results.groups.to_json_pretty()?);
    } else {
        println!("{}", renderer.render_results(results));
    }
    Ok(())
}

fn print_ingest_report(
    report: &IngestReport,
    renderer: &Renderer,
    json: bool,
    color: bool,
) -> paxfinder::Result<()> {
    if json {
        println!("{}", report.state.to_json_pretty()?);
        return Ok(());
    }

    println!(
        "{}",
        paint(
            style::success(&format!("✓ Added {} passengers", report.added_records)),
            color
        )
    );
    if !report.new_groups.is_empty() {
        println!("  New flights: {}", report.new_groups.join(", "));
    }
    println!();
    println!("{}", renderer.render_results(&SearchResults::show_all(&report.state)));
    Ok(())
}
