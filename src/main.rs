use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use std::fs;
use std::path::PathBuf;

mod cli;
mod config;

use cli::Cli;
use cli::commands::Commands;
use config::Config;
use textkit::render::{self, OutputFormat};
use textkit::tools::{self, ToolCatalog};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("textkit")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("textkit.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Everything passes the filter unless RUST_LOG is set; the config level
    // is applied through the global max level once the config is loaded.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn resolve_log_level(config: &Config) -> LevelFilter {
    match config.log_level.as_deref() {
        Some(level) => level.parse().unwrap_or_else(|_| {
            warn!("Unknown log_level '{}' in config, using info", level);
            LevelFilter::Info
        }),
        None => {
            warn!("No log_level in config, using info");
            LevelFilter::Info
        }
    }
}

fn apply_log_level(config: &Config) {
    // RUST_LOG wins over the config file
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    log::set_max_level(resolve_log_level(config));
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    let catalog = config.catalog.build().context("Failed to build tool catalog")?;
    if cli.is_verbose() {
        eprintln!("{} {} tools", "Catalog:".green(), catalog.len());
    }

    match &cli.command {
        None => handle_list_command(&catalog, None, None, config),
        Some(Commands::List { format, query }) => {
            handle_list_command(&catalog, *format, query.as_deref(), config)
        }
        Some(Commands::Show { page, format }) => handle_show_command(&catalog, page, *format, config),
        Some(Commands::Pages) => handle_pages_command(&catalog),
        Some(Commands::Check) => handle_check_command(&catalog),
    }
}

fn handle_list_command(
    catalog: &ToolCatalog,
    format: Option<OutputFormat>,
    query: Option<&str>,
    config: &Config,
) -> Result<()> {
    info!("Listing tools - format: {:?}, query: {:?}", format, query);
    let selected = match query {
        Some(q) => catalog.search(q),
        None => catalog.iter().collect(),
    };
    let format = format.unwrap_or(config.output.format);
    let out = render::render_list(&selected, format, config.output.color)?;
    print!("{}", out);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn handle_show_command(
    catalog: &ToolCatalog,
    page: &str,
    format: Option<OutputFormat>,
    config: &Config,
) -> Result<()> {
    info!("Showing tool: {}", page);
    let tool = catalog.require(page)?;
    let format = format.unwrap_or(config.output.format);
    let out = render::render_one(tool, format, config.output.color)?;
    print!("{}", out);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn handle_pages_command(catalog: &ToolCatalog) -> Result<()> {
    info!("Listing {} pages", catalog.len());
    for page in catalog.pages() {
        println!("{}", page);
    }
    Ok(())
}

fn handle_check_command(catalog: &ToolCatalog) -> Result<()> {
    info!("Checking {} tools", catalog.len());
    let report = tools::check(catalog.as_slice());
    if report.is_clean() {
        println!("{} {} tools, no issues", "OK:".green(), report.checked());
        return Ok(());
    }

    for issue in report.issues() {
        println!("{} {}", "Issue:".red(), issue);
    }
    Err(textkit::TextkitError::Check(format!(
        "{} issues in {} tools",
        report.issues().len(),
        report.checked()
    ))
    .into())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(&config);

    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}
