//! Folio CLI - render portfolio project cards to HTML

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use folio_core::catalog::Catalog;
use folio_core::config::{Config, validate_container_id};
use folio_core::render::render_page;
use folio_core::view::{Outline, OutlineOptions, OutlineStyle, element_to_html};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Static portfolio card renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the project page as HTML
    Render {
        /// Catalog file (.toml or .json); defaults to config, then the built-in sample
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Id of the container element
        #[arg(long)]
        container: Option<String>,
        /// Emit only the container element
        #[arg(long)]
        fragment: bool,
        /// Force indented output
        #[arg(long)]
        pretty: bool,
    },

    /// Inspect catalog projects
    Projects {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Print a text outline of the rendered cards
    Outline {
        /// Catalog file (.toml or .json)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
        /// ASCII tree characters only
        #[arg(long)]
        ascii: bool,
        /// Maximum depth to show
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run health check
    Doctor,
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List project titles in catalog order
    List {
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Show project details
    Show {
        title: String,
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so rendered HTML on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?)
                .add_directive("folio_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            catalog,
            output,
            container,
            fragment,
            pretty,
        } => cmd_render(
            catalog.as_deref(),
            output.as_deref(),
            container,
            fragment,
            pretty,
            cli.quiet,
        ),

        Commands::Projects { action } => cmd_projects(action, cli.format),

        Commands::Outline {
            catalog,
            ascii,
            max_depth,
        } => cmd_outline(catalog.as_deref(), ascii, max_depth),

        Commands::Config { action } => cmd_config(action, cli.quiet),

        Commands::Doctor => cmd_doctor(cli.quiet),
    }
}

/// Resolve the catalog: explicit path, then configured path, then the sample
fn resolve_catalog(config: &Config, explicit: Option<&Path>) -> anyhow::Result<Catalog> {
    let path = explicit.or(config.catalog.path.as_deref());
    match path {
        Some(path) => {
            let catalog = Catalog::load(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
            info!(path = %path.display(), projects = catalog.len(), "Using catalog file");
            Ok(catalog)
        }
        None => Ok(Catalog::sample()),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn cmd_render(
    catalog_path: Option<&Path>,
    output: Option<&Path>,
    container: Option<String>,
    fragment: bool,
    pretty: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let catalog = resolve_catalog(&config, catalog_path)?;

    let mut page = config.page_options();
    if let Some(id) = container {
        validate_container_id(&id)?;
        page.container_id = id;
    }

    let mut html_options = config.html_options();
    if pretty {
        html_options.pretty = true;
    }

    let document = render_page(&catalog, &page)?;
    let html = if fragment {
        let container = document
            .container(&page.container_id)
            .ok_or_else(|| folio_core::Error::ContainerNotFound(page.container_id.clone()))?;
        element_to_html(container, &html_options)
    } else {
        document.to_html(&html_options)
    };

    match output {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if !quiet {
                println!("Rendered {} project cards to {}", catalog.len(), path.display());
            }
        }
        None => {
            print!("{}", html);
            if !html.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

fn cmd_projects(action: ProjectAction, format: OutputFormat) -> anyhow::Result<()> {
    let config = Config::load()?;

    match action {
        ProjectAction::List { catalog } => {
            let catalog = resolve_catalog(&config, catalog.as_deref())?;
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(&catalog.titles())?);
            } else if catalog.is_empty() {
                println!("No projects found.");
            } else {
                for title in catalog.titles() {
                    println!("{}", title);
                }
            }
        }
        ProjectAction::Show { title, catalog } => {
            let catalog = resolve_catalog(&config, catalog.as_deref())?;
            let project = catalog.find(&title)?;
            if format == OutputFormat::Json {
                println!("{}", serde_json::to_string_pretty(project)?);
            } else {
                println!("{}", project.title);
                println!("  {}", project.description);
                println!("  {}", project.tech_line());
                if let Some(link) = project.github_link() {
                    println!("  GitHub: {}", link);
                }
                if let Some(link) = project.live_demo_link() {
                    println!("  Live Demo: {}", link);
                }
                if project.has_features() {
                    println!("  Key Features:");
                    for feature in &project.features {
                        println!("    - {}", feature);
                    }
                }
            }
        }
    }
    Ok(())
}

fn cmd_outline(
    catalog_path: Option<&Path>,
    ascii: bool,
    max_depth: Option<usize>,
) -> anyhow::Result<()> {
    let config = Config::load()?;
    let catalog = resolve_catalog(&config, catalog_path)?;
    let page = config.page_options();
    let document = render_page(&catalog, &page)?;

    let container = document
        .container(&page.container_id)
        .ok_or_else(|| folio_core::Error::ContainerNotFound(page.container_id.clone()))?;

    let style = if ascii {
        OutlineStyle::Ascii
    } else {
        OutlineStyle::Unicode
    };
    let mut options = OutlineOptions::default().with_style(style);
    if let Some(depth) = max_depth {
        options = options.with_max_depth(depth);
    }
    print!("{}", Outline::with_options(container, options));
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn cmd_doctor(quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Folio Health Check");
        println!("==================");
        println!();
    }

    let mut all_ok = true;

    // Check configuration
    let config = match Config::load() {
        Ok(config) => {
            if !quiet {
                println!("[OK] Configuration: Valid");
            }
            Some(config)
        }
        Err(e) => {
            all_ok = false;
            if !quiet {
                println!("[!!] Configuration: Error - {:#}", e);
            }
            None
        }
    };

    // Check config file location
    if !quiet {
        if let Ok(path) = Config::config_path() {
            if path.exists() {
                println!("[OK] Config file: {}", path.display());
            } else {
                println!("[--] Config file: {} (using defaults)", path.display());
            }
        }
    }

    // Check catalog
    if let Some(config) = &config {
        match resolve_catalog(config, None) {
            Ok(catalog) => {
                if !quiet {
                    let source = config
                        .catalog
                        .path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "built-in sample".to_string());
                    println!("[OK] Catalog: {} projects ({})", catalog.len(), source);
                }
                if catalog.is_empty() {
                    warn!("Catalog has no projects");
                    if !quiet {
                        println!("[--] Catalog is empty; the page will have no cards");
                    }
                }

                match render_page(&catalog, &config.page_options()) {
                    Ok(_) => {
                        if !quiet {
                            println!("[OK] Render: container '#{}' assembled", config.site.container_id);
                        }
                    }
                    Err(e) => {
                        all_ok = false;
                        if !quiet {
                            println!("[!!] Render: {}", e);
                        }
                    }
                }
            }
            Err(e) => {
                all_ok = false;
                if !quiet {
                    println!("[!!] Catalog: Error - {:#}", e);
                }
            }
        }
    }

    if !quiet {
        println!();
    }

    if all_ok {
        if !quiet {
            println!("All checks passed.");
        }
        Ok(())
    } else {
        Err(anyhow::anyhow!("Health check failed"))
    }
}

#[cfg(test)]
mod main_tests;
