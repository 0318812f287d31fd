//! plancard - Pricing section preview server and content tooling

mod cli;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use plancard_core::models::BillingCycle;
use plancard_core::{ConfigReport, OverridesLoader, PricingOverrides, ResolvedPricing};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// File names probed in the user config directory when no --config is given
const DEFAULT_CONFIG_NAMES: [&str; 3] = ["pricing.json", "pricing.yaml", "pricing.yml"];

#[derive(Parser)]
#[command(
    name = "plancard",
    version,
    about = "Pricing section preview server and content tooling",
    long_about = "Renders a three-tier pricing section with a monthly/annual billing toggle.\n\
                  \n\
                  Every displayed string can be overridden from a JSON or YAML file keyed by\n\
                  content identifier. Annual prices are derived from monthly ones at a 25% discount.\n\
                  \n\
                  Modes:\n  \
                  serve      - Preview server (default)\n  \
                  render     - Write the rendered page to stdout or a file\n  \
                  plans      - Show the projected plan prices\n  \
                  check      - Validate an override file\n  \
                  editables  - List the editable content identifiers"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Override file (.json, .yaml or .yml)
    #[arg(long, short = 'c', env = "PLANCARD_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored table output
    #[arg(long, env = "PLANCARD_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the preview server
    Serve {
        /// Port to listen on
        #[arg(long, short = 'p', default_value = "3333")]
        port: u16,
    },
    /// Render the pricing page as HTML
    Render {
        /// Billing cycle to render (monthly or annual)
        #[arg(long, short = 'b', default_value = "monthly")]
        billing: BillingCycle,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        out: Option<PathBuf>,

        /// Render only the section fragment without the surrounding document
        #[arg(long)]
        fragment: bool,
    },
    /// Show the plan cards as displayed for a billing cycle
    Plans {
        /// Billing cycle to project (monthly or annual)
        #[arg(long, short = 'b', default_value = "monthly")]
        billing: BillingCycle,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the override file and report findings
    Check,
    /// List the editable content identifiers
    Editables {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = cli.config.or_else(discover_config);
    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Serve { port: 3333 }) {
        Mode::Serve { port } => {
            run_serve(config.as_deref(), port).await?;
        }
        Mode::Render {
            billing,
            out,
            fragment,
        } => {
            run_render(config.as_deref(), billing, out, fragment)?;
        }
        Mode::Plans { billing, json } => {
            run_plans(config.as_deref(), billing, json, no_color)?;
        }
        Mode::Check => {
            run_check(config.as_deref(), no_color)?;
        }
        Mode::Editables { json } => {
            run_editables(json, no_color)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("plancard=info,plancard_core=info,plancard_web=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Look for an override file under the user config directory
fn discover_config() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("plancard");
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load overrides (if any) and resolve them into display-ready content
fn load_pricing(config: Option<&Path>) -> Result<(ResolvedPricing, ConfigReport)> {
    let (overrides, report) = match config {
        Some(path) => {
            info!(path = %path.display(), "Loading pricing overrides");
            OverridesLoader::new()
                .load(path)
                .with_context(|| format!("Failed to load overrides from {}", path.display()))?
        }
        None => (PricingOverrides::default(), ConfigReport::new()),
    };

    for finding in report.warnings() {
        warn!(key = %finding.key, "{}", finding.message);
    }

    let pricing = ResolvedPricing::resolve(&overrides).context("Pricing content is invalid")?;

    Ok((pricing, report))
}

async fn run_serve(config: Option<&Path>, port: u16) -> Result<()> {
    let (pricing, _) = load_pricing(config)?;
    plancard_web::run(Arc::new(pricing), port).await
}

fn run_render(
    config: Option<&Path>,
    billing: BillingCycle,
    out: Option<PathBuf>,
    fragment: bool,
) -> Result<()> {
    let (pricing, _) = load_pricing(config)?;
    let pricing = Arc::new(pricing);

    let html = if fragment {
        plancard_web::page::render_section(pricing, billing)
    } else {
        plancard_web::page::render_page(pricing, billing)
    };

    match out {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), billing = %billing, "Rendered pricing page");
        }
        None => println!("{}", html),
    }

    Ok(())
}

fn run_plans(
    config: Option<&Path>,
    billing: BillingCycle,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let (pricing, _) = load_pricing(config)?;
    let view = pricing.render(billing);

    if json {
        println!("{}", serde_json::to_string_pretty(&view.cards)?);
    } else {
        println!("{}", cli::format_plans_table(&view, no_color));
    }

    Ok(())
}

fn run_check(config: Option<&Path>, no_color: bool) -> Result<()> {
    let Some(path) = config else {
        println!("No override file found, built-in content is in use");
        return Ok(());
    };

    let report = OverridesLoader::new().check(path);
    println!("{}", cli::format_report(path, &report, no_color));

    if report.has_errors() {
        bail!("{} has invalid content", path.display());
    }

    Ok(())
}

fn run_editables(json: bool, no_color: bool) -> Result<()> {
    let slots = plancard_core::editable_slots();

    if json {
        println!("{}", serde_json::to_string_pretty(slots)?);
    } else {
        println!("{}", cli::format_editables_table(slots, no_color));
    }

    Ok(())
}
