//! Section 321 savings calculator — entry point.
//!
//! Loads configuration, initialises structured logging, then either serves
//! the local calculator form or runs a single calculation from the command
//! line and prints the result.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;

use section321::config::AppConfig;
use section321::dashboard::{self, routes::DashboardState};
use section321::engine;
use section321::form::{OrderForm, PurchaseOrderForm};
use section321::report::Presentation;
use section321::types::SavingsInput;

#[derive(Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the calculator form on localhost (default)
    Serve {
        /// Override the configured dashboard port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Savings for an average monthly order volume
    Orders(OrderArgs),
    /// Savings for units per purchase order × purchase orders per year
    PurchaseOrders(PurchaseOrderArgs),
}

#[derive(Args)]
struct OrderArgs {
    #[arg(long)]
    monthly_orders: Option<u64>,
    #[arg(long)]
    avg_cost_per_order: Option<Decimal>,
    #[arg(long)]
    freight_cost: Option<Decimal>,
    #[arg(long)]
    hts_percentage: Option<Decimal>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct PurchaseOrderArgs {
    #[arg(long)]
    units_per_po: Option<u64>,
    #[arg(long)]
    pos_per_year: Option<u64>,
    #[arg(long)]
    avg_cost_per_unit: Option<Decimal>,
    #[arg(long)]
    freight_cost: Option<Decimal>,
    #[arg(long)]
    hts_percentage: Option<Decimal>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    init_logging();

    let cfg = AppConfig::load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let mut dash = cfg.dashboard.clone();
            if let Some(port) = port {
                dash.port = port;
            }
            info!(name = %cfg.app.name, addr = %dash.socket_addr(), "Starting calculator");
            let state = Arc::new(DashboardState::new(cfg.defaults.clone()));
            dashboard::serve(state, dash.socket_addr()).await
        }
        Command::Orders(args) => {
            let form = OrderForm {
                monthly_orders: args.monthly_orders,
                avg_cost_per_order: args.avg_cost_per_order,
                freight_cost: args.freight_cost,
                hts_percentage: args.hts_percentage,
            };
            let input = form.resolve(&cfg.defaults.orders);
            print_calculation(&input.into(), args.json, cfg.app.chart_width)
        }
        Command::PurchaseOrders(args) => {
            let form = PurchaseOrderForm {
                units_per_po: args.units_per_po,
                pos_per_year: args.pos_per_year,
                avg_cost_per_unit: args.avg_cost_per_unit,
                freight_cost: args.freight_cost,
                hts_percentage: args.hts_percentage,
            };
            let input = form.resolve(&cfg.defaults.purchase_orders);
            print_calculation(&input.into(), args.json, cfg.app.chart_width)
        }
    }
}

/// Run one calculation and print it as text or JSON.
fn print_calculation(input: &SavingsInput, json: bool, chart_width: usize) -> Result<()> {
    let report = engine::calculate(input).context("Calculation failed")?;
    let presentation = Presentation::new(report);

    if json {
        let out = serde_json::to_string_pretty(&presentation)
            .context("Failed to serialise calculation")?;
        println!("{out}");
    } else {
        println!("{}", presentation.render_text(chart_width));
    }
    Ok(())
}

/// Initialise the `tracing` subscriber. Logs go to stderr so stdout
/// carries only the calculation output.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("section321=info"));

    let json_logging = std::env::var("SECTION321_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}
