//! order-dashboard: command line host for the dashboard
//!
//! Runs one dashboard action against the backend. Alerts go to stderr, URLs
//! and clipboard text to stdout, and `--out` saves the page snapshot as HTML.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use order_dashboard::{
    ApiClient, Config, Dashboard, DashboardError, HtmlPage, Inputs, OrderFilter, Result, Tab,
};

#[derive(Parser, Debug)]
#[command(
    name = "order-dashboard",
    about = "Orders, positions and symbols of a futures trading webhook backend",
    version
)]
struct Cli {
    /// Backend origin
    #[arg(long, env = "DASHBOARD_BASE_URL")]
    base_url: Option<String>,

    /// Value sent as X-Auth-Key
    #[arg(long, env = "DASHBOARD_AUTH_KEY", hide_env_values = true)]
    auth_key: Option<String>,

    /// Real trading mode instead of simulation
    #[arg(long, default_value_t = false)]
    real: bool,

    /// Save the page snapshot as HTML
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Order history (default)
    Orders {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        action: Option<String>,
        #[arg(long)]
        symbol: Option<String>,
    },
    /// Open positions
    Positions,
    /// Symbol catalogue
    Symbols {
        /// Case-insensitive search over symbol, code and name
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Re-query one order at the exchange
    Recheck { order_id: i64 },
    /// Print the CSV export URL
    Export,
    /// Print the webhook URL for the current mode
    Webhook,
    /// Copy a symbol to the clipboard
    Copy { symbol: String },
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env();
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if cli.auth_key.is_some() {
        config.auth_key.clone_from(&cli.auth_key);
    }
    if cli.real {
        config.simulation = false;
    }
    config.validate()?;
    Ok(config)
}

async fn run(dash: &mut Dashboard<ApiClient, HtmlPage>, command: Command) -> Result<()> {
    if let Err(e) = dash.init().await {
        warn!(error = %e, "symbol catalogue unavailable");
    }

    match command {
        Command::Orders {
            status,
            action,
            symbol,
        } => {
            dash.view_mut().inputs_mut().filter = OrderFilter {
                status,
                action,
                symbol,
            };
            dash.switch_tab(Tab::Orders);
            dash.load_current_tab().await
        }
        Command::Positions => {
            dash.switch_tab(Tab::Positions);
            dash.load_current_tab().await
        }
        Command::Symbols { search } => {
            dash.view_mut().inputs_mut().symbol_query = search;
            dash.switch_tab(Tab::Symbols);
            dash.filter_symbols();
            Ok(())
        }
        Command::Recheck { order_id } => dash.recheck_order(order_id).await.map(|_| ()),
        Command::Export => dash.export_csv(),
        Command::Webhook => {
            println!("{}", dash.view().page().mode.as_ref().map_or("", |m| m.webhook_url.as_str()));
            Ok(())
        }
        Command::Copy { symbol } => {
            dash.switch_tab(Tab::Symbols);
            dash.copy_symbol(&symbol)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Local .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config.log_level);

    info!(
        base_url = config.origin(),
        simulation = config.simulation,
        "starting dashboard"
    );

    let page = HtmlPage::new(Inputs {
        auth_key: config.auth_key.clone().unwrap_or_default(),
        simulation: config.simulation,
        ..Inputs::default()
    });
    let mut dash = Dashboard::new(ApiClient::new(&config)?, page);

    let command = cli.command.unwrap_or(Command::Orders {
        status: None,
        action: None,
        symbol: None,
    });
    let outcome = run(&mut dash, command).await;
    if let Err(e) = &outcome {
        warn!(error = %e, "action failed");
    }

    let page = dash.into_view();
    for alert in page.alerts() {
        eprintln!("{alert}");
    }
    for url in page.opened_urls() {
        println!("{url}");
    }
    if let Some(text) = page.clipboard() {
        println!("{text}");
    }

    if let Some(path) = &cli.out {
        std::fs::write(path, page.render())
            .map_err(|e| DashboardError::Action(format!("{}: {e}", path.display())))?;
        info!(path = %path.display(), "page written");
    }

    outcome
}
