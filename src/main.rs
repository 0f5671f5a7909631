use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use trace_client::config::{Config, DEFAULT_CONFIG_PATH};
use trace_client::domain::auth::LoginRequest;
use trace_client::infra::ReqwestTransport;
use trace_client::{logging, TraceApi};

#[derive(Parser)]
#[command(name = "trace-client")]
#[command(about = "Command-line client for the manufacturing traceability backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the issued token and operator
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// List customers
    Customers,
    /// List customer orders
    Orders,
    /// Show one customer order
    Order {
        #[arg(long)]
        id: i64,
    },
    /// List production batches
    Batches {
        /// Print the backward-compatible batch view
        #[arg(long)]
        legacy: bool,
    },
    /// Show one production batch
    Batch {
        #[arg(long)]
        id: i64,
        /// Print the backward-compatible batch view
        #[arg(long)]
        legacy: bool,
    },
    /// List received raw material lots
    Materials,
    /// List processes
    Processes {
        /// Include the ordered machine steps of each process
        #[arg(long)]
        with_machines: bool,
    },
    /// List suppliers
    Suppliers,
    /// List batches waiting for certification
    PendingCertification,
    /// List orders waiting for approval
    PendingApprovals,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(api: &TraceApi, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Login { username, password } => {
            let response = api.auth.login(&LoginRequest { username, password }).await?;
            print_json(&serde_json::json!({
                "token": response.token,
                "operator": response.operator,
            }))
        }
        Commands::Customers => print_json(&api.customers.list().await?),
        Commands::Orders => print_json(&api.orders.list().await?),
        Commands::Order { id } => print_json(&api.orders.get(id).await?),
        Commands::Batches { legacy: true } => print_json(&api.production.legacy_batches().await?),
        Commands::Batches { legacy: false } => print_json(&api.production.list_batches().await?),
        Commands::Batch { id, legacy: true } => print_json(&api.production.legacy_batch(id).await?),
        Commands::Batch { id, legacy: false } => print_json(&api.production.get_batch(id).await?),
        Commands::Materials => print_json(&api.raw_materials.list().await?),
        Commands::Processes { with_machines } => print_json(&api.processes.list(with_machines).await?),
        Commands::Suppliers => print_json(&api.suppliers.list().await?),
        Commands::PendingCertification => {
            print_json(&api.certification.pending_certification().await?)
        }
        Commands::PendingApprovals => print_json(&api.order_approval.pending().await?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)?;
    let _guard = logging::init_logging(&config.logging)?;
    info!(base_url = %config.api.base_url, "trace-client starting");

    let transport = ReqwestTransport::from_config(&config.api)?;
    let api = TraceApi::new(Arc::new(transport));

    if let Err(e) = run(&api, cli.command).await {
        error!("Command failed: {}", e);
        return Err(e);
    }
    Ok(())
}
