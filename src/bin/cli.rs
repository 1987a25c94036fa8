//! LeoFS Manager CLI
//!
//! Command-line interface for administering a cluster through its manager.

use clap::{Parser, Subcommand};
use leofs_manager::mapper::Mapped;
use leofs_manager::{ClientConfig, CommandName, ManagerClient, ManagerError, Result};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

/// LeoFS manager CLI
#[derive(Parser, Debug)]
#[command(name = "leofs-adm")]
#[command(about = "Administer a LeoFS cluster through its manager console")]
#[command(version)]
struct Args {
    /// Manager address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:10010")]
    manager: String,

    /// Connect timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    connect_timeout_ms: u64,

    /// Read timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Print replies as compact single-line JSON (default is pretty JSON,
    /// acknowledgements as plain text)
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Cluster status, or one node's status
    Status {
        /// Node to inspect
        node: Option<String>,
    },

    /// Start the cluster
    Start,

    /// Detach a node
    Detach { node: String },

    /// Resume a node
    Resume { node: String },

    /// Rebalance the cluster
    Rebalance,

    /// Show where an object's replicas live
    Whereis { path: String },

    /// Storage usage of a node
    Du { node: String },

    /// Start compaction on a node
    Compact { node: String },

    /// Compaction progress of a node
    CompactStatus { node: String },

    /// Purge an object from gateway caches
    Purge { path: String },

    /// Generate an S3 key pair for a user
    GenKey { user_id: String },

    /// Log in as a user
    Login { user_id: String, password: String },

    /// List users
    Users,

    /// Register an S3 endpoint
    SetEndpoint { endpoint: String },

    /// Remove an S3 endpoint
    DelEndpoint { endpoint: String },

    /// List S3 endpoints
    Endpoints,

    /// Create a bucket
    AddBucket { bucket: String, owner: String },

    /// List buckets
    Buckets,

    /// Send any catalog command by its wire name
    Raw {
        command: String,
        args: Vec<String>,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,leofs_manager=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = ClientConfig::builder()
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.read_timeout_ms)
        .reuse_connection(false)
        .build();

    let manager = match ManagerClient::with_config(&args.manager, config) {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Invalid manager address: {}", e);
            std::process::exit(2);
        }
    };

    tracing::debug!("leofs-adm v{} -> {}", leofs_manager::VERSION, manager.addr());

    if let Err(e) = run(&manager, args.command, args.json) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(manager: &ManagerClient, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Status { node: None } => print(&manager.status()?, json),
        Commands::Status { node: Some(node) } => print(&manager.status_of(&node)?, json),
        Commands::Start => print_ack(&manager.start()?.result, json),
        Commands::Detach { node } => print_ack(&manager.detach(&node)?.result, json),
        Commands::Resume { node } => print_ack(&manager.resume(&node)?.result, json),
        Commands::Rebalance => print_ack(&manager.rebalance()?.result, json),
        Commands::Whereis { path } => print(&manager.whereis(&path)?, json),
        Commands::Du { node } => print(&manager.du(&node)?, json),
        Commands::Compact { node } => print_ack(&manager.compact(&node)?.result, json),
        Commands::CompactStatus { node } => print(&manager.compact_status(&node)?, json),
        Commands::Purge { path } => print_ack(&manager.purge(&path)?.result, json),
        Commands::GenKey { user_id } => print(&manager.s3_gen_key(&user_id)?, json),
        Commands::Login { user_id, password } => print(&manager.login(&user_id, &password)?, json),
        Commands::Users => print(&manager.get_users()?, json),
        Commands::SetEndpoint { endpoint } => {
            print_ack(&manager.s3_set_endpoint(&endpoint)?.result, json)
        }
        Commands::DelEndpoint { endpoint } => {
            print_ack(&manager.s3_del_endpoint(&endpoint)?.result, json)
        }
        Commands::Endpoints => print(&manager.s3_get_endpoints()?, json),
        Commands::AddBucket { bucket, owner } => {
            print_ack(&manager.s3_add_bucket(&bucket, &owner)?.result, json)
        }
        Commands::Buckets => print(&manager.s3_get_buckets()?, json),
        Commands::Raw { command, args } => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let command = CommandName::resolve(&command, args.len())?;
            match manager.call(command, &args)? {
                Mapped::Ack(ack) => print_ack(&ack.result, json),
                other => print(&other, json),
            }
        }
    }
}

/// Print an acknowledgement line as-is
fn print_ack(result: &str, json: bool) -> Result<()> {
    if json {
        return print(&serde_json::json!({ "result": result }), true);
    }
    println!("{}", result);
    Ok(())
}

/// Print a model, pretty JSON by default and compact with `--json`
fn print<T: Serialize>(value: &T, json: bool) -> Result<()> {
    let rendered = if json {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|e| ManagerError::Format(format!("failed to render reply: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
