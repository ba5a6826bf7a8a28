//! Graph Editor server entry point.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;

use graph_editor::{load_from_file, save_to_file, Format, GraphSession};
use graph_editor_server::commands::CommandRegistry;
use graph_editor_server::config::{load_config, resolve_graph_path};
use graph_editor_server::protocol::ProtocolHandler;
use graph_editor_server::session::SessionManager;
use graph_editor_server::transport::StdioTransport;
use graph_editor_server::types::InitializeResult;

#[derive(Parser)]
#[command(
    name = "graph-editor-server",
    about = "Headless graph editor: JSON-RPC over stdio plus file utilities",
    version
)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Graph file to open when serving.
    #[arg(short, long)]
    file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve commands over stdio (default).
    Serve {
        /// Graph file to open.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Check that a graph file loads.
    Validate {
        path: PathBuf,

        /// Skip format detection.
        #[arg(long)]
        format: Option<Format>,
    },

    /// Rewrite a graph file in another format.
    Convert {
        input: PathBuf,
        output: PathBuf,

        /// Output format.
        #[arg(long, default_value = "extended")]
        format: Format,
    },

    /// Write a random graph.
    Random {
        output: PathBuf,

        /// Seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (defaults to the configured one).
        #[arg(long)]
        format: Option<Format>,
    },

    /// Print server capabilities as JSON.
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve { file: None }) {
        Commands::Serve { file } => {
            let effective_file = file.or(cli.file);
            let session = match resolve_graph_path(effective_file.as_deref()) {
                Some(path) => SessionManager::open(&path, &config)?,
                None => SessionManager::new(&config),
            };
            let session = Arc::new(Mutex::new(session));
            let handler = ProtocolHandler::new(session);
            let transport = StdioTransport::new(handler);
            transport.run().await?;
        }

        Commands::Validate { path, format } => match load_from_file(&path, format, &config.style) {
            Ok(graph) => {
                println!("Valid graph file: {}", path.display());
                println!("  Format: {}", graph.format());
                println!("  Vertices: {}", graph.vertex_count());
                println!("  Edges: {}", graph.edge_count());
            }
            Err(e) => {
                eprintln!("Invalid graph file: {e}");
                std::process::exit(1);
            }
        },

        Commands::Convert {
            input,
            output,
            format,
        } => {
            let graph = load_from_file(&input, None, &config.style)?;
            save_to_file(&graph, &output, format)?;
            println!(
                "Converted {} ({}) to {} ({})",
                input.display(),
                graph.format(),
                output.display(),
                format
            );
        }

        Commands::Random {
            output,
            seed,
            format,
        } => {
            let mut rng = match seed.or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut graph = GraphSession::new(config.style.clone());
            let summary = graph.generate_random(&config.random, &mut rng)?;
            let format = format.unwrap_or(config.default_format);
            save_to_file(&graph, &output, format)?;
            println!(
                "Wrote {} vertices and {} edges to {}",
                summary.vertices,
                summary.edges,
                output.display()
            );
        }

        Commands::Info => {
            let commands = CommandRegistry::list_commands();
            let init = InitializeResult::for_commands(commands.len());
            let info = serde_json::json!({
                "server": init.server_info,
                "protocol_version": init.protocol_version,
                "capabilities": init.capabilities,
                "commands": commands.iter().map(|c| &c.name).collect::<Vec<_>>(),
                "command_count": commands.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
