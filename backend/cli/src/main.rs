mod analyze_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use docscan_config::{redact, Config};
use docscan_gateway::{start_server, GatewayState};
use docscan_providers::{resolve_named, DocumentService};

#[derive(Parser)]
#[command(name = "docscan")]
#[command(about = "docscan: identity document checks through vision models")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Extract document data and compare it with the expected values
    Extract(DocumentArgs),
    /// Verify the document, printing true or false
    Check(DocumentArgs),
}

#[derive(Args)]
pub struct DocumentArgs {
    /// Path to the document image
    pub image: PathBuf,
    /// Expected document type (e.g. RG, CNH)
    #[arg(short = 't', long = "type")]
    pub expected_type: String,
    /// Expected value printed on the document; repeat for several
    #[arg(short = 'v', long = "value")]
    pub expected_values: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    docscan_logging::init_logger(&config.log_dir, &config.log_level);
    docscan_config::log_validation(&config);

    let config = match cli.command {
        Commands::Serve { port: Some(port) } => Config { port, ..config },
        _ => config,
    };

    // Unknown providers fail here, before any client exists.
    let analyzer = resolve_named(&config.provider, &config)?;
    let service = DocumentService::new(analyzer);

    match cli.command {
        Commands::Serve { .. } => {
            info!(
                config = %redact(&serde_json::to_value(&config)?),
                "Starting docscan gateway"
            );
            start_server(config.listen_addr(), GatewayState::new(service)).await?;
        }
        Commands::Extract(args) => {
            let response = analyze_cmd::extract(&service, args.into()).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Commands::Check(args) => {
            let verdict = analyze_cmd::check(&service, args.into()).await?;
            println!("{verdict}");
        }
    }

    Ok(())
}
