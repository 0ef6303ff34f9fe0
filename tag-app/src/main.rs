//! tags - video tag admin CLI
//!
//! # Examples
//!
//! ```bash
//! # Preview a slug
//! tags slug "Café Culture"
//!
//! # Create a tag
//! tags create "Café Culture"
//!
//! # List tags from a specific server
//! tags --server http://127.0.0.1:3333 list --pretty
//! ```

use tag_app::cli::Cli;
use tag_app::commands::Commands;
use tag_app::{
    AppError, AppErrorResult, CreateTagForm, QueryClient, TagCreationFlow, Toaster, fetch_tags,
    logger,
};

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tag_client::Client;
use tag_config::Config;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.server.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = match config.log_file_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    config.log_summary();

    match run(cli.command, cli.pretty, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Validation(e)) => {
            eprintln!("{}", e.message());
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Load and validate config, letting `--server` win over the file and env.
fn load_config(server: Option<&str>) -> AppErrorResult<Config> {
    let mut config = Config::load()?;
    if let Some(url) = server {
        config.api.base_url = url.to_string();
    }
    config.validate()?;
    Ok(config)
}

async fn run(command: Commands, pretty: bool, config: &Config) -> AppErrorResult<()> {
    // Everything below shares the one cache created here.
    let queries = QueryClient::new();
    let client = Arc::new(Client::from_config(config));
    let toaster = Arc::new(Toaster::stdout(&config.toast)?);
    let flow = Arc::new(TagCreationFlow::new(client, queries, toaster));

    match command {
        Commands::Slug { name: Some(name) } => {
            let form = CreateTagForm::new(flow);
            form.on_name_change(&name);
            println!("{}", form.slug());
        }
        Commands::Slug { name: None } => {
            let form = CreateTagForm::new(flow);
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await.map_err(|e| AppError::Io {
                context: "reading names from stdin",
                source: e,
            })? {
                form.on_name_change(&line);
                println!("{}", form.slug());
            }
            form.cancel();
        }
        Commands::Create { name } => {
            let form = CreateTagForm::new(flow);
            form.on_name_change(&name);
            info!("Submitting '{}' as '{}'", form.name(), form.slug());
            form.submit().await?;
        }
        Commands::List => {
            let tags = fetch_tags(flow.queries(), flow.service()).await?;
            let json = if pretty {
                serde_json::to_string_pretty(tags.as_ref())?
            } else {
                serde_json::to_string(tags.as_ref())?
            };
            println!("{json}");
        }
    }

    Ok(())
}
