use actix_web::web;
use anyhow::{anyhow, Context};
use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod clipboard;
mod core;
mod generators;
mod history;
mod models;
mod utils;

use crate::cli::{handlers, Args, CliCommand};
use crate::clipboard::CommandClipboard;
use crate::core::config::Config;
use crate::core::PasswordService;
use crate::generators::PasswordGenerator;
use crate::history::{HistoryStore, JsonFileStore};

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true);

    if let Some(log_file) = &config.log_file {
        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)
            .with_context(|| format!("opening log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(path) = &args.history_file {
        config.history_file = path.clone();
    }

    init_logging(&config)?;
    log::debug!("Loaded config: {:?}", config);

    let history = if args.ephemeral {
        HistoryStore::in_memory()
    } else {
        log::debug!("Using history file {}", config.history_file.display());
        HistoryStore::open(Box::new(JsonFileStore::new(&config.history_file)))
    };
    let generator = PasswordGenerator::new(config.character_sets(), config.max_password_length);
    let mut service = PasswordService::new(generator, history);
    let clipboard = CommandClipboard::new(config.copy_command.clone());

    let result = match &args.command {
        Some(CliCommand::Generate(generate)) => {
            handlers::handle_generate(&mut service, &config, &clipboard, generate, args.json)
        }
        Some(CliCommand::Analyze { password }) => handlers::handle_analyze(&service, password, args.json),
        Some(CliCommand::History { action }) => {
            handlers::handle_history(&mut service, &clipboard, action, args.json)
        }
        Some(CliCommand::Serve { port, address }) => {
            let port = port.unwrap_or(config.web_port);
            let address = address.clone().unwrap_or_else(|| config.web_address.clone());
            println!("🚀 API server listening on http://{}:{}", address, port);
            println!("   Swagger UI at http://{}:{}/swagger-ui/", address, port);

            let state = web::Data::new(api::AppState::new(service, config));
            return api::start_server(state, &address, port)
                .await
                .context("API server failed");
        }
        None => cli::menu::run_cli_menu(&mut service, &config, &clipboard),
    };

    result.map_err(|e| {
        log::error!("{}", e);
        anyhow!(e)
    })
}
