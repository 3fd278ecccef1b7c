use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod api;
mod breach;
mod cli;
mod core;
mod generators;
mod history;
mod models;
mod storage;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::service::PasswordService;
use crate::storage::{FileKvStore, KvStore, MemoryKvStore};

#[tokio::main]
async fn main() -> Result<(), io::Error> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }
    if let Some(url) = &args.breach_api_url {
        config.breach_api_url = url.clone();
    }
    if let Some(port) = args.api_port {
        config.api_port = port;
    }

    log::info!("🔑 Starting QuickPwd - Password Generator");

    // History and preferences live behind a simple key-value store;
    // fall back to an in-memory one when no data directory is writable.
    let store: Arc<dyn KvStore> = match config.store_path() {
        Some(path) => match FileKvStore::open(path.clone()) {
            Ok(store) => {
                log::debug!("Using store at {:?}", path);
                Arc::new(store)
            }
            Err(e) => {
                log::warn!("Could not open store at {:?}: {}. History will not persist.", path, e);
                Arc::new(MemoryKvStore::new())
            }
        },
        None => {
            log::warn!("No data directory available. History will not persist.");
            Arc::new(MemoryKvStore::new())
        }
    };

    let api_port = config.api_port;
    let api_address = config.api_address.clone();
    let service = Arc::new(PasswordService::new(config, store));

    // One-shot subcommand mode: run it and exit, no server.
    if let Some(command) = args.command {
        return cli::handlers::execute_command(command, service)
            .await
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()));
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
            std::process::exit(0);
        })
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    }

    // API-only mode (blocks forever)
    if args.api_only {
        log::info!("🔒 API-only mode active. CLI interface disabled.");
        return api::start_server(service, api_address, api_port).await;
    }

    // Start API server in background (separate thread with its own runtime
    // so Actix and the interactive prompt do not share a thread)
    if !args.no_api {
        let service_clone = Arc::clone(&service);
        std::thread::spawn(move || match tokio::runtime::Runtime::new() {
            Ok(rt) => {
                rt.block_on(async {
                    if let Err(e) = api::start_server(service_clone, api_address, api_port).await {
                        log::error!("API server error: {}", e);
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to create runtime for API server: {}", e);
            }
        });
        println!("🚀 API server started on port {}", api_port);
    }

    // CLI interactive menu
    cli::menu::run_cli_menu(service, should_exit)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    log::info!("✅ QuickPwd shutdown complete.");
    Ok(())
}
