// This file is part of the product ViewBind.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::rt::System;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{LevelFilter, info};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use viewbind::app_state::AppState;
use viewbind::binding::{LogObserver, ModelResolver};
use viewbind::config::{ValidatedConfig, load_config};
use viewbind::content::store::ContentStore;
use viewbind::content::type_registry::TypeRegistry;
use viewbind::pipeline::handlers;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    let runtime_root = match parse_args() {
        Ok(root) => root,
        Err(error) => {
            eprintln!("❌ Invalid command line arguments: {}", error);
            eprintln!("❌ Use -C <root> to set the runtime directory.");
            return 1;
        }
    };

    let config = match load_config(&runtime_root.join("config.yaml")) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("❌ Configuration error: {}", error);
            eprintln!("❌ Application cannot start with invalid configuration.");
            return 1;
        }
    };

    if let Err(error) = init_logging(&config) {
        eprintln!("❌ Failed to initialize logger: {}", error);
        return 1;
    }

    match System::new().block_on(run_server(runtime_root, config)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("❌ Server failed to start: {}", error);
            1
        }
    }
}

fn parse_args() -> Result<PathBuf, String> {
    let mut args = std::env::args().skip(1);
    let mut root = PathBuf::from(".");
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-C" => {
                let value = args
                    .next()
                    .ok_or_else(|| "-C requires a directory".to_string())?;
                root = PathBuf::from(value);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }
    Ok(root)
}

fn init_logging(config: &ValidatedConfig) -> Result<(), log::SetLoggerError> {
    let log_level = match config.logging.level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    };

    // Configure logging with a stable format
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

async fn run_server(runtime_root: PathBuf, config: ValidatedConfig) -> std::io::Result<()> {
    let registry = TypeRegistry::load(&runtime_root.join(&config.binding.types_file))
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    info!("✅ Loaded {} content types", registry.len());

    let store = ContentStore::new();
    let loaded = store
        .load_dir(&runtime_root.join(&config.binding.content_dir), &registry)
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    info!("✅ Loaded {} content nodes", loaded);

    let resolver = Arc::new(ModelResolver::new().with_observer(Arc::new(LogObserver)));
    let state = web::Data::new(AppState::new(&config.app.name, resolver, store));
    let config_data = web::Data::new(config.clone());

    let host = config.server.host.clone();
    let port = config.server.port;
    let workers = config.server.workers;

    info!("✅ Starting {} on {}:{}", config.app.name, host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .app_data(config_data.clone())
            .configure(handlers::configure)
    })
    .workers(workers)
    .bind((host.as_str(), port))?
    .run()
    .await
}
