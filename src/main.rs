use clap::Parser;
use log::info;
use std::process::ExitCode;

use secure_static_server::logger;
use secure_static_server::server::config::ServerConfig;
use secure_static_server::server::error::ServerError;
use secure_static_server::server::{HttpServer, manifest, signal};
use secure_static_server::static_files;

fn main() -> ExitCode {
    logger::init();

    let config = ServerConfig::parse();
    info!("Starting secure static server with config: {:?}", config);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("❌ {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: ServerConfig) -> Result<(), ServerError> {
    let root = config.resolve_root().map_err(ServerError::Bind)?;
    std::env::set_current_dir(&root).map_err(ServerError::Bind)?;

    if config.init {
        static_files::write_demo_site(&root).map_err(ServerError::Bind)?;
        info!("Wrote demo site into {}", root.display());
    }

    manifest::check(&root)?;

    let server = HttpServer::new(&config, &root)?;
    signal::install();
    server.print_banner();

    server.run().map_err(ServerError::Runtime)?;

    println!("\n🛑 Server stopped by user");
    Ok(())
}
