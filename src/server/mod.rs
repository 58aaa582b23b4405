pub mod config;
pub mod error;
pub mod handler;
pub mod http_status;
pub mod manifest;
pub mod security;
pub mod signal;

use log::{debug, error, info};
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use threadpool::ThreadPool;

use config::ServerConfig;
use error::ServerError;

pub struct HttpServer {
    config: ServerConfig,
    listener: TcpListener,
    thread_pool: ThreadPool,
    document_root: PathBuf,
    stop: Arc<AtomicBool>,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, document_root: &Path) -> Result<Self, ServerError> {
        let addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&addr).map_err(|e| {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                ServerError::PortInUse(config.port)
            } else {
                ServerError::Bind(e)
            }
        })?;
        listener.set_nonblocking(true).map_err(ServerError::Bind)?;

        info!("Server started on {}", addr);

        Ok(Self {
            config: config.clone(),
            listener,
            thread_pool: ThreadPool::new(config.threads),
            document_root: document_root.to_path_buf(),
            stop: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Shared flag that ends the accept loop; the SIGINT handler sets the
    /// process-wide equivalent.
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop)
    }

    pub fn print_banner(&self) {
        let border = "=".repeat(60);
        let port = self
            .listener
            .local_addr()
            .map(|addr| addr.port())
            .unwrap_or(self.config.port);

        println!("{border}");
        println!("🔒 Secure Static File Server");
        println!("{border}");
        println!("🌐 Server running at: http://{}:{}", self.config.host, port);
        println!("📁 Serving files from: {}", self.document_root.display());
        println!("🔒 Security headers enabled");
        println!("{border}");
        println!("Press Ctrl+C to stop the server");
        println!("{border}");
    }

    /// Accepts until interrupted, handing each connection to the pool.
    /// Unexpected accept errors are fail-fast and bubble up to the caller.
    pub fn run(&self) -> std::io::Result<()> {
        info!("Server running with {} threads", self.config.threads);

        loop {
            if signal::shutdown_requested() || self.stop.load(Ordering::SeqCst) {
                break;
            }

            match self.listener.accept() {
                Ok((stream, addr)) => {
                    debug!("New connection from {}", addr);
                    if let Err(e) = stream.set_nonblocking(false) {
                        error!("Failed to set blocking mode for {}: {}", addr, e);
                        continue;
                    }

                    let document_root = self.document_root.clone();
                    self.thread_pool.execute(move || {
                        handler::handle_client(stream, &document_root);
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                // EINTR: loop around so the shutdown flag is seen
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                    return Err(e);
                }
            }
        }

        info!("No longer accepting connections, draining in-flight requests");
        self.thread_pool.join();

        Ok(())
    }
}
