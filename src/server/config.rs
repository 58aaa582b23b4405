use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct ServerConfig {
    /// Host to bind
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Root directory to serve; defaults to the directory containing the
    /// server executable
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Worker threads handling connections
    #[arg(short, long, default_value_t = 8)]
    pub threads: usize,

    /// Write the bundled demo site into the root before startup checks
    #[arg(long, default_value_t = false)]
    pub init: bool,
}

impl ServerConfig {
    /// The root stays fixed for the process lifetime; it is resolved once
    /// here and becomes the working directory.
    pub fn resolve_root(&self) -> std::io::Result<PathBuf> {
        let root = match &self.root {
            Some(path) => path.clone(),
            None => {
                let exe = std::env::current_exe()?;
                exe.parent()
                    .map(|dir| dir.to_path_buf())
                    .ok_or_else(|| {
                        std::io::Error::new(
                            std::io::ErrorKind::NotFound,
                            "executable has no parent directory",
                        )
                    })?
            }
        };
        root.canonicalize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            root: None,
            threads: 8,
            init: false,
        }
    }
}
