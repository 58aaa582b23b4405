use std::fmt;

/// Every failure is terminal for the process; variants map one-to-one to
/// the printed diagnostics and a non-zero exit.
#[derive(Debug)]
pub enum ServerError {
    MissingFiles(Vec<String>),
    PortInUse(u16),
    Bind(std::io::Error),
    Runtime(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFiles(files) => write!(
                f,
                "Error: Missing required files: {}\nPlease ensure all web files are present in the root directory.",
                files.join(", ")
            ),
            Self::PortInUse(port) => write!(
                f,
                "Error: Port {port} is already in use\nTry using a different port or stop the process using port {port}"
            ),
            Self::Bind(e) => write!(f, "Error starting server: {e}"),
            Self::Runtime(e) => write!(f, "Unexpected error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_lists_every_name() {
        let err = ServerError::MissingFiles(vec![
            "index.html".to_string(),
            "script.js".to_string(),
        ]);
        let text = err.to_string();
        assert!(text.contains("Missing required files: index.html, script.js"));
    }

    #[test]
    fn port_in_use_names_the_port() {
        let err = ServerError::PortInUse(8080);
        let text = err.to_string();
        assert!(text.contains("Port 8080 is already in use"));
        assert!(text.contains("different port"));
    }
}
