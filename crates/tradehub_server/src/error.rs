//! Server error types

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ServerError {
    #[error("Invalid address: {0}")]
    #[diagnostic(help("Use host:port, e.g. 127.0.0.1:8080"))]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(tradehub_server::config))]
    Config(String),
}
