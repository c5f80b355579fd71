use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Transport failure: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Failed to build HTTP client: {message}")]
    ClientBuildError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl ProbeError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::TransportError(e) => format!("Could not reach the token endpoint: {}", e),
            Self::ClientBuildError { message } => {
                format!("HTTP client setup failed: {}", message)
            }
            Self::IoError(e) => format!("IO failure: {}", e),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            Self::MissingConfigError { field } => {
                format!("Configuration value '{}' is missing", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TransportError(_) => {
                "Check the shop domain, network connectivity, and the --timeout-secs setting"
            }
            Self::ClientBuildError { .. } => "Verify the TLS/runtime environment and retry",
            Self::IoError(_) => "Check filesystem/terminal availability",
            Self::InvalidConfigValueError { .. } | Self::MissingConfigError { .. } => {
                "Supply the value via the matching CLI flag or environment variable (see --help)"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ProbeError>;
