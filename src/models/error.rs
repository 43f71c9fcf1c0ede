use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    // Roster input errors
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Invalid YAML in config file: {message}")]
    ConfigParse { message: String },

    #[error("No 'accounts' section found in config file")]
    MissingAccountsSection,

    // Account and key errors
    #[error("Invalid account name: {message}")]
    InvalidAccountName { message: String },

    #[error("Path traversal detected: {path}")]
    PathTraversalDetected { path: String },

    #[error("Key generation failed: {message}")]
    KeyGeneration { message: String },

    #[error("Invalid key format: {message}")]
    InvalidKeyFormat { message: String },

    // System errors
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Home directory not found")]
    HomeDirNotFound,
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        RosterError::IoError {
            message: e.to_string(),
        }
    }
}

impl From<ssh_key::Error> for RosterError {
    fn from(e: ssh_key::Error) -> Self {
        RosterError::InvalidKeyFormat {
            message: e.to_string(),
        }
    }
}

pub type RosterResult<T> = Result<T, RosterError>;
