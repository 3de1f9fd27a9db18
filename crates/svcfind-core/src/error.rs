use thiserror::Error;

/// Errors raised while loading configuration, either from the environment or
/// from the districts data file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read districts file {path}")]
    DistrictsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse districts file")]
    DistrictsFileParse(#[from] serde_yaml::Error),

    #[error("invalid districts data: {0}")]
    Validation(String),
}
