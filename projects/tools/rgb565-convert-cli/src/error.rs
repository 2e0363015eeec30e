use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("'{input}' is not a 32-bit hex colour: {source}")]
    InvalidColour {
        input: String,
        #[source]
        source: ParseIntError,
    },
    #[error("'{input}' is not a 32-bit hex colour: only hex digits are allowed")]
    InvalidDigits { input: String },
    #[error(transparent)]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}
