//! Error types for library loading and the global invocation slot.

use thiserror::Error;

/// Errors produced while selecting, opening, or proxying a VM library.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The dynamic library could not be opened. Carries the loader's own
    /// diagnostic (the dlerror text on Unix).
    #[error("failed to open {library}: {source}")]
    OpenFailed {
        library: String,
        #[source]
        source: libloading::Error,
    },

    /// The library opened but a required entry point is missing.
    #[error("missing symbol {symbol} in {library}: {source}")]
    SymbolMissing {
        symbol: String,
        library: String,
        #[source]
        source: libloading::Error,
    },

    /// A process-wide invocation instance is already installed.
    #[error("invocation API already installed")]
    AlreadyInstalled,

    /// No invocation instance has been installed yet.
    #[error("invocation API not installed")]
    NotInstalled,
}

pub type Result<T> = std::result::Result<T, InvocationError>;
