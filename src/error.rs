use std::path::PathBuf;
use thiserror::Error;

/// Fatal install failures.
///
/// Library code returns these as values; only the binary turns a failure
/// into a process exit. Archive cleanup failure is deliberately absent,
/// it is logged and never aborts an otherwise finished install.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unknown database: {database}")]
    UnknownDatabase { database: String },

    /// Also raised for placeholder catalog entries with no source URL yet.
    #[error("Unknown build for database {database}: {build}")]
    UnknownBuild { database: String, build: String },

    #[error("Unable to create directory: {path:?}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("The database selected does not match that expected: {expected}")]
    VersionMismatch { expected: String, actual: String },
}
