//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading the organism dataset.
///
/// An empty query result is not an error; these only describe a dataset that
/// could not be turned into a catalog.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The dataset file is missing or unreadable.
    #[error("failed to read organism data from {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON or a record has the wrong shape.
    #[error("malformed organism data: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The payload parsed but its top level is not an object.
    #[error("organism data must be a JSON object at the top level")]
    NotAnObject,

    /// The top-level object has no organism list.
    #[error("organism data has no `Animals` list")]
    MissingOrganismList,

    /// The organism list exists but holds no records.
    #[error("organism list is empty")]
    EmptyOrganismList,

    /// The recovery pre-scan found no balanced JSON object in the text.
    #[error("no balanced JSON object found in organism data")]
    NoBalancedObject,
}
