//! Errors.

use std::io;

use thiserror::Error;

use maglev_model::EdgeError;

/// Error type for loading graphs and answering queries.
#[derive(Error, Debug)]
pub enum Error {
    #[error("File error: {0}")]
    FileRead(#[from] io::Error),

    #[error("JSON parse error: {0}")]
    BadJson(#[from] serde_json::Error),

    #[error("Bad edge [{0}] -> [{1}]: {2}")]
    BadEdge(String, String, #[source] EdgeError),

    #[error("Unknown node [{0}]")]
    UnknownNode(String),

    #[error("Unknown algorithm [{0}], expected `dijkstra` or `alt`")]
    UnknownAlgorithm(String),

    #[error("No graph file given, use `--graph` or the `graph` config option")]
    NoGraph,
}
