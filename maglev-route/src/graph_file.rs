//! JSON graph files.
//!
//! ```json
//! {
//!     "nodes": ["D"],
//!     "edges": [
//!         { "source": "A", "destination": "B", "cost": 1.0 },
//!         { "source": "B", "destination": "C", "cost": 2.0 }
//!     ]
//! }
//! ```
//!
//! `nodes` is optional and only needed for nodes without any edge.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use maglev_model::{BasicEdge, BasicGraph};

use crate::errors::Error;

#[derive(Clone, Default, PartialEq, Debug, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub nodes: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub destination: String,
    pub cost: f64,
}

impl GraphFile {
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Reading graph file [{}]", path.display());
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(data)?)
    }

    /// Fails on the first edge with an invalid cost.
    pub fn into_graph(self) -> Result<BasicGraph<String>, Error> {
        let mut graph = BasicGraph::new();
        for node in self.nodes {
            graph.add_node(node);
        }
        for EdgeRecord { source, destination, cost } in self.edges {
            let edge = BasicEdge::new(source.clone(), destination.clone(), cost).map_err(|e| Error::BadEdge(source, destination, e))?;
            graph.add_edge(edge);
        }
        Ok(graph)
    }
}
