//! Graph configuration for friendship
//!
//! A configuration file lists the people, the friendships between them and the
//! distance queries to answer:
//!
//! ```toml
//! people = ["Rachel", "Ross", "Ben", "Kramer"]
//! friendships = [["Rachel", "Ross"], ["Ross", "Ben"]]
//! queries = [["Rachel", "Ben"]]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::FriendshipGraph;
use crate::person::Person;

/// Declarative description of a friendship graph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphConfig {
    /// Vertex names, in insertion order
    #[serde(default)]
    pub people: Vec<String>,

    /// Friendship pairs, inserted as (tail, head)
    #[serde(default)]
    pub friendships: Vec<(String, String)>,

    /// Distance queries answered by `demo`
    #[serde(default)]
    pub queries: Vec<(String, String)>,
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

impl Default for GraphConfig {
    /// Four people, two friendships each inserted in both directions
    fn default() -> Self {
        Self {
            people: ["Rachel", "Ross", "Ben", "Kramer"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            friendships: pairs(&[
                ("Rachel", "Ross"),
                ("Ross", "Rachel"),
                ("Ross", "Ben"),
                ("Ben", "Ross"),
            ]),
            queries: pairs(&[
                ("Rachel", "Ross"),
                ("Rachel", "Ben"),
                ("Rachel", "Rachel"),
                ("Rachel", "Kramer"),
            ]),
        }
    }
}

/// A built graph plus the insertions it declined
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub graph: FriendshipGraph,
    /// Duplicate vertices and edges skipped while building
    pub rejected: Vec<GraphError>,
}

impl GraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the graph described by this configuration.
    ///
    /// Duplicate people and friendships are skipped and recorded in the
    /// report. Any other rejection (a friendship naming someone not listed,
    /// a self-loop) aborts the build.
    pub fn build_graph(&self) -> Result<BuildReport> {
        let mut graph = FriendshipGraph::new();
        let mut rejected = Vec::new();

        for name in &self.people {
            match graph.add_vertex(Person::new(name.as_str())) {
                Ok(()) => {}
                Err(err @ GraphError::DuplicateVertex { .. }) => {
                    tracing::info!(error = %err, "skipping person");
                    rejected.push(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        for (tail, head) in &self.friendships {
            let (tail, head) = (Person::new(tail.as_str()), Person::new(head.as_str()));
            match graph.add_edge(&tail, &head) {
                Ok(()) => {}
                Err(err @ GraphError::DuplicateEdge { .. }) => {
                    tracing::info!(error = %err, "skipping friendship");
                    rejected.push(err);
                }
                Err(err) => return Err(err.into()),
            }
        }

        tracing::debug!(
            people = graph.vertex_count(),
            friendships = graph.edge_count(),
            rejected = rejected.len(),
            "build_graph"
        );

        Ok(BuildReport { graph, rejected })
    }
}
