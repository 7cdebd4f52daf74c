//! Friendship graph storage and distance queries
//!
//! - `types`: the undirected [`Edge`] and the [`Distance`] result
//! - `traversal`: the [`GraphProvider`] adjacency seam
//! - `bfs`: single-source breadth-first search over a provider
//!
//! The graph is append-only. Every operation validates its arguments before
//! touching state, so a rejected call leaves the graph unchanged.

pub mod bfs;
pub mod traversal;
pub mod types;


use std::collections::{HashMap, HashSet};

use crate::error::GraphError;
use crate::person::Person;

pub use bfs::bfs_distances;
pub use traversal::GraphProvider;
pub use types::{Distance, Edge};

/// An undirected graph whose vertices are people and whose edges are
/// friendships.
///
/// Arguments that may be absent are taken as `impl Into<Option<..>>`: pass
/// `&person` normally, or `None::<&Person>` to model a missing argument, which
/// is rejected with [`GraphError::InvalidArgument`].
///
/// Not synchronised; wrap it in a lock for shared mutation.
#[derive(Debug, Clone, Default)]
pub struct FriendshipGraph {
    vertices: Vec<Person>,
    index: HashMap<Person, usize>,
    edges: Vec<Edge>,
    edge_set: HashSet<Edge>,
    // Neighbour indices per vertex, in edge insertion order
    adjacency: Vec<Vec<usize>>,
}

fn require<T>(arg: Option<T>) -> Result<T, GraphError> {
    arg.ok_or(GraphError::InvalidArgument)
}

impl FriendshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person as a vertex.
    ///
    /// Fails with `InvalidArgument` for `None` and `DuplicateVertex` when an
    /// equal person is already present.
    pub fn add_vertex(&mut self, person: impl Into<Option<Person>>) -> Result<(), GraphError> {
        let person = require(person.into())?;

        if self.index.contains_key(&person) {
            return Err(GraphError::duplicate_vertex(person.name()));
        }

        tracing::debug!(person = %person, "add_vertex");
        self.index.insert(person.clone(), self.vertices.len());
        self.vertices.push(person);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Add a friendship between two existing vertices.
    ///
    /// `p1` is recorded as the tail and `p2` as the head, but the edge is
    /// undirected: once `(a, b)` exists, both `(a, b)` and `(b, a)` are
    /// rejected as `DuplicateEdge`.
    pub fn add_edge<'a>(
        &mut self,
        p1: impl Into<Option<&'a Person>>,
        p2: impl Into<Option<&'a Person>>,
    ) -> Result<(), GraphError> {
        let (p1, p2) = (p1.into(), p2.into());
        let (p1, p2) = (require(p1)?, require(p2)?);
        let tail = self.index_of(p1)?;
        let head = self.index_of(p2)?;

        if tail == head {
            return Err(GraphError::self_loop(p1.name()));
        }

        let edge = Edge::new(p1.clone(), p2.clone());
        if self.edge_set.contains(&edge) {
            return Err(GraphError::duplicate_edge(p1.name(), p2.name()));
        }

        tracing::debug!(tail = %p1, head = %p2, "add_edge");
        self.edge_set.insert(edge.clone());
        self.edges.push(edge);
        self.adjacency[tail].push(head);
        self.adjacency[head].push(tail);
        Ok(())
    }

    /// Shortest hop count between two vertices.
    ///
    /// Returns `Reachable(0)` when `v1 == v2` without traversing, and
    /// `Unreachable` when no path exists.
    pub fn get_distance<'a>(
        &self,
        v1: impl Into<Option<&'a Person>>,
        v2: impl Into<Option<&'a Person>>,
    ) -> Result<Distance, GraphError> {
        let (v1, v2) = (v1.into(), v2.into());
        let (v1, v2) = (require(v1)?, require(v2)?);
        let source = self.index_of(v1)?;
        let target = self.index_of(v2)?;

        if source == target {
            return Ok(Distance::Reachable(0));
        }

        Ok(self.distance_between(source, target))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(from = %self.vertices[source], to = %self.vertices[target]))]
    fn distance_between(&self, source: usize, target: usize) -> Distance {
        let distances = bfs_distances(self, source);
        let distance = distances
            .get(target)
            .copied()
            .unwrap_or(Distance::Unreachable);
        tracing::debug!(distance = %distance, "distance");
        distance
    }

    /// Distance from `source` to every vertex, in vertex insertion order
    pub fn distances_from<'a>(
        &self,
        source: impl Into<Option<&'a Person>>,
    ) -> Result<Vec<(&Person, Distance)>, GraphError> {
        let source = self.index_of(require(source.into())?)?;
        Ok(self.distance_table(source))
    }

    #[tracing::instrument(level = "debug", skip(self), fields(from = %self.vertices[source]))]
    fn distance_table(&self, source: usize) -> Vec<(&Person, Distance)> {
        let distances = bfs_distances(self, source);
        tracing::debug!(
            reachable = distances.iter().filter(|d| d.is_reachable()).count(),
            "distance_table"
        );
        self.vertices.iter().zip(distances).collect()
    }

    /// People directly linked to `person`, in edge insertion order
    pub fn neighbors<'a>(
        &self,
        person: impl Into<Option<&'a Person>>,
    ) -> Result<Vec<&Person>, GraphError> {
        let index = self.index_of(require(person.into())?)?;
        Ok(self.adjacency[index]
            .iter()
            .map(|&i| &self.vertices[i])
            .collect())
    }

    /// Look up a vertex by name
    pub fn person(&self, name: &str) -> Option<&Person> {
        self.index.get(name).map(|&i| &self.vertices[i])
    }

    pub fn contains_vertex(&self, person: &Person) -> bool {
        self.index.contains_key(person)
    }

    /// True if `a` and `b` are linked, regardless of insertion order
    pub fn contains_edge(&self, a: &Person, b: &Person) -> bool {
        self.edge_set.contains(&Edge::new(a.clone(), b.clone()))
    }

    pub fn vertices(&self) -> &[Person] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    fn index_of(&self, person: &Person) -> Result<usize, GraphError> {
        self.index
            .get(person)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(person.name()))
    }
}

impl GraphProvider for FriendshipGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn neighbor_indices(&self, index: usize) -> &[usize] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    fn vertex_name(&self, index: usize) -> &str {
        self.vertices.get(index).map(Person::name).unwrap_or_default()
    }
}
