//! Import graph construction.
//!
//! The graph is built in three pure stages:
//! - [`people::graph_people`]: one node per person, keyed by the
//!   institution-qualified identifier `root.<institution>.<name>`
//! - [`papers::graph_papers`]: co-authorship edges between bare name
//!   identifiers
//! - [`merge::merge`]: resolves bare names to qualified identifiers and copies
//!   the edges onto the people nodes
//!
//! [`create_graph`] runs all three.

pub mod merge;
pub mod papers;
pub mod people;

use crate::error::Result;
use crate::records::{AuthorRecord, PersonRecord};
use crate::slug::{CaseMode, Normalizer};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

pub use merge::ConflictPolicy;

/// A person in the output graph.
///
/// Serializes as `{"name": ..., "imports": [...]}`, the shape the edge
/// bundling front-end reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Globally unique identifier.
    pub name: String,
    /// Identifiers this node references, in discovery order. Repeats once
    /// per shared paper.
    pub imports: Vec<String>,
}

impl Node {
    /// Creates a node with no imports.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
        }
    }
}

/// A set of nodes keyed by name.
///
/// Iteration is always in name order, which makes serialized output
/// reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: BTreeMap<String, Node>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of import entries across all nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.imports.len()).sum()
    }

    /// Looks up a node by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Returns `true` if a node with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Inserts a node, replacing any node with the same name.
    pub fn insert(&mut self, node: Node) {
        self.nodes.insert(node.name.clone(), node);
    }

    /// Returns the named node, creating an empty one first if needed.
    pub fn get_or_insert(&mut self, name: &str) -> &mut Node {
        self.nodes
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name))
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.get_mut(name)
    }

    /// Node names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Nodes in name order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Consumes the graph, returning its nodes in name order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes.into_values().collect()
    }

    /// Every `(node, import)` pair whose import does not name a node.
    #[must_use]
    pub fn dangling_imports(&self) -> Vec<(&str, &str)> {
        self.nodes()
            .flat_map(|node| {
                node.imports
                    .iter()
                    .filter(|import| !self.contains(import))
                    .map(move |import| (node.name.as_str(), import.as_str()))
            })
            .collect()
    }

    /// Removes repeated imports, keeping the first occurrence of each.
    pub fn dedupe_imports(&mut self) {
        for node in self.nodes.values_mut() {
            let mut seen = HashSet::new();
            node.imports.retain(|import| seen.insert(import.clone()));
        }
    }

    /// Distinct institutions (second identifier component) among the nodes.
    #[must_use]
    pub fn institutions(&self) -> BTreeSet<&str> {
        self.names()
            .filter_map(|name| name.split('.').nth(1))
            .collect()
    }
}

impl FromIterator<Node> for Graph {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}

/// Settings that change how the graph is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    /// Case handling for every identifier.
    pub case: CaseMode,
    /// What to do when two people share a bare identifier.
    pub on_conflict: ConflictPolicy,
    /// Collapse repeated imports produced by multiple shared papers.
    pub dedupe_imports: bool,
}

/// Builds the complete import graph from both record sets.
///
/// # Errors
///
/// Returns [`crate::Error::UnresolvedName`] when a paper author has no
/// institution record, and [`crate::Error::NameConflict`] when the conflict
/// policy rejects a shared bare identifier.
pub fn create_graph(
    people: &[PersonRecord],
    authors: &[AuthorRecord],
    options: &GraphOptions,
) -> Result<Graph> {
    let normalizer = Normalizer::new(options.case);

    let papers_graph = papers::graph_papers(authors, &normalizer);
    let people_graph = people::graph_people(people, &normalizer);
    tracing::debug!(
        people = people_graph.len(),
        authors = papers_graph.len(),
        "Extracted partial graphs"
    );

    let mut graph = merge::merge(people_graph, &papers_graph, options.on_conflict)?;
    if options.dedupe_imports {
        graph.dedupe_imports();
    }

    Ok(graph)
}
