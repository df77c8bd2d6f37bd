//! Reconciles the roster graph with the co-authorship graph.

use super::Graph;
use crate::error::{Error, Result};
use crate::slug::bare_name;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// What to do when two roster entries share a bare name identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Keep the alphabetically first qualified identifier and log the rest.
    #[default]
    FirstWins,
    /// Abort the run.
    Reject,
}

/// Maps each bare name to the qualified identifier that owns it.
///
/// Qualified identifiers are visited in sorted order, so the outcome of a
/// conflict never depends on input row order.
///
/// # Errors
///
/// Returns [`Error::NameConflict`] under [`ConflictPolicy::Reject`] when a
/// bare name is claimed twice.
pub fn build_lookup(people: &Graph, policy: ConflictPolicy) -> Result<BTreeMap<String, String>> {
    let mut lookup = BTreeMap::new();

    for qualified in people.names() {
        match lookup.entry(bare_name(qualified).to_string()) {
            Entry::Vacant(entry) => {
                entry.insert(qualified.to_string());
            }
            Entry::Occupied(entry) => match policy {
                ConflictPolicy::FirstWins => {
                    tracing::warn!(
                        name = %entry.key(),
                        kept = %entry.get(),
                        ignored = %qualified,
                        "Bare name shared by several people; keeping the first"
                    );
                }
                ConflictPolicy::Reject => {
                    return Err(Error::NameConflict {
                        name: entry.key().clone(),
                        existing: entry.get().clone(),
                        conflicting: qualified.to_string(),
                    });
                }
            },
        }
    }

    Ok(lookup)
}

/// Copies co-authorship edges onto the roster nodes.
///
/// Every node of `papers` and every one of its imports is resolved from a
/// bare name to a qualified identifier. The resolved list replaces the
/// imports of the matching roster node. Roster nodes without papers keep an
/// empty list.
///
/// # Errors
///
/// Returns [`Error::UnresolvedName`] for the first bare name with no roster
/// entry, or [`Error::NameConflict`] from [`build_lookup`].
pub fn merge(mut people: Graph, papers: &Graph, policy: ConflictPolicy) -> Result<Graph> {
    let lookup = build_lookup(&people, policy)?;
    let resolve = |name: &str| {
        lookup.get(name).ok_or_else(|| Error::UnresolvedName {
            name: name.to_string(),
        })
    };

    for author in papers.nodes() {
        let qualified = resolve(author.name.as_str())?;
        let imports = author
            .imports
            .iter()
            .map(|import| resolve(import.as_str()).cloned())
            .collect::<Result<Vec<_>>>()?;

        if let Some(node) = people.get_mut(qualified) {
            node.imports = imports;
        }
    }

    tracing::debug!(
        nodes = people.len(),
        edges = people.edge_count(),
        "Merged co-authorship edges into roster"
    );

    Ok(people)
}
