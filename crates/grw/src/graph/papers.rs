//! Papers extractor: co-authorship edges between bare name identifiers.

use super::Graph;
use crate::records::AuthorRecord;
use crate::slug::Normalizer;

/// Builds the co-authorship graph, keyed by bare name identifiers.
///
/// Rows are stably sorted by raw paper text and grouped. Within a group every
/// pair of rows is visited once, in row order, and each member of the pair
/// gains an import of the other. A group of N authors therefore adds
/// 2 × C(N, 2) imports. Repeated collaborations repeat the import.
///
/// A pair whose two rows normalize to the same identifier (a name listed
/// twice on one paper) is skipped rather than producing a self-import.
pub fn graph_papers(records: &[AuthorRecord], normalizer: &Normalizer) -> Graph {
    let mut sorted: Vec<&AuthorRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.paper.cmp(&b.paper));

    let mut graph = Graph::new();
    for group in sorted.chunk_by(|a, b| a.paper == b.paper) {
        let ids: Vec<String> = group
            .iter()
            .map(|record| normalizer.bare_id(&record.name))
            .collect();

        for (i, first) in ids.iter().enumerate() {
            for second in &ids[i + 1..] {
                if first == second {
                    continue;
                }
                graph.get_or_insert(first).imports.push(second.clone());
                graph.get_or_insert(second).imports.push(first.clone());
            }
        }
    }

    graph
}
