//! People extractor: one root node per person.

use super::{Graph, Node};
use crate::records::PersonRecord;
use crate::slug::Normalizer;

/// Builds the roster graph, keyed by `root.<institution>.<name>`.
///
/// Rows are stably sorted by raw institution text first, so rows sharing an
/// institution are visited together. Rows that normalize to the same
/// identifier collapse into one node.
pub fn graph_people(records: &[PersonRecord], normalizer: &Normalizer) -> Graph {
    let mut sorted: Vec<&PersonRecord> = records.iter().collect();
    sorted.sort_by(|a, b| a.institution.cmp(&b.institution));

    sorted
        .into_iter()
        .map(|record| Node::new(normalizer.root_id(&record.institution, &record.name)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_node_per_person() {
        let records = [
            PersonRecord::new("MIT", "Jane Doe"),
            PersonRecord::new("Stanford", "John Roe"),
        ];
        let graph = graph_people(&records, &Normalizer::default());

        let names: Vec<_> = graph.names().collect();
        assert_eq!(names, ["root.mit.jane_doe", "root.stanford.john_roe"]);
        assert!(graph.nodes().all(|node| node.imports.is_empty()));
    }

    #[test]
    fn duplicate_rows_collapse() {
        let records = [
            PersonRecord::new("MIT", "Jane Doe"),
            PersonRecord::new("M.I.T.", "jane-doe"),
            PersonRecord::new("MIT", "Jane  Doe"),
        ];
        let graph = graph_people(&records, &Normalizer::default());

        let names: Vec<_> = graph.names().collect();
        assert_eq!(names, ["root.m_i_t.jane_doe", "root.mit.jane_doe"]);
    }

    #[test]
    fn same_name_at_two_institutions_stays_distinct() {
        let records = [
            PersonRecord::new("MIT", "Ann"),
            PersonRecord::new("ETH", "Ann"),
        ];
        let graph = graph_people(&records, &Normalizer::default());
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(graph_people(&[], &Normalizer::default()).is_empty());
    }
}
