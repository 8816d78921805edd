//! Graph construction from an ordered l-mer list.

use std::fmt;

use super::types::DeBruijnGraph;

/// Errors surfaced while building the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An l-mer shorter than 2 has no (l-1)-mer prefix/suffix to speak of.
    LmerTooShort { index: usize, len: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::LmerTooShort { index, len } => write!(
                f,
                "l-mer #{index} has length {len}; need at least 2 to form prefix/suffix vertices"
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Build the de Bruijn multigraph: each l-mer adds one edge from its first
/// l-1 characters to its last l-1 characters.
///
/// Pre: every l-mer has at least 2 characters. Alphabet is not checked.
/// Post: vertex ids follow first-seen order (prefix before suffix, l-mer by
/// l-mer); each source's adjacency list keeps input order.
pub fn build_graph<S: AsRef<str>>(lmers: &[S]) -> Result<DeBruijnGraph, GraphError> {
    let mut graph = DeBruijnGraph::new();
    for (index, lmer) in lmers.iter().enumerate() {
        let (prefix, suffix) = split_affixes(lmer.as_ref()).ok_or(GraphError::LmerTooShort {
            index,
            len: lmer.as_ref().chars().count(),
        })?;
        let from = graph.add_vertex(prefix);
        let to = graph.add_vertex(suffix);
        graph.add_edge(from, to);
    }
    Ok(graph)
}

/// `(prefix, suffix)` of length l-1 each, cut on char boundaries.
fn split_affixes(lmer: &str) -> Option<(&str, &str)> {
    let mut chars = lmer.char_indices();
    let (_, first) = chars.next()?;
    let (last_start, _) = chars.next_back()?;
    Some((&lmer[..last_start], &lmer[first.len_utf8()..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affixes_cut_one_char_each_side() {
        assert_eq!(split_affixes("ATG"), Some(("AT", "TG")));
        assert_eq!(split_affixes("AC"), Some(("A", "C")));
        assert_eq!(split_affixes("A"), None);
        assert_eq!(split_affixes(""), None);
    }

    #[test]
    fn short_lmer_is_rejected_with_its_index() {
        let err = build_graph(&["ATG", "T"]).unwrap_err();
        assert_eq!(err, GraphError::LmerTooShort { index: 1, len: 1 });
    }
}
