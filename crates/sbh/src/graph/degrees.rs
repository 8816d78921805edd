//! Degree bookkeeping: per-vertex in/out degrees and the overall balance profile.

use super::types::{DeBruijnGraph, Degree, DegreeTable, VertexKind};

/// In/out degree of every vertex, destination-only vertices included.
pub fn degree_table(graph: &DeBruijnGraph) -> DegreeTable {
    let mut degrees = vec![Degree::default(); graph.vertex_count()];
    for (from, outs) in graph.adjacency().iter().enumerate() {
        degrees[from].out_deg = outs.len();
        for to in outs {
            degrees[to.0].in_deg += 1;
        }
    }
    DegreeTable { degrees }
}

/// Counts of vertex kinds across the graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceProfile {
    pub starts: usize,
    pub ends: usize,
    pub unbalanced: usize,
}

impl BalanceProfile {
    /// Degrees admit a single walk over every edge (connectivity aside).
    pub fn is_eulerian_path(&self) -> bool {
        self.unbalanced == 0 && self.starts == self.ends && self.starts <= 1
    }

    /// Every vertex is balanced.
    pub fn is_circuit(&self) -> bool {
        self.unbalanced == 0 && self.starts == 0 && self.ends == 0
    }
}

impl DegreeTable {
    pub fn profile(&self) -> BalanceProfile {
        let mut p = BalanceProfile::default();
        for (v, _) in self.iter() {
            match self.classify(v) {
                VertexKind::Balanced => {}
                VertexKind::Start => p.starts += 1,
                VertexKind::End => p.ends += 1,
                VertexKind::Unbalanced => p.unbalanced += 1,
            }
        }
        p
    }
}
