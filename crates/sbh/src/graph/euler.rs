//! Start selection and Hierholzer's algorithm (iterative, stack based).

use std::collections::VecDeque;
use std::fmt;

use super::types::{DeBruijnGraph, DegreeTable, Path, VertexId};

/// Errors surfaced by the traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    /// Several vertices but no edges to start from.
    NoStartVertex { vertices: usize },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::NoStartVertex { vertices } => write!(
                f,
                "no start vertex: none of the {vertices} vertices has an outgoing edge"
            ),
        }
    }
}

impl std::error::Error for WalkError {}

/// Pick the traversal start in first-seen vertex order.
///
/// The first vertex with `out - in == 1` wins (open path). Failing that, the
/// first vertex with any outgoing edge (circuit). `None` if no vertex has an
/// outgoing edge.
pub fn select_start(graph: &DeBruijnGraph, degrees: &DegreeTable) -> Option<VertexId> {
    graph
        .vertices()
        .find(|&v| degrees.get(v).balance() == 1)
        .or_else(|| graph.vertices().find(|&v| degrees.get(v).out_deg > 0))
}

/// Walk every edge reachable from the chosen start exactly once.
///
/// Empty graph gives an empty path; a lone edgeless vertex gives a one-vertex
/// path. The walk is returned as found: on a disconnected or non-Eulerian
/// graph it covers fewer edges than `graph.edge_count()`, and callers compare
/// `Path::edge_count` against it.
pub fn eulerian_walk(graph: &DeBruijnGraph, degrees: &DegreeTable) -> Result<Path, WalkError> {
    if graph.is_empty() {
        return Ok(Path::default());
    }
    match select_start(graph, degrees) {
        Some(start) => Ok(Hierholzer::new(graph).run(start)),
        None if graph.vertex_count() == 1 => Ok(Path {
            vertices: vec![VertexId(0)],
        }),
        None => Err(WalkError::NoStartVertex {
            vertices: graph.vertex_count(),
        }),
    }
}

/// Traversal state: a private copy of the adjacency lists that is consumed
/// front to back, so parallel edges are taken in input order.
struct Hierholzer {
    remaining: Vec<VecDeque<VertexId>>,
    stack: Vec<VertexId>,
    out: Vec<VertexId>,
}

impl Hierholzer {
    fn new(graph: &DeBruijnGraph) -> Self {
        Self {
            remaining: graph
                .adjacency()
                .iter()
                .map(|outs| outs.iter().copied().collect())
                .collect(),
            stack: Vec::new(),
            out: Vec::with_capacity(graph.edge_count() + 1),
        }
    }

    fn run(mut self, start: VertexId) -> Path {
        self.stack.push(start);
        while let Some(&top) = self.stack.last() {
            match self.remaining[top.0].pop_front() {
                Some(next) => self.stack.push(next),
                None => {
                    self.stack.pop();
                    self.out.push(top);
                }
            }
        }
        // finished vertices come out last-first
        self.out.reverse();
        Path {
            vertices: self.out,
        }
    }
}
