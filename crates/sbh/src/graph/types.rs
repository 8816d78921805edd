//! Data types for the de Bruijn graph and its traversal.
//!
//! Kept small and explicit so `build`, `degrees` and `euler` stay easy to read.

use std::collections::HashMap;

/// Dense vertex identifier, assigned in first-seen order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Directed multigraph over (l-1)-mers.
///
/// Each vertex label is stored once; adjacency lists hold destination ids in
/// edge insertion order, duplicates included.
#[derive(Clone, Debug, Default)]
pub struct DeBruijnGraph {
    labels: Vec<String>,
    index: HashMap<String, VertexId>,
    adj: Vec<Vec<VertexId>>,
    edge_count: usize,
}

impl DeBruijnGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `label`, inserting it as a new vertex if unseen.
    pub fn add_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = VertexId(self.labels.len());
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.adj.push(Vec::new());
        id
    }

    /// Append one edge `from → to`; parallel edges are kept.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) {
        self.adj[from.0].push(to);
        self.edge_count += 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, v: VertexId) -> &str {
        &self.labels[v.0]
    }

    pub fn vertex(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Outgoing destinations of `v` in insertion order.
    pub fn successors(&self, v: VertexId) -> &[VertexId] {
        &self.adj[v.0]
    }

    /// All vertices in first-seen order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.labels.len()).map(VertexId)
    }

    /// All edges as `(from, to)`, grouped by source in first-seen order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, outs)| outs.iter().map(move |&to| (VertexId(from), to)))
    }

    pub(crate) fn adjacency(&self) -> &[Vec<VertexId>] {
        &self.adj
    }
}

/// In/out degree of a single vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Degree {
    pub in_deg: usize,
    pub out_deg: usize,
}

impl Degree {
    /// `out - in`: +1 marks a path start, -1 a path end.
    #[inline]
    pub fn balance(&self) -> isize {
        self.out_deg as isize - self.in_deg as isize
    }
}

/// Vertex role with respect to an Eulerian walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    Balanced,
    /// out - in == 1
    Start,
    /// in - out == 1
    End,
    /// |out - in| >= 2; no single walk can cover the graph.
    Unbalanced,
}

/// Degrees for every vertex, indexed by `VertexId`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DegreeTable {
    pub(crate) degrees: Vec<Degree>,
}

impl DegreeTable {
    pub fn get(&self, v: VertexId) -> Degree {
        self.degrees[v.0]
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.degrees.is_empty()
    }

    pub fn classify(&self, v: VertexId) -> VertexKind {
        match self.get(v).balance() {
            0 => VertexKind::Balanced,
            1 => VertexKind::Start,
            -1 => VertexKind::End,
            _ => VertexKind::Unbalanced,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Degree)> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .map(|(i, &d)| (VertexId(i), d))
    }
}

/// Vertex walk produced by the traversal; consecutive vertices are joined by
/// one consumed edge.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    pub vertices: Vec<VertexId>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges walked.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Start and end coincide (and at least one edge was walked).
    pub fn is_closed(&self) -> bool {
        self.edge_count() > 0 && self.vertices.first() == self.vertices.last()
    }

    pub fn labels<'g>(&'g self, graph: &'g DeBruijnGraph) -> impl Iterator<Item = &'g str> + 'g {
        self.vertices.iter().map(move |&v| graph.label(v))
    }

    /// Spell the walk as a sequence (see `reconstruct::reconstruct_sequence`).
    pub fn spell(&self, graph: &DeBruijnGraph) -> String {
        crate::reconstruct::reconstruct_sequence(self.labels(graph))
    }
}
