//! Solver entry point: validate, build, traverse, check coverage, spell.
//!
//! This is the only place that turns component results into errors for the
//! caller; the graph components return raw walks and leave judgement here.

use std::fmt;

use tracing::debug;

use crate::graph::{build_graph, degree_table, eulerian_walk, GraphError, WalkError};
use crate::spectrum::is_nucleotide;

/// Solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct SolveCfg {
    /// Reject l-mers with symbols outside `A`, `C`, `G`, `T`.
    pub check_alphabet: bool,
}

impl Default for SolveCfg {
    fn default() -> Self {
        Self {
            check_alphabet: true,
        }
    }
}

/// Shape of the walk that produced the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkKind {
    /// Distinct start and end vertices.
    Path,
    /// Closed walk over a fully balanced graph.
    Circuit,
}

/// Reconstructed sequence plus traversal counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub sequence: String,
    pub lmer_len: usize,
    pub lmer_count: usize,
    /// Vertices on the walk (edges + 1).
    pub path_vertices: usize,
    pub covered_edges: usize,
    pub walk: WalkKind,
}

/// Everything that can stop a reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    EmptyInput,
    LmerTooShort {
        index: usize,
        len: usize,
    },
    UnequalLength {
        index: usize,
        expected: usize,
        found: usize,
    },
    InvalidSymbol {
        index: usize,
        symbol: char,
    },
    NoStartVertex,
    /// The walk missed edges: the graph is disconnected or has too many
    /// path ends.
    IncompleteCoverage {
        covered: usize,
        expected: usize,
    },
    /// Every edge was consumed but degrees admit no single walk, so the
    /// spliced vertex order is not a walk of the graph.
    NotEulerian {
        starts: usize,
        ends: usize,
        unbalanced: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::EmptyInput => write!(f, "no l-mers given"),
            SolveError::LmerTooShort { index, len } => {
                write!(f, "l-mer #{index} has length {len}; need l >= 2")
            }
            SolveError::UnequalLength {
                index,
                expected,
                found,
            } => write!(
                f,
                "l-mer #{index} has length {found}, expected {expected} like the first l-mer"
            ),
            SolveError::InvalidSymbol { index, symbol } => {
                write!(f, "l-mer #{index} contains non-nucleotide symbol {symbol:?}")
            }
            SolveError::NoStartVertex => write!(f, "graph has no vertex with an outgoing edge"),
            SolveError::IncompleteCoverage { covered, expected } => write!(
                f,
                "walk covers {covered} of {expected} edges; l-mers do not form a single Eulerian path"
            ),
            SolveError::NotEulerian {
                starts,
                ends,
                unbalanced,
            } => write!(
                f,
                "degree profile admits no Eulerian path ({starts} start, {ends} end, {unbalanced} unbalanced vertices)"
            ),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<GraphError> for SolveError {
    fn from(e: GraphError) -> Self {
        match e {
            GraphError::LmerTooShort { index, len } => SolveError::LmerTooShort { index, len },
        }
    }
}

impl From<WalkError> for SolveError {
    fn from(e: WalkError) -> Self {
        match e {
            WalkError::NoStartVertex { .. } => SolveError::NoStartVertex,
        }
    }
}

/// Reconstruct the sequence whose l-spectrum is `lmers`.
///
/// Pre: none; malformed input is rejected with a `SolveError`.
/// Post: on `Ok`, every l-mer was used exactly once and
/// `sequence.len() == (l - 1) + lmers.len()` (in characters).
pub fn solve<S: AsRef<str>>(lmers: &[S], cfg: SolveCfg) -> Result<Solution, SolveError> {
    let lmer_len = validate(lmers, cfg)?;
    let graph = build_graph(lmers)?;
    let degrees = degree_table(&graph);
    debug!(
        lmers = lmers.len(),
        lmer_len,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    let path = eulerian_walk(&graph, &degrees)?;
    if let Some(&start) = path.vertices.first() {
        debug!(start = graph.label(start), "walk start");
    }
    // Each l-mer is one edge.
    let covered = path.edge_count();
    if covered != lmers.len() {
        debug!(covered, expected = lmers.len(), "incomplete coverage");
        return Err(SolveError::IncompleteCoverage {
            covered,
            expected: lmers.len(),
        });
    }
    let profile = degrees.profile();
    if !profile.is_eulerian_path() {
        return Err(SolveError::NotEulerian {
            starts: profile.starts,
            ends: profile.ends,
            unbalanced: profile.unbalanced,
        });
    }
    let sequence = path.spell(&graph);
    debug!(len = sequence.len(), "sequence reconstructed");
    Ok(Solution {
        sequence,
        lmer_len,
        lmer_count: lmers.len(),
        path_vertices: path.len(),
        covered_edges: covered,
        walk: if profile.is_circuit() {
            WalkKind::Circuit
        } else {
            WalkKind::Path
        },
    })
}

/// Convenience: `solve` with `SolveCfg::default()`.
pub fn solve_with_defaults<S: AsRef<str>>(lmers: &[S]) -> Result<Solution, SolveError> {
    solve(lmers, SolveCfg::default())
}

/// Boundary checks; returns the common l-mer length.
fn validate<S: AsRef<str>>(lmers: &[S], cfg: SolveCfg) -> Result<usize, SolveError> {
    let first = lmers.first().ok_or(SolveError::EmptyInput)?;
    let expected = first.as_ref().chars().count();
    for (index, lmer) in lmers.iter().enumerate() {
        let lmer = lmer.as_ref();
        let found = lmer.chars().count();
        if found < 2 {
            return Err(SolveError::LmerTooShort { index, len: found });
        }
        if found != expected {
            return Err(SolveError::UnequalLength {
                index,
                expected,
                found,
            });
        }
        if cfg.check_alphabet {
            if let Some(symbol) = lmer.chars().find(|&c| !is_nucleotide(c)) {
                return Err(SolveError::InvalidSymbol { index, symbol });
            }
        }
    }
    Ok(expected)
}
