//! Sequencing by Hybridization: rebuild a sequence from its l-mer spectrum.
//!
//! Pipeline
//! - `graph::build_graph`: de Bruijn multigraph, one edge per l-mer
//!   (prefix (l-1)-mer → suffix (l-1)-mer).
//! - `graph::degree_table`: in/out degrees and vertex classification.
//! - `graph::eulerian_walk`: Hierholzer's algorithm over a scratch copy of the
//!   adjacency lists.
//! - `reconstruct`: spell the vertex walk back into a string.
//! - `solver`: validation, orchestration and the coverage check.
//!
//! API Policy
//! - Everything runs per call; no state survives between reconstructions.
//! - Vertex order is first-seen order over the input, so results are
//!   reproducible run to run.

pub mod graph;
pub mod reconstruct;
pub mod solver;
pub mod spectrum;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use graph::{
    build_graph, degree_table, eulerian_walk, select_start, DeBruijnGraph, Degree, DegreeTable,
    Path, VertexId, VertexKind,
};
pub use reconstruct::reconstruct_sequence;
pub use solver::{solve, solve_with_defaults, Solution, SolveCfg, SolveError, WalkKind};
pub use spectrum::{is_nucleotide, random_sequence, spectrum};
