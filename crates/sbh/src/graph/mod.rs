//! De Bruijn multigraph over (l-1)-mers and Eulerian traversal.
//!
//! Purpose
//! - Turn an ordered l-mer list into a directed multigraph where each l-mer is
//!   one edge from its prefix vertex to its suffix vertex.
//! - Provide degree bookkeeping and Hierholzer's algorithm on top of it.
//!
//! Layout
//! - `types.rs` (vertex ids, graph, degrees, paths), `build.rs` (construction),
//!   `degrees.rs` (degree table and balance profile), `euler.rs` (start
//!   selection and traversal).

mod build;
mod degrees;
mod euler;
mod types;

pub use build::{build_graph, GraphError};
pub use degrees::{degree_table, BalanceProfile};
pub use euler::{eulerian_walk, select_start, WalkError};
pub use types::{DeBruijnGraph, Degree, DegreeTable, Path, VertexId, VertexKind};
