//! Minigraph core library.
//!
//! Samples simple undirected random graphs and reads/writes the plain-text
//! edge-list format consumed by the community-detection exercises downstream.

mod builder;
mod edge;
mod edgelist;
mod error;
mod generator;

pub use crate::{
    builder::GeneratorBuilder,
    edge::Edge,
    edgelist::{EdgeListError, EdgeListErrorCode, read_edge_list, write_edge_list},
    error::{GeneratorError, GeneratorErrorCode, Result},
    generator::{GenerationSummary, Generator},
};
