//! Conway's Game of Life on a finite torus, with community counting.
//!
//! A [`World`] owns a [`Grid`] whose edges wrap around, and advances it one
//! generation at a time under a Life-like [`Life`] rule (Conway's `B3/S23`
//! by default). Communities of living cells are counted with a weighted
//! [`UnionFind`] built afresh for every query.

mod cells;
mod communities;
mod config;
mod error;
mod grid;
mod load;
mod rules;
mod union_find;
mod world;

pub use cells::{toroidal_neighbors, wrap, Coord};
pub use communities::{community_sizes, count_communities};
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use load::parse_grid;
pub use rules::Life;
pub use union_find::UnionFind;
pub use world::World;
