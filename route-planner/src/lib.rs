pub mod cost;
pub mod error;
pub mod gen;
pub mod graph;
pub mod held_karp;
pub mod matrix;
pub mod record;
mod route_map;

pub use cost::Cost;
pub use error::{ParseError, RouteError};
pub use held_karp::{solve, solve_both, Objective};
pub use route_map::RouteMap;
