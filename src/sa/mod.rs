//! Annealed search (simulated annealing).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima early and converge late.
//!
//! The candidate route is perturbed by detouring through a random open
//! cell near a random interior point, with optimal-search bridges keeping
//! the route connected. Best-effort: the search may return an empty route
//! when its best candidate never terminates at the goal.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
