//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. A random neighbor is accepted with the Metropolis
//! probability for the configured [`Objective`](crate::local::Objective);
//! worsening moves become less likely as the temperature falls under
//! the chosen [`CoolingSchedule`].
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"
//! - Geman & Geman (1984), logarithmic cooling schedule

mod config;
mod cooling;
mod runner;

pub use config::SaConfig;
pub use cooling::CoolingSchedule;
pub use runner::{SaResult, SaRunner, SimulatedAnnealing};
