//! Simulation systems, leaf to root: bodies, forces, integration, collisions.

pub mod body;
pub mod collision;
pub mod forces;
pub mod integrator;
