//! Sous-commandes de la CLI

pub mod build;
pub mod genes;
pub mod markers;
pub mod mcs;
pub mod ori;
