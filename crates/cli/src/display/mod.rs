//! Affichage terminal

pub mod report;
pub mod tables;
