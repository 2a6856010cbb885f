//! Plasmid Core Library
//!
//! Bibliothèque principale pour la conception d'un plasmide universel:
//! détection de l'ORI par GC skew, extraction heuristique de gènes (ORF),
//! construction du site de clonage multiple et assemblage final.

pub mod assembler;
pub mod config;
pub mod design;
pub mod error;
pub mod fasta;
pub mod logging;
pub mod markers;
pub mod mcs;
pub mod orf;
pub mod ori;
pub mod sequence;
pub mod sites;

// Réexportations principales
pub use assembler::{assemble, Assembler, AssemblyReport, Plasmid, SegmentLengths};
pub use config::{DesignerConfig, OrfScan, AMPICILLIN, BLUE_WHITE_SELECTION};
pub use design::{parse_design, read_design, DesignEntry};
pub use error::{PlasmidError, Result};
pub use fasta::{format_record, parse_genome, read_genome, write_record};
pub use logging::init_logging;
pub use markers::{clean_name, parse_markers, MarkerEntry, MarkerParser, MarkerTable};
pub use mcs::build_mcs;
pub use orf::{extract_gene, find_orfs, GeneSelection, Orf};
pub use ori::{find_ori, find_ori_window, skew_profile, OriWindow};
pub use sequence::SequenceStats;
pub use sites::{contains_site, find_sites, strip_sites};
// La macro log_operation est automatiquement exportée à la racine du crate
