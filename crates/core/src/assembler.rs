//! Assemblage du plasmide universel
//!
//! Ordre fixe: ORI ⧺ gène Ampicilline ⧺ lacZα ⧺ MCS, puis suppression
//! globale du site interdit. Cette suppression s'applique aussi aux gènes
//! extraits et peut décaler leur cadre de lecture: c'est une limite connue
//! de l'heuristique, pas une garantie biologique.

use crate::config::{DesignerConfig, AMPICILLIN, BLUE_WHITE_SELECTION};
use crate::design::{read_design, DesignEntry};
use crate::error::{PlasmidError, Result};
use crate::fasta::{format_record, read_genome, write_record};
use crate::markers::MarkerTable;
use crate::mcs::build_mcs;
use crate::orf::extract_gene;
use crate::ori::find_ori;
use crate::sequence::SequenceStats;
use crate::sites::{contains_site, strip_sites};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Plasmide assemblé avec ses segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plasmid {
    pub ori: String,
    pub amp_r: String,
    pub lac_z: String,
    pub mcs: String,
    /// Séquence finale, site interdit retiré
    pub sequence: String,
    /// Nombre d'occurrences du site interdit supprimées
    pub sites_removed: usize,
}

impl Plasmid {
    /// Longueur avant suppression des sites
    pub fn raw_len(&self) -> usize {
        self.ori.len() + self.amp_r.len() + self.lac_z.len() + self.mcs.len()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// Longueurs des segments avant suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentLengths {
    pub ori: usize,
    pub amp_r: usize,
    pub lac_z: usize,
    pub mcs: usize,
}

/// Rapport de construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyReport {
    pub record_name: String,
    pub success: bool,
    /// Vrai si le site interdit est absent de la séquence finale
    pub site_absent: bool,
    pub forbidden_site: String,
    pub length: usize,
    pub segments: SegmentLengths,
    pub sites_removed: usize,
    pub gc_ratio: f64,
    pub checksum: String,
    pub generated_at: DateTime<Utc>,
}

impl AssemblyReport {
    /// Sérialise le rapport en JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Écrit le rapport JSON dans un fichier
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|e| PlasmidError::file_access(path, e))
    }
}

/// Orchestrateur du pipeline
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    config: DesignerConfig,
}

impl Assembler {
    /// Crée un assembleur après validation de la configuration
    pub fn new(config: DesignerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DesignerConfig {
        &self.config
    }

    /// Gène pour une caractéristique réservée, vide si absente du design
    fn gene_if_requested(&self, genome: &str, design: &[DesignEntry], feature: &str) -> String {
        // Plusieurs lignes identiques donneraient le même résultat
        if design.iter().any(|entry| entry.feature == feature) {
            extract_gene(genome, feature, self.config.lacz_max_len, self.config.orf_scan)
        } else {
            String::new()
        }
    }

    /// Assemble le plasmide en mémoire
    pub fn assemble(&self, genome: &str, design: &[DesignEntry], markers: &MarkerTable) -> Plasmid {
        let ori = crate::log_operation!("ori", { find_ori(genome, self.config.ori_window) });
        let mcs = crate::log_operation!("mcs", {
            build_mcs(design, markers, &self.config.excluded_enzyme)
        });
        let (amp_r, lac_z) = crate::log_operation!("genes", {
            (
                self.gene_if_requested(genome, design, AMPICILLIN),
                self.gene_if_requested(genome, design, BLUE_WHITE_SELECTION),
            )
        });

        let raw = [ori.as_str(), amp_r.as_str(), lac_z.as_str(), mcs.as_str()].concat();
        let (sequence, sites_removed) = strip_sites(&raw, &self.config.forbidden_site);

        info!(
            "Plasmide: ori={} ampR={} lacZ={} mcs={} -> {} bases ({} sites {} retirés)",
            ori.len(),
            amp_r.len(),
            lac_z.len(),
            mcs.len(),
            sequence.len(),
            sites_removed,
            self.config.forbidden_site
        );

        Plasmid {
            ori,
            amp_r,
            lac_z,
            mcs,
            sequence,
            sites_removed,
        }
    }

    /// Rapport de construction pour un plasmide assemblé
    pub fn report(&self, plasmid: &Plasmid) -> AssemblyReport {
        let stats = SequenceStats::compute(&plasmid.sequence);
        AssemblyReport {
            record_name: self.config.record_name.clone(),
            success: true,
            site_absent: !contains_site(&plasmid.sequence, &self.config.forbidden_site),
            forbidden_site: self.config.forbidden_site.clone(),
            length: stats.length,
            segments: SegmentLengths {
                ori: plasmid.ori.len(),
                amp_r: plasmid.amp_r.len(),
                lac_z: plasmid.lac_z.len(),
                mcs: plasmid.mcs.len(),
            },
            sites_removed: plasmid.sites_removed,
            gc_ratio: stats.gc_ratio,
            checksum: stats.checksum,
            generated_at: Utc::now(),
        }
    }

    /// Enregistrement FASTA du plasmide
    pub fn to_fasta(&self, plasmid: &Plasmid) -> String {
        format_record(&self.config.record_name, &plasmid.sequence, self.config.wrap_width)
    }

    /// Pipeline complet fichier -> fichier
    ///
    /// Toutes les entrées sont lues et le plasmide assemblé avant la
    /// création du fichier de sortie: une erreur de lecture n'écrit rien.
    pub fn construct(
        &self,
        markers_path: impl AsRef<Path>,
        genome_path: impl AsRef<Path>,
        design_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<AssemblyReport> {
        let markers = MarkerTable::from_path(markers_path)?;
        let genome = read_genome(genome_path)?;
        let design = read_design(design_path)?;
        info!(
            "Entrées: {} enzymes, génome de {} bases, {} lignes de design",
            markers.len(),
            genome.len(),
            design.len()
        );

        let plasmid = self.assemble(&genome, &design, &markers);
        write_record(
            output_path,
            &self.config.record_name,
            &plasmid.sequence,
            self.config.wrap_width,
        )?;

        Ok(self.report(&plasmid))
    }
}

/// Assemble avec la configuration par défaut
pub fn assemble(genome: &str, design: &[DesignEntry], markers: &MarkerTable) -> String {
    Assembler::default().assemble(genome, design, markers).sequence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markers::MarkerEntry;

    fn markers() -> MarkerTable {
        [("EcoRI", "GAATTC"), ("BamHI", "GGATCC"), ("Ampicillin", "GGTACC")]
            .into_iter()
            .map(|(name, seq)| MarkerEntry {
                name: name.to_string(),
                sequence: seq.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_segments_in_fixed_order() {
        let genome = "ATGAAACCCTAA";
        let design = vec![
            DesignEntry::new("m", "BamHI"),
            DesignEntry::new("g", "Ampicillin"),
        ];
        let plasmid = Assembler::default().assemble(genome, &design, &markers());
        assert_eq!(plasmid.ori, genome);
        assert_eq!(plasmid.amp_r, genome);
        assert_eq!(plasmid.lac_z, "");
        assert_eq!(plasmid.mcs, "GGATCCGGTACC");
        assert_eq!(plasmid.sequence, format!("{genome}{genome}GGATCCGGTACC"));
    }

    #[test]
    fn test_genes_absent_from_design_stay_empty() {
        let genome = "ATGAAACCCTAA";
        let design = vec![DesignEntry::new("m", "BamHI")];
        let plasmid = Assembler::default().assemble(genome, &design, &markers());
        assert!(plasmid.amp_r.is_empty());
        assert!(plasmid.lac_z.is_empty());
    }

    #[test]
    fn test_forbidden_site_removed_everywhere() {
        // Site présent dans le génome lui-même, donc dans l'ORI
        let genome = "CCGAATTCATGAAAGAATTCTAA";
        let design = vec![DesignEntry::new("x", "EcoRI"), DesignEntry::new("g", "Ampicillin")];
        let plasmid = Assembler::default().assemble(genome, &design, &markers());
        assert!(!plasmid.sequence.contains("GAATTC"));
        assert_eq!(plasmid.len(), plasmid.raw_len() - 6 * plasmid.sites_removed);
        assert!(plasmid.sites_removed >= 2);
    }

    #[test]
    fn test_report_flags() {
        let assembler = Assembler::default();
        let plasmid = assembler.assemble("GAATTCGG", &[], &markers());
        let report = assembler.report(&plasmid);
        assert!(report.success);
        assert!(report.site_absent);
        assert_eq!(report.length, 2);
        assert_eq!(report.sites_removed, 1);
        assert_eq!(report.record_name, "Universal_Plasmid");
        assert!(report.to_json().unwrap().contains("\"sites_removed\": 1"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = DesignerConfig {
            wrap_width: 0,
            ..Default::default()
        };
        assert!(Assembler::new(config).is_err());
    }
}
