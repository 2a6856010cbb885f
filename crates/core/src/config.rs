//! Paramètres du concepteur de plasmides

use crate::error::{PlasmidError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Nom de caractéristique réservé au gène de résistance à l'ampicilline
pub const AMPICILLIN: &str = "Ampicillin";
/// Nom de caractéristique réservé au fragment lacZα (sélection bleu/blanc)
pub const BLUE_WHITE_SELECTION: &str = "Blue_White_Selection";

/// Taille de fenêtre par défaut pour le GC skew
pub const DEFAULT_ORI_WINDOW: usize = 500;
/// Longueur (exclusive) sous laquelle un ORF est candidat lacZα
pub const DEFAULT_LACZ_MAX_LEN: usize = 1500;
/// Largeur des lignes FASTA en sortie
pub const DEFAULT_WRAP_WIDTH: usize = 70;
/// Site EcoRI, interdit dans le plasmide final
pub const DEFAULT_FORBIDDEN_SITE: &str = "GAATTC";
/// Clé normalisée (majuscules) de l'enzyme exclue du MCS
pub const DEFAULT_EXCLUDED_ENZYME: &str = "ECORI";
/// Titre de l'enregistrement FASTA produit
pub const DEFAULT_RECORD_NAME: &str = "Universal_Plasmid";

/// Stratégie de recherche des ORF
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrfScan {
    /// Un ORF minimal pour chaque ATG du génome
    #[default]
    EveryStart,
    /// La recherche reprend après la fin de l'ORF précédent
    NonOverlapping,
}

/// Configuration complète du pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    pub ori_window: usize,
    pub lacz_max_len: usize,
    pub wrap_width: usize,
    pub forbidden_site: String,
    pub excluded_enzyme: String,
    pub record_name: String,
    pub orf_scan: OrfScan,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            ori_window: DEFAULT_ORI_WINDOW,
            lacz_max_len: DEFAULT_LACZ_MAX_LEN,
            wrap_width: DEFAULT_WRAP_WIDTH,
            forbidden_site: DEFAULT_FORBIDDEN_SITE.to_string(),
            excluded_enzyme: DEFAULT_EXCLUDED_ENZYME.to_string(),
            record_name: DEFAULT_RECORD_NAME.to_string(),
            orf_scan: OrfScan::default(),
        }
    }
}

impl DesignerConfig {
    /// Charge la configuration depuis un fichier JSON
    ///
    /// Les champs absents prennent leur valeur par défaut.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| PlasmidError::file_access(path, e))?;
        let config: DesignerConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Vérifie la cohérence des paramètres
    pub fn validate(&self) -> Result<()> {
        if self.ori_window == 0 {
            return Err(PlasmidError::InvalidConfig(
                "ori_window doit être > 0".to_string(),
            ));
        }
        if self.wrap_width == 0 {
            return Err(PlasmidError::InvalidConfig(
                "wrap_width doit être > 0".to_string(),
            ));
        }
        if self.forbidden_site.is_empty() {
            return Err(PlasmidError::InvalidConfig(
                "forbidden_site ne peut pas être vide".to_string(),
            ));
        }
        if let Some(c) = self
            .forbidden_site
            .chars()
            .find(|c| !matches!(c, 'A' | 'C' | 'G' | 'T'))
        {
            return Err(PlasmidError::InvalidConfig(format!(
                "forbidden_site contient une base invalide: {c}"
            )));
        }
        Ok(())
    }
}
