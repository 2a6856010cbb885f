//! Fichier de design: paires `label,caractéristique`

use crate::error::{PlasmidError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Une ligne du design
///
/// `feature` désigne soit une caractéristique réservée (gène à extraire),
/// soit un nom d'enzyme pour le site de clonage multiple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignEntry {
    pub label: String,
    pub feature: String,
}

impl DesignEntry {
    pub fn new(label: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            feature: feature.into(),
        }
    }
}

/// Analyse un design; les lignes vides ou sans virgule sont ignorées
pub fn parse_design(text: &str) -> Vec<DesignEntry> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(lineno, line)| match line.trim().split_once(',') {
            Some((label, feature)) => Some(DesignEntry::new(label.trim(), feature.trim())),
            None => {
                debug!("Ligne de design {} mal formée: {}", lineno + 1, line.trim());
                None
            }
        })
        .collect()
}

/// Lit un fichier de design
pub fn read_design(path: impl AsRef<Path>) -> Result<Vec<DesignEntry>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| PlasmidError::file_access(path, e))?;
    Ok(parse_design(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_design() {
        let text = "mcs1, Ampicillin\n\nbroken line\nmcs2,Blue_White_Selection\nsite,Eco RI, extra\n";
        let design = parse_design(text);
        assert_eq!(
            design,
            vec![
                DesignEntry::new("mcs1", "Ampicillin"),
                DesignEntry::new("mcs2", "Blue_White_Selection"),
                DesignEntry::new("site", "Eco RI, extra"),
            ]
        );
    }

    #[test]
    fn test_empty_design() {
        assert!(parse_design("\n  \n").is_empty());
    }
}
