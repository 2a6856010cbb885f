//! Types d'erreurs pour la bibliothèque de conception de plasmides

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlasmidError {
    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Impossible d'accéder à {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration invalide: {0}")]
    InvalidConfig(String),

    #[error("Motif invalide: {0}")]
    Pattern(#[from] regex::Error),
}

impl PlasmidError {
    /// Associe une erreur IO au fichier concerné
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PlasmidError::FileAccess {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlasmidError>;
