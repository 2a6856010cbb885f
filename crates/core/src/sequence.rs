//! Outils sur les séquences nucléotidiques
//!
//! Les séquences sont manipulées comme des chaînes plates, indexées à
//! partir de zéro et non circulaires. Les caractères hors A/C/G/T ne sont
//! jamais rejetés: ils traversent le pipeline tels quels.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Normalise une séquence en majuscules
pub fn normalize(seq: &str) -> String {
    seq.to_ascii_uppercase()
}

/// Différence G - C sur un segment
pub fn gc_skew(segment: &[u8]) -> i64 {
    segment.iter().fold(0i64, |acc, &b| match b {
        b'G' => acc + 1,
        b'C' => acc - 1,
        _ => acc,
    })
}

/// Ratio GC (0-1) d'une séquence, 0 pour une séquence vide
pub fn gc_ratio(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.iter().filter(|&&b| matches!(b, b'G' | b'C')).count();
    gc as f64 / seq.len() as f64
}

/// Métadonnées d'une séquence assemblée
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStats {
    /// Longueur en bases
    pub length: usize,
    /// Ratio GC (0-1)
    pub gc_ratio: f64,
    /// Checksum SHA-256
    pub checksum: String,
}

impl SequenceStats {
    /// Calcule les métadonnées d'une séquence
    pub fn compute(seq: &str) -> Self {
        let hash = Sha256::digest(seq.as_bytes());
        Self {
            length: seq.len(),
            gc_ratio: gc_ratio(seq.as_bytes()),
            checksum: format!("{:x}", hash),
        }
    }
}
