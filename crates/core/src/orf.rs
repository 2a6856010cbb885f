//! Recherche heuristique de cadres ouverts de lecture (ORF)
//!
//! Un ORF est ici un ATG suivi d'au moins un codon A/C/G/T puis du premier
//! codon stop en phase (TAA, TAG, TGA). Pour chaque ATG on retient l'ORF le
//! plus court. Ce n'est pas un prédicteur de gènes validé biologiquement:
//! le brin complémentaire et les génomes circulaires sont ignorés.

use crate::config::{OrfScan, BLUE_WHITE_SELECTION};
use crate::sequence::normalize;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const START_CODON: &[u8; 3] = b"ATG";
const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Cadre ouvert de lecture, coordonnées `[start, end)` dans le génome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orf {
    pub start: usize,
    pub end: usize,
    pub sequence: String,
}

impl Orf {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

fn is_codon(codon: &[u8]) -> bool {
    codon.iter().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
}

fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon == *stop)
}

/// Fin de l'ORF minimal commençant à `start`, qui doit pointer sur un ATG
fn minimal_orf_end(bases: &[u8], start: usize) -> Option<usize> {
    // Le premier codon après l'ATG est obligatoire, même s'il s'agit d'un stop
    let mut pos = start + 3;
    let first = bases.get(pos..pos + 3)?;
    if !is_codon(first) {
        return None;
    }
    pos += 3;

    loop {
        let codon = bases.get(pos..pos + 3)?;
        if is_stop(codon) {
            return Some(pos + 3);
        }
        if !is_codon(codon) {
            return None;
        }
        pos += 3;
    }
}

/// Liste les ORF du génome dans l'ordre de leur position de départ
pub fn find_orfs(genome: &str, scan: OrfScan) -> Vec<Orf> {
    let genome = normalize(genome);
    let bases = genome.as_bytes();
    let mut orfs = Vec::new();
    let mut pos = 0;

    while pos + 3 <= bases.len() {
        if &bases[pos..pos + 3] != START_CODON {
            pos += 1;
            continue;
        }
        match minimal_orf_end(bases, pos) {
            Some(end) => {
                orfs.push(Orf {
                    start: pos,
                    end,
                    sequence: genome[pos..end].to_string(),
                });
                pos = match scan {
                    OrfScan::EveryStart => pos + 1,
                    OrfScan::NonOverlapping => end,
                };
            }
            None => pos += 1,
        }
    }

    debug!("{} ORF trouvés ({:?})", orfs.len(), scan);
    orfs
}

/// Politique de choix d'un gène parmi les ORF
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneSelection {
    /// Le plus long ORF
    Longest,
    /// Le plus long ORF strictement plus court que la limite, sinon le plus long
    LongestBelow(usize),
}

impl GeneSelection {
    /// Politique associée à un nom de caractéristique
    pub fn for_feature(feature: &str, lacz_max_len: usize) -> Self {
        if feature == BLUE_WHITE_SELECTION {
            GeneSelection::LongestBelow(lacz_max_len)
        } else {
            GeneSelection::Longest
        }
    }

    /// Applique la politique; à longueur égale, le premier ORF gagne
    pub fn select<'a>(&self, orfs: &'a [Orf]) -> Option<&'a Orf> {
        match *self {
            GeneSelection::Longest => longest(orfs.iter()),
            GeneSelection::LongestBelow(limit) => {
                longest(orfs.iter().filter(|orf| orf.len() < limit)).or_else(|| longest(orfs.iter()))
            }
        }
    }
}

fn longest<'a>(orfs: impl Iterator<Item = &'a Orf>) -> Option<&'a Orf> {
    orfs.fold(None, |best: Option<&'a Orf>, orf| match best {
        Some(b) if b.len() >= orf.len() => Some(b),
        _ => Some(orf),
    })
}

/// Extrait le gène correspondant à une caractéristique
///
/// Retourne une séquence vide si le génome ne contient aucun ORF.
pub fn extract_gene(genome: &str, feature: &str, lacz_max_len: usize, scan: OrfScan) -> String {
    let orfs = find_orfs(genome, scan);
    let selection = GeneSelection::for_feature(feature, lacz_max_len);

    match selection.select(&orfs) {
        Some(orf) => {
            debug!(
                "{}: ORF {}..{} ({} bases) parmi {}",
                feature,
                orf.start,
                orf.end,
                orf.len(),
                orfs.len()
            );
            orf.sequence.clone()
        }
        None => {
            warn!("{}: aucun ORF dans le génome", feature);
            String::new()
        }
    }
}
