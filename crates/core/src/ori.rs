//! Détection de l'origine de réplication par GC skew
//!
//! Heuristique simplifiée: l'ORI est approchée par la fenêtre de taille fixe
//! dont le skew G - C est maximal. En cas d'égalité, la première fenêtre
//! l'emporte. Le génome est traité comme linéaire (pas de bouclage).

use crate::sequence::normalize;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Fenêtre retenue comme origine de réplication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriWindow {
    /// Position de début dans le génome
    pub start: usize,
    /// Skew G - C de la fenêtre
    pub skew: i64,
    /// Séquence de la fenêtre
    pub sequence: String,
}

fn skew_of(c: char) -> i64 {
    match c {
        'G' => 1,
        'C' => -1,
        _ => 0,
    }
}

/// Skew de chaque fenêtre `[i, i + window)` du génome
///
/// Calcul incrémental: la fenêtre suivante retire la base sortante et
/// ajoute la base entrante. Vide si le génome est plus court que la fenêtre.
pub fn skew_profile(genome: &str, window: usize) -> Vec<i64> {
    let bases: Vec<char> = normalize(genome).chars().collect();
    profile(&bases, window)
}

fn profile(bases: &[char], window: usize) -> Vec<i64> {
    if window > bases.len() {
        return Vec::new();
    }

    let mut skews = Vec::with_capacity(bases.len() - window + 1);
    let mut current: i64 = bases[..window].iter().map(|&c| skew_of(c)).sum();
    skews.push(current);

    for i in 1..=bases.len() - window {
        current += skew_of(bases[i + window - 1]) - skew_of(bases[i - 1]);
        skews.push(current);
    }

    skews
}

/// Localise la fenêtre de skew maximal
///
/// Si le génome ne dépasse pas la fenêtre, il est retourné en entier.
pub fn find_ori_window(genome: &str, window: usize) -> OriWindow {
    let genome = normalize(genome);
    let bases: Vec<char> = genome.chars().collect();

    if bases.len() <= window {
        let skew = bases.iter().map(|&c| skew_of(c)).sum();
        return OriWindow {
            start: 0,
            skew,
            sequence: genome,
        };
    }

    let skews = profile(&bases, window);

    // Premier maximum: on ne remplace que sur une valeur strictement supérieure
    let (start, skew) = skews
        .iter()
        .enumerate()
        .fold((0, i64::MIN), |best, (i, &s)| if s > best.1 { (i, s) } else { best });

    info!("ORI: fenêtre {}..{} (skew {})", start, start + window, skew);

    OriWindow {
        start,
        skew,
        sequence: bases[start..start + window].iter().collect(),
    }
}

/// Séquence de la fenêtre ORI
pub fn find_ori(genome: &str, window: usize) -> String {
    find_ori_window(genome, window).sequence
}
