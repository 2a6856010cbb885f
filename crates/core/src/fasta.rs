//! Lecture du génome et écriture du plasmide au format FASTA

use crate::error::{PlasmidError, Result};
use crate::sequence::normalize;
use std::fmt::Write as _;
use std::path::Path;

/// Extrait la séquence d'un texte FASTA
///
/// Les lignes d'en-tête (`>` après espaces éventuels) sont ignorées, les
/// autres sont nettoyées, concaténées puis mises en majuscules. Plusieurs
/// enregistrements sont fusionnés en une seule séquence.
pub fn parse_genome(text: &str) -> String {
    let seq: String = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .map(str::trim)
        .collect();
    normalize(&seq)
}

/// Lit un fichier génome FASTA
pub fn read_genome(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| PlasmidError::file_access(path, e))?;
    Ok(parse_genome(&text))
}

/// Formate un enregistrement FASTA, séquence coupée à `width` caractères
pub fn format_record(name: &str, seq: &str, width: usize) -> String {
    let width = width.max(1);
    let mut out = String::with_capacity(seq.len() + seq.len() / width + name.len() + 2);
    let _ = writeln!(out, ">{}", name);
    let chars: Vec<char> = seq.chars().collect();
    for chunk in chars.chunks(width) {
        out.extend(chunk);
        out.push('\n');
    }
    out
}

/// Écrit un enregistrement FASTA dans un fichier
pub fn write_record(path: impl AsRef<Path>, name: &str, seq: &str, width: usize) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, format_record(name, seq, width))
        .map_err(|e| PlasmidError::file_access(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genome_strips_headers() {
        let text = ">pUC19 vecteur\nacgt\n  >second\n  GGCC  \n\nTT\n";
        assert_eq!(parse_genome(text), "ACGTGGCCTT");
    }

    #[test]
    fn test_parse_genome_without_header() {
        assert_eq!(parse_genome("atg\nNNN\n"), "ATGNNN");
    }

    #[test]
    fn test_format_record_wraps() {
        let seq = "A".repeat(150);
        let fasta = format_record("Universal_Plasmid", &seq, 70);
        let lines: Vec<&str> = fasta.lines().collect();
        assert_eq!(lines[0], ">Universal_Plasmid");
        assert_eq!(lines[1].len(), 70);
        assert_eq!(lines[2].len(), 70);
        assert_eq!(lines[3].len(), 10);
        assert_eq!(lines.len(), 4);
        assert!(fasta.ends_with('\n'));
    }

    #[test]
    fn test_format_empty_sequence() {
        assert_eq!(format_record("X", "", 70), ">X\n");
    }

    #[test]
    fn test_read_missing_genome() {
        let err = read_genome("/nonexistent/genome.fa").unwrap_err();
        assert!(matches!(err, PlasmidError::FileAccess { .. }));
    }
}
