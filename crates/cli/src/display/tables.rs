//! Tableaux tabled pour les enzymes et les ORF

use plasmid_core::{MarkerTable, Orf};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct MarkerRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Enzyme")]
    name: String,
    #[tabled(rename = "Site")]
    sequence: String,
    #[tabled(rename = "Length")]
    length: usize,
}

#[derive(Tabled)]
struct OrfRow {
    #[tabled(rename = "Start")]
    start: usize,
    #[tabled(rename = "End")]
    end: usize,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Sequence")]
    preview: String,
}

/// Tableau des enzymes dans l'ordre du fichier
pub fn markers_table(markers: &MarkerTable) -> String {
    let rows: Vec<MarkerRow> = markers
        .iter()
        .enumerate()
        .map(|(i, entry)| MarkerRow {
            index: i + 1,
            name: entry.name.clone(),
            sequence: entry.sequence.clone(),
            length: entry.sequence.len(),
        })
        .collect();
    Table::new(rows).to_string()
}

/// Tableau des ORF, séquence tronquée à 30 bases
pub fn orfs_table<'a>(orfs: impl IntoIterator<Item = &'a Orf>) -> String {
    let rows: Vec<OrfRow> = orfs
        .into_iter()
        .map(|orf| {
            let preview = if orf.sequence.len() > 30 {
                format!("{}...", &orf.sequence[..30])
            } else {
                orf.sequence.clone()
            };
            OrfRow {
                start: orf.start,
                end: orf.end,
                length: orf.len(),
                preview,
            }
        })
        .collect();
    Table::new(rows).to_string()
}
