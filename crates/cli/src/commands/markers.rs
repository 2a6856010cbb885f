//! Commande d'affichage de la table des enzymes

use crate::display::tables::markers_table;
use crate::OutputFormat;
use anyhow::Result;
use plasmid_core::{MarkerEntry, MarkerTable};
use std::path::PathBuf;

pub fn run(markers: PathBuf, format: OutputFormat) -> Result<()> {
    let table = MarkerTable::from_path(&markers)?;

    match format {
        OutputFormat::Table => {
            eprintln!("📊 {} enzymes dans {}", table.len(), markers.display());
            println!("{}", markers_table(&table));
        }
        OutputFormat::Json => {
            let entries: Vec<&MarkerEntry> = table.iter().collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
    }

    Ok(())
}
