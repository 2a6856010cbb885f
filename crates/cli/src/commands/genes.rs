//! Commande d'inspection des ORF

use crate::create_spinner;
use crate::display::tables::orfs_table;
use anyhow::Result;
use plasmid_core::{find_orfs, read_genome, DesignerConfig, GeneSelection};
use std::path::PathBuf;

pub fn run(config: DesignerConfig, genome: PathBuf, feature: String, limit: usize) -> Result<()> {
    let spinner = create_spinner("Recherche des ORF...");
    let sequence = read_genome(&genome)?;
    let orfs = find_orfs(&sequence, config.orf_scan);
    spinner.finish_with_message(format!("{} ORF trouvés", orfs.len()));

    if orfs.is_empty() {
        println!("Aucun ORF dans le génome");
        return Ok(());
    }

    // Les plus longs d'abord; le tri stable garde l'ordre du génome à égalité
    let mut ranked: Vec<_> = orfs.iter().collect();
    ranked.sort_by(|a, b| b.len().cmp(&a.len()));
    println!("{}", orfs_table(ranked.into_iter().take(limit)));

    let selection = GeneSelection::for_feature(&feature, config.lacz_max_len);
    if let Some(orf) = selection.select(&orfs) {
        println!(
            "\n✅ {}: ORF {}..{} ({} bases, {:?})",
            feature,
            orf.start,
            orf.end,
            orf.len(),
            selection
        );
    }

    Ok(())
}
