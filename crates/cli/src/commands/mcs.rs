//! Commande de construction du MCS seul

use anyhow::Result;
use plasmid_core::{build_mcs, read_design, DesignerConfig, MarkerTable};
use std::path::PathBuf;

pub fn run(config: DesignerConfig, markers: PathBuf, design: PathBuf) -> Result<()> {
    let table = MarkerTable::from_path(&markers)?;
    let entries = read_design(&design)?;

    let mcs = build_mcs(&entries, &table, &config.excluded_enzyme);

    eprintln!(
        "🔬 MCS: {} bases depuis {} lignes de design ({} enzymes connues)",
        mcs.len(),
        entries.len(),
        table.len()
    );
    println!("{}", mcs);

    Ok(())
}
