//! Commande de détection de l'ORI

use crate::create_spinner;
use anyhow::{Context, Result};
use plasmid_core::{find_ori_window, format_record, read_genome, DesignerConfig};
use std::path::PathBuf;

pub fn run(config: DesignerConfig, genome: PathBuf) -> Result<()> {
    config.validate().context("Configuration invalide")?;

    let spinner = create_spinner("Lecture du génome...");
    let sequence = read_genome(&genome)?;
    spinner.finish_with_message(format!("Génome lu ({} bases)", sequence.len()));

    let ori = find_ori_window(&sequence, config.ori_window);

    eprintln!(
        "📍 ORI: positions {}..{} (skew G-C = {})",
        ori.start,
        ori.start + ori.sequence.len(),
        ori.skew
    );
    print!("{}", format_record("ORI", &ori.sequence, config.wrap_width));

    Ok(())
}
