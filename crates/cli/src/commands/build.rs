//! Commande de construction du plasmide

use crate::create_spinner;
use crate::display::report::display_report;
use anyhow::{Context, Result};
use console::style;
use plasmid_core::{Assembler, DesignerConfig};
use std::path::PathBuf;

pub fn run(
    config: DesignerConfig,
    markers: PathBuf,
    genome: PathBuf,
    design: PathBuf,
    output: PathBuf,
    report_path: Option<PathBuf>,
) -> Result<()> {
    eprintln!("🧬 Construction depuis: {}", style(genome.display()).cyan());

    let assembler = Assembler::new(config).context("Configuration invalide")?;

    let spinner = create_spinner("Assemblage du plasmide...");
    let report = assembler
        .construct(&markers, &genome, &design, &output)
        .context("Échec de la construction")?;
    spinner.finish_with_message(format!("Plasmide écrit dans {}", output.display()));

    println!("Plasmid constructed successfully.");
    println!("EcoRI removed: {}", report.site_absent);
    println!("Length: {}", report.length);

    display_report(&report);

    if let Some(path) = report_path {
        report
            .write_json(&path)
            .with_context(|| format!("Écriture du rapport {}", path.display()))?;
        eprintln!("📄 Rapport JSON: {}", path.display());
    }

    Ok(())
}
