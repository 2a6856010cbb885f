//! CLI pour la conception de plasmides

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use plasmid_core::DesignerConfig;
use std::path::PathBuf;

mod commands;
mod display;

use commands::{build, genes, mcs, ori};

#[derive(Parser)]
#[command(name = "plasmid")]
#[command(about = "Conception d'un plasmide universel à partir d'un génome", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Fichier de configuration JSON
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Construit le plasmide et l'écrit en FASTA
    Build {
        /// Table des enzymes (TSV, Markdown ou texte libre)
        #[arg(short, long)]
        markers: PathBuf,

        /// Génome source au format FASTA
        #[arg(short, long)]
        genome: PathBuf,

        /// Fichier de design (label,caractéristique)
        #[arg(short, long)]
        design: PathBuf,

        /// Fichier FASTA de sortie
        #[arg(short, long)]
        output: PathBuf,

        /// Taille de fenêtre pour le GC skew
        #[arg(short, long)]
        window: Option<usize>,

        /// Largeur des lignes FASTA
        #[arg(long)]
        wrap: Option<usize>,

        /// Exporter le rapport JSON
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Affiche la fenêtre ORI détectée
    Ori {
        /// Génome source au format FASTA
        #[arg(short, long)]
        genome: PathBuf,

        /// Taille de fenêtre pour le GC skew
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Liste les ORF et le gène retenu pour une caractéristique
    Genes {
        /// Génome source au format FASTA
        #[arg(short, long)]
        genome: PathBuf,

        /// Caractéristique (Ampicillin, Blue_White_Selection, ...)
        #[arg(short, long, default_value_t = plasmid_core::AMPICILLIN.to_string())]
        feature: String,

        /// Nombre d'ORF affichés
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Stratégie de recherche des ORF
        #[arg(short, long, value_enum)]
        scan: Option<ScanMode>,
    },

    /// Construit uniquement le site de clonage multiple
    Mcs {
        /// Table des enzymes
        #[arg(short, long)]
        markers: PathBuf,

        /// Fichier de design
        #[arg(short, long)]
        design: PathBuf,
    },

    /// Affiche la table des enzymes analysée
    Markers {
        /// Table des enzymes
        #[arg(short, long)]
        markers: PathBuf,

        /// Format d'affichage
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum ScanMode {
    EveryStart,
    NonOverlapping,
}

#[derive(clap::ValueEnum, Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Charge la configuration, ou les valeurs par défaut
fn load_config(path: Option<&PathBuf>) -> Result<DesignerConfig> {
    match path {
        Some(path) => DesignerConfig::from_file(path)
            .with_context(|| format!("Chargement de la configuration {}", path.display())),
        None => Ok(DesignerConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    plasmid_core::init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Commands::Build {
            markers,
            genome,
            design,
            output,
            window,
            wrap,
            report,
        } => {
            if let Some(window) = window {
                config.ori_window = window;
            }
            if let Some(wrap) = wrap {
                config.wrap_width = wrap;
            }
            build::run(config, markers, genome, design, output, report)?;
        }
        Commands::Ori { genome, window } => {
            if let Some(window) = window {
                config.ori_window = window;
            }
            ori::run(config, genome)?;
        }
        Commands::Genes {
            genome,
            feature,
            limit,
            scan,
        } => {
            if let Some(scan) = scan {
                config.orf_scan = match scan {
                    ScanMode::EveryStart => plasmid_core::OrfScan::EveryStart,
                    ScanMode::NonOverlapping => plasmid_core::OrfScan::NonOverlapping,
                };
            }
            genes::run(config, genome, feature, limit)?;
        }
        Commands::Mcs { markers, design } => {
            mcs::run(config, markers, design)?;
        }
        Commands::Markers { markers, format } => {
            commands::markers::run(markers, format)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb
}
