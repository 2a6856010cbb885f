//! Tests d'intégration du pipeline complet (fichiers -> FASTA)

use plasmid_core::{
    parse_design, parse_genome, parse_markers, Assembler, DesignerConfig, OrfScan, PlasmidError,
};
use std::fs;
use std::path::{Path, PathBuf};

const MARKERS: &str = "\
# Table des enzymes
| Category | Name | Description |
|----------|------|-------------|
| Restriction | EcoRI (E. coli) | Recognizes GAATTC |
| Restriction | Bam HI | Recognizes GGATCC sites |
Ampicillin\tGGTACC
NotI: Recognizes GCGGCCGC
";

/// Génome de test: ~760 bases avec un unique ORF et un site EcoRI
fn genome_sequence() -> String {
    format!(
        "{}ATG{}TAAGAATTC{}",
        "ACGT".repeat(100),
        "GCC".repeat(50),
        "TTGG".repeat(50)
    )
}

fn genome_fasta() -> String {
    let seq = genome_sequence().to_lowercase();
    let mut text = String::from(">pUC19 synthétique\n");
    for chunk in seq.as_bytes().chunks(60) {
        text.push_str(std::str::from_utf8(chunk).unwrap());
        text.push('\n');
    }
    text
}

/// Répertoire temporaire propre à un test
fn workdir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plasmid_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_inputs(dir: &Path, design: &str) -> (PathBuf, PathBuf, PathBuf) {
    let markers = dir.join("markers.tab");
    let genome = dir.join("pUC19.fa");
    let design_path = dir.join("Design_pUC19.txt");
    fs::write(&markers, MARKERS).unwrap();
    fs::write(&genome, genome_fasta()).unwrap();
    fs::write(&design_path, design).unwrap();
    (markers, genome, design_path)
}

#[test]
fn test_construct_creates_output() {
    let dir = workdir("construct");
    let (markers, genome, design) = write_inputs(&dir, "mcs1,Ampicillin\nmcs2,Blue_White_Selection\n");
    let out = dir.join("Output.fa");

    let report = Assembler::default()
        .construct(&markers, &genome, &design, &out)
        .unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with(">Universal_Plasmid\n"));
    assert!(!text.contains("GAATTC"));
    assert!(text.lines().skip(1).all(|line| line.len() <= 70));

    let seq: String = text.lines().skip(1).collect();
    assert!(seq.len() > 100);
    assert_eq!(seq.len(), report.length);
    assert!(report.success);
    assert!(report.site_absent);

    // ORI (500) + ORF (156) deux fois + MCS (GGTACC), moins les sites retirés
    let segments = report.segments;
    assert_eq!(segments.ori, 500);
    assert_eq!(segments.amp_r, 156);
    assert_eq!(segments.lac_z, 156);
    assert_eq!(segments.mcs, 6);
    assert_eq!(
        report.length,
        segments.ori + segments.amp_r + segments.lac_z + segments.mcs - 6 * report.sites_removed
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_ecori_in_design_never_reaches_mcs() {
    let dir = workdir("ecori");
    let (markers, genome, design) = write_inputs(&dir, "x,EcoRI\ny,BamHI\nz,Unknown\n");
    let out = dir.join("out.fa");

    let report = Assembler::default()
        .construct(&markers, &genome, &design, &out)
        .unwrap();

    assert_eq!(report.segments.mcs, "GGATCC".len());
    assert_eq!(report.segments.amp_r, 0);
    assert_eq!(report.segments.lac_z, 0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = workdir("missing");
    let (markers, _, design) = write_inputs(&dir, "mcs1,Ampicillin\n");
    let out = dir.join("out.fa");

    let err = Assembler::default()
        .construct(&markers, dir.join("absent.fa"), &design, &out)
        .unwrap_err();

    match err {
        PlasmidError::FileAccess { path, .. } => assert!(path.ends_with("absent.fa")),
        other => panic!("erreur inattendue: {other}"),
    }
    assert!(!out.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_in_memory_pipeline_matches_files() {
    let markers = parse_markers(MARKERS).unwrap();
    assert_eq!(markers.get("EcoRI"), Some("GAATTC"));
    assert_eq!(markers.get("BamHI"), Some("GGATCC"));
    assert_eq!(markers.get("Ampicillin"), Some("GGTACC"));
    assert_eq!(markers.get("NotI"), Some("GCGGCCGC"));

    let genome = parse_genome(&genome_fasta());
    assert_eq!(genome, genome_sequence());

    let design = parse_design("mcs1,Ampicillin\nmcs2,Blue_White_Selection\n");
    let assembler = Assembler::default();
    let plasmid = assembler.assemble(&genome, &design, &markers);

    let fasta = assembler.to_fasta(&plasmid);
    assert!(fasta.starts_with(">Universal_Plasmid"));
    assert_eq!(plasmid.amp_r, plasmid.lac_z);
    assert!(plasmid.amp_r.starts_with("ATG") && plasmid.amp_r.ends_with("TAA"));
}

#[test]
fn test_custom_config() {
    let config = DesignerConfig {
        ori_window: 100,
        wrap_width: 50,
        record_name: "Custom".to_string(),
        orf_scan: OrfScan::NonOverlapping,
        ..Default::default()
    };
    let assembler = Assembler::new(config).unwrap();
    let markers = parse_markers(MARKERS).unwrap();
    let plasmid = assembler.assemble(&genome_sequence(), &[], &markers);

    assert_eq!(plasmid.ori.len(), 100);
    let fasta = assembler.to_fasta(&plasmid);
    assert!(fasta.starts_with(">Custom\n"));
    assert!(fasta.lines().skip(1).all(|line| line.len() <= 50));
}
