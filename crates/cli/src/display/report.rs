//! Affichage du rapport de construction

use plasmid_core::AssemblyReport;

/// Affiche le détail des segments sur la sortie d'erreur
pub fn display_report(report: &AssemblyReport) {
    let segments = &report.segments;

    eprintln!("\n┌────────────────────────────────────────────────┐");
    eprintln!("│ Plasmide {:<38}│", report.record_name);
    eprintln!("├────────────────────────────────────────────────┤");
    eprintln!("│ ORI                    : {:>8} bases        │", segments.ori);
    eprintln!("│ Gène ampicilline       : {:>8} bases        │", segments.amp_r);
    eprintln!("│ lacZα                  : {:>8} bases        │", segments.lac_z);
    eprintln!("│ MCS                    : {:>8} bases        │", segments.mcs);
    eprintln!("│ Sites {:<6} retirés   : {:>8}              │", report.forbidden_site, report.sites_removed);
    eprintln!("│ Longueur finale        : {:>8} bases        │", report.length);
    eprintln!("│ GC                     : {:>8.1}%              │", report.gc_ratio * 100.0);
    eprintln!("└────────────────────────────────────────────────┘");
    eprintln!("SHA-256: {}", report.checksum);
}
