//! Construction du site de clonage multiple (MCS)

use crate::design::DesignEntry;
use crate::markers::{clean_name, MarkerTable};
use tracing::debug;

/// Concatène les sites de reconnaissance des enzymes du design
///
/// Les noms sont normalisés avant la recherche. Les enzymes inconnues sont
/// ignorées, de même que l'enzyme exclue (comparaison insensible à la
/// casse). L'ordre et les répétitions du design sont conservés.
pub fn build_mcs(design: &[DesignEntry], markers: &MarkerTable, excluded_enzyme: &str) -> String {
    let excluded = excluded_enzyme.to_uppercase();
    let mut parts: Vec<&str> = Vec::with_capacity(design.len());

    for entry in design {
        let key = clean_name(&entry.feature);
        match markers.get(&key) {
            Some(_) if key.to_uppercase() == excluded => {
                debug!("MCS: {} exclue ({})", key, entry.label);
            }
            Some(site) => parts.push(site),
            None => debug!("MCS: enzyme inconnue '{}' ({})", entry.feature, entry.label),
        }
    }

    parts.concat()
}
