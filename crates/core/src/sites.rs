//! Recherche et suppression de sites de restriction

use bio::pattern_matching::horspool::Horspool;

/// Positions (début) de toutes les occurrences d'un site, chevauchements inclus
pub fn find_sites(seq: &str, site: &str) -> Vec<usize> {
    if site.is_empty() || site.len() > seq.len() {
        return Vec::new();
    }
    let horspool = Horspool::new(site.as_bytes());
    horspool.find_all(seq.as_bytes()).collect()
}

/// Indique si le site apparaît dans la séquence
pub fn contains_site(seq: &str, site: &str) -> bool {
    !find_sites(seq, site).is_empty()
}

/// Supprime toutes les occurrences d'un site
///
/// Les occurrences sont retirées de gauche à droite sans chevauchement,
/// puis la passe est répétée tant que la jonction des morceaux recrée le
/// site. Retourne la séquence nettoyée et le nombre de sites retirés.
pub fn strip_sites(seq: &str, site: &str) -> (String, usize) {
    let mut current = seq.to_string();
    let mut removed = 0;

    loop {
        let hits = find_sites(&current, site);
        if hits.is_empty() {
            break;
        }

        let mut kept = String::with_capacity(current.len());
        let mut cursor = 0;
        for pos in hits {
            if pos < cursor {
                continue;
            }
            kept.push_str(&current[cursor..pos]);
            cursor = pos + site.len();
            removed += 1;
        }
        kept.push_str(&current[cursor..]);
        current = kept;
    }

    (current, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_sites() {
        assert_eq!(find_sites("AAGAATTCAAGAATTC", "GAATTC"), vec![2, 10]);
        assert!(find_sites("ACGT", "GAATTC").is_empty());
        assert!(find_sites("ACGT", "").is_empty());
    }

    #[test]
    fn test_strip_single_pass() {
        let (seq, removed) = strip_sites("AAGAATTCTT", "GAATTC");
        assert_eq!(seq, "AATT");
        assert_eq!(removed, 1);
    }

    #[test]
    fn test_strip_site_recreated_by_junction() {
        // GA + GAATTC + ATTC -> GAATTC -> vide
        let (seq, removed) = strip_sites("GAGAATTCATTC", "GAATTC");
        assert_eq!(seq, "");
        assert_eq!(removed, 2);
        assert!(!contains_site(&seq, "GAATTC"));
    }

    #[test]
    fn test_strip_overlapping_pattern_leftmost() {
        let (seq, removed) = strip_sites("AAAAA", "AA");
        assert_eq!(seq, "A");
        assert_eq!(removed, 2);
    }
}
