//! Table des enzymes de restriction (nom -> site de reconnaissance)
//!
//! Le fichier de marqueurs est hétérogène: lignes TSV, lignes de tableau
//! Markdown ou texte libre mentionnant « Recognizes ». Chaque ligne passe
//! par une liste ordonnée de classificateurs; le premier qui revendique la
//! ligne décide de son sort. Les lignes non reconnues sont ignorées.

use crate::error::{PlasmidError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Motif d'un site de reconnaissance: 4 à 12 bases A/C/G/T
const RECOGNITION_PATTERN: &str = "[ACGTacgt]{4,12}";
/// Mot-clé signalant une ligne qui décrit un site de reconnaissance
const RECOGNITION_KEYWORD: &str = "recogn";

/// Normalise un nom d'enzyme: supprime les espaces et le texte entre parenthèses
///
/// Chaque `(` est associée à la première `)` qui la suit sur la même ligne;
/// une parenthèse non fermée est conservée.
pub fn clean_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        if c == '(' {
            let close = chars[i + 1..]
                .iter()
                .take_while(|&&c| c != '\n')
                .position(|&c| c == ')');
            if let Some(offset) = close {
                i += offset + 2;
                continue;
            }
        }
        out.push(c);
        i += 1;
    }

    out
}

/// Entrée de la table: nom normalisé et site de reconnaissance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerEntry {
    pub name: String,
    pub sequence: String,
}

/// Extracteur du premier site de reconnaissance d'un texte
#[derive(Debug, Clone)]
pub struct RecognitionSequence(Regex);

impl RecognitionSequence {
    pub fn new() -> Result<Self> {
        Ok(Self(Regex::new(RECOGNITION_PATTERN)?))
    }

    /// Premier run de 4 à 12 bases, en majuscules
    pub fn extract(&self, text: &str) -> Option<String> {
        self.0.find(text).map(|m| m.as_str().to_ascii_uppercase())
    }
}

/// Verdict d'un classificateur sur une ligne
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineVerdict {
    /// Format non reconnu, la ligne passe au classificateur suivant
    Unclaimed,
    /// Format reconnu; `None` si aucun site n'a été trouvé
    Claimed(Option<MarkerEntry>),
}

/// Classificateur de lignes du fichier de marqueurs
pub trait LineClassifier: Send + Sync {
    /// Nom court pour les logs
    fn name(&self) -> &'static str;

    /// Examine une ligne déjà nettoyée (non vide, hors commentaire)
    fn classify(&self, line: &str, recognition: &RecognitionSequence) -> LineVerdict;
}

fn claim(name: &str, text: &str, recognition: &RecognitionSequence) -> LineVerdict {
    LineVerdict::Claimed(recognition.extract(text).map(|sequence| MarkerEntry {
        name: clean_name(name),
        sequence,
    }))
}

/// `nom<TAB>texte contenant le site`
pub struct TsvRow;

impl LineClassifier for TsvRow {
    fn name(&self) -> &'static str {
        "tsv"
    }

    fn classify(&self, line: &str, recognition: &RecognitionSequence) -> LineVerdict {
        if !line.contains('\t') {
            return LineVerdict::Unclaimed;
        }
        let parts: Vec<&str> = line
            .split('\t')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() < 2 {
            return LineVerdict::Unclaimed;
        }
        claim(parts[0], parts[1], recognition)
    }
}

/// `| catégorie | nom | Recognizes ... |`
pub struct MarkdownRow;

impl LineClassifier for MarkdownRow {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn classify(&self, line: &str, recognition: &RecognitionSequence) -> LineVerdict {
        if !line.starts_with('|') {
            return LineVerdict::Unclaimed;
        }
        let cols: Vec<&str> = line.trim_matches('|').split('|').map(str::trim).collect();
        if cols.len() < 3 || !cols[2].to_lowercase().contains(RECOGNITION_KEYWORD) {
            return LineVerdict::Unclaimed;
        }
        claim(cols[1], cols[2], recognition)
    }
}

/// Texte libre mentionnant « recogn »; le nom est le premier mot
pub struct KeywordLine;

impl LineClassifier for KeywordLine {
    fn name(&self) -> &'static str {
        "keyword"
    }

    fn classify(&self, line: &str, recognition: &RecognitionSequence) -> LineVerdict {
        if !line.to_lowercase().contains(RECOGNITION_KEYWORD) {
            return LineVerdict::Unclaimed;
        }
        let name = line
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | ':' | '|' | '\\'))
            .next()
            .unwrap_or_default();
        claim(name, line, recognition)
    }
}

/// Table immuable des enzymes, ordonnée par première insertion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerTable {
    entries: Vec<MarkerEntry>,
    index: HashMap<String, usize>,
}

impl MarkerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insère une entrée; un nom déjà présent est écrasé (dernière écriture gagnante)
    pub fn insert(&mut self, entry: MarkerEntry) {
        match self.index.get(&entry.name) {
            Some(&i) => self.entries[i].sequence = entry.sequence,
            None => {
                self.index.insert(entry.name.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Site de reconnaissance pour un nom déjà normalisé
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].sequence.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MarkerEntry> {
        self.entries.iter()
    }

    /// Charge une table depuis un fichier
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| PlasmidError::file_access(path, e))?;
        parse_markers(&text)
    }
}

impl FromIterator<MarkerEntry> for MarkerTable {
    fn from_iter<I: IntoIterator<Item = MarkerEntry>>(iter: I) -> Self {
        let mut table = MarkerTable::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

/// Analyseur de fichiers de marqueurs
pub struct MarkerParser {
    recognition: RecognitionSequence,
    classifiers: Vec<Box<dyn LineClassifier>>,
}

impl MarkerParser {
    /// Crée un analyseur avec les classificateurs TSV, Markdown puis mot-clé
    pub fn new() -> Result<Self> {
        Ok(Self {
            recognition: RecognitionSequence::new()?,
            classifiers: vec![Box::new(TsvRow), Box::new(MarkdownRow), Box::new(KeywordLine)],
        })
    }

    /// Analyse une ligne brute
    pub fn parse_line(&self, line: &str) -> Option<MarkerEntry> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        for classifier in &self.classifiers {
            if let LineVerdict::Claimed(entry) = classifier.classify(line, &self.recognition) {
                if entry.is_none() {
                    debug!("Ligne {} sans site de reconnaissance: {}", classifier.name(), line);
                }
                return entry;
            }
        }
        None
    }

    /// Analyse un texte complet
    pub fn parse(&self, text: &str) -> MarkerTable {
        let mut table = MarkerTable::new();
        for (lineno, line) in text.lines().enumerate() {
            match self.parse_line(line) {
                Some(entry) => table.insert(entry),
                None => {
                    if !line.trim().is_empty() {
                        debug!("Ligne de marqueurs {} ignorée: {}", lineno + 1, line.trim());
                    }
                }
            }
        }
        debug!("{} enzymes chargées", table.len());
        table
    }
}

/// Analyse un fichier de marqueurs déjà lu en mémoire
pub fn parse_markers(text: &str) -> Result<MarkerTable> {
    Ok(MarkerParser::new()?.parse(text))
}
