//! Linear verse search with Arabic-aware matching.

use log::debug;

use crate::error::ContentError;

/// One verse of caller-supplied text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    pub surah: u32,
    pub ayah: u32,
    pub text: String,
}

impl Verse {
    /// Parse a `surah|ayah|text` line. `line` is the 1-based line number for errors.
    pub fn parse_line(raw: &str, line: usize) -> Result<Self, ContentError> {
        let malformed = |reason: &str| ContentError::MalformedLine {
            line,
            reason: reason.to_string(),
        };
        let mut parts = raw.splitn(3, '|');
        let surah = parts.next().unwrap_or_default().trim();
        let ayah = parts.next().ok_or_else(|| malformed("missing ayah field"))?.trim();
        let text = parts.next().ok_or_else(|| malformed("missing text field"))?.trim();
        Ok(Self {
            surah: surah
                .parse()
                .map_err(|_| malformed(&format!("bad surah number '{surah}'")))?,
            ayah: ayah
                .parse()
                .map_err(|_| malformed(&format!("bad ayah number '{ayah}'")))?,
            text: text.to_string(),
        })
    }
}

/// Parse a whole file of verse lines. Blank lines and `#` comments are skipped.
pub fn parse_verses(source: &str) -> Result<Vec<Verse>, ContentError> {
    source
        .lines()
        .enumerate()
        .filter(|(_, l)| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(i, l)| Verse::parse_line(l, i + 1))
        .collect()
}

/// A matching verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    /// Position in the searched slice.
    pub index: usize,
    pub surah: u32,
    pub ayah: u32,
}

const TATWEEL: char = '\u{0640}';
const ALEF: char = '\u{0627}';

fn is_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E8}'
        | '\u{06EA}'..='\u{06ED}')
}

fn fold_alef(c: char) -> char {
    match c {
        // madda, hamza above, hamza below, wasla
        '\u{0622}' | '\u{0623}' | '\u{0625}' | '\u{0671}' => ALEF,
        _ => c,
    }
}

/// Matching form of `text`: diacritics and tatweel removed, alef variants
/// folded, lowercased, whitespace collapsed to single spaces.
pub fn normalize_for_search(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        for c in word.chars() {
            if c == TATWEEL || is_diacritic(c) {
                continue;
            }
            out.extend(fold_alef(c).to_lowercase());
        }
    }
    out
}

/// Verses whose text contains `query`, in order, at most `limit` of them.
///
/// A blank query matches nothing.
pub fn search(verses: &[Verse], query: &str, limit: usize) -> Vec<SearchHit> {
    let needle = normalize_for_search(query);
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }
    let hits: Vec<SearchHit> = verses
        .iter()
        .enumerate()
        .filter(|(_, v)| normalize_for_search(&v.text).contains(&needle))
        .take(limit)
        .map(|(index, v)| SearchHit {
            index,
            surah: v.surah,
            ayah: v.ayah,
        })
        .collect();
    debug!("search '{needle}': {} hit(s)", hits.len());
    hits
}
