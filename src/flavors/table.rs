//! Canonical flavor vocabulary.
//!
//! The synonym table is the single source of truth for normalization:
//! every canonical flavor maps to the surface-form variants that count
//! as a mention of it. The table is immutable and constructed once at
//! startup; the normalizer and aggregator borrow it rather than
//! consulting any module-level state.

use anyhow::{bail, Result};

/// One canonical flavor and its surface-form variants
#[derive(Debug, Clone)]
pub struct SynonymEntry {
    /// Canonical flavor name (lowercase)
    pub canonical: String,
    /// Variant substrings that count as a mention (lowercase)
    pub variants: Vec<String>,
}

/// Ordered, immutable mapping from canonical flavor to variants.
///
/// Iteration order is definition order; it determines emission order
/// in the normalizer and the tie-break order in the aggregator.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: Vec<SynonymEntry>,
}

impl SynonymTable {
    /// Build a table from custom entries, validating invariants:
    /// canonical names must be unique and every entry needs at least
    /// one variant.
    pub fn new(entries: Vec<SynonymEntry>) -> Result<Self> {
        for (i, entry) in entries.iter().enumerate() {
            if entry.canonical.is_empty() {
                bail!("Synonym entry {} has an empty canonical name", i);
            }
            if entry.variants.is_empty() {
                bail!("Canonical flavor '{}' has no variants", entry.canonical);
            }
            if entries[..i].iter().any(|e| e.canonical == entry.canonical) {
                bail!("Duplicate canonical flavor '{}'", entry.canonical);
            }
        }
        Ok(Self { entries })
    }

    /// The built-in supplement-market vocabulary.
    ///
    /// Compound flavors are listed before their components so that
    /// e.g. "kesar pista" and "chocolate" both read naturally, but
    /// note there is no precedence between entries: each variant is
    /// checked independently and a text can mention several canonical
    /// flavors at once.
    pub fn builtin() -> Self {
        let entries = [
            ("kesar pista", &["kesar pista", "saffron pistachio", "kesar", "pista"][..]),
            ("dark chocolate", &["dark chocolate", "dark cocoa", "dark choc"]),
            ("mango lassi", &["mango lassi", "lassi", "mango"]),
            ("masala chai", &["masala chai", "chai", "masala"]),
            ("chocolate", &["chocolate", "choco", "cocoa"]),
            ("vanilla", &["vanilla"]),
            ("strawberry", &["strawberry", "strawberries"]),
            ("banana", &["banana"]),
            ("coffee", &["coffee", "mocha"]),
            ("caramel", &["caramel", "butterscotch"]),
            ("mint", &["mint", "peppermint"]),
            ("berry", &["berry", "blueberry", "cranberry"]),
            ("coconut", &["coconut"]),
            ("peanut butter", &["peanut butter", "peanut"]),
            ("orange", &["orange", "citrus"]),
            ("honey", &["honey"]),
            ("watermelon", &["watermelon"]),
            ("rose", &["rose", "gulkand"]),
            ("litchi", &["litchi", "lychee"]),
            ("butterscotch", &["butterscotch", "toffee"]),
            ("grape", &["grape"]),
        ];

        Self {
            entries: entries
                .iter()
                .map(|(canonical, variants)| SynonymEntry {
                    canonical: canonical.to_string(),
                    variants: variants.iter().map(|v| v.to_string()).collect(),
                })
                .collect(),
        }
    }

    /// Iterate entries in definition order
    pub fn iter(&self) -> impl Iterator<Item = &SynonymEntry> {
        self.entries.iter()
    }

    /// Number of canonical flavors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = SynonymTable::builtin();
        assert!(!table.is_empty());

        // Re-validating the builtin entries must succeed
        let entries: Vec<SynonymEntry> = table.iter().cloned().collect();
        assert!(SynonymTable::new(entries).is_ok());
    }

    #[test]
    fn test_builtin_covers_compound_flavors() {
        let table = SynonymTable::builtin();
        let canonicals: Vec<&str> = table.iter().map(|e| e.canonical.as_str()).collect();
        assert!(canonicals.contains(&"kesar pista"));
        assert!(canonicals.contains(&"masala chai"));
        assert!(canonicals.contains(&"dark chocolate"));
    }

    #[test]
    fn test_duplicate_canonical_rejected() {
        let entries = vec![
            SynonymEntry {
                canonical: "mango".to_string(),
                variants: vec!["mango".to_string()],
            },
            SynonymEntry {
                canonical: "mango".to_string(),
                variants: vec!["aam".to_string()],
            },
        ];
        assert!(SynonymTable::new(entries).is_err());
    }

    #[test]
    fn test_empty_variants_rejected() {
        let entries = vec![SynonymEntry {
            canonical: "mango".to_string(),
            variants: vec![],
        }];
        assert!(SynonymTable::new(entries).is_err());
    }
}
