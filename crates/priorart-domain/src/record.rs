//! Record types - the shapes returned by searches and comparisons

/// Maximum length of a record title, in characters.
pub const MAX_TITLE_CHARS: usize = 80;

/// Maximum number of claim elements kept on a record.
pub const MAX_RECORD_ELEMENTS: usize = 8;

/// Maximum number of classification codes kept on a record.
pub const MAX_CLASSIFICATIONS: usize = 5;

/// Maximum entries in each of a comparison row's element lists.
pub const MAX_DIFF_ENTRIES: usize = 10;

/// Maximum number of rows returned by a claim chart.
pub const MAX_CHART_ROWS: usize = 5;

/// One patent document as returned by a search provider.
///
/// Records are assembled per query and discarded after being returned to
/// the caller; the only identity they carry is the provider's own
/// identifier (a Lens ID or an OPS publication number).
#[derive(Debug, Clone, PartialEq)]
pub struct PatentRecord {
    /// Provider identifier (lens_id or publication number)
    pub id: String,

    /// Document title, truncated to [`MAX_TITLE_CHARS`] characters
    pub title: String,

    /// Publication date, if the provider returned one
    pub date_published: Option<String>,

    /// Similarity score against the user's invention text (0-100);
    /// 0 when no invention text was supplied or the provider does not rank
    pub score: u8,

    /// Claim elements extracted from the representative claim
    /// (at most [`MAX_RECORD_ELEMENTS`])
    pub elements: Vec<String>,

    /// Classification codes (at most [`MAX_CLASSIFICATIONS`])
    pub classifications: Vec<String>,

    /// Process conditions extracted from the representative claim,
    /// when the provider adapter performs extraction
    pub conditions: Option<ProcessConditions>,
}

impl PatentRecord {
    /// Create a record with the given identifier and title.
    ///
    /// The title is truncated to [`MAX_TITLE_CHARS`] characters; all other
    /// fields start empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use priorart_domain::PatentRecord;
    ///
    /// let rec = PatentRecord::new("084-132-315-942-X", "Gas barrier film");
    /// assert_eq!(rec.id, "084-132-315-942-X");
    /// assert_eq!(rec.score, 0);
    /// ```
    pub fn new(id: impl Into<String>, title: &str) -> Self {
        Self {
            id: id.into(),
            title: truncate_chars(title, MAX_TITLE_CHARS),
            date_published: None,
            score: 0,
            elements: Vec::new(),
            classifications: Vec::new(),
            conditions: None,
        }
    }
}

/// One prior claim charted against the user's claim.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    /// Token-set similarity score between the two element sets (0-100)
    pub sim: u8,

    /// Elements present in both claims (at most [`MAX_DIFF_ENTRIES`])
    pub overlap: Vec<String>,

    /// Elements of the user's claim absent from the prior claim
    pub missing: Vec<String>,

    /// Elements of the prior claim absent from the user's claim
    pub extra: Vec<String>,
}

/// Process parameters extracted from claim text.
///
/// Extraction is best effort: text with no recognizable parameters yields
/// empty lists, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessConditions {
    /// Oxygen concentration mentions (amount + unit)
    pub oxygen: Vec<OxygenMention>,

    /// Two-to-three digit Celsius temperatures, as matched digit strings
    pub temperatures_c: Vec<String>,

    /// Layer-count mentions, numeric or the word "multilayer"
    pub layers: Vec<LayerMention>,
}

impl ProcessConditions {
    /// True when no parameter of any kind was extracted.
    pub fn is_empty(&self) -> bool {
        self.oxygen.is_empty() && self.temperatures_c.is_empty() && self.layers.is_empty()
    }
}

/// One oxygen concentration measurement, e.g. "21 Pa" or "0.5 %".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OxygenMention {
    /// Numeric amount as matched (may carry a decimal point)
    pub amount: String,

    /// Unit: "Pa", "%" or "sccm"
    pub unit: String,
}

/// One layer-count mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerMention {
    /// The matched text, e.g. "multilayer" or "3 layers"
    pub raw: String,

    /// Numeric count when the mention was numeric
    pub count: Option<u32>,
}

/// Truncate a string to at most `max` characters.
///
/// Operates on characters, not bytes, so multi-byte titles never split
/// mid-character.
pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_truncates_title() {
        let long_title = "x".repeat(200);
        let rec = PatentRecord::new("id-1", &long_title);
        assert_eq!(rec.title.chars().count(), MAX_TITLE_CHARS);
    }

    #[test]
    fn test_truncate_chars_respects_char_boundaries() {
        let s = "éèêëéèêëéè";
        let out = truncate_chars(s, 4);
        assert_eq!(out, "éèêë");
    }

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("short", 80), "short");
    }

    #[test]
    fn test_conditions_is_empty() {
        let mut cond = ProcessConditions::default();
        assert!(cond.is_empty());

        cond.temperatures_c.push("120".to_string());
        assert!(!cond.is_empty());
    }
}
