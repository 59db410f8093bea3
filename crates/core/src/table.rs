//! Delimited verb-table parsing.
//!
//! The source format is a small comma-separated table, UTF-8 with an optional
//! byte-order marker: one header line, then one row per verb with the fields
//! headword, meaning, past form, progressive form. A field may be wrapped in
//! double quotes to embed a literal comma. A quote character always toggles
//! the quoted state; there is no escape for a literal quote inside a quoted
//! field, and an unterminated quote at end of line is accepted as-is.

/// One parsed data row of the verb table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VerbEntry {
    pub headword: String,
    pub meaning: String,
    pub past: String,
    pub progressive: String,
}

impl VerbEntry {
    /// Build an entry from raw row fields. Missing trailing fields are empty.
    #[must_use]
    pub fn from_fields(fields: &[String]) -> Self {
        let field = |index: usize| fields.get(index).cloned().unwrap_or_default();
        Self {
            headword: field(0),
            meaning: field(1),
            past: field(2),
            progressive: field(3),
        }
    }
}

/// Split one line into fields, honoring quoted segments.
///
/// A comma outside quotes separates fields; inside quotes it is literal.
/// Each field is trimmed and then loses at most one leading and one trailing
/// quote character.
#[must_use]
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
        .into_iter()
        .map(|field| strip_outer_quotes(field.trim()).to_string())
        .collect()
}

fn strip_outer_quotes(field: &str) -> &str {
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field)
}

/// Parse the whole table text into entries, discarding the header line.
///
/// A leading U+FEFF is stripped and surrounding whitespace ignored. Rows are
/// not filtered here: a blank or short line simply yields an entry with empty
/// fields.
#[must_use]
pub fn parse_table(text: &str) -> Vec<VerbEntry> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text).trim();
    let mut lines = text.lines();
    let _header = lines.next();
    lines
        .map(|line| VerbEntry::from_fields(&parse_row(line)))
        .collect()
}
