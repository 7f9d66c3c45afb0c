//! Atomic lexical units of a CQL statement.

use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

/// Kind of a [`CqlPart`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CqlType {
    /// Language keyword, possibly multi-word (`drop index`)
    Keyword,
    /// Keyword bound to a fixed value vocabulary (`durable_writes`, `true`)
    KeywordValue,
    /// Keyspace, table or index name
    Identifier,
    /// Column name
    ColumnName,
    /// Symbol such as `*` or `(`
    Operator,
    /// Placeholder for a grammar branch that has no completion yet
    NotSupported,
}

/// A lexical unit participating in a query.
///
/// Parts order by their display string first, so any sorted collection of
/// parts reads alphabetically. The kind only breaks ties.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CqlPart {
    part_type: CqlType,
    part: String,
}

impl CqlPart {
    /// Keyword, stored lower-cased
    pub fn keyword(text: &str) -> Self {
        Self {
            part_type: CqlType::Keyword,
            part: text.to_lowercase(),
        }
    }

    /// Keyword value, stored lower-cased
    pub fn keyword_value(text: &str) -> Self {
        Self {
            part_type: CqlType::KeywordValue,
            part: text.to_lowercase(),
        }
    }

    /// Keyspace, table or index name, case preserved
    pub fn identifier(text: impl Into<String>) -> Self {
        Self {
            part_type: CqlType::Identifier,
            part: text.into(),
        }
    }

    /// Column name, case preserved
    pub fn column(text: impl Into<String>) -> Self {
        Self {
            part_type: CqlType::ColumnName,
            part: text.into(),
        }
    }

    pub fn operator(symbol: &str) -> Self {
        Self {
            part_type: CqlType::Operator,
            part: symbol.to_string(),
        }
    }

    /// Informational placeholder carrying a human-readable message
    pub fn not_supported(message: impl Into<String>) -> Self {
        Self {
            part_type: CqlType::NotSupported,
            part: message.into(),
        }
    }

    pub fn part_type(&self) -> CqlType {
        self.part_type
    }

    /// Text shown to the user in a suggestion list
    pub fn to_display_string(&self) -> &str {
        &self.part
    }
}

impl Ord for CqlPart {
    fn cmp(&self, other: &Self) -> Ordering {
        self.part
            .cmp(&other.part)
            .then_with(|| self.part_type.cmp(&other.part_type))
    }
}

impl PartialOrd for CqlPart {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CqlPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_lower_cased() {
        let part = CqlPart::keyword("DROP INDEX");
        assert_eq!(part.to_display_string(), "drop index");
        assert_eq!(part.part_type(), CqlType::Keyword);
    }

    #[test]
    fn test_identifier_keeps_case() {
        let part = CqlPart::identifier("MyTable");
        assert_eq!(part.to_display_string(), "MyTable");
    }

    #[test]
    fn test_order_is_display_first() {
        let mut parts = vec![
            CqlPart::keyword("where"),
            CqlPart::column("age"),
            CqlPart::keyword("from"),
        ];
        parts.sort();
        let shown: Vec<_> = parts.iter().map(|p| p.to_display_string()).collect();
        assert_eq!(shown, vec!["age", "from", "where"]);
    }

    #[test]
    fn test_same_text_different_kind_are_distinct() {
        let kw = CqlPart::keyword("true");
        let val = CqlPart::keyword_value("true");
        assert_ne!(kw, val);
        assert_eq!(kw.cmp(&val), Ordering::Less);
    }
}
