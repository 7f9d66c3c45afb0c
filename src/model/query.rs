//! Query representation: a classified statement type plus raw text.

use std::fmt;

use serde::Serialize;

/// Statement types the classifier can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CqlQueryName {
    Select,
    Insert,
    Update,
    Delete,
    CreateKeyspace,
    AlterKeyspace,
    DropKeyspace,
    CreateTable,
    AlterTable,
    DropTable,
    Truncate,
    CreateIndex,
    DropIndex,
    Use,
    Batch,
    /// Not classified (yet)
    Unknown,
}

impl CqlQueryName {
    /// Every classifiable statement type, `Unknown` excluded
    pub const ALL: [CqlQueryName; 15] = [
        CqlQueryName::Select,
        CqlQueryName::Insert,
        CqlQueryName::Update,
        CqlQueryName::Delete,
        CqlQueryName::CreateKeyspace,
        CqlQueryName::AlterKeyspace,
        CqlQueryName::DropKeyspace,
        CqlQueryName::CreateTable,
        CqlQueryName::AlterTable,
        CqlQueryName::DropTable,
        CqlQueryName::Truncate,
        CqlQueryName::CreateIndex,
        CqlQueryName::DropIndex,
        CqlQueryName::Use,
        CqlQueryName::Batch,
    ];

    pub const fn as_str(self) -> &'static str {
        use CqlQueryName::*;
        match self {
            Select => "SELECT",
            Insert => "INSERT",
            Update => "UPDATE",
            Delete => "DELETE",
            CreateKeyspace => "CREATE_KEYSPACE",
            AlterKeyspace => "ALTER_KEYSPACE",
            DropKeyspace => "DROP_KEYSPACE",
            CreateTable => "CREATE_TABLE",
            AlterTable => "ALTER_TABLE",
            DropTable => "DROP_TABLE",
            Truncate => "TRUNCATE",
            CreateIndex => "CREATE_INDEX",
            DropIndex => "DROP_INDEX",
            Use => "USE",
            Batch => "BATCH",
            Unknown => "UNKNOWN",
        }
    }

    /// One-line syntax synopsis shown next to the suggestions
    pub const fn synopsis(self) -> &'static str {
        use CqlQueryName::*;
        match self {
            Select => {
                "SELECT <columns> FROM <table> [WHERE <cond> [AND ...]] [ORDER BY <col>] [LIMIT <n>] [ALLOW FILTERING]"
            }
            Insert => {
                "INSERT INTO <table> (<columns>) VALUES (<values>) [IF NOT EXISTS] [USING TTL <n> [AND TIMESTAMP <n>]]"
            }
            Update => {
                "UPDATE <table> [USING TTL <n>] SET <col> = <value> [, ...] WHERE <cond> [IF EXISTS]"
            }
            Delete => "DELETE [<columns>] FROM <table> [USING TIMESTAMP <n>] WHERE <cond>",
            CreateKeyspace => {
                "CREATE KEYSPACE [IF NOT EXISTS] <name> WITH REPLICATION = {...} [AND DURABLE_WRITES = <bool>]"
            }
            AlterKeyspace => {
                "ALTER KEYSPACE <name> WITH REPLICATION = {...} [AND DURABLE_WRITES = <bool>]"
            }
            DropKeyspace => "DROP KEYSPACE [IF EXISTS] <name>",
            CreateTable => {
                "CREATE TABLE [IF NOT EXISTS] <name> (<col> <type>, ..., PRIMARY KEY (...)) [WITH <option> [AND ...]]"
            }
            AlterTable => "ALTER TABLE <name> (ADD <col> <type> | DROP <col> | WITH <option>)",
            DropTable => "DROP TABLE [IF EXISTS] <name>",
            Truncate => "TRUNCATE <table>",
            CreateIndex => "CREATE INDEX [IF NOT EXISTS] [<name>] ON <table> (<column>)",
            DropIndex => "DROP INDEX [IF EXISTS] <name>",
            Use => "USE <keyspace>",
            Batch => "BEGIN BATCH <statements> APPLY BATCH",
            Unknown => "",
        }
    }
}

impl fmt::Display for CqlQueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statement type plus the raw text the user typed.
///
/// Built fresh for every keystroke and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CqlQuery {
    query_name: CqlQueryName,
    raw: String,
}

impl CqlQuery {
    pub fn new(query_name: CqlQueryName, raw: impl Into<String>) -> Self {
        Self {
            query_name,
            raw: raw.into(),
        }
    }

    /// Query whose statement type has not been determined
    pub fn unknown(raw: impl Into<String>) -> Self {
        Self::new(CqlQueryName::Unknown, raw)
    }

    pub fn query_name(&self) -> CqlQueryName {
        self.query_name
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for CqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.query_name, self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_excludes_unknown() {
        assert!(!CqlQueryName::ALL.contains(&CqlQueryName::Unknown));
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CqlQueryName::DropIndex.to_string(), "DROP_INDEX");
        assert_eq!(CqlQueryName::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_every_statement_has_synopsis() {
        for name in CqlQueryName::ALL {
            assert!(!name.synopsis().is_empty(), "{name} has no synopsis");
        }
    }

    #[test]
    fn test_query_accessors() {
        let query = CqlQuery::unknown("drop index ");
        assert_eq!(query.query_name(), CqlQueryName::Unknown);
        assert_eq!(query.raw(), "drop index ");
    }
}
