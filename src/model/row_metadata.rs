//! Result-side column metadata

use serde::Serialize;

/// Role of a column within its table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnRole {
    PartitionKey,
    Clustering,
    Regular,
}

/// Column name enriched with its role and declared type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CqlExtendedColumnName {
    pub name: String,
    pub role: ColumnRole,
    pub data_type: Option<String>,
}

/// Partition key columns in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CqlPartitionKey {
    pub columns: Vec<String>,
}

/// Columns of a result in exactly the order the table declares them.
///
/// `partition_key` is `None` when it is not known.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CqlRowMetadata {
    columns: Vec<CqlExtendedColumnName>,
    partition_key: Option<CqlPartitionKey>,
}

impl CqlRowMetadata {
    pub fn new(columns: Vec<CqlExtendedColumnName>, partition_key: Option<CqlPartitionKey>) -> Self {
        Self {
            columns,
            partition_key,
        }
    }

    /// Canonical empty value
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[CqlExtendedColumnName] {
        &self.columns
    }

    pub fn partition_key(&self) -> Option<&CqlPartitionKey> {
        self.partition_key.as_ref()
    }
}
