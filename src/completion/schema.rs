//! Schema names for identifier suggestions
//!
//! This module provides the trait schema-aware matchers read keyspace,
//! table, column and index names from, and an implementation backed by the
//! `[schema]` configuration section.

use crate::config::{KeyspaceConfig, SchemaConfig, TableConfig};
use crate::model::{
    ColumnRole, CqlExtendedColumnName, CqlPartitionKey, CqlRowMetadata,
};

/// Trait for providing schema names
///
/// Implementations are shared by every completion request and must not
/// change what they return while a request is running.
pub trait SchemaProvider: Send + Sync {
    /// Get keyspace names
    fn keyspaces(&self) -> Vec<String>;

    /// Get table names, both bare and keyspace-qualified
    fn tables(&self) -> Vec<String>;

    /// Get column names of `table`; every known column when the table is
    /// `None` or unknown
    fn columns(&self, table: Option<&str>) -> Vec<String>;

    /// Get secondary index names
    fn indexes(&self) -> Vec<String>;
}

/// Schema defined up front in the configuration file
#[derive(Debug, Clone, Default)]
pub struct StaticSchema {
    keyspaces: Vec<KeyspaceConfig>,
}

impl StaticSchema {
    pub fn new(config: &SchemaConfig) -> Self {
        Self {
            keyspaces: config.keyspaces.clone(),
        }
    }

    /// Schema that knows no names
    pub fn empty() -> Self {
        Self::default()
    }

    /// Find a table by `name` or `keyspace.name`, ignoring case
    fn find_table(&self, name: &str) -> Option<&TableConfig> {
        let (keyspace, table) = match name.split_once('.') {
            Some((ks, t)) => (Some(ks), t),
            None => (None, name),
        };

        self.keyspaces
            .iter()
            .filter(|ks| keyspace.is_none_or(|wanted| ks.name.eq_ignore_ascii_case(wanted)))
            .flat_map(|ks| ks.tables.iter())
            .find(|t| t.name.eq_ignore_ascii_case(table))
    }

    fn all_tables(&self) -> impl Iterator<Item = (&KeyspaceConfig, &TableConfig)> {
        self.keyspaces
            .iter()
            .flat_map(|ks| ks.tables.iter().map(move |t| (ks, t)))
    }

    /// Result columns of `table` in declaration order; empty when unknown
    pub fn row_metadata(&self, table: &str) -> CqlRowMetadata {
        let Some(table) = self.find_table(table) else {
            return CqlRowMetadata::empty();
        };

        let is_in = |keys: &[String], name: &str| keys.iter().any(|k| k.eq_ignore_ascii_case(name));

        let columns = table
            .columns
            .iter()
            .map(|column| {
                let role = if is_in(&table.partition_key, &column.name) {
                    ColumnRole::PartitionKey
                } else if is_in(&table.clustering, &column.name) {
                    ColumnRole::Clustering
                } else {
                    ColumnRole::Regular
                };
                CqlExtendedColumnName {
                    name: column.name.clone(),
                    role,
                    data_type: column.data_type.clone(),
                }
            })
            .collect();

        let partition_key = (!table.partition_key.is_empty()).then(|| CqlPartitionKey {
            columns: table.partition_key.clone(),
        });

        CqlRowMetadata::new(columns, partition_key)
    }
}

impl SchemaProvider for StaticSchema {
    fn keyspaces(&self) -> Vec<String> {
        self.keyspaces.iter().map(|ks| ks.name.clone()).collect()
    }

    fn tables(&self) -> Vec<String> {
        self.all_tables()
            .flat_map(|(ks, t)| [t.name.clone(), format!("{}.{}", ks.name, t.name)])
            .collect()
    }

    fn columns(&self, table: Option<&str>) -> Vec<String> {
        match table.and_then(|name| self.find_table(name)) {
            Some(table) => table.columns.iter().map(|c| c.name.clone()).collect(),
            None => self
                .all_tables()
                .flat_map(|(_, t)| t.columns.iter().map(|c| c.name.clone()))
                .collect(),
        }
    }

    fn indexes(&self) -> Vec<String> {
        self.all_tables()
            .flat_map(|(_, t)| t.indexes.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn schema() -> StaticSchema {
        let config = Config::from_toml_str(
            r#"
[[schema.keyspaces]]
name = "shop"

[[schema.keyspaces.tables]]
name = "orders"
partition_key = ["customer"]
clustering = ["placed_at"]
indexes = ["orders_by_status"]
columns = [
    { name = "customer", type = "uuid" },
    { name = "placed_at", type = "timestamp" },
    { name = "status" },
]

[[schema.keyspaces]]
name = "auth"

[[schema.keyspaces.tables]]
name = "users"
columns = [{ name = "login", type = "text" }]
"#,
        )
        .unwrap();
        StaticSchema::new(&config.schema)
    }

    #[test]
    fn test_tables_are_bare_and_qualified() {
        let tables = schema().tables();
        assert!(tables.contains(&"orders".to_string()));
        assert!(tables.contains(&"shop.orders".to_string()));
        assert!(tables.contains(&"auth.users".to_string()));
    }

    #[test]
    fn test_columns_of_known_table() {
        let schema = schema();
        assert_eq!(
            schema.columns(Some("SHOP.Orders")),
            vec!["customer", "placed_at", "status"]
        );
        assert_eq!(schema.columns(Some("users")), vec!["login"]);
    }

    #[test]
    fn test_unresolved_table_offers_every_column() {
        let schema = schema();
        assert_eq!(schema.columns(None).len(), 4);
        assert_eq!(schema.columns(Some("nope")).len(), 4);
        assert_eq!(schema.columns(Some("auth.orders")).len(), 4);
    }

    #[test]
    fn test_row_metadata_roles() {
        let metadata = schema().row_metadata("orders");
        let roles: Vec<_> = metadata.columns().iter().map(|c| c.role).collect();
        assert_eq!(
            roles,
            vec![ColumnRole::PartitionKey, ColumnRole::Clustering, ColumnRole::Regular]
        );
        assert_eq!(
            metadata.partition_key().map(|k| k.columns.clone()),
            Some(vec!["customer".to_string()])
        );
    }

    #[test]
    fn test_row_metadata_unknown_table_is_empty() {
        assert_eq!(schema().row_metadata("missing"), CqlRowMetadata::empty());
        assert!(schema().row_metadata("users").partition_key().is_none());
    }

    #[test]
    fn test_empty_schema() {
        let schema = StaticSchema::empty();
        assert!(schema.keyspaces().is_empty());
        assert!(schema.tables().is_empty());
        assert!(schema.columns(None).is_empty());
        assert!(schema.indexes().is_empty());
    }
}
