use std::sync::Arc;

use crate::completion::schema::SchemaProvider;
use crate::model::{CqlCompletion, CqlPart, CqlQuery, KeywordDef};
use crate::parser::TokenStream;

use super::{MarkerBasedCompletion, add_names};

/// Object kind removed by a `drop` statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Keyspace,
    Table,
    Index,
}

/// Suggestions right after `drop keyspace|table|index`.
///
/// Offers `if exists` until it has been typed, plus the names of the
/// objects of the dropped kind.
pub struct DropCompletion {
    marker: CqlPart,
    target: DropTarget,
    schema: Arc<dyn SchemaProvider>,
}

impl DropCompletion {
    pub fn new(marker: &CqlPart, target: DropTarget, schema: Arc<dyn SchemaProvider>) -> Self {
        Self {
            marker: marker.clone(),
            target,
            schema,
        }
    }

    pub fn target(&self) -> DropTarget {
        self.target
    }
}

impl MarkerBasedCompletion for DropCompletion {
    fn start_marker(&self) -> &CqlPart {
        &self.marker
    }

    fn completion(&self, query: &CqlQuery) -> CqlCompletion {
        let stream = TokenStream::full(query.raw());
        let if_exists = KeywordDef::IfExists.value();
        let typed_if_exists = stream.keywords_after(&self.marker).any(|k| k == if_exists);

        let names = match self.target {
            DropTarget::Keyspace => self.schema.keyspaces(),
            DropTarget::Table => self.schema.tables(),
            DropTarget::Index => self.schema.indexes(),
        };

        let mut builder = add_names(
            CqlCompletion::builder(),
            names.into_iter().map(CqlPart::identifier),
        );
        if !typed_if_exists {
            builder = builder.all(if_exists.clone());
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::schema::StaticSchema;
    use crate::config::Config;

    fn schema() -> Arc<dyn SchemaProvider> {
        let config = Config::from_toml_str(
            r#"
[[schema.keyspaces]]
name = "shop"

[[schema.keyspaces.tables]]
name = "users"
indexes = ["users_by_email", "users_by_city"]
"#,
        )
        .unwrap();
        Arc::new(StaticSchema::new(&config.schema))
    }

    fn drop_index() -> DropCompletion {
        DropCompletion::new(KeywordDef::DropIndex.value(), DropTarget::Index, schema())
    }

    #[test]
    fn test_drop_index_offers_indexes_and_if_exists() {
        let completion = drop_index().completion(&CqlQuery::unknown("DROP INDEX "));
        assert_eq!(
            completion.display_strings(),
            vec!["if exists", "users_by_city", "users_by_email"]
        );
    }

    #[test]
    fn test_if_exists_omitted_once_typed() {
        let completion = drop_index().completion(&CqlQuery::unknown("drop index if exists "));
        assert!(!completion.contains_display("if exists"));
        assert_eq!(completion.len(), 2);
    }

    #[test]
    fn test_qualified_tables_only_in_full_set() {
        let matcher = DropCompletion::new(KeywordDef::DropTable.value(), DropTarget::Table, schema());
        let completion = matcher.completion(&CqlQuery::unknown("drop table "));
        assert_eq!(
            completion.display_strings(),
            vec!["if exists", "shop.users", "users"]
        );
        assert_eq!(completion.min_display_strings(), vec!["if exists", "users"]);
    }

    #[test]
    fn test_empty_schema_still_suggests() {
        let matcher = DropCompletion::new(
            KeywordDef::DropTable.value(),
            DropTarget::Table,
            Arc::new(StaticSchema::empty()),
        );
        let completion = matcher.completion(&CqlQuery::unknown("drop table "));
        assert_eq!(completion.display_strings(), vec!["if exists"]);
        assert_eq!(matcher.target(), DropTarget::Table);
    }
}
