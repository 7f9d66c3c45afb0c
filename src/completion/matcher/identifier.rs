use std::sync::Arc;

use crate::completion::schema::SchemaProvider;
use crate::model::{CqlCompletion, CqlPart, CqlQuery};
use crate::parser::TokenStream;

use super::{MarkerBasedCompletion, add_names};

/// Where identifier suggestions come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierSource {
    Keyspaces,
    Tables,
    /// Columns of the table named after `table_marker`
    Columns { table_marker: &'static CqlPart },
    Indexes,
}

/// Schema names plus fixed keywords
pub struct IdentifierCompletion {
    marker: CqlPart,
    sources: Vec<IdentifierSource>,
    keywords: Vec<CqlPart>,
    schema: Arc<dyn SchemaProvider>,
}

impl IdentifierCompletion {
    pub fn new(marker: &CqlPart, schema: Arc<dyn SchemaProvider>) -> Self {
        Self {
            marker: marker.clone(),
            sources: Vec::new(),
            keywords: Vec::new(),
            schema,
        }
    }

    pub fn with_source(mut self, source: IdentifierSource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn with_keywords<'a, I>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = &'a CqlPart>,
    {
        self.keywords.extend(keywords.into_iter().cloned());
        self
    }

    fn names(&self, source: IdentifierSource, stream: &TokenStream) -> Vec<CqlPart> {
        match source {
            IdentifierSource::Keyspaces => {
                self.schema.keyspaces().into_iter().map(CqlPart::identifier).collect()
            }
            IdentifierSource::Tables => {
                self.schema.tables().into_iter().map(CqlPart::identifier).collect()
            }
            IdentifierSource::Columns { table_marker } => {
                let table = stream.identifier_after(table_marker);
                self.schema
                    .columns(table.as_deref())
                    .into_iter()
                    .map(CqlPart::column)
                    .collect()
            }
            IdentifierSource::Indexes => {
                self.schema.indexes().into_iter().map(CqlPart::identifier).collect()
            }
        }
    }
}

impl MarkerBasedCompletion for IdentifierCompletion {
    fn start_marker(&self) -> &CqlPart {
        &self.marker
    }

    fn completion(&self, query: &CqlQuery) -> CqlCompletion {
        let stream = TokenStream::full(query.raw());

        let mut builder = CqlCompletion::builder().all_of(self.keywords.iter().cloned());
        for source in &self.sources {
            builder = add_names(builder, self.names(*source, &stream));
        }
        builder.build()
    }
}
