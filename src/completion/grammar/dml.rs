use std::sync::Arc;

use super::{keywords, names, values};
use crate::completion::decision::DecisionListSupport;
use crate::completion::matcher::{
    IdentifierSource, KeywordCompletion, Matcher, NotSupportedCompletion,
};
use crate::completion::schema::SchemaProvider;
use crate::model::{CqlPart, CqlQueryName, KeywordDef};

use KeywordDef::*;

pub(super) fn decision_lists(schema: &Arc<dyn SchemaProvider>) -> Vec<DecisionListSupport> {
    vec![
        select(schema),
        insert(schema),
        update(schema),
        delete(schema),
        truncate(schema),
        batch(),
    ]
}

/// Predicates after `where` / `and`, columns of the table named after `table`
fn where_clause(
    marker: KeywordDef,
    table: KeywordDef,
    extra: &[KeywordDef],
    schema: &Arc<dyn SchemaProvider>,
) -> Matcher {
    Arc::new(
        names(marker.value(), schema)
            .with_source(IdentifierSource::Columns {
                table_marker: table.value(),
            })
            .with_keywords(values(&[And, In]))
            .with_keywords(values(extra)),
    )
}

fn select(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let columns = IdentifierSource::Columns {
        table_marker: From.value(),
    };

    let select: Matcher = Arc::new(
        names(Select.value(), schema)
            .with_source(columns)
            .with_keywords(values(&[Distinct, Count, Writetime, Ttl, Token, From]))
            .with_keywords([&CqlPart::operator("*")]),
    );
    let from: Matcher = Arc::new(
        names(From.value(), schema)
            .with_source(IdentifierSource::Tables)
            .with_keywords(values(&[Where, OrderBy, Limit, AllowFiltering])),
    );

    let tail = [Token, OrderBy, Limit, AllowFiltering];
    let order_by: Matcher = Arc::new(
        names(OrderBy.value(), schema)
            .with_source(columns)
            .with_keywords(values(&[Asc, Desc, Limit, AllowFiltering])),
    );

    DecisionListSupport::new(
        CqlQueryName::Select,
        Select.value(),
        vec![
            vec![select],
            vec![from],
            vec![
                where_clause(Where, From, &tail, schema),
                where_clause(And, From, &tail, schema),
            ],
            vec![
                order_by,
                keywords(Limit.value(), &[AllowFiltering]),
                keywords(AllowFiltering.value(), &[]),
            ],
        ],
    )
}

fn insert(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let open_paren = CqlPart::operator("(");

    let insert_into: Matcher = Arc::new(
        names(InsertInto.value(), schema)
            .with_source(IdentifierSource::Tables)
            .with_keywords([&open_paren]),
    );
    let column_list: Matcher = Arc::new(
        names(&open_paren, schema)
            .with_source(IdentifierSource::Columns {
                table_marker: InsertInto.value(),
            })
            .with_keywords(values(&[Values])),
    );
    let values_list: Matcher = Arc::new(KeywordCompletion::new(Values.value(), [&open_paren]));

    DecisionListSupport::new(
        CqlQueryName::Insert,
        InsertInto.value(),
        vec![
            vec![insert_into],
            vec![column_list],
            vec![values_list],
            vec![
                keywords(&open_paren, &[IfNotExists, Using]),
                keywords(IfNotExists.value(), &[Using]),
                keywords(Using.value(), &[Ttl, Timestamp]),
                keywords(And.value(), &[Ttl, Timestamp]),
            ],
        ],
    )
}

fn update(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let update: Matcher = Arc::new(
        names(Update.value(), schema)
            .with_source(IdentifierSource::Tables)
            .with_keywords(values(&[Using, Set])),
    );
    let set: Matcher = Arc::new(
        names(Set.value(), schema)
            .with_source(IdentifierSource::Columns {
                table_marker: Update.value(),
            })
            .with_keywords(values(&[Where])),
    );

    let ttl_or_timestamp = [Ttl, Timestamp, And, Set];

    DecisionListSupport::new(
        CqlQueryName::Update,
        Update.value(),
        vec![
            vec![update],
            vec![
                keywords(Using.value(), &ttl_or_timestamp),
                keywords(And.value(), &ttl_or_timestamp),
            ],
            vec![set],
            vec![
                where_clause(Where, Update, &[IfExists], schema),
                where_clause(And, Update, &[IfExists], schema),
            ],
        ],
    )
}

fn delete(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let delete: Matcher = Arc::new(
        names(Delete.value(), schema)
            .with_source(IdentifierSource::Columns {
                table_marker: From.value(),
            })
            .with_keywords(values(&[From])),
    );
    let from: Matcher = Arc::new(
        names(From.value(), schema)
            .with_source(IdentifierSource::Tables)
            .with_keywords(values(&[Using, Where])),
    );

    DecisionListSupport::new(
        CqlQueryName::Delete,
        Delete.value(),
        vec![
            vec![delete],
            vec![from],
            vec![keywords(Using.value(), &[Timestamp, Where])],
            vec![
                where_clause(Where, From, &[IfExists], schema),
                where_clause(And, From, &[IfExists], schema),
            ],
        ],
    )
}

fn truncate(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let truncate: Matcher = Arc::new(
        names(Truncate.value(), schema).with_source(IdentifierSource::Tables),
    );

    DecisionListSupport::new(CqlQueryName::Truncate, Truncate.value(), vec![vec![truncate]])
}

fn batch() -> DecisionListSupport {
    let batch: Matcher = Arc::new(NotSupportedCompletion::new(BeginBatch.value(), "BATCH"));

    DecisionListSupport::new(CqlQueryName::Batch, BeginBatch.value(), vec![vec![batch]])
}
