use std::sync::Arc;

use super::{keywords, names, values};
use crate::completion::decision::DecisionListSupport;
use crate::completion::matcher::{
    DropCompletion, DropTarget, IdentifierSource, KeywordCompletion, Matcher,
};
use crate::completion::schema::SchemaProvider;
use crate::model::{CqlPart, CqlQueryName, KeywordDef, KeywordValueDef};

use KeywordDef::*;

const TABLE_OPTIONS: [KeywordDef; 8] = [
    ClusteringOrderBy,
    CompactStorage,
    Comment,
    GcGraceSeconds,
    DefaultTimeToLive,
    Compaction,
    Compression,
    Caching,
];

pub(super) fn decision_lists(schema: &Arc<dyn SchemaProvider>) -> Vec<DecisionListSupport> {
    let keyspace_options = KeyspaceOptions::new();
    let table_options = TableOptions::new();

    vec![
        create_keyspace(&keyspace_options),
        alter_keyspace(&keyspace_options, schema),
        create_table(&table_options),
        alter_table(&table_options, schema),
        create_index(schema),
        drop_statement(DropKeyspace, DropTarget::Keyspace, CqlQueryName::DropKeyspace, schema),
        drop_statement(DropTable, DropTarget::Table, CqlQueryName::DropTable, schema),
        drop_statement(DropIndex, DropTarget::Index, CqlQueryName::DropIndex, schema),
        use_keyspace(schema),
    ]
}

/// `with replication = {...} and durable_writes = ...`, shared by CREATE and
/// ALTER KEYSPACE
struct KeyspaceOptions {
    with: Matcher,
    replication: Matcher,
    and: Matcher,
    durable_writes: Matcher,
}

impl KeyspaceOptions {
    fn new() -> Self {
        let durable_writes = KeywordValueDef::DurableWrites.value();

        let strategy = [
            KeywordValueDef::Class,
            KeywordValueDef::SimpleStrategy,
            KeywordValueDef::NetworkTopologyStrategy,
            KeywordValueDef::OldNetworkTopologyStrategy,
            KeywordValueDef::ReplicationFactor,
        ];
        let replication = KeywordCompletion::new(
            Replication.value(),
            strategy
                .iter()
                .map(|v| v.value())
                .chain([And.value()]),
        );

        Self {
            with: Arc::new(KeywordCompletion::new(
                With.value(),
                [Replication.value(), durable_writes],
            )),
            replication: Arc::new(replication),
            and: Arc::new(KeywordCompletion::new(And.value(), [durable_writes])),
            durable_writes: Arc::new(KeywordCompletion::new(
                durable_writes,
                [KeywordValueDef::True.value(), KeywordValueDef::False.value()],
            )),
        }
    }

    /// Positions following the statement keyword
    fn positions(&self) -> Vec<Vec<Matcher>> {
        vec![
            vec![Arc::clone(&self.with)],
            vec![Arc::clone(&self.replication), Arc::clone(&self.and)],
            vec![Arc::clone(&self.durable_writes)],
        ]
    }
}

/// `with <option> = ... and <option> = ...`, shared by CREATE and ALTER TABLE
struct TableOptions {
    with: Matcher,
    and: Matcher,
}

impl TableOptions {
    fn new() -> Self {
        Self {
            with: keywords(With.value(), &TABLE_OPTIONS),
            and: keywords(And.value(), &TABLE_OPTIONS),
        }
    }
}

fn create_keyspace(options: &KeyspaceOptions) -> DecisionListSupport {
    let mut list = vec![vec![keywords(CreateKeyspace.value(), &[IfNotExists, With])]];
    list.extend(options.positions());

    DecisionListSupport::new(CqlQueryName::CreateKeyspace, CreateKeyspace.value(), list)
}

fn alter_keyspace(options: &KeyspaceOptions, schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let alter: Matcher = Arc::new(
        names(AlterKeyspace.value(), schema)
            .with_source(IdentifierSource::Keyspaces)
            .with_keywords(values(&[With])),
    );
    let mut list = vec![vec![alter]];
    list.extend(options.positions());

    DecisionListSupport::new(CqlQueryName::AlterKeyspace, AlterKeyspace.value(), list)
}

fn create_table(options: &TableOptions) -> DecisionListSupport {
    let open_paren = CqlPart::operator("(");

    let create: Matcher = Arc::new(KeywordCompletion::new(
        CreateTable.value(),
        [IfNotExists.value(), &open_paren],
    ));
    let definitions: Matcher = Arc::new(KeywordCompletion::new(
        &open_paren,
        KeywordDef::DATA_TYPES
            .iter()
            .map(|d| d.value())
            .chain([PrimaryKey.value()]),
    ));

    DecisionListSupport::new(
        CqlQueryName::CreateTable,
        CreateTable.value(),
        vec![
            vec![create],
            vec![definitions],
            vec![
                Arc::clone(&options.with),
                Arc::clone(&options.and),
                // clustering order by (...)
                keywords(&open_paren, &[Asc, Desc]),
            ],
        ],
    )
}

fn alter_table(options: &TableOptions, schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let columns = IdentifierSource::Columns {
        table_marker: AlterTable.value(),
    };

    let alter_table: Matcher = Arc::new(
        names(AlterTable.value(), schema)
            .with_source(IdentifierSource::Tables)
            .with_keywords(values(&[Add, Drop, Alter, Rename, With])),
    );
    let drop_column: Matcher = Arc::new(names(Drop.value(), schema).with_source(columns));
    let alter_column: Matcher = Arc::new(
        names(Alter.value(), schema)
            .with_source(columns)
            .with_keywords(values(&[Type])),
    );
    let rename_column: Matcher = Arc::new(
        names(Rename.value(), schema)
            .with_source(columns)
            .with_keywords(values(&[To])),
    );

    DecisionListSupport::new(
        CqlQueryName::AlterTable,
        AlterTable.value(),
        vec![
            vec![alter_table],
            vec![
                keywords(Add.value(), &KeywordDef::DATA_TYPES),
                drop_column,
                alter_column,
                rename_column,
                Arc::clone(&options.with),
                Arc::clone(&options.and),
            ],
        ],
    )
}

fn create_index(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let on: Matcher = Arc::new(
        names(On.value(), schema)
            .with_source(IdentifierSource::Tables)
            .with_keywords([&CqlPart::operator("(")]),
    );
    let column: Matcher = Arc::new(
        names(&CqlPart::operator("("), schema).with_source(IdentifierSource::Columns {
            table_marker: On.value(),
        }),
    );

    DecisionListSupport::new(
        CqlQueryName::CreateIndex,
        CreateIndex.value(),
        vec![
            vec![keywords(CreateIndex.value(), &[IfNotExists, On])],
            vec![on],
            vec![column],
        ],
    )
}

/// One-position list: `[[DropCompletion]]`
fn drop_statement(
    statement: KeywordDef,
    target: DropTarget,
    query_name: CqlQueryName,
    schema: &Arc<dyn SchemaProvider>,
) -> DecisionListSupport {
    let drop: Matcher = Arc::new(DropCompletion::new(statement.value(), target, Arc::clone(schema)));

    DecisionListSupport::new(query_name, statement.value(), vec![vec![drop]])
}

fn use_keyspace(schema: &Arc<dyn SchemaProvider>) -> DecisionListSupport {
    let use_keyspace: Matcher = Arc::new(
        names(Use.value(), schema).with_source(IdentifierSource::Keyspaces),
    );

    DecisionListSupport::new(CqlQueryName::Use, Use.value(), vec![vec![use_keyspace]])
}
