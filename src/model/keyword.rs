//! Closed CQL vocabulary.
//!
//! Every keyword and keyword value the engine knows is listed here once.
//! The parts are built on first access, lower-cased, and shared for the
//! lifetime of the process. Lookups are case-insensitive and keyed by the
//! lower-cased literal.
//!
//! Multi-word keywords (`drop index`, `if not exists`) are single entries;
//! the lexer merges the words back into one token.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::part::CqlPart;

/// Known CQL keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordDef {
    // Statement starters
    Select,
    InsertInto,
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
    BeginBatch,

    // Clauses
    From,
    Where,
    And,
    In,
    OrderBy,
    Asc,
    Desc,
    Limit,
    AllowFiltering,
    Distinct,
    Count,
    Writetime,
    Ttl,
    Token,
    Values,
    Using,
    Timestamp,
    IfNotExists,
    IfExists,
    Set,
    With,
    Replication,
    On,
    Add,
    Alter,
    Drop,
    Rename,
    To,
    Type,
    PrimaryKey,
    ClusteringOrderBy,
    CompactStorage,
    Comment,
    GcGraceSeconds,
    DefaultTimeToLive,
    Compaction,
    Compression,
    Caching,

    // Data types
    Ascii,
    Bigint,
    Blob,
    Boolean,
    Counter,
    Decimal,
    Double,
    Float,
    Inet,
    Int,
    Text,
    Timeuuid,
    Uuid,
    Varchar,
    Varint,
    List,
    Map,
}

impl KeywordDef {
    /// Every keyword, in declaration order
    pub const ALL: [KeywordDef; 70] = [
        KeywordDef::Select,
        KeywordDef::InsertInto,
        KeywordDef::Update,
        KeywordDef::Delete,
        KeywordDef::CreateKeyspace,
        KeywordDef::AlterKeyspace,
        KeywordDef::DropKeyspace,
        KeywordDef::CreateTable,
        KeywordDef::AlterTable,
        KeywordDef::DropTable,
        KeywordDef::Truncate,
        KeywordDef::CreateIndex,
        KeywordDef::DropIndex,
        KeywordDef::Use,
        KeywordDef::BeginBatch,
        KeywordDef::From,
        KeywordDef::Where,
        KeywordDef::And,
        KeywordDef::In,
        KeywordDef::OrderBy,
        KeywordDef::Asc,
        KeywordDef::Desc,
        KeywordDef::Limit,
        KeywordDef::AllowFiltering,
        KeywordDef::Distinct,
        KeywordDef::Count,
        KeywordDef::Writetime,
        KeywordDef::Ttl,
        KeywordDef::Token,
        KeywordDef::Values,
        KeywordDef::Using,
        KeywordDef::Timestamp,
        KeywordDef::IfNotExists,
        KeywordDef::IfExists,
        KeywordDef::Set,
        KeywordDef::With,
        KeywordDef::Replication,
        KeywordDef::On,
        KeywordDef::Add,
        KeywordDef::Alter,
        KeywordDef::Drop,
        KeywordDef::Rename,
        KeywordDef::To,
        KeywordDef::Type,
        KeywordDef::PrimaryKey,
        KeywordDef::ClusteringOrderBy,
        KeywordDef::CompactStorage,
        KeywordDef::Comment,
        KeywordDef::GcGraceSeconds,
        KeywordDef::DefaultTimeToLive,
        KeywordDef::Compaction,
        KeywordDef::Compression,
        KeywordDef::Caching,
        KeywordDef::Ascii,
        KeywordDef::Bigint,
        KeywordDef::Blob,
        KeywordDef::Boolean,
        KeywordDef::Counter,
        KeywordDef::Decimal,
        KeywordDef::Double,
        KeywordDef::Float,
        KeywordDef::Inet,
        KeywordDef::Int,
        KeywordDef::Text,
        KeywordDef::Timeuuid,
        KeywordDef::Uuid,
        KeywordDef::Varchar,
        KeywordDef::Varint,
        KeywordDef::List,
        KeywordDef::Map,
    ];

    /// Column types offered inside table definitions
    pub const DATA_TYPES: [KeywordDef; 19] = [
        KeywordDef::Ascii,
        KeywordDef::Bigint,
        KeywordDef::Blob,
        KeywordDef::Boolean,
        KeywordDef::Counter,
        KeywordDef::Decimal,
        KeywordDef::Double,
        KeywordDef::Float,
        KeywordDef::Inet,
        KeywordDef::Int,
        KeywordDef::Text,
        KeywordDef::Timestamp,
        KeywordDef::Timeuuid,
        KeywordDef::Uuid,
        KeywordDef::Varchar,
        KeywordDef::Varint,
        KeywordDef::List,
        KeywordDef::Map,
        KeywordDef::Set,
    ];

    /// Literal text as written in a query
    pub const fn literal(self) -> &'static str {
        use KeywordDef::*;
        match self {
            Select => "select",
            InsertInto => "insert into",
            Update => "update",
            Delete => "delete",
            CreateKeyspace => "create keyspace",
            AlterKeyspace => "alter keyspace",
            DropKeyspace => "drop keyspace",
            CreateTable => "create table",
            AlterTable => "alter table",
            DropTable => "drop table",
            Truncate => "truncate",
            CreateIndex => "create index",
            DropIndex => "drop index",
            Use => "use",
            BeginBatch => "begin batch",
            From => "from",
            Where => "where",
            And => "and",
            In => "in",
            OrderBy => "order by",
            Asc => "asc",
            Desc => "desc",
            Limit => "limit",
            AllowFiltering => "allow filtering",
            Distinct => "distinct",
            Count => "count(*)",
            Writetime => "writetime",
            Ttl => "ttl",
            Token => "token",
            Values => "values",
            Using => "using",
            Timestamp => "timestamp",
            IfNotExists => "if not exists",
            IfExists => "if exists",
            Set => "set",
            With => "with",
            Replication => "replication",
            On => "on",
            Add => "add",
            Alter => "alter",
            Drop => "drop",
            Rename => "rename",
            To => "to",
            Type => "type",
            PrimaryKey => "primary key",
            ClusteringOrderBy => "clustering order by",
            CompactStorage => "compact storage",
            Comment => "comment",
            GcGraceSeconds => "gc_grace_seconds",
            DefaultTimeToLive => "default_time_to_live",
            Compaction => "compaction",
            Compression => "compression",
            Caching => "caching",
            Ascii => "ascii",
            Bigint => "bigint",
            Blob => "blob",
            Boolean => "boolean",
            Counter => "counter",
            Decimal => "decimal",
            Double => "double",
            Float => "float",
            Inet => "inet",
            Int => "int",
            Text => "text",
            Timeuuid => "timeuuid",
            Uuid => "uuid",
            Varchar => "varchar",
            Varint => "varint",
            List => "list",
            Map => "map",
        }
    }

    /// Shared part for this keyword
    pub fn value(self) -> &'static CqlPart {
        &KEYWORD_PARTS[self as usize]
    }
}

/// Known keyword values (replication options and boolean literals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordValueDef {
    Class,
    SimpleStrategy,
    ReplicationFactor,
    NetworkTopologyStrategy,
    DurableWrites,
    True,
    False,
    OldNetworkTopologyStrategy,
}

impl KeywordValueDef {
    pub const ALL: [KeywordValueDef; 8] = [
        KeywordValueDef::Class,
        KeywordValueDef::SimpleStrategy,
        KeywordValueDef::ReplicationFactor,
        KeywordValueDef::NetworkTopologyStrategy,
        KeywordValueDef::DurableWrites,
        KeywordValueDef::True,
        KeywordValueDef::False,
        KeywordValueDef::OldNetworkTopologyStrategy,
    ];

    /// Literal as declared; the shared part holds it lower-cased
    pub const fn literal(self) -> &'static str {
        use KeywordValueDef::*;
        match self {
            Class => "class",
            SimpleStrategy => "simplestrategy",
            ReplicationFactor => "replication_factor",
            NetworkTopologyStrategy => "networktopologystrategy",
            DurableWrites => "durable_writes",
            True => "true",
            False => "false",
            OldNetworkTopologyStrategy => "OldNetworkTopologyStrategy",
        }
    }

    pub fn value(self) -> &'static CqlPart {
        &VALUE_PARTS[self as usize]
    }
}

static KEYWORD_PARTS: LazyLock<Vec<CqlPart>> = LazyLock::new(|| {
    KeywordDef::ALL
        .iter()
        .map(|def| CqlPart::keyword(def.literal()))
        .collect()
});

static VALUE_PARTS: LazyLock<Vec<CqlPart>> = LazyLock::new(|| {
    KeywordValueDef::ALL
        .iter()
        .map(|def| CqlPart::keyword_value(def.literal()))
        .collect()
});

static VOCABULARY: LazyLock<HashMap<&'static str, &'static CqlPart>> = LazyLock::new(|| {
    let mut table = HashMap::new();
    for part in KEYWORD_PARTS.iter().chain(VALUE_PARTS.iter()) {
        table.insert(part.to_display_string(), part);
    }
    table
});

// Multi-word literals split into words, longest first.
static PHRASES: LazyLock<Vec<Vec<&'static str>>> = LazyLock::new(|| {
    let mut phrases: Vec<Vec<&'static str>> = KEYWORD_PARTS
        .iter()
        .map(|part| part.to_display_string())
        .filter(|text| text.contains(' '))
        .map(|text| text.split(' ').collect())
        .collect();
    phrases.sort_by(|a, b| b.len().cmp(&a.len()));
    phrases
});

/// Look up a keyword or keyword value by its literal text, ignoring case
pub fn lookup(text: &str) -> Option<&'static CqlPart> {
    VOCABULARY.get(text.to_lowercase().as_str()).copied()
}

/// Multi-word keywords whose first word is `first_word` (lower-cased),
/// longest phrase first
pub fn phrases_starting_with(first_word: &str) -> impl Iterator<Item = &'static [&'static str]> {
    let first_word = first_word.to_string();
    PHRASES
        .iter()
        .filter(move |words| words[0] == first_word)
        .map(|words| words.as_slice())
}

/// True when `words` is a proper word-prefix of one of the multi-word
/// `phrases`
pub fn is_phrase_prefix<'a, I>(words: &[&str], phrases: I) -> bool
where
    I: IntoIterator<Item = &'a CqlPart>,
{
    !words.is_empty()
        && phrases.into_iter().any(|part| {
            let phrase: Vec<&str> = part.to_display_string().split(' ').collect();
            phrase.len() > words.len() && phrase[..words.len()] == *words
        })
}
