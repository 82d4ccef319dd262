// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Implements the reserved-word table and its lookups.
//!
//! The word list comes from Oracle's PL/SQL User's Guide and Reference.
//! The table is kept sorted by spelling so that lookup is a binary
//! search; note that `_` collates above the letters in ASCII, which is
//! why e.g. DATABASE precedes DATA_BASE.

use crate::syntax::TokenKind;
use lazy_static::lazy_static;
use std::cmp::Ordering;
use std::collections::HashMap;

/// All reserved words with their token kinds, sorted by spelling.
static KEYWORDS: &[(&str, TokenKind)] = &[
    ("ABORT", TokenKind::AbortKw),
    ("ACCEPT", TokenKind::AcceptKw),
    ("ACCESS", TokenKind::AccessKw),
    ("ADD", TokenKind::AddKw),
    ("ALL", TokenKind::AllKw),
    ("ALTER", TokenKind::AlterKw),
    ("AND", TokenKind::AndKw),
    ("ANY", TokenKind::AnyKw),
    ("ARRAY", TokenKind::ArrayKw),
    ("ARRAYLEN", TokenKind::ArraylenKw),
    ("AS", TokenKind::AsKw),
    ("ASC", TokenKind::AscKw),
    ("ASSERT", TokenKind::AssertKw),
    ("ASSIGN", TokenKind::AssignKw),
    ("AT", TokenKind::AtKw),
    ("AUDIT", TokenKind::AuditKw),
    ("AUTHORIZATION", TokenKind::AuthorizationKw),
    ("AVG", TokenKind::AvgKw),
    ("BASE_TABLE", TokenKind::BaseTableKw),
    ("BEGIN", TokenKind::BeginKw),
    ("BETWEEN", TokenKind::BetweenKw),
    ("BINARY_INTEGER", TokenKind::BinaryIntegerKw),
    ("BODY", TokenKind::BodyKw),
    ("BOOLEAN", TokenKind::BooleanKw),
    ("BY", TokenKind::ByKw),
    ("CASE", TokenKind::CaseKw),
    ("CHAR", TokenKind::CharKw),
    ("CHAR_BASE", TokenKind::CharBaseKw),
    ("CHECK", TokenKind::CheckKw),
    ("CLOSE", TokenKind::CloseKw),
    ("CLUSTER", TokenKind::ClusterKw),
    ("CLUSTERS", TokenKind::ClustersKw),
    ("COLAUTH", TokenKind::ColauthKw),
    ("COLUMN", TokenKind::ColumnKw),
    ("COMMENT", TokenKind::CommentKw),
    ("COMMIT", TokenKind::CommitKw),
    ("COMPRESS", TokenKind::CompressKw),
    ("CONNECT", TokenKind::ConnectKw),
    ("CONSTANT", TokenKind::ConstantKw),
    ("CRASH", TokenKind::CrashKw),
    ("CREATE", TokenKind::CreateKw),
    ("CURRENT", TokenKind::CurrentKw),
    ("CURRVAL", TokenKind::CurrvalKw),
    ("CURSOR", TokenKind::CursorKw),
    ("DATABASE", TokenKind::DatabaseKw),
    ("DATA_BASE", TokenKind::DataBaseKw),
    ("DATE", TokenKind::DateKw),
    ("DBA", TokenKind::DbaKw),
    ("DEBUGOFF", TokenKind::DebugoffKw),
    ("DEBUGON", TokenKind::DebugonKw),
    ("DECIMAL", TokenKind::DecimalKw),
    ("DECLARE", TokenKind::DeclareKw),
    ("DEFAULT", TokenKind::DefaultKw),
    ("DEFINITION", TokenKind::DefinitionKw),
    ("DELAY", TokenKind::DelayKw),
    ("DELETE", TokenKind::DeleteKw),
    ("DELTA", TokenKind::DeltaKw),
    ("DESC", TokenKind::DescKw),
    ("DIGITS", TokenKind::DigitsKw),
    ("DISPOSE", TokenKind::DisposeKw),
    ("DISTINCT", TokenKind::DistinctKw),
    ("DO", TokenKind::DoKw),
    ("DROP", TokenKind::DropKw),
    ("ELSE", TokenKind::ElseKw),
    ("ELSIF", TokenKind::ElsifKw),
    ("END", TokenKind::EndKw),
    ("ENTRY", TokenKind::EntryKw),
    ("EXCEPTION", TokenKind::ExceptionKw),
    ("EXCEPTION_INIT", TokenKind::ExceptionInitKw),
    ("EXCLUSIVE", TokenKind::ExclusiveKw),
    ("EXISTS", TokenKind::ExistsKw),
    ("EXIT", TokenKind::ExitKw),
    ("FALSE", TokenKind::FalseKw),
    ("FETCH", TokenKind::FetchKw),
    ("FILE", TokenKind::FileKw),
    ("FLOAT", TokenKind::FloatKw),
    ("FOR", TokenKind::ForKw),
    ("FORM", TokenKind::FormKw),
    ("FROM", TokenKind::FromKw),
    ("FUNCTION", TokenKind::FunctionKw),
    ("GENERIC", TokenKind::GenericKw),
    ("GOTO", TokenKind::GotoKw),
    ("GRANT", TokenKind::GrantKw),
    ("GROUP", TokenKind::GroupKw),
    ("HAVING", TokenKind::HavingKw),
    ("IDENTIFIED", TokenKind::IdentifiedKw),
    ("IF", TokenKind::IfKw),
    ("IMMEDIATE", TokenKind::ImmediateKw),
    ("IN", TokenKind::InKw),
    ("INCREMENT", TokenKind::IncrementKw),
    ("INDEX", TokenKind::IndexKw),
    ("INDEXES", TokenKind::IndexesKw),
    ("INDICATOR", TokenKind::IndicatorKw),
    ("INITIAL", TokenKind::InitialKw),
    ("INSERT", TokenKind::InsertKw),
    ("INTEGER", TokenKind::IntegerKw),
    ("INTERFACE", TokenKind::InterfaceKw),
    ("INTERSECT", TokenKind::IntersectKw),
    ("INTO", TokenKind::IntoKw),
    ("IS", TokenKind::IsKw),
    ("LEVEL", TokenKind::LevelKw),
    ("LIKE", TokenKind::LikeKw),
    ("LIMITED", TokenKind::LimitedKw),
    ("LOCK", TokenKind::LockKw),
    ("LONG", TokenKind::LongKw),
    ("LOOP", TokenKind::LoopKw),
    ("MAX", TokenKind::MaxKw),
    ("MAXEXTENTS", TokenKind::MaxextentsKw),
    ("MIN", TokenKind::MinKw),
    ("MINUS", TokenKind::MinusKw),
    ("MLSLABEL", TokenKind::MlslabelKw),
    ("MOD", TokenKind::ModKw),
    ("MODE", TokenKind::ModeKw),
    ("MODIFY", TokenKind::ModifyKw),
    ("NATURAL", TokenKind::NaturalKw),
    ("NATURALN", TokenKind::NaturalnKw),
    ("NEW", TokenKind::NewKw),
    ("NEXTVAL", TokenKind::NextvalKw),
    ("NOAUDIT", TokenKind::NoauditKw),
    ("NOCOMPRESS", TokenKind::NocompressKw),
    ("NOT", TokenKind::NotKw),
    ("NOWAIT", TokenKind::NowaitKw),
    ("NULL", TokenKind::NullKw),
    ("NUMBER", TokenKind::NumberKw),
    ("NUMBER_BASE", TokenKind::NumberBaseKw),
    ("OF", TokenKind::OfKw),
    ("OFFLINE", TokenKind::OfflineKw),
    ("ON", TokenKind::OnKw),
    ("ONLINE", TokenKind::OnlineKw),
    ("OPEN", TokenKind::OpenKw),
    ("OPTION", TokenKind::OptionKw),
    ("OR", TokenKind::OrKw),
    ("ORDER", TokenKind::OrderKw),
    ("OTHERS", TokenKind::OthersKw),
    ("OUT", TokenKind::OutKw),
    ("PACKAGE", TokenKind::PackageKw),
    ("PARTITION", TokenKind::PartitionKw),
    ("PCTFREE", TokenKind::PctfreeKw),
    ("PLS_INTEGER", TokenKind::PlsIntegerKw),
    ("POSITIVE", TokenKind::PositiveKw),
    ("POSITIVEN", TokenKind::PositivenKw),
    ("PRAGMA", TokenKind::PragmaKw),
    ("PRIOR", TokenKind::PriorKw),
    ("PRIVATE", TokenKind::PrivateKw),
    ("PRIVILEGES", TokenKind::PrivilegesKw),
    ("PROCEDURE", TokenKind::ProcedureKw),
    ("PUBLIC", TokenKind::PublicKw),
    ("RAISE", TokenKind::RaiseKw),
    ("RANGE", TokenKind::RangeKw),
    ("RAW", TokenKind::RawKw),
    ("REAL", TokenKind::RealKw),
    ("RECORD", TokenKind::RecordKw),
    ("REF", TokenKind::RefKw),
    ("RELEASE", TokenKind::ReleaseKw),
    ("REMR", TokenKind::RemrKw),
    ("RENAME", TokenKind::RenameKw),
    ("REPLACE", TokenKind::ReplaceKw),
    ("RESOURCE", TokenKind::ResourceKw),
    ("RETURN", TokenKind::ReturnKw),
    ("REVERSE", TokenKind::ReverseKw),
    ("REVOKE", TokenKind::RevokeKw),
    ("ROLLBACK", TokenKind::RollbackKw),
    ("ROW", TokenKind::RowKw),
    ("ROWID", TokenKind::RowidKw),
    ("ROWLABEL", TokenKind::RowlabelKw),
    ("ROWNUM", TokenKind::RownumKw),
    ("ROWS", TokenKind::RowsKw),
    ("ROWTYPE", TokenKind::RowtypeKw),
    ("RUN", TokenKind::RunKw),
    ("SAVEPOINT", TokenKind::SavepointKw),
    ("SCHEMA", TokenKind::SchemaKw),
    ("SELECT", TokenKind::SelectKw),
    ("SEPARATE", TokenKind::SeparateKw),
    ("SESSION", TokenKind::SessionKw),
    ("SET", TokenKind::SetKw),
    ("SHARE", TokenKind::ShareKw),
    ("SIZE", TokenKind::SizeKw),
    ("SMALLINT", TokenKind::SmallintKw),
    ("SPACE", TokenKind::SpaceKw),
    ("SQL", TokenKind::SqlKw),
    ("SQLCODE", TokenKind::SqlcodeKw),
    ("SQLERRM", TokenKind::SqlerrmKw),
    ("START", TokenKind::StartKw),
    ("STATEMENT", TokenKind::StatementKw),
    ("STDDEV", TokenKind::StddevKw),
    ("SUBTYPE", TokenKind::SubtypeKw),
    ("SUCCESSFUL", TokenKind::SuccessfulKw),
    ("SUM", TokenKind::SumKw),
    ("SYNONYM", TokenKind::SynonymKw),
    ("SYSDATE", TokenKind::SysdateKw),
    ("TABAUTH", TokenKind::TabauthKw),
    ("TABLE", TokenKind::TableKw),
    ("TABLES", TokenKind::TablesKw),
    ("TASK", TokenKind::TaskKw),
    ("TERMINATE", TokenKind::TerminateKw),
    ("THEN", TokenKind::ThenKw),
    ("TO", TokenKind::ToKw),
    ("TRIGGER", TokenKind::TriggerKw),
    ("TRUE", TokenKind::TrueKw),
    ("TYPE", TokenKind::TypeKw),
    ("UID", TokenKind::UidKw),
    ("UNION", TokenKind::UnionKw),
    ("UNIQUE", TokenKind::UniqueKw),
    ("UPDATE", TokenKind::UpdateKw),
    ("USE", TokenKind::UseKw),
    ("USER", TokenKind::UserKw),
    ("VALIDATE", TokenKind::ValidateKw),
    ("VALUES", TokenKind::ValuesKw),
    ("VARCHAR", TokenKind::VarcharKw),
    ("VARCHAR2", TokenKind::Varchar2Kw),
    ("VARIANCE", TokenKind::VarianceKw),
    ("VIEW", TokenKind::ViewKw),
    ("VIEWS", TokenKind::ViewsKw),
    ("WHEN", TokenKind::WhenKw),
    ("WHENEVER", TokenKind::WheneverKw),
    ("WHERE", TokenKind::WhereKw),
    ("WHILE", TokenKind::WhileKw),
    ("WITH", TokenKind::WithKw),
    ("WORK", TokenKind::WorkKw),
    ("WRITE", TokenKind::WriteKw),
    ("XOR", TokenKind::XorKw),
];

lazy_static! {
    static ref KEYWORD_NAMES: HashMap<TokenKind, &'static str> =
        KEYWORDS.iter().map(|&(name, kind)| (kind, name)).collect();
}

/// Compares a keyword spelling (already upper case) against a candidate
/// word, ignoring the candidate's case.
fn compare_ignore_case(keyword: &str, candidate: &str) -> Ordering {
    let mut kw = keyword.bytes();
    let mut cand = candidate.bytes().map(|b| b.to_ascii_uppercase());

    loop {
        match (kw.next(), cand.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(k), Some(c)) => match k.cmp(&c) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
}

/// Returns the token kind for a word: the reserved-word kind if the
/// upper-cased spelling matches, [`TokenKind::Ident`] otherwise.
pub fn lookup(word: &str) -> TokenKind {
    KEYWORDS
        .binary_search_by(|&(name, _)| compare_ignore_case(name, word))
        .map(|idx| KEYWORDS[idx].1)
        .unwrap_or(TokenKind::Ident)
}

/// Returns the canonical upper-case spelling of a reserved-word kind,
/// or `None` for any other kind.
pub fn canonical_name(kind: TokenKind) -> Option<&'static str> {
    KEYWORD_NAMES.get(&kind).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in KEYWORDS.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "{} must sort before {}",
                pair[0].0,
                pair[1].0
            );
        }
    }

    #[test]
    fn table_is_upper_case() {
        for (name, _) in KEYWORDS {
            assert_eq!(*name, name.to_ascii_uppercase());
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("select"), TokenKind::SelectKw);
        assert_eq!(lookup("Select"), TokenKind::SelectKw);
        assert_eq!(lookup("SELECT"), TokenKind::SelectKw);
        assert_eq!(lookup("data_base"), TokenKind::DataBaseKw);
        assert_eq!(lookup("exception_init"), TokenKind::ExceptionInitKw);
    }

    #[test]
    fn lookup_misses_are_identifiers() {
        assert_eq!(lookup("employee"), TokenKind::Ident);
        assert_eq!(lookup("selects"), TokenKind::Ident);
        assert_eq!(lookup("sel"), TokenKind::Ident);
        assert_eq!(lookup("x$y#z"), TokenKind::Ident);
    }

    #[test]
    fn every_entry_resolves_to_itself() {
        for &(name, kind) in KEYWORDS {
            assert_eq!(lookup(name), kind);
            assert_eq!(lookup(&name.to_ascii_lowercase()), kind);
            assert_eq!(canonical_name(kind), Some(name));
        }
    }

    #[test]
    fn canonical_name_of_non_keywords() {
        assert_eq!(canonical_name(TokenKind::Ident), None);
        assert_eq!(canonical_name(TokenKind::SemiColon), None);
        assert_eq!(canonical_name(TokenKind::Eof), None);
    }
}
