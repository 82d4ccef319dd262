// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Implements the closed set of token kinds the tokenizer can produce.

use serde::Serialize;
use std::fmt;

/// Represents every kind of token the PL/SQL tokenizer can produce.
///
/// The discriminant layout is stable: meta kinds first, then lexemes,
/// then single-character punctuation, then two-character operators, and
/// finally the reserved words in the order of Oracle's documented list.
/// Keeping the reserved words contiguous at the end makes
/// [`is_keyword`][`TokenKind::is_keyword`] a simple range test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[repr(u16)]
pub enum TokenKind {
    /// End of input; returned indefinitely once the input is exhausted
    Eof,
    /// Placeholder kind; never produced by the scanner
    None,
    /// A token the scanner could not classify; carries a message
    Error,
    /// A double-quoted identifier, quotes included
    QuotedIdent,
    /// A single-quoted string literal, quotes included
    StringLit,
    /// A single-quoted literal holding exactly one character
    CharLit,
    /// A numeric literal, e.g. `42`, `.5`, `1.25E-3`
    NumberLit,
    /// An ordinary identifier
    Ident,
    /// A comment, either `--` to end of line or `/* ... */`
    Comment,
    /// A run of whitespace characters
    Whitespace,

    // Single-character punctuation. Quote characters never form tokens
    // of their own; they are subsumed by the literal kinds above.
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `=`
    Equals,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    SemiColon,
    /// `%`
    Percent,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `@`
    AtSign,
    /// `:`
    Colon,

    // Two-character operators. Comment delimiters never form tokens of
    // their own; they are subsumed by the comment kind above.
    /// Exponentiation `**`
    Expo,
    /// `!=` or `<>`
    NotEqual,
    /// `~=`
    TildeEqual,
    /// `^=`
    CaretEqual,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// Assignment `:=`
    Assign,
    /// Association arrow `=>`
    Arrow,
    /// Range `..`
    RangeDots,
    /// Concatenation `||`
    Concat,
    /// Label opener `<<`
    LeftLabel,
    /// Label closer `>>`
    RightLabel,

    // Reserved words, in the order of Oracle's documented list. REPLACE
    // is not, strictly speaking, a reserved word, but CREATE OR REPLACE
    // is too common to tokenize it as an identifier.
    AbortKw,
    AcceptKw,
    AccessKw,
    AddKw,
    AllKw,
    AlterKw,
    AndKw,
    AnyKw,
    ArrayKw,
    ArraylenKw,
    AsKw,
    AscKw,
    AssertKw,
    AssignKw,
    AtKw,
    AuditKw,
    AuthorizationKw,
    AvgKw,
    BaseTableKw,
    BeginKw,
    BetweenKw,
    BinaryIntegerKw,
    BodyKw,
    BooleanKw,
    ByKw,
    CaseKw,
    CharKw,
    CharBaseKw,
    CheckKw,
    CloseKw,
    ClusterKw,
    ClustersKw,
    ColauthKw,
    ColumnKw,
    CommentKw,
    CommitKw,
    CompressKw,
    ConnectKw,
    ConstantKw,
    CrashKw,
    CreateKw,
    CurrentKw,
    CurrvalKw,
    CursorKw,
    DatabaseKw,
    DataBaseKw,
    DateKw,
    DbaKw,
    DebugoffKw,
    DebugonKw,
    DeclareKw,
    DecimalKw,
    DefaultKw,
    DefinitionKw,
    DelayKw,
    DeleteKw,
    DeltaKw,
    DescKw,
    DigitsKw,
    DisposeKw,
    DistinctKw,
    DoKw,
    DropKw,
    ElseKw,
    ElsifKw,
    EndKw,
    EntryKw,
    ExceptionKw,
    ExceptionInitKw,
    ExclusiveKw,
    ExistsKw,
    ExitKw,
    FalseKw,
    FetchKw,
    FileKw,
    FloatKw,
    ForKw,
    FormKw,
    FromKw,
    FunctionKw,
    GenericKw,
    GotoKw,
    GrantKw,
    GroupKw,
    HavingKw,
    IdentifiedKw,
    IfKw,
    ImmediateKw,
    InKw,
    IncrementKw,
    IndexKw,
    IndexesKw,
    IndicatorKw,
    InitialKw,
    InsertKw,
    IntegerKw,
    InterfaceKw,
    IntersectKw,
    IntoKw,
    IsKw,
    LevelKw,
    LikeKw,
    LimitedKw,
    LockKw,
    LongKw,
    LoopKw,
    MaxKw,
    MaxextentsKw,
    MinKw,
    MinusKw,
    MlslabelKw,
    ModKw,
    ModeKw,
    ModifyKw,
    NaturalKw,
    NaturalnKw,
    NewKw,
    NextvalKw,
    NoauditKw,
    NocompressKw,
    NotKw,
    NowaitKw,
    NullKw,
    NumberKw,
    NumberBaseKw,
    OfKw,
    OfflineKw,
    OnKw,
    OnlineKw,
    OpenKw,
    OptionKw,
    OrKw,
    OrderKw,
    OthersKw,
    OutKw,
    PackageKw,
    PartitionKw,
    PctfreeKw,
    PlsIntegerKw,
    PositiveKw,
    PositivenKw,
    PragmaKw,
    PriorKw,
    PrivateKw,
    PrivilegesKw,
    ProcedureKw,
    PublicKw,
    RaiseKw,
    RangeKw,
    RawKw,
    RealKw,
    RecordKw,
    RefKw,
    ReleaseKw,
    RemrKw,
    RenameKw,
    ReplaceKw,
    ResourceKw,
    ReturnKw,
    ReverseKw,
    RevokeKw,
    RollbackKw,
    RowKw,
    RowidKw,
    RowlabelKw,
    RownumKw,
    RowsKw,
    RowtypeKw,
    RunKw,
    SavepointKw,
    SchemaKw,
    SelectKw,
    SeparateKw,
    SessionKw,
    SetKw,
    ShareKw,
    SizeKw,
    SmallintKw,
    SpaceKw,
    SqlKw,
    SqlcodeKw,
    SqlerrmKw,
    StartKw,
    StatementKw,
    StddevKw,
    SubtypeKw,
    SuccessfulKw,
    SumKw,
    SynonymKw,
    SysdateKw,
    TabauthKw,
    TableKw,
    TablesKw,
    TaskKw,
    TerminateKw,
    ThenKw,
    ToKw,
    TriggerKw,
    TrueKw,
    TypeKw,
    UidKw,
    UnionKw,
    UniqueKw,
    UpdateKw,
    UseKw,
    UserKw,
    ValidateKw,
    ValuesKw,
    VarcharKw,
    Varchar2Kw,
    VarianceKw,
    ViewKw,
    ViewsKw,
    WhenKw,
    WheneverKw,
    WhereKw,
    WhileKw,
    WithKw,
    WorkKw,
    WriteKw,
    XorKw,
}

impl TokenKind {
    /// Returns true when the [`TokenKind`] is not syntactically important.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment)
    }

    /// Returns true if the [`TokenKind`] is a reserved word.
    pub fn is_keyword(self) -> bool {
        self >= Self::AbortKw
    }

    /// Short human description of the kind, used by diagnostics and the
    /// token-dump front-end.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Eof => "end of file",
            Self::None => "undefined token",
            Self::Error => "error",
            Self::QuotedIdent => "quoted identifier",
            Self::StringLit => "string literal",
            Self::CharLit => "character literal",
            Self::NumberLit => "numeric literal",
            Self::Ident => "identifier",
            Self::Comment => "comment",
            Self::Whitespace => "whitespace",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Asterisk => "asterisk",
            Self::Slash => "virgule",
            Self::Equals => "equals",
            Self::Less => "less-than",
            Self::Greater => "greater",
            Self::LParen => "left parenthesis",
            Self::RParen => "right parenthesis",
            Self::SemiColon => "semicolon",
            Self::Percent => "percent",
            Self::Comma => "comma",
            Self::Dot => "dot",
            Self::AtSign => "at sign",
            Self::Colon => "colon",
            Self::Expo => "exponentiation",
            Self::NotEqual => "not-equal",
            Self::TildeEqual => "tilde-equal",
            Self::CaretEqual => "circumflex-equal",
            Self::LessEqual => "less-or-equal",
            Self::GreaterEqual => "greater-or-equal",
            Self::Assign => "assignment",
            Self::Arrow => "arrow",
            Self::RangeDots => "range",
            Self::Concat => "concatenation",
            Self::LeftLabel => "begin label",
            Self::RightLabel => "end label",
            _ => "reserved word",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_range_test() {
        assert!(TokenKind::AbortKw.is_keyword());
        assert!(TokenKind::XorKw.is_keyword());
        assert!(TokenKind::SelectKw.is_keyword());
        assert!(!TokenKind::Ident.is_keyword());
        assert!(!TokenKind::RightLabel.is_keyword());
        assert!(!TokenKind::Error.is_keyword());
    }

    #[test]
    fn trivia() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::Ident.is_trivia());
    }
}
