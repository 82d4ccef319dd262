// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Policy tables driving the beautifier: line-termination likelihoods,
//! inter-token spacing, and procedural indentation.

use crate::syntax::TokenKind;

/// Five-valued likelihood attached to token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probability {
    Never,
    #[allow(dead_code)]
    Seldom,
    Sometimes,
    Usually,
    Always,
}

/// Likelihood that a token of this kind is the last one on a logical
/// line.
pub(crate) fn finality(kind: TokenKind) -> Probability {
    match kind {
        TokenKind::Comment | TokenKind::Eof => Probability::Always,
        TokenKind::SemiColon
        | TokenKind::ThenKw
        | TokenKind::ElseKw
        | TokenKind::BeginKw
        | TokenKind::ExceptionKw
        | TokenKind::FromKw
        | TokenKind::WhereKw
        | TokenKind::DistinctKw
        | TokenKind::DeclareKw
        | TokenKind::MinusKw
        | TokenKind::IntersectKw => Probability::Usually,
        _ => Probability::Sometimes,
    }
}

/// Likelihood that a token of this kind falls at the beginning of a
/// logical line.
pub(crate) fn firstness(kind: TokenKind) -> Probability {
    match kind {
        TokenKind::SelectKw
        | TokenKind::FromKw
        | TokenKind::WhereKw
        | TokenKind::OrderKw
        | TokenKind::ForKw
        | TokenKind::ValuesKw
        | TokenKind::SetKw
        | TokenKind::UnionKw
        | TokenKind::MinusKw
        | TokenKind::IntersectKw => Probability::Always,
        TokenKind::IntoKw => Probability::Sometimes,
        _ => Probability::Never,
    }
}

/// Decides whether a blank space belongs between two adjacent tokens.
///
/// Mostly driven by the second token: some kinds are always preceded by
/// a space and some never are. A dot, percent or range operator on
/// either side suppresses the space, so that `emp.sal`, `x%TYPE` and
/// `1..10` stay glued together.
pub(crate) fn need_space(first: TokenKind, second: TokenKind) -> bool {
    let tight_first = matches!(
        first,
        TokenKind::Dot | TokenKind::Percent | TokenKind::RangeDots
    );

    match second {
        TokenKind::SemiColon
        | TokenKind::Eof
        | TokenKind::Percent
        | TokenKind::Comma
        | TokenKind::Dot
        | TokenKind::AtSign
        | TokenKind::RangeDots
        | TokenKind::RightLabel => false,
        TokenKind::QuotedIdent
        | TokenKind::StringLit
        | TokenKind::CharLit
        | TokenKind::NumberLit
        | TokenKind::Comment
        | TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::Equals
        | TokenKind::Less
        | TokenKind::Greater
        | TokenKind::RParen
        | TokenKind::Colon
        | TokenKind::Expo
        | TokenKind::NotEqual
        | TokenKind::TildeEqual
        | TokenKind::CaretEqual
        | TokenKind::LessEqual
        | TokenKind::GreaterEqual
        | TokenKind::Assign
        | TokenKind::Arrow
        | TokenKind::Concat
        | TokenKind::LeftLabel => !tight_first,
        TokenKind::LParen => !matches!(
            first,
            TokenKind::Ident | TokenKind::Varchar2Kw | TokenKind::NumberKw | TokenKind::CharKw
        ),
        _ => !tight_first,
    }
}

/// Decides whether to indent after a logical line beginning with a
/// token of this kind.
pub(crate) fn need_indent(kind: TokenKind) -> Probability {
    match kind {
        TokenKind::IfKw
        | TokenKind::ElseKw
        | TokenKind::ElsifKw
        | TokenKind::WhenKw
        | TokenKind::LoopKw
        | TokenKind::WhileKw
        | TokenKind::BeginKw
        | TokenKind::ExceptionKw
        | TokenKind::IntoKw => Probability::Always,
        TokenKind::ForKw => Probability::Sometimes,
        _ => Probability::Never,
    }
}

/// Refines [`need_indent`] by the line's second token. A `FOR UPDATE`
/// clause does not open a loop body.
pub(crate) fn sometimes_indent(first: TokenKind, second: TokenKind) -> bool {
    match first {
        TokenKind::ForKw => second != TokenKind::UpdateKw,
        _ => false,
    }
}

/// Decides whether a logical line beginning with this kind unindents.
pub(crate) fn need_unindent(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::EndKw
            | TokenKind::ElseKw
            | TokenKind::ElsifKw
            | TokenKind::ExceptionKw
            | TokenKind::WhenKw
            | TokenKind::IntoKw
    )
}
