// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! State machine laying out UPDATE statements.
//!
//! SET breaks the line, every assignment in the SET clause gets a line
//! of its own, and a `(SELECT ...)` on the right-hand side of an
//! assignment runs on a pushed level.

use super::level::{mark_next_lf, State, Syntax};
use super::FormatState;
use crate::line::LogicalLine;
use crate::syntax::TokenKind;

pub(super) fn update_syntax(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::SemiColon {
        st.exit_all_levels();
        return;
    }

    match st.level.state {
        State::Update => on_update(st, line, idx),
        State::Subquery => on_subquery(st, line, idx),
        State::Set => on_set(st, line, idx),
        State::SetList => on_set_list(st, line, idx),
        State::SetSubquery => on_set_subquery(st, line, idx),
        State::SetComma => on_set_comma(st, line, idx),
        State::Where => on_where(st, line, idx),
        State::WhereList => on_where_list(st, line, idx),
        _ => {}
    }
}

/// Just found UPDATE; a parenthesis starts a subquery in place of the
/// table name, SET starts the assignment list.
fn on_update(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::SetKw => {
            line.nodes[idx].lf = true;
            st.level.state = State::Set;
        }
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(&mut line.nodes[idx], State::Subquery);
            st.push_level();
            st.level.syntax = Syntax::Select;
            st.level.state = State::Select;
        }
        _ => {}
    }
}

/// Just left a subquery after UPDATE; wait for SET.
fn on_subquery(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::SetKw => st.reduce_indent(&mut line.nodes[idx], State::Set),
        TokenKind::RParen => st.level.parens -= 1,
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::Comma => {
            if st.level.parens == 0 {
                mark_next_lf(line, idx);
            }
        }
        _ => {}
    }
}

/// Just found SET; an identifier or a column-list parenthesis starts
/// the first assignment, indented on the next line.
fn on_set(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::Ident => st.add_indent(&mut line.nodes[idx], State::SetList),
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(&mut line.nodes[idx], State::SetList);
        }
        _ => {}
    }
}

/// Amid the assignments of the SET clause.
fn on_set_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::WhereKw => st.reduce_indent(&mut line.nodes[idx], State::Where),
        TokenKind::RParen => st.level.parens -= 1,
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::Comma => {
            if st.level.parens == 0 {
                mark_next_lf(line, idx);
            }
        }
        TokenKind::SelectKw => {
            st.add_indent(&mut line.nodes[idx], State::SetSubquery);
            st.push_level();
            st.level.syntax = Syntax::Select;
            st.level.state = State::Select;
        }
        _ => {}
    }
}

/// Just left a subquery inside a SET clause; only WHERE or a comma may
/// follow. Leaving for WHERE unwinds both the subquery indent and the
/// assignment indent.
fn on_set_subquery(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::WhereKw => {
            st.reduce_indent(&mut line.nodes[idx], State::Where);
            if st.level.indents > 0 {
                st.level.indents -= 1;
            }
            line.nodes[idx].indent_change = -2;
        }
        TokenKind::Comma => {
            mark_next_lf(line, idx);
            st.level.state = State::SetComma;
        }
        _ => {}
    }
}

/// A comma followed the subquery; the next assignment drops back to
/// the SET list depth.
fn on_set_comma(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::LParen => {
            st.level.parens += 1;
            st.reduce_indent(&mut line.nodes[idx], State::SetList);
        }
        TokenKind::Ident => st.reduce_indent(&mut line.nodes[idx], State::SetList),
        _ => {}
    }
}

/// Just found WHERE; the first token other than a comment starts the
/// condition.
fn on_where(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::WhereList);
        }
        _ => st.add_indent(node, State::WhereList),
    }
}

/// Amid the WHERE condition; a SELECT here runs on its own level.
fn on_where_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::WhereList);
            st.level.syntax = Syntax::Select;
            st.level.state = State::Select;
        }
        TokenKind::RParen => st.level.parens -= 1,
        _ => {}
    }
}
