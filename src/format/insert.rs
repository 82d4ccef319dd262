// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! State machine laying out INSERT statements.
//!
//! `INSERT INTO table` stays on one line; a column list and a VALUES
//! list each open with their parenthesis on a fresh line and one
//! element per line inside. A parenthesis directly after INTO starts a
//! subquery instead, handed to the SELECT machine on its own level.

use super::level::{mark_next_lf, State, Syntax};
use super::FormatState;
use crate::line::LogicalLine;
use crate::syntax::TokenKind;

pub(super) fn insert_syntax(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::SemiColon {
        st.exit_all_levels();
        return;
    }

    match st.level.state {
        State::Insert => on_insert(st, line, idx),
        State::Into => on_into(st, line, idx),
        State::IntoList => on_into_list(st, line, idx),
        State::Subquery => on_subquery(st, line, idx),
        State::ColumnListA => on_column_list_a(st, line, idx),
        State::ColumnListB => on_column_list_b(st, line, idx),
        State::ColumnListC => on_column_list_c(st, line, idx),
        State::Values => on_values(st, line, idx),
        State::ValuesListA => on_values_list_a(st, line, idx),
        State::ValuesListB => on_values_list_b(st, line, idx),
        // After the values list only comments and the terminating
        // semicolon are valid, so ValuesListC needs no handling.
        _ => {}
    }
}

/// Just found INSERT; wait for INTO.
fn on_insert(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::IntoKw {
        st.level.state = State::Into;
    }
}

/// Just found INTO after INSERT. An identifier names the target table;
/// a parenthesis opens a subquery in its place.
fn on_into(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::Ident => st.level.state = State::IntoList,
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

/// Naming the table we insert into. A parenthesis starts the column
/// list, VALUES starts the values clause, SELECT starts a subquery.
fn on_into_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::ValuesKw => st.level.state = State::Values,
        TokenKind::LParen => {
            st.level.parens += 1;
            st.level.state = State::ColumnListA;
            line.nodes[idx].lf = true;
        }
        TokenKind::SelectKw => {
            st.push_level();
            st.level.syntax = Syntax::Select;
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        _ => {}
    }
}

/// Just left a subquery after INSERT INTO; VALUES, a column list or
/// another subquery may follow.
fn on_subquery(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::ValuesKw => st.reduce_indent(&mut line.nodes[idx], State::Values),
        TokenKind::LParen => {
            st.level.parens += 1;
            st.reduce_indent(&mut line.nodes[idx], State::ColumnListA);
        }
        TokenKind::SelectKw => {
            st.push_level();
            st.level.syntax = Syntax::Select;
            st.level.state = State::Select;
        }
        _ => {}
    }
}

/// Starting the column list; wait for the first column name.
fn on_column_list_a(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::Ident => st.add_indent(&mut line.nodes[idx], State::ColumnListB),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => {
            if st.level.parens > 0 {
                st.level.parens -= 1;
            }
        }
        _ => {}
    }
}

/// Amid the column list; wait for the closing parenthesis.
fn on_column_list_b(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => {
            if st.level.parens > 0 {
                st.level.parens -= 1;
                if st.level.parens < 1 {
                    st.reduce_indent(&mut line.nodes[idx], State::ColumnListC);
                }
            }
        }
        TokenKind::Comma => {
            // One column per line; commas nested deeper belong to a
            // function call or similar.
            if st.level.parens == 1 {
                mark_next_lf(line, idx);
            }
        }
        _ => {}
    }
}

/// Finished the column list; VALUES or a subquery follows.
fn on_column_list_c(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::ValuesKw => st.level.state = State::Values,
        TokenKind::SelectKw => {
            st.push_level();
            st.level.syntax = Syntax::Select;
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        _ => {}
    }
}

/// Just found VALUES; wait for the opening parenthesis.
fn on_values(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::LParen {
        st.level.parens += 1;
        st.level.state = State::ValuesListA;
        line.nodes[idx].lf = true;
    }
}

/// Just opened the values list; anything but a comment is the first
/// expression.
fn on_values_list_a(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(&mut line.nodes[idx], State::ValuesListB);
        }
        TokenKind::RParen => {
            // An empty values list is not valid SQL, but close it
            // cleanly anyway.
            if st.level.parens > 0 {
                st.level.parens -= 1;
                if st.level.parens < 1 {
                    st.reduce_indent(&mut line.nodes[idx], State::ValuesListC);
                }
            }
        }
        _ => st.add_indent(&mut line.nodes[idx], State::ValuesListB),
    }
}

/// Amid the values; wait for the closing parenthesis.
fn on_values_list_b(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => {
            if st.level.parens > 0 {
                st.level.parens -= 1;
                if st.level.parens < 1 {
                    st.reduce_indent(&mut line.nodes[idx], State::ValuesListC);
                }
            }
        }
        TokenKind::Comma => {
            if st.level.parens == 1 {
                mark_next_lf(line, idx);
            }
        }
        _ => {}
    }
}
