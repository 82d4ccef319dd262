// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! State machines laying out CURSOR and FETCH statements.
//!
//! A cursor declaration is inert until its SELECT appears, which then
//! runs on a pushed level under the SELECT machine. FETCH puts each
//! INTO target on its own line.

use super::level::{mark_next_lf, State, Syntax};
use super::FormatState;
use crate::line::LogicalLine;
use crate::syntax::TokenKind;

/// Waits for the SELECT of a CURSOR declaration, then hands over to
/// the machine for SELECT statements.
pub(super) fn cursor_syntax(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::SelectKw => {
            st.push_level();
            st.level.syntax = Syntax::Select;
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        TokenKind::SemiColon => st.exit_all_levels(),
        _ => {}
    }
}

pub(super) fn fetch_syntax(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::SemiColon {
        st.exit_all_levels();
        return;
    }

    match st.level.state {
        State::Fetch => on_fetch(st, line, idx),
        State::Into => on_into(st, line, idx),
        State::IntoList => on_into_list(line, idx),
        _ => {}
    }
}

/// Just found FETCH; wait for INTO.
fn on_fetch(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::IntoKw {
        st.level.state = State::Into;
    }
}

/// Just found INTO after FETCH; wait for the first target variable.
fn on_into(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::Ident {
        st.add_indent(&mut line.nodes[idx], State::IntoList);
    }
}

/// Naming the variables fetched into; one per line.
fn on_into_list(line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::Comma {
        mark_next_lf(line, idx);
    }
}
