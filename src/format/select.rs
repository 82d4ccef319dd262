// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! State machine laying out SELECT statements.
//!
//! Clause keywords unindent back to statement depth, the material after
//! them indents one level, and commas between list elements break the
//! line. A SELECT in any clause position opens a subquery level; its
//! closing parenthesis cancels whatever indentation the level still
//! carries.

use super::level::{mark_next_lf, State};
use super::FormatState;
use crate::line::LogicalLine;
use crate::syntax::TokenKind;

pub(super) fn select_syntax(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::SemiColon {
        st.exit_all_levels();
        return;
    }

    match st.level.state {
        State::Select => on_select(st, line, idx),
        State::SelectList => on_select_list(st, line, idx),
        State::Into => on_into(st, line, idx),
        State::IntoList => on_into_list(st, line, idx),
        State::From => on_from(st, line, idx),
        State::FromList => on_from_list(st, line, idx),
        State::Where => on_where(st, line, idx),
        State::WhereList => on_where_list(st, line, idx),
        State::Start => on_start(st, line, idx),
        State::StartClause => on_start_clause(st, line, idx),
        State::Connect => on_connect(st, line, idx),
        State::ConnectClause => on_connect_clause(st, line, idx),
        State::Group => on_group(st, line, idx),
        State::GroupList => on_group_list(st, line, idx),
        State::Having => on_having(st, line, idx),
        State::HavingList => on_having_list(st, line, idx),
        State::Union | State::Intersect | State::Minus => on_splice(st, line, idx),
        State::Order => on_order(st, line, idx),
        State::OrderList => on_order_list(st, line, idx),
        State::For => on_for(st, line, idx),
        State::ForUpdate => on_for_update(st, line, idx),
        State::Of => on_of(st, line, idx),
        State::OfList => on_of_list(st, line, idx),
        State::Nowait => on_nowait(st, line, idx),
        _ => {}
    }
}

/// Just found SELECT; the first token other than DISTINCT, ALL or a
/// comment starts the select list.
fn on_select(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::SelectKw | TokenKind::Comment | TokenKind::DistinctKw | TokenKind::AllKw => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::SelectList);
        }
        _ => st.add_indent(node, State::SelectList),
    }
}

/// Amid the selected items, until INTO or FROM.
fn on_select_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::IntoKw => st.reduce_indent(&mut line.nodes[idx], State::Into),
        TokenKind::FromKw => st.reduce_indent(&mut line.nodes[idx], State::From),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => st.level.parens -= 1,
        TokenKind::Comma => {
            // Each selected item goes on its own line; a comma inside
            // parentheses separates function arguments instead.
            if st.level.parens == 0 {
                mark_next_lf(line, idx);
            }
        }
        _ => {}
    }
}

/// Just found INTO; skip comments until the first target.
fn on_into(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::Ident | TokenKind::QuotedIdent => st.add_indent(node, State::IntoList),
        _ => {}
    }
}

/// Amid the INTO targets, until FROM.
fn on_into_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::FromKw => st.reduce_indent(&mut line.nodes[idx], State::From),
        TokenKind::Comma => mark_next_lf(line, idx),
        _ => {}
    }
}

/// Just found FROM; waiting for the first table name or a subquery.
fn on_from(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::Ident | TokenKind::QuotedIdent => {
            st.add_indent(&mut line.nodes[idx], State::FromList)
        }
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}

/// Amid the FROM table list, until a clause keyword takes over.
fn on_from_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::WhereKw => st.reduce_indent(&mut line.nodes[idx], State::Where),
        TokenKind::StartKw => st.reduce_indent(&mut line.nodes[idx], State::Start),
        TokenKind::ConnectKw => st.reduce_indent(&mut line.nodes[idx], State::Connect),
        TokenKind::UnionKw => st.reduce_indent(&mut line.nodes[idx], State::Union),
        TokenKind::IntersectKw => st.reduce_indent(&mut line.nodes[idx], State::Intersect),
        TokenKind::MinusKw => st.reduce_indent(&mut line.nodes[idx], State::Minus),
        TokenKind::GroupKw => st.reduce_indent(&mut line.nodes[idx], State::Group),
        TokenKind::OrderKw => st.reduce_indent(&mut line.nodes[idx], State::Order),
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        TokenKind::Comma => {
            if st.level.parens == 0 {
                mark_next_lf(line, idx);
            }
        }
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

/// Amid the WHERE condition.
fn on_where_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::StartKw => st.reduce_indent(&mut line.nodes[idx], State::Start),
        TokenKind::ConnectKw => st.reduce_indent(&mut line.nodes[idx], State::Connect),
        TokenKind::UnionKw => st.reduce_indent(&mut line.nodes[idx], State::Union),
        TokenKind::IntersectKw => st.reduce_indent(&mut line.nodes[idx], State::Intersect),
        TokenKind::MinusKw => st.reduce_indent(&mut line.nodes[idx], State::Minus),
        TokenKind::GroupKw => st.reduce_indent(&mut line.nodes[idx], State::Group),
        TokenKind::OrderKw => st.reduce_indent(&mut line.nodes[idx], State::Order),
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}

/// Just found START; skip WITH and comments.
fn on_start(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::WithKw | TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::StartClause);
        }
        _ => st.add_indent(node, State::StartClause),
    }
}

/// Amid a START condition, until CONNECT.
fn on_start_clause(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::ConnectKw => st.reduce_indent(&mut line.nodes[idx], State::Connect),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => st.level.parens -= 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        _ => {}
    }
}

/// Just found CONNECT; skip BY and comments.
fn on_connect(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::ByKw | TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::ConnectClause);
        }
        _ => st.add_indent(node, State::ConnectClause),
    }
}

/// Amid a CONNECT BY condition.
fn on_connect_clause(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::StartKw => st.reduce_indent(&mut line.nodes[idx], State::Start),
        TokenKind::ConnectKw => st.reduce_indent(&mut line.nodes[idx], State::Connect),
        TokenKind::UnionKw => st.reduce_indent(&mut line.nodes[idx], State::Union),
        TokenKind::IntersectKw => st.reduce_indent(&mut line.nodes[idx], State::Intersect),
        TokenKind::MinusKw => st.reduce_indent(&mut line.nodes[idx], State::Minus),
        TokenKind::GroupKw => st.reduce_indent(&mut line.nodes[idx], State::Group),
        TokenKind::OrderKw => st.reduce_indent(&mut line.nodes[idx], State::Order),
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}

/// Just found GROUP; skip BY and comments.
fn on_group(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::ByKw | TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::GroupList);
        }
        _ => st.add_indent(node, State::GroupList),
    }
}

/// Amid a GROUP BY expression.
fn on_group_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::HavingKw => st.reduce_indent(&mut line.nodes[idx], State::Having),
        TokenKind::StartKw => st.reduce_indent(&mut line.nodes[idx], State::Start),
        TokenKind::ConnectKw => st.reduce_indent(&mut line.nodes[idx], State::Connect),
        TokenKind::UnionKw => st.reduce_indent(&mut line.nodes[idx], State::Union),
        TokenKind::IntersectKw => st.reduce_indent(&mut line.nodes[idx], State::Intersect),
        TokenKind::MinusKw => st.reduce_indent(&mut line.nodes[idx], State::Minus),
        TokenKind::GroupKw => st.reduce_indent(&mut line.nodes[idx], State::Group),
        TokenKind::OrderKw => st.reduce_indent(&mut line.nodes[idx], State::Order),
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => st.level.parens -= 1,
        TokenKind::Comma => {
            if st.level.parens == 0 {
                mark_next_lf(line, idx);
            }
        }
        _ => {}
    }
}

/// Just found HAVING; the first token other than a comment starts the
/// condition.
fn on_having(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::HavingList);
        }
        _ => st.add_indent(node, State::HavingList),
    }
}

/// Amid a HAVING condition.
fn on_having_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::StartKw => st.reduce_indent(&mut line.nodes[idx], State::Start),
        TokenKind::ConnectKw => st.reduce_indent(&mut line.nodes[idx], State::Connect),
        TokenKind::UnionKw => st.reduce_indent(&mut line.nodes[idx], State::Union),
        TokenKind::IntersectKw => st.reduce_indent(&mut line.nodes[idx], State::Intersect),
        TokenKind::MinusKw => st.reduce_indent(&mut line.nodes[idx], State::Minus),
        TokenKind::GroupKw => st.reduce_indent(&mut line.nodes[idx], State::Group),
        TokenKind::OrderKw => st.reduce_indent(&mut line.nodes[idx], State::Order),
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::SelectKw => {
            st.push_level();
            st.add_indent(&mut line.nodes[idx], State::Select);
        }
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}

/// Just found UNION, INTERSECT or MINUS, splicing one SELECT to the
/// next. All three behave the same: wait for the SELECT.
fn on_splice(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    if node.kind == TokenKind::SelectKw {
        node.lf = true;
        st.level.state = State::Select;
    }
}

/// Just found ORDER; skip BY and comments.
fn on_order(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::ByKw | TokenKind::Comment => {}
        TokenKind::LParen => {
            st.level.parens += 1;
            st.add_indent(node, State::OrderList);
        }
        _ => st.add_indent(node, State::OrderList),
    }
}

/// Amid the sort keys, until FOR.
fn on_order_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::LParen => st.level.parens += 1,
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        TokenKind::Comma => mark_next_lf(line, idx),
        _ => {}
    }
}

/// Just found FOR; wait for UPDATE.
fn on_for(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    if line.nodes[idx].kind == TokenKind::UpdateKw {
        st.level.state = State::ForUpdate;
    }
}

/// Just found FOR UPDATE; wait for OF, NOWAIT, ORDER or FOR.
fn on_for_update(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::OfKw => st.level.state = State::Of,
        TokenKind::NowaitKw => st.reduce_indent(&mut line.nodes[idx], State::Nowait),
        TokenKind::OrderKw => st.reduce_indent(&mut line.nodes[idx], State::Order),
        TokenKind::ForKw => st.reduce_indent(&mut line.nodes[idx], State::For),
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}

/// Just found OF after FOR UPDATE; the next token other than a comment
/// starts the column list. It should be an identifier, but layout does
/// not depend on that.
fn on_of(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    let node = &mut line.nodes[idx];
    match node.kind {
        TokenKind::Comment => {}
        _ => st.add_indent(node, State::OfList),
    }
}

/// Amid the FOR UPDATE OF columns. Leaving the clause unwinds both the
/// OF list indent and the FOR UPDATE indent.
fn on_of_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::OrderKw => leave_of_list(st, line, idx, State::Order),
        TokenKind::ForKw => leave_of_list(st, line, idx, State::For),
        TokenKind::NowaitKw => leave_of_list(st, line, idx, State::Nowait),
        TokenKind::Comma => mark_next_lf(line, idx),
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}

fn leave_of_list(st: &mut FormatState, line: &mut LogicalLine, idx: usize, next: State) {
    let node = &mut line.nodes[idx];
    node.lf = true;
    node.indent_change = -2;
    st.level.indents -= 2;
    st.level.state = next;
}

/// Just found NOWAIT; only ORDER, FOR or the end of a subquery may
/// follow.
fn on_nowait(st: &mut FormatState, line: &mut LogicalLine, idx: usize) {
    match line.nodes[idx].kind {
        TokenKind::OrderKw => st.level.state = State::Order,
        TokenKind::ForKw => st.level.state = State::For,
        TokenKind::RParen => st.close_subquery(&mut line.nodes[idx]),
        _ => {}
    }
}
