// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Syntax levels for SQL statements and subqueries.
//!
//! Procedural code indents by looking at the first token of each
//! logical line, but SQL has no `END SELECT`, so clause structure is
//! tracked explicitly: one [`Level`] per enclosing statement or
//! subquery, holding the statement kind, the machine state, the indents
//! charged to the level and the unmatched parentheses within it.

use super::{cursor, insert, select, update, FormatState};
use crate::line::{LineNode, LogicalLine};
use crate::syntax::TokenKind;

/// Statement kind a level is parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Syntax {
    #[default]
    None,
    Select,
    Insert,
    Delete,
    Update,
    Fetch,
    Cursor,
}

/// State of the per-statement machines. The `*List` states sit between
/// clause keywords; commas there put each list element on its own line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum State {
    #[default]
    None,
    /// Starting a column list
    ColumnListA,
    /// Within a column list
    ColumnListB,
    /// After a column list
    ColumnListC,
    /// Starting a CONNECT clause
    Connect,
    /// Amid a CONNECT clause
    ConnectClause,
    /// Between CURSOR and SELECT
    Cursor,
    /// Immediately after FETCH
    Fetch,
    /// Immediately after FOR
    For,
    /// Starting a FOR UPDATE clause
    ForUpdate,
    /// Immediately after FROM
    From,
    /// Amid the table list of a FROM clause
    FromList,
    /// Starting a GROUP BY clause
    Group,
    /// Amid a GROUP BY expression
    GroupList,
    /// Starting a HAVING clause
    Having,
    /// Amid a HAVING condition
    HavingList,
    /// Immediately after INSERT
    Insert,
    /// Starting an intersection
    Intersect,
    /// Immediately after INTO
    Into,
    /// Amid the objects of an INTO clause
    IntoList,
    /// Starting a MINUS
    Minus,
    /// Immediately after NOWAIT
    Nowait,
    /// Immediately after OF
    Of,
    /// Amid a FOR UPDATE OF list
    OfList,
    /// Starting an ORDER BY clause
    Order,
    /// Amid an ORDER BY list
    OrderList,
    /// Immediately after SELECT
    Select,
    /// Amid the selected items
    SelectList,
    /// Immediately after SET
    Set,
    /// After a comma after a subquery in a SET clause
    SetComma,
    /// Amid a SET clause
    SetList,
    /// After a subquery in a SET clause
    SetSubquery,
    /// Immediately after START
    Start,
    /// Amid a START clause
    StartClause,
    /// Within a subquery
    Subquery,
    /// Starting a union
    Union,
    /// Immediately after UPDATE
    Update,
    /// Immediately after VALUES
    Values,
    /// Starting a list of values
    ValuesListA,
    /// Within a list of values
    ValuesListB,
    /// Finished a list of values
    ValuesListC,
    /// Immediately after WHERE
    Where,
    /// Amid the conditions of a WHERE clause
    WhereList,
}

/// One frame of the SQL parsing stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Level {
    pub(crate) syntax: Syntax,
    pub(crate) state: State,
    pub(crate) indents: i32,
    pub(crate) parens: i32,
}

impl FormatState {
    /// Saves the current level on the stack and starts counting afresh.
    /// The caller sets the new level's kind and state.
    pub(crate) fn push_level(&mut self) {
        self.level_stack.push(self.level);
        self.level.parens = 0;
        self.level.indents = 0;
    }

    /// Restores the enclosing level, if any.
    pub(crate) fn pop_level(&mut self) {
        if let Some(level) = self.level_stack.pop() {
            self.level = level;
        }
    }

    /// Leaves the special parsing zone entirely. Any indentation still
    /// outstanding across the levels is cancelled at the beginning of
    /// the next logical line.
    pub(crate) fn exit_all_levels(&mut self) {
        let mut total = self.level.indents;
        while let Some(level) = self.level_stack.pop() {
            self.level = level;
            total += level.indents;
        }

        self.level.indents = 0;
        self.level.syntax = Syntax::None;
        self.level.state = State::None;

        self.deferred_unindents = total;
    }

    /// Annotates a token to begin a new level of indentation and moves
    /// the machine to `next`.
    pub(crate) fn add_indent(&mut self, node: &mut LineNode, next: State) {
        node.lf = true;
        node.indent_change = 1;
        self.level.indents += 1;
        self.level.state = next;
    }

    /// Annotates a token to unindent and moves the machine to `next`.
    pub(crate) fn reduce_indent(&mut self, node: &mut LineNode, next: State) {
        node.lf = true;
        node.indent_change = -1;
        self.level.indents -= 1;
        self.level.state = next;
    }

    /// Handles a `)` in a clause position. With no unmatched `(` inside
    /// the level, the parenthesis closes the whole subquery: it cancels
    /// the level's outstanding indentation and pops back to the
    /// enclosing level, whose own parenthesis count then absorbs it.
    pub(crate) fn close_subquery(&mut self, node: &mut LineNode) {
        if self.level.parens <= 0 {
            node.lf = true;
            node.indent_change = -self.level.indents;
            self.pop_level();
        }
        self.level.parens -= 1;
    }

    /// Examines the logical line and annotates its tokens with the
    /// extra line feeds and indentation SQL statements call for.
    ///
    /// A statement keyword can only enter a parsing context from the
    /// front of a logical line. A DELETE that names a PL/SQL table
    /// rather than a database operation would be misread here, but the
    /// consequences are confined to layout.
    pub(crate) fn edit_syntax(&mut self, line: &mut LogicalLine) {
        if self.level.state == State::None {
            match line.first_kind() {
                TokenKind::SelectKw => {
                    self.push_level();
                    self.level.syntax = Syntax::Select;
                    self.level.state = State::Select;
                }
                TokenKind::InsertKw => {
                    self.level.syntax = Syntax::Insert;
                    self.level.state = State::Insert;
                }
                TokenKind::UpdateKw => {
                    self.level.syntax = Syntax::Update;
                    self.level.state = State::Update;
                }
                TokenKind::DeleteKw => {
                    self.level.syntax = Syntax::Delete;
                }
                TokenKind::CursorKw => {
                    self.level.syntax = Syntax::Cursor;
                    self.level.state = State::Cursor;
                }
                TokenKind::FetchKw => {
                    self.level.syntax = Syntax::Fetch;
                    self.level.state = State::Fetch;
                }
                _ => {}
            }
        }

        for idx in 0..line.nodes.len() {
            match self.level.syntax {
                Syntax::None | Syntax::Delete => {}
                Syntax::Select => select::select_syntax(self, line, idx),
                Syntax::Insert => insert::insert_syntax(self, line, idx),
                Syntax::Update => update::update_syntax(self, line, idx),
                Syntax::Cursor => cursor::cursor_syntax(self, line, idx),
                Syntax::Fetch => cursor::fetch_syntax(self, line, idx),
            }
        }
    }
}

/// Marks the token after a list comma to start on a fresh line,
/// leaving trailing comments alone.
pub(crate) fn mark_next_lf(line: &mut LogicalLine, idx: usize) {
    if let Some(next) = line.nodes.get_mut(idx + 1) {
        if next.kind != TokenKind::Comment {
            next.lf = true;
        }
    }
}
