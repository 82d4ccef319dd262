// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Implements the beautifier: spacing, procedural indentation and the
//! writer that serializes annotated logical lines.

mod cursor;
mod insert;
mod level;
mod select;
pub(crate) mod tables;
mod update;

use crate::lexer::Scanner;
use crate::line::{LogicalLine, LogicalLines};
use crate::syntax::TokenKind;
use level::Level;
use std::io;
use tables::Probability;

/// One level of indentation.
pub const INDENT_STR: &str = "    ";

/// Half-step indentation for continuation lines.
pub const SOFT_INDENT_STR: &str = "  ";

/// Errors produced while writing formatted output.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("failed to write formatted output: {0}")]
    Io(#[from] io::Error),
}

/// Mutable formatting state shared by the writer and the SQL machines:
/// the current indent depth, the unindents deferred to the next logical
/// line, the stack of token kinds that opened each procedural indent,
/// and the SQL level stack.
#[derive(Debug, Default)]
pub(crate) struct FormatState {
    pub(crate) indent: i32,
    pub(crate) deferred_unindents: i32,
    pub(crate) type_stack: Vec<TokenKind>,
    pub(crate) level: Level,
    pub(crate) level_stack: Vec<Level>,
}

/// Writes logical lines in a consistently formatted manner.
#[derive(Debug)]
pub struct Formatter<W> {
    out: W,
    state: FormatState,
}

impl<W: io::Write> Formatter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            state: FormatState::default(),
        }
    }

    /// Consumes the formatter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats and writes one logical line:
    ///
    /// 1. decide the blank spaces between adjacent tokens,
    /// 2. unindent when the line opens with a closing kind,
    /// 3. run the SQL machines to annotate line feeds and indents,
    /// 4. emit the tokens,
    /// 5. indent when the line opens a block,
    /// 6. apply unindents deferred by a statement terminator.
    pub fn write_logical_line(&mut self, line: &mut LogicalLine) -> Result<(), FormatError> {
        if line.is_empty() || line.first_kind() == TokenKind::Eof {
            return Ok(());
        }

        let first_kind = line.first_kind();
        let last_kind = line.last_kind();

        for idx in 1..line.nodes.len() {
            if tables::need_space(line.nodes[idx - 1].kind, line.nodes[idx].kind) {
                line.nodes[idx].spacer = 1;
            }
        }

        // Unindenting is tricky when leaving an EXCEPTION block: the
        // END must unwind the WHEN branch and the block itself, which
        // is what the stack of opening kinds is for. The depth may dip
        // below zero here when an unindent pairs with an indent later
        // on the same line; rendering floors it at zero, and the line
        // boundary below restores the floor for good.
        if tables::need_unindent(first_kind) {
            if self.state.indent >= 0 {
                self.state.indent -= 1;
            }
            let opener = self.state.type_stack.pop().unwrap_or(TokenKind::None);
            if opener == TokenKind::WhenKw && first_kind == TokenKind::EndKw && self.state.indent >= 0
            {
                self.state.indent -= 1;
            }
        }

        self.state.edit_syntax(line);
        self.put_line(line)?;

        // A hyphen-style comment brings its own newline.
        let hyphen_comment_last = last_kind == TokenKind::Comment
            && line
                .nodes
                .last()
                .map_or(false, |node| node.token.text.starts_with("--"));
        if !hyphen_comment_last {
            self.out.write_all(b"\n")?;
        }

        let mut if_indent = tables::need_indent(first_kind);
        if if_indent == Probability::Sometimes {
            let second_kind = line.nodes.get(1).map_or(TokenKind::None, |node| node.kind);
            if tables::sometimes_indent(first_kind, second_kind) {
                if_indent = Probability::Always;
            }
        }
        if if_indent == Probability::Always {
            self.state.indent += 1;
            self.state.type_stack.push(first_kind);
            // The body of an EXCEPTION block sits one level below the
            // WHEN branches within it.
            if first_kind == TokenKind::ExceptionKw {
                self.state.indent += 1;
            }
        }

        self.state.indent -= self.state.deferred_unindents;
        if self.state.indent < 0 {
            self.state.indent = 0;
        }
        self.state.deferred_unindents = 0;

        Ok(())
    }

    /// Emits the indentation and the tokens.
    fn put_line(&mut self, line: &LogicalLine) -> Result<(), FormatError> {
        for (idx, node) in line.nodes.iter().enumerate() {
            // The line feed before the first token was written by the
            // previous line.
            if idx > 0 && node.lf {
                self.out.write_all(b"\n")?;
            }

            self.state.indent += node.indent_change;

            if idx == 0 || node.lf {
                // An empty range when the depth dipped below zero.
                for _ in 0..self.state.indent {
                    self.out.write_all(INDENT_STR.as_bytes())?;
                }
            } else if node.spacer > 0 {
                self.out.write_all(b" ")?;
            }

            self.out.write_all(node.token.text.as_bytes())?;
        }
        Ok(())
    }
}

/// Beautifies PL/SQL source, writing the formatted text to `out`.
pub fn beautify<W: io::Write>(input: &str, out: W) -> Result<(), FormatError> {
    let mut formatter = Formatter::new(out);
    for mut line in LogicalLines::new(Scanner::new(input)) {
        formatter.write_logical_line(&mut line)?;
    }
    Ok(())
}

/// Beautifies PL/SQL source into a fresh string.
pub fn beautify_to_string(input: &str) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = beautify(input, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::{expect, Expect};

    fn check(input: &str, expected: Expect) {
        expected.assert_eq(&beautify_to_string(input));
    }

    #[test]
    fn plain_block() {
        check(
            "BEGIN NULL; END;",
            expect![[r#"
                BEGIN
                    NULL;
                END;
            "#]],
        );
    }

    #[test]
    fn select_statement() {
        check(
            "select a,b from t where x=1;",
            expect![[r#"
                select
                    a,
                    b
                from
                    t
                where
                    x = 1;
            "#]],
        );
    }

    #[test]
    fn insert_statement() {
        check(
            "insert into t(a,b) values(1,2);",
            expect![[r#"
                insert into t
                (
                    a,
                    b
                )
                values
                (
                    1,
                    2
                );
            "#]],
        );
    }

    #[test]
    fn update_statement() {
        check(
            "update emp set sal=sal+1,com=0 where id=1;",
            expect![[r#"
                update emp
                set
                    sal = sal + 1,
                    com = 0
                where
                    id = 1;
            "#]],
        );
    }

    #[test]
    fn numeric_range_loop() {
        check(
            "for i in 1..10 loop x:=x+1; end loop;",
            expect![[r#"
                for i in 1..10 loop
                    x := x + 1;
                end loop;
            "#]],
        );
    }

    #[test]
    fn if_elsif_else_ladder() {
        check(
            "if x is null then y:=1; elsif x=2 then y:=2; else y:=3; end if;",
            expect![[r#"
                if x is null then
                    y := 1;
                elsif x = 2 then
                    y := 2;
                else
                    y := 3;
                end if;
            "#]],
        );
    }

    #[test]
    fn leading_comment_starts_fresh_line() {
        check(
            "-- leading comment\nSELECT 1 FROM dual;",
            expect![[r#"
                -- leading comment
                SELECT
                    1
                FROM
                    dual;
            "#]],
        );
    }

    #[test]
    fn exception_block_unwinds_twice() {
        check(
            "begin x:=1; exception when others then y:=1; end;",
            expect![[r#"
                begin
                    x := 1;
                exception
                    when others then
                        y := 1;
                end;
            "#]],
        );
    }

    #[test]
    fn cursor_declaration() {
        check(
            "cursor c is select a from t;",
            expect![[r#"
                cursor c is
                    select
                        a
                    from
                        t;
            "#]],
        );
    }

    #[test]
    fn fetch_into_targets() {
        check(
            "fetch c into a,b;",
            expect![[r#"
                fetch c
                into
                a,
                b;
            "#]],
        );
    }

    #[test]
    fn subquery_in_from_clause() {
        check(
            "select a from (select b from u) t;",
            expect![[r#"
                select
                    a
                from
                (
                    select
                        b
                    from
                        u
                )
                    t;
            "#]],
        );
    }

    #[test]
    fn trailing_comment_stays_inline() {
        check(
            "x := 1; -- note\ny := 2;",
            expect![[r#"
                x := 1; -- note
                y := 2;
            "#]],
        );
    }

    #[test]
    fn stray_rparen_clamps_at_margin() {
        check(
            "end; end; ) x;",
            expect![[r#"
                end;
                end;
                ) x;
            "#]],
        );
    }

    #[test]
    fn formatting_is_idempotent() {
        let inputs = [
            "BEGIN NULL; END;",
            "select a,b from t where x=1;",
            "insert into t(a,b) values(1,2);",
            "for i in 1..10 loop x:=x+1; end loop;",
            "begin x:=1; exception when others then y:=1; end;",
            "cursor c is select a from t;",
        ];
        for input in inputs {
            let once = beautify_to_string(input);
            let twice = beautify_to_string(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
