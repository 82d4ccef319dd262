// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! End-to-end beautifier guarantees over fixture programs: the token
//! stream survives reformatting untouched, output is stable under a
//! second pass, and indentation is always whole steps.

use expect_test::expect;
use plsfmt::{beautify_to_string, Scanner, TokenKind};
use pretty_assertions::assert_eq;

const FIXTURES: &[&str] = &[
    include_str!("fixtures/add_job_history.sql"),
    include_str!("fixtures/secure_dml.sql"),
    include_str!("fixtures/monthly_report.sql"),
];

/// Non-trivia kinds and texts; formatting must never change these.
fn significant_tokens(input: &str) -> Vec<(TokenKind, String)> {
    Scanner::non_preserving(input)
        .filter(|t| t.kind != TokenKind::Eof)
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn beautification_preserves_the_token_stream() {
    for input in FIXTURES {
        let output = beautify_to_string(input);
        assert_eq!(significant_tokens(&output), significant_tokens(input));
    }
}

#[test]
fn beautification_is_idempotent() {
    for input in FIXTURES {
        let once = beautify_to_string(input);
        let twice = beautify_to_string(&once);
        assert_eq!(twice, once);
    }
}

#[test]
fn output_is_newline_terminated_and_single_spaced() {
    for input in FIXTURES {
        let output = beautify_to_string(input);
        assert!(output.ends_with('\n'));
        assert!(!output.contains("\n\n"), "blank line in:\n{output}");
    }
}

#[test]
fn indentation_comes_in_whole_steps() {
    for input in FIXTURES {
        let output = beautify_to_string(input);
        for line in output.lines() {
            let leading = line.len() - line.trim_start_matches(' ').len();
            assert_eq!(leading % 4, 0, "ragged indent in line {line:?}");
        }
    }
}

#[test]
fn select_into_inside_a_block() {
    let output = beautify_to_string("begin select id into x from t; y := 1; end;");
    expect![[r#"
        begin
            select
                id
        into
            x
            from
                t;
            y := 1;
        end;
    "#]]
    .assert_eq(&output);
}

#[test]
fn nested_block_with_exception_handler() {
    let output = beautify_to_string(
        "begin begin x:=f(a,b); exception when value_error then x:=0; end; commit; end;",
    );
    expect![[r#"
        begin
            begin
                x := f( a, b );
            exception
                when value_error then
                    x := 0;
            end;
            commit;
        end;
    "#]]
    .assert_eq(&output);
}

#[test]
fn union_splices_stay_at_statement_depth() {
    let output = beautify_to_string("select a from t union select b from u;");
    expect![[r#"
        select
            a
        from
            t
        union
        select
            b
        from
            u;
    "#]]
    .assert_eq(&output);
}
