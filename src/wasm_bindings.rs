// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Additional functions and types needed for a clean Rust <-> JS interface.

#![cfg(any(target_arch = "wasm32", target_arch = "wasm64"))]

use crate::{beautify_to_string, Scanner, TokenKind};
use serde::Serialize;
use tsify::Tsify;
use wasm_bindgen::prelude::*;

/// One token of the scanned input, flattened for the JS side.
#[derive(Debug, Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct JsToken {
    pub kind: String,
    pub line: u32,
    pub col: u32,
    pub text: String,
    pub message: Option<String>,
}

/// WASM export of [`beautify_to_string()`]. Should _never_ be called
/// from other Rust code.
#[wasm_bindgen(js_name = "beautify")]
pub fn js_beautify(sql: &str) -> String {
    beautify_to_string(sql)
}

/// WASM export of the scanner: the full token stream of `sql`,
/// whitespace and comments included. Should _never_ be called from
/// other Rust code.
#[wasm_bindgen(js_name = "tokenize")]
pub fn js_tokenize(sql: &str) -> Result<JsValue, JsValue> {
    let tokens = Scanner::new(sql)
        .filter(|token| token.kind != TokenKind::Eof)
        .map(|token| JsToken {
            kind: token.kind.to_string(),
            line: token.line,
            col: token.col,
            text: token.text,
            message: token.message,
        })
        .collect::<Vec<_>>();

    Ok(serde_wasm_bindgen::to_value(&tokens)?)
}
