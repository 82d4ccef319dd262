// SPDX-License-Identifier: SEE LICENSE IN LICENSE.md
// SPDX-FileCopyrightText: 2022 CYBERTEC PostgreSQL International GmbH
// <office@cybertec.at>

//! Input handling shared by the front-end binaries.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads the PL/SQL source to process: from `path` when given, from
/// standard input otherwise.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("failed to read from stdin")?;
            Ok(source)
        }
    }
}
