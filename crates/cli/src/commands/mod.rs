// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod auth;
pub mod cards;
pub mod progress;
pub mod sync;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// Print `value` as pretty JSON, or each text line otherwise.
pub fn emit<T, I>(output: OutputFormat, value: &T, lines: I) -> Result<()>
where
    T: Serialize + ?Sized,
    I: IntoIterator<Item = String>,
{
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => {
            for line in lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}
