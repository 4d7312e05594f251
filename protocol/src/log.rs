//! Battle log tokenizer
//!
//! Splits raw replay text into an ordered [`Command`] sequence. Order is
//! load-bearing: every later stage assumes a pokemon's roster entry was
//! created before the first command that references it.

use crate::command::{Command, parse_command};
use anyhow::Result;

/// Tokenize a full battle log into commands, preserving line order.
///
/// Empty lines and lines without a command tag (fewer than two `|`-separated
/// fields) are dropped. A recognized tag with malformed mandatory fields
/// fails the whole parse; unrecognized tags become [`Command::Other`].
pub fn parse_log(text: &str) -> Result<Vec<Command>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| line.splitn(3, '|').count() >= 2)
        .map(parse_command)
        .collect()
}
