//! Parse a single replay from a local file or a replay URL and print the
//! reconstructed result as JSON.
//!
//! Usage: cargo run --example analyze_replay -- <file-or-url>

use anyhow::Result;
use terascope_replay::parse_replay;
use terascope_replay::source::{ReplaySource, resolve_source};

fn main() -> Result<()> {
    let location = std::env::args()
        .nth(1)
        .expect("usage: analyze_replay <file-or-url>");

    let source = resolve_source(&location)?;
    let log = source.retrieve(&location)?;
    let replay = parse_replay(&log)?;

    println!("{}", serde_json::to_string_pretty(&replay)?);
    Ok(())
}
