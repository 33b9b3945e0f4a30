//! Generate the numeric reply enumeration and lookup table.
//!
//! Replies are read from `replies_raw`, in the current directory. The
//! enumeration is written to `replies.ipp`, and the sorted table to
//! `reply_list.ipp`.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{info, trace, Level};
use tracing_subscriber::EnvFilter;

const REPLIES_SOURCE: &str = "replies_raw";

const ENUM_CODE: &str = "replies.ipp";

const TABLE_CODE: &str = "reply_list.ipp";

const ENUM_NAME: &str = "numeric_reply";

const TABLE_NAME: &str = "valid_replies";

fn main() -> Result<()> {
    init_tracing();

    let replies = generator::source::parse_replies(REPLIES_SOURCE)
        .with_context(|| format!("Failed to parse {}", REPLIES_SOURCE))?;

    info!(count = replies.len(), source = REPLIES_SOURCE, "replies parsed");

    if tracing::enabled!(Level::TRACE) {
        let json = serde_json::to_string(&replies)?;
        trace!(replies = %json, "parsed replies");
    }

    write_output(ENUM_CODE, |output| {
        generator::enumeration::generate_enum(output, ENUM_NAME, &replies)
    })?;

    write_output(TABLE_CODE, |output| {
        generator::table::generate_table(output, TABLE_NAME, &replies)
    })?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Create `path` and fill it with the output of `generate`.
fn write_output<F>(path: &str, generate: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> io::Result<()>,
{
    let file = File::create(path).with_context(|| format!("Create {}", path))?;
    let mut output = BufWriter::new(file);

    generate(&mut output)
        .and_then(|_| output.flush())
        .with_context(|| format!("Failed to write {}", path))?;

    info!(path, "output written");
    Ok(())
}
