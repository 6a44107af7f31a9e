//! New note command handler.

use anyhow::{Context, Result};
use std::io::Write;

use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::domain::Tag;
use crate::session::Session;
use crate::store::Storage;

pub fn handle_new<S: Storage>(
    args: &NewArgs,
    session: &mut Session<S>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    let tag = args
        .tag
        .as_deref()
        .map(Tag::new)
        .unwrap_or_else(|| config.default_tag());

    let note = session
        .submit_note(&args.title, &args.content, tag)
        .with_context(|| "failed to create note")?;

    writeln!(out, "Created: {}", note)?;
    Ok(())
}
