//! Remove command handler.

use anyhow::{Context, Result};
use std::io::Write;

use super::Confirm;
use crate::cli::RmArgs;
use crate::session::Session;
use crate::store::Storage;

pub fn handle_rm<S: Storage, C: Confirm + ?Sized>(
    args: &RmArgs,
    session: &mut Session<S>,
    confirm: &mut C,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(pending) = session.request_delete(args.index) else {
        writeln!(out, "No note at index {}; nothing deleted.", args.index)?;
        return Ok(());
    };
    let index = pending.index();

    if !args.yes {
        let question = format!("Delete note \"{}\"?", pending.note().title());
        if !confirm.confirm(&question)? {
            session.cancel_delete();
            writeln!(out, "Cancelled.")?;
            return Ok(());
        }
    }

    match session
        .confirm_delete()
        .with_context(|| format!("failed to delete note at index {}", index))?
    {
        Some(removed) => writeln!(out, "Deleted: {}", removed)?,
        None => writeln!(out, "Note at index {} changed; nothing deleted.", index)?,
    }

    Ok(())
}
