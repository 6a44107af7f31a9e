//! Tags command handler.

use anyhow::Result;
use std::collections::BTreeMap;
use std::io::Write;

use crate::cli::TagsArgs;
use crate::cli::output::{OutputFormat, TagListing, write_json};
use crate::domain::{Note, Tag};
use crate::session::Session;
use crate::store::Storage;

/// Counts notes per tag.
///
/// The four known tags always appear, in their usual order, even with a zero
/// count. Other tags follow in alphabetical order.
pub fn tag_counts(notes: &[Note]) -> Vec<(Tag, usize)> {
    let mut counts: Vec<(Tag, usize)> = Tag::KNOWN.iter().map(|t| (t.clone(), 0)).collect();
    let mut others: BTreeMap<String, usize> = BTreeMap::new();

    for note in notes {
        let tag = note.tag();
        if !tag.is_known() {
            *others.entry(tag.as_str().to_string()).or_default() += 1;
        } else if let Some((_, n)) = counts.iter_mut().find(|(t, _)| t == tag) {
            *n += 1;
        }
    }

    counts.extend(others.into_iter().map(|(name, n)| (Tag::new(&name), n)));
    counts
}

pub fn handle_tags<S: Storage>(
    args: &TagsArgs,
    session: &Session<S>,
    out: &mut dyn Write,
) -> Result<()> {
    let counts = tag_counts(session.store().notes());

    match args.format {
        OutputFormat::Human => {
            for (tag, count) in &counts {
                writeln!(out, "{:<12} {:>5}", tag.display_name(), count)?;
            }
        }
        OutputFormat::Json => {
            let listings: Vec<TagListing> = counts
                .iter()
                .map(|(tag, count)| TagListing {
                    name: tag.as_str().to_string(),
                    label: tag.display_name().to_string(),
                    count: *count,
                })
                .collect();
            write_json(out, listings)?;
        }
    }

    Ok(())
}
