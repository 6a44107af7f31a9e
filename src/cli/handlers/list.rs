//! List command handler.

use anyhow::Result;
use std::io::Write;

use crate::cli::ListArgs;
use crate::cli::output::{HumanRenderer, JsonRenderer, OutputFormat};
use crate::domain::TagFilter;
use crate::session::Session;
use crate::store::Storage;

pub fn handle_list<S: Storage>(
    args: &ListArgs,
    session: &mut Session<S>,
    out: &mut dyn Write,
) -> Result<()> {
    session.set_search_term(args.search.as_deref().unwrap_or(""));
    session.set_tag_filter(TagFilter::parse(&args.tag));

    match args.format {
        OutputFormat::Human => session.refresh(&mut HumanRenderer::new(out))?,
        OutputFormat::Json => session.refresh(&mut JsonRenderer::new(out))?,
    }

    Ok(())
}
