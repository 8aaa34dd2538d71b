//! Handlers for the `table` and `detail` commands.

use super::input;
use crate::cli::{SourceArgs, VisibilityArgs};
use crate::config::types::Config;
use crate::error::Result;
use crate::layout::Layout;
use crate::view::{DetailView, TabAligner, TableView, ViewOptions};
use std::io::Write;

/// Config defaults first, then command-line flags on top.
pub fn view_options(config: &Config, args: &VisibilityArgs) -> Result<ViewOptions> {
    let mut options = config.view_options()?;
    for path in &args.show {
        options = options.show(path.as_str());
    }
    for path in &args.hide {
        options = options.hide(path.as_str());
    }
    if args.hide_all {
        options = options.hide_all_by_default();
    }
    Ok(options)
}

/// Handle the `table` command.
pub fn handle_table<W: Write>(
    source: &SourceArgs,
    visibility: &VisibilityArgs,
    config: &Config,
    out: W,
) -> Result<()> {
    let layout = Layout::load(&source.layout)?;
    let rows = input::into_rows(input::read_input(source.input.as_deref())?)?;
    log::info!("rendering {} records with layout '{}'", rows.len(), layout.name);

    let mut sink = TabAligner::new(out).with_padding(config.output.padding);
    let mut view = TableView::new(&layout.descriptor(), view_options(config, visibility)?);
    view.render(&mut sink, &rows);

    // partial output is still flushed when a formatter failed
    sink.flush()?;
    view.into_result()?;
    Ok(())
}

/// Handle the `detail` command.
pub fn handle_detail<W: Write>(
    source: &SourceArgs,
    visibility: &VisibilityArgs,
    index: usize,
    config: &Config,
    out: W,
) -> Result<()> {
    let layout = Layout::load(&source.layout)?;
    let record = input::select_record(input::read_input(source.input.as_deref())?, index)?;
    log::info!("rendering record {} with layout '{}'", index, layout.name);

    let mut sink = TabAligner::new(out).with_padding(config.output.padding);
    let mut view = DetailView::new(&layout.descriptor(), view_options(config, visibility)?);
    view.render(&mut sink, &record);

    sink.flush()?;
    view.into_result()?;
    Ok(())
}
