use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use loupe_core::dispatch::dispatch;
use loupe_core::view::ViewState;

use crate::summary::print_photo_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Photo record JSON file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let record = super::load_record(&args.file)?;

    // No view selected, so only the text panel is produced.
    let view = ViewState::default();
    let rendered = dispatch(&record.analyses, &view, record.key());

    print_photo_summary(&args.file, &record, &rendered.entries);
    Ok(())
}
