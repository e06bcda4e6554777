//! Mode command - persist the logging mode

use anyhow::Result;
use ngsmith_core::settings::{self, Mode};

use crate::cli::ModeArgs;
use crate::output;

pub fn run(args: ModeArgs) -> Result<()> {
    let mode = Mode::from(args.mode);
    let path = settings::persist_mode(mode)?;

    match mode {
        Mode::Debug => output::success("Enabled debug mode"),
        Mode::Prod => output::success("Enabled prod mode"),
    }
    output::kv("Settings", path.as_str());

    Ok(())
}
