//! Config command - show the resolved settings

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ngsmith_core::discovery::Workspace;
use ngsmith_core::settings::Settings;

use crate::cli::ConfigArgs;
use crate::output;

pub fn run(args: ConfigArgs, config: Option<&Utf8Path>) -> Result<()> {
    let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
    let workspace = Workspace::locate(&cwd);
    let settings = Settings::load(config, workspace.as_ref().map(|ws| ws.root.as_path()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings.document())?);
        return Ok(());
    }

    output::header("Settings");
    if settings.sources.is_empty() {
        output::info("No settings files found, showing defaults");
    }
    for source in &settings.sources {
        output::kv("Source", source.as_str());
    }
    output::kv("Mode", &settings.mode.to_string());
    println!();
    print!("{}", serde_yaml_ng::to_string(&settings.document())?);

    Ok(())
}
