//! Generate command handlers
//!
//! One flow serves all five artifact kinds, mirroring what a user would
//! do by hand: find the workspace, ask for a name, work out which
//! project owns the folder, compose the `ng g` call, and run it from
//! the workspace root.

use anyhow::{anyhow, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use dialoguer::{Input, Select};
use tracing::debug;

use ngsmith_core::discovery::Workspace;
use ngsmith_core::generator;
use ngsmith_core::manifest::MANIFEST_FILE_NAME;
use ngsmith_core::resolve::resolve_target;
use ngsmith_core::schematic::{GeneratorCommand, SchematicKind};
use ngsmith_core::settings::Settings;

use crate::cli::{GenerateArgs, GenerateCommands, GenerateTargetArgs};
use crate::output;

pub async fn run(args: GenerateArgs, config: Option<&Utf8Path>) -> Result<()> {
    match args.kind {
        GenerateCommands::Component(target) => {
            generate(SchematicKind::Component, target, None, config).await
        }
        GenerateCommands::Module(module) => {
            generate(SchematicKind::Module, module.target, module.routing, config).await
        }
        GenerateCommands::Service(target) => {
            generate(SchematicKind::Service, target, None, config).await
        }
        GenerateCommands::Directive(target) => {
            generate(SchematicKind::Directive, target, None, config).await
        }
        GenerateCommands::Pipe(target) => {
            generate(SchematicKind::Pipe, target, None, config).await
        }
    }
}

async fn generate(
    kind: SchematicKind,
    args: GenerateTargetArgs,
    routing_flag: Option<bool>,
    config: Option<&Utf8Path>,
) -> Result<()> {
    let folder = args
        .folder
        .canonicalize_utf8()
        .with_context(|| format!("Cannot resolve folder: {}", args.folder))?;

    // A folder outside any Angular workspace is a quiet no-op
    let workspace = match locate_workspace(&folder, args.root.as_deref())? {
        Some(workspace) => workspace,
        None => {
            debug!("No {} found for {}, nothing to do", MANIFEST_FILE_NAME, folder);
            return Ok(());
        }
    };
    debug!("Using workspace at {}", workspace.root);

    let manifest = workspace.load_manifest()?;

    // Empty input means the user changed their mind
    let Some(name) = prompt_name(kind, args.name)? else {
        debug!("No name given, cancelled");
        return Ok(());
    };

    let routing = if kind == SchematicKind::Module {
        match resolve_routing(routing_flag)? {
            Some(routing) => routing,
            None => {
                debug!("Routing choice aborted, cancelled");
                return Ok(());
            }
        }
    } else {
        false
    };

    let resolved = resolve_target(&workspace, &manifest, &folder)?;
    let settings = Settings::load(config, Some(&workspace.root))?;

    let command = GeneratorCommand {
        kind,
        target: resolved.schematic_target(&name),
        project: resolved.project,
        routing,
        options: settings.component,
    }
    .compose();

    if args.dry_run {
        println!("{}", command);
        return Ok(());
    }

    generator::check_ng_available()?;
    generator::run_in_shell(&command, &workspace.root).await?;

    output::success(&format!("{} generated", kind.name()));
    Ok(())
}

/// Pick the workspace: scan below an explicit root, or walk up from
/// the target folder.
fn locate_workspace(folder: &Utf8Path, root: Option<&Utf8Path>) -> Result<Option<Workspace>> {
    match root {
        Some(root) => {
            let root = root
                .canonicalize_utf8()
                .with_context(|| format!("Workspace root not found: {}", root))?;
            if !root.is_dir() {
                return Err(anyhow!("Workspace root is not a directory: {}", root));
            }
            Ok(Workspace::scan(&root))
        }
        None => Ok(Workspace::locate(folder)),
    }
}

/// Resolve the artifact name, prompting when not given on the command
/// line. Empty input cancels.
fn prompt_name(kind: SchematicKind, provided: Option<String>) -> Result<Option<String>> {
    let name = match provided {
        Some(name) => name,
        None => Input::<String>::new()
            .with_prompt(format!("{} name", kind.name()))
            .allow_empty(true)
            .interact_text()?,
    };
    Ok((!name.is_empty()).then_some(name))
}

/// Routing choice for a module; `None` means the user aborted.
fn resolve_routing(flag: Option<bool>) -> Result<Option<bool>> {
    if let Some(value) = flag {
        return Ok(Some(value));
    }
    let choice = Select::new()
        .with_prompt("Do you need a routing module?")
        .items(&["Yes", "No"])
        .default(0)
        .interact_opt()?;
    Ok(choice.map(|index| index == 0))
}
