//! Doctor command - check the environment for the Angular toolchain

use std::sync::LazyLock;
use std::time::Duration;

use anyhow::Result;
use camino::Utf8PathBuf;
use futures::future::join_all;
use regex::Regex;
use tokio::process::Command;

use ngsmith_core::discovery::Workspace;
use ngsmith_core::generator::NG_COMMAND;

use crate::output;

/// Pre-compiled regex for extracting version numbers from probe output
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+\.\d+(?:\.\d+)?)").expect("version regex is valid"));

/// Timeout for each version probe
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Node version the Angular tooling requires
const MIN_NODE_VERSION: &str = "18.13.0";

/// A tool the generate flow depends on
struct ToolProbe {
    command: &'static str,
    version_args: &'static [&'static str],
    min_version: Option<&'static str>,
    required: bool,
    hint: &'static str,
}

const PROBES: &[ToolProbe] = &[
    ToolProbe {
        command: NG_COMMAND,
        version_args: &["version"],
        min_version: None,
        required: true,
        hint: "npm install -g @angular/cli",
    },
    ToolProbe {
        command: "node",
        version_args: &["--version"],
        min_version: Some(MIN_NODE_VERSION),
        required: true,
        hint: "https://nodejs.org",
    },
    ToolProbe {
        command: "npm",
        version_args: &["--version"],
        min_version: None,
        required: false,
        hint: "ships with node",
    },
];

/// Probe outcome for one tool
enum ProbeResult {
    Found {
        version: Option<String>,
        outdated: bool,
    },
    Missing,
}

pub async fn run() -> Result<()> {
    let spinner = output::spinner("Checking environment...");
    let results = join_all(PROBES.iter().map(probe_tool)).await;
    spinner.finish_and_clear();

    output::header("Toolchain");
    let mut missing_required = false;
    for (probe, result) in PROBES.iter().zip(results) {
        match result {
            ProbeResult::Found { version, outdated } => {
                let version = version.unwrap_or_else(|| "unknown version".to_string());
                if outdated {
                    output::warning(&format!(
                        "{} {} (requires >= {})",
                        probe.command,
                        version,
                        probe.min_version.unwrap_or("?")
                    ));
                } else {
                    output::success(&format!("{} {}", probe.command, version));
                }
            }
            ProbeResult::Missing => {
                if probe.required {
                    missing_required = true;
                    output::error(&format!("{} not found ({})", probe.command, probe.hint));
                } else {
                    output::warning(&format!("{} not found ({})", probe.command, probe.hint));
                }
            }
        }
    }

    output::header("Workspace");
    let cwd = Utf8PathBuf::try_from(std::env::current_dir()?)?;
    match Workspace::locate(&cwd) {
        Some(workspace) => {
            output::success(&format!("Manifest found at {}", workspace.manifest_path));
            match workspace.load_manifest() {
                Ok(manifest) => {
                    let names: Vec<&str> =
                        manifest.projects.keys().map(String::as_str).collect();
                    output::kv("Projects", &names.join(", "));
                    if let Some(default) = &manifest.default_project {
                        output::kv("Default project", default);
                    }
                }
                Err(e) => output::error(&format!("Manifest unreadable: {}", e)),
            }
        }
        None => output::info("No angular.json above the current directory"),
    }

    if missing_required {
        println!();
        output::warning("Generation will fail until the missing tools are installed");
    }

    Ok(())
}

async fn probe_tool(probe: &ToolProbe) -> ProbeResult {
    if which::which(probe.command).is_err() {
        return ProbeResult::Missing;
    }

    let version = probe_version(probe).await;
    let outdated = match (&version, probe.min_version) {
        (Some(found), Some(required)) => !version_satisfies(found, required),
        _ => false,
    };

    ProbeResult::Found { version, outdated }
}

async fn probe_version(probe: &ToolProbe) -> Option<String> {
    let probed = tokio::time::timeout(
        PROBE_TIMEOUT,
        Command::new(probe.command).args(probe.version_args).output(),
    )
    .await;

    match probed {
        Ok(Ok(output)) => {
            let text = if output.stdout.is_empty() {
                String::from_utf8_lossy(&output.stderr).to_string()
            } else {
                String::from_utf8_lossy(&output.stdout).to_string()
            };
            parse_version(&text)
        }
        _ => None,
    }
}

/// Extract a bare version number from probe output.
fn parse_version(text: &str) -> Option<String> {
    VERSION_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|matched| matched.as_str().to_string())
}

/// Semver comparison, permissive when either side does not parse.
fn version_satisfies(actual: &str, required: &str) -> bool {
    match (
        semver::Version::parse(actual),
        semver::Version::parse(required),
    ) {
        (Ok(actual), Ok(required)) => actual >= required,
        _ => true,
    }
}
