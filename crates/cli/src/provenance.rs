use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sidecar written next to every hull report.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub crate_version: &'static str,
    pub command: String,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    /// Capture the git revision and the caller's location.
    #[track_caller]
    pub fn new(command: &str, params: Value) -> Self {
        let loc = Location::caller();
        Self {
            code_rev: current_git_rev(),
            crate_version: graham_scan::VERSION,
            command: command.to_string(),
            callsite: Callsite {
                file: loc.file(),
                line: loc.line(),
            },
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact>.provenance.json` recording `prov` with `artifact` as output.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut prov: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    prov.outputs.push(artifact.to_string_lossy().into_owned());
    fs::write(&path, serde_json::to_vec_pretty(&prov)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "provenance");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return from_env.to_string();
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
