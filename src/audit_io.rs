//*** START FILE: src/audit_io.rs ***//
use crate::error::AuditError;
use crate::types::audit_data::{AuditInput, AuditResult, ReportArtifacts};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const AUDIT_REPORT_FILE: &str = "audit_report.md";
pub const ENRICHMENT_TOOLKIT_FILE: &str = "enrichment_toolkit.md";
pub const REVISIONS_FILE: &str = "revisions.md";
pub const ROADMAP_FILE: &str = "roadmap.csv";
pub const INTERACTIVE_MAP_FILE: &str = "interactive_map.html";

const ARTIFACT_FILES: [&str; 5] = [
    AUDIT_REPORT_FILE,
    ENRICHMENT_TOOLKIT_FILE,
    REVISIONS_FILE,
    ROADMAP_FILE,
    INTERACTIVE_MAP_FILE,
];

/// Parses and validates an audit request.
pub fn parse_audit_input(json: &str) -> Result<AuditInput, AuditError> {
    let input: AuditInput = serde_json::from_str(json)?;
    input.validate()?;
    Ok(input)
}

/// Loads and validates an audit request from a JSON file.
pub fn load_audit_input(file_path: &Path) -> Result<AuditInput, AuditError> {
    let file = File::open(file_path).map_err(|e| AuditError::io(file_path, e))?;
    let reader = BufReader::new(file);
    let input: AuditInput = serde_json::from_reader(reader)?;
    input.validate()?;
    Ok(input)
}

pub fn result_to_json(result: &AuditResult, pretty: bool) -> Result<String, AuditError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Saves the full audit result as JSON.
pub fn save_audit_result(result: &AuditResult, file_path: &Path, pretty: bool) -> Result<(), AuditError> {
    let json = result_to_json(result, pretty)?;
    let file = File::create(file_path).map_err(|e| AuditError::io(file_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| AuditError::io(file_path, e))?;
    Ok(())
}

/// Writes the five report artifacts into `dir`, creating it if needed.
/// Returns the written paths in a fixed order.
pub fn write_artifacts(artifacts: &ReportArtifacts, dir: &Path) -> Result<Vec<PathBuf>, AuditError> {
    fs::create_dir_all(dir).map_err(|e| AuditError::io(dir, e))?;

    let contents = [
        &artifacts.audit_report_md,
        &artifacts.enrichment_toolkit_md,
        &artifacts.revisions_md,
        &artifacts.roadmap_csv,
        &artifacts.interactive_map_html,
    ];
    let files = ARTIFACT_FILES.into_iter().zip(contents);

    let mut written = Vec::with_capacity(ARTIFACT_FILES.len());
    for (name, contents) in files {
        let path = dir.join(name);
        fs::write(&path, contents).map_err(|e| AuditError::io(&path, e))?;
        written.push(path);
    }
    info!("Wrote {} report artifact(s) to {}", written.len(), dir.display());
    Ok(written)
}

/// Writes the result JSON to `output` and the artifacts into `artifacts_dir`.
///
/// Artifacts are staged in a sibling directory and moved into place only once
/// the result file is written. If the result cannot be written, nothing is
/// published and the staging directory is removed.
pub fn export_audit(
    result: &AuditResult,
    output: Option<&Path>,
    artifacts_dir: Option<&Path>,
    pretty: bool,
) -> Result<(), AuditError> {
    let Some(dir) = artifacts_dir else {
        return match output {
            Some(path) => save_audit_result(result, path, pretty),
            None => Ok(()),
        };
    };

    let staging = staging_dir_for(dir);
    let outcome = stage_and_publish(result, output, &staging, dir, pretty);
    if outcome.is_err() && staging.exists() {
        if let Err(e) = fs::remove_dir_all(&staging) {
            warn!("Could not remove staged artifacts at {}: {}", staging.display(), e);
        }
    }
    outcome
}

fn stage_and_publish(
    result: &AuditResult,
    output: Option<&Path>,
    staging: &Path,
    dir: &Path,
    pretty: bool,
) -> Result<(), AuditError> {
    write_artifacts(&result.artifacts, staging)?;
    if let Some(path) = output {
        save_audit_result(result, path, pretty)?;
    }
    if let Err(e) = publish_artifacts(staging, dir) {
        if let Some(path) = output {
            if let Err(remove_err) = fs::remove_file(path) {
                warn!("Could not remove {}: {}", path.display(), remove_err);
            }
        }
        return Err(e);
    }
    Ok(())
}

/// `reports/` stages in `.reports.staging/` beside it.
fn staging_dir_for(dir: &Path) -> PathBuf {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifacts".to_string());
    let mut staging = dir.to_path_buf();
    staging.set_file_name(format!(".{}.staging", name));
    staging
}

fn publish_artifacts(staging: &Path, dir: &Path) -> Result<(), AuditError> {
    fs::create_dir_all(dir).map_err(|e| AuditError::io(dir, e))?;
    for name in ARTIFACT_FILES {
        let target = dir.join(name);
        fs::rename(staging.join(name), &target).map_err(|e| AuditError::io(&target, e))?;
    }
    fs::remove_dir(staging).map_err(|e| AuditError::io(staging, e))?;
    info!("Published report artifacts to {}", dir.display());
    Ok(())
}

//*** END FILE: src/audit_io.rs ***//
