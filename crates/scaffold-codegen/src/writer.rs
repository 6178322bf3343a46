//! Writing generated artifacts to disk.
//!
//! `Direct` writes files one after the other; if one fails the earlier ones
//! stay on disk. `Staged` writes every file to a hidden temporary sibling
//! first and only renames them into place once all of them were written.

use std::fs;
use std::path::{Path, PathBuf};

use scaffold_core::module::model::ModuleSpecification;
use scaffold_core::naming;
use scaffold_core::{GeneratedArtifact, ScaffoldConfig, ScaffoldError, ScaffoldResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Direct,
    Staged,
}

impl WriteMode {
    pub fn from_config(config: &ScaffoldConfig) -> Self {
        if config.atomic_writes {
            WriteMode::Staged
        } else {
            WriteMode::Direct
        }
    }
}

/// Result of writing a feature module.
#[derive(Debug, Clone)]
pub struct WriteReport {
    pub feature_dir: PathBuf,
    pub written: Vec<PathBuf>,
}

/// Persists the artifacts of a feature module under the project source tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureModuleWriter {
    mode: WriteMode,
}

impl FeatureModuleWriter {
    pub fn new(mode: WriteMode) -> Self {
        Self { mode }
    }

    /// `{project_root}/{source_root}/{base package as path}`.
    pub fn package_dir(spec: &ModuleSpecification, config: &ScaffoldConfig) -> PathBuf {
        spec.project_root
            .join(&config.source_root)
            .join(naming::package_to_path(&spec.base_package))
    }

    /// `{package_dir}/{feature}`.
    pub fn feature_dir(spec: &ModuleSpecification, config: &ScaffoldConfig) -> PathBuf {
        Self::package_dir(spec, config).join(spec.feature_package_name())
    }

    /// Write `artifacts` (paths relative to the base package directory).
    pub fn write(
        &self,
        spec: &ModuleSpecification,
        artifacts: &[GeneratedArtifact],
        config: &ScaffoldConfig,
    ) -> ScaffoldResult<WriteReport> {
        let feature_dir = Self::feature_dir(spec, config);
        fs::create_dir_all(&feature_dir).map_err(|e| ScaffoldError::fs(&feature_dir, e))?;

        let written = write_artifacts(&Self::package_dir(spec, config), artifacts, self.mode)?;
        tracing::info!(
            entity = %spec.entity_name,
            dir = %feature_dir.display(),
            files = written.len(),
            "feature module written"
        );

        Ok(WriteReport { feature_dir, written })
    }
}

/// Write artifacts below `base`, creating directories as needed.
pub fn write_artifacts(
    base: &Path,
    artifacts: &[GeneratedArtifact],
    mode: WriteMode,
) -> ScaffoldResult<Vec<PathBuf>> {
    match mode {
        WriteMode::Direct => write_direct(base, artifacts),
        WriteMode::Staged => write_staged(base, artifacts),
    }
}

fn ensure_parent(path: &Path) -> ScaffoldResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::fs(parent, e))?;
    }
    Ok(())
}

fn write_direct(base: &Path, artifacts: &[GeneratedArtifact]) -> ScaffoldResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = base.join(&artifact.relative_path);
        ensure_parent(&path)?;
        fs::write(&path, &artifact.content).map_err(|e| ScaffoldError::fs(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.scaffold-tmp", name))
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (tmp, _) in staged {
        if let Err(e) = fs::remove_file(tmp) {
            tracing::warn!(path = %tmp.display(), error = %e, "failed to remove staged file");
        }
    }
}

fn write_staged(base: &Path, artifacts: &[GeneratedArtifact]) -> ScaffoldResult<Vec<PathBuf>> {
    let mut staged: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = base.join(&artifact.relative_path);
        let tmp = staging_path(&path);

        let result = ensure_parent(&path).and_then(|_| {
            if path.is_dir() {
                return Err(ScaffoldError::fs(
                    &path,
                    std::io::Error::other("target path is a directory"),
                ));
            }
            fs::write(&tmp, &artifact.content).map_err(|e| ScaffoldError::fs(&tmp, e))
        });

        if let Err(e) = result {
            discard(&staged);
            return Err(e);
        }
        staged.push((tmp, path));
    }

    let mut written = Vec::with_capacity(staged.len());
    for (i, (tmp, path)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(tmp, path) {
            discard(&staged[i..]);
            return Err(ScaffoldError::fs(path, e));
        }
        written.push(path.clone());
    }

    Ok(written)
}
