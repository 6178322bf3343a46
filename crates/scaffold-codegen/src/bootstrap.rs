//! Project skeleton creation.

use std::fs;
use std::path::{Component, Path, PathBuf};
use tera::Tera;

use scaffold_core::naming;
use scaffold_core::project::model::ProjectSpecification;
use scaffold_core::project::{default_package_structure, STANDARD_SUB_PACKAGES};
use scaffold_core::{ScaffoldConfig, ScaffoldError, ScaffoldResult};

use crate::templates;

pub const REQUIREMENTS_FILE: &str = "API_REQUIREMENTS.md";
pub const STANDARDS_FILE: &str = "API_STANDARDS.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// `name` is the project name of the resolved specification.
    Created { name: String, path: PathBuf, files: usize },
    /// The target directory was already there; nothing was written.
    AlreadyExists(PathBuf),
}

impl BootstrapOutcome {
    pub fn path(&self) -> &Path {
        match self {
            BootstrapOutcome::Created { path, .. } => path,
            BootstrapOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Creates Spring Boot project skeletons below a workspace root.
pub struct ProjectBootstrapper {
    tera: Tera,
}

impl ProjectBootstrapper {
    pub fn new() -> ScaffoldResult<Self> {
        Ok(Self {
            tera: templates::engine()?,
        })
    }

    pub fn bootstrap(
        &self,
        workspace_root: &Path,
        spec: &ProjectSpecification,
        config: &ScaffoldConfig,
    ) -> ScaffoldResult<BootstrapOutcome> {
        let project_name = spec.project_name.trim();
        validate_project_name(project_name)?;
        let project_dir = std::path::absolute(workspace_root.join(project_name))
            .map_err(|e| ScaffoldError::fs(workspace_root, e))?;

        if project_dir.exists() {
            tracing::info!(path = %project_dir.display(), "project directory already exists");
            return Ok(BootstrapOutcome::AlreadyExists(project_dir));
        }

        if spec.base_package.trim().is_empty() {
            return Err(ScaffoldError::validation("base package must not be empty"));
        }
        naming::validate_package(&spec.base_package)?;
        let structure = spec
            .package_structure
            .clone()
            .unwrap_or_else(default_package_structure);
        for (sub_package, classes) in &structure {
            naming::validate_package(sub_package)?;
            for class_name in classes {
                naming::validate_type_name(class_name)?;
            }
        }

        let mut files = 0;
        let mut write = |path: PathBuf, content: &str| -> ScaffoldResult<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| ScaffoldError::fs(parent, e))?;
            }
            fs::write(&path, content).map_err(|e| ScaffoldError::fs(&path, e))?;
            tracing::debug!(path = %path.display(), "wrote project file");
            files += 1;
            Ok(())
        };

        write(project_dir.join("build.gradle"), templates::BUILD_GRADLE)?;

        let mut context = tera::Context::new();
        context.insert("project_name", &gradle_project_name(&project_dir, project_name));
        write(
            project_dir.join("settings.gradle"),
            &templates::render(&self.tera, templates::SETTINGS_GRADLE, &context)?,
        )?;

        let package_dir = project_dir
            .join(&config.source_root)
            .join(naming::package_to_path(&spec.base_package));

        for sub_package in STANDARD_SUB_PACKAGES {
            let dir = package_dir.join(sub_package);
            fs::create_dir_all(&dir).map_err(|e| ScaffoldError::fs(&dir, e))?;
        }

        for (sub_package, classes) in &structure {
            let dir = package_dir.join(naming::package_to_path(sub_package));
            fs::create_dir_all(&dir).map_err(|e| ScaffoldError::fs(&dir, e))?;

            for class_name in classes {
                let mut context = tera::Context::new();
                context.insert("package", &naming::join_package(&spec.base_package, sub_package));
                context.insert("class_name", class_name);
                write(
                    dir.join(format!("{}.java", class_name)),
                    &templates::render(&self.tera, templates::COMPONENT, &context)?,
                )?;
            }
        }

        let mut context = tera::Context::new();
        context.insert("package", &spec.base_package);
        write(
            package_dir.join("Application.java"),
            &templates::render(&self.tera, templates::APPLICATION, &context)?,
        )?;

        write(
            project_dir.join(&config.resources_root).join("application.yml"),
            templates::APPLICATION_YML,
        )?;

        if let Some(requirements) = spec.api_requirements.as_deref().filter(|t| !t.trim().is_empty()) {
            write(project_dir.join(REQUIREMENTS_FILE), requirements)?;
        }
        if let Some(standards) = spec.api_gold_standards.as_deref().filter(|t| !t.trim().is_empty()) {
            write(project_dir.join(STANDARDS_FILE), standards)?;
        }

        tracing::info!(
            project = %project_name,
            path = %project_dir.display(),
            files,
            "project bootstrapped"
        );
        Ok(BootstrapOutcome::Created {
            name: project_name.to_string(),
            path: project_dir,
            files,
        })
    }
}

/// The project name becomes a directory below the workspace root, so it must
/// stay there: no absolute paths and no `..` components.
fn validate_project_name(name: &str) -> ScaffoldResult<()> {
    if name.is_empty() {
        return Err(ScaffoldError::validation("project name must not be empty"));
    }
    let escapes = Path::new(name)
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(ScaffoldError::validation(format!(
            "project name '{}' must be a relative path inside the workspace",
            name
        )));
    }
    Ok(())
}

/// `./apps/billing` -> `billing`.
fn gradle_project_name(project_dir: &Path, fallback: &str) -> String {
    project_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| fallback.to_string())
}
