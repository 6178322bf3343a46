//! Feature module rendering.
//!
//! One template per artifact kind. Rendering is a pure function of the
//! [`ModuleSpecification`]: the same specification always yields the same
//! bytes.

use serde::Serialize;
use std::path::PathBuf;
use tera::Tera;

use scaffold_core::module::model::ModuleSpecification;
use scaffold_core::naming;
use scaffold_core::{ArtifactKind, GeneratedArtifact, ScaffoldResult};

use crate::templates;

#[derive(Debug, Serialize)]
struct FieldView<'a> {
    name: &'a str,
    ty: &'a str,
    accessor: String,
}

/// Renders the six artifacts of a feature module.
pub struct ArtifactRenderer {
    tera: Tera,
}

impl ArtifactRenderer {
    pub fn new() -> ScaffoldResult<Self> {
        Ok(Self {
            tera: templates::engine()?,
        })
    }

    /// Render Entity, Dto, Mapper, Repository, Service and Controller, in that order.
    ///
    /// Paths are relative to the base package directory: `customer/CustomerDto.java`.
    pub fn render(&self, spec: &ModuleSpecification) -> ScaffoldResult<Vec<GeneratedArtifact>> {
        let context = self.context(spec);
        let feature = spec.feature_package_name();

        ArtifactKind::MODULE
            .iter()
            .map(|&kind| {
                let content = templates::render(&self.tera, template_for(kind), &context)?;
                Ok(GeneratedArtifact {
                    kind,
                    relative_path: PathBuf::from(&feature).join(kind.file_name(&spec.entity_name)),
                    content,
                })
            })
            .collect()
    }

    fn context(&self, spec: &ModuleSpecification) -> tera::Context {
        let fields: Vec<FieldView> = spec
            .fields
            .iter()
            .map(|(name, ty)| FieldView {
                name,
                ty,
                accessor: naming::capitalize(name),
            })
            .collect();

        let mut context = tera::Context::new();
        context.insert("package", &spec.feature_package());
        context.insert("entity", &spec.entity_name);
        context.insert("feature", &spec.feature_package_name());
        context.insert("table", &spec.entity_name.to_uppercase());
        context.insert("fields", &fields);
        context.insert("methods", &spec.repository_methods);
        context
    }
}

fn template_for(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::Entity => templates::ENTITY,
        ArtifactKind::Dto => templates::DTO,
        ArtifactKind::Mapper => templates::MAPPER,
        ArtifactKind::Repository => templates::REPOSITORY,
        ArtifactKind::Service => templates::SERVICE,
        ArtifactKind::Controller => templates::CONTROLLER,
        ArtifactKind::Test => templates::UNIT_TEST,
    }
}
