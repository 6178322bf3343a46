//! Feature module specifications.

pub mod model;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ScaffoldError, ScaffoldResult};
use crate::naming;
use model::ModuleSpecification;

/// Build a validated module specification.
///
/// Field names that collide with Java reserved words are escaped; every
/// other malformed input is rejected with a validation error.
pub fn build_specification(
    entity_name: &str,
    fields: &BTreeMap<String, String>,
    repository_methods: &[String],
    base_package: &str,
    project_root: &Path,
) -> ScaffoldResult<ModuleSpecification> {
    let entity_name = entity_name.trim();
    naming::validate_type_name(entity_name)?;
    naming::validate_package(base_package)?;

    let feature = entity_name.to_lowercase();
    if naming::is_reserved_word(&feature) {
        return Err(ScaffoldError::validation(format!(
            "entity '{}' would produce feature package '{}', which is a reserved word",
            entity_name, feature
        )));
    }

    let mut escaped = BTreeMap::new();
    for (name, ty) in fields {
        naming::validate_fragment("field type", ty)?;
        let field = naming::escape_field_name(name.trim())?;
        if escaped.contains_key(&field) {
            return Err(ScaffoldError::validation(format!(
                "field '{}' collides with another field named '{}'",
                name.trim(),
                field
            )));
        }
        escaped.insert(field, ty.trim().to_string());
    }

    let methods = repository_methods
        .iter()
        .map(|m| naming::normalize_method_signature(m))
        .collect::<ScaffoldResult<Vec<_>>>()?;

    Ok(ModuleSpecification {
        entity_name: entity_name.to_string(),
        fields: escaped,
        repository_methods: methods,
        base_package: base_package.to_string(),
        project_root: project_root.to_path_buf(),
    })
}
