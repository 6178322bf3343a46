//! Generated artifacts.

use serde::Serialize;
use std::path::PathBuf;

/// Kinds of generated file. The first six make up a feature module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Entity,
    Dto,
    Mapper,
    Repository,
    Service,
    Controller,
    /// A synthesized test skeleton for an existing class.
    Test,
}

impl ArtifactKind {
    /// Feature module kinds, in generation order.
    pub const MODULE: [ArtifactKind; 6] = [
        ArtifactKind::Entity,
        ArtifactKind::Dto,
        ArtifactKind::Mapper,
        ArtifactKind::Repository,
        ArtifactKind::Service,
        ArtifactKind::Controller,
    ];

    /// Type-name suffix appended to the entity name.
    pub fn suffix(self) -> &'static str {
        match self {
            ArtifactKind::Entity => "Entity",
            ArtifactKind::Dto => "Dto",
            ArtifactKind::Mapper => "Mapper",
            ArtifactKind::Repository => "Repository",
            ArtifactKind::Service => "Service",
            ArtifactKind::Controller => "Controller",
            ArtifactKind::Test => "Test",
        }
    }

    /// `Customer` -> `CustomerRepository`, `CustomerService` -> `CustomerServiceTest`.
    pub fn type_name(self, entity_name: &str) -> String {
        format!("{}{}", entity_name, self.suffix())
    }

    /// `Customer` -> `CustomerRepository.java`.
    pub fn file_name(self, entity_name: &str) -> String {
        format!("{}.java", self.type_name(entity_name))
    }
}

/// A rendered file, addressed relative to the directory it is written into.
///
/// Artifacts have no identity beyond their path: writing the same path twice
/// keeps the last content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub relative_path: PathBuf,
    pub content: String,
}

impl GeneratedArtifact {
    pub fn file_name(&self) -> String {
        self.relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let names: Vec<String> = ArtifactKind::MODULE
            .iter()
            .map(|k| k.file_name("Customer"))
            .collect();
        assert_eq!(
            names,
            vec![
                "CustomerEntity.java",
                "CustomerDto.java",
                "CustomerMapper.java",
                "CustomerRepository.java",
                "CustomerService.java",
                "CustomerController.java",
            ]
        );
        assert_eq!(ArtifactKind::Test.file_name("CustomerService"), "CustomerServiceTest.java");
    }
}
