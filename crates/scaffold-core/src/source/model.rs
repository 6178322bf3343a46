//! Structural model of an existing Java class.

use serde::Serialize;
use std::collections::BTreeSet;

/// Declared access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    Protected,
    PackagePrivate,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    pub name: String,
    pub declared_type: String,
    pub visibility: Visibility,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodInfo {
    pub name: String,
    pub visibility: Visibility,
}

/// What the test synthesizer knows about a class.
///
/// Extracted once per call from source text and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceModel {
    pub package_name: String,
    pub class_name: String,
    /// Simple names of the annotations on the class declaration.
    pub markers: BTreeSet<String>,
    pub fields: Vec<FieldInfo>,
    pub methods: Vec<MethodInfo>,
}

impl SourceModel {
    pub fn has_marker(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn public_methods(&self) -> impl Iterator<Item = &MethodInfo> {
        self.methods
            .iter()
            .filter(|m| m.visibility == Visibility::Public)
    }

    /// Private fields, static ones included: each gets a collaborator mock.
    pub fn private_fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields
            .iter()
            .filter(|f| f.visibility == Visibility::Private)
    }
}
