//! Tree-sitter backed Java extractor.

use std::collections::BTreeSet;

use scaffold_core::source::{FieldInfo, MethodInfo, SourceModel, Visibility};
use scaffold_core::{ScaffoldError, ScaffoldResult};

use crate::extractor::SourceExtractor;

/// Extracts a [`SourceModel`] from Java source using tree-sitter-java.
#[derive(Debug, Clone)]
pub struct JavaExtractor {
    fallback_package: String,
}

impl JavaExtractor {
    /// `fallback_package` is used when the source has no package declaration.
    pub fn new(fallback_package: impl Into<String>) -> Self {
        Self {
            fallback_package: fallback_package.into(),
        }
    }
}

impl Default for JavaExtractor {
    fn default() -> Self {
        Self::new("com.generated")
    }
}

impl SourceExtractor for JavaExtractor {
    fn extract(&self, source: &str, class_name: &str) -> ScaffoldResult<SourceModel> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_java::LANGUAGE.into())
            .map_err(|e| ScaffoldError::Parse(format!("cannot load Java grammar: {}", e)))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ScaffoldError::Parse("parser produced no tree".to_string()))?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(ScaffoldError::Parse(format!(
                "invalid Java source near line {}",
                first_error_line(&root)
            )));
        }

        let package_name = package_name(&root, source).unwrap_or_else(|| self.fallback_package.clone());

        let class = top_level_class(&root, source, class_name)
            .ok_or_else(|| ScaffoldError::ClassNotFound(class_name.to_string()))?;

        let (markers, _, _) = read_modifiers(&class, source);
        let mut fields = Vec::new();
        let mut methods = Vec::new();

        if let Some(body) = class.child_by_field_name("body") {
            for i in 0..body.child_count() {
                let Some(member) = body.child(i) else { continue };
                match member.kind() {
                    "field_declaration" => collect_fields(&member, source, &mut fields),
                    "method_declaration" => {
                        if let Some(name) = member.child_by_field_name("name") {
                            let (_, visibility, _) = read_modifiers(&member, source);
                            methods.push(MethodInfo {
                                name: text(&name, source),
                                visibility,
                            });
                        }
                    }
                    _ => {}
                }
            }
        }

        tracing::debug!(
            class = class_name,
            package = %package_name,
            fields = fields.len(),
            methods = methods.len(),
            "extracted source model"
        );

        Ok(SourceModel {
            package_name,
            class_name: class_name.to_string(),
            markers,
            fields,
            methods,
        })
    }
}

fn text(node: &tree_sitter::Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

fn first_error_line(node: &tree_sitter::Node) -> usize {
    if node.is_error() || node.is_missing() {
        return node.start_position().row + 1;
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            if child.has_error() {
                return first_error_line(&child);
            }
        }
    }
    node.start_position().row + 1
}

fn package_name(root: &tree_sitter::Node, source: &str) -> Option<String> {
    for i in 0..root.child_count() {
        let Some(child) = root.child(i) else { continue };
        if child.kind() != "package_declaration" {
            continue;
        }
        for j in 0..child.child_count() {
            if let Some(name) = child.child(j) {
                if matches!(name.kind(), "scoped_identifier" | "identifier") {
                    return Some(text(&name, source));
                }
            }
        }
    }
    None
}

fn top_level_class<'tree>(
    root: &tree_sitter::Node<'tree>,
    source: &str,
    class_name: &str,
) -> Option<tree_sitter::Node<'tree>> {
    for i in 0..root.child_count() {
        let Some(child) = root.child(i) else { continue };
        if child.kind() != "class_declaration" {
            continue;
        }
        if let Some(name) = child.child_by_field_name("name") {
            if name.utf8_text(source.as_bytes()).ok() == Some(class_name) {
                return Some(child);
            }
        }
    }
    None
}

/// Read the `modifiers` child of a declaration: annotation simple names,
/// access level and whether it is static.
fn read_modifiers(node: &tree_sitter::Node, source: &str) -> (BTreeSet<String>, Visibility, bool) {
    let mut markers = BTreeSet::new();
    let mut visibility = Visibility::PackagePrivate;
    let mut is_static = false;

    for i in 0..node.child_count() {
        let Some(modifiers) = node.child(i) else { continue };
        if modifiers.kind() != "modifiers" {
            continue;
        }
        for j in 0..modifiers.child_count() {
            let Some(modifier) = modifiers.child(j) else { continue };
            match modifier.kind() {
                "marker_annotation" | "annotation" => {
                    if let Some(name) = modifier.child_by_field_name("name") {
                        let full = text(&name, source);
                        let simple = full.rsplit('.').next().unwrap_or(&full).to_string();
                        markers.insert(simple);
                    }
                }
                "public" => visibility = Visibility::Public,
                "protected" => visibility = Visibility::Protected,
                "private" => visibility = Visibility::Private,
                "static" => is_static = true,
                _ => {}
            }
        }
    }

    (markers, visibility, is_static)
}

/// One [`FieldInfo`] per declarator: `private int a, b;` yields two fields.
fn collect_fields(node: &tree_sitter::Node, source: &str, fields: &mut Vec<FieldInfo>) {
    let (_, visibility, is_static) = read_modifiers(node, source);
    let declared_type = node
        .child_by_field_name("type")
        .map(|t| text(&t, source))
        .unwrap_or_default();

    for i in 0..node.child_count() {
        let Some(declarator) = node.child(i) else { continue };
        if declarator.kind() != "variable_declarator" {
            continue;
        }
        if let Some(name) = declarator.child_by_field_name("name") {
            fields.push(FieldInfo {
                name: text(&name, source),
                declared_type: declared_type.clone(),
                visibility,
                is_static,
            });
        }
    }
}
