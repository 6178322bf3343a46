//! Java naming rules for caller-supplied identifiers.
//!
//! Everything a caller hands us ends up spliced into Java source text, so it
//! is checked here first: identifiers must be identifiers, reserved words are
//! rejected (or escaped, for field names) and free-form fragments such as
//! types and method signatures may not contain statement or block delimiters.

use std::path::PathBuf;

use crate::error::{ScaffoldError, ScaffoldResult};

/// Java reserved words and literals that cannot be used as identifiers.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while", "true", "false", "null", "_",
];

/// Characters that would end a declaration or open/close a block.
const FORBIDDEN_FRAGMENT_CHARS: &[char] = &[';', '{', '}', '\n', '\r'];

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Whether `name` is lexically a Java identifier (reserved words included).
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// Validate a type name used to derive class and file names.
pub fn validate_type_name(name: &str) -> ScaffoldResult<()> {
    if !is_identifier(name) {
        return Err(ScaffoldError::validation(format!(
            "'{}' is not a valid Java type name",
            name
        )));
    }
    if is_reserved_word(name) {
        return Err(ScaffoldError::validation(format!(
            "'{}' is a reserved word and cannot name a type",
            name
        )));
    }
    Ok(())
}

/// Validate a dotted package name. An empty package (default package) is allowed.
pub fn validate_package(package: &str) -> ScaffoldResult<()> {
    if package.is_empty() {
        return Ok(());
    }
    for segment in package.split('.') {
        if !is_identifier(segment) || is_reserved_word(segment) {
            return Err(ScaffoldError::validation(format!(
                "'{}' is not a valid package name (bad segment '{}')",
                package, segment
            )));
        }
    }
    Ok(())
}

/// Escape a field name: reserved words get a trailing underscore.
pub fn escape_field_name(name: &str) -> ScaffoldResult<String> {
    if !is_identifier(name) {
        return Err(ScaffoldError::validation(format!(
            "'{}' is not a valid Java field name",
            name
        )));
    }
    if is_reserved_word(name) {
        Ok(format!("{}_", name))
    } else {
        Ok(name.to_string())
    }
}

/// Validate a free-form Java fragment (a type or a method signature).
pub fn validate_fragment(kind: &str, text: &str) -> ScaffoldResult<()> {
    if text.trim().is_empty() {
        return Err(ScaffoldError::validation(format!("{} must not be empty", kind)));
    }
    if let Some(c) = text.chars().find(|c| FORBIDDEN_FRAGMENT_CHARS.contains(c)) {
        return Err(ScaffoldError::validation(format!(
            "{} '{}' contains forbidden character {:?}",
            kind,
            text.trim(),
            c
        )));
    }
    Ok(())
}

/// Normalize a repository method signature: trims it and drops one trailing `;`.
pub fn normalize_method_signature(signature: &str) -> ScaffoldResult<String> {
    let trimmed = signature.trim();
    let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();
    validate_fragment("repository method", trimmed)?;
    Ok(trimmed.to_string())
}

/// `email` -> `Email`, used for accessor names.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `com.acme.app` -> `com/acme/app`.
pub fn package_to_path(package: &str) -> PathBuf {
    package.split('.').filter(|s| !s.is_empty()).collect()
}

/// Join package segments, skipping empty ones.
pub fn join_package(base: &str, child: &str) -> String {
    match (base.is_empty(), child.is_empty()) {
        (true, _) => child.to_string(),
        (false, true) => base.to_string(),
        (false, false) => format!("{}.{}", base, child),
    }
}
