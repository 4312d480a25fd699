//! Manifest template for `prep init`.
//!
//! The template is stored as a valid TOML file and returned as a
//! commented-out example manifest.

/// Default manifest template (valid TOML).
const MANIFEST_TEMPLATE: &str = include_str!("../templates/prep.toml");

/// Returns the manifest template as a commented-out example.
pub fn manifest_template() -> String {
    comment_template(MANIFEST_TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example manifest.
///
/// Lines that are already comments are preserved as-is. Non-comment,
/// non-empty lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
