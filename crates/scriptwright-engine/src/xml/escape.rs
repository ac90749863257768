/// Escapes user-supplied text for embedding in the exported document.
///
/// Substitutions run in a fixed order, ampersand first, so entities
/// introduced by the later replacements are never double-escaped:
/// `&` → `&amp;`, `<` → `&lt;`, `>` → `&gt;`, `"` → `&quot;`, `'` → `&apos;`.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
