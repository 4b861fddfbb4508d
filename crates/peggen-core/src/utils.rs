/// Strict and reserved keywords of Rust 2024.
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Check whether `name` cannot be used as a plain Rust identifier.
///
/// # Examples
/// ```
/// use peggen_core::utils::is_rust_keyword;
/// assert!(is_rust_keyword("match"));
/// assert!(!is_rust_keyword("matches"));
/// ```
pub fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

/// Make `name` usable as an emitted identifier.
///
/// Appends `_` when the name is a Rust keyword or one of `taken`.
///
/// # Examples
/// ```
/// use peggen_core::utils::fix_reserved;
/// assert_eq!(fix_reserved("type", &[]), "type_");
/// assert_eq!(fix_reserved("mark", &["mark"]), "mark_");
/// assert_eq!(fix_reserved("expr", &["mark"]), "expr");
/// ```
pub fn fix_reserved(name: &str, taken: &[&str]) -> String {
    if is_rust_keyword(name) || taken.contains(&name) {
        format!("{name}_")
    } else {
        name.to_string()
    }
}
