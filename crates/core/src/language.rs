//! Filename to editor-language detection.
//!
//! The editor picks syntax highlighting from the language id returned
//! here. Ids follow the common Monaco/VS Code naming.

/// Language id used when nothing matches.
pub const PLAINTEXT: &str = "plaintext";

/// Files recognised by their whole name rather than their extension.
const WELL_KNOWN_FILES: &[(&str, &str)] = &[
    ("dockerfile", "dockerfile"),
    ("makefile", "makefile"),
    ("cmakelists.txt", "cmake"),
    (".gitignore", "ignore"),
    (".env", "dotenv"),
];

/// Extension (lowercase, no dot) to language id.
const EXTENSIONS: &[(&str, &str)] = &[
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("py", "python"),
    ("ipynb", "json"),
    ("rs", "rust"),
    ("go", "go"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("rb", "ruby"),
    ("php", "php"),
    ("swift", "swift"),
    ("r", "r"),
    ("jl", "julia"),
    ("sql", "sql"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("json", "json"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("toml", "toml"),
    ("xml", "xml"),
    ("html", "html"),
    ("htm", "html"),
    ("css", "css"),
    ("scss", "scss"),
    ("less", "less"),
    ("md", "markdown"),
    ("mdx", "markdown"),
    ("tex", "latex"),
    ("csv", "csv"),
    ("smi", "smiles"),
    ("smiles", "smiles"),
    ("mol", "mol"),
    ("sdf", "mol"),
    ("txt", PLAINTEXT),
];

/// Detect the editor language for `filename`.
///
/// Well-known filenames win over extensions. Matching is
/// case-insensitive. Unknown or missing extensions yield [`PLAINTEXT`].
///
/// # Examples
///
/// ```
/// use labdesk_core::language::detect_language;
/// assert_eq!(detect_language("main.rs"), "rust");
/// assert_eq!(detect_language("src/App.TSX"), "typescript");
/// assert_eq!(detect_language("Dockerfile"), "dockerfile");
/// assert_eq!(detect_language("LICENSE"), "plaintext");
/// ```
pub fn detect_language(filename: &str) -> &'static str {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .to_ascii_lowercase();

    if let Some((_, lang)) = WELL_KNOWN_FILES.iter().find(|(name, _)| *name == base) {
        return *lang;
    }

    let Some((stem, ext)) = base.rsplit_once('.') else {
        return PLAINTEXT;
    };
    // Dotfiles such as `.bashrc` have no extension.
    if stem.is_empty() {
        return PLAINTEXT;
    }

    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
        .unwrap_or(PLAINTEXT)
}
