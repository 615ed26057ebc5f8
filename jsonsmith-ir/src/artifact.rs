//! Rendered output of one generation run.

/// One rendered type declaration.
#[derive(Debug, Clone)]
pub struct RenderedType {
    /// The composite type's name.
    pub name: String,
    /// The rendered declaration body, ending with a newline.
    pub body: String,
}

/// The complete output of rendering one TypeRegistry.
#[derive(Debug, Clone)]
pub struct Artifact {
    /// Suggested file name, extension included (e.g. "JsonClass.kt").
    pub file_name: String,
    /// Import/using block, when the target needs one. Ends with a newline.
    pub imports: Option<String>,
    /// Rendered declarations in registry insertion order (nested first).
    pub types: Vec<RenderedType>,
    /// Final file content: imports plus declarations in reverse insertion
    /// order, so the root type reads first.
    pub text: String,
}

impl Artifact {
    /// Compose the final text from an import block and rendered types.
    ///
    /// Declarations are joined in reverse insertion order with one blank
    /// line between them; the import block, when present, is separated from
    /// the first declaration by one blank line.
    pub fn compose(file_name: String, imports: Option<String>, types: Vec<RenderedType>) -> Self {
        let bodies = types
            .iter()
            .rev()
            .map(|t| t.body.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        let text = match &imports {
            Some(block) => format!("{block}\n{bodies}"),
            None => bodies,
        };
        Self {
            file_name,
            imports,
            types,
            text,
        }
    }
}
