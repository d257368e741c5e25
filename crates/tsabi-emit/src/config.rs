use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    pub indent_style: IndentStyle,
    /// Emit a doc block above every member of the contract interface.
    pub include_docs: bool,
    /// Module specifier the typings import the companion types from.
    pub common_types_module: String,
    /// Write `import type { .. }` for projects compiled with `verbatimModuleSyntax`.
    pub type_only_imports: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Spaces(2),
            include_docs: true,
            common_types_module: "./common.types".to_string(),
            type_only_imports: false,
        }
    }
}

impl EmitterConfig {
    pub fn without_docs(mut self) -> Self {
        self.include_docs = false;
        self
    }

    pub fn import_keyword(&self) -> &'static str {
        if self.type_only_imports {
            "import type"
        } else {
            "import"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentStyle {
    Spaces(usize),
    Tabs,
}

impl IndentStyle {
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}
