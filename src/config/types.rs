use serde::{Deserialize, Serialize};

/// Layout of the generated help text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Prefix of the line listing an argument's names.
    pub names_label: String,
    /// Prefix of the description line.
    pub description_label: String,
    /// Appended after every entry.
    pub entry_separator: String,
    /// Shown instead of the name list for positional arguments.
    pub positional_placeholder: String,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            names_label: "Argument names: ".to_string(),
            description_label: "Description:    ".to_string(),
            entry_separator: "\n".to_string(),
            positional_placeholder: "[]".to_string(),
        }
    }
}
