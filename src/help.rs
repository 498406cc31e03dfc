//! Help text rendering.

use crate::config::HelpConfig;

/// One argument as seen by the help renderer.
#[derive(Debug, Clone, Copy)]
pub struct HelpEntry<'a> {
    pub names: &'a [String],
    pub description: Option<&'a str>,
}

/// Render `entries` in order, one block per argument.
pub fn render<'a>(entries: impl IntoIterator<Item = HelpEntry<'a>>, config: &HelpConfig) -> String {
    let mut help = String::new();
    for entry in entries {
        help.push_str(&config.names_label);
        if entry.names.is_empty() {
            help.push_str(&config.positional_placeholder);
        } else {
            help.push('[');
            help.push_str(&entry.names.join(", "));
            help.push(']');
        }
        help.push('\n');
        help.push_str(&config.description_label);
        help.push_str(entry.description.unwrap_or_default());
        help.push('\n');
        help.push_str(&config.entry_separator);
    }
    help
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let names = vec!["f".to_string(), "format".to_string()];
        let entries = [
            HelpEntry {
                names: &names,
                description: Some("Output format"),
            },
            HelpEntry {
                names: &[],
                description: None,
            },
        ];

        assert_eq!(
            render(entries, &HelpConfig::default()),
            "Argument names: [f, format]\n\
             Description:    Output format\n\
             \n\
             Argument names: []\n\
             Description:    \n\
             \n"
        );
    }

    #[test]
    fn empty_registry_renders_nothing() {
        assert_eq!(render(Vec::<HelpEntry<'_>>::new(), &HelpConfig::default()), "");
    }
}
