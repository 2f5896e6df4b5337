//! Display language selection.
//!
//! The language is an explicit value threaded through config and rendering,
//! never ambient global state.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(clap::ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// The welcome/help message shown on demand.
    #[must_use]
    pub fn help_message(self) -> &'static str {
        match self {
            Language::English => "Welcome to Cellular Automaton App!",
            Language::French => "Bienvenue dans l'application d'automates cellulaires !",
        }
    }

    /// Label prefixing the decimal value of the rule.
    #[must_use]
    pub fn model_label(self) -> &'static str {
        match self {
            Language::English => "Model: ",
            Language::French => "Modèle : ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_message_is_localized() {
        assert_eq!(
            Language::English.help_message(),
            "Welcome to Cellular Automaton App!"
        );
        assert!(Language::French.help_message().starts_with("Bienvenue"));
    }

    #[test]
    fn default_language_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
