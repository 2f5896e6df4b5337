//! Application wiring: input validation and the construct/preview/run/render
//! pipeline.

use std::io::Write;

use anyhow::Context;

use elementum_core::{Automaton, Rule};

use crate::model::config::AppConfig;
use crate::ui::lang::Language;
use crate::ui::render;

/// Required decimal digit count for rule input.
pub const RULE_DIGITS: usize = 8;

/// The application: owns the config and drives one engine per invocation.
pub struct App {
    pub config: AppConfig,
}

impl App {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configured display language.
    #[must_use]
    pub fn language(&self) -> Language {
        self.config.display.language
    }

    /// Parses and validates rule input text.
    ///
    /// The text is parsed as an integer first, then the *parsed value* must
    /// have exactly [`RULE_DIGITS`] decimal digits. The parse drops leading
    /// zeros, so `"00001010"` is rejected as a 4-digit value.
    pub fn validate_rule(text: &str) -> anyhow::Result<Rule> {
        let rule = Rule::parse(text).context("Invalid binary input")?;
        if rule.to_string().len() != RULE_DIGITS {
            anyhow::bail!("Enter a binary number with {RULE_DIGITS} bits");
        }
        Ok(rule)
    }

    /// Runs the full pipeline for one rule input and writes the rendered
    /// grid plus the localized decimal label to `out`.
    ///
    /// The grid is rendered before the decimal label is computed, so a rule
    /// whose digits are not all binary still renders its grid and then
    /// fails on the label.
    pub fn run<W: Write>(&self, rule_text: &str, preview: bool, out: &mut W) -> anyhow::Result<()> {
        let rule = Self::validate_rule(rule_text)?;
        let rows = self.config.grid.rows;
        let cols = self.config.grid.cols;

        let mut automaton =
            Automaton::new(rows, cols, rule).context("constructing automaton")?;
        if preview {
            automaton.set_rule_preview(rule);
        }
        automaton.run();

        render::write_grid(out, automaton.grid(), &self.config.display)
            .context("writing grid")?;

        let decimal = rule.decimal().context("Invalid binary input")?;
        writeln!(out, "{}{}", self.language().model_label(), decimal)
            .context("writing model label")?;
        tracing::info!(rule = rule.value(), decimal, rows, cols, "grid rendered");
        Ok(())
    }
}
