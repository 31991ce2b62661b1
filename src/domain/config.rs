// ============================================================================
// Calculator Configuration
// Session settings: starting radix, history file and display options
// ============================================================================

use crate::numeric::Radix;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// History file written by the interactive calculator when nothing else is
/// configured.
pub const DEFAULT_HISTORY_FILE: &str = "calculator_log.txt";

/// Configuration for a calculator session
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Radix operands are entered in
    pub radix: Radix,

    /// Ask for the input radix when the session starts.
    /// When false the session starts directly in `radix`.
    pub prompt_for_radix: bool,

    /// Optional: append-only history of applied operations
    /// None disables the history file
    pub history_file: Option<PathBuf>,

    /// Print the result in all four radixes (true) or only the active one
    pub show_all_radixes: bool,
}

impl CalculatorConfig {
    /// Create a new configuration starting in `radix`
    pub fn new(radix: Radix) -> Self {
        Self {
            radix,
            prompt_for_radix: false,
            history_file: None,
            show_all_radixes: true,
        }
    }

    /// Builder method: Ask for the radix on startup
    pub fn with_radix_prompt(mut self, prompt: bool) -> Self {
        self.prompt_for_radix = prompt;
        self
    }

    /// Builder method: Append operation history to `path`
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Builder method: Disable the history file
    pub fn without_history_file(mut self) -> Self {
        self.history_file = None;
        self
    }

    /// Builder method: Only show the active radix after each operation
    pub fn with_active_radix_only(mut self) -> Self {
        self.show_all_radixes = false;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.history_file {
            if path.as_os_str().is_empty() {
                return Err("History file path cannot be empty".to_string());
            }
            if path.is_dir() {
                return Err(format!(
                    "History file path {} is a directory",
                    path.display()
                ));
            }
        }

        Ok(())
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::interactive()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Interactive terminal session
    /// - Asks for the input radix first (decimal until chosen)
    /// - Appends history to `calculator_log.txt`
    pub fn interactive() -> Self {
        Self::new(Radix::Decimal)
            .with_radix_prompt(true)
            .with_history_file(DEFAULT_HISTORY_FILE)
    }

    /// Embedded or scripted use
    /// - Fixed radix, no prompt
    /// - No history file
    pub fn headless(radix: Radix) -> Self {
        Self::new(radix)
    }
}

// ============================================================================
// JSON Loading (serde feature)
// ============================================================================

#[cfg(feature = "serde")]
impl CalculatorConfig {
    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration as pretty JSON.
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}
