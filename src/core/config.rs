//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{DEFAULT_INDENT, DEFAULT_SEPARATOR, MAX_INDENT, MIN_INDENT},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Width of one depth level, connector included.
    pub indent: usize,
    /// Fill character for indentation.
    pub separator: char,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Checks an already assembled config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent < MIN_INDENT {
            return Err(ConfigError::IndentTooSmall {
                indent: self.indent,
            });
        }
        if self.indent > MAX_INDENT {
            return Err(ConfigError::IndentTooLarge {
                indent: self.indent,
            });
        }
        if self.separator.is_control() {
            return Err(ConfigError::ControlSeparator(self.separator));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            separator: DEFAULT_SEPARATOR,
        }
    }
}

/// Fluent builder, validated once in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    indent: Option<usize>,
    separator: Option<char>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn indent(mut self, n: usize) -> Self {
        self.indent = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn separator(mut self, c: char) -> Self {
        self.separator = Some(c);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let cfg = Config {
            indent: self.indent.unwrap_or(DEFAULT_INDENT),
            separator: self.separator.unwrap_or(DEFAULT_SEPARATOR),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
