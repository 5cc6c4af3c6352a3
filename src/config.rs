//! Page configuration: which elements to bind and how the typewriter runs.
//!
//! Every field defaults to the stock portfolio markup, so
//! [`SiteConfig::default`] needs no host input and a JSON override only has to
//! name the fields it changes.

use interact::consts::HEADER_OFFSET;
use interact::typewriter::{Typewriter, TypewriterError, TypewriterTiming};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PHRASES: [&str; 4] = ["AI Researcher", "Deep Learning Enthusiast", "Data Scientist", "Problem Solver"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Typewriter(#[from] TypewriterError),
    #[error("scroll_spy.header_offset must be finite and non-negative, got {0}")]
    InvalidHeaderOffset(f64),
    #[error("`{0}` must not be empty")]
    EmptySelector(&'static str),
}

/// Console log verbosity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    /// `id` of the element whose text is animated.
    pub element_id: String,
    pub phrases: Vec<String>,
    pub timing: TypewriterTiming,
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        Self {
            element_id: "typed".to_owned(),
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            timing: TypewriterTiming::default(),
        }
    }
}

impl TypewriterSettings {
    /// Build the typewriter these settings describe.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Typewriter`] if the phrase list is empty.
    pub fn build(&self) -> Result<Typewriter, ConfigError> {
        Ok(Typewriter::new(self.phrases.clone(), self.timing)?)
    }
}

/// CSS selectors for the mobile navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSelectors {
    pub toggle: String,
    pub menu: String,
    /// Links inside the menu that close it when clicked.
    pub link: String,
}

impl Default for NavSelectors {
    fn default() -> Self {
        Self { toggle: ".nav-toggle".to_owned(), menu: ".nav-menu".to_owned(), link: ".nav-link".to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpySettings {
    /// Sections to track, in document order. Each must carry an `id`.
    pub sections: String,
    /// Links highlighted by `href` fragment.
    pub links: String,
    /// Fixed header height subtracted from every section top.
    pub header_offset: f64,
    /// Coalesce scroll events into one evaluation per animation frame.
    pub throttle_scroll: bool,
}

impl Default for ScrollSpySettings {
    fn default() -> Self {
        Self {
            sections: "section[id]".to_owned(),
            links: ".nav-link".to_owned(),
            header_offset: HEADER_OFFSET,
            throttle_scroll: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub typewriter: TypewriterSettings,
    pub nav: NavSelectors,
    pub scroll_spy: ScrollSpySettings,
}

impl SiteConfig {
    /// Parse a JSON override and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed input, or whatever
    /// [`Self::validate`] rejects.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check everything that would otherwise fail later, at mount time.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: an empty phrase list, a negative or
    /// non-finite header offset, or an empty selector.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.typewriter.phrases.is_empty() {
            return Err(TypewriterError::NoPhrases.into());
        }
        let offset = self.scroll_spy.header_offset;
        if !offset.is_finite() || offset < 0.0 {
            return Err(ConfigError::InvalidHeaderOffset(offset));
        }
        let selectors = [
            ("typewriter.element_id", &self.typewriter.element_id),
            ("nav.toggle", &self.nav.toggle),
            ("nav.menu", &self.nav.menu),
            ("nav.link", &self.nav.link),
            ("scroll_spy.sections", &self.scroll_spy.sections),
            ("scroll_spy.links", &self.scroll_spy.links),
        ];
        if let Some((name, _)) = selectors.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::EmptySelector(*name));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
