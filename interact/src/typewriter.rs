//! Typewriter state machine: types a phrase one character at a time, holds
//! it, erases it, then moves on to the next phrase.
//!
//! The machine is driven by [`Typewriter::tick`], which advances exactly one
//! step and returns how long the host should wait before the next one. It
//! never touches a clock itself, so the whole animation can be stepped in
//! tests without timers.
//!
//! ```text
//!          tick (typing_ms)                      tick (erasing_ms)
//!         ┌──────────────┐                     ┌──────────────┐
//!         ▼              │   full length       ▼              │
//!   ┌──────────┐─────────┘  (delay_between) ┌──────────┐──────┘
//!   │  Typing  │ ─────────────────────────▶ │ Deleting │
//!   └──────────┘ ◀───────────────────────── └──────────┘
//!                  empty, next phrase (500ms)
//! ```

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_DELAY_BETWEEN_MS, DEFAULT_ERASING_MS, DEFAULT_TYPING_MS, PHRASE_PAUSE_MS};

/// Error returned by [`Typewriter::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypewriterError {
    /// Phrase cycling is undefined without at least one phrase.
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

/// Delays driving the animation, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterTiming {
    /// Delay between revealing two characters.
    #[serde(alias = "typingSpeed")]
    pub typing_ms: u32,
    /// Delay between removing two characters.
    #[serde(alias = "erasingSpeed")]
    pub erasing_ms: u32,
    /// Pause at a fully typed phrase before erasing starts.
    #[serde(alias = "delayBetween")]
    pub delay_between_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            typing_ms: DEFAULT_TYPING_MS,
            erasing_ms: DEFAULT_ERASING_MS,
            delay_between_ms: DEFAULT_DELAY_BETWEEN_MS,
        }
    }
}

/// Direction the cursor is moving in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Revealing characters.
    #[default]
    Typing,
    /// Removing characters.
    Deleting,
}

/// Position of the animation within the phrase list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    /// Index of the phrase currently shown.
    pub phrase: usize,
    /// Number of visible characters (Unicode scalar values, not bytes).
    pub chars: usize,
    /// Whether the next tick types or erases.
    pub mode: Mode,
}

/// Typing/erasing animation over a fixed, non-empty phrase list.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    lengths: Vec<usize>,
    timing: TypewriterTiming,
    cursor: Cursor,
}

impl Typewriter {
    /// Build a typewriter positioned before the first character of the first
    /// phrase.
    ///
    /// # Errors
    ///
    /// Returns [`TypewriterError::NoPhrases`] if `phrases` is empty.
    pub fn new(phrases: Vec<String>, timing: TypewriterTiming) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        let lengths = phrases.iter().map(|p| p.chars().count()).collect();
        Ok(Self { phrases, lengths, timing, cursor: Cursor::default() })
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    #[must_use]
    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.cursor.phrase
    }

    /// The phrase currently being typed or erased.
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrases[self.cursor.phrase]
    }

    /// Visible text. Always a prefix of [`Self::phrase`].
    #[must_use]
    pub fn text(&self) -> &str {
        char_prefix(self.phrase(), self.cursor.chars)
    }

    /// Delay before the very first tick.
    #[must_use]
    pub fn first_delay(&self) -> u32 {
        self.timing.typing_ms
    }

    /// Advance one step and return the delay in milliseconds until the next.
    pub fn tick(&mut self) -> u32 {
        let len = self.lengths[self.cursor.phrase];
        match self.cursor.mode {
            Mode::Typing => {
                if self.cursor.chars < len {
                    self.cursor.chars += 1;
                }
                if self.cursor.chars >= len {
                    self.cursor.mode = Mode::Deleting;
                    self.timing.delay_between_ms
                } else {
                    self.timing.typing_ms
                }
            }
            Mode::Deleting => {
                self.cursor.chars = self.cursor.chars.saturating_sub(1);
                if self.cursor.chars == 0 {
                    self.cursor.phrase = (self.cursor.phrase + 1) % self.phrases.len();
                    self.cursor.mode = Mode::Typing;
                    PHRASE_PAUSE_MS
                } else {
                    self.timing.erasing_ms
                }
            }
        }
    }
}

/// First `chars` characters of `s`, cut on a character boundary.
fn char_prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
