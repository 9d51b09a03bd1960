//! Helper module with the palette engine's options.
//!
//! This module provides the options for the engine and the corresponding
//! builder. Options may also be read from the environment, with
//! `HUEPALETTE_DEFAULT_GAMUT` naming the default gamut class (`A`, `B`, or
//! `C`) and `HUEPALETTE_SHUFFLE_ATTEMPTS` bounding the number of random
//! permutations tried before shuffling falls back onto a constructed
//! derangement.
//!
//!
//! # Example
//!
//! ```
//! # use huepalette::GamutClass;
//! # use huepalette::opt::Options;
//! let options = Options::builder()
//!     .default_gamut(GamutClass::B)
//!     .max_shuffle_attempts(50)
//!     .build();
//!
//! assert_eq!(options.default_gamut(), GamutClass::B);
//! assert_eq!(options.max_shuffle_attempts(), 50);
//! ```

use log::warn;

use crate::gamut::GamutClass;
use crate::util::{Env, Environment};

/// The default number of random permutations tried when shuffling.
pub const DEFAULT_SHUFFLE_ATTEMPTS: usize = 1_000;

/// The environment variable naming the default gamut class.
pub const DEFAULT_GAMUT_VAR: &str = "HUEPALETTE_DEFAULT_GAMUT";

/// The environment variable with the number of shuffle attempts.
pub const SHUFFLE_ATTEMPTS_VAR: &str = "HUEPALETTE_SHUFFLE_ATTEMPTS";

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionData {
    default_gamut: GamutClass,
    max_shuffle_attempts: usize,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            default_gamut: GamutClass::C,
            max_shuffle_attempts: DEFAULT_SHUFFLE_ATTEMPTS,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the default gamut class, which applies to unknown models and to
    /// group-level operations.
    pub fn default_gamut(&mut self, class: GamutClass) -> &mut Self {
        self.0.default_gamut = class;
        self
    }

    /// Set the maximum number of random permutations tried when shuffling.
    ///
    /// Zero is valid and means that shuffling immediately constructs a
    /// derangement.
    pub fn max_shuffle_attempts(&mut self, attempts: usize) -> &mut Self {
        self.0.max_shuffle_attempts = attempts;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options, overridden by the process
    /// environment.
    ///
    /// Malformed values are logged as warnings and otherwise ignored.
    pub fn from_environment() -> Options {
        Self::from_env(&Env::default())
    }

    pub(crate) fn from_env(env: &impl Environment) -> Options {
        let mut builder = Self::builder();

        if let Some(value) = env.read_trimmed(DEFAULT_GAMUT_VAR) {
            match GamutClass::from_name(&value) {
                Some(class) => {
                    builder.default_gamut(class);
                }
                None => warn!("ignoring {}={}, which is not A, B, or C", DEFAULT_GAMUT_VAR, value),
            }
        }

        if let Some(value) = env.read_trimmed(SHUFFLE_ATTEMPTS_VAR) {
            match value.parse::<usize>() {
                Ok(attempts) => {
                    builder.max_shuffle_attempts(attempts);
                }
                Err(error) => warn!("ignoring {}={}: {}", SHUFFLE_ATTEMPTS_VAR, value, error),
            }
        }

        builder.build()
    }

    /// Get the default gamut class.
    pub fn default_gamut(&self) -> GamutClass {
        self.0.default_gamut
    }

    /// Get the maximum number of random permutations tried when shuffling.
    pub fn max_shuffle_attempts(&self) -> usize {
        self.0.max_shuffle_attempts
    }
}
