//! Conversion between emoji representations.
//!
//! Every supported emoji has a canonical name and four representations:
//! the literal character (`😄`), a shortcode (`:smile:`), HTML numeric
//! entities (`&#x1f604;`) and backslash escapes (`\U0001F604`). Any of them,
//! or the bare name, is accepted as input.
//!
//! ```
//! use emoji_transcoder::{transform, transform_text, Format};
//!
//! assert_eq!(transform("smile", Format::Emoji).unwrap(), "\u{1f604}");
//! assert_eq!(transform("\u{1f604}", Format::Shortcode).unwrap(), ":smile:");
//!
//! let text = transform_text("I'm happy \u{1f604} and winking \u{1f609}!", Format::Shortcode);
//! assert_eq!(text, "I'm happy :smile: and winking :wink:!");
//! ```
//!
//! The free functions use a shared transcoder over the embedded table,
//! built on first use. Build an [`EmojiTranscoder`] from a custom
//! [`Catalog`] to work with a different dataset.

pub mod catalog;
pub mod codepoint;
mod data;
pub mod error;
pub mod format;
pub mod index;
pub mod logging;
pub mod resolver;
pub mod text;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;

#[cfg(test)]
mod tests;

pub use catalog::{Catalog, EmojiRecord};
pub use error::{EmojiError, Result};
pub use format::Format;
pub use resolver::EmojiTranscoder;

use once_cell::sync::Lazy;

static DEFAULT_TRANSCODER: Lazy<EmojiTranscoder> = Lazy::new(EmojiTranscoder::builtin);

/// Shared transcoder over the embedded emoji table
pub fn default_transcoder() -> &'static EmojiTranscoder {
    &DEFAULT_TRANSCODER
}

/// Convert `input`, in any representation, to the target format.
///
/// Fails with [`EmojiError::NotFound`] when the input matches no emoji.
pub fn transform(input: &str, target: Format) -> Result<String> {
    default_transcoder().transform(input, target)
}

/// Convert `input` to a format given by name (`emoji`, `shortcode`, `html`, `unicode`).
///
/// Fails with [`EmojiError::InvalidFormat`] for any other name.
pub fn transform_as(input: &str, target: &str) -> Result<String> {
    default_transcoder().transform_as(input, target)
}

/// Rewrite every recognized emoji in `text` to the target format
pub fn transform_text(text: &str, target: Format) -> String {
    default_transcoder().transform_text(text, target)
}

/// Full record for the emoji denoted by `input`
pub fn get_info(input: &str) -> Result<&'static EmojiRecord> {
    default_transcoder().get_info(input)
}

/// Names of all supported emoji, in no particular order
pub fn list_supported() -> Vec<&'static str> {
    default_transcoder().list_supported()
}

/// Check whether `input` denotes a supported emoji
pub fn is_supported(input: &str) -> bool {
    default_transcoder().is_supported(input)
}
