use crate::codepoint::VARIATION_SELECTOR;
use crate::error::Result;
use crate::format::Format;
use crate::index::IndexKind;
use crate::resolver::EmojiTranscoder;
use regex::{Captures, Regex};

lazy_static::lazy_static! {
    static ref SHORTCODE_PATTERN: Regex = Regex::new(r":[a-zA-Z_]+:").unwrap();
    // A run of entities, optionally followed by a literal variation selector (hybrid form)
    static ref HTML_ENTITY_PATTERN: Regex =
        Regex::new(r"(?:&#x[0-9a-fA-F]+;)+\x{FE0F}?").unwrap();
}

impl EmojiTranscoder {
    /// Rewrite every recognized emoji in `text` to the target format.
    ///
    /// Three passes run in order, each over the output of the previous one:
    /// literal characters, then `:shortcode:` patterns, then runs of HTML
    /// entities. Escape sequences inside running text are not detected.
    /// Unrecognized substrings, and occurrences whose conversion fails, are
    /// left as they are; this never returns an error.
    ///
    /// ```
    /// use emoji_transcoder::{EmojiTranscoder, Format};
    ///
    /// let transcoder = EmojiTranscoder::builtin();
    /// let text = transcoder.transform_text("Hello \u{1f604} :wink: &#x1f44d;", Format::Shortcode);
    /// assert_eq!(text, "Hello :smile: :wink: :thumbs_up:");
    /// ```
    pub fn transform_text(&self, text: &str, target: Format) -> String {
        self.rewrite_text(text, |name| self.transform(name, target))
    }

    /// Like [`transform_text`](Self::transform_text) with the format given by name.
    ///
    /// An unknown format name makes every occurrence fail, so the text comes
    /// back unchanged.
    pub fn transform_text_as(&self, text: &str, target: &str) -> String {
        self.rewrite_text(text, |name| self.transform_as(name, target))
    }

    fn rewrite_text<F>(&self, text: &str, project: F) -> String
    where
        F: Fn(&str) -> Result<String>,
    {
        let converted = self.rewrite_characters(text, &project);
        let converted = self.rewrite_shortcodes(&converted, &project);
        self.rewrite_html(&converted, &project)
    }

    fn rewrite_characters<F>(&self, text: &str, project: &F) -> String
    where
        F: Fn(&str) -> Result<String>,
    {
        let records: Vec<_> = self.catalog().iter().collect();
        let mut result = text.to_string();
        for &i in &self.literal_order {
            let record = records[i];
            if !result.contains(record.character.as_str()) {
                continue;
            }
            match project(&record.name) {
                Ok(replacement) => {
                    if replacement != record.character {
                        result = result.replace(record.character.as_str(), &replacement);
                    }
                }
                Err(e) => log::warn!(
                    "transformation for emoji {:?} with name {:?} failed: {}",
                    record.character,
                    record.name,
                    e
                ),
            }
        }
        result
    }

    fn rewrite_shortcodes<F>(&self, text: &str, project: &F) -> String
    where
        F: Fn(&str) -> Result<String>,
    {
        SHORTCODE_PATTERN
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                match self.indices().lookup(IndexKind::Shortcode, matched) {
                    Some(name) => project(name).unwrap_or_else(|e| {
                        log::warn!(
                            "transformation for shortcode {:?} with name {:?} failed: {}",
                            matched,
                            name,
                            e
                        );
                        matched.to_string()
                    }),
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }

    fn rewrite_html<F>(&self, text: &str, project: &F) -> String
    where
        F: Fn(&str) -> Result<String>,
    {
        HTML_ENTITY_PATTERN
            .replace_all(text, |caps: &Captures| {
                let matched = &caps[0];
                // Prefer the run including a trailing literal selector, then the bare run
                let (key, rest) = match self.indices().lookup(IndexKind::Html, matched) {
                    Some(_) => (matched, ""),
                    None => match matched.strip_suffix(VARIATION_SELECTOR) {
                        Some(run) => (run, &matched[run.len()..]),
                        None => (matched, ""),
                    },
                };
                match self.indices().lookup(IndexKind::Html, key) {
                    Some(name) => match project(name) {
                        Ok(replacement) => format!("{}{}", replacement, rest),
                        Err(e) => {
                            log::warn!(
                                "transformation for HTML {:?} with name {:?} failed: {}",
                                key,
                                name,
                                e
                            );
                            matched.to_string()
                        }
                    },
                    None => matched.to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcoder() -> EmojiTranscoder {
        EmojiTranscoder::builtin()
    }

    #[test]
    fn test_emoji_to_shortcodes() {
        let t = transcoder();
        assert_eq!(
            t.transform_text("I'm happy \u{1f604} and winking \u{1f609}!", Format::Shortcode),
            "I'm happy :smile: and winking :wink:!"
        );
        assert_eq!(
            t.transform_text("Hello \u{1f60a} I love \u{1f308} and \u{2728}!", Format::Shortcode),
            "Hello :blush: I love :rainbow: and :sparkles:!"
        );
    }

    #[test]
    fn test_shortcodes_to_emoji() {
        let t = transcoder();
        assert_eq!(
            t.transform_text("Hello :blush: I love :rainbow: and :sparkles:!", Format::Emoji),
            "Hello \u{1f60a} I love \u{1f308} and \u{2728}!"
        );
    }

    #[test]
    fn test_mixed_formats() {
        let t = transcoder();
        assert_eq!(
            t.transform_text("Hello \u{1f604} :wink: &#x1f44d;", Format::Shortcode),
            "Hello :smile: :wink: :thumbs_up:"
        );
        assert_eq!(
            t.transform_text("\u{1f3a4} Today we have :sparkles: and &#x1f308;", Format::Emoji),
            "\u{1f3a4} Today we have \u{2728} and \u{1f308}"
        );
    }

    #[test]
    fn test_emoji_to_html() {
        let t = transcoder();
        assert_eq!(
            t.transform_text("Check out this \u{1f525} content!", Format::Html),
            "Check out this &#x1f525; content!"
        );
        assert_eq!(
            t.transform_text("The \u{2600}\u{fe0f} rises", Format::Html),
            "The &#x2600;&#xfe0f; rises"
        );
    }

    #[test]
    fn test_variation_selector_emoji_in_text() {
        let t = transcoder();
        assert_eq!(
            t.transform_text(
                "The \u{2600}\u{fe0f} is shining and the \u{1f30a} are beautiful!",
                Format::Shortcode
            ),
            "The :sun: is shining and the :ocean: are beautiful!"
        );
        assert_eq!(
            t.transform_text(
                "Working on my \u{1f5a5}\u{fe0f} and \u{1f4bb} with a \u{1f4f8} nearby.",
                Format::Shortcode
            ),
            "Working on my :desktop_computer: and :computer: with a :camera_flash: nearby."
        );
    }

    #[test]
    fn test_flags_in_text() {
        let t = transcoder();
        assert_eq!(
            t.transform_text("Visiting \u{1f1ee}\u{1f1f9} and \u{1f1eb}\u{1f1f7} this summer!", Format::Shortcode),
            "Visiting :flag_it: and :flag_fr: this summer!"
        );
    }

    #[test]
    fn test_html_forms_in_text() {
        let t = transcoder();
        assert_eq!(t.transform_text("mic &#x1f399; on", Format::Shortcode), "mic :microphone: on");
        assert_eq!(
            t.transform_text("mic &#x1f399;\u{fe0f} on", Format::Shortcode),
            "mic :microphone: on"
        );
        assert_eq!(
            t.transform_text("mic &#x1f399;&#xfe0f; on", Format::Shortcode),
            "mic :microphone: on"
        );
        // stray selector after a plain emoji entity is kept
        assert_eq!(
            t.transform_text("&#x1f604;\u{fe0f}", Format::Shortcode),
            ":smile:\u{fe0f}"
        );
    }

    #[test]
    fn test_unrecognized_left_verbatim() {
        let t = transcoder();
        assert_eq!(t.transform_text("This is just plain text", Format::Emoji), "This is just plain text");
        assert_eq!(t.transform_text("at 12:30:45 :nonexistent:", Format::Emoji), "at 12:30:45 :nonexistent:");
        assert_eq!(t.transform_text("&#x41;&#x42;", Format::Emoji), "&#x41;&#x42;");
        assert_eq!(t.transform_text("", Format::Shortcode), "");
        // escape sequences are only recognized in isolation
        assert_eq!(t.transform_text("go \\U0001F680", Format::Emoji), "go \\U0001F680");
    }

    #[test]
    fn test_adjacent_shortcodes() {
        let t = transcoder();
        assert_eq!(t.transform_text(":smile::wink:", Format::Emoji), "\u{1f604}\u{1f609}");
    }

    #[test]
    fn test_chained_passes() {
        let t = transcoder();
        // entity produced by the literal pass is seen again by the html pass
        assert_eq!(t.transform_text("\u{1f525}", Format::Html), "&#x1f525;");
        // shortcode with digits is outside the shortcode pattern
        assert_eq!(t.transform_text(":star2:", Format::Emoji), ":star2:");
    }

    #[test]
    fn test_invalid_format_name_leaves_text() {
        let t = transcoder();
        let text = "Hello \u{1f604} :wink: &#x1f44d;";
        assert_eq!(t.transform_text_as(text, "bogus"), text);
        assert_eq!(t.transform_text_as(text, "shortcode"), "Hello :smile: :wink: :thumbs_up:");
    }
}
