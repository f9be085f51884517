//! Multi-locale label parsing
//!
//! Reference tables encode translated labels in a single field as a
//! comma-separated list of `"<LANG> <text>"` tokens, e.g.
//! `"ES Andalucía,EN Andalusia"`.

/// Language code of the display labels written to the output
pub const DISPLAY_LANGUAGE: &str = "EN";

/// A label in several languages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText {
    entries: Vec<(String, String)>,
}

impl LocalizedText {
    /// Parse a raw multi-locale field
    ///
    /// A token that does not start with a language code continues the
    /// previous label, so a label may itself contain commas.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();

        for token in raw.split(',') {
            match split_language(token.trim_start()) {
                Some((language, text)) => {
                    entries.push((language.to_string(), text.trim().to_string()));
                }
                None => match entries.last_mut() {
                    Some((_, text)) => {
                        text.push(',');
                        text.push_str(token.trim_end());
                    }
                    None if !token.trim().is_empty() => {
                        entries.push((String::new(), token.trim().to_string()));
                    }
                    None => {}
                },
            }
        }

        Self { entries }
    }

    /// Label for a language code, if present and non-empty
    #[must_use]
    pub fn get(&self, language: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(lang, text)| lang.eq_ignore_ascii_case(language) && !text.is_empty())
            .map(|(_, text)| text.as_str())
    }
}

/// Split `"EN text"` into `("EN", "text")`
fn split_language(token: &str) -> Option<(&str, &str)> {
    let bytes = token.as_bytes();
    if bytes.len() >= 3
        && bytes[0].is_ascii_uppercase()
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b' '
    {
        Some((&token[..2], &token[3..]))
    } else {
        None
    }
}

/// English display label of a raw multi-locale field
#[must_use]
pub fn english_label(raw: &str) -> Option<String> {
    LocalizedText::parse(raw)
        .get(DISPLAY_LANGUAGE)
        .map(ToString::to_string)
}
