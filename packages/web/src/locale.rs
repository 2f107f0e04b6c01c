//! Supported locales and locale-prefixed paths

use std::fmt;

use serde::{Deserialize, Serialize};
use unic_langid::{CharacterDirection, LanguageIdentifier};

/// A locale the site is published in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "de-DE")]
    DeDe,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::EnUs, Locale::DeDe];

    /// BCP 47 tag, also used as the URL segment and the CMS locale code
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::DeDe => "de-DE",
        }
    }

    /// Name shown in the language selector
    pub fn label(&self) -> &'static str {
        match self {
            Locale::EnUs => "English",
            Locale::DeDe => "Deutsch",
        }
    }

    /// Parse a URL segment.
    ///
    /// The segment is canonicalized first, so `en-us` resolves to `en-US`.
    /// Tags that are not published return `None`.
    pub fn from_segment(segment: &str) -> Option<Self> {
        let id: LanguageIdentifier = segment.parse().ok()?;
        let canonical = id.to_string();
        Self::ALL
            .into_iter()
            .find(|locale| locale.as_str() == canonical)
    }

    /// Value for the `dir` attribute
    pub fn text_direction(&self) -> &'static str {
        match self.as_str().parse::<LanguageIdentifier>() {
            Ok(id) if id.character_direction() == CharacterDirection::RTL => "rtl",
            _ => "ltr",
        }
    }

    pub fn home_path(&self) -> String {
        format!("/{}", self.as_str())
    }

    pub fn blog_path(&self) -> String {
        format!("/{}/blog", self.as_str())
    }

    /// In-page anchor on the landing page, e.g. `/en-US#faq`
    pub fn anchor_path(&self, anchor: &str) -> String {
        format!("/{}#{}", self.as_str(), anchor)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
