//! Display-string lookup for the supported locales.
//!
//! Localization is a pure function `(locale, key) → string`. Unknown keys fall
//! back to the Chinese table and then to the key itself, so a missing entry
//! shows up as its key instead of an empty label.
//!
//! Templates use `{{name}}` placeholders, filled by [`Locale::format`].

mod tables;

use std::fmt;
use std::str::FromStr;

/// Display locale of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    En,
    /// Traditional Chinese; the default and the fallback locale.
    #[default]
    Zh,
}

impl Locale {
    /// Language tag sent as `Accept-Language` on store calls.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Zh => "zh",
        }
    }

    /// Looks up a display string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use staffdesk::i18n::Locale;
    ///
    /// assert_eq!(Locale::En.text("successInsert"), "Insert successful");
    /// assert_eq!(Locale::En.text("noSuchKey"), "noSuchKey");
    /// ```
    #[must_use]
    pub fn text<'a>(self, key: &'a str) -> &'a str {
        let found: Option<&'a str> =
            lookup(self.table(), key).or_else(|| lookup(Self::Zh.table(), key));
        found.unwrap_or(key)
    }

    /// Looks up a template and replaces its `{{name}}` placeholders.
    ///
    /// Placeholders without a matching argument are left as they are.
    #[must_use]
    pub fn format(self, key: &str, args: &[(&str, String)]) -> String {
        args.iter().fold(self.text(key).to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{{{name}}}}}"), value)
        })
    }

    const fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => tables::EN,
            Self::Zh => tables::ZH,
        }
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::En),
            "zh" | "zh-tw" | "zh-hant" | "chinese" => Ok(Self::Zh),
            other => Err(format!("unsupported locale `{other}`")),
        }
    }
}
