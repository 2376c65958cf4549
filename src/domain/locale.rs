use std::fmt;
use std::str::FromStr;

/// Locales the fake-value provider can generate data for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    FrFr,
    PtBr,
    ZhCn,
    ZhTw,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Self::En, Self::FrFr, Self::PtBr, Self::ZhCn, Self::ZhTw];

    /// Resolve a locale tag such as `en`, `pt-BR`, `fr_FR.UTF-8` or `zh_TW`.
    ///
    /// Dashes are read as underscores, encoding and modifier suffixes are
    /// ignored, matching is case-insensitive. A bare language maps to its
    /// default region.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag
            .split(|c: char| c == '.' || c == '@')
            .next()
            .unwrap_or_default()
            .trim()
            .replace('-', "_")
            .to_ascii_lowercase();

        let (language, region) = match tag.split_once('_') {
            Some((language, region)) => (language, Some(region)),
            None => (tag.as_str(), None),
        };

        match (language, region) {
            ("c" | "posix", None) => Some(Self::En),
            ("en", _) => Some(Self::En),
            ("fr", _) => Some(Self::FrFr),
            ("pt", _) => Some(Self::PtBr),
            ("zh", Some("tw" | "hk" | "hant")) => Some(Self::ZhTw),
            ("zh", _) => Some(Self::ZhCn),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::FrFr => "fr_FR",
            Self::PtBr => "pt_BR",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("unsupported locale '{}'", s))
    }
}
