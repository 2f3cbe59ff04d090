use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use serde::Deserialize;
use strum::AsRefStr;

/// Keys of the user-visible labels on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StringKey {
    HomeMore,
    HomeAudioSectionTitle,
    HomePlayAll,
    CdSearchArticles,
    DialogConfirm,
    Hint,
}

impl StringKey {
    fn fallback(self) -> &'static str {
        match self {
            StringKey::HomeMore => "More",
            StringKey::HomeAudioSectionTitle => "Audio stories",
            StringKey::HomePlayAll => "Play all",
            StringKey::CdSearchArticles => "Search articles",
            StringKey::DialogConfirm => "OK",
            StringKey::Hint => "j/k: move  enter: open  q: quit",
        }
    }
}

/// Localized labels, looked up by key.
#[derive(Clone, Debug, Default, Deref, DerefMut, Deserialize)]
#[serde(transparent)]
pub struct Strings(pub HashMap<StringKey, String>);

impl Strings {
    pub fn text(&self, key: StringKey) -> &str {
        self.get(&key).map(String::as_str).unwrap_or(key.fallback())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_missing_key_falls_back_to_builtin() {
        let strings = Strings::default();
        assert_eq!(strings.text(StringKey::HomePlayAll), "Play all");
        assert_eq!(strings.text(StringKey::DialogConfirm), "OK");
    }

    #[test]
    fn test_configured_text_wins() -> Result<(), json5::Error> {
        let strings: Strings = json5::from_str(r#"{ "home_play_all": "Tout écouter" }"#)?;
        assert_eq!(strings.text(StringKey::HomePlayAll), "Tout écouter");
        assert_eq!(strings.text(StringKey::HomeMore), "More");
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<Strings, _> = json5::from_str(r#"{ "home_less": "Less" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(StringKey::CdSearchArticles.as_ref(), "cd_search_articles");
    }
}
