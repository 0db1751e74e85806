//! Player-facing strings in the supported languages.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Pick a language from the usual locale variables (`LC_ALL`, then `LANG`).
    pub fn detect() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
            .map(|value| Self::from_locale(&value))
            .unwrap_or_default()
    }

    /// Map a locale string such as `fr_FR.UTF-8` to a language.
    pub fn from_locale(locale: &str) -> Self {
        if locale.to_ascii_lowercase().starts_with("fr") {
            Self::French
        } else {
            Self::English
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "fr" | "french" | "francais" => Some(Self::French),
            _ => None,
        }
    }

    pub fn press_start(&self) -> &'static str {
        match self {
            Self::English => "Press space to start",
            Self::French => "Appuyer sur espace pour commencer",
        }
    }

    pub fn night_falling(&self) -> &'static str {
        match self {
            Self::English => "Night is falling...",
            Self::French => "La nuit tombe...",
        }
    }

    pub fn high_score_label(&self) -> &'static str {
        match self {
            Self::English => "High score : ",
            Self::French => "Meilleur score : ",
        }
    }

    // Same in both languages.
    pub fn game_over(&self) -> &'static str {
        "Game Over"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("fr_FR.UTF-8"), Language::French);
        assert_eq!(Language::from_locale("FR"), Language::French);
        assert_eq!(Language::from_locale("en_US.UTF-8"), Language::English);
        assert_eq!(Language::from_locale("C"), Language::English);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Language::from_code("fr"), Some(Language::French));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn test_strings_differ_by_language() {
        assert_ne!(
            Language::English.press_start(),
            Language::French.press_start()
        );
        assert_eq!(Language::French.night_falling(), "La nuit tombe...");
        assert!(Language::English.high_score_label().starts_with("High score"));
    }
}
