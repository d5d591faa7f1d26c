use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ключ, под которым хранится выбранная тема.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Светлая тема по умолчанию; тёмная только если она явно сохранена.
    /// Системная настройка не учитывается.
    pub fn from_saved(saved: Option<&str>) -> Self {
        match saved {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Класс на корневом элементе документа.
    pub fn root_class(&self) -> Option<&'static str> {
        match self {
            Theme::Dark => Some("dark"),
            Theme::Light => None,
        }
    }
}

/// Простое хранилище ключ -> значение для настроек сессии.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preferences(BTreeMap<String, String>);

impl Preferences {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }
}

/// Тема страницы вместе с её сохранённой настройкой.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSwitch {
    current: Theme,
    prefs: Preferences,
}

impl ThemeSwitch {
    /// Читает настройку один раз, при загрузке.
    pub fn load(prefs: Preferences) -> Self {
        let current = Theme::from_saved(prefs.get(THEME_KEY));
        Self { current, prefs }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    /// Переключает тему и сразу записывает новое значение.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.prefs.set(THEME_KEY, self.current.as_str());
        self.current
    }
}
