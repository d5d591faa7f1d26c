//! Глобальные UI-помощники сайта: тема, мобильное меню, липкая шапка.
//! Не зависят от виджета выбора мест и друг от друга.

pub mod header;
pub mod menu;
pub mod theme;

pub use header::StickyHeader;
pub use menu::MobileMenu;
pub use theme::{Preferences, Theme, ThemeSwitch};

/// Состояние UI одной страницы.
#[derive(Debug, Clone, Default)]
pub struct PageUi {
    pub theme: ThemeSwitch,
    pub menu: MobileMenu,
    pub header: StickyHeader,
}

impl PageUi {
    pub fn load(prefs: Preferences, transparent_header: bool) -> Self {
        Self {
            theme: ThemeSwitch::load(prefs),
            menu: MobileMenu::default(),
            header: StickyHeader::new(transparent_header),
        }
    }
}
