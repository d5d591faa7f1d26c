use serde::Serialize;

/// Мобильное меню (гамбургер). Пока меню открыто, прокрутка страницы заблокирована.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn menu_class(&self) -> &'static str {
        if self.open { "" } else { "hidden" }
    }

    /// Значение `overflow` для body; `None` значит вернуть значение по умолчанию.
    pub fn body_overflow(&self) -> Option<&'static str> {
        self.open.then_some("hidden")
    }
}
