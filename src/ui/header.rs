use serde::Serialize;

/// Порог прокрутки в пикселях, после которого шапка становится плотной.
pub const SCROLL_THRESHOLD: u32 = 50;

pub const SCROLLED_CLASSES: [&str; 4] = ["shadow-lg", "bg-white/90", "backdrop-blur-md", "dark:bg-slate-900/90"];
pub const TRANSPARENT_CLASS: &str = "bg-transparent";
pub const TRANSPARENT_MARKER: &str = "fixed-header-transparent";

/// Липкая шапка страницы.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StickyHeader {
    /// Шапка помечена `fixed-header-transparent`.
    transparent_at_top: bool,
    solid: bool,
}

impl StickyHeader {
    pub fn new(transparent_at_top: bool) -> Self {
        Self { transparent_at_top, solid: false }
    }

    /// Обычная шапка, вернувшись наверх, остаётся плотной: откатываются только
    /// прозрачные шапки.
    pub fn on_scroll(&mut self, scroll_y: u32) {
        if scroll_y > SCROLL_THRESHOLD {
            self.solid = true;
        } else if self.transparent_at_top {
            self.solid = false;
        }
    }

    pub fn is_solid(&self) -> bool {
        self.solid
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.transparent_at_top {
            classes.push(TRANSPARENT_MARKER);
        }
        if self.solid {
            classes.extend(SCROLLED_CLASSES);
        } else if self.transparent_at_top {
            classes.push(TRANSPARENT_CLASS);
        }
        classes
    }
}
