use seat_booking::models::Money;
use seat_booking::ui::header::{SCROLLED_CLASSES, TRANSPARENT_CLASS, TRANSPARENT_MARKER};
use seat_booking::ui::theme::THEME_KEY;
use seat_booking::ui::{MobileMenu, Preferences, StickyHeader, Theme, ThemeSwitch};

#[test]
fn light_theme_is_default() {
    assert_eq!(Theme::from_saved(None), Theme::Light);
    assert_eq!(Theme::from_saved(Some("light")), Theme::Light);
    assert_eq!(Theme::from_saved(Some("garbage")), Theme::Light);
    assert_eq!(Theme::from_saved(Some("dark")), Theme::Dark);
}

#[test]
fn toggle_writes_preference() {
    let mut switch = ThemeSwitch::load(Preferences::default());
    assert_eq!(switch.current(), Theme::Light);
    assert_eq!(switch.current().root_class(), None);

    assert_eq!(switch.toggle(), Theme::Dark);
    assert_eq!(switch.preferences().get(THEME_KEY), Some("dark"));
    assert_eq!(switch.current().root_class(), Some("dark"));

    assert_eq!(switch.toggle(), Theme::Light);
    assert_eq!(switch.preferences().get(THEME_KEY), Some("light"));
}

#[test]
fn saved_dark_theme_is_restored() {
    let mut prefs = Preferences::default();
    prefs.set(THEME_KEY, "dark");
    assert_eq!(ThemeSwitch::load(prefs).current(), Theme::Dark);
}

#[test]
fn mobile_menu_locks_scroll_while_open() {
    let mut menu = MobileMenu::default();
    assert_eq!(menu.menu_class(), "hidden");
    assert_eq!(menu.body_overflow(), None);

    menu.open();
    assert!(menu.is_open());
    assert_eq!(menu.menu_class(), "");
    assert_eq!(menu.body_overflow(), Some("hidden"));

    menu.close();
    assert_eq!(menu.menu_class(), "hidden");
    assert_eq!(menu.body_overflow(), None);
}

#[test]
fn transparent_header_reverts_at_top() {
    let mut header = StickyHeader::new(true);
    assert_eq!(header.classes(), vec![TRANSPARENT_MARKER, TRANSPARENT_CLASS]);

    header.on_scroll(51);
    assert!(header.is_solid());
    assert!(!header.classes().contains(&TRANSPARENT_CLASS));
    for class in SCROLLED_CLASSES {
        assert!(header.classes().contains(&class));
    }

    header.on_scroll(50);
    assert!(!header.is_solid());
    assert_eq!(header.classes(), vec![TRANSPARENT_MARKER, TRANSPARENT_CLASS]);
}

#[test]
fn regular_header_stays_solid() {
    let mut header = StickyHeader::new(false);
    assert!(header.classes().is_empty());

    header.on_scroll(200);
    header.on_scroll(0);
    assert!(header.is_solid());
    assert_eq!(header.classes(), SCROLLED_CLASSES.to_vec());
}

#[test]
fn currency_formatting() {
    assert_eq!(Money::from_cents(1500).format_currency(), "$15.00");
    assert_eq!(Money::from_cents(12_960).format_currency(), "$129.60");
    assert_eq!(Money::from_cents(1_234_567).format_currency(), "$12,345.67");
}
