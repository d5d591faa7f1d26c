//! Тонкий адаптер: модель отрисовки -> HTML-фрагменты страницы бронирования.
//!
//! Каждый фрагмент целиком заменяет содержимое своего контейнера, поэтому
//! повторная отрисовка не плодит дублей.

use super::{GridView, SeatState, SeatView, SummaryView};
use crate::ui::PageUi;

pub const GRID_ID: &str = "seating-grid";
pub const SEATS_LIST_ID: &str = "seats-list";
pub const SUBTOTAL_ID: &str = "subtotal-display";
pub const TAX_ID: &str = "tax-display";
pub const TOTAL_ID: &str = "total-display";
pub const CHECKOUT_BUTTON_IDS: [&str; 2] = ["btn-next-step", "btn-checkout-side"];

const ROW_CLASS: &str = "flex justify-center gap-2 items-center";
const ROW_LABEL_CLASS: &str = "w-4 text-xs font-bold text-slate-400 text-center";
const TOOLTIP_CLASS: &str = "absolute -top-8 left-1/2 transform -translate-x-1/2 bg-slate-900 text-white text-xs py-1 px-2 rounded opacity-0 group-hover:opacity-100 transition-opacity pointer-events-none z-10 whitespace-nowrap";
const LINE_ITEM_CLASS: &str = "flex justify-between items-center text-sm border-b border-slate-100 dark:border-slate-700 py-2 last:border-0";
const PLACEHOLDER_CLASS: &str = "text-slate-400 text-sm italic text-center py-4";

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn state_attr(state: SeatState) -> &'static str {
    match state {
        SeatState::Available => "available",
        SeatState::Selected => "selected",
        SeatState::Occupied => "occupied",
    }
}

fn seat_button(seat: &SeatView) -> String {
    let icon = seat
        .icon
        .map(|icon| format!(r#"<i class="fas fa-{}"></i>"#, icon))
        .unwrap_or_default();
    format!(
        r#"<button class="{}" data-id="{}" data-state="{}"{}>{}<span class="{}">{}</span></button>"#,
        escape(&seat.class),
        seat.id,
        state_attr(seat.state),
        if seat.disabled { " disabled" } else { "" },
        icon,
        TOOLTIP_CLASS,
        escape(&seat.tooltip),
    )
}

/// Содержимое контейнера `#seating-grid`.
pub fn render_grid(grid: &GridView) -> String {
    grid.rows
        .iter()
        .map(|row| {
            let label = format!(r#"<span class="{}">{}</span>"#, ROW_LABEL_CLASS, row.label);
            let seats: String = row.seats.iter().map(seat_button).collect();
            format!(r#"<div class="{}">{}{}{}</div>"#, ROW_CLASS, label, seats, label)
        })
        .collect()
}

/// Содержимое контейнера `#seats-list`.
pub fn render_seat_list(summary: &SummaryView) -> String {
    if let Some(placeholder) = summary.placeholder {
        return format!(r#"<p class="{}">{}</p>"#, PLACEHOLDER_CLASS, placeholder);
    }

    summary
        .items
        .iter()
        .map(|item| {
            format!(
                concat!(
                    r#"<div class="{}"><div>"#,
                    r#"<span class="font-bold text-slate-800 dark:text-slate-200">{}</span>"#,
                    r#"<span class="text-xs text-slate-500 block">{}</span>"#,
                    r#"</div><span class="font-medium">{}</span></div>"#,
                ),
                LINE_ITEM_CLASS,
                escape(&item.title),
                escape(item.category),
                escape(&item.price),
            )
        })
        .collect()
}

fn checkout_button(id: &str, summary: &SummaryView) -> String {
    format!(
        r#"<button id="{}" class="{}"{}>Continue</button>"#,
        id,
        summary.checkout_class,
        if summary.checkout_enabled { "" } else { " disabled" },
    )
}

/// Фрагмент страницы бронирования со всеми целевыми элементами.
pub fn render_page(grid: &GridView, summary: &SummaryView, ui: &PageUi) -> String {
    let mut out = format!(
        r#"<html class="{}"><body style="{}">"#,
        ui.theme.current().root_class().unwrap_or(""),
        ui.menu.body_overflow().map(|v| format!("overflow: {}", v)).unwrap_or_default(),
    );
    out.push_str(&format!(
        r##"<header class="{}"><a href="#" id="theme-toggle">{}</a><button id="mobile-menu-btn"></button></header>"##,
        ui.header.classes().join(" "),
        ui.theme.current().toggled().as_str(),
    ));
    out.push_str(&format!(
        r#"<nav id="mobile-menu" class="{}"><button id="close-menu-btn"></button></nav>"#,
        ui.menu.menu_class(),
    ));

    out.push_str(&format!(r#"<main><div id="{}">{}</div>"#, GRID_ID, render_grid(grid)));
    out.push_str(&format!(r#"<aside><div id="{}">{}</div>"#, SEATS_LIST_ID, render_seat_list(summary)));
    for (id, value) in [(SUBTOTAL_ID, &summary.subtotal), (TAX_ID, &summary.tax), (TOTAL_ID, &summary.total)] {
        out.push_str(&format!(r#"<span id="{}">{}</span>"#, id, escape(value)));
    }
    let [next_step, side] = CHECKOUT_BUTTON_IDS;
    out.push_str(&checkout_button(side, summary));
    out.push_str("</aside>");
    out.push_str(&checkout_button(next_step, summary));
    out.push_str("</main></body></html>");

    out
}
