use serde::Serialize;

use super::{Money, Pricing, SeatId, Selection, TaxRate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Money,
    pub tax: Money,
    pub total: Money,
}

impl Totals {
    pub fn zero() -> Self {
        Self { subtotal: Money::ZERO, tax: Money::ZERO, total: Money::ZERO }
    }

    pub fn compute(subtotal: Money, tax_rate: TaxRate) -> Self {
        let tax = tax_rate.tax(subtotal);
        Self { subtotal, tax, total: subtotal + tax }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub seat_id: SeatId,
    pub category: &'static str,
    pub price: Money,
}

/// Сводка заказа. Всегда пересчитывается из выбора, отдельно не хранится.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub items: Vec<LineItem>,
    pub totals: Totals,
}

impl Summary {
    pub fn of(selection: &Selection, pricing: &Pricing) -> Self {
        if selection.is_empty() {
            return Self { items: Vec::new(), totals: Totals::zero() };
        }

        let items = selection
            .iter()
            .map(|s| LineItem {
                seat_id: s.id,
                category: pricing.category_label(s.id),
                price: s.price,
            })
            .collect();

        Self {
            items,
            totals: Totals::compute(selection.subtotal(), pricing.tax_rate),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
