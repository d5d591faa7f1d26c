use serde::Serialize;

use super::{Money, SeatId, TaxRate};

/// Категория, которая печатается в строке заказа.
pub const GENERAL_ADMISSION: &str = "General Admission";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pricing {
    pub standard: Money,
    /// Тариф VIP заведён в конфиге, но ни одно место его пока не получает.
    pub vip: Money,
    pub tax_rate: TaxRate,
}

impl Pricing {
    pub fn new(standard: Money, vip: Money, tax_rate: TaxRate) -> Self {
        Self { standard, vip, tax_rate }
    }

    /// Цена места. Сейчас у всех мест один тариф.
    pub fn price_for(&self, _seat: SeatId) -> Money {
        self.standard
    }

    pub fn category_label(&self, _seat: SeatId) -> &'static str {
        GENERAL_ADMISSION
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            standard: Money::from_cents(1500),
            vip: Money::from_cents(2000),
            tax_rate: TaxRate::default(),
        }
    }
}
