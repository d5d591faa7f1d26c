use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyError {
    #[error("not a decimal amount: {0:?}")]
    Invalid(String),
    #[error("too many fractional digits in {0:?} (max {1})")]
    TooPrecise(String, usize),
}

/// Сумма в центах. Все расчёты целочисленные, без f64.
/// Сложение насыщается на `u64::MAX`, а не переполняется.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn cents(&self) -> u64 {
        self.0
    }

    /// en-US USD с разделителем тысяч: `$1,234.50`.
    pub fn format_currency(&self) -> String {
        let dollars = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("${}.{:02}", grouped, self.0 % 100)
    }
}

/// Формат итоговых полей: `$15.00`, два знака, без группировки.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('$');
        parse_fixed(trimmed, 2).map(Money)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

/// Ставка налога в базисных пунктах (0.08 == 800).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
    const SCALE: u128 = 10_000;
    /// 100%.
    pub const MAX: TaxRate = TaxRate(10_000);

    pub const fn from_basis_points(bp: u32) -> Self {
        TaxRate(bp)
    }

    pub const fn basis_points(&self) -> u32 {
        self.0
    }

    /// round(subtotal * rate, 2), половина округляется вверх.
    /// Произведение считается в u128; результат насыщается на `u64::MAX`.
    pub fn tax(&self, subtotal: Money) -> Money {
        let scaled = subtotal.cents() as u128 * self.0 as u128;
        let cents = (scaled + Self::SCALE / 2) / Self::SCALE;
        Money(u64::try_from(cents).unwrap_or(u64::MAX))
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate(800)
    }
}

impl FromStr for TaxRate {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bp = parse_fixed(s.trim(), 4)?;
        u32::try_from(bp)
            .map(TaxRate)
            .map_err(|_| MoneyError::Invalid(s.to_string()))
    }
}

// "15.5" при scale=2 -> 1550
fn parse_fixed(s: &str, scale: usize) -> Result<u64, MoneyError> {
    let invalid = || MoneyError::Invalid(s.to_string());

    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }
    if !int_part.chars().all(|c| c.is_ascii_digit()) || !frac_part.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if frac_part.len() > scale {
        return Err(MoneyError::TooPrecise(s.to_string(), scale));
    }

    let int: u64 = if int_part.is_empty() { 0 } else { int_part.parse().map_err(|_| invalid())? };
    let frac: u64 = if frac_part.is_empty() { 0 } else { frac_part.parse().map_err(|_| invalid())? };
    let frac = frac * 10u64.pow((scale - frac_part.len()) as u32);

    int.checked_mul(10u64.pow(scale as u32))
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(invalid)
}
