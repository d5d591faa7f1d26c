use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::models::{Money, SeatId, TaxRate, MAX_ROWS};
use crate::models::layout::DEFAULT_ROW_CAPACITIES;

/// Больше мест, чем в самом большом возможном зале, выбрать всё равно нельзя.
pub const MAX_SEATS_LIMIT: usize = MAX_ROWS * u16::MAX as usize;
/// $1,000,000.00 за место.
pub const MAX_SEAT_PRICE: Money = Money::from_cents(100_000_000);
/// Год.
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;
/// Сутки.
pub const MAX_CLEANUP_INTERVAL_SECONDS: u64 = 60 * 60 * 24;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub venue: VenueConfig,
    pub pricing: PricingConfig,
    pub session: SessionConfig,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Форма зала и занятые места
#[derive(Debug, Clone)]
pub struct VenueConfig {
    pub row_capacities: Vec<u16>,
    /// Пока заглушка; в боевой системе список придёт из бэкенда бронирования.
    pub occupied_seats: Vec<SeatId>,
}

// Цены и лимиты
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub standard: Money,
    pub vip: Money,
    pub tax_rate: TaxRate,
    pub max_seats: usize,
}

// Жизнь сессий
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub ttl_minutes: i64,
    pub cleanup_interval_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// То же, что `from_env`, но значения берутся из произвольного источника.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Config {
            app: AppConfig {
                host: var("HOST", "0.0.0.0"),
                port: parse("PORT", &var("PORT", "8000"))?,
                environment: var("ENVIRONMENT", "development"),
                rust_log: var("RUST_LOG", "seat_booking=debug,tower_http=debug"),
            },
            venue: VenueConfig {
                row_capacities: parse_list(
                    "ROW_CAPACITIES",
                    &var("ROW_CAPACITIES", &join(&DEFAULT_ROW_CAPACITIES)),
                )?,
                occupied_seats: parse_list(
                    "OCCUPIED_SEATS",
                    &var("OCCUPIED_SEATS", "A-5,A-6,C-10,C-11,D-4"),
                )?,
            },
            pricing: PricingConfig {
                standard: bounded(
                    "PRICE_STANDARD",
                    parse("PRICE_STANDARD", &var("PRICE_STANDARD", "15.00"))?,
                    Money::ZERO..=MAX_SEAT_PRICE,
                )?,
                vip: bounded(
                    "PRICE_VIP",
                    parse("PRICE_VIP", &var("PRICE_VIP", "20.00"))?,
                    Money::ZERO..=MAX_SEAT_PRICE,
                )?,
                tax_rate: tax_rate(&var("TAX_RATE", "0.08"))?,
                max_seats: bounded(
                    "MAX_SEATS_PER_BOOKING",
                    parse("MAX_SEATS_PER_BOOKING", &var("MAX_SEATS_PER_BOOKING", "8"))?,
                    1..=MAX_SEATS_LIMIT,
                )?,
            },
            session: SessionConfig {
                ttl_minutes: bounded(
                    "SESSION_TTL_MINUTES",
                    parse("SESSION_TTL_MINUTES", &var("SESSION_TTL_MINUTES", "30"))?,
                    1..=MAX_SESSION_TTL_MINUTES,
                )?,
                cleanup_interval_seconds: bounded(
                    "SESSION_CLEANUP_INTERVAL_SECONDS",
                    parse(
                        "SESSION_CLEANUP_INTERVAL_SECONDS",
                        &var("SESSION_CLEANUP_INTERVAL_SECONDS", "300"),
                    )?,
                    1..=MAX_CLEANUP_INTERVAL_SECONDS,
                )?,
            },
        })
    }
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn bounded<T>(key: &'static str, value: T, range: RangeInclusive<T>) -> Result<T, ConfigError>
where
    T: PartialOrd + fmt::Display,
{
    if range.contains(&value) {
        return Ok(value);
    }
    Err(ConfigError::Invalid {
        key,
        reason: format!("must be between {} and {}", range.start(), range.end()),
        value: value.to_string(),
    })
}

// Не больше 100%
fn tax_rate(value: &str) -> Result<TaxRate, ConfigError> {
    let rate: TaxRate = parse("TAX_RATE", value)?;
    if rate.basis_points() > TaxRate::MAX.basis_points() {
        return Err(ConfigError::Invalid {
            key: "TAX_RATE",
            value: value.to_string(),
            reason: "must not exceed 1.0".to_string(),
        });
    }
    Ok(rate)
}

fn parse_list<T>(key: &'static str, value: &str) -> Result<Vec<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| parse(key, item))
        .collect()
}

fn join(values: &[u16]) -> String {
    values.iter().map(u16::to_string).collect::<Vec<_>>().join(",")
}
