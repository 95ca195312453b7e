//! Currency Application
//!
//! Currency converter over a cached USD-based rate table. The shell
//! performs the actual network fetch; the app requests one by entering
//! the `Loading` state and receives the result as a text event. Cached
//! rates are persisted and reused, marked stale once they outlive the
//! TTL.

use std::collections::HashMap;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::framework::{AppContext, AppError, AppManifest, NeonApp, CURRENCY_MANIFEST};

/// Storage key for the persisted rate cache
const RATES_KEY: &str = "neon_currency_rates";

/// Cache lifetime before rates are considered stale
const RATES_TTL_MS: u64 = 3_600_000;

/// Rate fetch lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStatus {
    /// No rates requested yet
    #[default]
    Idle,
    /// Waiting for the shell to deliver rates
    Loading,
    /// Rates available
    Success,
    /// Fetch failed and no cache to fall back on
    Error,
}

/// Persisted rate table, quoted against USD
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RatesCache {
    fetched_at_ms: u64,
    rates: HashMap<String, f64>,
}

/// Currency state sent to the shell
#[derive(Clone, Debug, Serialize)]
pub struct CurrencyState<'a> {
    pub amount: f64,
    pub from: &'a str,
    pub to: &'a str,
    pub from_symbol: &'a str,
    pub to_symbol: &'a str,
    /// Converted amount, absent until rates are available
    pub result: Option<f64>,
    /// Value of one `from` unit in `to` units
    pub unit_rate: Option<f64>,
    pub status: FetchStatus,
    pub stale: bool,
}

/// Currency application state
pub struct CurrencyApp {
    amount: f64,
    from: String,
    to: String,
    cache: Option<RatesCache>,
    status: FetchStatus,
    stale: bool,
}

impl Default for CurrencyApp {
    fn default() -> Self {
        Self {
            amount: 1.0,
            from: String::from("USD"),
            to: String::from("BRL"),
            cache: None,
            status: FetchStatus::Idle,
            stale: false,
        }
    }
}

/// Display symbol for a currency code
fn symbol(code: &str) -> &'static str {
    match code {
        "BRL" => "R$",
        "USD" => "$",
        "EUR" => "€",
        "JPY" => "¥",
        "GBP" => "£",
        _ => "",
    }
}

impl CurrencyApp {
    fn rate(&self, code: &str) -> Option<f64> {
        self.cache.as_ref()?.rates.get(code).copied()
    }

    fn convert(&self) -> Option<f64> {
        let from_rate = self.rate(&self.from)?;
        let to_rate = self.rate(&self.to)?;
        if from_rate == 0.0 {
            return None;
        }
        Some(self.amount / from_rate * to_rate)
    }

    fn unit_rate(&self) -> Option<f64> {
        let from_rate = self.rate(&self.from)?;
        let to_rate = self.rate(&self.to)?;
        if from_rate == 0.0 {
            return None;
        }
        Some(to_rate / from_rate)
    }

    fn accept_rates(&mut self, ctx: &mut AppContext, json: &str) -> Result<(), AppError> {
        let rates: HashMap<String, f64> =
            serde_json::from_str(json).map_err(|e| {
                self.status = if self.cache.is_some() {
                    FetchStatus::Success
                } else {
                    FetchStatus::Error
                };
                AppError::InvalidInput {
                    field: "rates",
                    reason: format!("unparseable rate table: {}", e),
                }
            })?;

        let cache = RatesCache {
            fetched_at_ms: ctx.wallclock_ms,
            rates,
        };
        if let Ok(json) = serde_json::to_string(&cache) {
            ctx.storage.set(RATES_KEY, &json);
        }
        self.cache = Some(cache);
        self.status = FetchStatus::Success;
        self.stale = false;
        Ok(())
    }
}

impl NeonApp for CurrencyApp {
    fn manifest() -> &'static AppManifest {
        &CURRENCY_MANIFEST
    }

    fn init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        if let Some(json) = ctx.storage.get(RATES_KEY) {
            if let Ok(cache) = serde_json::from_str::<RatesCache>(&json) {
                self.cache = Some(cache);
                self.status = FetchStatus::Success;
            }
        }
        Ok(())
    }

    fn tick(&mut self, ctx: &mut AppContext) {
        if let Some(cache) = &self.cache {
            self.stale = ctx.wallclock_ms.saturating_sub(cache.fetched_at_ms) >= RATES_TTL_MS;
        }
    }

    fn handle_button(&mut self, _ctx: &mut AppContext, name: &str) -> Result<(), AppError> {
        match name {
            "swap" => mem::swap(&mut self.from, &mut self.to),
            "refresh" => self.status = FetchStatus::Loading,
            "fetch_failed" => {
                // Stale cache beats no data
                self.status = if self.cache.is_some() {
                    FetchStatus::Success
                } else {
                    FetchStatus::Error
                };
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_text(&mut self, ctx: &mut AppContext, field: &str, value: &str) -> Result<(), AppError> {
        match field {
            "amount" => {
                self.amount = value.parse().map_err(|_| AppError::InvalidInput {
                    field: "amount",
                    reason: format!("'{}' is not a number", value),
                })?;
            }
            "from" => self.from = value.to_uppercase(),
            "to" => self.to = value.to_uppercase(),
            "rates" => self.accept_rates(ctx, value)?,
            _ => {}
        }
        Ok(())
    }

    fn state_json(&self) -> String {
        let state = CurrencyState {
            amount: self.amount,
            from: &self.from,
            to: &self.to,
            from_symbol: symbol(&self.from),
            to_symbol: symbol(&self.to),
            result: self.convert(),
            unit_rate: self.unit_rate(),
            status: self.status,
            stale: self.stale,
        };
        serde_json::to_string(&state).unwrap_or_default()
    }
}
