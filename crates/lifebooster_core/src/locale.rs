//! First-run environment heuristics.
//!
//! # Responsibility
//! - Guess a default currency from locale and timezone hints.
//! - Generate the short display id shown on the profile screen.
//!
//! # Invariants
//! - Detection never fails; unknown environments fall back to `USD`.
//! - Used only when building or backfilling a document, never on hot paths.

use uuid::Uuid;

/// Currency used when no locale or timezone hint matches.
pub const FALLBACK_CURRENCY: &str = "USD";

/// Supported currency with its English name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
}

/// Currencies offered in settings.
pub const CURRENCIES: &[Currency] = &[
    Currency { code: "MAD", name: "Moroccan Dirham" },
    Currency { code: "AED", name: "United Arab Emirates Dirham" },
    Currency { code: "USD", name: "United States Dollar" },
    Currency { code: "EUR", name: "Euro" },
    Currency { code: "GBP", name: "British Pound" },
    Currency { code: "SAR", name: "Saudi Riyal" },
    Currency { code: "QAR", name: "Qatari Rial" },
    Currency { code: "DZD", name: "Algerian Dinar" },
    Currency { code: "TND", name: "Tunisian Dinar" },
    Currency { code: "EGP", name: "Egyptian Pound" },
    Currency { code: "CAD", name: "Canadian Dollar" },
];

// Checked in order; first match wins.
const LOCALE_REGIONS: &[(&[&str], &str)] = &[
    (&["MA"], "MAD"),
    (&["AE"], "AED"),
    (&["US"], "USD"),
    (&["GB"], "GBP"),
    (&["SA"], "SAR"),
    (&["QA"], "QAR"),
    (&["DZ"], "DZD"),
    (&["TN"], "TND"),
    (&["EG"], "EGP"),
    (&["CA"], "CAD"),
    (&["FR", "DE", "ES", "IT", "NL"], "EUR"),
];

const TIMEZONE_CITIES: &[(&[&str], &str)] = &[
    (&["Casablanca"], "MAD"),
    (&["Dubai"], "AED"),
    (&["Paris", "Berlin", "Madrid", "Rome", "Amsterdam"], "EUR"),
    (&["London"], "GBP"),
    (&["Riyadh"], "SAR"),
    (&["Qatar"], "QAR"),
    (&["Algiers"], "DZD"),
    (&["Tunis"], "TND"),
    (&["Cairo"], "EGP"),
    (&["Toronto", "Vancouver"], "CAD"),
    (&["New_York", "Los_Angeles", "Chicago"], "USD"),
];

/// Locale and timezone hints read from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Locale tag such as `fr-MA` or `en_US.UTF-8`.
    pub locale: Option<String>,
    /// IANA timezone such as `Africa/Casablanca`.
    pub timezone: Option<String>,
}

impl Environment {
    pub fn new(locale: Option<&str>, timezone: Option<&str>) -> Self {
        Self {
            locale: locale.map(ToString::to_string),
            timezone: timezone.map(ToString::to_string),
        }
    }

    /// Reads `LC_ALL`, then `LANG`, plus `TZ` from the process environment.
    pub fn from_process() -> Self {
        let locale = ["LC_ALL", "LANG"]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok())
            .find(|value| !value.trim().is_empty());
        let timezone = std::env::var("TZ")
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self { locale, timezone }
    }

    pub fn detect_currency(&self) -> String {
        detect_default_currency(self.locale.as_deref(), self.timezone.as_deref()).to_string()
    }
}

/// Best-effort currency guess: locale region first, then timezone city.
pub fn detect_default_currency(locale: Option<&str>, timezone: Option<&str>) -> &'static str {
    if let Some(locale) = locale {
        for (regions, code) in LOCALE_REGIONS {
            if regions.iter().any(|region| locale.contains(region)) {
                return *code;
            }
        }
    }

    if let Some(timezone) = timezone {
        for (cities, code) in TIMEZONE_CITIES {
            if cities.iter().any(|city| timezone.contains(city)) {
                return *code;
            }
        }
    }

    FALLBACK_CURRENCY
}

/// Returns the catalog entry for `code`, if supported.
pub fn currency_by_code(code: &str) -> Option<&'static Currency> {
    CURRENCIES.iter().find(|currency| currency.code == code)
}

/// Generates a display id in `OP-1000..=OP-9999`.
pub fn generate_user_id() -> String {
    let suffix = 1000 + (Uuid::new_v4().as_u128() % 9000);
    format!("OP-{suffix}")
}
