use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Celsius, Fahrenheit};

/// Summary labels, coldest first
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// One day of sample forecast data as served by `GET /weatherforecast`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub temperature_c: Celsius,
    pub temperature_f: Fahrenheit,
    pub summary: Option<String>,
}

impl WeatherForecast {
    /// Build a forecast, deriving Fahrenheit from Celsius
    pub fn new(date: NaiveDate, temperature_c: Celsius, summary: Option<String>) -> Self {
        Self {
            date,
            temperature_c,
            temperature_f: to_fahrenheit(temperature_c),
            summary,
        }
    }
}

/// Convert Celsius to Fahrenheit, truncating toward zero.
///
/// Uses the 0.5556 divisor of the stock template rather than 5/9, so
/// values can differ by one from an exact conversion.
pub fn to_fahrenheit(celsius: Celsius) -> Fahrenheit {
    32i32.saturating_add((celsius as f64 / 0.5556) as i32)
}
