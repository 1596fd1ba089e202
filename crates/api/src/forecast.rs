use chrono::{Days, Local, NaiveDate};
use rand::Rng;

use forecast_api_models::{ForecastError, ForecastResult, WeatherForecast, SUMMARIES};

use crate::settings::ForecastConfig;

/// Upper bound on `forecast.days`
pub const MAX_FORECAST_DAYS: u32 = 14;

/// Accepted bounds for the configured temperature range, in Celsius
pub const MIN_TEMPERATURE_C: i32 = -273;
pub const MAX_TEMPERATURE_C: i32 = 1000;

/// Generates sample forecasts starting tomorrow
#[derive(Debug)]
pub struct ForecastService {
    config: ForecastConfig,
}

impl ForecastService {
    pub fn new(config: &ForecastConfig) -> ForecastResult<Self> {
        if config.days == 0 || config.days > MAX_FORECAST_DAYS {
            return Err(ForecastError::InvalidDays {
                days: config.days,
                max: MAX_FORECAST_DAYS,
            });
        }

        let bounds = MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C;
        if config.min_temperature_c >= config.max_temperature_c
            || !bounds.contains(&config.min_temperature_c)
            || !bounds.contains(&config.max_temperature_c)
        {
            return Err(ForecastError::InvalidTemperatureRange {
                min: config.min_temperature_c,
                max: config.max_temperature_c,
            });
        }

        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn days(&self) -> u32 {
        self.config.days
    }

    pub fn generate(&self) -> ForecastResult<Vec<WeatherForecast>> {
        self.generate_from(Local::now().date_naive(), &mut rand::thread_rng())
    }

    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        today: NaiveDate,
        rng: &mut R,
    ) -> ForecastResult<Vec<WeatherForecast>> {
        (1..=self.config.days)
            .map(|offset| {
                let date = today
                    .checked_add_days(Days::new(u64::from(offset)))
                    .ok_or(ForecastError::DateOverflow(offset))?;
                let temperature_c =
                    rng.gen_range(self.config.min_temperature_c..self.config.max_temperature_c);
                let summary = SUMMARIES[rng.gen_range(0..SUMMARIES.len())];

                Ok(WeatherForecast::new(date, temperature_c, Some(summary.to_string())))
            })
            .collect()
    }
}
