use thiserror::Error;

/// Errors raised while building or validating forecast data
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    #[error("forecast days must be between 1 and {max}, got {days}")]
    InvalidDays { days: u32, max: u32 },

    #[error("invalid temperature range: min {min} must be below max {max}, both within -273..=1000")]
    InvalidTemperatureRange { min: i32, max: i32 },

    #[error("date overflow adding {0} days")]
    DateOverflow(u32),
}

pub type ForecastResult<T> = std::result::Result<T, ForecastError>;
