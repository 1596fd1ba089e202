pub mod errors;
pub mod forecast;

pub use errors::*;
pub use forecast::*;

/// Temperature in whole degrees Celsius
pub type Celsius = i32;

/// Temperature in whole degrees Fahrenheit
pub type Fahrenheit = i32;
