pub mod health;
pub mod prometheus;
pub mod weather;
