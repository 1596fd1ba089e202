//! Smoke-test harness for the forecast API.
//!
//! Boots the application in-process (or points at a deployed instance),
//! issues `GET /weatherforecast` and checks for `200 OK`. Outcomes are
//! reported as [`TestOutcome`]; errors that prevent a verdict, such as the
//! application failing to start, surface as [`HarnessError`].

pub mod client;
pub mod factory;
pub mod orchestration;
pub mod outcome;
pub mod remote;
pub mod smoke;
pub mod suite;

pub use client::*;
pub use factory::*;
pub use orchestration::*;
pub use outcome::*;
pub use remote::*;
pub use smoke::*;
pub use suite::*;
