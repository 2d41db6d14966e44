//! Core engine behind the TrustFin personal-finance demo: a deterministic
//! loan-product match scorer with an explanation trail, a debt-ratio-aware
//! affordability model, a membership level system, and trackable credit
//! improvement missions. The presentation layer only consumes the plain data
//! structures exposed here; all state lives behind the [`store::StateStore`]
//! abstraction.

pub mod catalog;
pub mod config;
pub mod error;
pub mod level;
pub mod missions;
pub mod notifications;
pub mod recommend;
pub mod store;
pub mod telemetry;

pub use error::AppError;
