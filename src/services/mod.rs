pub mod api_client;
pub mod fees;
pub mod units;
pub mod reservations;
pub mod users;
pub mod reports;
pub mod activity;

pub use api_client::{ApiClient, ApiError};
