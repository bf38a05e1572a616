pub mod dashboard;
pub mod fees;
pub mod units;
pub mod reservations;
pub mod reports;

pub use dashboard::DashboardView;
pub use fees::FeesView;
pub use units::UnitsView;
pub use reservations::ReservationsView;
pub use reports::ReportsView;
