pub mod lenient;
pub mod listing;
pub mod form;
pub mod user;
pub mod fee;
pub mod unit;
pub mod reservation;
pub mod report;
pub mod dashboard;

pub use listing::Listing;
pub use form::FormError;
pub use user::{Capabilities, OwnerOption, Role, User};
pub use fee::{ExpenseType, Fee, FeeQuery, IssueFeesForm, PaymentForm, PaymentMethod, PaymentPreference};
pub use unit::{Unit, UnitDetail, UnitForm};
pub use reservation::{CommonArea, Reservation, ReservationForm, ScheduleQuery};
pub use report::{FinanceReport, ReportFilters, ReportQuery};
pub use dashboard::{ActivityItem, DashboardStats, MaintenanceRequest, Notice};
