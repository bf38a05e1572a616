pub mod toast;
pub mod modal;
pub mod skeleton;
pub mod kpi_card;
pub mod fees_chart;
pub mod register_payment_modal;
pub mod payment_qr_modal;
pub mod unit_modal;
pub mod unit_detail_modal;

pub use toast::{use_toast, ToastHandle, ToastProvider};
pub use modal::Modal;
pub use skeleton::{DashboardSkeleton, ReportSkeleton, TableMessage};
pub use kpi_card::{KpiCard, PaymentProgress};
pub use fees_chart::FeesChart;
pub use register_payment_modal::RegisterPaymentModal;
pub use payment_qr_modal::PaymentQrModal;
pub use unit_modal::UnitModal;
pub use unit_detail_modal::UnitDetailModal;
