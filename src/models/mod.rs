pub mod debt;
pub mod payment;

pub use debt::DebtRecord;
pub use payment::{ChartData, PaymentInterval};
