pub mod chart_data;
pub mod date_range;
pub mod debts;
pub mod layout;
