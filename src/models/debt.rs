/// Outstanding debt for one team, as read from a `{name}_debt.csv`
/// report or computed from the payment snapshot. Amounts are integer
/// cents; `days` is the number of chargeable days since the last payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebtRecord {
    pub name: String,
    pub amount_cents: i64,
    pub days: i64,
}

impl DebtRecord {
    pub fn amount_dollars(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }
}
