//! Cash-flow statement computed in dependency order.

use std::fmt;

use crate::domain::formula::{
    CASH_FORMULA, FINANCING_CF_FORMULA, INVESTING_CF_FORMULA, OPERATING_CF_FORMULA,
};
use crate::domain::value_store::ValueStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowStatement {
    pub operating: f64,
    pub investing: f64,
    pub financing: f64,
    pub cash: f64,
}

impl ValueStore<'_> {
    /// Recomputes the three CF subtotals, then cash from them. Unlike calling
    /// [`ValueStore::calculate_cash`] on its own, the result never depends on
    /// which subtotals happened to be calculated earlier.
    pub fn compute_statement(&mut self) -> CashFlowStatement {
        let operating = OPERATING_CF_FORMULA.evaluate(self);
        let investing = INVESTING_CF_FORMULA.evaluate(self);
        let financing = FINANCING_CF_FORMULA.evaluate(self);
        let cash = CASH_FORMULA.evaluate(self);
        CashFlowStatement {
            operating,
            investing,
            financing,
            cash,
        }
    }
}

impl fmt::Display for CashFlowStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Operating CF: {:.2}", self.operating)?;
        writeln!(f, "Investing CF: {:.2}", self.investing)?;
        writeln!(f, "Financing CF: {:.2}", self.financing)?;
        write!(f, "Cash:         {:.2}", self.cash)
    }
}
