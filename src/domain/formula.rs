//! Cash-flow formulas as data.
//!
//! A [`Formula`] is a signed sum of canonical ids. Evaluating it reads each
//! term through [`ValueStore::get_value`] and writes the total back under the
//! formula's target, where later formulas can read it.

use std::fmt;

use crate::domain::chart_of_accounts::{
    CASH, CONTRIBUTED_CAPITAL, CURRENT_LIABILITIES, DEPRECIATION_EXPENSE, DIVIDENDS,
    FINANCING_CF, GAIN_LOSS_ON_DISPOSAL_OF_PPE, INVENTORY, INVESTING_CF,
    NET_ACCOUNTS_RECEIVABLE, NET_INCOME, NET_PROPERTY_PLANT_EQUIPMENT,
    NON_CURRENT_LIABILITIES, OPERATION_CF, OTHER_CURRENT_ASSETS, OTHER_EQUITY,
    OTHER_NON_CURRENT_ASSETS,
};
use crate::domain::value_store::ValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub sign: Sign,
    pub id: &'static str,
}

impl Term {
    pub const fn plus(id: &'static str) -> Self {
        Term {
            sign: Sign::Plus,
            id,
        }
    }

    pub const fn minus(id: &'static str) -> Self {
        Term {
            sign: Sign::Minus,
            id,
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match self.sign {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    pub target: &'static str,
    pub terms: &'static [Term],
}

impl Formula {
    /// Sum of the terms as currently stored, without writing anything.
    pub fn value_in(&self, store: &ValueStore<'_>) -> f64 {
        self.terms
            .iter()
            .fold(0.0, |acc, term| acc + term.apply(store.get_value(term.id)))
    }

    pub fn evaluate(&self, store: &mut ValueStore<'_>) -> f64 {
        let total = self.value_in(store);
        store.store_derived(self.target, total);
        total
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} =", self.target)?;
        for (i, term) in self.terms.iter().enumerate() {
            match (i, term.sign) {
                (0, Sign::Plus) => write!(f, " {}", term.id)?,
                (0, Sign::Minus) => write!(f, " -{}", term.id)?,
                (_, Sign::Plus) => write!(f, " + {}", term.id)?,
                (_, Sign::Minus) => write!(f, " - {}", term.id)?,
            }
        }
        Ok(())
    }
}

pub const OPERATING_CF_FORMULA: Formula = Formula {
    target: OPERATION_CF,
    terms: &[
        Term::plus(NET_INCOME),
        Term::plus(DEPRECIATION_EXPENSE),
        Term::plus(NET_ACCOUNTS_RECEIVABLE),
        Term::minus(INVENTORY),
        Term::minus(OTHER_CURRENT_ASSETS),
        Term::plus(CURRENT_LIABILITIES),
        Term::minus(GAIN_LOSS_ON_DISPOSAL_OF_PPE),
    ],
};

pub const INVESTING_CF_FORMULA: Formula = Formula {
    target: INVESTING_CF,
    terms: &[
        Term::minus(NET_PROPERTY_PLANT_EQUIPMENT),
        Term::plus(GAIN_LOSS_ON_DISPOSAL_OF_PPE),
        Term::plus(DEPRECIATION_EXPENSE),
        Term::minus(OTHER_NON_CURRENT_ASSETS),
        Term::plus(OTHER_EQUITY),
    ],
};

pub const FINANCING_CF_FORMULA: Formula = Formula {
    target: FINANCING_CF,
    terms: &[
        Term::plus(NON_CURRENT_LIABILITIES),
        Term::plus(CONTRIBUTED_CAPITAL),
        Term::minus(DIVIDENDS),
    ],
};

/// Reads the stored subtotals; it does not recompute them.
pub const CASH_FORMULA: Formula = Formula {
    target: CASH,
    terms: &[
        Term::plus(OPERATION_CF),
        Term::plus(INVESTING_CF),
        Term::plus(FINANCING_CF),
    ],
};

/// All formulas in dependency order.
pub const STATEMENT_FORMULAS: [Formula; 4] = [
    OPERATING_CF_FORMULA,
    INVESTING_CF_FORMULA,
    FINANCING_CF_FORMULA,
    CASH_FORMULA,
];

impl ValueStore<'_> {
    pub fn calculate_operational_cf(&mut self) -> f64 {
        OPERATING_CF_FORMULA.evaluate(self)
    }

    pub fn calculate_investing_cf(&mut self) -> f64 {
        INVESTING_CF_FORMULA.evaluate(self)
    }

    pub fn calculate_financing_cf(&mut self) -> f64 {
        FINANCING_CF_FORMULA.evaluate(self)
    }

    /// Sum of whatever CF subtotals have been stored so far. A subtotal that
    /// was never calculated contributes 0.0.
    pub fn calculate_cash(&mut self) -> f64 {
        CASH_FORMULA.evaluate(self)
    }
}
