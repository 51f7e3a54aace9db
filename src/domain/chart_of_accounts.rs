//! The builtin chart of accounts.
//!
//! Each entry is `(id, display_name, aliases)`. Ids are snake_case; older
//! spellings of an id stay listed as aliases so they keep resolving.

pub const OPERATION_CF: &str = "operation_cf";
pub const INVESTING_CF: &str = "investing_cf";
pub const FINANCING_CF: &str = "financing_cf";
pub const CASH: &str = "cash";

pub const NET_INCOME: &str = "net_income";
pub const DEPRECIATION_EXPENSE: &str = "depreciation_expense";
pub const NET_ACCOUNTS_RECEIVABLE: &str = "net_accounts_receivable";
pub const INVENTORY: &str = "inventory";
pub const OTHER_CURRENT_ASSETS: &str = "other_current_assets";
pub const CURRENT_LIABILITIES: &str = "current_liabilities";
pub const GAIN_LOSS_ON_DISPOSAL_OF_PPE: &str = "gain_loss_on_disposal_of_PPE";
pub const NET_PROPERTY_PLANT_EQUIPMENT: &str = "net_property_plant_equipment";
pub const OTHER_NON_CURRENT_ASSETS: &str = "other_non_current_assets";
pub const OTHER_EQUITY: &str = "other_equity";
pub const NON_CURRENT_LIABILITIES: &str = "non_current_liabilities";
pub const CONTRIBUTED_CAPITAL: &str = "contributed_capital";
pub const DIVIDENDS: &str = "dividends";

/// Keys the cash-flow formulas write their results under.
pub const DERIVED_TOTALS: [&str; 4] = [OPERATION_CF, INVESTING_CF, FINANCING_CF, CASH];

pub type CatalogEntry = (&'static str, &'static str, &'static [&'static str]);

pub const CHART_OF_ACCOUNTS: &[CatalogEntry] = &[
    // Derived totals
    (
        OPERATION_CF,
        "Операционный денежный поток",
        &["OperationalCF", "delOperationalCF", "OCF", "delOCF", "Operational Cash Flow"],
    ),
    (
        INVESTING_CF,
        "Инвестиционный денежный поток",
        &["InvestingCF", "delInvestingCF", "ICF", "delICF", "Investing Cash Flow"],
    ),
    (
        FINANCING_CF,
        "Финансовый денежный поток",
        &["FinancingCF", "delFinancingCF", "FCF", "delFCF", "Financing Cash Flow"],
    ),
    (CASH, "Денежные средства", &["delCash", "C", "delC", "Cash"]),
    // Balance sheet
    ("assets", "Активы", &["delAssets", "A", "delA", "Assets"]),
    ("liabilities", "Обязательства", &["delLiabilities", "L", "delL", "Liabilities"]),
    ("equity", "Собственный капитал", &["delEquity", "E", "delE", "Equity"]),
    (
        "retained_earnings",
        "Накопленная прибыль",
        &["delRetainedEarnings", "RE", "delRE", "Retained Earnings"],
    ),
    (
        "current_assets",
        "Оборотные активы",
        &["delCurrentAssets", "CA", "delCA", "Current Assets"],
    ),
    (
        "non_current_assets",
        "Внеоборотные активы",
        &["delNonCurrentAssets", "NCA", "delNCA", "Non-Current Assets"],
    ),
    (
        CONTRIBUTED_CAPITAL,
        "Акционерный капитал",
        &["delContributedCapital", "CC", "delCC", "Contributed Capital"],
    ),
    (
        OTHER_EQUITY,
        "Прочий собственный капитал",
        &["delOtherEquity", "OE", "delOE", "Other Equity"],
    ),
    (
        CURRENT_LIABILITIES,
        "Краткосрочные обязательства",
        &["delCurrentLiabilities", "CL", "delCL", "Current Liabilities"],
    ),
    (
        NON_CURRENT_LIABILITIES,
        "Долгосрочные обязательства",
        &[
            "non-current liabilities",
            "non-current_liabilities",
            "delNonCurrentLiabilities",
            "NCL",
            "delNCL",
            "Non-Current Liabilities",
        ],
    ),
    // Income statement and supporting line items
    (
        NET_INCOME,
        "Чистая прибыль",
        &["delNetIncome", "NI", "Net Income"],
    ),
    (DIVIDENDS, "Дивиденды", &["delDividends", "Div", "delDiv", "Dividends"]),
    (
        NET_ACCOUNTS_RECEIVABLE,
        "Дебиторская задолженность (за вычетом резерва по сомнительным долгам и прочих резервов)",
        &["delNetAccountsReceivable", "NetA/R", "delNetA/R", "Net Accounts Receivable"],
    ),
    (
        INVENTORY,
        "Товарно-материальные запасы",
        &["delInventory", "Inv", "delInv", "Inventory"],
    ),
    (
        OTHER_CURRENT_ASSETS,
        "Прочие оборотные активы",
        &["delOtherCurrentAssets", "OCA", "delOCA", "Other Current Assets"],
    ),
    (
        NET_PROPERTY_PLANT_EQUIPMENT,
        "Основные средства (за вычетом накопленной амортизации)",
        &[
            "net_property, plant & equipment",
            "delNetPropertyPlantEquipment",
            "NetPPE",
            "delNetPPE",
            "Net Property Plant Equipment",
        ],
    ),
    (
        OTHER_NON_CURRENT_ASSETS,
        "Прочие внеоборотные активы",
        &["delOtherNonCurrentAssets", "ONCA", "delONCA", "Other Non-Current Assets"],
    ),
    (
        DEPRECIATION_EXPENSE,
        "Амортизация",
        &[
            "depreciation_expence",
            "delDepreciationExpence",
            "DE",
            "delDE",
            "DepExp",
            "Depreciation Expence",
            "Depreciation Expense",
        ],
    ),
    (
        GAIN_LOSS_ON_DISPOSAL_OF_PPE,
        "Прибыль (убыток) от реализации объектов основных средств",
        &[
            "delGainLossOnDisposalOfPPE",
            "GLODOPPE",
            "Gain(Loss)",
            "delGain(Loss)",
            "Gain Loss On Disposal Of PPE",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for (id, _, _) in CHART_OF_ACCOUNTS {
            assert!(seen.insert(*id), "duplicate id {id}");
        }
    }

    #[test]
    fn derived_totals_are_catalogued() {
        for key in DERIVED_TOTALS {
            assert!(
                CHART_OF_ACCOUNTS.iter().any(|(id, _, _)| *id == key),
                "{key} missing from catalog"
            );
        }
    }

    #[test]
    fn every_entry_has_a_display_name_and_aliases() {
        for (id, name, aliases) in CHART_OF_ACCOUNTS {
            assert!(!name.trim().is_empty(), "{id} has no display name");
            assert!(!aliases.is_empty(), "{id} has no aliases");
        }
    }
}
