//! Debt-ratio-constrained credit limit. Two independent ceilings apply and
//! the smaller one governs: a plain income multiple, and for regulated
//! products the repayment capacity left under the 40% debt-ratio cap.

/// Statutory cap applied to regulated products. Illustrative, not legal.
pub const DSR_CAP_PCT: f64 = 40.0;

/// Annual repayment per unit borrowed under the fixed five-year amortization
/// convention: one fifth of principal plus a year of interest. A
/// simplification of real debt-ratio law, kept deliberately.
fn annual_repayment_factor(annual_rate_pct: f64) -> f64 {
    0.2 + annual_rate_pct / 100.0
}

/// Compute the credit limit for a product, in the same currency unit as
/// `income`. Results above 100 are floored to the nearest 100.
pub fn credit_limit(
    income: f64,
    limit_factor: f64,
    debt_ratio: f64,
    dsr_regulated: bool,
    annual_rate_pct: f64,
) -> u64 {
    let limit_by_income = (income * limit_factor).floor().max(0.0);

    let limit = if dsr_regulated {
        let available_dsr = (DSR_CAP_PCT - debt_ratio).max(0.0);
        if available_dsr == 0.0 {
            0.0
        } else {
            let available_annual_repayment = income * available_dsr / 100.0;
            let limit_by_dsr =
                (available_annual_repayment / annual_repayment_factor(annual_rate_pct)).floor();
            limit_by_income.min(limit_by_dsr)
        }
    } else {
        limit_by_income
    };

    round_down_to_hundred(limit as u64)
}

fn round_down_to_hundred(value: u64) -> u64 {
    if value > 100 {
        value / 100 * 100
    } else {
        value
    }
}
