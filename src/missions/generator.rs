//! Canned mission templates. Each intent branches on the stated loan purpose
//! (defaulting to everyday living) and instantiates fresh sub-mission ids.

use super::domain::{Mission, MissionFocus, MissionIntent, StateKey, SubMission, TrackingRule};
use crate::recommend::domain::{LoanPurpose, UserProfile};

/// Build one tailored mission for the user's stated intent.
pub fn tailor(profile: &UserProfile, intent: MissionIntent) -> Mission {
    let purpose = match profile.loan_purpose {
        LoanPurpose::Unset => LoanPurpose::Living,
        other => other,
    };

    match intent {
        MissionIntent::Limit => limit_mission(purpose),
        MissionIntent::Rate => rate_mission(purpose),
        MissionIntent::Period => period_mission(purpose),
        MissionIntent::Method => method_mission(purpose),
    }
}

fn limit_mission(purpose: LoanPurpose) -> Mission {
    match purpose {
        LoanPurpose::Housing => Mission::new(
            "Raise your housing loan ceiling",
            "open-housing-limit",
            "Grow my deposit",
            MissionFocus::Housing,
            vec![
                SubMission::new(
                    "Link every savings account so your deposit base is visible.",
                    Some(TrackingRule::at_least(StateKey::TotalAssets, 30_000_000.0)),
                ),
                SubMission::new("Top up your housing subscription savings this month.", None),
                SubMission::new("Upload a draft of your lease agreement for review.", None),
            ],
        ),
        LoanPurpose::Business => Mission::new(
            "Prove revenue to raise your limit",
            "open-revenue-proof",
            "Verify my revenue",
            MissionFocus::General,
            vec![
                SubMission::new("Link your business settlement account.", None),
                SubMission::new("File this quarter's VAT return on time.", None),
            ],
        ),
        _ => Mission::new(
            "Grow your certified income",
            "open-income-boost",
            "Certify my income",
            MissionFocus::General,
            vec![
                SubMission::new(
                    "Register a salary-transfer account to certify steady income.",
                    Some(TrackingRule::at_least(StateKey::Income, 3500.0)),
                ),
                SubMission::new(
                    "Link all your bank accounts to surface hidden assets.",
                    Some(TrackingRule::at_least(StateKey::TotalAssets, 10_000_000.0)),
                ),
                SubMission::new(
                    "Keep your debt ratio under the 40% regulated cap.",
                    Some(TrackingRule::at_most(StateKey::DebtRatio, 40.0)),
                ),
            ],
        ),
    }
}

fn rate_mission(purpose: LoanPurpose) -> Mission {
    match purpose {
        LoanPurpose::Refinance => Mission::new(
            "Bundle your high-interest loans",
            "open-refinance-bundle",
            "Compare refinance rates",
            MissionFocus::DebtRelief,
            vec![
                SubMission::new(
                    "List every active loan with its rate to spot refinancing targets.",
                    None,
                ),
                SubMission::new(
                    "Repay your card loan first to free up debt-ratio headroom.",
                    Some(TrackingRule::at_most(StateKey::DebtRatio, 40.0)),
                ),
                SubMission::new("Run a repayment simulation on the bundled balance.", None),
            ],
        ),
        LoanPurpose::Business => Mission::new(
            "Certify steady revenue for a better rate",
            "open-revenue-proof",
            "Verify my revenue",
            MissionFocus::General,
            vec![
                SubMission::new("Submit twelve months of sales settlement history.", None),
                SubMission::new("Keep your business account free of overdrafts this quarter.", None),
            ],
        ),
        _ => Mission::new(
            "Lift your credit tier",
            "open-credit-coach",
            "Coach my credit",
            MissionFocus::Credit,
            vec![
                SubMission::new(
                    "Keep card utilization under 30% for three consecutive months.",
                    Some(TrackingRule::at_least(StateKey::CreditScore, 750.0)),
                ),
                SubMission::new(
                    "Automate utility and telecom payments to build a payment history.",
                    None,
                ),
                SubMission::new("Avoid new credit inquiries for ninety days.", None),
            ],
        ),
    }
}

fn period_mission(purpose: LoanPurpose) -> Mission {
    match purpose {
        LoanPurpose::Housing => Mission::new(
            "Match the loan term to your lease",
            "open-term-planner",
            "Plan my term",
            MissionFocus::Housing,
            vec![
                SubMission::new("Confirm the renewal date on your current lease.", None),
                SubMission::new(
                    "Set aside two months of repayments as a term-end buffer.",
                    Some(TrackingRule::at_least(StateKey::TotalAssets, 5_000_000.0)),
                ),
            ],
        ),
        _ => Mission::new(
            "Build a longer repayment history",
            "open-term-planner",
            "Plan my term",
            MissionFocus::Credit,
            vec![
                SubMission::new("Keep an installment product active for six months.", None),
                SubMission::new(
                    "Hold your reward points above one full level.",
                    Some(TrackingRule::at_least(StateKey::Points, 3000.0)),
                ),
            ],
        ),
    }
}

fn method_mission(purpose: LoanPurpose) -> Mission {
    match purpose {
        LoanPurpose::Refinance | LoanPurpose::Business => Mission::new(
            "Switch to amortizing repayment",
            "open-repayment-method",
            "Compare methods",
            MissionFocus::DebtRelief,
            vec![
                SubMission::new("Compare bullet versus amortizing cost on your balance.", None),
                SubMission::new(
                    "Bring your debt ratio under 40% before the switch.",
                    Some(TrackingRule::at_most(StateKey::DebtRatio, 40.0)),
                ),
            ],
        ),
        _ => Mission::new(
            "Automate your repayments",
            "open-repayment-method",
            "Set up auto-debit",
            MissionFocus::General,
            vec![
                SubMission::new("Set the repayment date right after your payday.", None),
                SubMission::new("Enable auto-debit from your main account.", None),
                SubMission::new(
                    "Keep one repayment's worth of balance as a cushion.",
                    Some(TrackingRule::at_least(StateKey::TotalAssets, 1_000_000.0)),
                ),
            ],
        ),
    }
}
