//! Auto-generated improvement sub-missions attached to the mission
//! counterfactual. Candidates come from the same feature state the scorer
//! reads: credit bracket, employment, debt ratio, and loan purpose.

use super::ScoringConfig;
use crate::missions::domain::{StateKey, SubMission, TrackingRule};
use crate::recommend::domain::{EmploymentType, LoanPurpose, UserProfile};

const DEFAULT_HEADLINE: &str = "Complete these missions to lift your match score.";
const DEBT_FIRST_HEADLINE: &str =
    "Lowering your debt ratio is the fastest way to improve your match.";

/// Build the headline plus at most `max_auto_sub_missions` de-duplicated
/// sub-missions. A debt ratio above 50% promotes the debt missions to the
/// front and swaps in the debt-focused headline.
pub(super) fn auto_sub_missions(
    profile: &UserProfile,
    resolved_dsr: f64,
    config: &ScoringConfig,
) -> (String, Vec<SubMission>) {
    let debt_first = resolved_dsr > 50.0;

    let mut candidates: Vec<SubMission> = Vec::new();
    if debt_first {
        push_debt_missions(&mut candidates, resolved_dsr);
    }
    push_credit_missions(&mut candidates, profile.credit_score);
    push_employment_missions(&mut candidates, profile);
    if !debt_first {
        push_debt_missions(&mut candidates, resolved_dsr);
    }
    push_purpose_missions(&mut candidates, profile.loan_purpose);

    let mut selected: Vec<SubMission> = Vec::new();
    for candidate in candidates {
        if selected.len() == config.max_auto_sub_missions {
            break;
        }
        if selected.iter().any(|existing| existing.text == candidate.text) {
            continue;
        }
        selected.push(candidate);
    }

    let headline = if debt_first { DEBT_FIRST_HEADLINE } else { DEFAULT_HEADLINE };
    (headline.to_string(), selected)
}

fn push_credit_missions(out: &mut Vec<SubMission>, credit_score: u16) {
    if credit_score < 600 {
        out.push(SubMission::new(
            "Automate utility and telecom payments to build a payment history.",
            Some(TrackingRule::at_least(StateKey::CreditScore, 600.0)),
        ));
    } else if credit_score < 750 {
        out.push(SubMission::new(
            "Keep card utilization under 30% for three consecutive months.",
            Some(TrackingRule::at_least(StateKey::CreditScore, 750.0)),
        ));
    } else {
        out.push(SubMission::new(
            "Maintain zero late payments this quarter.",
            Some(TrackingRule::at_least(StateKey::CreditScore, 900.0)),
        ));
    }
}

fn push_employment_missions(out: &mut Vec<SubMission>, profile: &UserProfile) {
    match profile.employment_type {
        EmploymentType::Regular => {
            if profile.income < 3500.0 {
                out.push(SubMission::new(
                    "Register a salary-transfer account to certify steady income.",
                    Some(TrackingRule::at_least(StateKey::Income, 3500.0)),
                ));
            } else {
                out.push(SubMission::new(
                    "Submit your employment certificate for a preferential rate review.",
                    None,
                ));
            }
        }
        EmploymentType::BusinessOwner => {
            out.push(SubMission::new(
                "Link your business account so revenue can be verified.",
                None,
            ));
        }
        EmploymentType::Other => {
            out.push(SubMission::new(
                "Add a recurring income source to your profile.",
                None,
            ));
        }
    }
}

fn push_debt_missions(out: &mut Vec<SubMission>, resolved_dsr: f64) {
    if resolved_dsr >= 70.0 {
        out.push(SubMission::new(
            "Pay down your highest-interest loan to bring your debt ratio under 70%.",
            Some(TrackingRule::at_most(StateKey::DebtRatio, 70.0)),
        ));
    } else if resolved_dsr >= 50.0 {
        out.push(SubMission::new(
            "Cut revolving debt until your debt ratio falls below 50%.",
            Some(TrackingRule::at_most(StateKey::DebtRatio, 50.0)),
        ));
    } else if resolved_dsr >= 40.0 {
        out.push(SubMission::new(
            "Pause new borrowing until your debt ratio is back under 40%.",
            Some(TrackingRule::at_most(StateKey::DebtRatio, 40.0)),
        ));
    }
}

fn push_purpose_missions(out: &mut Vec<SubMission>, purpose: LoanPurpose) {
    match purpose {
        LoanPurpose::Living => out.push(SubMission::new(
            "Set a monthly budget and track fixed outgoings for one month.",
            None,
        )),
        LoanPurpose::Refinance => out.push(SubMission::new(
            "List every active loan with its rate to spot refinancing targets.",
            None,
        )),
        LoanPurpose::Housing => out.push(SubMission::new(
            "Top up your housing subscription savings this month.",
            Some(TrackingRule::at_least(StateKey::TotalAssets, 30_000_000.0)),
        )),
        LoanPurpose::Business => out.push(SubMission::new(
            "Separate personal and business spending into different accounts.",
            None,
        )),
        LoanPurpose::Unset => {}
    }
}
