mod reward;
mod service;
mod tracker;

use crate::missions::domain::PersonaSnapshot;
use crate::recommend::domain::{EmploymentType, LoanPurpose, UserProfile};

pub(super) fn profile(purpose: LoanPurpose) -> UserProfile {
    UserProfile {
        income: 4000.0,
        credit_score: 720,
        employment_type: EmploymentType::Regular,
        loan_purpose: purpose,
        total_assets: Some(8_000_000),
        dsr: Some(30.0),
    }
}

pub(super) fn snapshot(credit_score: u16, income: f64, dsr: f64) -> PersonaSnapshot {
    PersonaSnapshot {
        credit_score,
        income,
        dsr,
        points: 0,
        total_assets: 8_000_000,
    }
}
