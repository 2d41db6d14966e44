use serde_json::json;

use crate::recommend::domain::{
    EmploymentType, LoanPurpose, Persona, ProfileError, UserProfile,
};

#[test]
fn parses_string_numerics_from_the_intake_form() {
    let value = json!({
        "income": "4000",
        "creditScore": "820",
        "employmentType": "regular",
        "loanPurpose": "living",
    });

    let profile = UserProfile::from_stored(&value).expect("valid profile");
    assert_eq!(profile.income, 4000.0);
    assert_eq!(profile.credit_score, 820);
    assert_eq!(profile.employment_type, EmploymentType::Regular);
    assert_eq!(profile.loan_purpose, LoanPurpose::Living);
    assert_eq!(profile.dsr, None);
}

#[test]
fn rejects_unparseable_numerics_instead_of_propagating_nan() {
    let value = json!({ "income": "lots", "creditScore": "820" });

    match UserProfile::from_stored(&value) {
        Err(ProfileError::InvalidProfile { field, .. }) => assert_eq!(field, "income"),
        other => panic!("expected invalid income, got {other:?}"),
    }
}

#[test]
fn rejects_out_of_range_credit_scores() {
    let value = json!({ "income": "4000", "creditScore": "1500" });
    assert!(UserProfile::from_stored(&value).is_err());
}

#[test]
fn unknown_enum_strings_fall_back_to_neutral_variants() {
    let value = json!({
        "income": "2500",
        "creditScore": "700",
        "employmentType": "gig_worker",
        "loanPurpose": "vacation",
    });

    let profile = UserProfile::from_stored(&value).expect("valid profile");
    assert_eq!(profile.employment_type, EmploymentType::Other);
    assert_eq!(profile.loan_purpose, LoanPurpose::Unset);
}

#[test]
fn persona_merge_supplies_assets_and_fallback_debt_ratio() {
    let value = json!({ "income": "4000", "creditScore": "700" });
    let persona: Persona = serde_json::from_value(json!({
        "accounts": [
            { "bank": "A", "balance": 20_000_000u64 },
            { "bank": "B", "balance": 15_000_000u64 },
        ],
        "points": 100,
        "dsr": 33.0,
    }))
    .expect("persona");

    let profile = UserProfile::from_stored(&value).expect("profile").merged_with(&persona);
    assert_eq!(profile.total_assets, Some(35_000_000));
    assert_eq!(profile.dsr, Some(33.0));
}

#[test]
fn explicit_form_debt_ratio_wins_over_persona() {
    let value = json!({ "income": "4000", "creditScore": "700", "dsr": 18.0 });
    let persona: Persona =
        serde_json::from_value(json!({ "accounts": [], "points": 0, "dsr": 55.0 }))
            .expect("persona");

    let profile = UserProfile::from_stored(&value).expect("profile").merged_with(&persona);
    assert_eq!(profile.dsr, Some(18.0));
}
