//! Ordered rule chain behind the match score. Each rule may append a
//! contribution and/or a counterfactual; the additions commute, so the order
//! only fixes how the explanation reads.

use super::submissions;
use super::{
    Contribution, Counterfactual, CounterfactualKind, ScoreAnalysis, ScoreFactor, ScoringConfig,
};
use crate::catalog::{LoanProduct, ProductTag};
use crate::recommend::domain::{EmploymentType, LoanPurpose, UserProfile};

/// Accumulator folded through the rule chain.
pub(crate) struct RuleState {
    score: i16,
    contributions: Vec<Contribution>,
    counterfactuals: Vec<Counterfactual>,
}

impl RuleState {
    pub(crate) fn new(base_score: i16) -> Self {
        let mut state = Self {
            score: 0,
            contributions: Vec::new(),
            counterfactuals: Vec::new(),
        };
        state.add(ScoreFactor::Base, base_score, "baseline for every product");
        state
    }

    fn add(&mut self, factor: ScoreFactor, points: i16, note: impl Into<String>) {
        self.score += points;
        self.contributions.push(Contribution {
            factor,
            points,
            note: note.into(),
        });
    }

    fn tip(&mut self, text: impl Into<String>, action: &str, label: &str) {
        self.counterfactuals.push(Counterfactual {
            kind: CounterfactualKind::Tip,
            text: text.into(),
            action: action.to_string(),
            label: label.to_string(),
            sub_missions: Vec::new(),
        });
    }

    pub(crate) fn finish(self, config: &ScoringConfig) -> ScoreAnalysis {
        ScoreAnalysis {
            score: self.score.clamp(config.score_floor, config.score_ceiling),
            contributions: self.contributions,
            counterfactuals: self.counterfactuals,
        }
    }
}

pub(crate) type Rule = fn(&UserProfile, &LoanProduct, f64, &ScoringConfig, &mut RuleState);

pub(crate) const RULE_CHAIN: &[Rule] = &[
    credit_tier,
    rate_fit,
    asset_tier,
    employment_fit,
    purpose_fit,
    debt_ratio,
    mission_suggestion,
];

fn credit_tier(
    profile: &UserProfile,
    product: &LoanProduct,
    _dsr: f64,
    config: &ScoringConfig,
    state: &mut RuleState,
) {
    let credit = profile.credit_score;
    let stable_tier = product.min_credit + config.stable_credit_margin;
    let good_tier = product.min_credit + config.good_credit_margin;

    if credit >= stable_tier {
        state.add(
            ScoreFactor::CreditTier,
            20,
            format!("stable credit: {credit} clears the {stable_tier} tier"),
        );
    } else if credit >= good_tier {
        state.add(
            ScoreFactor::CreditTier,
            10,
            format!("good credit: {credit} clears the {good_tier} tier"),
        );
        let gap = stable_tier - credit;
        state.tip(
            format!("Raise your credit score by {gap} points to unlock the top credit tier."),
            "open-credit-coach",
            "See credit tips",
        );
    } else if credit < product.min_credit {
        state.add(
            ScoreFactor::CreditTier,
            -30,
            format!("credit {credit} is below the product minimum {}", product.min_credit),
        );
    }
}

fn rate_fit(
    profile: &UserProfile,
    product: &LoanProduct,
    _dsr: f64,
    config: &ScoringConfig,
    state: &mut RuleState,
) {
    if profile.income > config.high_income_threshold && product.base_rate < config.low_rate_threshold
    {
        state.add(
            ScoreFactor::RateFit,
            10,
            "high income pairs well with this low base rate",
        );
    }
}

fn asset_tier(
    profile: &UserProfile,
    _product: &LoanProduct,
    _dsr: f64,
    config: &ScoringConfig,
    state: &mut RuleState,
) {
    // Missing linked-account data skips the rule entirely.
    let Some(total_assets) = profile.total_assets else {
        return;
    };

    if total_assets >= config.asset_tier_major {
        state.add(ScoreFactor::AssetBase, 10, "substantial linked assets");
    } else if total_assets >= config.asset_tier_minor {
        state.add(ScoreFactor::AssetBase, 5, "meaningful linked assets");
    }
}

fn employment_fit(
    profile: &UserProfile,
    product: &LoanProduct,
    _dsr: f64,
    _config: &ScoringConfig,
    state: &mut RuleState,
) {
    match profile.employment_type {
        EmploymentType::BusinessOwner => {
            if product.has_tag(ProductTag::BusinessOnly) {
                state.add(
                    ScoreFactor::EmploymentFit,
                    15,
                    "business owner matched to a business-only product",
                );
            }
        }
        EmploymentType::Regular => {
            if product.has_tag(ProductTag::EmployeePreferred) {
                state.add(
                    ScoreFactor::EmploymentFit,
                    15,
                    "salaried worker matched to an employee-preferred product",
                );
            }
            if profile.credit_score < 750 {
                state.add(
                    ScoreFactor::EmploymentFit,
                    10,
                    "future income potential of steady employment",
                );
                state.tip(
                    "Designate this bank for your salary transfer to strengthen your income profile.",
                    "open-salary-transfer",
                    "Set up salary transfer",
                );
            }
        }
        EmploymentType::Other => {}
    }
}

fn purpose_fit(
    profile: &UserProfile,
    product: &LoanProduct,
    _dsr: f64,
    config: &ScoringConfig,
    state: &mut RuleState,
) {
    let matched = match profile.loan_purpose {
        LoanPurpose::Living => {
            product.has_tag(ProductTag::SimpleReview)
                || product.has_tag(ProductTag::InstantDeposit)
                || product.has_tag(ProductTag::MobileOnly)
        }
        LoanPurpose::Refinance => {
            product.has_tag(ProductTag::FirstTierBank)
                || product.base_rate < config.low_rate_threshold
        }
        LoanPurpose::Housing => {
            product.has_tag(ProductTag::Housing)
                || product.has_tag(ProductTag::Lease)
                || product.limit_factor >= 2.5
        }
        LoanPurpose::Business => product.has_tag(ProductTag::BusinessOnly),
        LoanPurpose::Unset => return,
    };

    if matched {
        state.add(
            ScoreFactor::PurposeFit,
            10,
            format!("product suits the stated purpose ({:?})", profile.loan_purpose),
        );
    }

    // Refinancers get the simulation nudge whether or not the product fits.
    if profile.loan_purpose == LoanPurpose::Refinance {
        state.tip(
            "Run a repayment simulation to compare the interest saved by refinancing.",
            "open-repayment-simulator",
            "Simulate repayment",
        );
    }
}

fn debt_ratio(
    _profile: &UserProfile,
    product: &LoanProduct,
    resolved_dsr: f64,
    config: &ScoringConfig,
    state: &mut RuleState,
) {
    if product.dsr_regulated {
        if resolved_dsr < config.dsr_safe_band {
            state.add(
                ScoreFactor::DebtRatio,
                5,
                format!("debt ratio {resolved_dsr:.0}% sits inside the regulated safe band"),
            );
        } else if resolved_dsr < config.dsr_warning_band {
            state.add(
                ScoreFactor::DebtRatio,
                -5,
                format!("debt ratio {resolved_dsr:.0}% is in the regulated warning band"),
            );
            state.tip(
                "Your debt ratio sits in the regulated warning band. Trim monthly repayments to get back under 40%.",
                "open-debt-planner",
                "Plan repayments",
            );
        } else {
            state.add(
                ScoreFactor::DebtRatio,
                -15,
                format!("debt ratio {resolved_dsr:.0}% caps regulated lending"),
            );
            state.tip(
                "A debt ratio above 70% caps regulated lending almost entirely. Prioritize paying down existing loans.",
                "open-debt-planner",
                "Reduce debt first",
            );
        }
    } else if resolved_dsr > config.dsr_exempt_threshold {
        state.add(
            ScoreFactor::DebtRatio,
            10,
            "product is exempt from the debt-ratio cap",
        );
    }
}

fn mission_suggestion(
    profile: &UserProfile,
    _product: &LoanProduct,
    resolved_dsr: f64,
    config: &ScoringConfig,
    state: &mut RuleState,
) {
    if profile.credit_score >= config.mission_credit_ceiling {
        return;
    }

    let (headline, sub_missions) = submissions::auto_sub_missions(profile, resolved_dsr, config);
    if sub_missions.is_empty() {
        return;
    }

    state.counterfactuals.push(Counterfactual {
        kind: CounterfactualKind::Mission,
        text: headline,
        action: "open-missions".to_string(),
        label: "Start missions".to_string(),
        sub_missions,
    });
}
