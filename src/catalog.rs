//! Static loan product catalog shipped with the demo. Loaded once and passed
//! by reference into the scoring and recommendation layers.

use serde::{Deserialize, Serialize};

/// Closed vocabulary of product traits the scorer matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductTag {
    FirstTierBank,
    EmployeePreferred,
    MobileOnly,
    SimpleReview,
    BusinessOnly,
    HighLimit,
    InstantDeposit,
    Housing,
    Lease,
}

impl ProductTag {
    pub const fn label(self) -> &'static str {
        match self {
            ProductTag::FirstTierBank => "first-tier bank",
            ProductTag::EmployeePreferred => "employee preferred",
            ProductTag::MobileOnly => "mobile only",
            ProductTag::SimpleReview => "simple review",
            ProductTag::BusinessOnly => "business only",
            ProductTag::HighLimit => "high limit",
            ProductTag::InstantDeposit => "instant deposit",
            ProductTag::Housing => "housing",
            ProductTag::Lease => "lease",
        }
    }
}

/// Immutable loan product definition. `limit_factor` multiplies annual
/// income; `dsr_regulated` marks products under the statutory debt-ratio cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanProduct {
    pub id: String,
    pub bank_name: String,
    pub product_name: String,
    pub base_rate: f64,
    pub limit_factor: f64,
    pub min_credit: u16,
    pub tags: Vec<ProductTag>,
    pub dsr_regulated: bool,
}

impl LoanProduct {
    pub fn has_tag(&self, tag: ProductTag) -> bool {
        self.tags.contains(&tag)
    }
}

fn product(
    id: &str,
    bank_name: &str,
    product_name: &str,
    base_rate: f64,
    limit_factor: f64,
    min_credit: u16,
    tags: &[ProductTag],
    dsr_regulated: bool,
) -> LoanProduct {
    LoanProduct {
        id: id.to_string(),
        bank_name: bank_name.to_string(),
        product_name: product_name.to_string(),
        base_rate,
        limit_factor,
        min_credit,
        tags: tags.to_vec(),
        dsr_regulated,
    }
}

/// The fixed demo catalog. Emergency pocket loans sit outside the statutory
/// debt-ratio cap, everything else is regulated.
pub fn default_catalog() -> Vec<LoanProduct> {
    vec![
        product(
            "p1",
            "Woori Bank",
            "WON Salaried Worker Loan",
            4.5,
            1.2,
            600,
            &[ProductTag::FirstTierBank, ProductTag::EmployeePreferred],
            true,
        ),
        product(
            "p2",
            "Kakao Bank",
            "Emergency Pocket Loan",
            5.1,
            0.8,
            500,
            &[ProductTag::MobileOnly, ProductTag::SimpleReview],
            false,
        ),
        product(
            "p3",
            "Toss Bank",
            "Business Owner Loan",
            5.5,
            1.5,
            550,
            &[ProductTag::BusinessOnly, ProductTag::HighLimit],
            true,
        ),
        product(
            "p4",
            "Hyundai Capital",
            "Personal Credit Loan",
            8.9,
            2.0,
            400,
            &[ProductTag::InstantDeposit, ProductTag::HighLimit],
            true,
        ),
        product(
            "p5",
            "Shinhan Bank",
            "Jeonse Home Loan",
            3.8,
            3.0,
            650,
            &[ProductTag::FirstTierBank, ProductTag::Housing, ProductTag::Lease],
            true,
        ),
    ]
}

/// Catalog lookup by product id.
pub fn find_product<'a>(catalog: &'a [LoanProduct], id: &str) -> Option<&'a LoanProduct> {
    catalog.iter().find(|product| product.id == id)
}
