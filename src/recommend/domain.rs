use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How the user earns their income. Anything the intake form cannot place
/// lands in `Other` rather than failing the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    Regular,
    BusinessOwner,
    Other,
}

impl EmploymentType {
    fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("regular") => Self::Regular,
            Some("business_owner") => Self::BusinessOwner,
            _ => Self::Other,
        }
    }
}

/// Stated reason for borrowing. Drives the purpose-fit rule and the mission
/// templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanPurpose {
    Living,
    Refinance,
    Housing,
    Business,
    Unset,
}

impl LoanPurpose {
    fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("living") => Self::Living,
            Some("refinance") => Self::Refinance,
            Some("housing") => Self::Housing,
            Some("business") => Self::Business,
            _ => Self::Unset,
        }
    }
}

/// Linked account balance inside the stored persona.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountBalance {
    pub bank: String,
    pub balance: u64,
}

/// Stored persona state: linked accounts, accumulated reward points, and an
/// optionally measured debt ratio.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    #[serde(default)]
    pub accounts: Vec<AccountBalance>,
    #[serde(default)]
    pub points: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsr: Option<f64>,
}

impl Persona {
    pub fn total_assets(&self) -> u64 {
        self.accounts.iter().map(|account| account.balance).sum()
    }
}

/// Validated per-evaluation profile. Built from the stored `userData`
/// payload, then enriched with persona-derived assets and debt ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub income: f64,
    pub credit_score: u16,
    pub employment_type: EmploymentType,
    pub loan_purpose: LoanPurpose,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_assets: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dsr: Option<f64>,
}

/// Validation failure over the stored profile payload. The browser original
/// let unparseable numbers poison downstream math as NaN; here they fail
/// fast instead.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid profile field '{field}': {reason}")]
    InvalidProfile { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ProfileError {
    ProfileError::InvalidProfile { field, reason: reason.into() }
}

/// The intake form stores numbers as strings; accept either representation
/// but reject anything non-numeric.
fn numeric_field(value: &Value, field: &'static str) -> Result<f64, ProfileError> {
    let number = match value.get(field) {
        Some(Value::String(raw)) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(field, format!("'{raw}' is not a number")))?,
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| invalid(field, "out of numeric range"))?,
        Some(other) => return Err(invalid(field, format!("unexpected type {other}"))),
        None => return Err(invalid(field, "missing")),
    };

    if !number.is_finite() {
        return Err(invalid(field, "not finite"));
    }
    Ok(number)
}

fn optional_numeric(value: &Value, field: &'static str) -> Result<Option<f64>, ProfileError> {
    if value.get(field).is_none() || value.get(field) == Some(&Value::Null) {
        return Ok(None);
    }
    numeric_field(value, field).map(Some)
}

impl UserProfile {
    /// Parse the stored `userData` payload into a validated profile.
    pub fn from_stored(value: &Value) -> Result<Self, ProfileError> {
        let income = numeric_field(value, "income")?;
        if income < 0.0 {
            return Err(invalid("income", "must be non-negative"));
        }

        let credit = numeric_field(value, "creditScore")?;
        if !(0.0..=1000.0).contains(&credit) {
            return Err(invalid("creditScore", "must fall within 0..=1000"));
        }

        let employment_type = EmploymentType::from_stored(
            value.get("employmentType").and_then(Value::as_str),
        );
        let loan_purpose =
            LoanPurpose::from_stored(value.get("loanPurpose").and_then(Value::as_str));
        let dsr = optional_numeric(value, "dsr")?;

        Ok(Self {
            income,
            credit_score: credit as u16,
            employment_type,
            loan_purpose,
            total_assets: None,
            dsr,
        })
    }

    /// Fold persona-owned facts into the profile: linked-account assets
    /// always, the measured debt ratio only when the form left it blank.
    pub fn merged_with(mut self, persona: &Persona) -> Self {
        self.total_assets = Some(persona.total_assets());
        if self.dsr.is_none() {
            self.dsr = persona.dsr;
        }
        self
    }
}
