use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Sales pipeline stage of a company, lead through contract-signed, with the
/// terminal side-branches failed and on-hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanyStatus {
    Lead,
    Contacted,
    NeedsAssessment,
    Proposal,
    Review,
    ContractSigned,
    Failed,
    OnHold,
}

impl CompanyStatus {
    /// Funnel stages in fixed display order. Review and the terminal
    /// side-branches are not funnel stages.
    pub const PIPELINE: [CompanyStatus; 5] = [
        CompanyStatus::Lead,
        CompanyStatus::Contacted,
        CompanyStatus::NeedsAssessment,
        CompanyStatus::Proposal,
        CompanyStatus::ContractSigned,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lead => "lead",
            Self::Contacted => "contacted",
            Self::NeedsAssessment => "needs-assessment",
            Self::Proposal => "proposal",
            Self::Review => "review",
            Self::ContractSigned => "contract-signed",
            Self::Failed => "failed",
            Self::OnHold => "on-hold",
        }
    }

    /// A deal counts as active while it sits between first contact and a
    /// signed contract.
    pub fn is_active_deal(self) -> bool {
        matches!(
            self,
            Self::Contacted | Self::NeedsAssessment | Self::Proposal | Self::Review
        )
    }
}

/// Acquisition channel for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeadSource {
    Web,
    Phone,
    Referral,
    Other,
}

impl LeadSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Phone => "phone",
            Self::Referral => "referral",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactMethod {
    Phone,
    Email,
    Meeting,
    Other,
}

impl ContactMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Meeting => "meeting",
            Self::Other => "other",
        }
    }
}

/// Metadata-only description of an attached file. Content bytes are never
/// retained anywhere in the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMeta {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub status: CompanyStatus,
    pub users: u32,
    /// Smallest-currency-unit amounts.
    pub revenue: u64,
    pub expected_revenue: u64,
    pub source: LeadSource,
    pub needs: String,
    pub memo: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub created_at: NaiveDate,
    pub files: Vec<FileMeta>,
}

/// A logged touch-point with a company. `company_name` is a snapshot taken at
/// logging time and is deliberately never refreshed when the company is
/// renamed; `company_id` is not checked against the companies collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEvent {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub contact_date: DateTime<Utc>,
    pub method: ContactMethod,
    pub content: String,
    pub memo: Option<String>,
    pub assignee: String,
    pub files: Vec<FileMeta>,
}

/// Follow-up task or reminder. `completed` only ever moves false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub company_id: String,
    pub company_name: String,
    pub content: String,
    pub memo: String,
    pub due_date: DateTime<Utc>,
    pub reminder_date: DateTime<Utc>,
    pub assignee: String,
    pub completed: bool,
}

/// Candidate company produced by the form collaborator. The identifier is
/// always assigned by the core; the creation date is assigned when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDraft {
    pub name: String,
    pub status: CompanyStatus,
    pub users: u32,
    pub revenue: u64,
    pub expected_revenue: u64,
    pub source: LeadSource,
    pub needs: String,
    pub memo: String,
    pub contact_name: String,
    pub contact_phone: String,
    pub contact_email: String,
    pub created_at: Option<NaiveDate>,
    pub files: Vec<FileMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDraft {
    pub company_id: String,
    pub company_name: String,
    pub contact_date: DateTime<Utc>,
    pub method: ContactMethod,
    pub content: String,
    pub memo: Option<String>,
    pub assignee: String,
    pub files: Vec<FileMeta>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub company_id: String,
    pub company_name: String,
    pub content: String,
    pub memo: String,
    pub due_date: DateTime<Utc>,
    pub reminder_date: DateTime<Utc>,
    pub assignee: String,
}
