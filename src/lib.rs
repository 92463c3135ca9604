pub mod attachments;
pub mod dashboard;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod query;
pub mod seed;
pub mod store;
pub mod workspace;

pub use crate::dashboard::{DashboardStats, KeywordCount, MonthlyActivity};
pub use crate::errors::{AppError, AppResult};
pub use crate::models::{
    Company, CompanyDraft, CompanyStatus, ContactDraft, ContactEvent, ContactMethod, FileMeta,
    LeadSource, Task, TaskDraft,
};
pub use crate::pipeline::{PipelineReport, StageMetrics};
pub use crate::query::{CompanySortField, SortDirection, TaskFilter};
pub use crate::seed::StarterData;
pub use crate::store::{MemoryStore, SnapshotStore, SqliteStore};
pub use crate::workspace::Workspace;

/// Installs the default tracing subscriber for embedders that do not bring
/// their own. Safe to call more than once.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
