use crate::dashboard::{self, DashboardStats, KeywordCount};
use crate::errors::AppResult;
use crate::models::{
    Company, CompanyDraft, CompanyStatus, ContactDraft, ContactEvent, LeadSource, Task, TaskDraft,
};
use crate::pipeline::{pipeline_report, PipelineReport};
use crate::query::{self, CompanySortField, SortDirection, TaskFilter};
use crate::seed::{self, StarterData};
use crate::store::{SnapshotStore, COMPANIES_KEY, CONTACTS_KEY, TASKS_KEY};
use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

/// Owns the three record collections and folds every mutation back into the
/// snapshot store. Single writer, whole-collection writes; there is no
/// transactionality across collections and no cascade between them.
pub struct Workspace<S: SnapshotStore> {
    store: S,
    companies: Vec<Company>,
    contacts: Vec<ContactEvent>,
    tasks: Vec<Task>,
}

impl<S: SnapshotStore> Workspace<S> {
    /// Hydrates from the store, seeding the starter collections on first run
    /// (or whenever a stored snapshot no longer parses).
    pub fn open(store: S) -> AppResult<Self> {
        Self::open_with(store, seed::starter_data(Utc::now()))
    }

    /// Hydrates with explicit default collections instead of the starter data.
    pub fn open_with(store: S, defaults: StarterData) -> AppResult<Self> {
        let companies = store.load(COMPANIES_KEY, defaults.companies)?;
        let contacts = store.load(CONTACTS_KEY, defaults.contacts)?;
        let tasks = store.load(TASKS_KEY, defaults.tasks)?;
        Ok(Self {
            store,
            companies,
            contacts,
            tasks,
        })
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn contacts(&self) -> &[ContactEvent] {
        &self.contacts
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    // ─── Mutations ───────────────────────────────────────────────────────────

    pub fn create_company(&mut self, draft: CompanyDraft) -> AppResult<Company> {
        let company = Company {
            id: Uuid::new_v4().to_string(),
            created_at: draft.created_at.unwrap_or_else(|| Utc::now().date_naive()),
            name: draft.name,
            status: draft.status,
            users: draft.users,
            revenue: draft.revenue,
            expected_revenue: draft.expected_revenue,
            source: draft.source,
            needs: draft.needs,
            memo: draft.memo,
            contact_name: draft.contact_name,
            contact_phone: draft.contact_phone,
            contact_email: draft.contact_email,
            files: draft.files,
        };
        info!(company = %company.name, id = %company.id, "company created");
        self.companies.push(company.clone());
        self.store.save(COMPANIES_KEY, &self.companies)?;
        Ok(company)
    }

    /// Replaces the company matching `id` with the draft, keeping the original
    /// identifier and creation date. Unknown ids are a silent no-op.
    pub fn update_company(&mut self, id: &str, draft: CompanyDraft) -> AppResult<Option<Company>> {
        let Some(existing) = self.companies.iter_mut().find(|company| company.id == id) else {
            debug!(id, "update for unknown company ignored");
            return Ok(None);
        };

        let created_at = existing.created_at;
        *existing = Company {
            id: id.to_string(),
            created_at,
            name: draft.name,
            status: draft.status,
            users: draft.users,
            revenue: draft.revenue,
            expected_revenue: draft.expected_revenue,
            source: draft.source,
            needs: draft.needs,
            memo: draft.memo,
            contact_name: draft.contact_name,
            contact_phone: draft.contact_phone,
            contact_email: draft.contact_email,
            files: draft.files,
        };
        let updated = existing.clone();

        self.store.save(COMPANIES_KEY, &self.companies)?;
        Ok(Some(updated))
    }

    /// Appends a contact event. The draft's company name is kept as-is: it is
    /// a snapshot at logging time, and the company id is not checked against
    /// the companies collection.
    pub fn log_contact(&mut self, draft: ContactDraft) -> AppResult<ContactEvent> {
        let event = ContactEvent {
            id: Uuid::new_v4().to_string(),
            company_id: draft.company_id,
            company_name: draft.company_name,
            contact_date: draft.contact_date,
            method: draft.method,
            content: draft.content,
            memo: draft.memo,
            assignee: draft.assignee,
            files: draft.files,
        };
        self.contacts.push(event.clone());
        self.store.save(CONTACTS_KEY, &self.contacts)?;
        Ok(event)
    }

    pub fn create_task(&mut self, draft: TaskDraft) -> AppResult<Task> {
        let task = Task {
            id: Uuid::new_v4().to_string(),
            company_id: draft.company_id,
            company_name: draft.company_name,
            content: draft.content,
            memo: draft.memo,
            due_date: draft.due_date,
            reminder_date: draft.reminder_date,
            assignee: draft.assignee,
            completed: false,
        };
        self.tasks.push(task.clone());
        self.store.save(TASKS_KEY, &self.tasks)?;
        Ok(task)
    }

    /// Marks a task completed. Idempotent: an already-completed task and an
    /// unknown id both leave the collection untouched and return false.
    pub fn complete_task(&mut self, id: &str) -> AppResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(id, "complete for unknown task ignored");
            return Ok(false);
        };
        if task.completed {
            return Ok(false);
        }
        task.completed = true;
        info!(id, "task completed");
        self.store.save(TASKS_KEY, &self.tasks)?;
        Ok(true)
    }

    // ─── Derived views ───────────────────────────────────────────────────────

    pub fn search_companies(&self, term: &str) -> Vec<&Company> {
        query::search_companies(&self.companies, term)
    }

    pub fn sorted_companies(
        &self,
        field: CompanySortField,
        direction: SortDirection,
    ) -> Vec<Company> {
        query::sort_companies(&self.companies, field, direction)
    }

    /// Contact history, most recent first.
    pub fn recent_contacts(&self) -> Vec<ContactEvent> {
        query::sort_contacts(&self.contacts, SortDirection::Descending)
    }

    pub fn task_view(&self, filter: TaskFilter) -> Vec<Task> {
        let mut view = query::filter_tasks(&self.tasks, filter);
        query::sort_tasks(&mut view);
        view
    }

    pub fn dashboard_stats(&self, now: DateTime<Utc>) -> DashboardStats {
        dashboard::dashboard_stats(&self.companies, &self.contacts, now)
    }

    pub fn pipeline(&self) -> PipelineReport {
        let counts: Vec<(&'static str, u64)> = dashboard::pipeline_by_status(&self.companies)
            .into_iter()
            .map(|(stage, count)| (stage.as_str(), count as u64))
            .collect();
        pipeline_report(&counts)
    }

    pub fn source_distribution(&self) -> Vec<(LeadSource, usize)> {
        dashboard::source_distribution(&self.companies)
    }

    pub fn needs_keywords(&self) -> Vec<KeywordCount> {
        dashboard::needs_keywords(&self.companies)
    }

    /// Companies currently in one of the fixed funnel stages, by stage.
    pub fn pipeline_counts(&self) -> Vec<(CompanyStatus, usize)> {
        dashboard::pipeline_by_status(&self.companies)
    }
}
