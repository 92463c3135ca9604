use crate::models::{
    Company, CompanyStatus, ContactEvent, ContactMethod, LeadSource, Task,
};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Default collections handed to the store on first run, filling the role the
/// bundled sample data plays before any real records exist.
#[derive(Debug, Clone, Default)]
pub struct StarterData {
    pub companies: Vec<Company>,
    pub contacts: Vec<ContactEvent>,
    pub tasks: Vec<Task>,
}

pub fn starter_data(now: DateTime<Utc>) -> StarterData {
    let today = now.date_naive();
    let acme_id = Uuid::new_v4().to_string();
    let lakeshore_id = Uuid::new_v4().to_string();
    let harbor_id = Uuid::new_v4().to_string();

    let companies = vec![
        Company {
            id: acme_id.clone(),
            name: "Acme Robotics".to_string(),
            status: CompanyStatus::Proposal,
            users: 50,
            revenue: 120_000,
            expected_revenue: 150_000,
            source: LeadSource::Web,
            needs: "workflow automation, inventory integration".to_string(),
            memo: "Mid-size manufacturer, evaluating two vendors".to_string(),
            contact_name: "Dana Kim".to_string(),
            contact_phone: "555-0134".to_string(),
            contact_email: "dana.kim@acmerobotics.example".to_string(),
            created_at: today - Duration::days(45),
            files: Vec::new(),
        },
        Company {
            id: lakeshore_id.clone(),
            name: "Lakeshore Analytics".to_string(),
            status: CompanyStatus::Review,
            users: 200,
            revenue: 500_000,
            expected_revenue: 600_000,
            source: LeadSource::Referral,
            needs: "reporting automation, data warehouse migration".to_string(),
            memo: "Enterprise account, long sign-off chain".to_string(),
            contact_name: "Miguel Ortega".to_string(),
            contact_phone: "555-0188".to_string(),
            contact_email: "m.ortega@lakeshore.example".to_string(),
            created_at: today - Duration::days(30),
            files: Vec::new(),
        },
        Company {
            id: harbor_id,
            name: "Harborview Clinic".to_string(),
            status: CompanyStatus::Contacted,
            users: 30,
            revenue: 0,
            expected_revenue: 80_000,
            source: LeadSource::Phone,
            needs: "patient scheduling, staff coordination".to_string(),
            memo: "Strict compliance requirements".to_string(),
            contact_name: "Priya Shah".to_string(),
            contact_phone: "555-0102".to_string(),
            contact_email: "pshah@harborview.example".to_string(),
            created_at: today - Duration::days(10),
            files: Vec::new(),
        },
    ];

    let contacts = vec![
        ContactEvent {
            id: Uuid::new_v4().to_string(),
            company_id: acme_id.clone(),
            company_name: "Acme Robotics".to_string(),
            contact_date: now - Duration::days(3),
            method: ContactMethod::Meeting,
            content: "Walked through the proposal draft".to_string(),
            memo: Some("Pricing questions to follow up".to_string()),
            assignee: "Jordan".to_string(),
            files: Vec::new(),
        },
        ContactEvent {
            id: Uuid::new_v4().to_string(),
            company_id: lakeshore_id.clone(),
            company_name: "Lakeshore Analytics".to_string(),
            contact_date: now - Duration::days(8),
            method: ContactMethod::Email,
            content: "Sent the security questionnaire answers".to_string(),
            memo: None,
            assignee: "Jordan".to_string(),
            files: Vec::new(),
        },
    ];

    let tasks = vec![
        Task {
            id: Uuid::new_v4().to_string(),
            company_id: acme_id,
            company_name: "Acme Robotics".to_string(),
            content: "Send revised quote".to_string(),
            memo: "Include the volume discount".to_string(),
            due_date: now + Duration::days(2),
            reminder_date: now + Duration::days(1),
            assignee: "Jordan".to_string(),
            completed: false,
        },
        Task {
            id: Uuid::new_v4().to_string(),
            company_id: lakeshore_id,
            company_name: "Lakeshore Analytics".to_string(),
            content: "Schedule the review call".to_string(),
            memo: String::new(),
            due_date: now + Duration::days(7),
            reminder_date: now + Duration::days(6),
            assignee: "Jordan".to_string(),
            completed: false,
        },
    ];

    StarterData {
        companies,
        contacts,
        tasks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_contacts_and_tasks_reference_seeded_companies() {
        let data = starter_data(Utc::now());
        for contact in &data.contacts {
            assert!(data
                .companies
                .iter()
                .any(|company| company.id == contact.company_id));
        }
        for task in &data.tasks {
            assert!(data
                .companies
                .iter()
                .any(|company| company.id == task.company_id));
        }
        assert!(data.tasks.iter().all(|task| !task.completed));
    }
}
