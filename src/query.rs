use crate::models::{Company, ContactEvent, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompanySortField {
    Name,
    Status,
    Users,
    ExpectedRevenue,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskFilter {
    All,
    Pending,
    Completed,
}

/// Case-insensitive substring search across name, contact name and contact
/// email, plus a raw substring match on the contact phone. A record matches if
/// any field matches; an empty term matches everything.
pub fn search_companies<'a>(companies: &'a [Company], term: &str) -> Vec<&'a Company> {
    let needle = term.to_lowercase();
    companies
        .iter()
        .filter(|company| {
            company.name.to_lowercase().contains(&needle)
                || company.contact_name.to_lowercase().contains(&needle)
                || company.contact_phone.contains(term)
                || company.contact_email.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn sort_companies(
    companies: &[Company],
    field: CompanySortField,
    direction: SortDirection,
) -> Vec<Company> {
    let mut sorted = companies.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match field {
            CompanySortField::Name => a.name.cmp(&b.name),
            CompanySortField::Status => a.status.as_str().cmp(b.status.as_str()),
            CompanySortField::Users => a.users.cmp(&b.users),
            CompanySortField::ExpectedRevenue => a.expected_revenue.cmp(&b.expected_revenue),
            CompanySortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Chronological contact ordering; the history view defaults to descending.
pub fn sort_contacts(contacts: &[ContactEvent], direction: SortDirection) -> Vec<ContactEvent> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(|a, b| match direction {
        SortDirection::Ascending => a.contact_date.cmp(&b.contact_date),
        SortDirection::Descending => b.contact_date.cmp(&a.contact_date),
    });
    sorted
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            TaskFilter::All => true,
            TaskFilter::Pending => !task.completed,
            TaskFilter::Completed => task.completed,
        })
        .cloned()
        .collect()
}

/// Incomplete tasks sort before completed ones regardless of date; within the
/// same completion state, earliest due date first.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        if a.completed != b.completed {
            return if a.completed {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }
        a.due_date.cmp(&b.due_date)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyStatus, LeadSource};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn company(name: &str, contact_name: &str, phone: &str, email: &str) -> Company {
        Company {
            id: name.to_lowercase(),
            name: name.to_string(),
            status: CompanyStatus::Lead,
            users: 10,
            revenue: 0,
            expected_revenue: 1000,
            source: LeadSource::Web,
            needs: String::new(),
            memo: String::new(),
            contact_name: contact_name.to_string(),
            contact_phone: phone.to_string(),
            contact_email: email.to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            files: Vec::new(),
        }
    }

    fn task(id: &str, completed: bool, due_day: u32) -> Task {
        Task {
            id: id.to_string(),
            company_id: "acme".to_string(),
            company_name: "Acme".to_string(),
            content: format!("task {id}"),
            memo: String::new(),
            due_date: Utc.with_ymd_and_hms(2024, 3, due_day, 9, 0, 0).unwrap(),
            reminder_date: Utc.with_ymd_and_hms(2024, 3, due_day, 8, 0, 0).unwrap(),
            assignee: "sam".to_string(),
            completed,
        }
    }

    #[test]
    fn empty_search_term_returns_everything_in_order() {
        let companies = vec![
            company("Acme", "Kim", "010-1234", "kim@acme.com"),
            company("Globex", "Lee", "010-9876", "lee@globex.com"),
        ];
        let hits = search_companies(&companies, "");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].name, "Acme");
        assert_eq!(hits[1].name, "Globex");
    }

    #[test]
    fn search_matches_any_contact_field_case_insensitively() {
        let companies = vec![
            company("Acme", "Kim", "010-1234", "kim@acme.com"),
            company("Globex", "Lee", "010-9876", "lee@globex.com"),
        ];
        assert_eq!(search_companies(&companies, "GLOBEX").len(), 1);
        assert_eq!(search_companies(&companies, "kim").len(), 1);
        assert_eq!(search_companies(&companies, "9876").len(), 1);
        assert_eq!(search_companies(&companies, "LEE@").len(), 1);
    }

    #[test]
    fn search_with_no_match_returns_empty() {
        let companies = vec![company("Acme", "Kim", "010-1234", "kim@acme.com")];
        assert!(search_companies(&companies, "initech").is_empty());
    }

    #[test]
    fn sort_companies_by_expected_revenue_descending() {
        let mut small = company("Small", "A", "1", "a@a.com");
        small.expected_revenue = 100;
        let mut big = company("Big", "B", "2", "b@b.com");
        big.expected_revenue = 900;

        let sorted = sort_companies(
            &[small, big],
            CompanySortField::ExpectedRevenue,
            SortDirection::Descending,
        );
        assert_eq!(sorted[0].name, "Big");
        assert_eq!(sorted[1].name, "Small");
    }

    #[test]
    fn sort_companies_by_name_ascending() {
        let companies = vec![
            company("Globex", "Lee", "2", "lee@globex.com"),
            company("Acme", "Kim", "1", "kim@acme.com"),
        ];
        let sorted = sort_companies(&companies, CompanySortField::Name, SortDirection::Ascending);
        assert_eq!(sorted[0].name, "Acme");
    }

    #[test]
    fn contacts_sort_most_recent_first() {
        let older = ContactEvent {
            id: "older".to_string(),
            company_id: "acme".to_string(),
            company_name: "Acme".to_string(),
            contact_date: Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
            method: crate::models::ContactMethod::Phone,
            content: String::new(),
            memo: None,
            assignee: "sam".to_string(),
            files: Vec::new(),
        };
        let mut newer = older.clone();
        newer.id = "newer".to_string();
        newer.contact_date = Utc.with_ymd_and_hms(2024, 2, 5, 10, 0, 0).unwrap();

        let sorted = sort_contacts(&[older, newer], SortDirection::Descending);
        assert_eq!(sorted[0].id, "newer");
        assert_eq!(sorted[1].id, "older");
    }

    #[test]
    fn task_filter_modes_split_on_completion() {
        let tasks = vec![task("a", false, 1), task("b", true, 2)];
        assert_eq!(filter_tasks(&tasks, TaskFilter::All).len(), 2);
        assert_eq!(filter_tasks(&tasks, TaskFilter::Pending)[0].id, "a");
        assert_eq!(filter_tasks(&tasks, TaskFilter::Completed)[0].id, "b");
    }

    #[test]
    fn tasks_sort_incomplete_first_then_by_due_date() {
        let mut tasks = vec![
            task("done-early", true, 1),
            task("late", false, 20),
            task("soon", false, 3),
        ];
        sort_tasks(&mut tasks);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["soon", "late", "done-early"]);
    }
}
