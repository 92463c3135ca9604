use crate::models::{Company, CompanyStatus, ContactEvent, LeadSource};
use chrono::{DateTime, Datelike, Utc};
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_companies: usize,
    pub total_expected_revenue: u64,
    pub active_deals: usize,
    pub this_month_contacts: usize,
}

/// Headline numbers for the overview cards. `now` is injected so the
/// current-month contact count stays deterministic under test.
pub fn dashboard_stats(
    companies: &[Company],
    contacts: &[ContactEvent],
    now: DateTime<Utc>,
) -> DashboardStats {
    let total_expected_revenue = companies
        .iter()
        .map(|company| company.expected_revenue)
        .sum();
    let active_deals = companies
        .iter()
        .filter(|company| company.status.is_active_deal())
        .count();
    let this_month_contacts = contacts
        .iter()
        .filter(|contact| {
            contact.contact_date.year() == now.year() && contact.contact_date.month() == now.month()
        })
        .count();

    DashboardStats {
        total_companies: companies.len(),
        total_expected_revenue,
        active_deals,
        this_month_contacts,
    }
}

/// Company counts over the fixed five funnel stages. Stages with no companies
/// contribute zero; the order never varies with the data.
pub fn pipeline_by_status(companies: &[Company]) -> Vec<(CompanyStatus, usize)> {
    CompanyStatus::PIPELINE
        .iter()
        .map(|&stage| {
            let count = companies
                .iter()
                .filter(|company| company.status == stage)
                .count();
            (stage, count)
        })
        .collect()
}

/// Company counts per acquisition channel, in first-seen order.
pub fn source_distribution(companies: &[Company]) -> Vec<(LeadSource, usize)> {
    let mut counts: Vec<(LeadSource, usize)> = Vec::new();
    for company in companies {
        match counts
            .iter_mut()
            .find(|(source, _)| *source == company.source)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((company.source, 1)),
        }
    }
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Naive keyword extraction over the free-text needs fields: concatenate,
/// split on whitespace and commas, strip non-alphanumerics (Unicode letters
/// kept), lowercase, drop one-character tokens, and return the ten most
/// frequent. Ties keep first-seen order. Deliberately not real text analytics;
/// downstream expectations are pinned to this exact tokenizer.
pub fn needs_keywords(companies: &[Company]) -> Vec<KeywordCount> {
    let joined = companies
        .iter()
        .map(|company| company.needs.trim())
        .filter(|needs| !needs.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let mut counts: Vec<KeywordCount> = Vec::new();
    for token in joined.split(|ch: char| ch.is_whitespace() || ch == ',') {
        let cleaned: String = token
            .chars()
            .filter(|ch| ch.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        if cleaned.chars().count() <= 1 {
            continue;
        }
        match counts.iter_mut().find(|entry| entry.word == cleaned) {
            Some(entry) => entry.count += 1,
            None => counts.push(KeywordCount {
                word: cleaned,
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(10);
    counts
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyActivity {
    pub month: String,
    pub new_customers: u32,
    pub contacts: u32,
    pub deals: u32,
}

/// Placeholder six-month activity trend. The numbers are generated, not
/// derived from the contact history; this stays a labeled stub until a real
/// time-series is specified.
pub fn monthly_activity<R: Rng>(rng: &mut R) -> Vec<MonthlyActivity> {
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
        .iter()
        .map(|&month| MonthlyActivity {
            month: month.to_string(),
            new_customers: rng.random_range(5..25),
            contacts: rng.random_range(10..60),
            deals: rng.random_range(2..12),
        })
        .collect()
}
