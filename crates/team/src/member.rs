use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockcast_core::RecordId;
use stockcast_engine::{Queryable, SortValue, Summarize};

/// Team member identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamMemberId(pub RecordId);

impl TeamMemberId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for TeamMemberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Workspace role, from most to least privileged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Manager,
    Analyst,
    Viewer,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Admin => "admin",
            MemberRole::Manager => "manager",
            MemberRole::Analyst => "analyst",
            MemberRole::Viewer => "viewer",
        }
    }
}

/// Membership state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Invited,
    Deactivated,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Invited => "invited",
            MemberStatus::Deactivated => "deactivated",
        }
    }
}

/// A workspace member as the team view displays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: TeamMemberId,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
    /// `None` until the member signs in for the first time.
    pub last_active_at: Option<DateTime<Utc>>,
}

/// Categorical fields the team view can filter on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MemberFilter {
    Role,
    Status,
}

/// Sortable fields of the team view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MemberSort {
    #[default]
    Name,
    Email,
    LastActive,
}

impl Queryable for TeamMember {
    type FilterField = MemberFilter;
    type SortKey = MemberSort;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }

    fn filter_value(&self, field: MemberFilter) -> &str {
        match field {
            MemberFilter::Role => self.role.as_str(),
            MemberFilter::Status => self.status.as_str(),
        }
    }

    fn sort_value(&self, key: MemberSort) -> SortValue<'_> {
        match key {
            MemberSort::Name => SortValue::Text(&self.name),
            MemberSort::Email => SortValue::Text(&self.email),
            // Never-signed-in members sort after everyone else.
            MemberSort::LastActive => {
                SortValue::MaybeInt(self.last_active_at.map(|d| d.timestamp()))
            }
        }
    }
}

/// At-a-glance team composition, derived from the full collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub total_count: usize,
    pub active_count: usize,
    pub admin_count: usize,
    pub invited_count: usize,
}

impl Summarize for TeamMember {
    type Summary = TeamSummary;

    fn summarize(records: &[Self]) -> TeamSummary {
        TeamSummary {
            total_count: records.len(),
            active_count: records
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            admin_count: records
                .iter()
                .filter(|m| m.role == MemberRole::Admin)
                .count(),
            invited_count: records
                .iter()
                .filter(|m| m.status == MemberStatus::Invited)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use stockcast_engine::{sort_records, SortDirection};

    fn member(
        name: &str,
        email: &str,
        role: MemberRole,
        status: MemberStatus,
        last_active_day: Option<u32>,
    ) -> TeamMember {
        TeamMember {
            id: TeamMemberId::new(RecordId::new()),
            name: name.to_string(),
            email: email.to_string(),
            role,
            status,
            last_active_at: last_active_day
                .map(|day| Utc.with_ymd_and_hms(2024, 6, day, 16, 0, 0).unwrap()),
        }
    }

    #[test]
    fn summary_counts_roles_and_statuses() {
        let records = vec![
            member("Ada", "ada@example.com", MemberRole::Admin, MemberStatus::Active, Some(10)),
            member("Bo", "bo@example.com", MemberRole::Analyst, MemberStatus::Active, Some(9)),
            member("Cy", "cy@example.com", MemberRole::Viewer, MemberStatus::Invited, None),
            member("Di", "di@example.com", MemberRole::Manager, MemberStatus::Deactivated, Some(2)),
        ];

        let summary = TeamMember::summarize(&records);
        assert_eq!(summary.total_count, 4);
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.admin_count, 1);
        assert_eq!(summary.invited_count, 1);
    }

    #[test]
    fn members_without_activity_sort_last() {
        let records = vec![
            member("Cy", "cy@example.com", MemberRole::Viewer, MemberStatus::Invited, None),
            member("Ada", "ada@example.com", MemberRole::Admin, MemberStatus::Active, Some(10)),
            member("Bo", "bo@example.com", MemberRole::Analyst, MemberStatus::Active, Some(9)),
        ];

        let sorted = sort_records(&records, MemberSort::LastActive, SortDirection::Ascending);
        let names: Vec<_> = sorted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Bo", "Ada", "Cy"]);
    }
}
