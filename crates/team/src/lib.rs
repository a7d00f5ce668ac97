//! Team list view: record schema and summary metrics.

pub mod member;

pub use member::{
    MemberFilter, MemberRole, MemberSort, MemberStatus, TeamMember, TeamMemberId, TeamSummary,
};
