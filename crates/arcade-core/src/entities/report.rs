//! Report entity - a moderation report against portal content

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::Snowflake;

/// What a report points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    Game,
    Comment,
    Profile,
}

impl ReportTarget {
    /// Database representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Comment => "comment",
            Self::Profile => "profile",
        }
    }

    /// Parse the database representation
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "game" => Some(Self::Game),
            "comment" => Some(Self::Comment),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }
}

impl fmt::Display for ReportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moderation outcome of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStatus {
    #[default]
    Pending,
    /// Content was taken down
    Removed,
    Dismissed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Removed => "removed",
            Self::Dismissed => "dismissed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "removed" => Some(Self::Removed),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Snowflake,
    pub reporter_id: Snowflake,
    pub target: ReportTarget,
    pub target_id: Snowflake,
    pub reason: String,
    pub details: Option<String>,
    pub status: ReportStatus,
    pub resolved_by: Option<Snowflake>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    /// Create a new pending Report
    pub fn new(
        id: Snowflake,
        reporter_id: Snowflake,
        target: ReportTarget,
        target_id: Snowflake,
        reason: String,
        details: Option<String>,
    ) -> Self {
        Self {
            id,
            reporter_id,
            target,
            target_id,
            reason,
            details,
            status: ReportStatus::Pending,
            resolved_by: None,
            resolved_at: None,
            created_at: Utc::now(),
        }
    }

    /// Check if the report still awaits moderation
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ReportStatus::Pending
    }

    /// Resolve the report, stamping the moderator and time
    pub fn resolve(&mut self, status: ReportStatus, moderator_id: Snowflake) {
        self.status = status;
        self.resolved_by = Some(moderator_id);
        self.resolved_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_report_is_pending() {
        let r = Report::new(
            Snowflake::new(1),
            Snowflake::new(100),
            ReportTarget::Comment,
            Snowflake::new(55),
            "spam".to_string(),
            None,
        );
        assert!(r.is_pending());
        assert!(r.resolved_by.is_none());
    }

    #[test]
    fn test_resolve_stamps_moderator() {
        let mut r = Report::new(
            Snowflake::new(1),
            Snowflake::new(100),
            ReportTarget::Game,
            Snowflake::new(10),
            "stolen game".to_string(),
            Some("seen on another portal".to_string()),
        );
        r.resolve(ReportStatus::Removed, Snowflake::new(999));
        assert!(!r.is_pending());
        assert_eq!(r.resolved_by, Some(Snowflake::new(999)));
        assert!(r.resolved_at.is_some());
    }

    #[test]
    fn test_target_round_trip() {
        for t in [ReportTarget::Game, ReportTarget::Comment, ReportTarget::Profile] {
            assert_eq!(ReportTarget::parse(t.as_str()), Some(t));
        }
        assert_eq!(ReportTarget::parse("collection"), None);
    }
}
