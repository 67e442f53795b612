use std::sync::RwLock;

use crate::error::PipelineError;
use crate::pipeline::{ReportRecord, ReportStore};

/// In-process report history
#[derive(Debug, Default)]
pub struct MemoryReportStore {
    records: RwLock<Vec<ReportRecord>>,
}

impl MemoryReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportStore for MemoryReportStore {
    fn latest_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, PipelineError> {
        let records = self
            .records
            .read()
            .map_err(|_| PipelineError::Store("lock poisoned".into()))?;

        let mut matching: Vec<ReportRecord> = records
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        // Stable sort keeps insertion order for equal timestamps; reverse
        // that so the later insert wins.
        matching.reverse();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        Ok(matching)
    }

    fn insert(&self, record: ReportRecord) -> Result<(), PipelineError> {
        self.records
            .write()
            .map_err(|_| PipelineError::Store("lock poisoned".into()))?
            .push(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(user: &str, day: u32, summary: &str) -> ReportRecord {
        ReportRecord {
            user_id: user.to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 3, day, 9, 0, 0).unwrap(),
            summary: summary.to_string(),
            comparison: None,
            diet_plan: String::new(),
        }
    }

    #[test]
    fn test_newest_first_per_user() {
        let store = MemoryReportStore::new();
        store.insert(record("alice", 1, "first")).unwrap();
        store.insert(record("bob", 5, "other")).unwrap();
        store.insert(record("alice", 3, "third")).unwrap();
        store.insert(record("alice", 2, "second")).unwrap();

        let latest = store.latest_for_user("alice", 2).unwrap();
        let summaries: Vec<_> = latest.iter().map(|r| r.summary.as_str()).collect();
        assert_eq!(summaries, vec!["third", "second"]);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_same_timestamp_later_insert_first() {
        let store = MemoryReportStore::new();
        store.insert(record("alice", 1, "a")).unwrap();
        store.insert(record("alice", 1, "b")).unwrap();

        let latest = store.latest_for_user("alice", 1).unwrap();
        assert_eq!(latest[0].summary, "b");
    }

    #[test]
    fn test_unknown_user_empty() {
        let store = MemoryReportStore::new();
        assert!(store.is_empty());
        assert!(store.latest_for_user("nobody", 10).unwrap().is_empty());
    }
}
