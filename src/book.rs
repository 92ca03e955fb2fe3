//! Passenger book: manifest ingestion and lookup over persisted state
//!
//! Each operation reads the full stored state, computes a new full state
//! and writes it back. Callers are expected to run one operation at a time.

use crate::storage::{StateRepository, StateStore};
use crate::{PaxError, Result};
use manifest::{GroupedData, SearchQuery, SearchResults};

/// Outcome of adding manifest text or an exported blob
#[derive(Debug, Clone)]
pub struct IngestReport {
    /// Groups parsed from this input alone
    pub parsed: GroupedData,

    /// Number of records this input contributed
    pub added_records: usize,

    /// Group names that did not exist before this input
    pub new_groups: Vec<String>,

    /// Full state after the merge, as saved
    pub state: GroupedData,
}

/// Application service wiring parse, merge and search to a state store
pub struct PassengerBook<S: StateStore> {
    repo: StateRepository<S>,
}

impl<S: StateStore> PassengerBook<S> {
    /// Create a book over `store`, keeping state under `key`
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            repo: StateRepository::new(store, key),
        }
    }

    pub fn from_repository(repo: StateRepository<S>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &StateRepository<S> {
        &self.repo
    }

    /// Parse manifest text and merge it into the stored state
    ///
    /// Empty or whitespace-only input is rejected with `EmptyInput` and
    /// leaves the stored state untouched.
    pub fn ingest(&mut self, raw: &str) -> Result<IngestReport> {
        if raw.trim().is_empty() {
            tracing::warn!("Ignoring empty manifest input");
            return Err(PaxError::EmptyInput);
        }

        let parsed = manifest::parse(raw);
        tracing::info!(
            groups = parsed.group_count(),
            records = parsed.record_count(),
            "Parsed manifest text"
        );

        self.merge_and_save(parsed)
    }

    /// Merge a previously exported JSON blob into the stored state
    pub fn import_json(&mut self, json: &str) -> Result<IngestReport> {
        let incoming = GroupedData::from_json(json)?;
        tracing::info!(
            groups = incoming.group_count(),
            records = incoming.record_count(),
            "Importing exported state"
        );

        self.merge_and_save(incoming)
    }

    fn merge_and_save(&mut self, incoming: GroupedData) -> Result<IngestReport> {
        let existing = self.repo.load_or_empty()?;

        let new_groups: Vec<String> = incoming
            .names()
            .filter(|name| !existing.contains(name))
            .map(str::to_string)
            .collect();
        let added_records = incoming.record_count();

        let state = manifest::merge(existing, incoming.clone());
        self.repo.save(&state)?;

        tracing::info!(
            added = added_records,
            new_groups = new_groups.len(),
            total = state.record_count(),
            "State updated"
        );

        Ok(IngestReport {
            parsed: incoming,
            added_records,
            new_groups,
            state,
        })
    }

    /// Everything stored, or `None` when nothing has been stored yet
    pub fn show_all(&self) -> Result<Option<SearchResults>> {
        Ok(self
            .repo
            .load()?
            .map(|data| SearchResults::show_all(&data)))
    }

    /// Search the stored state
    ///
    /// An empty query goes through [`show_all`](Self::show_all), so with no
    /// stored data it quietly returns `None`. A non-empty query with no
    /// stored data fails with `NoData`.
    pub fn search(&self, query: &str) -> Result<Option<SearchResults>> {
        let query = SearchQuery::parse(query);
        if query.is_empty() {
            return self.show_all();
        }

        let data = self.repo.load()?.ok_or(PaxError::NoData)?;
        let results = manifest::search(&data, &query);

        tracing::info!(
            terms = query.terms().len(),
            matches = results.total,
            "Search complete"
        );
        Ok(Some(results))
    }

    /// Stored state, if any
    pub fn records(&self) -> Result<Option<GroupedData>> {
        self.repo.load()
    }

    /// Indented JSON of the stored state, if any
    pub fn export(&self) -> Result<Option<String>> {
        match self.repo.load()? {
            Some(data) => Ok(Some(data.to_json_pretty()?)),
            None => Ok(None),
        }
    }

    /// Discard all stored records
    pub fn clear(&mut self) -> Result<()> {
        tracing::info!(key = %self.repo.key(), "Clearing stored state");
        self.repo.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use manifest::SearchMode;

    fn book() -> PassengerBook<MemoryStore> {
        PassengerBook::new(MemoryStore::new(), "peopleData")
    }

    #[test]
    fn test_empty_input_is_rejected_without_state_change() {
        let mut book = book();
        book.ingest("1 Doe Jane").unwrap();
        let before = book.records().unwrap();

        assert!(matches!(book.ingest("  \n\t "), Err(PaxError::EmptyInput)));
        assert_eq!(book.records().unwrap(), before);
    }

    #[test]
    fn test_ingest_merges_into_existing() {
        let mut book = book();
        let first = book.ingest("0906\n1 Doe Jane 3A").unwrap();
        assert_eq!(first.added_records, 1);
        assert_eq!(first.new_groups, vec!["0906".to_string()]);

        let second = book.ingest("0906\n2 Roe Rick\n0930\n3 Poe Ed").unwrap();
        assert_eq!(second.added_records, 2);
        assert_eq!(second.new_groups, vec!["0930".to_string()]);
        assert_eq!(second.state.record_count(), 3);

        let stored = book.records().unwrap().unwrap();
        assert_eq!(stored, second.state);
        assert_eq!(stored.get("0906").unwrap().len(), 2);
    }

    #[test]
    fn test_ingest_without_records_still_saves() {
        let mut book = book();
        let report = book.ingest("just a heading").unwrap();

        assert_eq!(report.added_records, 0);
        assert!(book.records().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_search_without_data() {
        let book = book();

        // Empty query takes the show-all path and stays quiet
        assert!(book.search("   ").unwrap().is_none());
        assert!(matches!(book.search("smith"), Err(PaxError::NoData)));
    }

    #[test]
    fn test_search_and_show_all() {
        let mut book = book();
        book.ingest("0906\n123 Smith John Y 17B\n124 Doe Jane Y 18C")
            .unwrap();

        let all = book.search("").unwrap().unwrap();
        assert_eq!(all.mode, SearchMode::ShowAll);
        assert_eq!(all.summary(), "2 pessoas cadastradas");

        let found = book.search("SMITH 17b").unwrap().unwrap();
        assert_eq!(found.mode, SearchMode::Filtered);
        assert_eq!(found.total, 1);

        let none = book.search("nobody").unwrap().unwrap();
        assert_eq!(none.total, 0);
        assert!(none.groups.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut book = book();
        book.ingest("1 Doe Jane").unwrap();
        book.clear().unwrap();

        assert!(book.show_all().unwrap().is_none());
        assert!(matches!(book.search("doe"), Err(PaxError::NoData)));
    }

    #[test]
    fn test_export_and_import() {
        let mut source = book();
        source.ingest("0906\n1 Doe Jane 3A\n0930\n2 Roe Rick").unwrap();
        let blob = source.export().unwrap().unwrap();

        let mut target = book();
        target.ingest("0930\n9 Lee Ann").unwrap();
        let report = target.import_json(&blob).unwrap();

        assert_eq!(report.added_records, 2);
        assert_eq!(report.new_groups, vec!["0906".to_string()]);
        let numbers: Vec<_> = report
            .state
            .get("0930")
            .unwrap()
            .records
            .iter()
            .map(|r| r.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["9", "2"]);
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        let mut book = book();
        assert!(matches!(book.import_json("[]"), Err(PaxError::Json(_))));
        assert!(book.records().unwrap().is_none());
    }

    #[test]
    fn test_export_empty() {
        assert!(book().export().unwrap().is_none());
    }
}
