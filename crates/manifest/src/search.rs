//! Multi-term substring search over grouped records

use crate::record::{GroupedData, PersonRecord};

/// Lowercased, space-separated search terms
///
/// Every term must match a record for the record to be kept. A term matches
/// when it is a substring of the group name, surname, given name, seat or
/// number, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Build a query from user input
    pub fn parse(query: &str) -> Self {
        let terms = query
            .trim()
            .to_lowercase()
            .split(' ')
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// An empty query means "show everything"
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether `record`, stored under `group_name`, satisfies every term
    pub fn matches(&self, group_name: &str, record: &PersonRecord) -> bool {
        let group = group_name.to_lowercase();
        let fields = [
            record.surname.to_lowercase(),
            record.given_name.to_lowercase(),
            record.seat.to_lowercase(),
            record.number.to_lowercase(),
        ];

        self.terms.iter().all(|term| {
            group.contains(term.as_str()) || fields.iter().any(|field| field.contains(term.as_str()))
        })
    }
}

/// How a result set was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Empty query: every stored record
    ShowAll,
    /// Non-empty query: only matching records, empty groups omitted
    Filtered,
}

/// Output of [`search`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub groups: GroupedData,
    /// Number of records across all groups in `groups`
    pub total: usize,
    pub mode: SearchMode,
}

impl SearchResults {
    /// Every record in `data`, unfiltered
    pub fn show_all(data: &GroupedData) -> Self {
        Self {
            groups: data.clone(),
            total: data.record_count(),
            mode: SearchMode::ShowAll,
        }
    }

    /// Count line shown above the results
    pub fn summary(&self) -> String {
        match self.mode {
            SearchMode::ShowAll => format!("{} pessoas cadastradas", self.total),
            SearchMode::Filtered => format!("{} resultados encontrados", self.total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Filter `data` by `query`
pub fn search(data: &GroupedData, query: &SearchQuery) -> SearchResults {
    if query.is_empty() {
        return SearchResults::show_all(data);
    }

    let mut groups = GroupedData::new();
    for group in data {
        let matched: Vec<PersonRecord> = group
            .records
            .iter()
            .filter(|record| query.matches(&group.name, record))
            .cloned()
            .collect();

        if !matched.is_empty() {
            groups.append(&group.name, matched);
        }
    }

    SearchResults {
        total: groups.record_count(),
        groups,
        mode: SearchMode::Filtered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const MANIFEST: &str = "\
0906
123 Smith John Y 17B
124 Smith Mary Y 17C VIP

0930
200 Doe Jane J 2A
201 Roe Rick Y
";

    fn numbers(results: &SearchResults) -> Vec<String> {
        results
            .groups
            .iter()
            .flat_map(|g| g.records.iter().map(|r| r.number.clone()))
            .collect()
    }

    #[test]
    fn test_query_parsing() {
        let query = SearchQuery::parse("  Smith   17B ");
        assert_eq!(query.terms(), &["smith".to_string(), "17b".to_string()]);
        assert!(SearchQuery::parse("   ").is_empty());
        assert!(SearchQuery::parse("").is_empty());
    }

    #[test]
    fn test_empty_query_shows_all() {
        let data = parse(MANIFEST);
        let results = search(&data, &SearchQuery::parse(" "));

        assert_eq!(results.mode, SearchMode::ShowAll);
        assert_eq!(results.total, 4);
        assert_eq!(results.groups, data);
        assert_eq!(results.summary(), "4 pessoas cadastradas");
    }

    #[test]
    fn test_single_term_matches_any_field() {
        let data = parse(MANIFEST);

        assert_eq!(numbers(&search(&data, &SearchQuery::parse("smith"))), vec!["123", "124"]);
        assert_eq!(numbers(&search(&data, &SearchQuery::parse("JANE"))), vec!["200"]);
        assert_eq!(numbers(&search(&data, &SearchQuery::parse("2a"))), vec!["200"]);
        assert_eq!(numbers(&search(&data, &SearchQuery::parse("201"))), vec!["201"]);
        assert_eq!(numbers(&search(&data, &SearchQuery::parse("0930"))), vec!["200", "201"]);
    }

    #[test]
    fn test_class_and_other_are_not_searched() {
        let data = parse(MANIFEST);
        assert!(search(&data, &SearchQuery::parse("vip")).is_empty());
        // 200 has class "J" but only matches through its given name
        assert_eq!(numbers(&search(&data, &SearchQuery::parse("j"))), vec!["123", "200"]);
    }

    #[test]
    fn test_terms_are_conjunctive() {
        let data = parse(MANIFEST);
        let results = search(&data, &SearchQuery::parse("0906 17c"));

        assert_eq!(numbers(&results), vec!["124"]);
        assert_eq!(results.summary(), "1 resultados encontrados");
    }

    #[test]
    fn test_conjunction_is_intersection() {
        let data = parse(MANIFEST);
        let both = numbers(&search(&data, &SearchQuery::parse("smith 12")));
        let first = numbers(&search(&data, &SearchQuery::parse("smith")));
        let second = numbers(&search(&data, &SearchQuery::parse("12")));

        let intersection: Vec<_> = first.into_iter().filter(|n| second.contains(n)).collect();
        assert_eq!(both, intersection);
    }

    #[test]
    fn test_unmatched_query_omits_all_groups() {
        let data = parse(MANIFEST);
        let results = search(&data, &SearchQuery::parse("nobody"));

        assert_eq!(results.total, 0);
        assert!(results.groups.is_empty());
        assert_eq!(results.summary(), "0 resultados encontrados");
    }

    #[test]
    fn test_groups_without_matches_are_omitted() {
        let data = parse(MANIFEST);
        let results = search(&data, &SearchQuery::parse("doe"));

        let names: Vec<_> = results.groups.names().collect();
        assert_eq!(names, vec!["0930"]);
    }

    #[test]
    fn test_matches_on_storage_key_not_record_field() {
        let mut data = parse("5 Doe Jane");
        // Same record filed under a different key
        let record = data.get("Geral").unwrap().records[0].clone();
        data.push("0999", record);

        let results = search(&data, &SearchQuery::parse("0999"));
        assert_eq!(results.total, 1);
        assert!(results.groups.contains("0999"));
    }
}
