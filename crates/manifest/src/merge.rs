//! Merging freshly parsed groups into previously stored ones

use crate::record::GroupedData;

impl GroupedData {
    /// Append every group of `incoming` onto this mapping
    ///
    /// Existing groups keep their records first; groups only present in
    /// `incoming` are added after the existing ones, in incoming order.
    pub fn merge_from(&mut self, incoming: GroupedData) {
        for group in incoming {
            self.append(&group.name, group.records);
        }
    }
}

/// Merge `incoming` into `existing` and return the combined mapping
pub fn merge(mut existing: GroupedData, incoming: GroupedData) -> GroupedData {
    existing.merge_from(incoming);
    existing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn numbers(data: &GroupedData, group: &str) -> Vec<String> {
        data.get(group)
            .map(|g| g.records.iter().map(|r| r.number.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_merge_appends_to_existing_group() {
        let existing = parse("0906\n1 Doe Jane\n2 Roe Rick");
        let incoming = parse("0906\n3 Poe Ed");

        let merged = merge(existing, incoming);
        assert_eq!(numbers(&merged, "0906"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_merge_adds_new_groups_at_end() {
        let existing = parse("0930\n1 Doe Jane");
        let incoming = parse("0906\n2 Roe Rick\n0930\n3 Poe Ed");

        let merged = merge(existing, incoming);
        let names: Vec<_> = merged.names().collect();
        assert_eq!(names, vec!["0930", "0906"]);
        assert_eq!(numbers(&merged, "0930"), vec!["1", "3"]);
        assert_eq!(numbers(&merged, "0906"), vec!["2"]);
    }

    #[test]
    fn test_merge_leaves_untouched_groups_alone() {
        let existing = parse("0930\n1 Doe Jane\n0906\n2 Roe Rick");
        let before = existing.get("0930").cloned();

        let merged = merge(existing, parse("0906\n3 Poe Ed"));
        assert_eq!(merged.get("0930").cloned(), before);
    }

    #[test]
    fn test_merge_into_empty() {
        let incoming = parse("5 Doe Jane");
        let merged = merge(GroupedData::new(), incoming.clone());
        assert_eq!(merged, incoming);
    }

    #[test]
    fn test_merge_is_associative() {
        let a = parse("0906\n1 A a\n0930\n2 B b");
        let b = parse("0906\n3 C c");
        let c = parse("0930\n4 D d\n0906\n5 E e\n6 F f");

        let left = merge(merge(a.clone(), b.clone()), c.clone());
        let right = merge(a, merge(b, c));

        assert_eq!(left, right);
        assert_eq!(numbers(&left, "0906"), vec!["1", "3", "5", "6"]);
        assert_eq!(numbers(&left, "0930"), vec!["2", "4"]);
    }

    #[test]
    fn test_merge_allows_duplicates() {
        let raw = "0906\n1 Doe Jane";
        let merged = merge(parse(raw), parse(raw));
        assert_eq!(numbers(&merged, "0906"), vec!["1", "1"]);
    }
}
