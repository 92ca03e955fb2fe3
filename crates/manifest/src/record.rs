//! Passenger records and the ordered group mapping they live in

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Group name used for records that appear before any flight code
pub const DEFAULT_GROUP: &str = "Geral";

/// One manifest entry
///
/// Field names on the wire are the ones the stored state has always used
/// (`sobrenome`, `nome`, `classe`, ...), so blobs written by older versions
/// load unchanged. Every field except `number` defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Passenger/record number, the digit run that started the record
    pub number: String,

    /// First detail token, conventionally the surname
    #[serde(rename = "sobrenome", default)]
    pub surname: String,

    /// Second detail token, conventionally the given name
    #[serde(rename = "nome", default)]
    pub given_name: String,

    /// Third detail token (fare class)
    #[serde(rename = "classe", default)]
    pub class: String,

    /// Seat code such as `17B`, empty when none was found
    #[serde(rename = "assento", default)]
    pub seat: String,

    /// Remaining tokens joined with single spaces
    #[serde(rename = "outros", default)]
    pub other: String,

    /// Flight/group code the record was parsed under
    #[serde(rename = "grupo", default)]
    pub group: String,
}

impl PersonRecord {
    /// Create a record with only the number and group set
    pub fn new(number: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            group: group.into(),
            ..Default::default()
        }
    }

    /// Whether a seat was detected for this record
    pub fn has_seat(&self) -> bool {
        !self.seat.is_empty()
    }

    /// "Surname, Given" display name
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.surname, self.given_name)
    }
}

/// A named group of records in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub records: Vec<PersonRecord>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Mapping from group name to its records
///
/// Groups keep the order in which they were first seen, and records keep
/// their order within a group. Group names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedData {
    groups: Vec<Group>,
}

impl GroupedData {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a group by name
    pub fn get(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Whether a group with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get a group by name, creating it at the end if absent
    fn group_mut(&mut self, name: &str) -> &mut Group {
        let index = match self.groups.iter().position(|g| g.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(Group::new(name));
                self.groups.len() - 1
            }
        };
        &mut self.groups[index]
    }

    /// Append one record to a group
    pub fn push(&mut self, name: &str, record: PersonRecord) {
        self.group_mut(name).records.push(record);
    }

    /// Append records to a group, creating the group even if `records` is empty
    pub fn append(&mut self, name: &str, records: Vec<PersonRecord>) {
        self.group_mut(name).records.extend(records);
    }

    /// Iterate over groups in order
    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    /// Group names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// True when there are no groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Encode as the JSON object stored by the persistence layer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Encode as indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Decode a JSON object of `group -> [record]`, keeping document order
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl IntoIterator for GroupedData {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a> IntoIterator for &'a GroupedData {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for GroupedData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.name, &group.records)?;
        }
        map.end()
    }
}

struct GroupedDataVisitor;

impl<'de> Visitor<'de> for GroupedDataVisitor {
    type Value = GroupedData;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of group names to lists of records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut data = GroupedData::new();
        // Repeated keys are concatenated rather than overwritten
        while let Some((name, records)) = access.next_entry::<String, Vec<PersonRecord>>()? {
            data.append(&name, records);
        }
        Ok(data)
    }
}

impl<'de> Deserialize<'de> for GroupedData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GroupedDataVisitor)
    }
}
