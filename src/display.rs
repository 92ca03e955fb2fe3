//! Text rendering of passenger groups and search results

use crate::config::DisplayConfig;
use crate::style::{self, paint};
use manifest::{GroupedData, PersonRecord, SearchResults};

/// Renders groups as one block per flight with one line per passenger
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
    expanded: bool,
}

impl Renderer {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            color: config.color,
            expanded: config.expanded,
        }
    }

    /// Uncolored renderer, used for tests and piped output
    pub fn plain(expanded: bool) -> Self {
        Self {
            color: false,
            expanded,
        }
    }

    /// Summary count line followed by the groups
    pub fn render_results(&self, results: &SearchResults) -> String {
        let summary = results.summary();
        let mut out = paint(style::count_line(results.total, &summary), self.color);

        let groups = self.render_groups(&results.groups);
        if !groups.is_empty() {
            out.push_str("\n\n");
            out.push_str(&groups);
        }
        out
    }

    /// Groups separated by blank lines; empty groups are skipped
    pub fn render_groups(&self, groups: &GroupedData) -> String {
        groups
            .iter()
            .filter(|group| !group.is_empty())
            .map(|group| {
                let mut lines = vec![paint(style::group_header(&group.name), self.color)];
                for record in &group.records {
                    self.render_record(&mut lines, record);
                }
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_record(&self, lines: &mut Vec<String>, record: &PersonRecord) {
        lines.push(format!(
            "  {}  {}",
            record.display_name(),
            paint(style::seat(&record.seat), self.color)
        ));

        if !self.expanded {
            return;
        }

        let mut details = vec![
            ("Número:", record.number.as_str()),
            ("Grupo:", record.group.as_str()),
            ("Classe:", record.class.as_str()),
        ];
        if !record.other.is_empty() {
            details.push(("Outros:", record.other.as_str()));
        }

        for (name, value) in details {
            lines.push(format!("    {} {}", paint(style::label(name), self.color), value));
        }
    }
}
