use std::io::Write;

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};

use crate::error::Result;
use crate::format::{Formatter, RunMetadata};
use crate::metrics::MetricRecord;

/// Human-readable output: a header block followed by one table per record.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    with_metadata: bool,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ConsoleFormatter {
    pub fn new(with_metadata: bool) -> Self {
        Self { with_metadata }
    }

    /// Build the table for a record. Labels are left-aligned and values
    /// right-aligned; headers are upper-cased. Only the header is ruled off
    /// from the rows.
    pub fn table(&self, meta: &RunMetadata, record: &MetricRecord) -> Table {
        let [metric, value] = record.headers();
        let metric = match meta.project.as_ref().and_then(|p| p.name.as_deref()) {
            Some(name) => format!("{metric} ({name})"),
            None => metric.to_string(),
        };

        let mut table = Table::new();
        table
            .load_preset(presets::ASCII_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(vec![metric.to_uppercase(), value.to_uppercase()]);

        for (label, value) in record.rows() {
            table.add_row(vec![label.to_string(), value]);
        }

        if let Some(column) = table.column_mut(0) {
            column.set_cell_alignment(CellAlignment::Left);
        }
        if let Some(column) = table.column_mut(1) {
            column.set_cell_alignment(CellAlignment::Right);
        }
        table
    }
}

impl Formatter for ConsoleFormatter {
    fn format_header(&self, meta: &RunMetadata, out: &mut dyn Write) -> Result<()> {
        if !self.with_metadata {
            return Ok(());
        }
        match meta.project.as_ref().map(|p| (p.id, p.name.as_deref())) {
            Some((id, Some(name))) => writeln!(out, "Project: {name} ({id})")?,
            Some((id, None)) => writeln!(out, "Project: {id}")?,
            None => {}
        }
        writeln!(out, "From: {}", meta.from)?;
        writeln!(out, "To: {}", meta.to)?;
        if let Some(project) = meta.project.as_ref().filter(|p| !p.repo_urls.is_empty()) {
            writeln!(out, "Repositories:")?;
            for url in &project.repo_urls {
                writeln!(out, "  - {url}")?;
            }
        }
        Ok(())
    }

    fn format_record(&self, meta: &RunMetadata, record: &MetricRecord, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.table(meta, record))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::render;
    use crate::metrics::{Activity, Overview};
    use crate::project::Project;

    fn meta(project: Option<Project>) -> RunMetadata {
        RunMetadata {
            project,
            from: "2024-04-01".to_string(),
            to: "2024-04-16".to_string(),
        }
    }

    fn overview() -> MetricRecord {
        MetricRecord::Overview(Overview {
            commits_overview: 1581,
            questions_overview: "?".to_string(),
            commits_yoy_overview: 52.66,
            ..Default::default()
        })
    }

    #[test]
    fn test_header_block() {
        let project = Project {
            name: Some("testcontainers-go".to_string()),
            ..Project::new(2296)
        }
        .with_repo_urls(vec!["https://github.com/testcontainers/testcontainers-go".to_string()]);

        let out = render(&ConsoleFormatter::default(), &meta(Some(project)), &[]).unwrap();
        assert_eq!(
            out,
            "Project: testcontainers-go (2296)\n\
             From: 2024-04-01\n\
             To: 2024-04-16\n\
             Repositories:\n  - https://github.com/testcontainers/testcontainers-go\n"
        );
    }

    #[test]
    fn test_header_without_project() {
        let out = render(&ConsoleFormatter::default(), &meta(None), &[]).unwrap();
        assert_eq!(out, "From: 2024-04-01\nTo: 2024-04-16\n");
    }

    #[test]
    fn test_no_metadata_skips_header() {
        let out = render(&ConsoleFormatter::new(false), &meta(Some(Project::new(1))), &[overview()]).unwrap();
        assert!(!out.contains("From:"));
        assert!(out.contains("Commits Overview"));
    }

    #[test]
    fn test_table_rows_and_alignment() {
        let out = render(&ConsoleFormatter::default(), &meta(Some(Project::new(2296))), &[overview()]).unwrap();

        let commits = out.lines().find(|l| l.contains("Commits Overview")).unwrap();
        assert!(commits.trim_end().ends_with("1581 |"), "value not right-aligned: {commits}");
        assert!(commits.starts_with("| Commits Overview"), "label not left-aligned: {commits}");

        let yoy = out.lines().find(|l| l.contains("Commits YoY Overview")).unwrap();
        assert!(yoy.contains("52.66"));

        let questions = out.lines().find(|l| l.contains("| Questions Overview")).unwrap();
        assert!(questions.contains('?'));
    }

    #[test]
    fn test_table_header_upper_cased() {
        let named = Project {
            name: Some("testcontainers-go".to_string()),
            ..Project::new(2296)
        };
        let table = ConsoleFormatter::default()
            .table(&meta(Some(named)), &MetricRecord::Activity(Activity::default()))
            .to_string();
        assert!(table.contains("METRIC (TESTCONTAINERS-GO)"));
        assert!(table.contains("VALUE"));

        let table = ConsoleFormatter::default()
            .table(&meta(None), &MetricRecord::Activity(Activity::default()))
            .to_string();
        assert!(table.contains("METRIC"));
        assert!(!table.contains("METRIC ("));
    }

    #[test]
    fn test_one_table_per_record() {
        let records = vec![MetricRecord::Activity(Activity::default()), overview()];
        let out = render(&ConsoleFormatter::new(false), &meta(None), &records).unwrap();
        assert_eq!(out.matches("VALUE").count(), 2);
        let activity = out.find("Commits Activity Overview").unwrap();
        let commits = out.find("Commits Overview").unwrap();
        assert!(activity < commits);
    }

    #[test]
    fn test_no_rules_between_rows() {
        let table = ConsoleFormatter::default()
            .table(&meta(None), &overview())
            .to_string();
        let rules = table.lines().filter(|l| l.starts_with('+')).count();
        // Top border, header separator, bottom border.
        assert_eq!(rules, 3, "unexpected table layout:\n{table}");
        assert_eq!(table.lines().filter(|l| l.starts_with('|')).count(), 31);
    }
}
