//! Dry-run reports
//!
//! `preview` lists the organizations a direct import would write, without
//! contacting the store. `inspect` dumps the key fields of one source file.

use crate::error::ImportResult;
use crate::models::{Document, EntityKind, OrganizationDocument};
use crate::services::file_scanner::{file_name, FileScanner};
use crate::transformers::{self, OrganizationTransformer, Transformer};
use std::fmt::Write;
use std::path::Path;

const NAME_WIDTH: usize = 43;
const TYPE_WIDTH: usize = 16;
const SLUG_WIDTH: usize = 15;

/// Table row for one scanned file
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewRow {
    Organization {
        name: String,
        agency_type: String,
        slug: String,
    },
    Error {
        file: String,
    },
}

/// Transform every organization file and collect one row per file
pub fn preview_rows(input_dir: &Path, scanner: &FileScanner) -> ImportResult<Vec<PreviewRow>> {
    let files = scanner.scan(input_dir)?;

    let rows = files
        .iter()
        .map(|path| match transformers::transform_file(EntityKind::Organization, path) {
            Ok(Document::Organization(org)) => PreviewRow::Organization {
                name: or_placeholder(&org.name, "Unknown"),
                agency_type: or_placeholder(&org.jurisdiction.agency_type, "N/A"),
                slug: org.slug.current,
            },
            Ok(_) | Err(_) => {
                tracing::debug!("Preview: {} did not convert", path.display());
                PreviewRow::Error {
                    file: file_name(path),
                }
            }
        })
        .collect();

    Ok(rows)
}

/// Render rows as a boxed table with a total line
pub fn render_preview(rows: &[PreviewRow]) -> String {
    let border = |left: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{mid}{}{mid}{}{mid}{}{right}",
            "─".repeat(5),
            "─".repeat(NAME_WIDTH + 2),
            "─".repeat(TYPE_WIDTH + 2),
            "─".repeat(SLUG_WIDTH + 2),
        )
    };

    let mut out = String::new();
    let _ = writeln!(out, "Found {} organizations to import:\n", rows.len());
    let _ = writeln!(out, "{}", border("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "│ #   │ {} │ {} │ {} │",
        pad("Name", NAME_WIDTH),
        pad("Type", TYPE_WIDTH),
        pad("Slug", SLUG_WIDTH)
    );
    let _ = writeln!(out, "{}", border("├", "┼", "┤"));

    for (index, row) in rows.iter().enumerate() {
        let (name, agency_type, slug) = match row {
            PreviewRow::Organization {
                name,
                agency_type,
                slug,
            } => (name.clone(), agency_type.as_str(), slug.as_str()),
            PreviewRow::Error { file } => (format!("ERROR: {}", file), "", ""),
        };
        let _ = writeln!(
            out,
            "│ {:>3} │ {} │ {} │ {} │",
            index + 1,
            pad(&name, NAME_WIDTH),
            pad(agency_type, TYPE_WIDTH),
            pad(slug, SLUG_WIDTH)
        );
    }

    let _ = writeln!(out, "{}", border("└", "┴", "┘"));
    let _ = write!(out, "\nTotal: {} organizations", rows.len());
    out
}

/// Key fields of one organization file
pub fn inspect_organization(path: &Path) -> ImportResult<String> {
    let source = transformers::load_source(path)?;
    let root = transformers::required_root(&source, EntityKind::Organization)?;
    let org: OrganizationDocument = OrganizationTransformer::transform(root, &file_name(path));

    let mut out = String::new();
    let _ = writeln!(out, "File: {}", path.display());
    let _ = writeln!(out, "\n--- Parsed Organization Data ---");
    let _ = writeln!(out, "Name: {}", or_placeholder(&org.name, "N/A"));
    let _ = writeln!(out, "Slug: {}", org.slug.current);
    let _ = writeln!(out, "Agency Type: {}", or_placeholder(&org.jurisdiction.agency_type, "N/A"));
    let _ = writeln!(out, "Leader: {}", org.leader_name.as_deref().unwrap_or("N/A"));
    let leader_title = org
        .leader_title_other
        .as_deref()
        .filter(|title| !title.is_empty())
        .or(org.leader_title.as_deref())
        .unwrap_or("N/A");
    let _ = writeln!(out, "Leader Title: {}", leader_title);

    if !org.locations.is_empty() {
        let _ = writeln!(out, "\nLocations:");
        for (i, location) in org.locations.iter().enumerate() {
            let _ = writeln!(out, "  {}. Location ID: {}", i + 1, location.location);
            let _ = writeln!(out, "     Phone: {}", or_placeholder(&location.telephone, "N/A"));
            let _ = writeln!(out, "     URL: {}", or_placeholder(&location.url, "N/A"));
        }
    }

    if !org.social_media.is_empty() {
        let _ = writeln!(out, "\nSocial Media:");
        for (i, social) in org.social_media.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}: {}", i + 1, social.social_channel, social.url);
        }
    }

    Ok(out)
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

/// Truncate to `width` characters, then pad with spaces
fn pad(value: &str, width: usize) -> String {
    let truncated: String = value.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_preview_rows() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("library"),
            "<organization><name>Public Library</name><agencyType>department</agencyType></organization>",
        )
        .unwrap();
        fs::write(dir.path().join("police"), "<organization><name>Police").unwrap();
        fs::write(dir.path().join("zoo"), "<organization><acronym>ZM</acronym></organization>").unwrap();

        let rows = preview_rows(dir.path(), &FileScanner::flat()).unwrap();
        assert_eq!(
            rows,
            vec![
                PreviewRow::Organization {
                    name: "Public Library".to_string(),
                    agency_type: "department".to_string(),
                    slug: "library".to_string(),
                },
                PreviewRow::Error {
                    file: "police".to_string()
                },
                PreviewRow::Organization {
                    name: "Unknown".to_string(),
                    agency_type: "N/A".to_string(),
                    slug: "zoo".to_string(),
                },
            ]
        );

        let table = render_preview(&rows);
        assert!(table.starts_with("Found 3 organizations to import:"));
        assert!(table.contains("│   2 │ ERROR: police"));
        assert!(table.ends_with("Total: 3 organizations"));
    }

    #[test]
    fn test_pad_truncates_by_chars() {
        assert_eq!(pad("Département", 4), "Dépa");
        assert_eq!(pad("ab", 4), "ab  ");
    }

    #[test]
    fn test_inspect_organization() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inspector-general");
        fs::write(
            &path,
            r#"<organization>
                <name>Office of the Inspector General</name>
                <leaderTitle>other</leaderTitle>
                <leaderTitleOther>Inspector General</leaderTitleOther>
                <locations><location>LOC-1</location><telephone>305-555-0000</telephone></locations>
                <socialMedia><socialChannel url="https://x.com/oig">X</socialChannel></socialMedia>
            </organization>"#,
        )
        .unwrap();

        let report = inspect_organization(&path).unwrap();
        assert!(report.contains("Name: Office of the Inspector General"));
        assert!(report.contains("Slug: inspector-general"));
        assert!(report.contains("Agency Type: N/A"));
        assert!(report.contains("Leader: N/A"));
        assert!(report.contains("Leader Title: Inspector General"));
        assert!(report.contains("1. Location ID: LOC-1"));
        assert!(report.contains("URL: N/A"));
        assert!(report.contains("1. X: https://x.com/oig"));
    }

    #[test]
    fn test_inspect_wrong_kind_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("colors");
        fs::write(&path, "<taxonomy><listName>Colors</listName></taxonomy>").unwrap();

        let err = inspect_organization(&path).unwrap_err();
        assert_eq!(err.code(), "STRUCTURE_ERROR");
    }
}
