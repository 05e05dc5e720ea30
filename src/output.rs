use crate::catalog::{Catalog, InterfaceEntry};
use crate::errors::Result;
use crate::scan::ScanReport;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    #[default]
    Text,
}

#[derive(Debug, Serialize)]
struct Listing<'a> {
    report: &'a ScanReport,
    interfaces: Vec<&'a InterfaceEntry>,
}

/// Write the catalog listing as JSON for the external UI layer.
pub fn write_catalog_json<W: Write>(
    writer: &mut W,
    catalog: &Catalog,
    report: &ScanReport,
) -> Result<()> {
    let listing = Listing {
        report,
        interfaces: catalog.list().collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &listing)?;
    writeln!(writer)?;
    Ok(())
}

/// Write the catalog listing as human-readable text.
pub fn write_catalog_text<W: Write>(
    writer: &mut W,
    catalog: &Catalog,
    report: &ScanReport,
) -> Result<()> {
    writeln!(writer, "Go Interface Catalog")?;
    writeln!(writer, "====================")?;
    writeln!(
        writer,
        "Scanned:    {} files ({} skipped)",
        report.files_scanned, report.files_skipped
    )?;
    writeln!(
        writer,
        "Interfaces: {} ({} project, {} stdlib)",
        catalog.len(),
        catalog.project_len(),
        catalog.stdlib_len()
    )?;
    writeln!(writer)?;

    for entry in catalog.list() {
        let origin = if entry.stdlib { "stdlib" } else { "project" };
        writeln!(
            writer,
            "{:<30} {:<8} {}",
            entry.full_name,
            origin,
            entry.source_path.display()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InterfaceEntry;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.append(InterfaceEntry::new(
            "pkg",
            "Saver",
            "/proj/pkg/saver.go",
            false,
            Some("example.com/mod/pkg".to_string()),
        ));
        catalog.append(InterfaceEntry::new(
            "io",
            "Writer",
            "/goroot/src/io/io.go",
            true,
            None,
        ));
        catalog
    }

    #[test]
    fn json_listing_includes_fields() {
        let catalog = sample_catalog();
        let report = ScanReport::default();
        let mut buf = Vec::new();
        write_catalog_json(&mut buf, &catalog, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"interface_name\": \"Saver\""));
        assert!(text.contains("\"import_path\": \"example.com/mod/pkg\""));
        assert!(text.contains("\"full_name\": \"io.Writer\""));
    }

    #[test]
    fn json_omits_absent_import_path() {
        let catalog = sample_catalog();
        let report = ScanReport::default();
        let mut buf = Vec::new();
        write_catalog_json(&mut buf, &catalog, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let stdlib_entry = &value["interfaces"][1];
        assert!(stdlib_entry.get("import_path").is_none());
    }

    #[test]
    fn text_listing_orders_project_first() {
        let catalog = sample_catalog();
        let report = ScanReport::default();
        let mut buf = Vec::new();
        write_catalog_text(&mut buf, &catalog, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let saver = text.find("pkg.Saver").unwrap();
        let writer = text.find("io.Writer").unwrap();
        assert!(saver < writer);
    }
}
