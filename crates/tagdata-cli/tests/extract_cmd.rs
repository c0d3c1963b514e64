//! Integration tests for the extract and batch subcommands, end to end from
//! a generated spec-sheet PDF to the semicolon-delimited CSV.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use predicates::prelude::*;

const PRICE_TABLE: &str = "\
PLN,EUR,BGN,BAM,RON,CZK,RSD,HUF
40,9,19,19,59,280,1400,4800
50,11,24,24,74,350,1750,6000
";

/// Build a one-page PDF with the given text lines, one per line.
fn spec_sheet_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 12.into()]),
        Operation::new("Td", vec![50.into(), 750.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().unwrap(),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let pdf = spec_sheet_pdf(&[
        "ORDER ID: AB-123",
        "COLOUR: NAVY",
        "PLN: 42.00",
        "EAN 5901234123457",
    ]);
    let pdf_path = dir.join("sheet.pdf");
    fs::write(&pdf_path, pdf).unwrap();

    let table_path = dir.join("prices.csv");
    fs::write(&table_path, PRICE_TABLE).unwrap();
    (pdf_path, table_path)
}

fn data_rows(output: &Path) -> Vec<String> {
    let content = fs::read_to_string(output).unwrap();
    let mut lines = content.lines();

    let header = lines.next().unwrap();
    assert!(header.starts_with("Order_ID;STYLE_CODE;"));
    assert_eq!(header.matches(';').count(), 20);

    lines.map(str::to_string).collect()
}

#[test]
fn extract_writes_one_row_from_a_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let (pdf_path, table_path) = write_fixtures(dir.path());
    let output = dir.path().join("out.csv");

    Command::cargo_bin("tagdata")
        .unwrap()
        .arg("extract")
        .arg(&pdf_path)
        .arg("-o")
        .arg(&output)
        .arg("--price-table")
        .arg(&table_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let rows = data_rows(&output);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("AB-123;"));
    assert!(rows[0].contains("5901234123457"));
    // 42 PLN resolves to the 40 PLN reference row.
    assert!(rows[0].contains(";9;19;19;40;59;280;1400;4800;"));
}

#[test]
fn batch_writes_one_row_per_input() {
    let dir = tempfile::tempdir().unwrap();
    let (pdf_path, table_path) = write_fixtures(dir.path());
    let second = dir.path().join("sheet2.pdf");
    fs::copy(&pdf_path, &second).unwrap();
    let output = dir.path().join("out.csv");

    Command::cargo_bin("tagdata")
        .unwrap()
        .arg("batch")
        .arg(&pdf_path)
        .arg(&second)
        .arg("-o")
        .arg(&output)
        .arg("--price-table")
        .arg(&table_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 rows"));

    let rows = data_rows(&output);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
}

#[test]
fn batch_aborts_on_unreadable_input_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let (pdf_path, table_path) = write_fixtures(dir.path());
    let garbage = dir.path().join("garbage.pdf");
    fs::write(&garbage, b"not a pdf").unwrap();
    let output = dir.path().join("out.csv");

    Command::cargo_bin("tagdata")
        .unwrap()
        .arg("batch")
        .arg(&garbage)
        .arg(&pdf_path)
        .arg("-o")
        .arg(&output)
        .arg("--price-table")
        .arg(&table_path)
        .assert()
        .failure();

    assert!(!output.exists());
}

#[test]
fn batch_continue_on_error_skips_unreadable_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let (pdf_path, table_path) = write_fixtures(dir.path());
    let garbage = dir.path().join("garbage.pdf");
    fs::write(&garbage, b"not a pdf").unwrap();
    let output = dir.path().join("out.csv");

    Command::cargo_bin("tagdata")
        .unwrap()
        .arg("batch")
        .arg(&garbage)
        .arg(&pdf_path)
        .arg("-o")
        .arg(&output)
        .arg("--price-table")
        .arg(&table_path)
        .arg("--continue-on-error")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 rows").and(predicate::str::contains("1 skipped")))
        .stderr(predicate::str::contains("Skipping"));

    let rows = data_rows(&output);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("AB-123;"));
}
