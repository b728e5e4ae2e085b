//! Runs the `rfp-analyzer` binary and checks what lands on stdout

use std::path::Path;
use std::process::{Command, Output};

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use serde_json::Value;

/// One-page PDF using a non-embedded font with no width table
fn pdf_with_font(base_font: &str, text: &str) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });
    let content = Content {
        operations: vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
            Operation::new("Tj", vec![Object::string_literal(text)]),
            Operation::new("ET", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1i64,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

fn run_analyzer(root: &Path, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rfp-analyzer"))
        .args(["--storage-root", root.to_str().unwrap(), "--proposal-id", "p1"])
        .args(extra)
        .env_remove("RFP_CONFIG")
        .env_remove("RFP_OUTPUT")
        .env_remove("RFP_CONTENT_TYPE")
        .env_remove("RFP_WEBHOOK_URL")
        .env_remove("RFP_WEBHOOK_SECRET")
        .output()
        .unwrap()
}

#[cfg(unix)]
#[test]
fn test_stdout_is_only_json_for_unusual_fonts() {
    let dir = tempfile::tempdir().unwrap();
    let pdf = pdf_with_font("OddFont", "Deadline: March 15, 2025");
    std::fs::write(dir.path().join("odd.pdf"), pdf).unwrap();

    let output = run_analyzer(dir.path(), &["--storage-key", "odd.pdf"]);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let result: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["proposalId"], "p1");
    assert!(result["documentLength"].as_u64().is_some());
}

#[test]
fn test_output_file_receives_result() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("call.txt"),
        "Deadline: March 15, 2025. Grant amount up to $500,000.",
    )
    .unwrap();
    let result_path = dir.path().join("result.json");

    let output = run_analyzer(
        dir.path(),
        &["--storage-key", "call.txt", "--output", result_path.to_str().unwrap()],
    );
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let result: Value = serde_json::from_slice(&std::fs::read(&result_path).unwrap()).unwrap();
    assert_eq!(result["proposalId"], "p1");
    assert_eq!(result["deadlines"][0], "March 15, 2025");
}

#[test]
fn test_missing_document_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_analyzer(dir.path(), &["--storage-key", "absent.pdf"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
