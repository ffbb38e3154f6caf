//! Integration tests for the document pipeline

use docflow_domain::{Category, FieldValue};
use docflow_pipeline::{
    DocumentPipeline, ExtractionError, PipelineConfig, PipelineError, PipelineHandle,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const INVOICE: &str =
    "Invoice No: INV-2024-001\nVendor: ABC Corp\nTotal: $1,500.00\nDue Date: 2024-12-31";

const RESUME: &str = "Jane Doe\n\
    Backend Developer\n\
    jane@example.com\n\
    Skilled in Python, Go, and SQL with 5 years of experience\n\
    Education: Bachelor of Science";

const CONFIG: &str = r#"
    max_input_bytes = 4096

    [[categories]]
    name = "purchase_order"
    keywords = ["purchase order", { term = "po number", weight = 3 }]
    task_type = "approve_purchase"
"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_invoice_end_to_end() {
    let doc = DocumentPipeline::builtin().process(INVOICE);

    assert_eq!(doc.classification.category(), &Category::Invoice);
    assert_eq!(doc.fields.get("invoice_no"), Some(&FieldValue::from("INV-2024-001")));
    assert_eq!(doc.fields.get("vendor"), Some(&FieldValue::from("ABC Corp")));
    assert_eq!(doc.fields.get("amount"), Some(&FieldValue::Number(1500.0)));
    assert_eq!(doc.fields.get("currency"), Some(&FieldValue::from("USD")));
    assert_eq!(doc.fields.get("due_date"), Some(&FieldValue::from("2024-12-31")));
    assert_eq!(doc.task.task_type.as_deref(), Some("verify_invoice"));
}

#[test]
fn test_resume_end_to_end() {
    let doc = DocumentPipeline::builtin().process(RESUME);

    assert_eq!(doc.classification.category(), &Category::Resume);
    assert_eq!(doc.fields.get("name"), Some(&FieldValue::from("Jane Doe")));
    assert_eq!(doc.fields.get("email"), Some(&FieldValue::from("jane@example.com")));
    assert_eq!(
        doc.fields.get("skills").and_then(FieldValue::as_list),
        Some(&["Python".to_string(), "Go".to_string(), "SQL".to_string()][..])
    );
    assert_eq!(doc.fields.get("experience_years"), Some(&FieldValue::Integer(5)));
    assert_eq!(doc.fields.get("education"), Some(&FieldValue::from("Bachelor")));
    assert_eq!(
        doc.fields.get("current_role"),
        Some(&FieldValue::from("Backend Developer"))
    );
    assert_eq!(doc.task.task_type.as_deref(), Some("screen_candidate"));
}

#[test]
fn test_processed_document_json_shape() {
    let doc = DocumentPipeline::builtin().process(INVOICE);
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["classification"]["category"], "invoice");
    assert!(json["classification"]["scores"]["legal"].is_number());
    assert_eq!(json["fields"]["invoice_no"], "INV-2024-001");
    assert!(json["fields"]["tax_amount"].is_null());
    assert_eq!(json["task"]["task_type"], "verify_invoice");
    assert_eq!(json["task"]["source_category"], "invoice");
    assert_eq!(json["stats"]["line_count"], 4);
}

#[test]
fn test_config_file_builds_pipeline() {
    let file = write_config(CONFIG);
    let config = PipelineConfig::from_file(file.path()).unwrap();
    let pipeline = config.build().unwrap();

    let doc = pipeline.process("PO Number: 7781\nPurchase order for office chairs");
    assert_eq!(doc.classification.category().as_str(), "purchase_order");
    assert_eq!(doc.task.task_type.as_deref(), Some("approve_purchase"));

    let source = config.text_source();
    let oversized = vec![b'a'; 4097];
    assert!(matches!(
        pipeline.process_bytes(&source, &oversized),
        Err(ExtractionError::TooLarge { size: 4097, max: 4096 })
    ));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = PipelineConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(PipelineError::FileRead(_))));
}

#[test]
fn test_invalid_config_file() {
    let file = write_config("[[categories]]\nname = \"legal\"\nkeywords = [\"x\"]");
    let result = PipelineConfig::from_file(file.path());
    assert!(matches!(result, Err(PipelineError::InvalidConfig(_))));
}

#[test]
fn test_concurrent_readers_during_swap() {
    let handle = Arc::new(PipelineHandle::default());
    let custom = PipelineConfig::from_toml(CONFIG).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let handle = Arc::clone(&handle);
            scope.spawn(move || {
                for _ in 0..50 {
                    let doc = handle.process(INVOICE);
                    assert_eq!(doc.classification.category(), &Category::Invoice);
                }
            });
        }

        scope.spawn(|| {
            for _ in 0..10 {
                handle.swap(custom.build().unwrap());
                handle.swap(DocumentPipeline::builtin());
            }
        });
    });

    let snapshot = handle.snapshot();
    assert_eq!(snapshot.classifier().categories().count(), 3);
}
