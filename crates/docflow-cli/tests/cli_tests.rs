//! Integration tests for CLI input handling and configuration

use docflow_cli::commands::{load_text, read_input};
use docflow_cli::config::OutputFormat;
use docflow_cli::{CliError, Config, Formatter};
use docflow_pipeline::{ExtractionError, Utf8TextSource};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

#[test]
fn test_read_document_from_file() {
    let file = write_file(b"  Invoice No: 42\nTotal: $10.00\n");
    let path = file.path().to_str().unwrap();

    assert_eq!(read_input(path).unwrap().len(), 31);
    let text = load_text(path, &Utf8TextSource::default()).unwrap();
    assert_eq!(text, "Invoice No: 42\nTotal: $10.00");
}

#[test]
fn test_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    let result = read_input(path.to_str().unwrap());
    assert!(matches!(result, Err(CliError::Io(_))));
}

#[test]
fn test_source_errors_surface() {
    let file = write_file(&[0xff, 0xfe, 0xfd]);
    let result = load_text(file.path().to_str().unwrap(), &Utf8TextSource::default());
    assert!(matches!(
        result,
        Err(CliError::Extraction(ExtractionError::InvalidEncoding(_)))
    ));

    let file = write_file(b"   \n");
    let result = load_text(file.path().to_str().unwrap(), &Utf8TextSource::default());
    assert!(matches!(result, Err(CliError::Extraction(ExtractionError::Empty))));
}

#[test]
fn test_configured_pipeline_end_to_end() {
    let config_file = write_file(
        br#"
        [settings]
        format = "quiet"

        [pipeline]
        max_input_bytes = 1024

        [[pipeline.categories]]
        name = "purchase_order"
        keywords = [{ term = "purchase order", weight = 4 }]
        task_type = "approve_purchase"
        "#,
    );
    let doc_file = write_file(b"Purchase Order 5512\nShip 40 chairs");

    let config = Config::load(Some(config_file.path())).unwrap();
    let pipeline = config.build_pipeline().unwrap();
    let text = load_text(doc_file.path().to_str().unwrap(), &config.text_source()).unwrap();

    let formatter = Formatter::new(config.settings.format, false);
    let output = formatter.format_document(&pipeline.process(&text)).unwrap();
    assert_eq!(output, "purchase_order\tapprove_purchase");
    assert_eq!(config.settings.format, OutputFormat::Quiet);
}

#[test]
fn test_error_messages_are_readable() {
    let err = CliError::from(ExtractionError::TooLarge { size: 20, max: 10 });
    assert_eq!(err.to_string(), "Input too large: 20 bytes (max: 10)");
}
