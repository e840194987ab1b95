use taxdoc_analyzer::application::services::{FileIntakeValidator, IntakeError};

const MB: u64 = 1024 * 1024;

#[test]
fn given_allowed_extension_in_any_case_when_validating_then_accepts() {
    let validator = FileIntakeValidator::default();

    assert!(validator.validate("return.pdf", 1024).is_ok());
    assert!(validator.validate("Ledger.XLSX", 1024).is_ok());
    assert!(validator.validate("notes.Docx", 1024).is_ok());
}

#[test]
fn given_empty_filename_when_validating_then_returns_missing_filename() {
    let validator = FileIntakeValidator::default();

    assert_eq!(validator.validate("", 10), Err(IntakeError::MissingFilename));
}

#[test]
fn given_unlisted_extension_when_validating_then_names_extension_and_allow_list() {
    let validator = FileIntakeValidator::default();

    let err = validator.validate("payload.exe", 10).unwrap_err();

    assert_eq!(
        err,
        IntakeError::UnsupportedFileType {
            extension: ".exe".to_string(),
            allowed: ".pdf, .xlsx, .xls, .csv, .doc, .docx".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Unsupported file type: .exe. Allowed types: .pdf, .xlsx, .xls, .csv, .doc, .docx"
    );
}

#[test]
fn given_filename_without_extension_when_validating_then_rejects() {
    let validator = FileIntakeValidator::default();

    assert!(matches!(
        validator.validate("README", 10),
        Err(IntakeError::UnsupportedFileType { .. })
    ));
}

#[test]
fn given_size_at_limit_when_validating_then_accepts() {
    let validator = FileIntakeValidator::new(vec![".pdf".to_string()], 10);

    assert!(validator.validate("a.pdf", 10 * MB).is_ok());
}

#[test]
fn given_size_over_limit_when_validating_then_returns_too_large() {
    let validator = FileIntakeValidator::new(vec![".pdf".to_string()], 10);

    assert_eq!(
        validator.validate("a.pdf", 10 * MB + 1),
        Err(IntakeError::FileTooLarge {
            size: 10 * MB + 1,
            max: 10 * MB,
        })
    );
}

#[test]
fn given_uppercase_configured_extensions_when_validating_then_matching_is_case_insensitive() {
    let validator = FileIntakeValidator::new(vec![".CSV".to_string()], 1);

    assert!(validator.validate("export.csv", 1).is_ok());
}

#[test]
fn given_non_pdf_when_validating_for_analysis_then_only_pdf_is_supported() {
    let validator = FileIntakeValidator::default();

    assert_eq!(
        validator.validate_pdf("ledger.xlsx", 10),
        Err(IntakeError::OnlyPdfSupported)
    );
    assert!(validator.validate_pdf("RETURN.PDF", 10).is_ok());
}

#[test]
fn given_oversized_pdf_when_validating_for_analysis_then_returns_too_large() {
    let validator = FileIntakeValidator::new(vec![".pdf".to_string()], 1);

    assert!(matches!(
        validator.validate_pdf("big.pdf", 2 * MB),
        Err(IntakeError::FileTooLarge { .. })
    ));
}
