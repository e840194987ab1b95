use chrono::{TimeZone, Utc};

use taxdoc_analyzer::domain::{
    AnalysisJob, AnalysisJobStatus, Document, DocumentStatus, JobHandle, StoragePath,
    ValidationResult, file_extension, generate_stored_filename,
};

#[test]
fn given_original_name_when_generating_stored_filename_then_has_timestamp_suffix_and_extension() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 5, 7).unwrap();

    let stored = generate_stored_filename("Tax Return 2023.PDF", now);

    assert!(stored.starts_with("2024-03-15_09-05-07_"), "got {stored}");
    assert!(stored.ends_with(".PDF"), "got {stored}");
    let suffix = &stored["2024-03-15_09-05-07_".len()..stored.len() - ".PDF".len()];
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn given_same_name_twice_when_generating_stored_filename_then_names_differ() {
    let now = Utc::now();

    assert_ne!(
        generate_stored_filename("a.pdf", now),
        generate_stored_filename("a.pdf", now)
    );
}

#[test]
fn given_name_without_extension_when_generating_stored_filename_then_has_no_dot_suffix() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let stored = generate_stored_filename("README", now);

    assert_eq!(stored.len(), "2024-01-01_00-00-00_".len() + 8);
}

#[test]
fn given_filenames_when_extracting_extension_then_returns_last_component() {
    assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
    assert_eq!(file_extension("report.pdf"), Some("pdf"));
    assert_eq!(file_extension("README"), None);
}

#[test]
fn given_owner_category_and_name_when_building_storage_path_then_joins_with_slashes() {
    let path = StoragePath::new("user-1", "balance-sheet", "2024-01-01_00-00-00_abcd1234.pdf");

    assert_eq!(
        path.as_str(),
        "user-1/balance-sheet/2024-01-01_00-00-00_abcd1234.pdf"
    );
}

#[test]
fn given_new_document_when_created_then_is_uploaded_with_derived_path() {
    let document = Document::new(
        "user-1".to_string(),
        "debt-schedule".to_string(),
        "stored.pdf".to_string(),
        "original.pdf".to_string(),
        42,
        Some("application/pdf".to_string()),
    );

    assert_eq!(document.status, DocumentStatus::Uploaded);
    assert_eq!(document.storage_path.as_str(), "user-1/debt-schedule/stored.pdf");
    assert_eq!(document.created_at, document.updated_at);
}

#[test]
fn given_status_strings_when_parsing_then_round_trips_known_values() {
    for status in [
        DocumentStatus::Uploaded,
        DocumentStatus::Processing,
        DocumentStatus::Completed,
        DocumentStatus::Failed,
    ] {
        assert_eq!(status.as_str().parse::<DocumentStatus>(), Ok(status));
    }
    assert!("archived".parse::<DocumentStatus>().is_err());
}

#[test]
fn given_pending_job_when_recording_polls_then_times_out_at_ceiling() {
    let mut job = AnalysisJob::new(JobHandle::new("https://example/operations/1"));

    for _ in 0..29 {
        assert!(job.record_pending_poll(30));
    }
    assert_eq!(job.status, AnalysisJobStatus::Pending);
    assert!(!job.status.is_terminal());

    assert!(!job.record_pending_poll(30));
    assert_eq!(job.attempts, 30);
    assert_eq!(job.status, AnalysisJobStatus::TimedOut);
    assert!(job.status.is_terminal());
}

#[test]
fn given_upstream_error_when_building_service_error_then_keeps_default_verdict() {
    let result = ValidationResult::service_error("connection reset");

    assert!(!result.is_valid);
    assert_eq!(result.form_type, "Unknown");
    assert_eq!(result.confidence, 0);
    assert_eq!(result.explanation, "Error during verification: connection reset");
    assert_eq!(
        result.issues,
        "Unable to verify document due to service error"
    );
}

#[test]
fn given_validation_result_when_serializing_then_uses_snake_case_fields() {
    let json = serde_json::to_value(ValidationResult::default()).unwrap();

    assert_eq!(json["is_valid"], false);
    assert_eq!(json["form_type"], "Unknown");
    assert_eq!(json["confidence"], 0);
}
