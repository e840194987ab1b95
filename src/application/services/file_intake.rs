use crate::domain::file_extension;

pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 6] =
    [".pdf", ".xlsx", ".xls", ".csv", ".doc", ".docx"];
pub const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("No filename provided")]
    MissingFilename,
    #[error("Unsupported file type: {extension}. Allowed types: {allowed}")]
    UnsupportedFileType { extension: String, allowed: String },
    #[error("File size ({size} bytes) exceeds maximum allowed size ({max} bytes)")]
    FileTooLarge { size: u64, max: u64 },
    #[error("Only PDF files are supported")]
    OnlyPdfSupported,
}

/// Local checks run on an upload before it is stored or sent anywhere.
#[derive(Debug, Clone)]
pub struct FileIntakeValidator {
    allowed_extensions: Vec<String>,
    max_size_bytes: u64,
}

impl FileIntakeValidator {
    pub fn new(allowed_extensions: Vec<String>, max_size_mb: u64) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|ext| ext.to_lowercase())
                .collect(),
            max_size_bytes: max_size_mb * 1024 * 1024,
        }
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    pub fn validate(&self, filename: &str, size_bytes: u64) -> Result<(), IntakeError> {
        self.validate_type(filename)?;
        self.validate_size(size_bytes)
    }

    pub fn validate_type(&self, filename: &str) -> Result<(), IntakeError> {
        if filename.is_empty() {
            return Err(IntakeError::MissingFilename);
        }

        let lowered = filename.to_lowercase();
        let extension = file_extension(&lowered)
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        if !self.allowed_extensions.contains(&extension) {
            return Err(IntakeError::UnsupportedFileType {
                extension,
                allowed: self.allowed_extensions.join(", "),
            });
        }

        Ok(())
    }

    pub fn validate_size(&self, size_bytes: u64) -> Result<(), IntakeError> {
        if size_bytes > self.max_size_bytes {
            return Err(IntakeError::FileTooLarge {
                size: size_bytes,
                max: self.max_size_bytes,
            });
        }
        Ok(())
    }

    /// Analysis only accepts PDFs, independent of the upload allow-list.
    pub fn validate_pdf(&self, filename: &str, size_bytes: u64) -> Result<(), IntakeError> {
        if filename.is_empty() {
            return Err(IntakeError::MissingFilename);
        }
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(IntakeError::OnlyPdfSupported);
        }
        self.validate_size(size_bytes)
    }
}

impl Default for FileIntakeValidator {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            DEFAULT_MAX_FILE_SIZE_MB,
        )
    }
}
