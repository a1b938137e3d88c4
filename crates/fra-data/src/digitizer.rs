//! Document digitization wizard
//!
//! ```text
//! Upload ──begin_upload──► Processing ──finish_processing──► Review ──complete──► Complete
//!   ▲                                                                               │
//!   └──────────────────────────────── reset (from any step) ────────────────────────┘
//! ```
//!
//! Extraction itself is mocked: the backend waits, then hands back
//! [`ExtractedRecord::template`] for review.

use crate::error::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Largest accepted upload, per file
pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Rejection message when no uploaded file is usable
pub const INVALID_UPLOAD_MESSAGE: &str = "Please upload valid image or PDF files";

/// Placeholder text until a real OCR service is wired in
pub const NO_TEXT_EXTRACTED: &str = "No text extracted - integrate with OCR service";

/// Where the wizard is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Waiting for files
    #[default]
    Upload,
    /// Extraction running
    Processing,
    /// Extracted fields shown for correction
    Review,
    /// Record handed off
    Complete,
}

impl WizardStep {
    /// Lowercase step name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Processing => "processing",
            Self::Review => "review",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of an uploaded file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    /// File name
    pub name: String,
    /// MIME type reported by the client
    pub mime: String,
    /// Size in bytes
    pub size: u64,
}

impl UploadedFile {
    /// Create file metadata
    #[must_use]
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Image or PDF within the size limit
    #[must_use]
    pub fn is_acceptable(&self) -> bool {
        let mime = self.mime.trim().to_ascii_lowercase();
        (mime.starts_with("image/") || mime == "application/pdf") && self.size <= MAX_FILE_BYTES
    }

    /// Size in megabytes with one decimal, e.g. `2.4 MB`
    #[must_use]
    pub fn size_label(&self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let mb = self.size as f64 / 1024.0 / 1024.0;
        format!("{mb:.1} MB")
    }
}

/// Keep the acceptable files
///
/// # Errors
///
/// Returns [`DataError::InvalidUpload`] if none is acceptable.
pub fn accept_files(files: Vec<UploadedFile>) -> DataResult<Vec<UploadedFile>> {
    let total = files.len();
    let accepted: Vec<UploadedFile> = files.into_iter().filter(UploadedFile::is_acceptable).collect();
    if accepted.is_empty() {
        warn!(total, "upload rejected, no image or PDF within limits");
        return Err(DataError::InvalidUpload(INVALID_UPLOAD_MESSAGE.to_string()));
    }
    if accepted.len() < total {
        debug!(total, accepted = accepted.len(), "skipped unsupported files");
    }
    Ok(accepted)
}

/// Extracted position, kept as entered text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedCoordinates {
    /// Latitude text
    pub latitude: String,
    /// Longitude text
    pub longitude: String,
}

/// Fields read from a claim form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(missing_docs)]
pub struct ExtractedRecord {
    pub claim_id: String,
    pub claim_type: String,
    pub village: String,
    pub district: String,
    pub state: String,
    pub pattal_holder: String,
    pub area_in_acres: String,
    pub survey_number: String,
    pub application_date: String,
    pub status: String,
    pub gram_sabha_resolution: String,
    pub forest_division: String,
    pub land_type: String,
    pub coordinates: ExtractedCoordinates,
    pub document_quality: String,
    /// Percent, `0..=100`
    pub confidence: u8,
    pub extracted_text: String,
}

impl ExtractedRecord {
    /// Empty extraction returned by the mock OCR
    #[must_use]
    pub fn template() -> Self {
        Self {
            claim_id: String::new(),
            claim_type: String::new(),
            village: String::new(),
            district: String::new(),
            state: String::new(),
            pattal_holder: String::new(),
            area_in_acres: String::new(),
            survey_number: String::new(),
            application_date: String::new(),
            status: String::new(),
            gram_sabha_resolution: String::new(),
            forest_division: String::new(),
            land_type: String::new(),
            coordinates: ExtractedCoordinates::default(),
            document_quality: "Good".into(),
            confidence: 0,
            extracted_text: NO_TEXT_EXTRACTED.into(),
        }
    }

    /// Confidence band shown on the review badge
    #[inline]
    #[must_use]
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from(self.confidence)
    }

    fn field_mut(&mut self, field: &str) -> Option<&mut String> {
        Some(match field {
            "claimId" => &mut self.claim_id,
            "claimType" => &mut self.claim_type,
            "village" => &mut self.village,
            "district" => &mut self.district,
            "state" => &mut self.state,
            "pattalHolder" => &mut self.pattal_holder,
            "areaInAcres" => &mut self.area_in_acres,
            "surveyNumber" => &mut self.survey_number,
            "applicationDate" => &mut self.application_date,
            "status" => &mut self.status,
            "gramSabhaResolution" => &mut self.gram_sabha_resolution,
            "forestDivision" => &mut self.forest_division,
            "landType" => &mut self.land_type,
            "coordinates.latitude" => &mut self.coordinates.latitude,
            "coordinates.longitude" => &mut self.coordinates.longitude,
            _ => return None,
        })
    }

    /// Overwrite an editable field by its wire name
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownField`] for anything but the form fields.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> DataResult<()> {
        let slot = self
            .field_mut(field)
            .ok_or_else(|| DataError::UnknownField(field.to_string()))?;
        *slot = value.into();
        Ok(())
    }
}

/// Extraction confidence bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    /// 90 and above
    High,
    /// 70 to 89
    Medium,
    /// Below 70
    Low,
}

impl From<u8> for ConfidenceBand {
    fn from(confidence: u8) -> Self {
        match confidence {
            90.. => Self::High,
            70..=89 => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// State of one digitization session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DigitizationWizard {
    step: WizardStep,
    files: Vec<UploadedFile>,
    extracted: Option<ExtractedRecord>,
    editing: bool,
}

impl DigitizationWizard {
    /// Fresh wizard on the upload step
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step
    #[inline]
    #[must_use]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Accepted files of this session
    #[inline]
    #[must_use]
    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    /// Extraction under review
    #[inline]
    #[must_use]
    pub fn extracted(&self) -> Option<&ExtractedRecord> {
        self.extracted.as_ref()
    }

    /// Whether fields are editable
    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    fn expect_step(&self, step: WizardStep, action: &'static str) -> DataResult<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(DataError::InvalidStep {
                step: self.step,
                action,
            })
        }
    }

    /// Take an upload and move to processing; returns the accepted count
    ///
    /// # Errors
    ///
    /// - [`DataError::InvalidStep`] outside the upload step
    /// - [`DataError::InvalidUpload`] when no file is an image or PDF
    pub fn begin_upload(&mut self, files: Vec<UploadedFile>) -> DataResult<usize> {
        self.expect_step(WizardStep::Upload, "upload")?;
        self.files = accept_files(files)?;
        self.step = WizardStep::Processing;
        Ok(self.files.len())
    }

    /// Extraction finished; show it for review
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidStep`] unless processing.
    pub fn finish_processing(&mut self, record: ExtractedRecord) -> DataResult<()> {
        self.expect_step(WizardStep::Processing, "finish processing")?;
        self.extracted = Some(record);
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Flip field editing; returns the new setting
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidStep`] unless reviewing.
    pub fn toggle_editing(&mut self) -> DataResult<bool> {
        self.expect_step(WizardStep::Review, "toggle editing")?;
        self.editing = !self.editing;
        Ok(self.editing)
    }

    /// Correct one extracted field
    ///
    /// # Errors
    ///
    /// - [`DataError::InvalidStep`] unless reviewing
    /// - [`DataError::EditingDisabled`] while editing is off
    /// - [`DataError::UnknownField`] for an unknown field name
    pub fn edit_field(&mut self, field: &str, value: impl Into<String>) -> DataResult<()> {
        self.expect_step(WizardStep::Review, "edit fields")?;
        if !self.editing {
            return Err(DataError::EditingDisabled);
        }
        match self.extracted.as_mut() {
            Some(record) => record.set_field(field, value),
            None => Err(DataError::InvalidStep {
                step: self.step,
                action: "edit fields",
            }),
        }
    }

    /// Accept the reviewed record and hand it back
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidStep`] unless reviewing.
    pub fn complete(&mut self) -> DataResult<ExtractedRecord> {
        self.expect_step(WizardStep::Review, "complete")?;
        let record = self.extracted.clone().ok_or(DataError::InvalidStep {
            step: self.step,
            action: "complete",
        })?;
        self.step = WizardStep::Complete;
        self.editing = false;
        Ok(record)
    }

    /// Back to an empty upload step
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan() -> UploadedFile {
        UploadedFile::new("form.jpg", "image/jpeg", 2 * 1024 * 1024)
    }

    fn reviewing() -> DigitizationWizard {
        let mut wizard = DigitizationWizard::new();
        wizard.begin_upload(vec![scan()]).unwrap();
        wizard.finish_processing(ExtractedRecord::template()).unwrap();
        wizard
    }

    #[test]
    fn only_images_and_pdfs_within_limit() {
        assert!(scan().is_acceptable());
        assert!(UploadedFile::new("a.pdf", "application/pdf", MAX_FILE_BYTES).is_acceptable());
        assert!(!UploadedFile::new("a.pdf", "application/pdf", MAX_FILE_BYTES + 1).is_acceptable());
        assert!(!UploadedFile::new("a.docx", "application/msword", 10).is_acceptable());
    }

    #[test]
    fn mixed_upload_keeps_valid_files() {
        let files = vec![
            scan(),
            UploadedFile::new("notes.txt", "text/plain", 100),
            UploadedFile::new("map.pdf", "application/pdf", 500),
        ];
        let accepted = accept_files(files).unwrap();
        assert_eq!(accepted.len(), 2);
    }

    #[test]
    fn invalid_upload_stays_on_upload_step() {
        let mut wizard = DigitizationWizard::new();
        let err = wizard
            .begin_upload(vec![UploadedFile::new("notes.txt", "text/plain", 100)])
            .unwrap_err();
        assert_eq!(err.to_string(), INVALID_UPLOAD_MESSAGE);
        assert_eq!(wizard.step(), WizardStep::Upload);
        assert!(wizard.files().is_empty());
    }

    #[test]
    fn full_walk_through() {
        let mut wizard = reviewing();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(matches!(
            wizard.edit_field("village", "Bonai"),
            Err(DataError::EditingDisabled)
        ));

        assert!(wizard.toggle_editing().unwrap());
        wizard.edit_field("village", "Bonai").unwrap();
        wizard.edit_field("coordinates.latitude", "21.82").unwrap();
        assert!(matches!(
            wizard.edit_field("confidence", "99"),
            Err(DataError::UnknownField(_))
        ));

        let record = wizard.complete().unwrap();
        assert_eq!(record.village, "Bonai");
        assert_eq!(record.coordinates.latitude, "21.82");
        assert_eq!(wizard.step(), WizardStep::Complete);
        assert!(!wizard.is_editing());
    }

    #[test]
    fn steps_cannot_be_skipped() {
        let mut wizard = DigitizationWizard::new();
        let err = wizard.complete().unwrap_err();
        assert_eq!(err.to_string(), "cannot complete while in step upload");
        assert!(wizard.toggle_editing().is_err());
        assert!(wizard
            .finish_processing(ExtractedRecord::template())
            .is_err());

        let mut wizard = reviewing();
        assert!(wizard.begin_upload(vec![scan()]).is_err());
    }

    #[test]
    fn reset_from_any_step() {
        let mut wizard = reviewing();
        wizard.toggle_editing().unwrap();
        wizard.reset();
        assert_eq!(wizard, DigitizationWizard::new());

        let mut wizard = DigitizationWizard::new();
        wizard.begin_upload(vec![scan()]).unwrap();
        wizard.reset();
        assert_eq!(wizard.step(), WizardStep::Upload);
    }

    #[test]
    fn template_and_bands() {
        let template = ExtractedRecord::template();
        assert_eq!(template.document_quality, "Good");
        assert_eq!(template.band(), ConfidenceBand::Low);
        assert_eq!(ConfidenceBand::from(90), ConfidenceBand::High);
        assert_eq!(ConfidenceBand::from(70), ConfidenceBand::Medium);
        assert_eq!(ConfidenceBand::from(69), ConfidenceBand::Low);

        let json = serde_json::to_value(&template).unwrap();
        assert_eq!(json["pattalHolder"], "");
        assert_eq!(json["coordinates"]["longitude"], "");
        assert_eq!(json["extractedText"], NO_TEXT_EXTRACTED);
    }

    #[test]
    fn size_label() {
        assert_eq!(scan().size_label(), "2.0 MB");
    }
}
