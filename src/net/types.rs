//! Data contracts shared with the analysis backend.
//!
//! DESIGN
//! ======
//! The two analysis variants are a closed, internally tagged enum keyed by
//! the backend's `analysis_type` field. An unrecognized tag or a missing
//! variant field is a deserialization error, so a data-contract violation
//! surfaces as a fetch failure instead of a half-populated view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Which of the two inspection workflows a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    WhitePixel,
    Bonnet,
}

impl AnalysisKind {
    /// Emoji icon used on cards and history entries.
    pub fn icon(self) -> &'static str {
        match self {
            Self::WhitePixel => "🔍",
            Self::Bonnet => "🚗",
        }
    }

    /// Short label for history entries.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::WhitePixel => "White Pixel",
            Self::Bonnet => "Bonnet",
        }
    }

    /// Title shown on the landing cards and the upload modal.
    pub fn card_title(self) -> &'static str {
        match self {
            Self::WhitePixel => "White Pixel Detection",
            Self::Bonnet => "Car Bonnet Analysis",
        }
    }

    /// Description shown on the landing cards.
    pub fn card_description(self) -> &'static str {
        match self {
            Self::WhitePixel => {
                "Upload any image to identify and analyze white pixel concentration for quality assessment"
            }
            Self::Bonnet => {
                "AI-powered analysis of car condition, color identification, and maintenance recommendations"
            }
        }
    }

    /// Subtitle shown inside the upload modal.
    pub fn modal_subtitle(self) -> &'static str {
        match self {
            Self::WhitePixel => "Upload an image to detect white pixels",
            Self::Bonnet => "Upload a car bonnet image for AI analysis",
        }
    }

    /// Heading for the detail page.
    pub fn detail_title(self) -> &'static str {
        match self {
            Self::WhitePixel => "White Pixel Analysis",
            Self::Bonnet => "Car Bonnet Analysis",
        }
    }
}

/// One immutable analysis result, as returned by the submission and detail
/// endpoints. Never constructed client-side.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisRecord {
    pub id: String,
    pub image_name: String,
    /// ISO-8601 creation instant assigned by the backend.
    pub timestamp: String,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

impl AnalysisRecord {
    pub fn kind(&self) -> AnalysisKind {
        match self.report {
            AnalysisReport::WhitePixel(_) => AnalysisKind::WhitePixel,
            AnalysisReport::Bonnet(_) => AnalysisKind::Bonnet,
        }
    }
}

/// Variant payload of an [`AnalysisRecord`], tagged by `analysis_type`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "analysis_type", rename_all = "snake_case")]
pub enum AnalysisReport {
    WhitePixel(WhitePixelReport),
    Bonnet(BonnetReport),
}

/// White-pixel concentration result.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhitePixelReport {
    pub white_pixel_count: u64,
    pub total_pixels: u64,
    pub percentage: f64,
    pub analysis_result: String,
}

/// Car-bonnet condition result.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BonnetReport {
    pub car_color: String,
    pub condition: String,
    pub wash_or_repaint: String,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub detailed_report: String,
}

/// Summary projection returned by the history endpoint. The backend composes
/// the `summary` line; the client renders it verbatim and never re-sorts the
/// list.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisSummary {
    pub id: String,
    pub analysis_type: AnalysisKind,
    pub image_name: String,
    pub timestamp: String,
    pub summary: String,
}

/// FastAPI-style failure payload carried on non-2xx responses.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
