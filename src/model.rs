use serde::Serialize;

/// The four labeled resume regions the segmenter recognizes. Declaration
/// order doubles as the header tie-break order: a line matching keywords
/// from two kinds is assigned to the earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
}

/// One experience or education entry: either a field-extracted record or
/// the original multi-line text when structuring failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResumeItem {
    Structured {
        title: String,
        org: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        period: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Raw {
        text: String,
    },
}

/// Root output record. Built once per parse call, never mutated after.
/// Field names match the JSON contract the downstream shell consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResume {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub experience: Vec<ResumeItem>,
    pub education: Vec<ResumeItem>,
    pub skills: Vec<String>,
}

impl ParsedResume {
    /// Sentinel returned when no usable text could be extracted from the
    /// document (image-only scan, corrupt file, empty input).
    pub fn fallback() -> Self {
        ParsedResume {
            name: "Error: Could Not Parse Name".into(),
            title: "Error: Could Not Parse Title".into(),
            email: String::new(),
            phone: String::new(),
            linkedin: String::new(),
            github: String::new(),
            summary: "Could not extract text from the resume. \
                      The document might be image-based or corrupted."
                .into(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
        }
    }
}
