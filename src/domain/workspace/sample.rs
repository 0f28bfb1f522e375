//! Sample documents the workspace is seeded with at startup.

use chrono::{TimeZone, Utc};

use crate::domain::document::{AcademicDocument, DocContent};
use crate::domain::foundation::{DocumentId, DocumentStatus, DocumentType, Timestamp};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Timestamp {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .map(Timestamp::from_datetime)
        .unwrap_or_default()
}

/// The two documents present when a session starts.
pub fn sample_documents() -> Vec<AcademicDocument> {
    vec![
        AcademicDocument::reconstitute(
            DocumentId::from_static("doc_001"),
            "Introduction to Biology: Cell Structure".to_string(),
            DocumentType::TeachingModule,
            DocumentStatus::Final,
            at(2023, 10, 24, 10, 30),
            Some("Grade 10 Science".to_string()),
            Some("Odd".to_string()),
            DocContent {
                outcomes: "Students will understand the basic structure of animal and plant cells."
                    .to_string(),
                objectives: "1. Identify the nucleus, mitochondria and cell wall.\n2. Distinguish between plant and animal cells."
                    .to_string(),
                activities: "Introduction (15m): Video presentation.\nCore Activity (45m): Microscope observation."
                    .to_string(),
                assessments: "Quiz: Diagram labelling.".to_string(),
            },
        ),
        AcademicDocument::reconstitute(
            DocumentId::from_static("doc_002"),
            "Weekly Reflection: Algebra Unit".to_string(),
            DocumentType::ReflectionSheet,
            DocumentStatus::Draft,
            at(2023, 10, 26, 14, 15),
            Some("Grade 9 Mathematics".to_string()),
            Some("Odd".to_string()),
            DocContent::default(),
        ),
    ]
}
