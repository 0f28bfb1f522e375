//! Document module - the academic document model.
//!
//! - `aggregate` - `AcademicDocument` and its `DocContent`
//! - `section` - the four content sections in fixed order
//! - `field` - explicit addressing of editable fields
//! - `progress` - completion percentage used by the editor

mod aggregate;
mod field;
mod progress;
mod section;

pub use aggregate::{AcademicDocument, DocContent};
pub use field::{FieldRef, TopLevelField};
pub use progress::{completion, TRACKED_FIELDS};
pub use section::ContentSection;
