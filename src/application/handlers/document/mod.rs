//! Document command handlers.

mod create_from_template;

pub use create_from_template::{
    CreateFromTemplateCommand, CreateFromTemplateHandler, CreateFromTemplateResult,
};
