//! Editor domain: local draft, field setters and AI-assist bookkeeping.

mod errors;
mod session;

pub use errors::EditorError;
pub use session::{EditorInstanceId, EditorSession, GenerationTicket};
