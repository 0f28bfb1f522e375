//! Content Generator Port - Section drafting for the editor's AI assist.

use async_trait::async_trait;

use crate::domain::document::ContentSection;

/// Drafts text for one content section of a document.
///
/// # Contract
///
/// `generate` never fails. When the backing service is unavailable or
/// errors, implementations return a human-readable message instead, which
/// the editor writes into the section like any other result.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates text for `section` of a document about `topic`.
    async fn generate(&self, topic: &str, section: ContentSection) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_generator_is_object_safe() {
        fn check<T: ContentGenerator + ?Sized>() {}
        check::<dyn ContentGenerator>();
    }
}
