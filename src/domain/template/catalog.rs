//! The fixed template catalog.

use crate::domain::foundation::{DocumentType, TemplateId};

use super::Template;

const THUMBNAIL_URL: &str =
    "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcQy-H4PKshk69pRLj3o9pM68uk7DjdSesyyHQ&s";

/// Read-only list of curated templates.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// The standard set of four templates, one per document type.
    pub fn standard() -> Self {
        let entry = |id: &'static str, name: &str, description: &str, doc_type, is_verified| Template {
            id: TemplateId::from_static(id),
            name: name.to_string(),
            description: description.to_string(),
            doc_type,
            is_verified,
            thumbnail_url: THUMBNAIL_URL.to_string(),
        };

        Self {
            templates: vec![
                entry(
                    "t1",
                    "Standard Teaching Module",
                    "A comprehensive module structure aligned with the 2024 standard. Includes detailed activity breakdowns.",
                    DocumentType::TeachingModule,
                    true,
                ),
                entry(
                    "t2",
                    "Weekly Activity Report",
                    "A concise format for reporting weekly classroom activities and summarizing student progress.",
                    DocumentType::ActivityReport,
                    true,
                ),
                entry(
                    "t3",
                    "Student Reflection Sheet",
                    "A self-assessment layout for students to reflect on their learning journey at the end of a unit.",
                    DocumentType::ReflectionSheet,
                    false,
                ),
                entry(
                    "t4",
                    "Project-Based Learning Plan (PjBL)",
                    "A dedicated template for PjBL with distinct phases for inquiry and creation.",
                    DocumentType::LessonPlan,
                    true,
                ),
            ],
        }
    }

    /// All templates in gallery order.
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// Looks up a template by id.
    pub fn find(&self, id: &TemplateId) -> Option<&Template> {
        self.templates.iter().find(|t| &t.id == id)
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_catalog_has_four_templates_with_unique_ids() {
        let catalog = TemplateCatalog::standard();
        assert_eq!(catalog.all().len(), 4);
        let ids: HashSet<_> = catalog.all().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn standard_catalog_covers_every_document_type() {
        let catalog = TemplateCatalog::standard();
        for doc_type in DocumentType::ALL {
            assert!(catalog.all().iter().any(|t| t.doc_type == doc_type));
        }
    }

    #[test]
    fn find_returns_matching_template() {
        let catalog = TemplateCatalog::standard();
        let t1 = catalog.find(&TemplateId::new("t1").unwrap()).unwrap();
        assert_eq!(t1.doc_type, DocumentType::TeachingModule);
        assert_eq!(t1.badge(), Some(Template::VERIFIED_BADGE));

        let t3 = catalog.find(&TemplateId::new("t3").unwrap()).unwrap();
        assert_eq!(t3.badge(), None);
    }

    #[test]
    fn find_unknown_template_returns_none() {
        let catalog = TemplateCatalog::standard();
        assert!(catalog.find(&TemplateId::new("t9").unwrap()).is_none());
    }
}
