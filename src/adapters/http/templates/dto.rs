//! HTTP DTOs for the template gallery.

use serde::Serialize;

use crate::domain::document::AcademicDocument;
use crate::domain::foundation::{DocumentType, TemplateId};
use crate::domain::template::Template;
use crate::domain::workspace::ViewState;

/// One gallery card.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateCard {
    pub id: TemplateId,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub type_label: &'static str,
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
    pub thumbnail_url: String,
}

impl From<&Template> for TemplateCard {
    fn from(template: &Template) -> Self {
        Self {
            id: template.id.clone(),
            name: template.name.clone(),
            description: template.description.clone(),
            doc_type: template.doc_type,
            type_label: template.doc_type.label(),
            is_verified: template.is_verified,
            badge: template.badge(),
            thumbnail_url: template.thumbnail_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<TemplateCard>,
}

/// Response for `POST /api/templates/:id/use`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedDocumentResponse {
    pub view: ViewState,
    pub document: AcademicDocument,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavigationResponse {
    pub view: ViewState,
}
