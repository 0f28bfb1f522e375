//! Pulldown-cmark based export service adapter.
//!
//! Converts a rendered preview layout (Markdown) into a standalone, A4-styled
//! HTML page. The page opens the browser's print dialog when loaded, which is
//! how users produce paper or PDF copies.
//!
//! # Architecture
//!
//! This adapter implements the `DocumentExportService` port. The application
//! depends on the port trait, while this concrete implementation provides
//! the conversion logic.

use async_trait::async_trait;
use pulldown_cmark::{html, CowStr, Event, Options, Parser};

use crate::ports::{DocumentExportService, ExportError};

/// Export service using pulldown-cmark for HTML.
///
/// # Example
///
/// ```rust,ignore
/// let service = PulldownExportService::new();
/// let html = service.to_html("# Hello\n\nWorld", "Hello").await?;
/// ```
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    /// Include default CSS styling for HTML output.
    include_default_css: bool,

    /// Embed a script that opens the print dialog on load.
    auto_print: bool,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    /// Create a new export service with default settings.
    pub fn new() -> Self {
        Self {
            include_default_css: true,
            auto_print: true,
        }
    }

    /// Disable default CSS styling for HTML output.
    pub fn without_default_css(mut self) -> Self {
        self.include_default_css = false;
        self
    }

    /// Do not open the print dialog on load.
    pub fn without_auto_print(mut self) -> Self {
        self.auto_print = false;
        self
    }

    /// Render Markdown to an HTML fragment.
    ///
    /// Single newlines are kept as line breaks and raw HTML in the input is
    /// escaped rather than passed through.
    fn render_body(markdown: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;

        let parser = Parser::new_ext(markdown, options).map(|event| match event {
            Event::SoftBreak => Event::HardBreak,
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(CowStr::from(raw.into_string())),
            other => other,
        });

        let mut body = String::new();
        html::push_html(&mut body, parser);
        body
    }

    /// Wrap HTML content in a complete document with styling.
    fn wrap_html(&self, body: String, title: &str) -> String {
        let css = if self.include_default_css {
            DEFAULT_CSS
        } else {
            ""
        };
        let script = if self.auto_print { PRINT_SCRIPT } else { "" };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="academic-document">
{body}
    </article>
{script}
</body>
</html>"#,
            title = html_escape(title),
            css = css,
            body = body,
            script = script
        )
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_html(&self, markdown: &str, title: &str) -> Result<String, ExportError> {
        let body = Self::render_body(markdown);
        Ok(self.wrap_html(body, title))
    }
}

/// Escape HTML special characters.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const PRINT_SCRIPT: &str = r#"    <script>window.addEventListener("load", function () { window.print(); });</script>"#;

/// A4 paper styling for the academic layout.
const DEFAULT_CSS: &str = r#"
:root {
    --primary-color: #1d4ed8;
    --text-color: #1f2937;
    --muted-color: #6b7280;
    --border-color: #e5e7eb;
}

* {
    box-sizing: border-box;
}

body {
    font-family: Georgia, 'Times New Roman', serif;
    font-size: 12pt;
    line-height: 1.6;
    color: var(--text-color);
    background-color: #f3f4f6;
    margin: 0;
    padding: 2rem 0;
}

.academic-document {
    background: #ffffff;
    width: 210mm;
    min-height: 297mm;
    margin: 0 auto;
    padding: 20mm;
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
}

h1 {
    font-family: -apple-system, 'Segoe UI', Roboto, Arial, sans-serif;
    font-size: 1.25rem;
    text-transform: uppercase;
    letter-spacing: 0.08em;
    margin: 0;
}

h1 + p {
    color: var(--muted-color);
    margin-top: 0.25rem;
}

hr {
    border: none;
    border-top: 4px solid var(--primary-color);
    margin: 1.5rem 0 2rem;
}

h2 {
    font-size: 1.8rem;
    text-align: center;
    margin-bottom: 0.5rem;
}

h2 + p {
    text-align: center;
    border-top: 1px solid var(--border-color);
    border-bottom: 1px solid var(--border-color);
    padding: 0.5rem 0;
}

h3 {
    color: var(--primary-color);
    text-transform: uppercase;
    letter-spacing: 0.04em;
    border-bottom: 1px solid var(--border-color);
    padding-bottom: 0.25rem;
    margin-top: 2rem;
}

p {
    text-align: justify;
}

em {
    color: var(--muted-color);
}

table {
    width: 100%;
    margin-top: 5rem;
    border-collapse: collapse;
    page-break-inside: avoid;
}

th {
    font-weight: 500;
    padding-bottom: 4rem;
}

td {
    color: var(--muted-color);
    font-size: 0.9rem;
    border-top: 1px solid var(--muted-color);
    padding-top: 0.5rem;
}

@media print {
    body {
        background: none;
        padding: 0;
    }

    .academic-document {
        width: auto;
        min-height: 0;
        padding: 0;
        box-shadow: none;
    }

    h2, h3 {
        page-break-after: avoid;
    }
}
"#;
