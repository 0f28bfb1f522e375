//! EduDoc - Academic Document Drafting Service
//!
//! Teachers draft standardized academic documents (teaching modules, lesson
//! plans, activity reports, reflection sheets) from curated templates, fill
//! sections with optional AI assistance, and print them on an official
//! letterhead.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
