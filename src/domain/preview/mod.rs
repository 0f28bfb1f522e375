//! Print preview of a document.

mod layout;

pub use layout::{
    status_options, Letterhead, MetadataItem, PreviewLayout, PreviewSection, SignatureBlock, Stamp,
    StatusOption, UNTITLED,
};
