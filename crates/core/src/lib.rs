//! Domain types shared by every flashdeck crate: identifiers, the core error
//! taxonomy, field validation, and the paste-mode card parser.

pub mod draft;
pub mod error;
pub mod paste;
pub mod types;
pub mod validation;
