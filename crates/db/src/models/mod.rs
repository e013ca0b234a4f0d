//! Row structs and response shapes for the two flashcard tables.
//!
//! Each entity struct is `FromRow` + `Serialize` and mirrors its table.

pub mod flashcard;
pub mod flashcard_set;
