//! String-based convenience API for quick experimentation.

pub use crate::ui::{add, add_term, delete_term, evaluate, parse, search_term, sort, sub};
