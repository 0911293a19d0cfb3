//! Entities - values the goose hands around between layers

mod attack;
mod goose_repertoire;
mod query_frame;

pub use attack::Attack;
pub use goose_repertoire::{DEFAULT_ATTACKS, DEFAULT_ERROR_RESPONSES, GooseRepertoire};
pub use query_frame::{CellValue, QueryFrame};
