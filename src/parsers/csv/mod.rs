mod dto;
mod parser;
mod types;

pub use dto::{ExportRow, MIN_COLUMNS};
pub use parser::ExportParser;
pub use types::CreatedAt;

pub mod prelude {
    pub use super::{CreatedAt, ExportParser, ExportRow};
}
