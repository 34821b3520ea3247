pub mod csv;
pub mod payload;

pub mod prelude {
    pub use super::csv::prelude::*;
    pub use super::payload::prelude::*;
}
