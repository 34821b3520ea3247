mod dto;

pub use dto::TransactionPayload;

pub mod prelude {
    pub use super::TransactionPayload;
}
