pub mod conversation;
pub mod error;

pub use conversation::{parse_history, Message, Role};
pub use error::AppError;
