pub mod chat;
pub mod upload;

pub use chat::{ChatMessageIn, ChatMessageOut};
pub use upload::{UploadIn, UploadOut};
