pub mod canned;
pub mod session;
pub mod traits;

pub use canned::CannedResponder;
pub use session::{ChatMessage, ChatSession, Sender};
pub use traits::ChatResponder;
