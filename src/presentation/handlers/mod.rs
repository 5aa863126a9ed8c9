mod call;
mod health;

pub use call::{CallWebhook, handle_call_handler};
pub use health::health_handler;
