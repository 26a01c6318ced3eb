pub mod document_flow;
pub mod session_state;

pub use document_flow::DocumentFlow;
pub use session_state::{SessionState, Transition};
