mod endpoint;
mod session;

pub use endpoint::Endpoint;
pub use session::ChatSession;
