pub mod config;
pub mod error;
pub mod logger;
pub mod negotiate;
pub mod peer;
pub mod registry;
pub mod session;
pub mod signaling;

pub use error::NegotiateError;
pub use negotiate::{negotiate, run};
pub use registry::SessionRegistry;
pub use session::Session;
pub use signaling::SdpMessage;
