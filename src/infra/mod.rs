pub mod http_client;
pub mod scripted;

pub use http_client::ReqwestTransport;
pub use scripted::{RecordedRequest, ScriptedTransport};
