//! Services that orchestrate content path operations over the ports.

mod content_path_service;
mod resolver;
mod session_mirror;

pub use content_path_service::ContentPathService;
pub use resolver::ContentPathResolver;
pub use session_mirror::SessionMirror;
