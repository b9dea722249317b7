//! Administrative operations: document review and role assignment.

pub mod service;

pub use service::AdminService;
