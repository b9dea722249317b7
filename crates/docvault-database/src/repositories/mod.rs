//! sqlx repository implementations for all DocVault tables.

pub mod category;
pub mod document;
pub mod profile;
pub mod share;

pub use category::CategoryRepository;
pub use document::DocumentRepository;
pub use profile::ProfileRepository;
pub use share::ShareLinkRepository;
