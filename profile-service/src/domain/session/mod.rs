pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::CredentialStoreError;
pub use errors::SessionError;
pub use models::ProfileId;
pub use models::StoredCredential;
pub use ports::CredentialStore;
pub use service::SessionService;
