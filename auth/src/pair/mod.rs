pub mod checker;
pub mod errors;
pub mod issuer;

pub use checker::TokenConsistencyChecker;
pub use errors::PairError;
pub use issuer::TokenPair;
pub use issuer::TokenPairIssuer;
