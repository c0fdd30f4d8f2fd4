pub mod config;
pub mod db;
pub mod digest;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use digest::Sha1Digest;
pub use error::CheckError;
