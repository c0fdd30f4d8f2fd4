pub mod cleartext_param;
pub mod digest_param;

pub use cleartext_param::CleartextParam;
pub use digest_param::DigestParam;
