//! JWT session token encoding, decoding, and renewal.

pub mod claims;
pub mod decoder;
pub mod encoder;
pub mod session;

pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};
pub use session::SessionTokens;
