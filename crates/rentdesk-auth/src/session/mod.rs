//! Session token encoding and decoding.
//!
//! Sessions are issued by an external identity provider as HS256-signed
//! tokens carrying `{sub, role}`. The server only decodes them; the encoder
//! exists for development tooling and tests.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::SessionClaims;
pub use decoder::SessionDecoder;
pub use encoder::{IssuedSession, SessionEncoder};
