//! # gatehouse-auth
//!
//! The token lifecycle subsystem for Gatehouse: issuance of signed
//! access/refresh token pairs and the rotation protocol that exchanges an
//! expired access token for a fresh pair.
//!
//! ## Modules
//!
//! - `token` — claims payload, signed codec, pair issuer, and refresher
//! - `error` — the token error taxonomy
//!
//! All components here are purely computational: no shared mutable state,
//! no I/O, safe for unbounded concurrent use once constructed.

pub mod error;
pub mod token;

pub use error::AuthError;
pub use token::{Claims, TokenClass, TokenCodec, TokenIssuer, TokenPair, TokenRefresher};
