//! Token claims, signed codec, pair issuance, and rotation.

pub mod claims;
pub mod codec;
pub mod issuer;
pub mod refresher;

pub use claims::{Claims, TokenClass};
pub use codec::TokenCodec;
pub use issuer::{TokenIssuer, TokenPair};
pub use refresher::TokenRefresher;
