pub mod issuer;

pub use issuer::{Claims, TokenIssuer};
