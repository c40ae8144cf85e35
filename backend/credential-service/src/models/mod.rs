pub mod account;

pub use account::{Account, DEFAULT_ROLE};
