//! The trackable-occurrence model sent to the collect endpoint.

pub mod hit;
pub mod payload;

pub use hit::{Event, Hit, HitType};
pub use payload::Payload;
