pub mod greeting_request;

pub use greeting_request::{GreetingRequest, validate_addressee, validate_tone};
