// Say Hey - Core Library
// Exposes all modules for use in the binary and tests

pub mod greeting;
pub mod roster;
pub mod greeter;
pub mod entities;

// Re-export commonly used types
pub use greeting::{compose_greeting, Capability, Greeting, Speak, Yell};
pub use roster::Roster;
pub use greeter::say_hey_all;
pub use entities::{default_aliens, default_people, Alien, Person};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
