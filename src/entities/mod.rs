// Entity Models
// "Identity persists, values change"
//
// Each entity variant has:
// - Stable identity (UUID) that NEVER changes
// - A name value fixed at construction
// - Exactly one greeting capability (speak or yell)

pub mod person;
pub mod alien;

pub use person::{default_people, Person};
pub use alien::{default_aliens, Alien};
