// 👋 Greeting Capability Layer - One format, two capability sets
//
// "The greeting format is a shared VALUE, the capability is what differs"
//
// Problem solved:
// - Person speaks, Alien yells, both render the identical "Hi {name}"
// - One formatting authority, so the two capabilities can never drift
// - The greeting pass can demand the speak capability at compile time

use serde::{Deserialize, Serialize};

// ============================================================================
// CAPABILITY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Capability {
    /// Spoken greeting (Person)
    Speak,

    /// Yelled greeting (Alien)
    Yell,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Speak => "speak",
            Capability::Yell => "yell",
        }
    }
}

// ============================================================================
// GREETING TRAIT
// ============================================================================

/// Shared greeting behavior for named entities
///
/// Implementors only supply their name; rendering always goes through
/// `compose_greeting`, so every capability set produces the same format.
pub trait Greeting {
    /// The name rendered into the greeting
    fn name(&self) -> &str;

    /// Render this entity's greeting
    fn greeting(&self) -> String {
        compose_greeting(self.name())
    }
}

// ============================================================================
// CAPABILITY TRAITS
// ============================================================================

/// The "speak" capability set
///
/// This is the only capability the greeting pass accepts.
pub trait Speak: Greeting {
    /// Produce the greeting by speaking
    fn speak(&self) -> String {
        self.greeting()
    }
}

/// The "yell" capability set
///
/// Identical output to `Speak` - the distinction is which operation the
/// entity exposes, not what it renders.
pub trait Yell: Greeting {
    /// Produce the greeting by yelling
    fn yell(&self) -> String {
        self.greeting()
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Render the canonical greeting for a name
///
/// Any text is accepted as given - no trimming, no validation. An empty
/// name renders as "Hi ".
pub fn compose_greeting(name: &str) -> String {
    format!("Hi {}", name)
}

// ============================================================================
// TESTS
// ============================================================================
