// 👽 Alien Entity - Stable identity + yell capability
//
// "Alien name is a VALUE (fixed at construction), Alien UUID is IDENTITY"
//
// Problem solved:
// - Same record shape as Person, different capability set
// - Yelling renders the exact same format speaking does - the capability
//   name differs, the output does not

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::greeting::{Capability, Greeting, Yell};
use crate::roster::Roster;

// ============================================================================
// ALIEN ENTITY
// ============================================================================

/// Alien Entity - the yell-capable variant
///
/// Identity: UUID (never changes)
/// Value: name (fixed at construction, any text accepted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alien {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Name rendered into the greeting
    pub name: String,

    /// System time of construction
    pub created_at: DateTime<Utc>,

    /// Extensible metadata
    pub metadata: serde_json::Value,
}

impl Alien {
    /// Create new alien entity with UUID
    pub fn new(name: impl Into<String>) -> Self {
        Alien {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            metadata: serde_json::json!({}),
        }
    }

    /// The capability set this variant exposes
    pub fn capability(&self) -> Capability {
        Capability::Yell
    }
}

impl Greeting for Alien {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Yell for Alien {}

// ============================================================================
// STOCK ROSTER
// ============================================================================

/// The stock alien roster: Alf, ET, Thanos - in that order
///
/// Constructed by the binary for symmetry but never greeted; yell-capable
/// entities do not satisfy the greeting pass's bound.
pub fn default_aliens() -> Roster<Alien> {
    Roster::from_members(vec![
        Alien::new("Alf"),
        Alien::new("ET"),
        Alien::new("Thanos"),
    ])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Person;
    use crate::greeting::Speak;

    #[test]
    fn test_alien_creation() {
        let alien = Alien::new("Alf");

        assert!(!alien.id.is_empty());
        assert_eq!(alien.name, "Alf");
        assert_eq!(alien.capability(), Capability::Yell);
    }

    #[test]
    fn test_alien_yells_greeting() {
        let alien = Alien::new("ET");

        assert_eq!(alien.yell(), "Hi ET");
        assert_eq!(alien.greeting(), "Hi ET");
    }

    #[test]
    fn test_yell_format_matches_speak_format() {
        // Both capability sets render the identical string for a name
        let alien = Alien::new("Thanos");
        let person = Person::new("Thanos");

        assert_eq!(alien.yell(), person.speak());
    }

    #[test]
    fn test_default_aliens_roster() {
        let aliens = default_aliens();

        assert_eq!(aliens.len(), 3);
        let names: Vec<&str> = aliens.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alf", "ET", "Thanos"]);
    }
}
