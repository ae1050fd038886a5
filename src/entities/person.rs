// 🧑 Person Entity - Stable identity + speak capability
//
// "Person name is a VALUE (fixed at construction), Person UUID is IDENTITY"
//
// Problem solved:
// - Two people may share a name; the UUID keeps them distinct entities
// - The name never changes after construction, so the greeting never drifts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::greeting::{Capability, Greeting, Speak};
use crate::roster::Roster;

// ============================================================================
// PERSON ENTITY
// ============================================================================

/// Person Entity - the speak-capable variant
///
/// Identity: UUID (never changes)
/// Value: name (fixed at construction, any text accepted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Stable identity (UUID) - NEVER changes
    pub id: String,

    /// Name rendered into the greeting
    pub name: String,

    /// System time of construction
    pub created_at: DateTime<Utc>,

    /// Extensible metadata
    pub metadata: serde_json::Value,
}

impl Person {
    /// Create new person entity with UUID
    pub fn new(name: impl Into<String>) -> Self {
        Person {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now(),
            metadata: serde_json::json!({}),
        }
    }

    /// The capability set this variant exposes
    pub fn capability(&self) -> Capability {
        Capability::Speak
    }
}

impl Greeting for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Speak for Person {}

// ============================================================================
// STOCK ROSTER
// ============================================================================

/// The stock people roster: Peter, Brian, Stewie - in that order
pub fn default_people() -> Roster<Person> {
    Roster::from_members(vec![
        Person::new("Peter"),
        Person::new("Brian"),
        Person::new("Stewie"),
    ])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_creation() {
        let person = Person::new("Peter");

        assert!(!person.id.is_empty());
        assert_eq!(person.name, "Peter");
        assert_eq!(person.capability(), Capability::Speak);
    }

    #[test]
    fn test_person_speaks_greeting() {
        let person = Person::new("Peter");

        assert_eq!(person.speak(), "Hi Peter");
        assert_eq!(person.greeting(), "Hi Peter");
    }

    #[test]
    fn test_person_empty_name_accepted() {
        let person = Person::new("");

        assert_eq!(person.name, "");
        assert_eq!(person.speak(), "Hi ");
    }

    #[test]
    fn test_distinct_identities() {
        // Same name, different entities
        let first = Person::new("Peter");
        let second = Person::new("Peter");

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_default_people_roster() {
        let people = default_people();

        assert_eq!(people.len(), 3);
        let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Peter", "Brian", "Stewie"]);
    }
}
