// 📣 Greeter - The greeting pass
//
// Walks a roster in insertion order and has every member speak exactly once.
// Results are computed, then discarded; nothing reaches any external channel.

use crate::greeting::Speak;
use crate::roster::Roster;

// ============================================================================
// GREETING PASS
// ============================================================================

/// Invoke the speak capability on every roster member, in order
///
/// Each member speaks exactly once; every result is discarded. An empty
/// roster completes without performing any calls. Only speak-capable rosters
/// satisfy the bound - yell-capable entities cannot be passed.
pub fn say_hey_all<T: Speak>(roster: &Roster<T>) {
    for member in roster {
        let _ = member.speak();
    }
}

// ============================================================================
// TESTS
// ============================================================================
