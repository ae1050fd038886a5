use anyhow::Result;

use say_hey::{default_aliens, default_people, say_hey_all};

fn main() -> Result<()> {
    println!("👋 Say Hey - Roster Greeting Pass");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Build rosters
    println!("\n📋 Building rosters...");
    let people = default_people();
    println!("✓ People roster: {} members", people.len());

    let aliens = default_aliens();
    println!("✓ Alien roster: {} members (never greeted)", aliens.len());

    // 2. Greeting pass over the people roster
    println!("\n📣 Running greeting pass...");
    say_hey_all(&people);
    println!("✓ {} members spoke (results discarded)", people.len());

    // 3. Done
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("🎉 Greeting pass complete");

    Ok(())
}
