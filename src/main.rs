// Pattern 1: Creational Patterns - Singleton and Factory
// Demonstrates one shared instance and polymorphic product creation.

use anyhow::Result;
use colored::Colorize;

use creational_patterns::demo::run_demo;

fn main() -> Result<()> {
    println!("{}", "Creational Patterns: Singleton and Factory".bold());
    println!("===========================================\n");

    let mut stdout = std::io::stdout();
    run_demo(&mut stdout)?;

    println!("\n{}", "✓ Demo complete".green());
    Ok(())
}
