// Combined Demo - Singleton and Factory
// Reproduces the classic two-pattern walkthrough against an injected writer.

use std::io::Write;

use anyhow::Result;

use crate::factory::Factory;
use crate::singleton::Singleton;

/// Runs the full demo: greeting, singleton identity and shared state,
/// then one product per factory variant.
pub fn run_demo(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Hello, world!")?;

    let singleton = Singleton::instance();
    singleton.set_message("Hello Singleton");

    // A second handle sees the same instance and the same message.
    let second = Singleton::instance();

    writeln!(out, "singleton: {}", singleton)?;
    writeln!(out, "singleton message: {}", singleton.message())?;
    writeln!(out, "second handle message: {}", second.message())?;

    let factory = Factory;
    let product1 = factory.create_product_one();
    let product2 = factory.create_product_two();

    product1.manipulate(out)?;
    product2.manipulate(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::singleton::MESSAGE_LOCK;

    #[test]
    fn test_demo_output_order() {
        let _guard = MESSAGE_LOCK.lock().unwrap();

        let mut out = Vec::new();
        run_demo(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Hello, world!");
        assert!(lines[1].starts_with("singleton: Singleton@"));
        assert_eq!(lines[2], "singleton message: Hello Singleton");
        assert_eq!(lines[3], "second handle message: Hello Singleton");
        assert_eq!(lines[4], "ProductOne: manipulating the first variant");
        assert_eq!(lines[5], "ProductTwo: manipulating the second variant");
    }
}
