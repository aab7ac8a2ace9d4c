// Factory Pattern with Trait Objects
// Two trivially different product variants behind a shared capability.

use std::io::{self, Write};

pub trait Product {
    fn name(&self) -> &'static str;

    /// The fixed output line for this variant.
    fn manipulation(&self) -> String;

    fn manipulate(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.manipulation())
    }
}

pub struct ProductOne;

impl Product for ProductOne {
    fn name(&self) -> &'static str {
        "ProductOne"
    }

    fn manipulation(&self) -> String {
        "ProductOne: manipulating the first variant".to_string()
    }
}

pub struct ProductTwo;

impl Product for ProductTwo {
    fn name(&self) -> &'static str {
        "ProductTwo"
    }

    fn manipulation(&self) -> String {
        "ProductTwo: manipulating the second variant".to_string()
    }
}

pub struct Factory;

impl Factory {
    pub fn create_product_one(&self) -> Box<dyn Product> {
        Box::new(ProductOne)
    }

    pub fn create_product_two(&self) -> Box<dyn Product> {
        Box::new(ProductTwo)
    }
}
