// Singleton Pattern with OnceLock
// One shared instance per process; the message field is mutable through any handle.

use std::fmt;
use std::sync::{Mutex, OnceLock};

pub struct Singleton {
    message: Mutex<String>,
}

impl Singleton {
    /// Returns the shared instance, creating it on first access.
    pub fn instance() -> &'static Singleton {
        static INSTANCE: OnceLock<Singleton> = OnceLock::new();
        INSTANCE.get_or_init(|| Singleton {
            message: Mutex::new(String::new()),
        })
    }

    pub fn set_message(&self, message: impl Into<String>) {
        *self.message.lock().unwrap() = message.into();
    }

    pub fn message(&self) -> String {
        self.message.lock().unwrap().clone()
    }
}

// Tests share the one process-wide instance, so tests that touch the
// message serialize on this lock.
#[cfg(test)]
pub(crate) static MESSAGE_LOCK: Mutex<()> = Mutex::new(());

impl fmt::Display for Singleton {
    // Type name plus address, like a default object representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Singleton@{:p}", self)
    }
}
