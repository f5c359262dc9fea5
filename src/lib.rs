//! Greets a name, falling back to the world when none is given.
//!
//! The free function [`greet`] is the whole contract. [`Greeter`] is the
//! seam the command-line runner is written against.

#[cfg(test)]
use mockall::automock;

mod error;
mod runner;

pub use error::{Error, Result};
pub use runner::write_greeting;

/// Name substituted when the caller supplies none.
pub const DEFAULT_NAME: &str = "World";

/// Builds `"Hello, {name}!"`, or `"Hello, World!"` when `name` is `None`.
///
/// `Some("")` is greeted as-is and yields `"Hello, !"`. No trimming or
/// escaping is applied.
///
/// ```
/// use hello_greeter::greet;
///
/// assert_eq!(greet(None), "Hello, World!");
/// assert_eq!(greet(Some("Alice")), "Hello, Alice!");
/// assert_eq!(greet(Some("")), "Hello, !");
/// ```
pub fn greet(name: Option<&str>) -> String {
    return format_greeting(name.unwrap_or(DEFAULT_NAME));
}

fn format_greeting(name: &str) -> String {
    return format!("Hello, {name}!");
}

#[cfg_attr(test, automock)]
pub trait Greeter {
    fn greet<'a>(&self, name: Option<&'a str>) -> String;
}

/// The stock [`Greeter`], backed by [`greet`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloGreeter;

impl Greeter for HelloGreeter {
    fn greet(&self, name: Option<&str>) -> String {
        return greet(name);
    }
}
