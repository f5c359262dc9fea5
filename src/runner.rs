use std::io::Write;

use tracing::debug;

use crate::{Greeter, Result};

/// Writes one greeting line to `out` and flushes it.
pub fn write_greeting<G, W>(greeter: &G, name: Option<&str>, out: &mut W) -> Result<()>
where
    G: Greeter + ?Sized,
    W: Write + ?Sized,
{
    let greeting = greeter.greet(name);
    debug!(named = name.is_some(), len = greeting.len(), "writing greeting");

    writeln!(out, "{greeting}")?;
    out.flush()?;
    return Ok(());
}
