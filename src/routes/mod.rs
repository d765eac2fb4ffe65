mod contact;
mod health_check;

pub use contact::*;
pub use health_check::*;

/// Formats an error together with its whole source chain, one cause per line.
/// Used by the `Debug` implementations of our route error types so that log
/// records carry the full story, not just the outermost message.
pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
