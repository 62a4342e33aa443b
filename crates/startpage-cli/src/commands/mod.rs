pub mod config;
pub mod greet;
pub mod link;
pub mod mood;
pub mod prefs;
pub mod search;
pub mod stats;
pub mod timer;
pub mod todo;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a value as compact JSON on stderr, keeping stdout to one document.
pub fn note_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// A declined mutation fails the command so scripts can tell.
pub fn declined(what: &str) -> Result<(), Box<dyn std::error::Error>> {
    Err(format!("{what}: nothing changed").into())
}
