//! Browser console logging behind the `log` facade.
//!
//! Initialization happens once per page; asking again with the same level is
//! a no-op and asking with a different level is refused.

use std::sync::OnceLock;

use log::Level;

static ACTIVE_LEVEL: OnceLock<Level> = OnceLock::new();

pub fn normalize_level(level: &str) -> Result<Level, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(Level::Error),
        "warn" => Ok(Level::Warn),
        "info" => Ok(Level::Info),
        "debug" => Ok(Level::Debug),
        "trace" => Ok(Level::Trace),
        other => Err(format!("unsupported log level `{other}`")),
    }
}

fn check_reinit(active: Level, requested: Level) -> Result<(), String> {
    if active == requested {
        Ok(())
    } else {
        Err(format!(
            "logging already initialized with level `{active}`; refusing to switch to `{requested}`"
        ))
    }
}

pub fn init_logging(level: &str) -> Result<(), String> {
    let requested = normalize_level(level)?;
    if let Some(active) = ACTIVE_LEVEL.get() {
        return check_reinit(*active, requested);
    }

    console_log::init_with_level(requested).map_err(|e| e.to_string())?;
    let _ = ACTIVE_LEVEL.set(requested);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_loosely() {
        assert_eq!(normalize_level(" DEBUG "), Ok(Level::Debug));
        assert_eq!(normalize_level("warn"), Ok(Level::Warn));
        assert!(normalize_level("verbose").is_err());
        assert!(normalize_level("").is_err());
    }

    #[test]
    fn reinit_must_keep_the_level() {
        assert!(check_reinit(Level::Info, Level::Info).is_ok());
        let err = check_reinit(Level::Info, Level::Debug).unwrap_err();
        assert!(err.contains("refusing to switch"));
    }

    #[test]
    fn second_init_with_another_level_is_refused() {
        let _ = ACTIVE_LEVEL.set(Level::Warn);
        assert!(init_logging("warn").is_ok());
        assert!(init_logging("debug").unwrap_err().contains("refusing to switch"));
        assert!(init_logging("loud").is_err());
    }
}
