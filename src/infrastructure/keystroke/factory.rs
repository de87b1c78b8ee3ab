//! Paste tool selection

use std::fmt;
use std::str::FromStr;

use crate::application::ports::PasteKeys;

use super::enigo::EnigoPasteKeys;
use super::noop::NoOpPasteKeys;
#[cfg(target_os = "linux")]
use super::xdotool::XdotoolPasteKeys;

/// User preference for the paste delivery tool.
///
/// - All platforms support `Enigo` (the default) and `None`.
/// - Linux additionally supports `Xdotool` for X11 sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasteToolPreference {
    /// Use cross-platform enigo library (default on all platforms)
    #[default]
    Enigo,
    /// Use xdotool (Linux only, X11)
    #[cfg(target_os = "linux")]
    Xdotool,
    /// Disable paste delivery; clipboard writes still happen
    None,
}

impl fmt::Display for PasteToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasteToolPreference::Enigo => write!(f, "enigo"),
            #[cfg(target_os = "linux")]
            PasteToolPreference::Xdotool => write!(f, "xdotool"),
            PasteToolPreference::None => write!(f, "none"),
        }
    }
}

/// Error type for parsing a paste tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePasteToolError {
    pub value: String,
    pub valid_options: &'static str,
}

impl fmt::Display for ParsePasteToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid paste tool '{}'. Valid options: {}",
            self.value, self.valid_options
        )
    }
}

impl std::error::Error for ParsePasteToolError {}

impl FromStr for PasteToolPreference {
    type Err = ParsePasteToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enigo" => Ok(PasteToolPreference::Enigo),
            #[cfg(target_os = "linux")]
            "xdotool" => Ok(PasteToolPreference::Xdotool),
            "none" => Ok(PasteToolPreference::None),
            _ => Err(ParsePasteToolError {
                value: s.to_string(),
                #[cfg(target_os = "linux")]
                valid_options: "enigo, xdotool, none",
                #[cfg(not(target_os = "linux"))]
                valid_options: "enigo, none",
            }),
        }
    }
}

/// Create a paste adapter for the given preference
pub fn create_paste_keys(preference: PasteToolPreference) -> Box<dyn PasteKeys> {
    match preference {
        PasteToolPreference::Enigo => Box::new(EnigoPasteKeys::new()),
        #[cfg(target_os = "linux")]
        PasteToolPreference::Xdotool => Box::new(XdotoolPasteKeys::new()),
        PasteToolPreference::None => Box::new(NoOpPasteKeys::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paste_tool_preference_display() {
        assert_eq!(PasteToolPreference::Enigo.to_string(), "enigo");
        assert_eq!(PasteToolPreference::None.to_string(), "none");
        #[cfg(target_os = "linux")]
        assert_eq!(PasteToolPreference::Xdotool.to_string(), "xdotool");
    }

    #[test]
    fn paste_tool_preference_from_str() {
        assert_eq!(
            "enigo".parse::<PasteToolPreference>().unwrap(),
            PasteToolPreference::Enigo
        );
        assert_eq!(
            "ENIGO".parse::<PasteToolPreference>().unwrap(),
            PasteToolPreference::Enigo
        );
        assert_eq!(
            "none".parse::<PasteToolPreference>().unwrap(),
            PasteToolPreference::None
        );
        #[cfg(target_os = "linux")]
        assert_eq!(
            "xdotool".parse::<PasteToolPreference>().unwrap(),
            PasteToolPreference::Xdotool
        );
    }

    #[test]
    fn paste_tool_preference_from_str_invalid() {
        let err = "invalid".parse::<PasteToolPreference>().unwrap_err();
        assert_eq!(err.value, "invalid");
    }

    #[test]
    fn paste_tool_preference_default() {
        assert_eq!(PasteToolPreference::default(), PasteToolPreference::Enigo);
    }
}
