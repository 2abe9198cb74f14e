//! Scripted widget commands for headless runs
//!
//! A script is a comma-separated list of `<frame>:<action>` entries, e.g.
//! `60:pause,90:start,120:speed=2.5,200:reset,240:size=0.5`. Each command is
//! applied just before the tick with that frame number.

use quark_viz_core::Command;
use std::fmt;
use std::str::FromStr;

/// Command to apply before a given tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledCommand {
    pub frame: u32,
    pub command: Command,
}

/// Why a script entry could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    MissingSeparator(String),
    BadFrame(String),
    BadValue(String),
    UnknownAction(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::MissingSeparator(entry) => {
                write!(f, "Expected <frame>:<action>, got '{entry}'")
            }
            ScriptError::BadFrame(frame) => write!(f, "Invalid frame number '{frame}'"),
            ScriptError::BadValue(value) => write!(f, "Invalid numeric value '{value}'"),
            ScriptError::UnknownAction(action) => write!(
                f,
                "Unknown action '{action}' (expected start, pause, toggle, reset, speed=<v>, size=<v>)"
            ),
        }
    }
}

impl std::error::Error for ScriptError {}

fn parse_value(value: &str) -> Result<f64, ScriptError> {
    value
        .trim()
        .parse()
        .map_err(|_| ScriptError::BadValue(value.to_string()))
}

impl FromStr for ScheduledCommand {
    type Err = ScriptError;

    fn from_str(entry: &str) -> Result<Self, Self::Err> {
        let (frame, action) = entry
            .trim()
            .split_once(':')
            .ok_or_else(|| ScriptError::MissingSeparator(entry.to_string()))?;

        let frame = frame
            .trim()
            .parse()
            .map_err(|_| ScriptError::BadFrame(frame.to_string()))?;

        let action = action.trim().to_lowercase();
        let command = match action.split_once('=') {
            Some(("speed", value)) => Command::SetSpeed(parse_value(value)?),
            Some(("size", value)) => Command::SetMarkerSize(parse_value(value)?),
            Some(_) => return Err(ScriptError::UnknownAction(action)),
            None => match action.as_str() {
                "start" => Command::Start,
                "pause" => Command::Pause,
                "toggle" => Command::Toggle,
                "reset" => Command::Reset,
                _ => return Err(ScriptError::UnknownAction(action)),
            },
        };

        Ok(ScheduledCommand { frame, command })
    }
}

/// Parse a full script, sorted by frame
///
/// # Errors
/// Returns the first entry that fails to parse
pub fn parse_script(script: &str) -> Result<Vec<ScheduledCommand>, ScriptError> {
    let mut commands = script
        .split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect::<Result<Vec<ScheduledCommand>, _>>()?;
    commands.sort_by_key(|c| c.frame);
    Ok(commands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_actions() {
        let script = parse_script("90:start, 60:pause,120:speed=2.5,200:reset,240:SIZE=0.5,5:toggle")
            .expect("script should parse");
        let frames: Vec<u32> = script.iter().map(|c| c.frame).collect();
        assert_eq!(frames, vec![5, 60, 90, 120, 200, 240]);
        assert_eq!(script[0].command, Command::Toggle);
        assert_eq!(script[1].command, Command::Pause);
        assert_eq!(script[3].command, Command::SetSpeed(2.5));
        assert_eq!(script[5].command, Command::SetMarkerSize(0.5));
    }

    #[test]
    fn test_empty_script() {
        assert_eq!(parse_script(""), Ok(vec![]));
        assert_eq!(parse_script(" , "), Ok(vec![]));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "pause".parse::<ScheduledCommand>(),
            Err(ScriptError::MissingSeparator(_))
        ));
        assert!(matches!(
            "-3:pause".parse::<ScheduledCommand>(),
            Err(ScriptError::BadFrame(_))
        ));
        assert!(matches!(
            "3:speed=fast".parse::<ScheduledCommand>(),
            Err(ScriptError::BadValue(_))
        ));
        assert!(matches!(
            "3:zoom=2".parse::<ScheduledCommand>(),
            Err(ScriptError::UnknownAction(_))
        ));
        assert!(matches!(
            "3:explode".parse::<ScheduledCommand>(),
            Err(ScriptError::UnknownAction(_))
        ));
    }
}
