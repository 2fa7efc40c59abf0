//! Sport-specific abbreviated display names.

use crate::error::BriefNameError;
use std::str::FromStr;

/// Sports that have a brief-name format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sport {
    Football,
    Basketball,
    Baseball,
}

impl Sport {
    /// Format a display name for this sport.
    ///
    /// - football: `J. Smith`
    /// - basketball: `John S.`
    /// - baseball: `J. S.`
    pub fn brief_name(&self, first_name: &str, last_name: &str) -> Result<String, BriefNameError> {
        match self {
            Sport::Football => Ok(format!("{}. {}", initial(first_name)?, last_name)),
            Sport::Basketball => Ok(format!("{} {}.", first_name, initial(last_name)?)),
            Sport::Baseball => Ok(format!(
                "{}. {}.",
                initial(first_name)?,
                initial(last_name)?
            )),
        }
    }
}

impl FromStr for Sport {
    type Err = BriefNameError;

    /// Sport names are matched exactly, as stored by the importer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "football" => Ok(Sport::Football),
            "basketball" => Ok(Sport::Basketball),
            "baseball" => Ok(Sport::Baseball),
            _ => Err(BriefNameError::UnknownSport {
                sport: s.to_string(),
            }),
        }
    }
}

fn initial(name: &str) -> Result<char, BriefNameError> {
    name.chars().next().ok_or(BriefNameError::EmptyName)
}

/// Brief name for a player of `sport`; fails for sports without a format.
pub fn name_brief(first_name: &str, last_name: &str, sport: &str) -> Result<String, BriefNameError> {
    sport.parse::<Sport>()?.brief_name(first_name, last_name)
}
