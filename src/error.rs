//! Error types for the Yahoo fantasy baseball CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlbError>;

#[derive(Error, Debug)]
pub enum FlbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid date: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Failed to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Credential file rejected: {message}")]
    Auth { message: String },

    #[error("Unexpected payload shape: {context}")]
    UnexpectedPayload { context: String },

    #[error("No league found for season {season}")]
    MissingLeague { season: u16 },

    #[error("Team {team_key} is not in the league team list")]
    MissingTeam { team_key: String },

    #[error("No opponent named '{name}' in this league")]
    OpponentNotFound { name: String },

    #[error("No matchup opponent found for team {team_key}")]
    MatchupNotFound { team_key: String },
}

impl FlbError {
    /// Shorthand for a payload-shape error with a locating context string.
    pub fn payload(context: impl Into<String>) -> Self {
        FlbError::UnexpectedPayload {
            context: context.into(),
        }
    }
}
