/*!
Helper crate that declares the roster types shared between the Puppy Bowl browser client
([puppy-bowl-client](https://docs.rs/puppy-bowl-client)) and the in-memory mock of the API
([puppy-bowl-mock-server](https://docs.rs/puppy-bowl-mock-server)).

Field names follow the camelCase JSON of the public Puppy Bowl API.
*/

use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

pub mod envelope;

/// Root of the public Puppy Bowl API, without the cohort segment.
pub const API_BASE: &str = "https://fsa-puppy-bowl.herokuapp.com/api";

/// Base URL for one cohort, e.g. `https://fsa-puppy-bowl.herokuapp.com/api/2109-UNF-HY-WEB-PT`.
pub fn api_url(api_base: &str, cohort: &str) -> String {
    format!("{}/{}", api_base.trim_end_matches('/'), cohort)
}

/// Unique identifier of a player, assigned by the API on creation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Wrap the raw integer into a PlayerId
    pub fn new(inner: u64) -> Self {
        PlayerId(inner)
    }

    /// Acquire the underlying type
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = <u64 as FromStr>::Err;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlayerId(s.parse()?))
    }
}

/// Unique identifier of a team.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    pub fn new(inner: u64) -> Self {
        TeamId(inner)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for TeamId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a player currently sits.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStatus {
    #[default]
    Bench,
    Field,
}

impl PlayerStatus {
    pub const ALL: [PlayerStatus; 2] = [PlayerStatus::Bench, PlayerStatus::Field];

    /// The literal used on the wire and as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerStatus::Bench => "bench",
            PlayerStatus::Field => "field",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            PlayerStatus::Bench => "Bench",
            PlayerStatus::Field => "Field",
        }
    }
}

impl Display for PlayerStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a status literal other than `bench` or `field`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown player status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for PlayerStatus {
    type Err = UnknownStatus;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bench" => Ok(PlayerStatus::Bench),
            "field" => Ok(PlayerStatus::Field),
            other => Err(UnknownStatus(other.to_owned())),
        }
    }
}

/// A named grouping a player may belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub score: Option<i64>,
}

/// A roster entry as reported by the API.
///
/// The list endpoint leaves `team` out; only the single player endpoint embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub status: PlayerStatus,
    pub image_url: String,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub cohort_id: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub team: Option<Team>,
}

impl Player {
    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().map(|team| team.name.as_str())
    }
}

/// Body of `POST /players`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    pub breed: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub status: PlayerStatus,
}
