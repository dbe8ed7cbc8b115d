//! Shooting-schedule types produced by the generation relay.
//!
//! Field names follow the JSON the dashboards render (`camelCase`, with the
//! literal `sunrise/sunset` key). Every field is required on decode so a
//! provider response either fills the whole shape or is rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's shooting plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    pub id: i64,
    /// 1-based shooting day number.
    pub day: i64,
    /// Calendar date, `YYYY-MM-DD` on the wire.
    pub date: NaiveDate,
    pub location: String,
    pub general_call: String,
    pub first_shot: String,
    pub est_wrap: String,
    #[serde(rename = "sunrise/sunset", alias = "sunriseSunset")]
    pub sunrise_sunset: String,
    /// Predicted weather condition.
    pub weather: String,
    /// Free text. The first day carries the project summary.
    pub notes: String,
    pub scenes: Vec<Scene>,
    pub cast_calls: Vec<CastCall>,
}

/// A scene scheduled within a [`ScheduleDay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub scene_number: SceneNumber,
    pub description: String,
    pub cast: CastMembers,
    pub start_time: String,
    pub end_time: String,
}

/// A character's call for a [`ScheduleDay`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastCall {
    pub character: String,
    /// Actor placeholder, normally `"TBD"`.
    pub actor: String,
    pub status: String,
    /// Hair / makeup / wardrobe call.
    pub hmw: CallFlag,
    pub on_set: CallFlag,
}

/// Scene numbers come back either as plain numbers (`12`) or as script
/// labels (`"12A"`). Both are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SceneNumber {
    Number(i64),
    Label(String),
}

/// The cast of a scene: a list of names or a single comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CastMembers {
    List(Vec<String>),
    Joined(String),
}

impl CastMembers {
    /// Individual cast member names, in order, with blanks dropped.
    pub fn names(&self) -> Vec<&str> {
        match self {
            CastMembers::List(names) => names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect(),
            CastMembers::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }
}

/// A call-sheet flag: either a yes/no marker or a call time such as `"06:30"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CallFlag {
    Flag(bool),
    Time(String),
}
