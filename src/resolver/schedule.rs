//! Next-game derivation from a team schedule document.

use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, Timelike};
use serde_json::Value;

use crate::espn::fields::{arr_field, first, obj_field, str_field};

/// The first game found on or after the reference date.
#[derive(Debug, Clone, PartialEq)]
pub struct NextGame {
    /// Opposing team's abbreviation as the provider reports it; may be
    /// empty when the competitor block omits it.
    pub opponent_abbr: String,
    /// Provider-supplied opponent display name, when present.
    pub opponent_name: Option<String>,
    /// UTC calendar date of the game.
    pub date: NaiveDate,
}

/// Date used as the lower bound when scanning for the next game.
///
/// From 22:00 local wall-clock time the current date counts as already
/// over, so a game that started earlier tonight is not offered as "next".
pub fn reference_date(now: NaiveDateTime) -> NaiveDate {
    if now.hour() >= 22 {
        now.date() + Days::new(1)
    } else {
        now.date()
    }
}

/// Event timestamps arrive as ISO-8601 UTC, with or without a seconds
/// component. Returns the UTC calendar date.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%MZ")
        .ok()
        .map(|parsed| parsed.date())
}

/// Scan schedule events in provider order for the first one dated on or
/// after `reference`, and pull out the competitor that is not `team_abbr`.
///
/// Events with missing or unparseable dates are skipped. The scan commits
/// to the first qualifying event: if its competitor block is malformed the
/// result is "no next game", not the game after it.
pub fn next_game(events: &[Value], team_abbr: &str, reference: NaiveDate) -> Option<NextGame> {
    for event in events {
        let Some(raw_date) = str_field(event, "date") else {
            continue;
        };
        let Some(date) = parse_event_date(raw_date) else {
            continue;
        };
        if date < reference {
            continue;
        }

        return first(event, "competitions")
            .map(|competition| arr_field(competition, "competitors"))
            .unwrap_or(&[])
            .iter()
            .find_map(|competitor| {
                let team = obj_field(competitor, "team")?;
                let abbr = str_field(team, "abbreviation").unwrap_or("");
                if abbr == team_abbr {
                    return None;
                }
                Some(NextGame {
                    opponent_abbr: abbr.to_string(),
                    opponent_name: str_field(team, "displayName").map(str::to_string),
                    date,
                })
            });
    }
    None
}
