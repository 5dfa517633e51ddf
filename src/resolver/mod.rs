//! Player resolution: search, disambiguation, and next-opponent lookup.
//!
//! A resolution never fails outright: provider failures, empty or ambiguous
//! candidate sets, and anything unexpected all come back as a structured
//! [`LookupResult`] the client can render.

pub mod normalize;
pub mod schedule;


use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::espn::fields::{arr_field, first, id_field, obj_field, str_field};
use crate::espn::SiteApiClient;
use crate::reference::{self, RoleLabel};

use normalize::normalize_name;
use schedule::{next_game, reference_date};

/// How many candidates an ambiguous result lists at most.
const MAX_AMBIGUOUS_CANDIDATES: usize = 5;

/// League a single resolution attempt runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum League {
    Nfl,
    Nba,
}

impl League {
    /// Sport segment in provider URLs.
    fn sport(&self) -> &'static str {
        match self {
            League::Nfl => "football",
            League::Nba => "basketball",
        }
    }

    /// League segment in provider URLs.
    fn slug(&self) -> &'static str {
        match self {
            League::Nfl => "nfl",
            League::Nba => "nba",
        }
    }

    /// Display tag carried in resolved results.
    fn tag(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Nba => "NBA",
        }
    }

    fn team_name(&self, abbr: &str) -> Option<&'static str> {
        match self {
            League::Nfl => reference::nfl_team_name(abbr),
            League::Nba => reference::nba_team_name(abbr),
        }
    }
}

/// Client-supplied league hint. Anything unrecognized behaves as auto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeagueHint {
    Nfl,
    Nba,
    #[default]
    Auto,
}

impl LeagueHint {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "nfl" => LeagueHint::Nfl,
            "nba" => LeagueHint::Nba,
            _ => LeagueHint::Auto,
        }
    }

    /// Ordered resolution strategies; auto tries the NFL first, then the
    /// NBA, short-circuiting on the first non-error outcome.
    fn strategies(&self) -> &'static [League] {
        match self {
            LeagueHint::Nfl => &[League::Nfl],
            LeagueHint::Nba => &[League::Nba],
            LeagueHint::Auto => &[League::Nfl, League::Nba],
        }
    }
}

/// Outcome of a lookup, serialized in the exact shape the client consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LookupResult {
    Resolved(ResolvedPlayer),
    Ambiguous { multiple: Vec<Candidate> },
    Error { error: String },
}

/// A fully resolved player with team and next-game facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlayer {
    pub player: String,
    pub team: String,
    pub team_abbr: String,
    pub next_opponent: Option<String>,
    pub game_date: Option<String>,
    pub league: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_abbr: Option<String>,
}

/// One row of an ambiguous-match disambiguation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub name: Option<String>,
    pub team: String,
}

/// Resolves free-text names against the provider.
pub struct PlayerResolver {
    client: SiteApiClient,
}

impl PlayerResolver {
    pub fn new(client: SiteApiClient) -> Self {
        Self { client }
    }

    /// Resolve `name` against the hinted league(s).
    pub async fn resolve(&self, name: &str, hint: LeagueHint) -> LookupResult {
        let mut last_error = None;

        for league in hint.strategies() {
            match self.resolve_in_league(name, *league).await {
                Ok(result) => return result,
                Err(err) => {
                    debug!(league = league.tag(), %err, "resolution attempt failed");
                    last_error = Some(err);
                }
            }
        }

        match (hint, last_error) {
            (LeagueHint::Auto, _) | (_, None) => LookupResult::Error {
                error: format!("No player found matching '{name}' in NFL or NBA"),
            },
            (_, Some(err)) => LookupResult::Error {
                error: err.to_string(),
            },
        }
    }

    async fn resolve_in_league(&self, name: &str, league: League) -> Result<LookupResult> {
        let search = match self
            .client
            .search_players(name, league.sport(), league.slug())
            .await
        {
            Ok(doc) => doc,
            Err(AppError::Http(err)) if err.is_status() => return Err(AppError::SearchFailed),
            Err(err) => return Err(err),
        };

        let candidates = arr_field(&search, "items");
        if candidates.is_empty() {
            return Err(AppError::PlayerNotFound {
                league: league.tag().to_string(),
                name: name.to_string(),
            });
        }

        let player = match select_candidate(candidates, &normalize_name(name)) {
            Selection::Match(player) => player,
            Selection::Ambiguous(multiple) => return Ok(LookupResult::Ambiguous { multiple }),
        };

        self.resolve_details(player, league).await
    }

    async fn resolve_details(&self, player: &Value, league: League) -> Result<LookupResult> {
        let display_name = str_field(player, "displayName").unwrap_or("Unknown");

        let core = first(player, "teamRelationships").and_then(|rel| obj_field(rel, "core"));
        let team_abbr = core
            .and_then(|core| str_field(core, "abbreviation"))
            .unwrap_or("")
            .to_string();
        let team = core
            .and_then(|core| str_field(core, "displayName"))
            .map(str::to_string)
            .or_else(|| league.team_name(&team_abbr).map(str::to_string))
            .unwrap_or_else(|| "Unknown".to_string());
        let team_id = core.and_then(|core| id_field(core, "id"));

        let (position, position_abbr) = match league {
            League::Nfl => {
                let abbr = match id_field(player, "id") {
                    Some(athlete_id) => self.fetch_position_abbr(&athlete_id).await,
                    None => None,
                };
                let role = RoleLabel::from_nfl_abbreviation(abbr.as_deref());
                (role.to_string(), abbr)
            }
            League::Nba => (RoleLabel::NbaPlayer.to_string(), None),
        };

        let mut next_opponent = None;
        let mut game_date = None;
        if let Some(team_id) = team_id {
            match self
                .client
                .team_schedule(league.sport(), league.slug(), &team_id)
                .await
            {
                Ok(schedule_doc) => {
                    let today = reference_date(Local::now().naive_local());
                    if let Some(game) =
                        next_game(arr_field(&schedule_doc, "events"), &team_abbr, today)
                    {
                        next_opponent = Some(
                            league
                                .team_name(&game.opponent_abbr)
                                .map(str::to_string)
                                .or(game.opponent_name)
                                .unwrap_or_else(|| "Unknown".to_string()),
                        );
                        game_date = Some(game.date.format("%Y-%m-%d").to_string());
                    }
                }
                Err(err) => {
                    warn!(league = league.tag(), %team_id, %err, "schedule fetch failed");
                }
            }
        }

        Ok(LookupResult::Resolved(ResolvedPlayer {
            player: display_name.to_string(),
            team,
            team_abbr,
            next_opponent,
            game_date,
            league: league.tag().to_string(),
            position,
            position_abbr,
        }))
    }

    /// Raw position abbreviation from the athlete detail document.
    /// Best-effort: any failure reads as unknown.
    async fn fetch_position_abbr(&self, athlete_id: &str) -> Option<String> {
        let doc = match self
            .client
            .athlete_detail("football", "nfl", athlete_id)
            .await
        {
            Ok(doc) => doc,
            Err(err) => {
                debug!(athlete_id, %err, "athlete detail fetch failed");
                return None;
            }
        };

        obj_field(&doc, "position")
            .and_then(|position| str_field(position, "abbreviation"))
            .map(str::to_string)
    }
}

enum Selection<'a> {
    Match(&'a Value),
    Ambiguous(Vec<Candidate>),
}

/// Pick among search candidates: a sole candidate wins outright; with
/// several, a unique exact normalized-name match wins; otherwise the first
/// five come back for disambiguation.
fn select_candidate<'a>(candidates: &'a [Value], normalized_query: &str) -> Selection<'a> {
    if let [single] = candidates {
        return Selection::Match(single);
    }

    let mut exact = candidates.iter().filter(|candidate| {
        normalize_name(str_field(candidate, "displayName").unwrap_or_default()) == normalized_query
    });

    match (exact.next(), exact.next()) {
        (Some(single), None) => Selection::Match(single),
        _ => Selection::Ambiguous(
            candidates
                .iter()
                .take(MAX_AMBIGUOUS_CANDIDATES)
                .map(candidate_summary)
                .collect(),
        ),
    }
}

/// Best-effort (name, team abbreviation) pair for the disambiguation list.
fn candidate_summary(candidate: &Value) -> Candidate {
    let team = first(candidate, "teamRelationships")
        .and_then(|rel| obj_field(rel, "core"))
        .and_then(|core| str_field(core, "abbreviation"))
        .unwrap_or("?");

    Candidate {
        name: str_field(candidate, "displayName").map(str::to_string),
        team: team.to_string(),
    }
}
