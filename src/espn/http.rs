use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Cross-sport player search endpoint.
pub const SEARCH_URL: &str = "https://site.api.espn.com/apis/common/v3/search";

/// Base path for per-team site-API resources (schedules).
pub const SITE_API_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Base path for per-athlete core-API documents (position data).
pub const CORE_API_BASE: &str = "https://sports.core.api.espn.com/v2/sports";

const USER_AGENT: &str = "Mozilla/5.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Thin client over ESPN's public site API. No credentials; a fixed
/// browser-style User-Agent and a 10 second timeout on every request.
pub struct SiteApiClient {
    http: Client,
}

impl SiteApiClient {
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Search players by free-text query, scoped to one sport/league.
    pub async fn search_players(&self, query: &str, sport: &str, league: &str) -> Result<Value> {
        let params = [
            ("query", query),
            ("limit", "10"),
            ("type", "player"),
            ("sport", sport),
            ("league", league),
        ];
        debug!(query, sport, league, "searching players");

        let res = self
            .http
            .get(SEARCH_URL)
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// Athlete detail document; the NFL position block lives here.
    pub async fn athlete_detail(&self, sport: &str, league: &str, athlete_id: &str) -> Result<Value> {
        let url = format!("{CORE_API_BASE}/{sport}/leagues/{league}/athletes/{athlete_id}");
        debug!(%url, "fetching athlete detail");

        let res = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    /// Full season schedule for one team, in provider event order.
    pub async fn team_schedule(&self, sport: &str, league: &str, team_id: &str) -> Result<Value> {
        let url = format!("{SITE_API_BASE}/{sport}/{league}/teams/{team_id}/schedule");
        debug!(%url, "fetching team schedule");

        let res = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }
}
