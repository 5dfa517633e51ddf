//! Static reference data: franchise tables, stat categories, role labels.
//!
//! Abbreviation tables carry alias keys (e.g. `WAS`/`WSH`) that map to the
//! same franchise, so the mappings are not invertible.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

const NFL_TEAM_TABLE: &[(&str, &str)] = &[
    ("ARI", "Arizona Cardinals"),
    ("ATL", "Atlanta Falcons"),
    ("BAL", "Baltimore Ravens"),
    ("BUF", "Buffalo Bills"),
    ("CAR", "Carolina Panthers"),
    ("CHI", "Chicago Bears"),
    ("CIN", "Cincinnati Bengals"),
    ("CLE", "Cleveland Browns"),
    ("DAL", "Dallas Cowboys"),
    ("DEN", "Denver Broncos"),
    ("DET", "Detroit Lions"),
    ("GB", "Green Bay Packers"),
    ("HOU", "Houston Texans"),
    ("IND", "Indianapolis Colts"),
    ("JAX", "Jacksonville Jaguars"),
    ("KC", "Kansas City Chiefs"),
    ("LV", "Las Vegas Raiders"),
    ("LAC", "Los Angeles Chargers"),
    ("LAR", "Los Angeles Rams"),
    ("MIA", "Miami Dolphins"),
    ("MIN", "Minnesota Vikings"),
    ("NE", "New England Patriots"),
    ("NO", "New Orleans Saints"),
    ("NYG", "New York Giants"),
    ("NYJ", "New York Jets"),
    ("PHI", "Philadelphia Eagles"),
    ("PIT", "Pittsburgh Steelers"),
    ("SF", "San Francisco 49ers"),
    ("SEA", "Seattle Seahawks"),
    ("TB", "Tampa Bay Buccaneers"),
    ("TEN", "Tennessee Titans"),
    ("WAS", "Washington Commanders"),
    ("WSH", "Washington Commanders"),
];

const NBA_TEAM_TABLE: &[(&str, &str)] = &[
    ("ATL", "Atlanta Hawks"),
    ("BOS", "Boston Celtics"),
    ("BKN", "Brooklyn Nets"),
    ("CHA", "Charlotte Hornets"),
    ("CHI", "Chicago Bulls"),
    ("CLE", "Cleveland Cavaliers"),
    ("DAL", "Dallas Mavericks"),
    ("DEN", "Denver Nuggets"),
    ("DET", "Detroit Pistons"),
    ("GS", "Golden State Warriors"),
    ("GSW", "Golden State Warriors"),
    ("HOU", "Houston Rockets"),
    ("IND", "Indiana Pacers"),
    ("LAC", "Los Angeles Clippers"),
    ("LA", "Los Angeles Clippers"),
    ("LAL", "Los Angeles Lakers"),
    ("MEM", "Memphis Grizzlies"),
    ("MIA", "Miami Heat"),
    ("MIL", "Milwaukee Bucks"),
    ("MIN", "Minnesota Timberwolves"),
    ("NO", "New Orleans Pelicans"),
    ("NOP", "New Orleans Pelicans"),
    ("NY", "New York Knicks"),
    ("NYK", "New York Knicks"),
    ("OKC", "Oklahoma City Thunder"),
    ("ORL", "Orlando Magic"),
    ("PHI", "Philadelphia 76ers"),
    ("PHX", "Phoenix Suns"),
    ("POR", "Portland Trail Blazers"),
    ("SAC", "Sacramento Kings"),
    ("SA", "San Antonio Spurs"),
    ("SAS", "San Antonio Spurs"),
    ("TOR", "Toronto Raptors"),
    ("UTA", "Utah Jazz"),
    ("UTAH", "Utah Jazz"),
    ("WAS", "Washington Wizards"),
    ("WSH", "Washington Wizards"),
];

/// MLB franchises appear only in the team listing; no abbreviation lookup
/// is ever needed for them.
const MLB_TEAM_NAMES: &[&str] = &[
    "Arizona Diamondbacks",
    "Atlanta Braves",
    "Baltimore Orioles",
    "Boston Red Sox",
    "Chicago Cubs",
    "Chicago White Sox",
    "Cincinnati Reds",
    "Cleveland Guardians",
    "Colorado Rockies",
    "Detroit Tigers",
    "Houston Astros",
    "Kansas City Royals",
    "Los Angeles Angels",
    "Los Angeles Dodgers",
    "Miami Marlins",
    "Milwaukee Brewers",
    "Minnesota Twins",
    "New York Yankees",
    "New York Mets",
    "Oakland Athletics",
    "Philadelphia Phillies",
    "Pittsburgh Pirates",
    "San Diego Padres",
    "San Francisco Giants",
    "Seattle Mariners",
    "St. Louis Cardinals",
    "Tampa Bay Rays",
    "Texas Rangers",
    "Toronto Blue Jays",
    "Washington Nationals",
];

static NFL_TEAMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NFL_TEAM_TABLE.iter().copied().collect());

static NBA_TEAMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| NBA_TEAM_TABLE.iter().copied().collect());

/// Full NFL franchise name for an abbreviation, if known.
pub fn nfl_team_name(abbr: &str) -> Option<&'static str> {
    NFL_TEAMS.get(abbr).copied()
}

/// Full NBA franchise name for an abbreviation, if known.
pub fn nba_team_name(abbr: &str) -> Option<&'static str> {
    NBA_TEAMS.get(abbr).copied()
}

/// Sorted, de-duplicated union of NFL, NBA and MLB franchise names.
pub fn all_team_names() -> Vec<&'static str> {
    let mut names: Vec<&str> = NFL_TEAM_TABLE
        .iter()
        .chain(NBA_TEAM_TABLE.iter())
        .map(|(_, name)| *name)
        .chain(MLB_TEAM_NAMES.iter().copied())
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

/// Coarse role a pick form groups players under.
///
/// NFL athletes are bucketed by their raw position abbreviation; NBA and MLB
/// players each share a single role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleLabel {
    Quarterback,
    RunningBack,
    WideReceiver,
    Kicker,
    NflDefense,
    NbaPlayer,
    MlbPlayer,
}

impl RoleLabel {
    /// Bucket a raw NFL position abbreviation. Unknown or missing
    /// abbreviations fall back to quarterback.
    pub fn from_nfl_abbreviation(abbr: Option<&str>) -> Self {
        match abbr {
            Some("QB") => RoleLabel::Quarterback,
            Some("RB") | Some("FB") => RoleLabel::RunningBack,
            Some("WR") | Some("TE") => RoleLabel::WideReceiver,
            Some("K") | Some("P") => RoleLabel::Kicker,
            Some(
                "LB" | "DE" | "DT" | "CB" | "S" | "SS" | "FS" | "OLB" | "ILB" | "MLB" | "NT"
                | "DB" | "DL" | "EDGE",
            ) => RoleLabel::NflDefense,
            _ => RoleLabel::Quarterback,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleLabel::Quarterback => "Quarterback (QB)",
            RoleLabel::RunningBack => "Running Back (RB)",
            RoleLabel::WideReceiver => "Wide Receiver (WR)",
            RoleLabel::Kicker => "Kicker (K)",
            RoleLabel::NflDefense => "NFL Defense Player",
            RoleLabel::NbaPlayer => "NBA Player",
            RoleLabel::MlbPlayer => "MLB Player",
        }
    }
}

impl fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const QB_CATEGORIES: &[&str] = &[
    "rush_rec_tds",
    "passing_yds",
    "passing_tds",
    "rushing_yds",
    "rushing_att",
    "passing_att",
    "passing_comps",
    "passing_ints",
    "fantasy_points",
    "passing_and_rushing_yds",
    "passing_long",
    "period_1_passing_yds",
    "period_1_rushing_yds",
    "period_1_passing_tds",
    "period_1_2_passing_yds",
    "period_1_2_rushing_yds",
    "period_1_2_passing_tds",
    "fumbles_lost",
    "25_pass_yds_each_quarter",
    "passing_comp_pct",
    "period_first_attempt_completions",
];

const RB_CATEGORIES: &[&str] = &[
    "rush_rec_tds",
    "rushing_yds",
    "receiving_yds",
    "receiving_rec",
    "rushing_att",
    "fantasy_points",
    "rush_rec_yds",
    "receiving_long",
    "rushing_long",
    "period_first_touchdown_scored",
    "rushing_tds",
    "receiving_tds",
    "period_1_receiving_yds",
    "period_1_rushing_yds",
    "period_1_receiving_rec",
    "period_1_rush_rec_tds",
    "period_1_2_receiving_yds",
    "period_1_2_rushing_yds",
    "period_1_2_receiving_rec",
    "period_1_2_rush_rec_tds",
    "fumbles_lost",
];

const WR_CATEGORIES: &[&str] = &[
    "rush_rec_tds",
    "receiving_yds",
    "receiving_rec",
    "fantasy_points",
    "receiving_tgts",
    "receiving_long",
    "period_first_touchdown_scored",
    "period_1_receiving_yds",
    "period_1_receiving_rec",
    "period_1_rush_rec_tds",
    "period_1_2_receiving_yds",
    "period_1_2_receiving_rec",
    "period_1_2_rush_rec_tds",
    "fumbles_lost",
];

const K_CATEGORIES: &[&str] = &["field_goals_made", "extra_points_made", "kicking_points"];

const NBA_CATEGORIES: &[&str] = &[
    "points",
    "three_points_made",
    "rebounds",
    "assists",
    "pts_rebs_asts",
    "rebs_asts",
    "pts_rebs",
    "pts_asts",
    "double_doubles",
    "triple_doubles",
    "period_1_points",
    "period_1_rebounds",
    "period_1_assists",
    "period_1_three_points_made",
    "period_1_pts_rebs_asts",
    "fantasy_points",
    "turnovers",
    "steals",
    "free_throws_made",
    "period_1_2_points",
    "period_1_2_three_points_made",
    "period_1_2_assists",
    "period_1_2_pts_rebs_asts",
    "period_first_fg_attempt",
    "period_first_three_attempt",
    "period_1_first_5_min_pra",
    "period_1_first_5_min_pts",
    "offensive_rebounds",
];

const MLB_CATEGORIES: &[&str] = &[
    "strikeouts",
    "fantasy_points",
    "pitch_outs",
    "hits_allowed",
    "runs_allowed",
    "walks_allowed",
    "period_1_strikeouts",
    "period_1_total_runs_allowed",
    "period_1_pitch_count",
    "period_1_batters_faced",
    "period_1_hits_allowed",
    "period_1_2_3_total_runs_allowed",
    "period_first_pitch_of_game_velocity",
];

const NFL_DEFENSE_CATEGORIES: &[&str] = &["sacks", "tackles_and_assists", "assists", "tackles"];

/// Stat categories offered for each role, in form display order.
pub fn stat_categories() -> BTreeMap<&'static str, &'static [&'static str]> {
    let mut map: BTreeMap<&str, &[&str]> = BTreeMap::new();
    map.insert(RoleLabel::Quarterback.as_str(), QB_CATEGORIES);
    map.insert(RoleLabel::RunningBack.as_str(), RB_CATEGORIES);
    map.insert(RoleLabel::WideReceiver.as_str(), WR_CATEGORIES);
    map.insert(RoleLabel::Kicker.as_str(), K_CATEGORIES);
    map.insert(RoleLabel::NbaPlayer.as_str(), NBA_CATEGORIES);
    map.insert(RoleLabel::MlbPlayer.as_str(), MLB_CATEGORIES);
    map.insert(RoleLabel::NflDefense.as_str(), NFL_DEFENSE_CATEGORIES);
    map
}
