//! CSV export endpoint.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::AppState;
use crate::error::{AppError, Result};
use crate::store::Entry;

/// Fixed column order the spreadsheet template expects.
const CSV_COLUMNS: [&str; 10] = [
    "Player",
    "PlayerTeam",
    "OppTeam",
    "Position",
    "Stat",
    "LineMode",
    "LineValue",
    "Pick",
    "Level",
    "Multiplier",
];

const EXPORT_FILE_NAME: &str = "propboard_entries.csv";

pub async fn export_csv(State(state): State<AppState>) -> Response {
    let entries = state.store.list();
    if entries.is_empty() {
        return Json(json!({"error": "No entries to export"})).into_response();
    }

    match render_csv(&entries) {
        Ok(body) => (
            [
                (header::CONTENT_TYPE, "text/csv".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                ),
            ],
            body,
        )
            .into_response(),
        Err(err) => Json(json!({"error": err.to_string()})).into_response(),
    }
}

/// Render entries in the fixed column order; missing fields become blank
/// cells.
fn render_csv(entries: &[Entry]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS)?;

    for entry in entries {
        writer.write_record(&[
            text(&entry.player),
            text(&entry.player_team),
            text(&entry.opponent_team),
            text(&entry.position),
            text(&entry.stat_category),
            text(&entry.line_mode),
            number(entry.line_value),
            text(&entry.pick),
            text(&entry.confidence_level),
            number(entry.multiplier),
        ])?;
    }

    writer.into_inner().map_err(|err| AppError::Io(err.into_error()))
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

fn number(field: Option<f64>) -> String {
    field.map(|value| value.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_csv_fixed_header_and_blank_cells() {
        let full = Entry {
            id: Some(0),
            player: Some("Josh Allen".to_string()),
            player_team: Some("Buffalo Bills".to_string()),
            opponent_team: Some("Miami Dolphins".to_string()),
            position: Some("Quarterback (QB)".to_string()),
            stat_category: Some("passing_yds".to_string()),
            line_mode: Some("over".to_string()),
            line_value: Some(250.5),
            pick: Some("over".to_string()),
            confidence_level: Some("high".to_string()),
            multiplier: Some(3.0),
        };
        let missing_pick = Entry {
            id: Some(1),
            player: Some("Nikola Jokić".to_string()),
            ..Entry::default()
        };

        let body = render_csv(&[full, missing_pick]).unwrap();
        let rendered = String::from_utf8(body).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Player,PlayerTeam,OppTeam,Position,Stat,LineMode,LineValue,Pick,Level,Multiplier"
        );
        assert_eq!(
            lines[1],
            "Josh Allen,Buffalo Bills,Miami Dolphins,Quarterback (QB),passing_yds,over,250.5,over,high,3"
        );
        assert_eq!(lines[2], "Nikola Jokić,,,,,,,,,");
    }
}
