//! Weekly top performers report.

use serde::Serialize;
use std::{collections::HashMap, io::Write, path::Path};
use tracing::{info, warn};

use super::common::CommandContext;
use crate::{
    cli::types::{PlayerId, Season, SeasonType, Week},
    scoring::ScoreResolver,
    sleeper::{PlayerRecord, StatsProvider, WeeklyStatsTable},
    PlayoffsError, Result,
};

/// One CSV row / table line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformerRow {
    pub player_id: String,
    pub name: String,
    pub position: String,
    pub team: String,
    pub ppr_points: f64,
    pub week: u16,
}

/// Every player with stats and a directory entry, best first.
///
/// Players without a scoring field count 0; ties are ordered by id.
pub fn rank_performers(
    stats: &WeeklyStatsTable,
    players: &[PlayerRecord],
    resolver: &ScoreResolver,
) -> Vec<PerformerRow> {
    let by_id: HashMap<&PlayerId, &PlayerRecord> = players.iter().map(|p| (&p.id, p)).collect();

    let mut rows: Vec<PerformerRow> = stats
        .records
        .iter()
        .filter_map(|(id, record)| {
            let player = by_id.get(id)?;
            let points = resolver
                .points_from_record(record)
                .map(|(_, points)| points)
                .unwrap_or(0.0);
            Some(PerformerRow {
                player_id: id.to_string(),
                name: player.full_name(),
                position: player.position.map(|p| p.to_string()).unwrap_or_default(),
                team: player.team.clone().unwrap_or_default(),
                ppr_points: points,
                week: stats.week.as_u16(),
            })
        })
        .collect();

    rows.sort_by(|a, b| {
        b.ppr_points
            .total_cmp(&a.ppr_points)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    rows
}

/// Rank the first candidate week whose stats can be fetched.
///
/// A failed fetch or an empty week moves on to the next candidate.
pub async fn find_top_performers<S: StatsProvider + ?Sized>(
    stats: &S,
    season: Season,
    season_type: SeasonType,
    weeks: &[Week],
    resolver: &ScoreResolver,
) -> Result<(Week, Vec<PerformerRow>)> {
    let players = stats.fetch_player_directory().await?;

    for &week in weeks {
        info!("Attempting to fetch Week {} data...", week);
        match stats.fetch_weekly_stats(season, season_type, week).await {
            Ok(table) if !table.is_empty() => {
                return Ok((week, rank_performers(&table, &players, resolver)));
            }
            Ok(_) => warn!("No stats published for Week {}", week),
            Err(e) => warn!("Error fetching Week {} data: {}", week, e),
        }
    }

    Err(PlayoffsError::NoWeeklyStats {
        weeks: weeks.iter().map(Week::as_u16).collect(),
    })
}

/// Write rows as CSV with a header line.
pub fn write_csv<W: Write>(writer: W, rows: &[PerformerRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn print_table(week: Week, rows: &[PerformerRow]) {
    println!("\nTop Week {} Performers:", week);
    println!("{:<28} {:<4} {:<4} {:>8}", "name", "pos", "team", "ppr");
    for row in rows {
        println!(
            "{:<28} {:<4} {:<4} {:>8.2}",
            row.name, row.position, row.team, row.ppr_points
        );
    }
}

/// Handle the top-performers command
pub async fn handle_top_performers(
    ctx: &CommandContext,
    weeks: &[Week],
    limit: Option<usize>,
    csv_path: Option<&Path>,
) -> Result<()> {
    let (week, rows) = find_top_performers(
        &ctx.stats,
        ctx.settings.season,
        ctx.settings.season_type,
        weeks,
        &ctx.resolver(),
    )
    .await?;

    let limit = limit.unwrap_or(ctx.settings.top);
    print_table(week, &rows[..limit.min(rows.len())]);

    if let Some(path) = csv_path {
        write_csv(std::fs::File::create(path)?, &rows)?;
        println!("\nStats saved to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::Position;
    use serde_json::json;

    fn player(id: &str, first: &str, last: &str, position: Option<Position>) -> PlayerRecord {
        PlayerRecord {
            id: PlayerId::new(id),
            first_name: first.to_string(),
            last_name: last.to_string(),
            position,
            team: Some("KC".to_string()),
        }
    }

    fn stats() -> WeeklyStatsTable {
        let rec = |v: serde_json::Value| serde_json::from_value(v).unwrap();
        WeeklyStatsTable::new(Season::new(2024), SeasonType::Regular, Week::new(13))
            .with_record("1", rec(json!({"pts_ppr": 12.0})))
            .with_record("2", rec(json!({"pts_ppr": 31.4})))
            .with_record("3", rec(json!({"rush_yd": 3})))
            .with_record("999", rec(json!({"pts_ppr": 50.0})))
    }

    fn players() -> Vec<PlayerRecord> {
        vec![
            player("1", "Travis", "Kelce", Some(Position::TE)),
            player("2", "Patrick", "Mahomes", Some(Position::QB)),
            player("3", "Harrison", "Butker", Some(Position::K)),
            player("4", "Isiah", "Pacheco", Some(Position::RB)),
        ]
    }

    #[test]
    fn test_rank_performers() {
        let rows = rank_performers(&stats(), &players(), &ScoreResolver::default());

        let names: Vec<_> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Patrick Mahomes", "Travis Kelce", "Harrison Butker"]);
        assert_eq!(rows[0].ppr_points, 31.4);
        assert_eq!(rows[2].ppr_points, 0.0);
        assert_eq!(rows[0].position, "QB");
        assert_eq!(rows[0].week, 13);
    }

    #[test]
    fn test_write_csv_columns() {
        let rows = rank_performers(&stats(), &players(), &ScoreResolver::default());
        let mut buf = Vec::new();
        write_csv(&mut buf, &rows[..1]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "player_id,name,position,team,ppr_points,week\n2,Patrick Mahomes,QB,KC,31.4,13\n"
        );
    }
}
