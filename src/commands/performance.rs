//! Underperformer report over the last few weeks.

use serde::Serialize;

use crate::{
    analysis::performance::{
        find_poor_performers, week_window, weekly_series, PlayerSeries, PoorPerformer,
    },
    cli::CommonArgs,
    Result, Week,
};

use super::common::{player_line, print_json, CommandContext};

/// Options for the performance command
#[derive(Debug, Clone)]
pub struct PerformanceParams {
    pub common: CommonArgs,
    pub weeks_back: u16,
    pub threshold: f64,
    pub series: bool,
}

#[derive(Debug, Serialize)]
struct PerformanceReport {
    weeks: Vec<Week>,
    threshold: f64,
    poor_performers: Vec<PoorPerformer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    series: Option<Vec<PlayerSeries>>,
}

pub async fn handle_performance(params: PerformanceParams) -> Result<()> {
    let ctx = CommandContext::new(&params.common).await?;

    let current = ctx.evaluation_week().await?;
    let weeks = week_window(current, params.weeks_back);
    let weekly = ctx.client.get_weeks_stats(ctx.season, &weeks).await;

    let poor = find_poor_performers(&ctx.my_player_ids, &ctx.directory, &weekly, params.threshold);
    let series = params
        .series
        .then(|| weekly_series(&ctx.my_player_ids, &ctx.directory, &weekly));

    if params.common.json {
        return print_json(&PerformanceReport {
            weeks,
            threshold: params.threshold,
            poor_performers: poor,
            series,
        });
    }

    let weeks_with_data = weekly.iter().filter(|(_, s)| !s.is_empty()).count();
    match (weeks.first(), weeks.last()) {
        (Some(first), Some(last)) => println!("Analyzing weeks {first} through {last}..."),
        _ => println!("No weeks to analyze."),
    }

    if weeks_with_data == 0 {
        println!("⚠ No recent performance data available from Sleeper.");
        return Ok(());
    }

    if poor.is_empty() {
        println!(
            "✓ No players scored below {} points in the last {} weeks",
            params.threshold, weeks_with_data
        );
    } else {
        println!("📉 UNDERPERFORMERS (< {} pts):", params.threshold);
        for (i, p) in poor.iter().enumerate() {
            println!(
                "{}. {} - {}/{} poor weeks",
                i + 1,
                player_line(&p.player),
                p.total_poor_weeks(),
                weeks_with_data
            );
            let recent: Vec<String> = p
                .poor_weeks
                .iter()
                .rev()
                .take(2)
                .rev()
                .map(|w| format!("{:.1}", w.points))
                .collect();
            println!("   Recent poor weeks: {} pts", recent.join(", "));
        }
    }

    if let Some(series) = series {
        println!();
        print!("{:<24}", "Player");
        for (week, _) in weekly.iter().filter(|(_, s)| !s.is_empty()) {
            print!(" {:>6}", format!("W{week}"));
        }
        println!();
        for row in &series {
            print!(
                "{:<24}",
                row.player.display_name().chars().take(24).collect::<String>()
            );
            for w in &row.weeks {
                print!(" {:>6.1}", w.points);
            }
            println!();
        }
    }

    Ok(())
}
