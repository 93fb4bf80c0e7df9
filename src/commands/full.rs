//! Full roster analysis with swap suggestions.

use serde::Serialize;

use crate::{
    analysis::{
        performance::{find_poor_performers, week_window, PoorPerformer, POOR_PERFORMANCE_THRESHOLD},
        waiver::{
            find_available_players, players_trending_down, rostered_ids, swap_suggestions,
            DroppingPlayer, PositionSwap,
        },
        Player,
    },
    cli::CommonArgs,
    sleeper::types::TrendType,
    Result,
};

use super::common::{
    group_by_position, player_line, position_label, print_json, with_commas, CommandContext,
};

const TRENDING_LIMIT: u32 = 25;
const PERFORMANCE_WEEKS: u16 = 2;
const POOR_PERFORMERS_SHOWN: usize = 3;

#[derive(Debug, Serialize)]
struct FullReport<'a> {
    roster: Vec<&'a Player>,
    trending_down: Vec<DroppingPlayer>,
    poor_performers: Vec<PoorPerformer>,
    swaps: Vec<PositionSwap>,
}

pub async fn handle_full(args: CommonArgs) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;

    let adds = ctx.trending(TrendType::Add, TRENDING_LIMIT).await?;
    let drops = ctx.trending(TrendType::Drop, TRENDING_LIMIT).await?;
    let available = find_available_players(&rostered_ids(&ctx.rosters), &ctx.directory, &adds);
    let trending_down = players_trending_down(&ctx.my_player_ids, &ctx.directory, &drops);

    let week = ctx.evaluation_week().await?;
    let weekly = ctx
        .client
        .get_weeks_stats(ctx.season, &week_window(week, PERFORMANCE_WEEKS))
        .await;
    let mut poor = find_poor_performers(
        &ctx.my_player_ids,
        &ctx.directory,
        &weekly,
        POOR_PERFORMANCE_THRESHOLD,
    );
    poor.truncate(POOR_PERFORMERS_SHOWN);

    let swaps = swap_suggestions(&ctx.my_player_ids, &ctx.directory, &available);
    let roster = ctx.my_players();

    if args.json {
        return print_json(&FullReport {
            roster,
            trending_down,
            poor_performers: poor,
            swaps,
        });
    }

    println!("📋 YOUR ROSTER ({} players):", ctx.my_player_ids.len());
    for (position, players) in group_by_position(roster.iter().copied()) {
        let names: Vec<String> = players
            .iter()
            .map(|p| {
                let dropping = trending_down.iter().any(|d| d.player.id == p.id);
                format!(
                    "{} ({}){}",
                    p.display_name(),
                    p.team_label(),
                    if dropping { " ⚠" } else { "" }
                )
            })
            .collect();
        println!("{}: {}", position_label(position), names.join(", "));
    }

    if !trending_down.is_empty() {
        println!();
        println!("⚠ ROSTER ALERTS - Players Being Dropped:");
        for d in &trending_down {
            println!(
                "  {} - {} drops",
                player_line(&d.player),
                with_commas(d.drop_count)
            );
        }
    }

    if !poor.is_empty() {
        println!();
        println!("📉 RECENT POOR PERFORMERS (< {POOR_PERFORMANCE_THRESHOLD} pts):");
        for p in &poor {
            println!(
                "  {} - {}/{} recent poor weeks",
                player_line(&p.player),
                p.total_poor_weeks(),
                PERFORMANCE_WEEKS
            );
        }
    }

    if !swaps.is_empty() {
        println!();
        println!("🔄 SWAP RECOMMENDATIONS:");
        for swap in &swaps {
            println!();
            println!("{} Options:", position_label(swap.position));
            for option in &swap.options {
                println!(
                    "  ⬆ {} ({}) - {} adds",
                    option.player.display_name(),
                    option.player.team_label(),
                    with_commas(option.trend_count)
                );
            }
            if !swap.my_players.is_empty() {
                let mine: Vec<&str> = swap.my_players.iter().map(|p| p.display_name()).collect();
                println!("  Your {}s: {}", position_label(swap.position), mine.join(", "));
            }
        }
    }

    Ok(())
}
