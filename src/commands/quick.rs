//! Quick scan: the hottest pickups still available in your league.

use serde::Serialize;

use crate::{
    analysis::waiver::{
        find_available_players, players_trending_down, rostered_ids, AvailablePlayer,
        DroppingPlayer,
    },
    cli::CommonArgs,
    sleeper::types::TrendType,
    Result,
};

use super::common::{player_line, print_json, with_commas, CommandContext};

const TRENDING_LIMIT: u32 = 10;
const PICKUPS_SHOWN: usize = 5;

#[derive(Debug, Serialize)]
struct QuickReport {
    available: Vec<AvailablePlayer>,
    trending_down: Vec<DroppingPlayer>,
}

pub async fn handle_quick(args: CommonArgs) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;

    let adds = ctx.trending(TrendType::Add, TRENDING_LIMIT).await?;
    let drops = ctx.trending(TrendType::Drop, TRENDING_LIMIT).await?;

    let mut available = find_available_players(&rostered_ids(&ctx.rosters), &ctx.directory, &adds);
    available.truncate(PICKUPS_SHOWN);
    let trending_down = players_trending_down(&ctx.my_player_ids, &ctx.directory, &drops);

    if args.json {
        return print_json(&QuickReport {
            available,
            trending_down,
        });
    }

    println!("Quick scan for {}", ctx.league.name.as_deref().unwrap_or("your league"));
    println!();

    if available.is_empty() {
        println!("No trending players available on waivers right now.");
    } else {
        println!("🔥 TOP AVAILABLE PICKUPS:");
        for (i, a) in available.iter().enumerate() {
            println!(
                "{}. {} - {} adds",
                i + 1,
                player_line(&a.player),
                with_commas(a.trend_count)
            );
        }
    }

    println!();
    if trending_down.is_empty() {
        println!("✓ None of your players are trending down");
    } else {
        println!("⚠ YOUR PLAYERS BEING DROPPED:");
        for d in &trending_down {
            println!(
                "  {} - {} drops",
                player_line(&d.player),
                with_commas(d.drop_count)
            );
        }
    }

    Ok(())
}
