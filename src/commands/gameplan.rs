//! Weekly game plan.

use crate::{
    analysis::{
        gameplan::{build_gameplan, ActionReason, GameplanAction},
        performance::{find_poor_performers, week_window, POOR_PERFORMANCE_THRESHOLD, WEEKS_TO_ANALYZE},
        waiver::{find_available_players, players_trending_down, rostered_ids},
    },
    cli::CommonArgs,
    sleeper::types::TrendType,
    Result,
};

use super::common::{print_json, with_commas, CommandContext};

const TRENDING_LIMIT: u32 = 25;

fn describe(action: &GameplanAction) -> String {
    let player = action.player();
    let detail = match action.reason() {
        ActionReason::Underperforming { poor_weeks } => {
            format!("{poor_weeks}/{WEEKS_TO_ANALYZE} poor weeks")
        }
        ActionReason::TrendingDown { drop_count } => format!("{} drops", with_commas(*drop_count)),
        ActionReason::TrendingUp { add_count } => format!("{} adds", with_commas(*add_count)),
    };
    format!(
        "{} {} ({}) - {}",
        if action.is_drop() { "DROP" } else { "ADD " },
        player.display_name(),
        player.position_label(),
        detail
    )
}

pub async fn handle_gameplan(args: CommonArgs) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;

    let adds = ctx.trending(TrendType::Add, TRENDING_LIMIT).await?;
    let drops = ctx.trending(TrendType::Drop, TRENDING_LIMIT).await?;

    let week = ctx.evaluation_week().await?;
    let weekly = ctx
        .client
        .get_weeks_stats(ctx.season, &week_window(week, WEEKS_TO_ANALYZE))
        .await;

    let poor = find_poor_performers(
        &ctx.my_player_ids,
        &ctx.directory,
        &weekly,
        POOR_PERFORMANCE_THRESHOLD,
    );
    let available = find_available_players(&rostered_ids(&ctx.rosters), &ctx.directory, &adds);
    let dropping = players_trending_down(&ctx.my_player_ids, &ctx.directory, &drops);

    let plan = build_gameplan(&poor, &dropping, &available);

    if args.json {
        return print_json(&plan);
    }

    println!("📋 WEEKLY GAME PLAN - Week {week}");
    println!();
    if plan.actions.is_empty() {
        println!("✓ No roster moves needed this week");
    } else {
        println!("🚨 IMMEDIATE ACTIONS (priority order):");
        for (i, action) in plan.actions.iter().enumerate() {
            println!("{:>2}. {}", i + 1, describe(action));
        }
    }

    println!();
    println!(
        "Roster Health: {} ({} consistent underperformers)",
        plan.roster_health, plan.critical_count
    );
    if plan.trend_alerts == 0 {
        println!("✓ No players being heavily dropped");
    } else {
        println!("⚠ {} players trending down", plan.trend_alerts);
    }

    Ok(())
}
