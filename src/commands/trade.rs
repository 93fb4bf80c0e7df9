//! Player values, trade grading, trade targets and trade packages.

use serde::Serialize;

use crate::{
    analysis::{
        trade::{
            analyze_trade, find_trade_targets, packages_for_target, score_roster, ScoredPlayer,
            TradePackage,
        },
        Player,
    },
    cli::CommonArgs,
    PlayerId, Position, Result,
};

use super::common::{player_line, print_json, CommandContext};

const TARGETS_SHOWN: usize = 10;

pub async fn handle_value(args: CommonArgs, players: Vec<PlayerId>) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let players = ctx.lookup_players(&players)?;
    let vctx = ctx.valuation_context().await?;

    let scored = score_roster(&players, &vctx);

    if args.json {
        return print_json(&scored);
    }

    println!("💎 PLAYER VALUES");
    for s in &scored {
        println!("  {:<40} {:>6.2}", player_line(&s.player), s.value.as_f64());
    }

    Ok(())
}

pub async fn handle_trade(args: CommonArgs, give: Vec<PlayerId>, get: Vec<PlayerId>) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let give = ctx.lookup_players(&give)?;
    let get = ctx.lookup_players(&get)?;
    let vctx = ctx.valuation_context().await?;

    let analysis = analyze_trade(&give, &get, &vctx);

    if args.json {
        return print_json(&analysis);
    }

    let names = |side: &[ScoredPlayer]| {
        side.iter()
            .map(|s| s.player.display_name().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };

    println!("🔄 TRADE ANALYSIS");
    println!("📤 You give: {}", names(&analysis.give));
    println!("📥 You get: {}", names(&analysis.get));
    println!();
    println!("Your players value: {:.2}", analysis.give_value);
    println!("Their players value: {:.2}", analysis.get_value);
    println!("Value difference: {:+.2}", analysis.value_difference);
    println!();
    println!("💡 RECOMMENDATION: {}", analysis.recommendation);
    println!("📝 Trade Grade: {}", analysis.grade);

    Ok(())
}

pub async fn handle_targets(args: CommonArgs, position: Option<Position>) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let vctx = ctx.valuation_context().await?;

    let targets = find_trade_targets(
        &ctx.rosters,
        &ctx.user.user_id,
        &ctx.directory,
        &vctx,
        position,
    );

    if args.json {
        return print_json(&targets);
    }

    println!("🎯 TRADE TARGETS");
    if let Some(position) = position {
        println!("Position: {position}");
    }

    if targets.is_empty() {
        println!("No suitable trade targets found.");
        return Ok(());
    }

    for (i, target) in targets.iter().take(TARGETS_SHOWN).enumerate() {
        println!("{:2}. {}", i + 1, player_line(&target.player));
        println!("    Value: {:.2}", target.value.as_f64());
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct PackagesReport<'a> {
    target: &'a Player,
    target_value: f64,
    packages: &'a [TradePackage],
}

pub async fn handle_packages(args: CommonArgs, target: PlayerId) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let target = ctx.lookup_player(&target)?;
    let vctx = ctx.valuation_context().await?;

    let target_value = vctx.score_player(&target).as_f64();
    let mine: Vec<Player> = ctx.my_players().into_iter().cloned().collect();
    let packages = packages_for_target(&target, &mine, &vctx)?;

    if args.json {
        return print_json(&PackagesReport {
            target: &target,
            target_value,
            packages: &packages,
        });
    }

    println!(
        "📦 PACKAGES FOR {} (value {:.2})",
        player_line(&target),
        target_value
    );

    if packages.is_empty() {
        println!("No packages from your roster land within 80-120% of the target's value.");
        return Ok(());
    }

    for (i, package) in packages.iter().enumerate() {
        let names: Vec<&str> = package
            .players
            .iter()
            .map(|s| s.player.display_name())
            .collect();
        println!(
            "{}. {} - total {:.2} ({})",
            i + 1,
            names.join(" + "),
            package.total_value,
            package.fairness
        );
    }

    Ok(())
}
