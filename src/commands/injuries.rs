//! Injury report for your roster.

use crate::{
    analysis::{
        injury::{injury_report, team_injuries, InjuryReport, InjuryRisk},
        Player,
    },
    cli::CommonArgs,
    Result,
};

use serde::Serialize;

use super::common::{player_line, print_json, CommandContext};

fn print_bucket(risk: InjuryRisk, players: &[Player]) {
    if players.is_empty() {
        return;
    }
    println!("{risk}:");
    for p in players {
        match &p.injury_body_part {
            Some(part) => println!("  {} - {} ({})", player_line(p), p.injury_status, part),
            None => println!("  {} - {}", player_line(p), p.injury_status),
        }
    }
}

#[derive(Debug, Serialize)]
struct InjuriesReport<'a> {
    roster: &'a InjuryReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    team: Option<&'a [Player]>,
}

pub async fn handle_injuries(args: CommonArgs, team: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(&args).await?;
    let report = injury_report(ctx.my_players());
    let team_report = team
        .as_deref()
        .map(|t| (t.to_uppercase(), team_injuries(&ctx.directory, t)));

    if args.json {
        return print_json(&InjuriesReport {
            roster: &report,
            team: team_report.as_ref().map(|(_, players)| players.as_slice()),
        });
    }

    if report.is_empty() {
        println!("✓ No injured players on your roster");
    } else {
        println!("🏥 INJURY REPORT ({} players)", report.len());
        print_bucket(InjuryRisk::High, &report.high_risk);
        print_bucket(InjuryRisk::Medium, &report.medium_risk);
        print_bucket(InjuryRisk::Monitor, &report.monitor);
    }

    if let Some((team, players)) = &team_report {
        println!();
        if players.is_empty() {
            println!("✓ No injuries reported for {team}");
        } else {
            println!("{team} injuries:");
            for p in players {
                println!("  {} - {}", player_line(p), p.injury_status);
            }
        }
    }

    Ok(())
}
