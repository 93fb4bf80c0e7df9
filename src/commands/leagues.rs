//! Account and league listing.

use serde::Serialize;

use crate::{
    cli::CommonArgs,
    sleeper::types::{League, User},
    Result,
};

use super::common::{print_json, Session};

#[derive(Debug, Serialize)]
struct LeaguesReport<'a> {
    user: &'a User,
    leagues: &'a [League],
}

pub async fn handle_leagues(args: CommonArgs) -> Result<()> {
    let session = Session::connect(&args).await?;
    let leagues = session.leagues(args.season).await?;

    if args.json {
        return print_json(&LeaguesReport {
            user: &session.user,
            leagues: &leagues,
        });
    }

    let user = &session.user;
    println!(
        "✓ {} (user ID {})",
        user.display_name
            .as_deref()
            .or(user.username.as_deref())
            .unwrap_or("unknown"),
        user.user_id
    );
    println!("Leagues for the {} season:", args.season);
    for league in &leagues {
        println!(
            "  {} - {} ({} teams, {}, {})",
            league.league_id,
            league.name.as_deref().unwrap_or("Unnamed league"),
            league
                .total_rosters
                .map(|n| n.to_string())
                .unwrap_or_else(|| "?".to_string()),
            league.scoring_type(),
            league.status.as_deref().unwrap_or("unknown status")
        );
    }

    Ok(())
}
