//! Shared setup and formatting for command handlers.

use serde::Serialize;
use tracing::info;

use crate::{
    analysis::{OwnedRoster, Player, PlayerDirectory, ValuationContext},
    cli::CommonArgs,
    config::{resolve_league_id, resolve_username, ClientConfig},
    error::{Result, SleeperError},
    sleeper::{
        types::{build_directory, trend_counts, League, TrendType, TrendingPlayer, User},
        SleeperClient,
    },
    LeagueId, PlayerId, Position, Season, Week,
};

/// Lookback used for every trending request.
pub const TRENDING_LOOKBACK_HOURS: u32 = 24;
/// Trending entries fetched to build the valuation context.
pub const VALUATION_TRENDING_LIMIT: u32 = 100;

/// Client plus the signed-in user, before a league is chosen
pub struct Session {
    pub client: SleeperClient,
    pub user: User,
}

impl Session {
    pub async fn connect(args: &CommonArgs) -> Result<Self> {
        let username = resolve_username(args.username.clone())?;
        let config = ClientConfig::from_flags(args.api_delay_ms, args.refresh);
        let client = SleeperClient::new(&config)?;

        let user = client.require_user(&username).await?;
        info!(user_id = %user.user_id, "resolved Sleeper user");

        Ok(Self { client, user })
    }

    /// Leagues for the season; an empty list is an error.
    pub async fn leagues(&self, season: Season) -> Result<Vec<League>> {
        let leagues = self
            .client
            .get_user_leagues(&self.user.user_id, season)
            .await?;
        if leagues.is_empty() {
            return Err(SleeperError::NoLeagues {
                season: season.to_string(),
            });
        }
        Ok(leagues)
    }
}

/// Everything most commands need: league, rosters and the player directory
pub struct CommandContext {
    pub client: SleeperClient,
    pub user: User,
    pub league: League,
    pub season: Season,
    pub rosters: Vec<OwnedRoster>,
    pub my_player_ids: Vec<PlayerId>,
    pub directory: PlayerDirectory,
    week: Option<Week>,
}

impl CommandContext {
    pub async fn new(args: &CommonArgs) -> Result<Self> {
        let session = Session::connect(args).await?;
        let leagues = session.leagues(args.season).await?;
        let league = select_league(leagues, resolve_league_id(args.league_id.clone()), args.season)?;
        info!(league_id = %league.league_id, "using league");

        let rosters: Vec<OwnedRoster> = session
            .client
            .get_rosters(&league.league_id)
            .await?
            .iter()
            .map(|r| r.to_owned_roster())
            .collect();

        let my_player_ids = rosters
            .iter()
            .find(|r| r.is_owned_by(&session.user.user_id))
            .map(|r| r.player_ids.clone())
            .ok_or_else(|| SleeperError::RosterNotFound {
                owner_id: session.user.user_id.to_string(),
            })?;

        let db = session.client.get_players().await?;
        let directory = build_directory(&db);

        Ok(Self {
            client: session.client,
            user: session.user,
            league,
            season: args.season,
            rosters,
            my_player_ids,
            directory,
            week: args.week,
        })
    }

    /// `--week` if given, otherwise the current NFL week.
    pub async fn evaluation_week(&self) -> Result<Week> {
        match self.week {
            Some(week) => Ok(week),
            None => Ok(self.client.get_nfl_state().await?.current_week()),
        }
    }

    /// My roster players known to the directory, in roster order.
    pub fn my_players(&self) -> Vec<&Player> {
        crate::analysis::resolve_players(&self.my_player_ids, &self.directory)
    }

    pub fn lookup_player(&self, id: &PlayerId) -> Result<Player> {
        self.directory
            .get(id)
            .cloned()
            .ok_or_else(|| SleeperError::PlayerNotFound { id: id.to_string() })
    }

    /// Look up each id, failing on the first unknown one.
    pub fn lookup_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>> {
        ids.iter().map(|id| self.lookup_player(id)).collect()
    }

    pub async fn trending(&self, trend: TrendType, limit: u32) -> Result<Vec<TrendingPlayer>> {
        self.client
            .get_trending(trend, TRENDING_LOOKBACK_HOURS, limit)
            .await
    }

    /// Evaluation-week points plus platform-wide trending counts.
    pub async fn valuation_context(&self) -> Result<ValuationContext> {
        let week = self.evaluation_week().await?;
        let stats = self.client.get_week_stats(self.season, week).await;
        let adds = self.trending(TrendType::Add, VALUATION_TRENDING_LIMIT).await?;
        let drops = self.trending(TrendType::Drop, VALUATION_TRENDING_LIMIT).await?;

        Ok(ValuationContext::new(
            stats.points_by_player(),
            trend_counts(&adds),
            trend_counts(&drops),
        ))
    }
}

/// Pick the requested league, or the first one when none is requested.
pub fn select_league(
    leagues: Vec<League>,
    wanted: Option<LeagueId>,
    season: Season,
) -> Result<League> {
    match wanted {
        Some(id) => leagues
            .into_iter()
            .find(|l| l.league_id == id)
            .ok_or_else(|| SleeperError::LeagueNotFound {
                league_id: id.to_string(),
            }),
        None => leagues
            .into_iter()
            .next()
            .ok_or_else(|| SleeperError::NoLeagues {
                season: season.to_string(),
            }),
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `12345` -> `"12,345"`
pub fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// `Name (POS) - TEAM`
pub fn player_line(player: &Player) -> String {
    format!(
        "{} ({}) - {}",
        player.display_name(),
        player.position_label(),
        player.team_label()
    )
}

/// Group players by position, positions in first-seen order.
pub fn group_by_position<'a>(
    players: impl IntoIterator<Item = &'a Player>,
) -> Vec<(Option<Position>, Vec<&'a Player>)> {
    let mut groups: Vec<(Option<Position>, Vec<&Player>)> = Vec::new();
    for player in players {
        match groups.iter_mut().find(|(pos, _)| *pos == player.position) {
            Some((_, list)) => list.push(player),
            None => groups.push((player.position, vec![player])),
        }
    }
    groups
}

/// Position label for a group header.
pub fn position_label(position: Option<Position>) -> String {
    position
        .map(|p| p.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
