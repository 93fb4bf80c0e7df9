//! End-to-end tests: Sleeper client against a mock server feeding the analyses

use serde_json::json;
use sleeper_ffl::{
    analysis::{
        gameplan::{build_gameplan, RosterHealth},
        performance::{find_poor_performers, week_window},
        trade::find_trade_targets,
        waiver::{find_available_players, players_trending_down, rostered_ids},
        OwnedRoster, ValuationContext,
    },
    config::ClientConfig,
    sleeper::{
        types::{build_directory, trend_counts, TrendType},
        SleeperClient,
    },
    LeagueId, PlayerId, Season, UserId, Week,
};
use std::time::Duration;
use tempfile::tempdir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mount(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn league_server() -> MockServer {
    let server = MockServer::start().await;

    mount(
        &server,
        "/league/L1/rosters",
        json!([
            {"roster_id": 1, "owner_id": "me", "players": ["10", "11", "12"]},
            {"roster_id": 2, "owner_id": "rival", "players": ["20", "21"]}
        ]),
    )
    .await;
    mount(
        &server,
        "/players/nfl",
        json!({
            "10": {"first_name": "My", "last_name": "Runner", "position": "RB", "age": 26, "active": true},
            "11": {"first_name": "My", "last_name": "Receiver", "position": "WR", "age": 29, "active": true},
            "12": {"first_name": "My", "last_name": "Kicker", "position": "K", "age": 35, "active": true},
            "20": {"first_name": "Their", "last_name": "Star", "position": "RB", "age": 24, "active": true},
            "21": {"first_name": "Their", "last_name": "Backup", "position": "K", "age": 38, "active": true},
            "30": {"first_name": "Free", "last_name": "Agent", "position": "WR", "age": 23, "active": true},
            "31": {"first_name": "Gone", "last_name": "Player", "position": "WR", "active": false}
        }),
    )
    .await;
    mount(
        &server,
        "/players/nfl/trending/add",
        json!([
            {"player_id": "31", "count": 50000},
            {"player_id": "30", "count": 40000},
            {"player_id": "20", "count": 30000}
        ]),
    )
    .await;
    mount(
        &server,
        "/players/nfl/trending/drop",
        json!([{"player_id": "11", "count": 25000}]),
    )
    .await;
    mount(
        &server,
        "/stats/nfl/regular/2025/5",
        json!({"10": {"pts_ppr": 4.0}, "11": {"pts_ppr": 6.5}, "20": {"pts_ppr": 30.0}}),
    )
    .await;
    mount(
        &server,
        "/stats/nfl/regular/2025/6",
        json!({"10": {"pts_ppr": 5.0}, "11": {"pts_ppr": 22.0}, "20": {"pts_ppr": 26.0}}),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/stats/nfl/regular/2025/4"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    server
}

fn client_for(server: &MockServer, cache_dir: &std::path::Path) -> SleeperClient {
    let config = ClientConfig {
        base_url: server.uri(),
        api_delay: Duration::ZERO,
        cache_dir: cache_dir.to_path_buf(),
        refresh: false,
    };
    SleeperClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_weekly_gameplan_from_mock_league() {
    let server = league_server().await;
    let dir = tempdir().unwrap();
    let client = client_for(&server, dir.path());

    let rosters: Vec<OwnedRoster> = client
        .get_rosters(&LeagueId::new("L1"))
        .await
        .unwrap()
        .iter()
        .map(|r| r.to_owned_roster())
        .collect();
    let me = UserId::new("me");
    let mine = rosters
        .iter()
        .find(|r| r.is_owned_by(&me))
        .unwrap()
        .player_ids
        .clone();
    let directory = build_directory(&client.get_players().await.unwrap());

    let adds = client.get_trending(TrendType::Add, 24, 25).await.unwrap();
    let drops = client.get_trending(TrendType::Drop, 24, 25).await.unwrap();
    let weekly = client
        .get_weeks_stats(Season::new(2025), &week_window(Week::new(6), 3))
        .await;
    assert_eq!(weekly.len(), 3);
    assert!(weekly[0].1.is_empty());

    let poor = find_poor_performers(&mine, &directory, &weekly, 8.0);
    assert_eq!(poor.len(), 2);
    assert_eq!(poor[0].player.id, PlayerId::new("10"));
    assert_eq!(poor[0].total_poor_weeks(), 2);

    let available = find_available_players(&rostered_ids(&rosters), &directory, &adds);
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].player.name, "Free Agent");

    let dropping = players_trending_down(&mine, &directory, &drops);
    assert_eq!(dropping.len(), 1);

    let plan = build_gameplan(&poor, &dropping, &available);
    assert_eq!(plan.actions.len(), 3);
    assert_eq!(plan.roster_health, RosterHealth::Good);
    assert_eq!(plan.trend_alerts, 1);
}

#[tokio::test]
async fn test_trade_targets_from_mock_league() {
    let server = league_server().await;
    let dir = tempdir().unwrap();
    let client = client_for(&server, dir.path());

    let rosters: Vec<OwnedRoster> = client
        .get_rosters(&LeagueId::new("L1"))
        .await
        .unwrap()
        .iter()
        .map(|r| r.to_owned_roster())
        .collect();
    let directory = build_directory(&client.get_players().await.unwrap());
    let stats = client.get_week_stats(Season::new(2025), Week::new(6)).await;
    let adds = client.get_trending(TrendType::Add, 24, 25).await.unwrap();
    let ctx = ValuationContext::new(
        stats.points_by_player(),
        trend_counts(&adds),
        Default::default(),
    );

    let targets = find_trade_targets(&rosters, &UserId::new("me"), &directory, &ctx, None);

    // The rival's 38-year-old kicker is worth 0.3 and is filtered out
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].player.id, PlayerId::new("20"));
    assert_eq!(targets[0].owner_id, Some(UserId::new("rival")));
    assert!((targets[0].value.as_f64() - 3.63).abs() < 1e-9);
}
