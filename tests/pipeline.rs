use std::fs;
use std::path::{Path, PathBuf};

use playlog_migrate::config::AppConfig;
use playlog_migrate::database::{DocumentStore, SqliteStore};
use playlog_migrate::services::analysis::AnalysisService;
use playlog_migrate::services::best_scores::BestScoreService;
use playlog_migrate::services::conversion::ConversionService;
use playlog_migrate::services::import::ImportService;
use playlog_migrate::services::normalization::NormalizationService;
use playlog_migrate::services::resolution::ResolutionService;
use playlog_migrate::services::seeding::SeedingService;
use playlog_migrate::services::store_admin;

const EXPORT: &str = r#"{
  "games": [
    {"id": 1, "name": "Catan"},
    {"id": 2, "name": "Carcassonne"},
    {"id": 3, "name": "Cryptid"},
    {"id": 4, "name": "Azul", "bggId": 230802}
  ],
  "players": [
    {"id": 10, "name": "Trevor Paulsen"},
    {"id": 11, "name": "Kyle Meidell"},
    {"id": 12, "name": "Stranger"}
  ],
  "plays": [
    {"id": 100, "playDate": "2024-01-01 10:00:00", "gameRefId": 1,
     "playerScores": [{"playerRefId": 10, "score": 10}, {"playerRefId": 11, "score": 12}]},
    {"id": 101, "playDate": "2024-02-01 19:30:00", "gameRefId": 2,
     "playerScores": [{"playerRefId": 10, "score": "85"}, {"playerRefId": 11, "score": 70}]},
    {"id": 102, "playDate": "2024-03-01 20:00:00", "gameRefId": 3,
     "playerScores": [{"playerRefId": 10, "score": 4}, {"playerRefId": 11, "score": 2}]},
    {"id": 103, "playDate": "2024-03-02 20:00:00", "gameRefId": 4,
     "playerScores": [{"playerRefId": 10, "score": 50}]},
    {"id": 104, "playDate": "2024-03-03 20:00:00", "gameRefId": 1,
     "playerScores": [{"playerRefId": 10, "score": 5}, {"playerRefId": 12, "score": 7}]},
    {"id": 105, "playDate": "2024-03-04 20:00:00", "gameRefId": 99,
     "playerScores": [{"playerRefId": 11, "score": null}]}
  ]
}"#;

const CATALOG: &str = r#"{
  "version": 1,
  "games": [
    {"name": "Catan", "tier": "medium", "hi_score_wins": true},
    {"name": "Carcassone", "tier": "medium"},
    {"name": "Cryptid", "tier": "medium", "hi_score_wins": false}
  ],
  "players": ["Trevor", "Kyle"]
}"#;

fn workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("playlog_migrate_pipeline_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn config_in(dir: &Path) -> AppConfig {
    let mut config = AppConfig::new();
    config.store.path = dir.join("store.db");
    config.paths.export = dir.join("export.json");
    config.paths.plays = dir.join("plays.jsonl");
    config.paths.csv = dir.join("plays.csv");
    config.paths.resolved = dir.join("resolved.jsonl");
    config.paths.normalized = dir.join("normalized.jsonl");
    config.paths.missing_list = dir.join("missing.txt");
    config.paths.catalog = Some(dir.join("catalog.json"));
    config.import.batch_size = 2;

    fs::write(&config.paths.export, EXPORT).unwrap();
    fs::write(dir.join("catalog.json"), CATALOG).unwrap();
    config
}

fn seeded_store(config: &AppConfig) -> SqliteStore {
    let store = SqliteStore::create(&config.store.path).unwrap();
    let seeding = SeedingService::new(config.clone(), &store);
    assert_eq!(seeding.add_games().unwrap().written, 3);
    assert_eq!(seeding.add_players().unwrap().written, 2);
    store
}

fn game_best_score(store: &SqliteStore, name: &str) -> Option<String> {
    store
        .list_games()
        .unwrap()
        .into_iter()
        .find(|g| g.name == name)
        .and_then(|g| g.best_score)
}

#[test]
fn test_full_pipeline() {
    let dir = workspace("full");
    let config = config_in(&dir);
    let store = seeded_store(&config);

    let conversion = ConversionService::new(config.clone());
    assert_eq!(conversion.run_jsonl().unwrap(), 6);
    assert_eq!(conversion.run_csv().unwrap(), 10);
    let csv = fs::read_to_string(&config.paths.csv).unwrap();
    assert!(csv.starts_with("dateTime,game,player,score\n"));
    assert!(csv.contains("Carcassonne,Trevor Paulsen,85"));

    let resolution = ResolutionService::new(config.clone(), &store).run().unwrap();
    assert_eq!(resolution.summary.processed, 6);
    assert_eq!(resolution.summary.succeeded, 3);
    assert_eq!(resolution.summary.skipped, 3);
    assert_eq!(resolution.summary.errored, 0);
    assert!(resolution.unresolved.games.contains("Azul"));
    assert!(resolution.unresolved.games.contains("Unknown Game (ID: 99)"));
    assert!(resolution.unresolved.players.contains("Stranger"));

    let normalized = NormalizationService::new(config.clone()).run().unwrap();
    assert_eq!(normalized.succeeded, 3);
    let first_line = fs::read_to_string(&config.paths.normalized)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    let first: serde_json::Value = serde_json::from_str(&first_line).unwrap();
    assert_eq!(first["dateTime"], "2024-01-01T10:00:00+00:00");
    assert_eq!(first["players"][0]["score"], 12);
    assert_eq!(first["players"][0]["rank"], 1);
    assert_eq!(first["players"][0]["players_beaten"], 1);
    assert_eq!(first["players"][1]["rank"], 2);

    let import = ImportService::new(config.clone(), &store).run().unwrap();
    assert_eq!(import.plays_before, 0);
    assert_eq!(import.plays_after, 3);
    assert_eq!(import.write.batches, 2);

    let again = ImportService::new(config.clone(), &store).run().unwrap();
    assert_eq!(again.plays_after, 6);

    let carcassone_id = store
        .list_games()
        .unwrap()
        .into_iter()
        .find(|g| g.name == "Carcassone")
        .unwrap()
        .id;
    store.update_best_score(&carcassone_id, "Trevor:85").unwrap();

    let service = BestScoreService::new(config.clone(), &store);
    let dry_run = service.run(false).unwrap();
    assert_eq!(dry_run.directives.len(), 2);
    assert_eq!(dry_run.applied, 0);
    assert_eq!(game_best_score(&store, "Catan"), None);

    let applied = service.run(true).unwrap();
    assert_eq!(applied.applied, 2);
    assert_eq!(applied.failed, 0);
    assert_eq!(game_best_score(&store, "Catan").as_deref(), Some("Kyle:12"));
    assert_eq!(game_best_score(&store, "Cryptid").as_deref(), Some("Kyle:2"));
    assert_eq!(game_best_score(&store, "Carcassone").as_deref(), Some("Trevor:85"));

    assert!(service.run(true).unwrap().directives.is_empty());

    let overview = store_admin::inspect(&store).unwrap();
    assert_eq!(overview.games, 3);
    assert_eq!(overview.players, 2);
    assert_eq!(overview.plays, 6);
    assert_eq!(overview.games_with_best_score, 3);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_analyze_writes_missing_games_list() {
    let dir = workspace("analyze");
    let config = config_in(&dir);
    let store = seeded_store(&config);
    ConversionService::new(config.clone()).run_jsonl().unwrap();

    let report = AnalysisService::new(config.clone(), &store).analyze().unwrap();
    assert!(report.priority_games.contains("Azul"));
    assert!(report.missing_games.contains("Unknown Game (ID: 99)"));
    assert!(report.missing_players.contains("Stranger"));
    assert!(report.resolved_games.contains("Carcassonne"));

    let listed = fs::read_to_string(&config.paths.missing_list).unwrap();
    assert!(listed.contains("[PRIORITY] Azul"));

    AnalysisService::new(config.clone(), &store).suggest().unwrap();

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_store_is_a_configuration_error() {
    let dir = workspace("missing_store");
    let config = config_in(&dir);

    let err = SqliteStore::open(&config.store.path).err().unwrap();
    assert!(err.to_string().contains("init-store"));

    fs::remove_dir_all(&dir).unwrap();
}
