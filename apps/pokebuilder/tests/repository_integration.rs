//! Integration tests for the team repository
//!
//! These tests run the CSV-backed repository against real files in a
//! temporary directory, covering CRUD operations, name normalization,
//! no-op policy, and re-reading the store from disk.

use pokebuilder::domain::creature::CatalogStore;
use pokebuilder::domain::repositories::TeamRepository;
use pokebuilder::infrastructure::CsvTeamRepository;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Set up an empty store in a fresh directory
fn setup_store() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("saved_teams.csv");
    (dir, path)
}

fn names(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

fn fixture_catalog() -> CatalogStore {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pokemon.csv");
    CatalogStore::load(path).expect("Failed to load fixture catalog")
}

#[test]
fn test_save_then_find_by_name_ignores_case_and_padding() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);

    repo.save("Alpha", &names(&["A", "B"]))
        .expect("Failed to save team");

    let found = repo.find_by_name("  alpha ").expect("Team should be found");
    assert_eq!(found.name().as_str(), "Alpha", "Stored name keeps its spelling");
    assert_eq!(found.members(), &names(&["A", "B"])[..], "Members should match");
}

#[test]
fn test_saved_team_survives_reopen() {
    let (_dir, path) = setup_store();
    {
        let mut repo = CsvTeamRepository::open(&path);
        repo.save("Alpha", &names(&["Pikachu", "Eevee"]))
            .expect("Failed to save team");
    }

    let repo = CsvTeamRepository::open(&path);
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.team_members("ALPHA"), names(&["Pikachu", "Eevee"]));
}

#[test]
fn test_save_with_empty_input_is_noop() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);

    repo.save("", &names(&["A"])).expect("No-op should succeed");
    repo.save("   ", &names(&["A"])).expect("No-op should succeed");
    repo.save("Alpha", &[]).expect("No-op should succeed");

    assert!(repo.is_empty());
    assert!(!path.exists(), "Nothing should have been written");
}

#[test]
fn test_save_appends_duplicate_names() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);

    repo.save("Alpha", &names(&["A"])).unwrap();
    repo.save("alpha", &names(&["B"])).unwrap();

    assert_eq!(repo.len(), 2, "Save never merges into an existing team");
    assert_eq!(
        repo.team_members("Alpha"),
        names(&["A"]),
        "Lookups return the first match in storage order"
    );
}

#[test]
fn test_add_member_is_idempotent() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Alpha", &names(&["A", "B"])).unwrap();

    repo.add_member("Alpha", "A").unwrap();

    assert_eq!(repo.team_members("Alpha"), names(&["A", "B"]));
    assert_eq!(repo.len(), 1);
}

#[test]
fn test_add_member_creates_missing_team() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);

    repo.add_member("Default Team", "Pikachu").unwrap();

    assert_eq!(repo.all_team_names().unwrap(), names(&["Default Team"]));
    assert_eq!(repo.team_members("default team"), names(&["Pikachu"]));
}

#[test]
fn test_add_member_matches_team_name_like_lookups_do() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Alpha", &names(&["A"])).unwrap();

    repo.add_member(" ALPHA ", "B").unwrap();

    assert_eq!(repo.len(), 1, "No second team should be created");
    assert_eq!(repo.team_members("Alpha"), names(&["A", "B"]));
}

#[test]
fn test_remove_then_add_moves_member_to_end() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Alpha", &names(&["A", "B", "C"])).unwrap();

    repo.remove_member("Alpha", "A").unwrap();
    repo.add_member("Alpha", "A").unwrap();

    assert_eq!(repo.team_members("Alpha"), names(&["B", "C", "A"]));
}

#[test]
fn test_remove_from_missing_team_is_noop() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Alpha", &names(&["A"])).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    repo.remove_member("Beta", "A").unwrap();
    repo.remove_member("Alpha", "Z").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn test_removing_last_member_keeps_team_row() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Alpha", &names(&["A"])).unwrap();

    repo.remove_member("Alpha", "A").unwrap();

    let reopened = CsvTeamRepository::open(&path);
    assert_eq!(reopened.len(), 1);
    assert!(reopened.team_members("Alpha").is_empty());
}

#[test]
fn test_delete_first_of_two_teams() {
    let (_dir, path) = setup_store();
    fs::write(&path, "Team Name,Members\nX,\"p1,p2\"\nY,p3\n").unwrap();
    let mut repo = CsvTeamRepository::open(&path);

    repo.delete_at(0).expect("Failed to delete team");

    assert_eq!(fs::read_to_string(&path).unwrap(), "Team Name,Members\nY,p3\n");
    assert_eq!(repo.teams()[0].name().as_str(), "Y");
}

#[test]
fn test_delete_shortens_names_and_keeps_order() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    for name in ["One", "Two", "Three", "Four"] {
        repo.save(name, &names(&["A"])).unwrap();
    }

    repo.delete_at(1).unwrap();

    assert_eq!(
        repo.all_team_names().unwrap(),
        names(&["One", "Three", "Four"])
    );
    assert_eq!(repo.teams()[1].name().as_str(), "Three", "No gap in indexing");
}

#[test]
fn test_delete_out_of_range_is_noop() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Alpha", &names(&["A"])).unwrap();

    repo.delete_at(1).unwrap();
    repo.delete_at(usize::MAX).unwrap();

    assert_eq!(repo.len(), 1);
}

#[test]
fn test_all_team_names_sees_other_writers() {
    let (_dir, path) = setup_store();
    let mut first = CsvTeamRepository::open(&path);
    let mut second = CsvTeamRepository::open(&path);

    first.save("Alpha", &names(&["A"])).unwrap();
    second.refresh().unwrap();
    second.save("Beta", &names(&["B"])).unwrap();

    assert_eq!(first.len(), 1, "No refresh happens outside the enumerate path");
    assert_eq!(first.all_team_names().unwrap(), names(&["Alpha", "Beta"]));
    assert_eq!(first.len(), 2);
}

#[test]
fn test_team_members_of_unknown_team_is_empty() {
    let (_dir, path) = setup_store();
    let repo = CsvTeamRepository::open(&path);

    assert!(repo.team_members("nonexistent").is_empty());
    assert!(repo.find_by_name("nonexistent").is_none());
}

#[test]
fn test_team_creatures_follow_catalog_order() {
    let (_dir, path) = setup_store();
    let catalog = fixture_catalog();
    let mut repo = CsvTeamRepository::open(&path);
    repo.save("Rain", &names(&["Lapras", "Squirtle", "Missingno"]))
        .unwrap();

    let creatures = repo.team_creatures(&catalog, "rain");

    let found: Vec<&str> = creatures.iter().map(|c| c.name()).collect();
    assert_eq!(found, vec!["Squirtle", "Lapras"]);
}

#[test]
fn test_hand_edited_members_are_trimmed() {
    let (_dir, path) = setup_store();
    fs::write(&path, "Team Name,Members\n Sun ,\" Charizard , Charmander \"\n").unwrap();

    let repo = CsvTeamRepository::open(&path);

    assert_eq!(repo.team_members("sun"), names(&["Charizard", "Charmander"]));
}

#[test]
fn test_padded_member_names_never_duplicate_after_reload() {
    let (_dir, path) = setup_store();
    let mut repo = CsvTeamRepository::open(&path);

    repo.save("T", &names(&[" Pikachu"])).expect("Failed to save team");
    repo.add_member("T", "Pikachu").expect("Failed to add member");

    let other = CsvTeamRepository::try_open(&path).expect("Failed to reopen store");
    assert_eq!(
        repo.team_members("T"),
        other.team_members("T"),
        "Memory and disk should agree"
    );
    assert_eq!(other.team_members("T"), names(&["Pikachu"]));
}

#[test]
fn test_failed_write_is_not_replayed_by_later_saves() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store_dir = dir.path().join("data");
    let path = store_dir.join("saved_teams.csv");
    let mut repo = CsvTeamRepository::open(&path);

    assert!(repo.save("Alpha", &names(&["A"])).is_err(), "Write should fail");
    assert!(repo.save("Alpha", &names(&["A"])).is_err(), "Retry should fail too");
    assert!(repo.is_empty(), "Failed saves must not linger in memory");

    fs::create_dir(&store_dir).expect("Failed to create store dir");
    repo.save("Alpha", &names(&["A"])).expect("Failed to save team");
    repo.add_member("Beta", "B").expect("Failed to add member");

    let contents = fs::read_to_string(&path).expect("Failed to read store");
    assert_eq!(contents, "Team Name,Members\nAlpha,A\nBeta,B\n");
}
