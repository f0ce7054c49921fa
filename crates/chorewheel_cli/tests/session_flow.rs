use chorewheel_cli::{Console, Session, SessionEnd};
use chorewheel_core::{
    Chore, ChoreService, HistoryEntry, JsonFileStoreRepository, Member, Store, StoreRepository,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Cursor;
use std::path::Path;

fn repo_in(dir: &Path) -> JsonFileStoreRepository {
    JsonFileStoreRepository::in_dir(dir.join("user files"), "chore_data.json")
}

fn run_script(repo: JsonFileStoreRepository, script: &str) -> (SessionEnd, String, Store) {
    let mut session = Session::new(ChoreService::new(repo), "done", StdRng::seed_from_u64(5));
    let mut output = Vec::new();
    let end = {
        let mut console = Console::new(Cursor::new(script.to_string()), &mut output);
        session.run(&mut console).unwrap()
    };
    (end, String::from_utf8(output).unwrap(), session.store().clone())
}

#[test]
fn add_assign_and_save_writes_document() {
    let dir = tempfile::tempdir().unwrap();
    let script = "1\ndishes\n\nDone\n2\nAl\ndone\n8\n9\n";

    let (end, output, store) = run_script(repo_in(dir.path()), script);

    assert!(output.contains("No saved data found. Starting with empty lists."));
    assert!(output.contains("Added chore: dishes"));
    assert!(output.contains("Added family member: Al"));
    assert!(output.contains("Al's chore is: dishes"));
    assert!(output.contains("Goodbye!"));

    let path = dir.path().join("user files").join("chore_data.json");
    assert_eq!(end, SessionEnd::Saved(path.clone()));
    assert!(store.chores.is_empty());

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json["chores"], serde_json::json!([]));
    assert_eq!(json["family_members"], serde_json::json!(["Al"]));
    assert_eq!(json["chore_history"], serde_json::json!([["Al", "dishes"]]));
}

#[test]
fn invalid_inputs_are_reported_and_loop_continues() {
    let dir = tempfile::tempdir().unwrap();
    let script = "4\nzzz\n1\ndishes\ndone\n6\nzero\n6\n5\n6\n0\n";

    let (end, output, store) = run_script(repo_in(dir.path()), script);

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(output.contains("No chores to edit."));
    assert!(output.contains("Invalid choice. Please try again."));
    assert!(output.contains("Invalid input. Please enter a number."));
    assert_eq!(output.matches("Invalid selection.").count(), 2);
    assert_eq!(store.chores, vec![Chore::from("dishes")]);
    assert!(!dir.path().join("user files").exists());
}

#[test]
fn edit_and_delete_update_lists() {
    let dir = tempfile::tempdir().unwrap();
    let script = "1\ndishes\ntrash\ndone\n2\nAl\nBo\ndone\n4\n2\nrecycling\n7\n1\n5\n1\n   \n3\n";

    let (_, output, store) = run_script(repo_in(dir.path()), script);

    assert!(output.contains("Select a chore to edit (1-2): "));
    assert!(output.contains("Chore updated successfully."));
    assert!(output.contains("Al removed from family members."));
    assert!(output.contains("Chores: dishes, recycling"));
    assert!(output.contains("Family Members: Bo"));
    assert_eq!(store.members, vec![Member::from("Bo")]);
}

#[test]
fn existing_document_is_loaded_on_start() {
    let dir = tempfile::tempdir().unwrap();
    let repo = repo_in(dir.path());
    repo.save(&Store {
        chores: vec![Chore::from("dishes")],
        members: vec![Member::from("Al")],
        history: vec![HistoryEntry::new(Member::from("Al"), Chore::from("dishes"))],
    })
    .unwrap();

    let (_, output, store) = run_script(repo, "3\n8\n");

    assert!(output.contains("Data loaded from"));
    assert!(output.contains("Assignments recorded: 1"));
    assert!(output.contains("No unique chore available for Al, assigning randomly!"));
    assert_eq!(store.history.len(), 2);
}

#[test]
fn members_missing_yields_suggestion_only() {
    let dir = tempfile::tempdir().unwrap();

    let (_, output, store) = run_script(repo_in(dir.path()), "1\ndishes\ndone\n8\n");

    assert!(output.contains("No family members were added."));
    assert!(output.contains("Random chore: dishes"));
    assert_eq!(store.chores, vec![Chore::from("dishes")]);
    assert!(store.history.is_empty());
}

#[test]
fn failed_save_keeps_session_running() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("user files"), "file in the way").unwrap();

    let (end, output, store) = run_script(repo_in(dir.path()), "1\ndishes\ndone\n9\n3\n");

    assert_eq!(end, SessionEnd::InputClosed);
    assert!(output.contains("Error saving data:"));
    assert!(!output.contains("Goodbye!"));
    assert!(output.contains("Chores: dishes"));
    assert_eq!(store.chores.len(), 1);
}

#[test]
fn malformed_document_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("user files")).unwrap();
    std::fs::write(
        dir.path().join("user files").join("chore_data.json"),
        "{ broken",
    )
    .unwrap();

    let (_, output, store) = run_script(repo_in(dir.path()), "");

    assert!(output.contains("Error loading data:"));
    assert!(store.is_empty());
}
