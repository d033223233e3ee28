use gymbridge::watcher;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const CARTPOLE: &str = r#"{ "env": "CartPole-v0", "attrs": { "state": [0.0, 0.1, 0.2, 0.3] } }"#;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gymbridge-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn one_write_is_one_change() {
    let dir = scratch_dir("one-write");
    let snapshot = dir.join("reset.json");
    let watch = watcher::start(&snapshot).unwrap();

    fs::write(&snapshot, CARTPOLE).unwrap();

    assert_eq!(watch.next_change_timeout(Duration::from_secs(5)), Some(()));
    assert_eq!(watch.next_change_timeout(Duration::from_millis(500)), None);

    // The change is only reported once the file is complete.
    let contents = fs::read_to_string(&snapshot).unwrap();
    assert_eq!(contents, CARTPOLE);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn separate_resets_are_separate_changes() {
    let dir = scratch_dir("two-resets");
    let snapshot = dir.join("reset.json");
    let watch = watcher::start(&snapshot).unwrap();

    fs::write(&snapshot, CARTPOLE).unwrap();
    assert_eq!(watch.next_change_timeout(Duration::from_secs(5)), Some(()));

    fs::write(&snapshot, CARTPOLE).unwrap();
    assert_eq!(watch.next_change_timeout(Duration::from_secs(5)), Some(()));
    assert_eq!(watch.next_change_timeout(Duration::from_millis(500)), None);
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn other_files_in_the_directory_are_ignored() {
    let dir = scratch_dir("other-files");
    let watch = watcher::start(&dir.join("reset.json")).unwrap();

    fs::write(dir.join("notes.txt"), "not a snapshot").unwrap();
    assert_eq!(watch.next_change_timeout(Duration::from_millis(500)), None);
    fs::remove_dir_all(&dir).unwrap();
}
