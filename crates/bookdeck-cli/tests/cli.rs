use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

/// Binary pinned to an isolated data dir, with the catalog env cleared
fn bookdeck(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookdeck").expect("binary builds");
    cmd.env_remove("BOOKDECK_CATALOG");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

#[test]
fn list_renders_every_title_when_one_page_suffices() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("A Wizard of Earthsea"))
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("The Dispossessed"))
        .stdout(predicate::str::contains("No more books"));
}

#[test]
fn list_filters_by_genre_id() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["list", "--genre", "mystery"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Murder on the Orient Express"))
        .stdout(predicate::str::contains("And Then There Were None"))
        .stdout(predicate::str::contains("The Hobbit").not());
}

#[test]
fn list_filters_by_title_case_insensitively() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["list", "--title", "HOBBIT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("Showing 1 of 1"));
}

#[test]
fn list_paginates_and_reports_the_remainder() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["list", "--page-size", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A Wizard of Earthsea"))
        .stdout(predicate::str::contains("The Hobbit").not())
        .stdout(predicate::str::contains("Show more (4)"));
}

#[test]
fn list_reveals_pages_cumulatively() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["list", "--page-size", "2", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A Wizard of Earthsea"))
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("And Then There Were None").not())
        .stdout(predicate::str::contains("Show more (2)"));
}

#[test]
fn list_emits_parseable_json() {
    let dir = TempDir::new().unwrap();
    let output = bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["--format", "json", "list"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let page: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(page["total"], 6);
    assert_eq!(page["remaining"], 0);
    assert_eq!(page["previews"].as_array().map(Vec::len), Some(6));
}

#[test]
fn show_prints_the_detail_block() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["show", "hobbit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Hobbit"))
        .stdout(predicate::str::contains("J.R.R. Tolkien (1937)"))
        .stdout(predicate::str::contains("Bilbo Baggins"));
}

#[test]
fn show_unknown_id_fails() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .args(["show", "silmarillion"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no book with id"));
}

#[test]
fn lookup_tables_are_listed_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .arg("authors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Agatha Christie"))
        .stdout(predicate::str::contains("Ursula K. Le Guin"))
        .stdout(predicate::str::contains("3 author(s)"));

    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("--catalog")
        .arg(fixture_path())
        .arg("genres")
        .assert()
        .success()
        .stdout(predicate::str::contains("Science Fiction"))
        .stdout(predicate::str::contains("4 genre(s)"));
}

#[test]
fn missing_catalog_fails_with_guidance() {
    let dir = TempDir::new().unwrap();
    bookdeck(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no catalog configured"));
}

#[test]
fn init_records_the_catalog_for_later_runs() {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("catalog.json");
    bookdeck_testing::write_catalog_json(&catalog_path, &bookdeck_testing::small_catalog_file())
        .expect("fixture written");

    bookdeck(&dir)
        .arg("init")
        .arg("--catalog")
        .arg(&catalog_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    bookdeck(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Book A"))
        .stdout(predicate::str::contains("Book C"));
}
