use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn write_dataset(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("restaurants.json");
    let data = r#"[
        {"id": 1, "name": "Finsbury Park Deli", "cuisine": "Deli",
         "address": "12 Stroud Green Rd", "postal_code": "N4 1AA", "rating": 4.0},
        {"id": 2, "name": "Notting Hill Bistro", "cuisine": "French",
         "address": "8 Portobello Rd", "postal_code": "W11 2BB", "rating": 5.0}
    ]"#;
    std::fs::write(&path, data).unwrap();
    path
}

fn nomz() -> Command {
    Command::cargo_bin("nomz").unwrap()
}

#[test]
fn render_home_emits_listing_markup() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("render")
        .arg("#/")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("listing--home")
                .and(predicate::str::contains("Finsbury Park Deli"))
                .and(predicate::str::contains("Notting Hill Bistro")),
        );
}

#[test]
fn render_bad_id_emits_not_found_fragment() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("render")
        .arg("#/restaurant/abc")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page not found"));
}

#[test]
fn search_lists_matches() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("search")
        .arg("bistro")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Notting Hill Bistro")
                .and(predicate::str::contains("Finsbury Park Deli").not()),
        );
}

#[test]
fn list_can_be_restricted_to_an_area() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("list")
        .arg("--area")
        .arg("west-london")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Notting Hill Bistro")
                .and(predicate::str::contains("Finsbury Park Deli").not()),
        );
}

#[test]
fn stats_reports_totals() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(&dir);

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Total restaurants: 2")
                .and(predicate::str::contains("4.50")),
        );
}

#[test]
fn missing_dataset_is_a_fatal_load_error() {
    let dir = tempfile::tempdir().unwrap();

    nomz()
        .arg("--data")
        .arg(dir.path().join("nope.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn structurally_invalid_dataset_renders_the_load_failure_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("restaurants.json");
    std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("render")
        .arg("#/")
        .assert()
        .failure()
        .stdout(predicate::str::contains("could not be loaded"));
}

#[test]
fn dropped_records_warn_on_stderr_but_do_not_fail() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("restaurants.json");
    let data = r#"[
        {"name": "Kept", "address": "1 Street", "postal_code": "N1 1AA"},
        {"name": "Broken"}
    ]"#;
    std::fs::write(&path, data).unwrap();

    nomz()
        .arg("--data")
        .arg(&path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept"))
        .stderr(predicate::str::contains("Skipped record 2"));
}
