use assert_cmd::Command;
use predicates::prelude::*;

fn prdgen(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("prdgen").unwrap();
    cmd.env("PRDGEN_HOME", home);
    cmd
}

#[test]
fn set_then_render_markdown() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["set", "projectName", "Mercury"])
        .assert()
        .success()
        .stdout(predicates::str::contains("projectName updated"));

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::starts_with(
            "# Mercury – Frontend Implementation Planning PRD",
        ))
        .stdout(predicates::str::contains("## Role"));
}

#[test]
fn empty_fields_render_as_tbd() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::contains("TBD"));
}

#[test]
fn config_switches_the_default_format() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["config", "format", "gdocs"])
        .assert()
        .success()
        .stdout(predicates::str::contains("format set to gdocs"));

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("<h1>"))
        .stdout(predicates::str::contains("<hr />"));
}

#[test]
fn render_format_flag_overrides_config() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["config", "format", "gdocs"])
        .assert()
        .success();

    prdgen(temp_dir.path())
        .args(["render", "--format", "text"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "FRONTEND IMPLEMENTATION PLANNING PRD",
        ))
        .stdout(predicates::str::contains("-".repeat(32)));
}

#[test]
fn disabled_section_is_left_out() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["section", "off", "role"])
        .assert()
        .success()
        .stdout(predicates::str::contains("role disabled"));

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::contains("## Role").not())
        .stdout(predicates::str::contains("## MVP Goal"));
}

#[test]
fn item_commands_edit_list_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["item", "set", "keyFeatures", "0", "fast capture"])
        .assert()
        .success();

    prdgen(temp_dir.path())
        .args(["item", "add", "outOfScope", "billing"])
        .assert()
        .success()
        .stdout(predicates::str::contains("outOfScope now has 5 entries"));

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::contains("* **fast capture**"))
        .stdout(predicates::str::contains("* **billing**"));
}

#[test]
fn export_writes_a_file_with_format_extension() {
    let temp_dir = tempfile::tempdir().unwrap();
    let out = temp_dir.path().join("prd.html");

    prdgen(temp_dir.path())
        .args(["set", "projectName", "Mercury"])
        .assert()
        .success();

    prdgen(temp_dir.path())
        .args(["export", "--format", "gdocs"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicates::str::contains("text/html"));

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("<h1>Mercury – Frontend Implementation Planning PRD</h1>"));
}

#[test]
fn unknown_field_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["set", "notAField", "x"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("notAField"));
}

#[test]
fn reset_requires_confirmation() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["set", "projectName", "Mercury"])
        .assert()
        .success();

    prdgen(temp_dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicates::str::contains("--yes"));

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mercury"));

    prdgen(temp_dir.path())
        .args(["reset", "--yes"])
        .assert()
        .success();

    prdgen(temp_dir.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mercury").not());
}

#[test]
fn status_reports_progress_and_sections() {
    let temp_dir = tempfile::tempdir().unwrap();

    prdgen(temp_dir.path())
        .args(["set", "projectName", "Mercury"])
        .assert()
        .success();

    prdgen(temp_dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicates::str::contains("format = markdown"))
        .stdout(predicates::str::contains("Explicitly Out of Scope"))
        .stdout(predicates::str::contains("lists filled in"));
}

#[test]
fn file_flag_overrides_the_default_location() {
    let temp_dir = tempfile::tempdir().unwrap();
    let doc = temp_dir.path().join("elsewhere.json");

    let mut cmd = Command::cargo_bin("prdgen").unwrap();
    cmd.args(["--file"])
        .arg(&doc)
        .args(["set", "projectName", "Mercury"])
        .assert()
        .success();

    assert!(doc.exists());

    let mut cmd = Command::cargo_bin("prdgen").unwrap();
    cmd.args(["--file"])
        .arg(&doc)
        .arg("render")
        .assert()
        .success()
        .stdout(predicates::str::contains("Mercury"));
}
