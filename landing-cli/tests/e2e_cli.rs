//! End-to-end tests for the onboard-landing binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn landing() -> Command {
    let mut cmd = cargo_bin_cmd!("onboard-landing");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        landing()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("outline"))
            .stdout(predicate::str::contains("check"));
    }

    #[test]
    fn shows_version() {
        landing()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_document_to_stdout() {
        landing()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("href=\"/dashboard\""))
            .stdout(predicate::str::contains("href=\"/demo\""));
    }

    #[test]
    fn writes_document_into_new_directory() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("site/index.html");

        landing()
            .current_dir(temp.path())
            .args(["render", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Start Free Trial"));
    }

    #[test]
    fn fragment_skips_document_shell() {
        landing()
            .args(["render", "--fragment"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<main"))
            .stdout(predicate::str::contains("<head>").not());
    }

    #[test]
    fn footer_flags_override_placeholder() {
        landing()
            .args([
                "render",
                "--github-url",
                "https://github.com/example/project",
                "--docs-url",
                "/docs",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "href=\"https://github.com/example/project\"",
            ))
            .stdout(predicate::str::contains("href=\"/docs\""));
    }

    #[test]
    fn rejects_empty_footer_flag() {
        landing()
            .args(["render", "--docs-url", ""])
            .assert()
            .failure();
    }

    #[test]
    fn rejects_blank_footer_flag() {
        landing()
            .args(["render", "--fragment", "--docs-url", "  "])
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("must not be empty"));
    }
}

// ============================================
// Config
// ============================================

mod config_file {
    use super::*;

    #[test]
    fn picks_up_landing_toml_in_working_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("landing.toml"),
            "[footer]\ndocs_url = \"https://docs.example.com\"\n",
        )
        .unwrap();

        landing()
            .current_dir(temp.path())
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::contains("href=\"https://docs.example.com\""))
            .stdout(predicate::str::contains("href=\"#\""));
    }

    #[test]
    fn flag_beats_config_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("landing.toml"),
            "[footer]\ngithub_url = \"https://github.com/from/config\"\n",
        )
        .unwrap();

        landing()
            .current_dir(temp.path())
            .args(["render", "--github-url", "https://github.com/from/flag"])
            .assert()
            .success()
            .stdout(predicate::str::contains("https://github.com/from/flag"))
            .stdout(predicate::str::contains("https://github.com/from/config").not());
    }

    #[test]
    fn malformed_config_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        std::fs::write(&path, "[footer\n").unwrap();

        landing()
            .arg("--config")
            .arg(&path)
            .arg("check")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load config"));
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();

        landing()
            .arg("--config")
            .arg(temp.path().join("absent.toml"))
            .arg("render")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to read"));
    }
}

// ============================================
// Outline & Check
// ============================================

mod outline_and_check {
    use super::*;

    #[test]
    fn outline_is_valid_json() {
        let output = landing().arg("outline").output().unwrap();
        assert!(output.status.success());

        let page: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(
            page["sections"],
            serde_json::json!(["hero", "features", "call_to_action", "footer"])
        );
        assert_eq!(page["features"]["entries"].as_array().unwrap().len(), 4);
        assert_eq!(page["features"]["entries"][0]["title"], "AI-Powered Q&A");
        assert_eq!(page["hero"]["heading"], "Understand Any Codebase in Minutes");
        assert_eq!(page["call_to_action"]["actions"][0]["destination"], "/dashboard");
    }

    #[test]
    fn pretty_outline_spans_lines() {
        landing()
            .args(["outline", "--pretty"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\n  \"sections\""));
    }

    #[test]
    fn check_passes_for_shipped_page() {
        landing()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "ok: 4 sections, 4 features, 3 navigation actions, 2 footer links",
            ));
    }
}
