use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// `swish` with its config directory pointed at a scratch dir.
fn swish(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("swish").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let out = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn test_help_command() {
    let home = TempDir::new().unwrap();
    swish(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Basketball training planner"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("train"));
}

#[test]
fn test_catalog_lists_sample_drills() {
    let home = TempDir::new().unwrap();
    let all = json_stdout(swish(&home).args(["catalog", "--json"]));
    assert_eq!(all.as_array().unwrap().len(), 10);

    let shooting = json_stdout(swish(&home).args(["catalog", "--type", "shooting", "--json"]));
    let names: Vec<&str> = shooting
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "Spot-Up Shooting",
            "Pull-Up Jumpers",
            "Post Move Sequence",
            "Corner Three Shooting"
        ]
    );
}

#[test]
fn test_plan_beginner_shooting() {
    let home = TempDir::new().unwrap();
    let plans = json_stdout(swish(&home).args([
        "plan", "-d", "beginner", "-f", "shooting", "--seed", "1", "--json",
    ]));

    let plan = &plans.as_array().unwrap()[0];
    assert_eq!(plan["name"], "Beginner Shooting for Guards");
    assert_eq!(plan["duration"], 300);
    assert_eq!(plan["focusArea"], "shooting");
    assert_eq!(plan["exercises"].as_array().unwrap().len(), 1);
    assert_eq!(plan["exercises"][0]["id"], "1");
}

#[test]
fn test_plan_many_have_unique_ids() {
    let home = TempDir::new().unwrap();
    let plans = json_stdout(swish(&home).args([
        "plan",
        "-d",
        "intermediate",
        "-f",
        "all-around",
        "-n",
        "3",
        "--json",
    ]));

    let plans = plans.as_array().unwrap();
    assert_eq!(plans.len(), 3);
    for plan in plans {
        assert_eq!(plan["exercises"].as_array().unwrap().len(), 4);
        assert_eq!(plan["duration"], 1320);
    }
    assert_ne!(plans[0]["id"], plans[1]["id"]);
    assert_ne!(plans[1]["id"], plans[2]["id"]);
}

#[test]
fn test_plan_text_output() {
    let home = TempDir::new().unwrap();
    swish(&home)
        .args(["plan", "-p", "wing", "-f", "defense", "-d", "advanced", "--name", "Lockdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Training Plan Created"))
        .stdout(predicate::str::contains("Lockdown"))
        .stdout(predicate::str::contains("[wing] [defense] [advanced]"));
}

#[test]
fn test_plan_empty_selection_is_reported() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("drills.toml");
    std::fs::write(
        &catalog,
        r#"
        [[exercise]]
        id = "w"
        name = "Weave"
        duration = 90
        type = "teamwork"
        difficulty = "beginner"
        "#,
    )
    .unwrap();

    swish(&home)
        .args(["plan", "-f", "shooting", "-d", "beginner", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no beginner exercises match"))
        .stderr(predicate::str::contains("hint:"));

    swish(&home)
        .args(["plan", "-f", "shooting", "-d", "beginner", "--json", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no beginner exercises match"));

    swish(&home)
        .args(["train", "-f", "shooting", "-d", "beginner", "--json", "--catalog"])
        .arg(&catalog)
        .write_stdin("")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no beginner exercises match"));
}

#[test]
fn test_bad_catalog_suggests_type() {
    let home = TempDir::new().unwrap();
    let catalog = home.path().join("drills.toml");
    std::fs::write(
        &catalog,
        r#"
        [[exercise]]
        id = "a"
        name = "Free Throws"
        duration = 60
        type = "shootin"
        difficulty = "beginner"
        "#,
    )
    .unwrap();

    swish(&home)
        .args(["catalog", "--catalog"])
        .arg(&catalog)
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean `shooting`"));
}

#[test]
fn test_config_set_get_unset() {
    let home = TempDir::new().unwrap();

    swish(&home)
        .args(["config", "set", "difficulty", "advanced"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set `difficulty`"));

    swish(&home)
        .args(["config", "get", "difficulty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("advanced"));

    // The configured difficulty becomes the default.
    let plans = json_stdout(swish(&home).args(["plan", "-f", "shooting", "--json"]));
    assert_eq!(plans[0]["difficulty"], "advanced");

    swish(&home)
        .args(["config", "set", "tick_ms", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value `soon` for `tick_ms`"));

    // The rejected value is not persisted.
    swish(&home)
        .args(["config", "get", "tick_ms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));

    swish(&home)
        .args(["config", "unset", "difficulty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("removed"));

    swish(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no config set)"));
}

#[test]
fn test_train_runs_to_completion() {
    let home = TempDir::new().unwrap();
    swish(&home)
        .args([
            "train", "-d", "beginner", "-f", "shooting", "--tick-ms", "1", "--seed", "3",
        ])
        .write_stdin("")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("Spot-Up Shooting"))
        .stdout(predicate::str::contains("Workout Complete!").count(1));
}

#[test]
fn test_train_finish_from_stdin() {
    let home = TempDir::new().unwrap();
    swish(&home)
        .args(["train", "-d", "beginner", "-f", "shooting", "--json"])
        .write_stdin("s\n")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"event":"plan-created","name":"Beginner Shooting for Guards"}"#))
        .stdout(predicate::str::contains(r#"{"event":"workout-complete"}"#));
}
