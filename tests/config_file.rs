mod support;

use predicates::str::contains;

use support::{taskr_cmd, TestDir};

#[test]
fn config_redirects_the_storage_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_config("[storage]\npath = \"state/tasks.json\"\n")?;

    taskr_cmd(&dir).args(["add", "A"]).assert().success();

    assert!(!dir.task_file().exists());
    let tasks = dir.read_tasks_at(&dir.path().join("state/tasks.json"))?;
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "A");
    Ok(())
}

#[test]
fn config_sets_the_default_priority() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_config("[tasks]\ndefault_priority = \"low\"\n")?;

    taskr_cmd(&dir)
        .args(["add", "A"])
        .assert()
        .success()
        .stdout(contains("Priority: low"));

    // An explicit flag still wins.
    taskr_cmd(&dir)
        .args(["add", "B", "--priority", "high"])
        .assert()
        .success()
        .stdout(contains("Priority: high"));

    Ok(())
}

#[test]
fn file_flag_overrides_the_config() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_config("[storage]\npath = \"state/tasks.json\"\n")?;

    taskr_cmd(&dir)
        .args(["add", "A", "--file", "other.json"])
        .assert()
        .success();

    assert!(!dir.path().join("state/tasks.json").exists());
    let tasks = dir.read_tasks_at(&dir.path().join("other.json"))?;
    assert_eq!(tasks.len(), 1);
    Ok(())
}

#[test]
fn file_env_var_is_honored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();

    taskr_cmd(&dir)
        .env("TASKR_FILE", "env.json")
        .args(["add", "A"])
        .assert()
        .success();

    assert!(!dir.task_file().exists());
    let tasks = dir.read_tasks_at(&dir.path().join("env.json"))?;
    assert_eq!(tasks.len(), 1);
    Ok(())
}

#[test]
fn broken_config_falls_back_to_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_config("storage = nonsense [")?;

    taskr_cmd(&dir).args(["add", "A"]).assert().success();

    let tasks = dir.read_tasks()?;
    assert_eq!(tasks.len(), 1);
    Ok(())
}
