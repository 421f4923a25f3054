use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "expense";

fn expense_command(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("EXPENSE_CLI_DATA_DIR", data_dir.path());
    cmd.env_remove("EXPENSE_CLI_BUDGET_LIMIT");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn add_lunch(data_dir: &TempDir) {
    expense_command(data_dir)
        .args(["add", "--amount", "12.50", "--category", "Food", "--description", "lunch", "--yes"])
        .assert()
        .success()
        .stdout(contains("Expense saved."));
}

#[test]
fn add_with_yes_then_list() {
    let data_dir = TempDir::new().unwrap();
    add_lunch(&data_dir);

    expense_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("lunch").and(contains("$12.50")).and(contains("Food")));

    assert!(data_dir.path().join("data").join("expenses.json").exists());
}

#[test]
fn add_asks_for_confirmation() {
    let data_dir = TempDir::new().unwrap();

    expense_command(&data_dir)
        .args(["add", "--amount", "3", "--category", "Toys", "--description", "kite"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Save {expense_date: ").and(contains("Expense saved.")));

    expense_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("kite"));
}

#[test]
fn declined_add_saves_nothing() {
    let data_dir = TempDir::new().unwrap();

    expense_command(&data_dir)
        .args(["add", "--amount", "3", "--category", "Toys", "--description", "kite"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Cancelled."));

    assert!(!data_dir.path().join("data").join("expenses.json").exists());

    expense_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn add_rejects_unknown_category() {
    let data_dir = TempDir::new().unwrap();

    expense_command(&data_dir)
        .args(["add", "--amount", "3", "--category", "Gadgets", "-m", "gizmo", "--yes"])
        .assert()
        .failure()
        .stderr(contains("unknown category 'Gadgets'"));
}

#[test]
fn add_rejects_amount_outside_bounds() {
    let data_dir = TempDir::new().unwrap();

    expense_command(&data_dir)
        .args(["add", "--amount", "500", "--category", "Food", "-m", "feast", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn add_rejects_blank_description() {
    let data_dir = TempDir::new().unwrap();

    expense_command(&data_dir)
        .args(["add", "--amount", "5", "--category", "Food", "-m", "  ", "--yes"])
        .assert()
        .failure()
        .stderr(contains("description is required"));

    expense_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn budget_reports_overspending() {
    let data_dir = TempDir::new().unwrap();
    add_lunch(&data_dir);

    expense_command(&data_dir)
        .args(["budget", "--limit", "10"])
        .assert()
        .success()
        .stdout(
            contains("-2.50 left for the month (spent 12.50 out of 10.00)")
                .and(contains("Budget exceeded!")),
        );
}

#[test]
fn budget_uses_configured_limit() {
    let data_dir = TempDir::new().unwrap();
    add_lunch(&data_dir);

    expense_command(&data_dir)
        .arg("budget")
        .assert()
        .success()
        .stdout(
            contains("3987.50 left for the month (spent 12.50 out of 4000.00)")
                .and(contains("Budget exceeded!").not()),
        );
}

#[test]
fn export_then_import_replaces_collection() {
    let data_dir = TempDir::new().unwrap();
    add_lunch(&data_dir);
    let csv_path = data_dir.path().join("backup.csv");

    expense_command(&data_dir)
        .arg("export")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(contains("Exported 1 expenses"));

    let exported = std::fs::read_to_string(&csv_path).unwrap();
    assert!(exported.starts_with("expense_date,amount,category,description\n"));
    assert!(exported.contains(",12.50,Food,lunch"));

    let other_csv = data_dir.path().join("other.csv");
    std::fs::write(
        &other_csv,
        "expense_date,amount,category,description\n\
         2024-01-01,10,Travel,bus\n2024-01-02,20,School,books\n",
    )
    .unwrap();

    expense_command(&data_dir)
        .arg("import")
        .arg(&other_csv)
        .assert()
        .success()
        .stdout(contains("Imported 2 expenses").and(contains("Replaced 1 previously stored")));

    expense_command(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("books").and(contains("bus")).and(contains("lunch").not()));
}

#[test]
fn import_rejects_non_csv_file() {
    let data_dir = TempDir::new().unwrap();
    let txt_path = data_dir.path().join("expenses.txt");
    std::fs::write(&txt_path, "expense_date,amount,category,description\n").unwrap();

    expense_command(&data_dir)
        .arg("import")
        .arg(&txt_path)
        .assert()
        .failure()
        .stderr(contains("is not a .csv file"));
}

#[test]
fn config_writes_default_settings() {
    let data_dir = TempDir::new().unwrap();

    expense_command(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Categories:    Food, Travel, School, Toys, Family"));

    assert!(data_dir.path().join("config.json").exists());
}
