use assert_cmd::Command;
use predicates::prelude::*;

fn fintrack() -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env_remove("FINTRACK_USER")
        .env_remove("FINTRACK_CURRENCY")
        .env_remove("RUST_LOG");
    cmd
}

const MARCH_SESSION: &str = "1\n1000\nSalary\n01-03-2024\n\n\
                             1\n200\nGift\n15-03-2024\nBirthday\n\
                             2\n300\nFood\n20-03-2024\nGroceries\n\
                             3\n03-2024\n\
                             4\n\
                             5\n";

#[test]
fn test_full_session() {
    fintrack()
        .args(["--name", "Ayush"])
        .write_stdin(MARCH_SESSION)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Welcome to Personal Finance Tracker!\n",
        ))
        .stdout(predicate::str::contains(
            "===== Monthly Report (03-2024) =====\n\
             Total Income : 1200.00\n\
             Total Expense: 300.00\n\
             Net Savings  : 900.00\n\
             \n\
             -- Income by Category --\n  \
             Gift: 200.00\n  \
             Salary: 1000.00\n\
             \n\
             -- Expense by Category --\n  \
             Food: 300.00\n\
             ============================\n\
             Current Balance: Rs.900.00\n",
        ))
        .stdout(predicate::str::contains(
            "===== All-Time Summary =====\n\
             Total Income : 1200.00\n\
             Total Expense: 300.00\n\
             Net Savings  : 900.00\n",
        ))
        .stdout(predicate::str::ends_with("Have a Great Month, Ayush!\n"));
}

#[test]
fn test_currency_prefix() {
    fintrack()
        .args(["--currency", "$"])
        .write_stdin("2\n12.5\nCoffee\n02-01-2025\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance: $-12.50\n"))
        .stdout(predicate::str::ends_with("Have a Great Month, friend!\n"));
}

#[test]
fn test_json_report() {
    fintrack()
        .args(["--format", "json"])
        .write_stdin("1\n50\nGift\n09-09-2024\n\n3\n09-2024\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"month\": \"09-2024\""))
        .stdout(predicate::str::contains("\"total_income\": 5000"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    fintrack()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("Have a Great Month, friend!\n"));
}
