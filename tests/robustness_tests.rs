use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_json_handling() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"retailer": "Target", "items": [ "#).unwrap();

    let mut cmd = Command::new(cargo_bin!("receipt-processor"));
    cmd.arg("score").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid receipt document"));
}

#[test]
fn test_wrong_field_types() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"retailer": 42, "purchaseDate": "2022-01-01", "purchaseTime": "13:01", "items": [], "total": "1.00"}}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("receipt-processor"));
    cmd.arg("score").arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid receipt document"));
}

#[test]
fn test_validation_failures_name_each_field() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"retailer": "Target", "purchaseDate": "2022-02-30", "purchaseTime": "13:01", "items": [{{"shortDescription": "Pizza", "price": "1.999"}}], "total": ""}}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("receipt-processor"));
    cmd.arg("score").arg(file.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("purchaseDate"))
        .stderr(predicate::str::contains("items[0].price"))
        .stderr(predicate::str::contains("total"))
        .stderr(predicate::str::contains("retailer").not());
}
