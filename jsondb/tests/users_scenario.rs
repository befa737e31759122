//! End-to-end walk through a small users collection

use jsondb::{Driver, ErrorKind, NullLogger, Options};
use serde::{Deserialize, Serialize};
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct User {
    name: String,
}

fn user(name: &str) -> User {
    User {
        name: name.to_string(),
    }
}

#[test]
fn test_users_scenario() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("data");
    assert!(!root.exists());

    let db = Driver::open(&root, Options::new().with_logger(NullLogger)).unwrap();
    assert!(root.is_dir());

    db.write("users", "john", &user("John")).unwrap();

    let file = root.join("users").join("john.json");
    let text = fs::read_to_string(&file).unwrap();
    assert_eq!(text, "{\n\t\"Name\": \"John\"\n}\n");

    let mut target = User {
        name: String::new(),
    };
    db.read_into("users", "john", &mut target).unwrap();
    assert_eq!(target.name, "John");

    let records = db.read_all("users").unwrap();
    assert_eq!(records.len(), 1);
    let parsed: User = serde_json::from_str(&records[0]).unwrap();
    assert_eq!(parsed, user("John"));
}

#[test]
fn test_reopen_sees_previous_data() {
    let temp = TempDir::new().unwrap();

    {
        let db = Driver::open(temp.path(), Options::new().with_logger(NullLogger)).unwrap();
        db.write("users", "leah", &user("Leah")).unwrap();
    }

    let db = Driver::open(temp.path(), Options::new().with_logger(NullLogger)).unwrap();
    let leah: User = db.read("users", "leah").unwrap();
    assert_eq!(leah, user("Leah"));
}

#[test]
fn test_read_all_returns_every_written_record() {
    let temp = TempDir::new().unwrap();
    let db = Driver::open(temp.path(), Options::new().with_logger(NullLogger)).unwrap();

    let names = ["John", "Paul", "Vince", "Leah", "Dee", "Faith"];
    for name in names {
        db.write("users", name, &user(name)).unwrap();
    }

    let mut parsed: Vec<String> = db
        .read_all("users")
        .unwrap()
        .iter()
        .map(|raw| serde_json::from_str::<User>(raw).unwrap().name)
        .collect();
    parsed.sort();

    let mut expected: Vec<String> = names.iter().map(|n| n.to_string()).collect();
    expected.sort();
    assert_eq!(parsed, expected);
}

#[test]
fn test_delete_resource_then_collection() {
    let temp = TempDir::new().unwrap();
    let db = Driver::open(temp.path(), Options::new().with_logger(NullLogger)).unwrap();

    db.write("users", "john", &user("John")).unwrap();
    db.write("users", "paul", &user("Paul")).unwrap();

    db.delete("users", "john").unwrap();
    assert_eq!(db.list("users").unwrap(), vec!["paul"]);
    assert_eq!(
        db.read::<User>("users", "john").unwrap_err().kind(),
        ErrorKind::NotFound
    );

    db.delete("users", "").unwrap();
    assert!(!temp.path().join("users").exists());
    assert_eq!(db.read_all("users").unwrap_err().kind(), ErrorKind::NotFound);

    // The collection can be recreated afterwards
    db.write("users", "dee", &user("Dee")).unwrap();
    assert_eq!(db.list("users").unwrap(), vec!["dee"]);
}

#[test]
fn test_accepts_dynamic_json_values() {
    let temp = TempDir::new().unwrap();
    let db = Driver::open(temp.path(), Options::new().with_logger(NullLogger)).unwrap();

    let doc = serde_json::json!({
        "tags": ["a", "b"],
        "nested": { "ok": true },
        "count": 3
    });
    db.write("docs", "one", &doc).unwrap();

    let back: serde_json::Value = db.read("docs", "one").unwrap();
    assert_eq!(back, doc);
}
