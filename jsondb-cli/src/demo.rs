//! Demonstration data set: a handful of employees stored in `users`

use serde::{Deserialize, Serialize};

/// Collection the demo records live in
pub const USERS: &str = "users";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: serde_json::Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub name: String,
    pub age: serde_json::Number,
    pub contact: String,
    pub company: String,
    pub address: Address,
}

fn user(name: &str, age: u64, contact: &str, company: &str, city: &str) -> User {
    User {
        name: name.to_string(),
        age: age.into(),
        contact: contact.to_string(),
        company: company.to_string(),
        address: Address {
            city: city.to_string(),
            state: "Unitary".to_string(),
            country: "Philippines".to_string(),
            pincode: 1770u64.into(),
        },
    }
}

/// The six demo employees
pub fn employees() -> Vec<User> {
    vec![
        user("John", 25, "1234567890", "ABC", "Negros Oriental"),
        user("Paul", 27, "123s4567890", "Google", "Muntinlupa"),
        user("Vince", 25, "1234567890", "Microsoft", "Cavite"),
        user("Leah", 21, "1234567890", "Twitter", "Alabang"),
        user("Dee", 35, "1234567890", "GMA", "Quezon City"),
        user("Faith", 22, "1234567890", "Facebook", "San Pedro, Laguna"),
    ]
}
