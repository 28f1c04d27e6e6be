//! Requests accepted by `phonedir serve`
//!
//! One JSON object per line, tagged by `op`:
//!
//! ```text
//! {"op":"add","contact":{"number":"0123456789","first_name":"Foo","last_name":"Bar"}}
//! {"op":"find","term":"Foo"}
//! ```

use serde::Deserialize;
use serde_json::{json, Value};

use crate::contact::Contact;
use crate::directory::{Directory, DirectoryResult};

/// A single directory operation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    Add {
        contact: Contact,
    },
    Update {
        number: String,
        contact: Contact,
    },
    Get {
        number: String,
    },
    FindByPrefix {
        prefix: String,
    },
    FindByName {
        #[serde(default)]
        first_name: String,
        #[serde(default)]
        last_name: String,
    },
    FindByCity {
        city: String,
    },
    Find {
        term: String,
    },
    Delete {
        number: String,
    },
}

impl Request {
    /// Apply the request and return its response payload.
    ///
    /// Search results are sorted by number so output is deterministic.
    pub fn execute(self, directory: &mut Directory) -> DirectoryResult<Value> {
        let data = match self {
            Request::Add { contact } => {
                directory.add(contact)?;
                Value::Null
            }
            Request::Update { number, contact } => {
                directory.update(&number, contact)?;
                Value::Null
            }
            Request::Get { number } => json!(directory.get(&number)),
            Request::FindByPrefix { prefix } => sorted(directory.find_by_prefix(&prefix)),
            Request::FindByName {
                first_name,
                last_name,
            } => sorted(directory.find_by_name(&first_name, &last_name)),
            Request::FindByCity { city } => sorted(directory.find_by_city(&city)),
            Request::Find { term } => sorted(directory.find(&term)),
            Request::Delete { number } => json!(directory.delete(&number)),
        };
        Ok(data)
    }
}

fn sorted(mut contacts: Vec<Contact>) -> Value {
    contacts.sort_by(|a, b| a.number.cmp(&b.number));
    json!(contacts)
}
