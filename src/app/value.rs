use std::{
    fmt,
    fs::File,
    io::{self, BufReader, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

/// An element of the array as typed by the user.
///
/// Integers sort before text, integers numerically and text lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Value {
    Int(i64),
    Text(String),
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        match trimmed.parse() {
            Ok(i) => Value::Int(i),
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<Value> for String {
    fn from(v: Value) -> String {
        match v {
            Value::Int(i) => i.to_string(),
            Value::Text(s) => s,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Record {
    value: Value,
}

pub fn load_values<P: AsRef<Path>>(path: P) -> io::Result<Vec<Value>> {
    match File::open(path) {
        Ok(f) => {
            let file = BufReader::new(f);
            Ok(csv::Reader::from_reader(file)
                .deserialize::<Record>()
                .map(|r| r.map(|r| r.value))
                .collect::<Result<Vec<_>, _>>()?)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(vec![]),
        Err(e) => Err(e),
    }
}

pub fn store_values<'a, W, I>(writer: W, values: I) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = &'a Value>,
{
    let mut writer = csv::Writer::from_writer(writer);
    for value in values {
        writer.serialize(Record {
            value: value.clone(),
        })?;
    }
    writer.flush()
}
