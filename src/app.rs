mod config;
mod history;
mod value;

use std::{
    fs::File,
    io::{self, Cursor},
    path::Path,
};

use anyhow::Context;
use ordarr::{ArrayError, OrderedArray};

use crate::command::{self, Command};
pub use config::{config_path, load_config, store_config, Config};
use history::{Action, History};
pub use value::{load_values, store_values, Value};

/// What the client should do after running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct App {
    filename: String,
    backup: String,
    config: Config,
    array: OrderedArray<Value>,
    history: History<Value>,
}

impl App {
    pub fn load(p: String) -> anyhow::Result<Self> {
        let config = load_config(&p).with_context(|| format!("reading {}", config_path(&p)))?;
        let values = load_values(&p).with_context(|| format!("reading {}", p))?;
        tracing::debug!(
            file = %p,
            capacity = config.capacity,
            loaded = values.len(),
            "loading array"
        );
        Self::new(p.clone(), config, values)
            .with_context(|| format!("{} does not fit in the configured capacity", p))
    }

    pub fn new(filename: String, config: Config, values: Vec<Value>) -> Result<Self, ArrayError> {
        let mut array = OrderedArray::new(config.capacity);
        array.try_extend(values)?;
        Ok(Self {
            backup: format!("{}.bck", filename),
            filename,
            config,
            array,
            history: History::default(),
        })
    }

    pub fn array(&self) -> &OrderedArray<Value> {
        &self.array
    }

    pub fn execute(&mut self, cmd: Command) -> anyhow::Result<Reply> {
        let text = match cmd {
            Command::Insert(values) => {
                // a batch is inserted whole or not at all
                let room = self.array.capacity() - self.array.count();
                if values.len() > room {
                    tracing::debug!(batch = values.len(), room, "rejecting insert batch");
                    return Err(ArrayError::Overflow {
                        capacity: self.array.capacity(),
                    }
                    .into());
                }
                let mut placed = Vec::with_capacity(values.len());
                for v in values {
                    let index = self.insert(v.clone())?;
                    placed.push(format!("{} at {}", v, index));
                }
                format!("inserted {}", placed.join(", "))
            }
            Command::Delete(v) => {
                if self.delete(&v) {
                    format!("deleted {}", v)
                } else {
                    format!("{} not found", v)
                }
            }
            Command::Search(v) => match self.array.search(&v) {
                Some(found) => format!("found {}", found),
                None => format!("{} not found", v),
            },
            Command::Find(v) => self.array.find(&v).to_string(),
            Command::Get(i) => {
                let index = usize::try_from(i)
                    .map_err(|_| anyhow::anyhow!("index {} is out of range", i))?;
                self.array.get(index)?.to_string()
            }
            Command::Count => format!(
                "{} items, capacity {}",
                self.array.count(),
                self.array.capacity()
            ),
            Command::Show => self.array.to_string(),
            Command::Traverse => {
                let mut lines = Vec::new();
                self.array.traverse(|v| lines.push(v.to_string()));
                lines.join("\n")
            }
            Command::Sort(algo, mut values) => {
                algo.sort(&mut values);
                let values: Vec<String> = values.iter().map(Value::to_string).collect();
                format!("[{}]", values.join(", "))
            }
            Command::Undo => {
                if self.undo()? {
                    self.array.to_string()
                } else {
                    "nothing to undo".to_string()
                }
            }
            Command::Redo => {
                if self.redo()? {
                    self.array.to_string()
                } else {
                    "nothing to redo".to_string()
                }
            }
            Command::Save => {
                self.save()
                    .with_context(|| format!("failed to save {}", self.filename))?;
                format!("saved {} items to {}", self.array.count(), self.filename)
            }
            Command::Help => command::help(),
            Command::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    pub fn undo(&mut self) -> Result<bool, ArrayError> {
        let undone = self.history.undo(&mut self.array)?;
        self.backup();
        Ok(undone)
    }

    pub fn redo(&mut self) -> Result<bool, ArrayError> {
        let redone = self.history.redo(&mut self.array)?;
        self.backup();
        Ok(redone)
    }

    pub fn save(&self) -> io::Result<()> {
        self.save_to(&self.filename)
    }

    pub fn save_to<P: AsRef<Path>>(&self, p: P) -> io::Result<()> {
        File::create(p.as_ref()).and_then(|f| store_values(f, self.array.iter()))?;
        let config = config_path(&p);
        if !Path::new(&config).exists() {
            File::create(&config).and_then(|f| store_config(f, self.config))?;
        }
        Ok(())
    }

    /// Writes `index,value` rows to `FILE-export.csv`, returning that path.
    pub fn export(&self) -> io::Result<String> {
        let path = format!("{}-export.csv", self.filename);
        let mut w = csv::Writer::from_path(&path)?;
        w.write_record(["index", "value"])?;
        for (i, v) in self.array.iter().enumerate() {
            w.write_record([i.to_string(), v.to_string()])?;
        }
        w.flush()?;
        Ok(path)
    }

    fn backup(&self) {
        if let Err(e) = self.save_to(&self.backup) {
            tracing::warn!("failed to write backup {}: {}", self.backup, e);
        }
    }
}

/// Actions that influence the history
impl App {
    pub fn insert(&mut self, v: Value) -> Result<usize, ArrayError> {
        let index = self.array.insert(v.clone())?;
        tracing::trace!(value = %v, index, "inserted");
        self.history.frwd(Action::Insert(v));
        self.backup();
        Ok(index)
    }

    pub fn delete(&mut self, v: &Value) -> bool {
        match self.array.remove(v) {
            Some(removed) => {
                tracing::trace!(value = %removed, "deleted");
                self.history.frwd(Action::Delete(removed));
                self.backup();
                true
            }
            None => false,
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        tracing::debug!("auto saving {}", self.filename);
        match self.save() {
            Err(e) => {
                eprintln!("Fatal error writing file '{}'!!", self.filename);
                eprintln!("{:?}", e);
                let mut s = Vec::new();
                let c = Cursor::new(&mut s);
                match store_values(c, self.array.iter()) {
                    Ok(_) => eprintln!("{}", String::from_utf8_lossy(&s)),
                    Err(e) => {
                        eprintln!("Failed to serialize csv in memory: {:?}", e);
                        eprintln!("{}", self.array);
                    }
                };
            }
            Ok(()) => {
                let _ = std::fs::remove_file(&self.backup);
                let _ = std::fs::remove_file(config_path(&self.backup));
            }
        }
    }
}
