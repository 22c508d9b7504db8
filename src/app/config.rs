use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Copy)]
pub struct Config {
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config { capacity: 10 }
    }
}

pub fn config_path<P: AsRef<Path>>(path: P) -> String {
    format!("{}-config", path.as_ref().display())
}

pub fn load_config<P: AsRef<Path>>(path: P) -> io::Result<Config> {
    match File::open(config_path(path)) {
        Ok(f) => {
            let file = BufReader::new(f);
            Ok(serde_json::from_reader(file).unwrap_or_else(|e| {
                tracing::warn!("ignoring unreadable config: {}", e);
                Config::default()
            }))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(e),
    }
}

pub fn store_config<W>(writer: W, config: Config) -> io::Result<()>
where
    W: Write,
{
    let mut file = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut file, &config)?;
    file.flush()
}
