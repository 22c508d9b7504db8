use std::{num::IntErrorKind, str::FromStr};

use lazy_static::lazy_static;
use ordarr::sort::{bubble_sort, insertion_sort, selection_sort};

use crate::app::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Insert,
    Delete,
    Search,
    Find,
    Get,
    Count,
    Show,
    Traverse,
    Sort,
    Undo,
    Redo,
    Save,
    Help,
    Quit,
}

struct Entry {
    name: &'static str,
    kind: Kind,
    usage: &'static str,
}

macro_rules! e {
    ($name:literal => $kind:ident, $usage:literal) => {
        Entry {
            name: $name,
            kind: Kind::$kind,
            usage: $usage,
        }
    };
}

lazy_static! {
    static ref COMMANDS: Vec<Entry> = vec![
        e!("insert" => Insert, "insert V...        insert values, keeping the array sorted"),
        e!("delete" => Delete, "delete V           delete one occurrence of V"),
        e!("search" => Search, "search V           look V up"),
        e!("find" => Find, "find V             index of V, or where it would be inserted"),
        e!("get" => Get, "get I              value at index I"),
        e!("count" => Count, "count              number of values stored"),
        e!("show" => Show, "show               print the whole array"),
        e!("traverse" => Traverse, "traverse           print the values one per line"),
        e!("sort" => Sort, "sort ALGO V...     sort V... with bubble, selection or insertion"),
        e!("undo" => Undo, "undo               revert the last insert or delete"),
        e!("redo" => Redo, "redo               replay the last undone change"),
        e!("save" => Save, "save               write the array to its file"),
        e!("help" => Help, "help               show this message"),
        e!("quit" => Quit, "quit               save and exit"),
    ];
}

/// Commands may be abbreviated to any prefix that names only one of them.
fn resolve(word: &str) -> Result<Kind, &'static str> {
    if let Some(e) = COMMANDS.iter().find(|e| e.name == word) {
        return Ok(e.kind);
    }
    let mut matches = COMMANDS.iter().filter(|e| e.name.starts_with(word));
    match (matches.next(), matches.next()) {
        (Some(e), None) => Ok(e.kind),
        (Some(_), Some(_)) => Err("ambiguous command, try 'help'"),
        (None, _) => Err("unknown command, try 'help'"),
    }
}

pub fn help() -> String {
    COMMANDS
        .iter()
        .map(|e| e.usage)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgo {
    Bubble,
    Selection,
    Insertion,
}

impl SortAlgo {
    pub fn sort<T: Ord>(self, s: &mut [T]) {
        match self {
            Self::Bubble => bubble_sort(s),
            Self::Selection => selection_sort(s),
            Self::Insertion => insertion_sort(s),
        }
    }
}

impl FromStr for SortAlgo {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bubble" => Ok(Self::Bubble),
            "selection" => Ok(Self::Selection),
            "insertion" => Ok(Self::Insertion),
            _ => Err("unknown algorithm, expected bubble, selection or insertion"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(Vec<Value>),
    Delete(Value),
    Search(Value),
    Find(Value),
    Get(i128),
    Count,
    Show,
    Traverse,
    Sort(SortAlgo, Vec<Value>),
    Undo,
    Redo,
    Save,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = &'static str;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let value = || {
            if rest.is_empty() {
                Err("missing value")
            } else {
                Ok(Value::from(rest))
            }
        };
        Ok(match resolve(word)? {
            Kind::Insert => {
                let values: Vec<Value> = rest.split_whitespace().map(Value::from).collect();
                if values.is_empty() {
                    return Err("missing value");
                }
                Command::Insert(values)
            }
            Kind::Delete => Command::Delete(value()?),
            Kind::Search => Command::Search(value()?),
            Kind::Find => Command::Find(value()?),
            Kind::Get => Command::Get(rest.parse::<i128>().map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "index is out of range",
                _ => "expected an integer index",
            })?),
            Kind::Count => Command::Count,
            Kind::Show => Command::Show,
            Kind::Traverse => Command::Traverse,
            Kind::Sort => {
                let mut words = rest.split_whitespace();
                let algo: SortAlgo = words.next().ok_or("missing algorithm")?.parse()?;
                Command::Sort(algo, words.map(Value::from).collect())
            }
            Kind::Undo => Command::Undo,
            Kind::Redo => Command::Redo,
            Kind::Save => Command::Save,
            Kind::Help => Command::Help,
            Kind::Quit => Command::Quit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_prefixes_resolve() {
        assert_eq!("i 5".parse::<Command>(), Ok(Command::Insert(vec![Value::Int(5)])));
        assert_eq!("sh".parse::<Command>(), Ok(Command::Show));
        assert_eq!(
            "so bubble 2 1".parse::<Command>(),
            Ok(Command::Sort(
                SortAlgo::Bubble,
                vec![Value::Int(2), Value::Int(1)]
            ))
        );
        assert_eq!("sa".parse::<Command>(), Ok(Command::Save));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn ambiguous_and_unknown() {
        assert_eq!("s".parse::<Command>(), Err("ambiguous command, try 'help'"));
        assert_eq!("x".parse::<Command>(), Err("unknown command, try 'help'"));
    }

    #[test]
    fn arguments() {
        assert_eq!("delete".parse::<Command>(), Err("missing value"));
        assert_eq!("insert".parse::<Command>(), Err("missing value"));
        assert_eq!(
            "search  foo bar ".parse::<Command>(),
            Ok(Command::Search(Value::Text("foo bar".into())))
        );
        assert_eq!("get -1".parse::<Command>(), Ok(Command::Get(-1)));
        assert_eq!("get x".parse::<Command>(), Err("expected an integer index"));
    }

    #[test]
    fn huge_indices_are_out_of_range() {
        assert_eq!(
            "get 99999999999999999999".parse::<Command>(),
            Ok(Command::Get(99_999_999_999_999_999_999))
        );
        let past_i128 = format!("get {}0", i128::MAX);
        assert_eq!(past_i128.parse::<Command>(), Err("index is out of range"));
        let below_i128 = format!("get {}0", i128::MIN);
        assert_eq!(below_i128.parse::<Command>(), Err("index is out of range"));
        assert!("sort quick 1".parse::<Command>().is_err());
    }

    #[test]
    fn every_command_has_usage() {
        let help = help();
        for e in COMMANDS.iter() {
            assert!(help.contains(e.name));
        }
    }

    #[test]
    fn each_algo_sorts() {
        for algo in [SortAlgo::Bubble, SortAlgo::Selection, SortAlgo::Insertion] {
            let mut v = vec![3, 1, 2];
            algo.sort(&mut v);
            assert_eq!(v, [1, 2, 3]);
        }
    }
}
