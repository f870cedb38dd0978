//! Profile file persistence.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use super::{ClassRule, ClassSpec, Config};
use crate::phrase::constraint::CharClass;

// One line of comma-separated fields; ',' and '|' inside a field are
// escaped with '|'. Layout: seed, size, version, max_retries, global
// alphabet, then mode/min/max/alphabet per class in declaration order.
const FIELD_COUNT: usize = 5 + 4 * 4;

pub fn save(config: &Config) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(get_path())?;

    file.write_all(serialize(config).as_bytes())?;
    Ok(())
}

pub fn load(config: &mut Config) -> std::io::Result<()> {
    let path = get_path();
    if !Path::new(&path).exists()
        && let Some(parent) = Path::new(&path).parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Failed to create directory for profile: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(&path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.is_empty() || !parse(line.trim_end_matches('\n'), config) {
        // Empty, malformed, or an older layout: rewrite with defaults.
        save(config)?;
    }

    Ok(())
}

fn serialize(config: &Config) -> String {
    let mut fields = vec![
        escape(&config.seed),
        config.size.to_string(),
        config.version.to_string(),
        config.max_retries.to_string(),
        escape(config.alphabet.as_deref().unwrap_or("")),
    ];
    for class in CharClass::ALL {
        match config.rule(class) {
            ClassRule::Default => {
                fields.extend(["default".into(), String::new(), String::new(), String::new()]);
            }
            ClassRule::Disabled => {
                fields.extend(["off".into(), String::new(), String::new(), String::new()]);
            }
            ClassRule::Custom(spec) => {
                fields.push("custom".into());
                fields.push(spec.min.map(|n| n.to_string()).unwrap_or_default());
                fields.push(spec.max.map(|n| n.to_string()).unwrap_or_default());
                fields.push(escape(spec.alphabet.as_deref().unwrap_or("")));
            }
        }
    }
    format!("{}\n", fields.join(","))
}

fn parse(line: &str, config: &mut Config) -> bool {
    let parts = split_escaped(line, ',');
    if parts.len() != FIELD_COUNT {
        return false;
    }

    config.seed = parts[0].clone();
    config.size = parts[1].parse().unwrap_or(config.size);
    config.version = parts[2].parse().unwrap_or(config.version);
    config.max_retries = parts[3].parse().unwrap_or(config.max_retries);
    config.alphabet = (!parts[4].is_empty()).then(|| parts[4].clone());

    for (i, class) in CharClass::ALL.into_iter().enumerate() {
        let base = 5 + i * 4;
        *config.rule_mut(class) = match parts[base].as_str() {
            "off" => ClassRule::Disabled,
            "custom" => ClassRule::Custom(ClassSpec {
                min: parts[base + 1].parse().ok(),
                max: parts[base + 2].parse().ok(),
                alphabet: (!parts[base + 3].is_empty()).then(|| parts[base + 3].clone()),
            }),
            _ => ClassRule::Default,
        };
    }

    true
}

#[inline]
fn get_path() -> String {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    format!("{}/.config/rndphrase/profile", home)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ',' => out.push_str("|,"),
            '|' => out.push_str("||"),
            _ => out.push(c),
        }
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
