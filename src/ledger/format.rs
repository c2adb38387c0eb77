//! INI codec for the ledger file.
//!
//! The on-disk format is the contract with the MWMan.php loader, which
//! reads the file with PHP's `parse_ini_file`: `[section]` headers and
//! `name = 1` / `name = 0` entries. Writing always emits `1`/`0`; parsing
//! additionally accepts the boolean spellings PHP and Python's
//! configparser understand.

use std::collections::BTreeMap;

/// Section name → package name → active flag.
pub type Sections = BTreeMap<String, BTreeMap<String, bool>>;

/// Parse ledger file content.
pub fn parse(content: &str) -> Result<Sections, String> {
    let mut sections = Sections::new();
    let mut current: Option<String> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        let lineno = idx + 1;

        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = name.trim();
            if name.is_empty() {
                return Err(format!("line {}: empty section name", lineno));
            }
            sections.entry(name.to_string()).or_default();
            current = Some(name.to_string());
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(format!("line {}: expected 'name = value'", lineno));
        };

        let Some(section) = &current else {
            return Err(format!("line {}: entry outside of any section", lineno));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(format!("line {}: empty package name", lineno));
        }

        let Some(active) = parse_flag(value.trim()) else {
            return Err(format!("line {}: '{}' is not a flag", lineno, value.trim()));
        };

        sections
            .get_mut(section)
            .expect("current section was inserted on its header line")
            .insert(key.to_string(), active);
    }

    Ok(sections)
}

/// Serialize sections back to the on-disk format.
pub fn serialize(sections: &Sections) -> String {
    let mut out = String::new();

    for (section, entries) in sections {
        out.push('[');
        out.push_str(section);
        out.push_str("]\n");

        for (name, active) in entries {
            out.push_str(name);
            out.push_str(" = ");
            out.push(if *active { '1' } else { '0' });
            out.push('\n');
        }

        out.push('\n');
    }

    out
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
