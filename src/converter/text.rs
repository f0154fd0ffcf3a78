//! Plain-text rule format.
//!
//! One rule per line, LF-terminated, with the match type encoded as a
//! prefix:
//!
//! ```text
//! keyword:ads       Plain
//! regexp:^ad\d+\.   Regex
//! example.com       Domain (no prefix)
//! full:a.example    Full
//! ```

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::geosite::Domain;
use crate::{Error, MatchType, Result};

/// Writer for the text rule format.
pub struct TextWriter;

impl TextWriter {
    /// Write rules to `writer`, one line each.
    ///
    /// Fails with [`Error::InvalidRuleType`] on the first rule whose match
    /// type code is unknown.
    pub fn write<W: Write>(rules: &[&Domain], writer: W) -> Result<()> {
        let mut bw = BufWriter::new(writer);
        for rule in rules {
            bw.write_all(prefix(rule)?.as_bytes())?;
            bw.write_all(rule.value.as_bytes())?;
            bw.write_all(b"\n")?;
        }
        bw.flush()?;
        Ok(())
    }

    /// Render rules into a string.
    pub fn render(rules: &[&Domain]) -> Result<String> {
        let mut out = String::new();
        for rule in rules {
            out.push_str(prefix(rule)?);
            out.push_str(&rule.value);
            out.push('\n');
        }
        Ok(out)
    }

    /// Write rules to `path`.
    ///
    /// Rules are written into a sibling temp file which is renamed over
    /// `path` once complete. On failure the temp file is removed and `path`
    /// is left untouched.
    pub fn write_file(rules: &[&Domain], path: &Path) -> Result<()> {
        Self::validate(rules)?;

        let temp_path = temp_path(path);
        let result = File::create(&temp_path)
            .map_err(Error::from)
            .and_then(|mut file| {
                Self::write(rules, &mut file)?;
                file.sync_all()?;
                Ok(())
            })
            .and_then(|()| fs::rename(&temp_path, path).map_err(Error::from));

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }

    /// Check every match type code without writing anything.
    pub fn validate(rules: &[&Domain]) -> Result<()> {
        rules.iter().try_for_each(|rule| prefix(rule).map(|_| ()))
    }
}

fn prefix(rule: &Domain) -> Result<&'static str> {
    rule.match_type()
        .map(|t| t.prefix())
        .ok_or(Error::InvalidRuleType(rule.r#type))
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// A rule read back from the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRule {
    pub match_type: MatchType,
    pub value: String,
}

/// Parser for the text rule format.
pub struct TextParser;

impl TextParser {
    /// Parse rules from a reader.
    ///
    /// Blank lines and `#` comment lines are skipped. Values are kept
    /// verbatim apart from a trailing `\r`.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TextRule>> {
        let mut rules = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let (match_type, value) = MatchType::split_line(line);
            rules.push(TextRule {
                match_type,
                value: value.to_string(),
            });
        }
        Ok(rules)
    }

    /// Parse rules from a file.
    pub fn parse_file(path: &Path) -> Result<Vec<TextRule>> {
        Self::parse(File::open(path)?)
    }
}
