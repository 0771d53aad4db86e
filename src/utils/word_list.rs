use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

/// Keeps only the alphabetic characters of a line, lowercased. Punctuation is
/// collapsed rather than split on, so "re-enter" becomes "reenter".
pub fn sanitize_line(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Sanitizes every line, dropping lines left empty
pub fn parse_word_list<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = sanitize_line(&line?);
        if word.is_empty() {
            continue;
        }
        words.push(word);
    }
    Ok(words)
}

pub fn read_word_file<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let words = parse_word_list(BufReader::new(file))?;
    debug!("Read {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}
