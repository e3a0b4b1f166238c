//! Deck file reading and writing
//!
//! A deck file holds one card per line as `term,definition,mistakes`. Fields
//! are never quoted or escaped, so a comma inside a term or definition cannot
//! be read back.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};

use crate::error::{FlashcardError, FlashcardResult};
use crate::models::Card;

const FIELD_COUNT: usize = 3;

/// Parse every record of a deck
///
/// Blank lines are skipped but still counted, so errors name the physical
/// 1-based line. Parsing stops at the first malformed line and nothing parsed
/// so far is returned, so callers never see a partial deck.
pub fn parse_deck<R: Read>(reader: R) -> FlashcardResult<Vec<Card>> {
    let reader = BufReader::new(reader);

    let mut cards = Vec::new();
    for (index, line) in reader.split(b'\n').enumerate() {
        let line_number = index as u64 + 1;
        let mut line =
            line.map_err(|e| FlashcardError::Io(format!("Failed to read deck: {}", e)))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if line.is_empty() {
            continue;
        }

        let card =
            parse_line(&line).map_err(|reason| FlashcardError::malformed(line_number, reason))?;
        cards.extend(card);
    }

    Ok(cards)
}

/// Parse one non-empty line; `None` if it holds no record
fn parse_line(line: &[u8]) -> Result<Option<Card>, String> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_reader(line);

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record).map_err(|e| e.to_string())? {
        return Ok(None);
    }

    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    let mistakes = record[2].trim().parse::<u32>().map_err(|_| {
        format!(
            "mistake count \"{}\" is not a non-negative integer",
            &record[2]
        )
    })?;

    Ok(Some(Card::with_mistakes(&record[0], &record[1], mistakes)))
}

/// Read a deck file from disk
pub fn read_deck<P: AsRef<Path>>(path: P) -> FlashcardResult<Vec<Card>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FlashcardError::FileNotFound(path.to_path_buf()),
        _ => FlashcardError::Io(format!("Failed to open {}: {}", path.display(), e)),
    })?;

    let cards = parse_deck(file)?;
    log::debug!("parsed {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Write cards in deck format, returning how many were written
pub fn write_deck<'a, W, I>(writer: W, cards: I) -> FlashcardResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Card>,
{
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    let mut count = 0;
    for card in cards {
        let mistakes = card.mistakes.to_string();
        writer
            .write_record([card.term.as_str(), card.definition.as_str(), mistakes.as_str()])
            .map_err(|e| FlashcardError::Io(format!("Failed to write card: {}", e)))?;
        count += 1;
    }

    writer
        .flush()
        .map_err(|e| FlashcardError::Io(format!("Failed to flush deck: {}", e)))?;

    Ok(count)
}

/// Write a deck file atomically (write to temp, then rename)
///
/// The destination is replaced as a whole; on failure it is left untouched.
/// The destination directory must already exist, and an existing
/// `<path>.tmp` sibling is never overwritten.
pub fn write_deck_atomic<'a, P, I>(path: P, cards: I) -> FlashcardResult<usize>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Card>,
{
    let path = path.as_ref();

    let temp_path = temp_path_for(path);
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)
        .map_err(|e| {
            FlashcardError::Io(format!(
                "Failed to create temp file {}: {}",
                temp_path.display(),
                e
            ))
        })?;

    let result = write_deck(&file, cards).and_then(|count| {
        file.sync_all()
            .map_err(|e| FlashcardError::Io(format!("Failed to sync deck: {}", e)))?;
        Ok(count)
    });
    drop(file);

    let count = match result {
        Ok(count) => count,
        Err(e) => {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
    };

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        FlashcardError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    log::debug!("wrote {} cards to {}", count, path.display());
    Ok(count)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
