//! Flat-file question store.
//!
//! One question per line, six `;`-separated fields:
//!
//! ```text
//! question text;option 1;option 2;option 3;option 4;correct index
//! ```
//!
//! The correct index is 0-based. Delimiters inside text are replaced with
//! `,` on save, so a bank without `;` in any field round-trips exactly.
//! Loading never aborts on bad content: malformed lines, a missing file and
//! records beyond capacity all become [`StoreWarning`]s.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::QuizError;
use crate::model::{QuestionBank, QuestionRecord, DEFAULT_CAPACITY, OPTION_COUNT};

/// Field separator in the question file.
pub const DELIMITER: char = ';';

/// What a delimiter inside question or option text is written as.
pub const DELIMITER_REPLACEMENT: char = ',';

/// Default location of the question file.
pub const DEFAULT_QUESTIONS_FILE: &str = "quiz_questions.txt";

/// text + four options + correct index
const FIELD_COUNT: usize = OPTION_COUNT + 2;

/// A recoverable problem found while loading.
#[derive(Debug)]
pub struct StoreWarning {
    /// 1-based line number, `None` for file-level warnings.
    pub line_number: Option<usize>,
    /// The underlying condition.
    pub error: QuizError,
}

impl std::fmt::Display for StoreWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line_number {
            Some(n) if !matches!(self.error, QuizError::MalformedRecordLine { .. }) => {
                write!(f, "line {n}: {}", self.error)
            }
            _ => write!(f, "{}", self.error),
        }
    }
}

/// Result of loading a question file.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Every record that parsed and fit in the bank, in file order.
    pub bank: QuestionBank,
    /// One entry per skipped line, plus a not-found entry for a missing file.
    pub warnings: Vec<StoreWarning>,
}

/// Reads and writes a question bank at a fixed path.
#[derive(Debug, Clone)]
pub struct QuestionStore {
    path: PathBuf,
    capacity: usize,
}

impl QuestionStore {
    /// Create a store for `path` with the default capacity.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Override the bank capacity used on load.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Load the whole file.
    ///
    /// A missing file yields an empty bank and a [`QuizError::StoreNotFound`]
    /// warning. Only genuine read failures (permissions, invalid UTF-8) are
    /// returned as errors.
    pub fn load(&self) -> Result<LoadOutcome, QuizError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!("question file not found: {}", self.path.display());
                return Ok(LoadOutcome {
                    bank: QuestionBank::with_capacity(self.capacity),
                    warnings: vec![StoreWarning {
                        line_number: None,
                        error: QuizError::StoreNotFound(self.path.clone()),
                    }],
                });
            }
            Err(source) => {
                return Err(QuizError::StoreReadFailure {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let outcome =
            read_bank(BufReader::new(file), self.capacity).map_err(|source| {
                QuizError::StoreReadFailure {
                    path: self.path.clone(),
                    source,
                }
            })?;

        tracing::info!(
            "loaded {} question(s) from {} ({} warning(s))",
            outcome.bank.len(),
            self.path.display(),
            outcome.warnings.len()
        );
        Ok(outcome)
    }

    /// Overwrite the file with `bank`.
    ///
    /// On failure the bank is untouched and the save can be retried; the file
    /// itself may be left partially written.
    pub fn save(&self, bank: &QuestionBank) -> Result<(), QuizError> {
        let to_write_failure = |source| QuizError::StoreWriteFailure {
            path: self.path.clone(),
            source,
        };

        let file = File::create(&self.path).map_err(to_write_failure)?;
        let mut writer = BufWriter::new(file);
        write_bank(bank, &mut writer).map_err(to_write_failure)?;
        writer.flush().map_err(to_write_failure)?;

        tracing::info!(
            "saved {} question(s) to {}",
            bank.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Encode one record as a line, without the terminator.
pub fn encode_record(question: &QuestionRecord) -> String {
    let mut line = escape_field(question.text());
    for option in question.options() {
        line.push(DELIMITER);
        line.push_str(&escape_field(option));
    }
    line.push(DELIMITER);
    line.push_str(&question.correct_index().to_string());
    line
}

fn escape_field(field: &str) -> String {
    field.replace(DELIMITER, &DELIMITER_REPLACEMENT.to_string())
}

/// Parse one stored line.
///
/// Fields past the sixth are ignored. Too few fields, a non-integer index or
/// an index outside 0-3 are all reported as
/// [`QuizError::MalformedRecordLine`].
pub fn parse_record(line: &str, line_number: usize) -> Result<QuestionRecord, QuizError> {
    let malformed = |reason: String| QuizError::MalformedRecordLine {
        line_number,
        reason,
    };

    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} fields, found {}: {line}",
            fields.len()
        )));
    }

    let index_field = fields[FIELD_COUNT - 1];
    let correct_index: i64 = index_field
        .parse()
        .map_err(|_| malformed(format!("correct index is not an integer: {index_field:?}")))?;
    if !(0..OPTION_COUNT as i64).contains(&correct_index) {
        return Err(malformed(format!(
            "correct index {correct_index} is out of range 0-3"
        )));
    }

    let options = [fields[1], fields[2], fields[3], fields[4]].map(str::to_string);
    QuestionRecord::new(fields[0], options, correct_index as usize)
}

/// Parse a whole question file from memory (useful for testing).
pub fn parse_bank_str(content: &str, capacity: usize) -> LoadOutcome {
    match read_bank(content.as_bytes(), capacity) {
        Ok(outcome) => outcome,
        // reading from a &str cannot fail
        Err(_) => LoadOutcome {
            bank: QuestionBank::with_capacity(capacity),
            warnings: Vec::new(),
        },
    }
}

/// Read records line by line, collecting warnings for every skipped line.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the load; only genuine I/O errors are returned.
pub fn read_bank<R: BufRead>(reader: R, capacity: usize) -> io::Result<LoadOutcome> {
    let mut bank = QuestionBank::with_capacity(capacity);
    let mut warnings = Vec::new();

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw?;
        let line_number = idx + 1;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let line = match String::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("line {line_number}: invalid UTF-8 replaced");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let question = match parse_record(&line, line_number) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!("skipping invalid question line: {e}");
                warnings.push(StoreWarning {
                    line_number: Some(line_number),
                    error: e,
                });
                continue;
            }
        };

        if let Err(e) = bank.push(question) {
            warnings.push(StoreWarning {
                line_number: Some(line_number),
                error: e,
            });
        }
    }

    Ok(LoadOutcome { bank, warnings })
}

/// Write every record of `bank`, one per line.
pub fn write_bank<W: Write>(bank: &QuestionBank, writer: &mut W) -> io::Result<()> {
    for question in bank {
        writeln!(writer, "{}", encode_record(question))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_question;

    fn record(text: &str, options: [&str; 4], correct_index: usize) -> QuestionRecord {
        QuestionRecord::new(text, options.map(String::from), correct_index).unwrap()
    }

    #[test]
    fn encode_line_format() {
        let q = record("2+2?", ["3", "4", "5", "6"], 1);
        assert_eq!(encode_record(&q), "2+2?;3;4;5;6;1");
    }

    #[test]
    fn encode_replaces_delimiters() {
        let q = record("a;b", ["x;y", "2", "3", "4"], 0);
        assert_eq!(encode_record(&q), "a,b;x,y;2;3;4;0");
    }

    #[test]
    fn parse_ignores_extra_fields() {
        let q = parse_record("q;a;b;c;d;3;extra;more", 1).unwrap();
        assert_eq!(q.text(), "q");
        assert_eq!(q.options()[3], "d");
        assert_eq!(q.correct_index(), 3);
    }

    #[test]
    fn parse_rejects_non_integer_index() {
        let err = parse_record("q;a;b;c;d;two", 7).unwrap_err();
        assert!(matches!(
            err,
            QuizError::MalformedRecordLine { line_number: 7, .. }
        ));
    }

    #[test]
    fn parse_rejects_out_of_range_index() {
        assert!(parse_record("q;a;b;c;d;4", 1).is_err());
        assert!(parse_record("q;a;b;c;d;-1", 1).is_err());
    }

    #[test]
    fn malformed_line_is_skipped_with_one_warning() {
        let content = "2+2?;3;4;5;6;1\nonly;three;fields\n";
        let outcome = parse_bank_str(content, DEFAULT_CAPACITY);
        assert_eq!(outcome.bank.len(), 1);
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].line_number, Some(2));
    }

    #[test]
    fn loading_continues_after_bad_lines() {
        let content = "bad\nq1;a;b;c;d;0\nq2;a;b;c;d;x\nq3;a;b;c;d;2\n";
        let outcome = parse_bank_str(content, DEFAULT_CAPACITY);
        let texts: Vec<_> = outcome.bank.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["q1", "q3"]);
        assert_eq!(outcome.warnings.len(), 2);
    }

    #[test]
    fn capacity_skips_remaining_lines() {
        let content = "q1;a;b;c;d;0\nq2;a;b;c;d;1\nq3;a;b;c;d;2\nq4;a;b;c;d;3\n";
        let outcome = parse_bank_str(content, 2);
        assert_eq!(outcome.bank.len(), 2);
        assert_eq!(outcome.warnings.len(), 2);
        assert!(outcome
            .warnings
            .iter()
            .all(|w| matches!(w.error, QuizError::CapacityExceeded { capacity: 2 })));
    }

    #[test]
    fn invalid_utf8_line_does_not_abort_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        std::fs::write(
            &path,
            b"good;a;b;c;d;0\ncaf\xe9;a;b;c;d;1\nalso good;a;b;c;d;2\n",
        )
        .unwrap();

        let outcome = QuestionStore::new(&path).load().unwrap();
        let texts: Vec<_> = outcome.bank.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["good", "caf\u{FFFD}", "also good"]);
        assert_eq!(outcome.bank.get(1).unwrap().correct_index(), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let outcome = parse_bank_str("q1;a;b;c;d;0\r\nq2;a;b;c;d;3\r\n", DEFAULT_CAPACITY);
        assert_eq!(outcome.bank.len(), 2);
        assert_eq!(outcome.bank.get(1).unwrap().options()[3], "d");
        assert_eq!(outcome.bank.get(1).unwrap().correct_index(), 3);
    }

    #[test]
    fn missing_file_loads_empty_bank() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuestionStore::new(dir.path().join("nope.txt"));
        let outcome = store.load().unwrap();
        assert!(outcome.bank.is_empty());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(matches!(
            outcome.warnings[0].error,
            QuizError::StoreNotFound(_)
        ));
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuestionStore::new(dir.path().join("questions.txt"));

        let mut bank = QuestionBank::default();
        bank.push(record("2+2?", ["3", "4", "5", "6"], 1)).unwrap();
        bank.push(record("Largest planet?", ["Mars", "Venus", "Jupiter", "Earth"], 2))
            .unwrap();
        bank.push(sample_question("Greek letters, in order", 0))
            .unwrap();

        store.save(&bank).unwrap();
        let outcome = store.load().unwrap();

        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.bank, bank);
    }

    #[test]
    fn save_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        std::fs::write(&path, "old;a;b;c;d;0\nolder;a;b;c;d;1\n").unwrap();

        let mut bank = QuestionBank::default();
        bank.push(sample_question("new", 3)).unwrap();
        QuestionStore::new(&path).save(&bank).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "new;alpha;beta;gamma;delta;3\n");
    }

    #[test]
    fn delimiters_become_commas_after_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuestionStore::new(dir.path().join("questions.txt"));

        let mut bank = QuestionBank::default();
        bank.push(record("pick one; quickly", ["a;b", "c", "d", "e"], 0))
            .unwrap();
        store.save(&bank).unwrap();

        let loaded = store.load().unwrap().bank;
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(0).unwrap().text(), "pick one, quickly");
        assert_eq!(loaded.get(0).unwrap().options()[0], "a,b");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = QuestionStore::new(dir.path().join("no/such/dir/questions.txt"));
        let mut bank = QuestionBank::default();
        bank.push(sample_question("q", 0)).unwrap();

        let err = store.save(&bank).unwrap_err();
        assert!(matches!(err, QuizError::StoreWriteFailure { .. }));
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn store_capacity_applies_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        std::fs::write(&path, "q1;a;b;c;d;0\nq2;a;b;c;d;0\n").unwrap();

        let outcome = QuestionStore::new(&path).with_capacity(1).load().unwrap();
        assert_eq!(outcome.bank.len(), 1);
        assert_eq!(outcome.bank.capacity(), 1);
        assert_eq!(outcome.warnings.len(), 1);
    }
}
