use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use super::{open_stream, parse_report};
use crate::error::{Error, Result};

/// Occurrence counts of each character read from a source.
///
/// Keys are kept in ascending character order, which is the order the
/// report is written in and the order the tree builder seeds its queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
    total: usize,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every character of `text`.
    pub fn from_text(text: &str) -> Self {
        let table: Self = text.chars().collect();
        log::trace!("Character frequencies: {:?}", table.counts);
        table
    }

    /// Consumes `reader` to its end and counts every character read.
    ///
    /// Fails with [`Error::Io`] if the read fails or the bytes are not UTF-8.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self::from_text(&text))
    }

    /// Opens the file at `path` and counts its characters.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(open_stream(path.as_ref())?)
    }

    /// Records one occurrence of `ch`.
    pub fn record(&mut self, ch: char) {
        *self.counts.entry(ch).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of times `ch` occurred; zero if it never did.
    pub fn get(&self, ch: char) -> usize {
        self.counts.get(&ch).copied().unwrap_or(0)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of characters counted, i.e. the sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterates `(character, count)` pairs in ascending character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&ch, &count)| (ch, count))
    }

    /// Renders the table as `"<char> <count>\n"` lines in ascending character order.
    pub fn report(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut table = Self::new();
        for ch in iter {
            table.record(ch);
        }
        table
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ch, count) in self.iter() {
            writeln!(f, "{} {}", ch, count)?;
        }
        Ok(())
    }
}

/// Parses the format written by [`FrequencyTable::report`].
impl FromStr for FrequencyTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut table = Self::new();
        for (symbol, value) in parse_report(s)? {
            let count: usize = value.parse().map_err(|_| {
                Error::invalid_input(format!("count for {:?} is not a number: {:?}", symbol, value))
            })?;
            if count == 0 {
                return Err(Error::invalid_input(format!(
                    "count for {:?} must be positive",
                    symbol
                )));
            }
            if table.counts.insert(symbol, count).is_some() {
                return Err(Error::invalid_input(format!("duplicate entry for {:?}", symbol)));
            }
            table.total = table.total.checked_add(count).ok_or_else(|| {
                Error::invalid_input(format!("count for {:?} overflows the total", symbol))
            })?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct CaptureLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut lines) = self.lines.lock() {
                lines.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: CaptureLogger = CaptureLogger {
        lines: Mutex::new(Vec::new()),
    };

    #[test]
    fn test_from_text_traces_counts() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Trace);

        FrequencyTable::from_text("zzq");
        let lines = LOGGER.lines.lock().unwrap();
        assert!(lines
            .iter()
            .any(|line| line == "Character frequencies: {'q': 1, 'z': 2}"));
    }

    #[test]
    fn test_counts_characters() {
        let table = FrequencyTable::from_text("aabccc");
        assert_eq!(table.get('a'), 2);
        assert_eq!(table.get('b'), 1);
        assert_eq!(table.get('c'), 3);
        assert_eq!(table.get('z'), 0);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total(), 6);
    }

    #[test]
    fn test_report_is_sorted_and_omits_absent() {
        let table = FrequencyTable::from_text("cab ba");
        assert_eq!(table.report(), "  1\na 2\nb 2\nc 1\n");
    }

    #[test]
    fn test_empty_source() {
        let table = FrequencyTable::from_reader("".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert_eq!(table.report(), "");
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0x61, 0xff, 0x62];
        assert!(matches!(
            FrequencyTable::from_reader(bytes),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = FrequencyTable::from_path("/nonexistent/huffcode/input.txt").unwrap_err();
        assert!(matches!(err, Error::StreamOpen { .. }));
    }

    #[test]
    fn test_parse_report_with_space_and_newline_symbols() {
        let table = FrequencyTable::from_text("a b\nb\n");
        let parsed: FrequencyTable = table.report().parse().unwrap();
        assert_eq!(parsed, table);
        assert_eq!(parsed.get('\n'), 2);
        assert_eq!(parsed.get(' '), 1);
    }

    #[test]
    fn test_parse_rejects_bad_reports() {
        assert!("a x\n".parse::<FrequencyTable>().is_err());
        assert!("a 0\n".parse::<FrequencyTable>().is_err());
        assert!("a 1\na 2\n".parse::<FrequencyTable>().is_err());
        assert!("a 1".parse::<FrequencyTable>().is_err());
        assert!("ab 1\n".parse::<FrequencyTable>().is_err());
    }

    #[test]
    fn test_parse_rejects_overflowing_total() {
        let max = usize::MAX;
        let report = format!("a {}\nb 1\n", max);
        assert!(matches!(
            report.parse::<FrequencyTable>(),
            Err(Error::InvalidInput(_))
        ));

        let half = usize::MAX / 2 + 1;
        let report = format!("a {}\nb {}\n", half, half);
        assert!(matches!(
            report.parse::<FrequencyTable>(),
            Err(Error::InvalidInput(_))
        ));

        let table: FrequencyTable = format!("a {}\n", max).parse().unwrap();
        assert_eq!(table.total(), max);
    }
}
