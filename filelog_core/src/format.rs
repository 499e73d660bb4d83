//! Line layouts.
//!
//! Plain:  `[dd/mm/YYYY HH:MM:SS] [LEVEL] [type: TYPE] message`
//! Csv:    `dd/mm/YYYY HH:MM:SS, LEVEL, TYPE, message`
//!
//! The type segment is dropped when no type is set. Nothing in the message is
//! escaped or quoted.

use chrono::{NaiveDate, NaiveDateTime};

pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const DATE_FILENAME_FORMAT: &str = "%d-%m-%Y";
pub const LOG_EXTENSION: &str = "log";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    Plain,
    Csv,
}

impl LineFormat {
    /// Csv whenever `.csv` appears anywhere in the name (`old.csv.log` included).
    pub fn for_filename(filename: &str) -> Self {
        if filename.contains(".csv") {
            LineFormat::Csv
        } else {
            LineFormat::Plain
        }
    }

    /// Full line, trailing newline included.
    pub fn render(
        self,
        at: NaiveDateTime,
        level: &str,
        log_type: Option<&str>,
        message: &str,
    ) -> String {
        let ts = at.format(TIMESTAMP_FORMAT);
        match (self, log_type) {
            (LineFormat::Csv, Some(t)) => format!("{ts}, {level}, {t}, {message}\n"),
            (LineFormat::Csv, None) => format!("{ts}, {level}, {message}\n"),
            (LineFormat::Plain, Some(t)) => format!("[{ts}] [{level}] [type: {t}] {message}\n"),
            (LineFormat::Plain, None) => format!("[{ts}] [{level}] {message}\n"),
        }
    }
}

/// `dd-mm-YYYY.log` for the given day.
pub fn dated_filename(date: NaiveDate) -> String {
    format!("{}.{LOG_EXTENSION}", date.format(DATE_FILENAME_FORMAT))
}
