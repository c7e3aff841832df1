//! A minimal typed spreadsheet grid with A1 cell addressing.
//!
//! Cells read from CSV hold their raw text. The plan layout types the
//! cells of its date and progress columns with [`Cell::infer`], the way a
//! spreadsheet application types them when it opens a delimited file, and
//! leaves free-text cells untouched. The grid is persisted as CSV with
//! every row padded to the sheet width, so blank rows keep their position.

use std::{
    fmt,
    io::{Read, Write},
};

use jiff::civil::{Date, DateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

static EMPTY: Cell = Cell::Empty;

/// Value of a single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Date(Date),
}

impl Cell {
    /// Types raw cell text.
    ///
    /// Dates (`YYYY-MM-DD`, or a date-time whose time part is dropped) and
    /// numbers whose canonical form matches the raw text are recognized;
    /// anything else stays text so it reads back unchanged.
    pub fn infer(raw: &str) -> Self {
        if raw.is_empty() {
            return Cell::Empty;
        }
        if let Some(date) = parse_date(raw) {
            return Cell::Date(date);
        }
        if let Ok(number) = raw.parse::<f64>() {
            let cell = Cell::Number(number);
            if number.is_finite() && cell.to_text() == raw {
                return cell;
            }
        }
        Cell::Text(raw.to_string())
    }

    /// Whether the cell holds nothing (or only an empty string).
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Text form of the cell, as written to disk.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Cell::Number(n) => n.to_string(),
            Cell::Date(date) => date.to_string(),
        }
    }
}

/// Parses `YYYY-MM-DD`, or a `YYYY-MM-DD HH:MM:SS` date-time (either
/// separator) keeping only the date.
pub fn parse_date(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(date) = Date::strptime(DATE_FORMAT, raw) {
        return Some(date);
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| DateTime::strptime(format, raw).ok())
        .map(|datetime| datetime.date())
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_string())
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Cell::Text(text)
    }
}

impl From<Date> for Cell {
    fn from(date: Date) -> Self {
        Cell::Date(date)
    }
}

impl From<u8> for Cell {
    fn from(n: u8) -> Self {
        Cell::Number(f64::from(n))
    }
}

/// Address of a cell: a 1-based row and a 0-based column (`A` is 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses an A1 style reference such as `B4` or `AA10`.
    pub fn parse(reference: &str) -> Option<Self> {
        let split = reference.find(|c: char| c.is_ascii_digit())?;
        let (letters, digits) = reference.split_at(split);
        if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let row = digits.parse::<usize>().ok().filter(|row| *row > 0)?;
        let col = letters
            .chars()
            .fold(0usize, |acc, c| acc * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1))
            - 1;
        Some(Self { row, col })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters = Vec::new();
        let mut n = self.col + 1;
        while n > 0 {
            let rem = (n - 1) % 26;
            letters.push((b'A' + rem as u8) as char);
            n = (n - 1) / 26;
        }
        let column: String = letters.iter().rev().collect();
        write!(f, "{column}{}", self.row)
    }
}

/// Rectangular-ish grid of cells; rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cell at `at`, `Cell::Empty` outside the used range.
    pub fn get(&self, at: CellRef) -> &Cell {
        at.row
            .checked_sub(1)
            .and_then(|row| self.rows.get(row))
            .and_then(|cells| cells.get(at.col))
            .unwrap_or(&EMPTY)
    }

    /// Stores `value` at `at`, growing the grid as needed.
    pub fn set(&mut self, at: CellRef, value: impl Into<Cell>) {
        let row = at.row.max(1) - 1;
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() <= at.col {
            cells.resize(at.col + 1, Cell::Empty);
        }
        cells[at.col] = value.into();
    }

    /// Reads a sheet from CSV. Every non-empty cell is kept as text.
    pub fn read_csv<R: Read>(reader: R) -> csv::Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from).collect());
        }
        Ok(Self { rows })
    }

    /// Writes the sheet as CSV.
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let width = self.width().max(1);
        let mut writer = csv::WriterBuilder::new().flexible(true).from_writer(writer);
        for cells in &self.rows {
            let mut record: Vec<String> = cells.iter().map(Cell::to_text).collect();
            record.resize(width, String::new());
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}
