// src/specs/ledger.rs

use std::error::Error;

use crate::config::consts::{LABEL_OPEN, TRANSACTION_START, VALUE_OPEN};
use crate::core::html::{next_div_text, text_after_last_gt};
use crate::core::sanitize::strip_non_ascii;
use crate::csv::quote_if_has_comma;

/// Slice a ledger page body into raw transaction blocks.
/// The first two slices of the marker split are page boilerplate (the column
/// header row reuses the same markup), not transactions.
pub fn transaction_blocks(page: &str) -> impl Iterator<Item = &str> {
    page.split(TRANSACTION_START).skip(2)
}

/* ---------------- Field extraction ---------------- */

/// Extract the ordered (label, value) text pairs from one transaction block.
///
/// Structural walk: at each `<div class="label…` marker, read the label text,
/// then require the paired `<div class="value…` div to follow before the next
/// label begins. A label with no adjacent value div means the block doesn't
/// match the site template and is a hard error.
pub fn extract_fields(block: &str) -> Result<Vec<(String, String)>, Box<dyn Error>> {
    let mut fields = Vec::new();
    let mut pos = 0usize;

    while let Some((label, _, after_label)) = next_div_text(block, LABEL_OPEN, pos) {
        let next_label_at = block[after_label..].find(LABEL_OPEN).map(|i| i + after_label);

        match next_div_text(block, VALUE_OPEN, after_label) {
            Some((value, value_at, after_value))
                if next_label_at.is_none_or(|n| value_at < n) =>
            {
                fields.push((label, value));
                pos = after_value;
            }
            _ => return Err(format!("no value div for label {label:?}").into()),
        }
    }

    Ok(fields)
}

/// The labels a transaction block can carry. Anything else maps to `None`
/// and is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Label {
    Sender,
    Type,
    Notes,
    Points,
    Running,
    Receiver,
    Date,
}

impl Label {
    fn parse(s: &str) -> Option<Label> {
        match s {
            "SENDER" => Some(Label::Sender),
            "TYPE" => Some(Label::Type),
            "NOTES" => Some(Label::Notes),
            "POINTS" => Some(Label::Points),
            "RUNNING" => Some(Label::Running),
            "RECEIVER" => Some(Label::Receiver),
            "DATE" => Some(Label::Date),
            _ => None,
        }
    }
}

/* ---------------- Records ---------------- */

/// One side of a transaction: profile name and id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    pub name: String,
    pub id: i64,
}

impl Default for Party {
    fn default() -> Self {
        // Id -1 marks "not present in this record" (e.g. PUCASHIELD rows).
        Party { name: s!(), id: -1 }
    }
}

/// Transaction kind. `WANT` entries are the fee half of a trade and
/// normalize to `TRADE FEE`; unknown kinds pass through verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Trade,
    TradeFee,
    Pucashield,
    Other(String),
}

impl Kind {
    fn from_value(v: &str) -> Kind {
        match v {
            "TRADE" => Kind::Trade,
            "WANT" => Kind::TradeFee,
            "PUCASHIELD" => Kind::Pucashield,
            other => Kind::Other(s!(other)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Kind::Trade => "TRADE",
            Kind::TradeFee => "TRADE FEE",
            Kind::Pucashield => "PUCASHIELD",
            Kind::Other(v) => v,
        }
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Other(s!())
    }
}

/// One normalized ledger entry. Built once from a raw block, serialized to
/// one CSV row, discarded. No mutation after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transaction {
    pub package_id: String, // trade-only, empty otherwise
    pub kind: Kind,
    pub points: i64,
    pub running_total: i64,
    pub sender: Party,
    pub receiver: Party,
    pub card_name: String,
    pub card_id: String,
    pub foil: bool,
    pub date: String,
    pub time: String,
}

impl Transaction {
    /// Serialize to the 13 output columns. Name fields that carry a comma
    /// get quote-wrapped here and nowhere else.
    pub fn csv_row(&self) -> Vec<String> {
        vec![
            self.package_id.clone(),
            s!(self.kind.as_str()),
            self.points.to_string(),
            self.running_total.to_string(),
            quote_if_has_comma(&self.sender.name),
            self.sender.id.to_string(),
            quote_if_has_comma(&self.receiver.name),
            self.receiver.id.to_string(),
            quote_if_has_comma(&self.card_name),
            self.card_id.clone(),
            s!(if self.foil { "True" } else { "False" }),
            self.date.clone(),
            self.time.clone(),
        ]
    }

    /// One-line description for the debug log.
    pub fn describe(&self) -> String {
        match &self.kind {
            Kind::Trade => format!(
                "Package {}: {} ({}) -> {} ({}), {} for {} pp on {} at {}",
                self.package_id,
                self.sender.name,
                self.sender.id,
                self.receiver.name,
                self.receiver.id,
                self.card_name,
                self.points,
                self.date,
                self.time,
            ),
            Kind::Pucashield => format!("PUCASHIELD for {}", self.points),
            other => format!("{} for {} pp", other.as_str(), self.points),
        }
    }
}

/* ---------------- Building ---------------- */

/// Parse one raw transaction block into a `Transaction`.
pub fn parse_transaction(block: &str) -> Result<Transaction, Box<dyn Error>> {
    let block = strip_non_ascii(block);

    let mut builder = Builder::default();
    for (label, value) in extract_fields(&block)? {
        if let Some(known) = Label::parse(&label) {
            builder.apply(known, &value)?;
        }
    }
    builder.finish()
}

/// Working state while a block's fields are applied. `finish` runs the
/// notes sub-parse and hands out the immutable record.
#[derive(Debug, Default)]
struct Builder {
    kind: Kind,
    notes: String,
    points: i64,
    running_total: i64,
    sender: Party,
    receiver: Party,
    date: String,
    time: String,
}

impl Builder {
    fn apply(&mut self, label: Label, value: &str) -> Result<(), Box<dyn Error>> {
        match label {
            Label::Sender => self.sender = profile_name_and_id(value)?,
            Label::Receiver => self.receiver = profile_name_and_id(value)?,
            Label::Type => self.kind = Kind::from_value(value),
            Label::Notes => self.notes = s!(value),
            Label::Points => self.points = parse_points(value)?,
            // One extra nested tag shows up in front of the running total.
            Label::Running => self.running_total = parse_points(text_after_last_gt(value))?,
            Label::Date => {
                let (date, time) = value
                    .split_once(' ')
                    .ok_or_else(|| format!("date without time component: {value:?}"))?;
                self.date = s!(date);
                self.time = s!(time);
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<Transaction, Box<dyn Error>> {
        let mut tx = Transaction {
            kind: self.kind,
            points: self.points,
            running_total: self.running_total,
            sender: self.sender,
            receiver: self.receiver,
            date: self.date,
            time: self.time,
            ..Transaction::default()
        };

        // What the notes mean depends on the transaction kind. For trades
        // they encode package id, card id and the foil indicator as numeric
        // tokens, plus the card name inside the last link.
        if tx.kind == Kind::Trade {
            let numbers = digit_runs(&self.notes);
            if numbers.len() < 4 {
                return Err(format!(
                    "trade notes carry {} numeric tokens, expected 4: {:?}",
                    numbers.len(),
                    self.notes
                )
                .into());
            }
            tx.package_id = s!(numbers[0]);
            tx.card_id = s!(numbers[2]);
            // Fourth token is the foil indicator, but the exported flag has
            // never read true for any observed value, so it stays false.
            // TODO: flip to `numbers[3] != "0"` once confirmed against a real
            // foil trade in someone's ledger.
            let _foil_token = numbers[3];
            tx.card_name = card_name_from_notes(&self.notes)?;
        }

        Ok(tx)
    }
}

/// `<a href='/profiles/show/129317'>John Doe</a>` → ("John Doe", 129317)
fn profile_name_and_id(markup: &str) -> Result<Party, Box<dyn Error>> {
    let after_show = markup
        .split_once("/show/")
        .ok_or_else(|| format!("profile link missing /show/: {markup:?}"))?
        .1;
    let (id_text, rest) = after_show
        .split_once("'>")
        .ok_or_else(|| format!("unterminated profile link: {markup:?}"))?;
    let id: i64 = id_text.parse()?;
    let name = rest.split("</a>").next().unwrap_or(rest);
    Ok(Party { name: s!(name), id })
}

/// Strip thousands-separator commas and parse a signed integer.
fn parse_points(value: &str) -> Result<i64, Box<dyn Error>> {
    Ok(value.replace(',', "").trim().parse()?)
}

/// Maximal ASCII digit runs, in order of appearance.
fn digit_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, b) in s.bytes().enumerate() {
        if b.is_ascii_digit() {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(a) = start.take() {
            runs.push(&s[a..i]);
        }
    }
    if let Some(a) = start {
        runs.push(&s[a..]);
    }
    runs
}

/// Card name: the text after the last `>` in the segment just before the
/// final `</a>` of the notes markup.
fn card_name_from_notes(notes: &str) -> Result<String, Box<dyn Error>> {
    let before_last_close = notes
        .rsplit_once("</a>")
        .ok_or_else(|| format!("trade notes without a card link: {notes:?}"))?
        .0;
    Ok(s!(text_after_last_gt(before_last_close)))
}

/* ---------------- Tests ---------------- */
