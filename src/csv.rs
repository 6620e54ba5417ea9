// src/csv.rs
use std::io::{self, Write};

/* ---------------- Field quoting ---------------- */

/// Enclose a field in double quotes when it contains a comma, so user names
/// and card names with commas don't shift the columns. Embedded quotes are
/// left alone; the upstream export format never escapes them.
pub fn quote_if_has_comma(field: &str) -> String {
    if field.contains(',') {
        format!("\"{field}\"")
    } else {
        s!(field)
    }
}

/* ---------------- Writing ---------------- */

/// Write one row of pre-serialized fields, comma-separated.
/// Quoting policy is the caller's; see `quote_if_has_comma`.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        write!(w, "{}", cell.as_ref())?;
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_comma_present() {
        assert_eq!(quote_if_has_comma("John Doe"), "John Doe");
        assert_eq!(quote_if_has_comma("Doe, John"), "\"Doe, John\"");
        assert_eq!(quote_if_has_comma(""), "");
    }

    #[test]
    fn quoting_second_application_only_idempotent_without_quotes() {
        // A wrapped field still contains a comma, so a second pass wraps again.
        let once = quote_if_has_comma("Doe, John");
        assert_eq!(quote_if_has_comma(&once), "\"\"Doe, John\"\"");
    }

    #[test]
    fn write_row_joins_with_commas() {
        let mut buf = Vec::new();
        let row = vec![s!("500"), s!("TRADE"), s!("\"Doe, John\"")];
        write_row(&mut buf, &row).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "500,TRADE,\"Doe, John\"\n");
    }
}
