// src/config/consts.rs

// Net config
pub const ROOT_URL: &str = "https://pucatrade.com";
pub const LOGIN_PATH: &str = "/login";
// Earliest ledger month; the site redirects it to the account's first real page
// and renders the month selector we harvest URLs from.
pub const FIRST_LEDGER_PATH: &str = "/account/ledger/2012-01";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("puca_ledger/", env!("CARGO_PKG_VERSION"));

// Page markers (the wire contract; breaks if the site template changes)
pub const LOGGED_OUT_MARKER: &str = "logged-out";
pub const TRANSACTION_START: &str = r#"<div class="column sender">"#;
pub const LABEL_OPEN: &str = r#"<div class="label"#;
pub const VALUE_OPEN: &str = r#"<div class="value"#;
pub const DIV_CLOSE: &str = "</div>";
pub const HREF_ATTR: &str = r#"href=""#;
pub const LEDGER_HREF_NEEDLE: &str = "ledger/2";

// Export
pub const DEFAULT_OUT_FILE: &str = "puca-transactions.csv";
pub const CSV_HEADER: [&str; 13] = [
    "Package ID", "Transaction Type", "Points", "Balance",
    "Sender", "Sender ID", "Receiver", "Receiver ID",
    "Card name", "Card ID", "Foil", "Date", "Time",
];

// Logging
pub const LOG_FILE: &str = "puca_ledger.log";
