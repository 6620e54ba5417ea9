// src/config/options.rs
use std::path::PathBuf;

use super::consts::DEFAULT_OUT_FILE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub out: PathBuf,            // output path (file, or dir hint → default filename)
    pub email: Option<String>,   // preseed first login attempt; password always prompted
    pub list_months: bool,       // list discovered ledger months then exit
}

impl Default for Options {
    fn default() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_FILE),
            email: None,
            list_months: false,
        }
    }
}
