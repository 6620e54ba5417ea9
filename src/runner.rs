// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::consts::{CSV_HEADER, DEFAULT_OUT_FILE},
    config::options::Options,
    core::net::{Credentials, Session, SignIn},
    file::{RowWriter, resolve_out_path},
    progress::Progress,
    specs::{ledger, months},
};

/// Where the driver gets credentials from. The CLI prompts on stdin; tests
/// inject canned values.
pub trait CredentialSource {
    fn credentials(&mut self) -> Result<Credentials, Box<dyn Error>>;
}

/// Summary of what a run produced.
pub struct RunSummary {
    pub out_path: PathBuf,
    pub pages: usize,
    pub transactions: usize,
}

/// Sign in (re-prompting until the site accepts) and discover the ledger
/// month URLs from the probe page.
pub fn discover<'p>(
    creds_from: &mut dyn CredentialSource,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<(Session, Credentials, Vec<String>), Box<dyn Error>> {
    let session = Session::connect()?;
    let (creds, index_body) = sign_in_loop(&session, creds_from, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching available ledger dates...");
    }
    let urls = months::ledger_urls(&index_body);
    logf!("Discovered {} ledger pages", urls.len());

    Ok((session, creds, urls))
}

/// Top-level driver: authenticate, sweep every ledger month sequentially,
/// write one CSV row per transaction. A malformed block aborts the whole
/// run; there is no partial-failure isolation.
pub fn run<'p>(
    opts: &Options,
    creds_from: &mut dyn CredentialSource,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<RunSummary, Box<dyn Error>> {
    let (session, creds, urls) = discover(creds_from, progress.as_deref_mut())?;

    let out_path = resolve_out_path(&opts.out, DEFAULT_OUT_FILE)?;
    let mut writer = RowWriter::create(&out_path, &CSV_HEADER)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    // Fresh login for the sweep; the probe cookie can go stale on long runs.
    session.login(&creds)?;

    let mut total = 0usize;
    for url in &urls {
        let body = session.get(url)?;
        let month = months::month_of(url);

        let mut count = 0usize;
        for block in ledger::transaction_blocks(&body) {
            let tx = ledger::parse_transaction(block)?;
            logd!("{}", tx.describe());
            writer.write_row(&tx.csv_row())?;
            count += 1;
        }
        total += count;

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(month, count);
        }
    }

    writer.finish()?;
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    logf!("Wrote {} transactions from {} pages", total, urls.len());

    Ok(RunSummary { out_path, pages: urls.len(), transactions: total })
}

/// Credential retry loop. Unbounded: the site signals bad credentials in
/// page state, the source is asked again until sign-in succeeds.
fn sign_in_loop<'p>(
    session: &Session,
    creds_from: &mut dyn CredentialSource,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<(Credentials, String), Box<dyn Error>> {
    let mut creds = creds_from.credentials()?;
    loop {
        match session.sign_in(&creds)? {
            SignIn::Success(body) => return Ok((creds, body)),
            SignIn::BadCredentials => {
                if let Some(p) = progress.as_deref_mut() {
                    p.log("Invalid credentials");
                }
                loge!("Login rejected for {}", creds.email);
                creds = creds_from.credentials()?;
            }
        }
    }
}
