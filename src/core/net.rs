// src/core/net.rs

// Blocking HTTPS with a cookie jar; every ledger page is login-gated.

use std::error::Error;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{
    FIRST_LEDGER_PATH, LOGGED_OUT_MARKER, LOGIN_PATH, REQUEST_TIMEOUT_SECS, ROOT_URL, USER_AGENT,
};

#[derive(Clone, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Outcome of a sign-in attempt. The site answers 200 either way; failure
/// only shows up as a marker string in the page it serves back.
pub enum SignIn {
    /// Carries the probe page body, which doubles as the month index.
    Success(String),
    BadCredentials,
}

pub struct Session {
    http: Client,
}

impl Session {
    pub fn connect() -> Result<Self, Box<dyn Error>> {
        let http = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    /// POST the login form and keep the session cookie in the jar.
    pub fn login(&self, creds: &Credentials) -> Result<(), Box<dyn Error>> {
        let form = [
            ("login", creds.email.as_str()),
            ("password", creds.password.as_str()),
        ];
        self.http
            .post(format!("{ROOT_URL}{LOGIN_PATH}"))
            .form(&form)
            .send()?
            .error_for_status()?;
        Ok(())
    }

    /// Login, then probe the earliest ledger month page to see whether the
    /// credentials actually took.
    pub fn sign_in(&self, creds: &Credentials) -> Result<SignIn, Box<dyn Error>> {
        self.login(creds)?;
        let body = self.get(&format!("{ROOT_URL}{FIRST_LEDGER_PATH}"))?;
        if body.contains(LOGGED_OUT_MARKER) {
            return Ok(SignIn::BadCredentials);
        }
        Ok(SignIn::Success(body))
    }

    /// Cookie-session GET. Non-success status is an error.
    pub fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let resp = self.http.get(url).send()?.error_for_status()?;
        Ok(resp.text()?)
    }
}
