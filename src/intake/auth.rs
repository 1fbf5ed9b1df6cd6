//! The access gate: credential verification, the session marker, and
//! referral-code capture.
//!
//! The core never authenticates by itself—it consults the gate for a yes/no
//! verdict and reads the captured referral code as an ambient input.
//! Credential verification is a pluggable capability with one method, so the
//! single static admin pair is just the trivial implementation.

use crate::error::{IntakeError, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session.json";
const REFERRAL_FILENAME: &str = "referral.json";

/// How long a captured referral code stays valid.
const REFERRAL_TTL_DAYS: i64 = 30;

/// Pluggable credential verification.
pub trait CredentialCheck {
    fn verify(&self, email: &str, password: &str) -> bool;
}

/// The one hard-coded admin pair, fed from configuration.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    pub email: String,
    pub password: String,
}

impl CredentialCheck for StaticCredentials {
    fn verify(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Session {
    email: String,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Referral {
    code: String,
    expires_at: DateTime<Utc>,
}

/// File-backed gate state living in the data directory.
pub struct Gate {
    dir: PathBuf,
}

impl Gate {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)?;
        }
        Ok(())
    }

    /// Verify credentials and open a session on success.
    pub fn login<C: CredentialCheck>(
        &self,
        check: &C,
        email: &str,
        password: &str,
    ) -> Result<()> {
        if !check.verify(email, password) {
            return Err(IntakeError::Api("Invalid email or password".to_string()));
        }
        self.ensure_dir()?;
        let session = Session {
            email: email.to_string(),
            created_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&session)?;
        fs::write(self.dir.join(SESSION_FILENAME), content)?;
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        let path = self.dir.join(SESSION_FILENAME);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        let path = self.dir.join(SESSION_FILENAME);
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str::<Session>(&content).is_ok(),
            Err(_) => false,
        }
    }

    /// Error out unless a session is open. Staff-only entry points call
    /// this before touching the store.
    pub fn require_session(&self) -> Result<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(IntakeError::Unauthorized)
        }
    }

    /// Capture a referral code, valid for 30 days (the cookie lifetime of
    /// the public site).
    pub fn remember_referral(&self, code: &str) -> Result<()> {
        self.ensure_dir()?;
        let referral = Referral {
            code: code.to_string(),
            expires_at: Utc::now() + Duration::days(REFERRAL_TTL_DAYS),
        };
        let content = serde_json::to_string_pretty(&referral)?;
        fs::write(self.dir.join(REFERRAL_FILENAME), content)?;
        Ok(())
    }

    /// The currently valid referral code, if any. Expired codes read as
    /// absent.
    pub fn referral(&self) -> Option<String> {
        let content = fs::read_to_string(self.dir.join(REFERRAL_FILENAME)).ok()?;
        let referral: Referral = serde_json::from_str(&content).ok()?;
        if referral.expires_at > Utc::now() {
            Some(referral.code)
        } else {
            None
        }
    }
}
