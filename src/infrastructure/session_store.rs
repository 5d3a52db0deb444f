// Signed-cookie session store - session state lives entirely on the client
use axum::http::{header, HeaderMap};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

use crate::domain::session::Session;
use crate::error::Result;

type HmacSha256 = Hmac<Sha256>;

pub const SESSION_COOKIE: &str = "dashboard_session";

/// Issues and verifies `dashboard_session` cookies of the form
/// `base64url(json).base64url(hmac_sha256(secret, base64url(json)))`.
#[derive(Clone)]
pub struct SessionStore {
    secret: Vec<u8>,
}

impl SessionStore {
    /// Random secret, stable for the lifetime of the process.
    pub fn generate() -> Self {
        let mut secret = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut secret);
        Self { secret }
    }

    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// `Set-Cookie` header value carrying the signed session.
    pub fn issue(&self, session: &Session) -> Result<String> {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(session)?);
        let signature = URL_SAFE_NO_PAD.encode(self.mac(&payload).finalize().into_bytes());

        Ok(format!(
            "{}={}.{}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, payload, signature
        ))
    }

    /// Session carried by the request, if its cookie is present and authentic.
    pub fn read(&self, headers: &HeaderMap) -> Option<Session> {
        let value = session_cookie(headers)?;
        self.verify(&value)
    }

    pub fn is_authenticated(&self, headers: &HeaderMap) -> bool {
        self.read(headers).map(|s| s.logged_in).unwrap_or(false)
    }

    fn verify(&self, value: &str) -> Option<Session> {
        let (payload, signature) = value.split_once('.')?;
        let signature = URL_SAFE_NO_PAD.decode(signature).ok()?;

        if self.mac(payload).verify_slice(&signature).is_err() {
            tracing::debug!("discarding session cookie with bad signature");
            return None;
        }

        let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
        serde_json::from_slice(&json).ok()
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts keys of any length");
        mac.update(payload.as_bytes());
        mac
    }
}

/// Raw value of the session cookie from the `Cookie` headers
fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .find_map(|cookie| {
            let (name, value) = cookie.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}
