// Credential checker - verifies the operator's username and password
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compares submitted credentials against the configured pair.
///
/// Both sides are MACed under a per-process key and the tags are compared
/// with `Mac::verify_slice`, which runs in constant time.
#[derive(Clone)]
pub struct CredentialChecker {
    key: [u8; 32],
    user_tag: Vec<u8>,
    pass_tag: Vec<u8>,
}

impl CredentialChecker {
    pub fn new(user: &str, pass: &str) -> Self {
        let mut key = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut key);

        let user_tag = tag(&key, user).finalize().into_bytes().to_vec();
        let pass_tag = tag(&key, pass).finalize().into_bytes().to_vec();

        Self {
            key,
            user_tag,
            pass_tag,
        }
    }

    pub fn check(&self, user: &str, pass: &str) -> bool {
        let user_ok = tag(&self.key, user).verify_slice(&self.user_tag).is_ok();
        let pass_ok = tag(&self.key, pass).verify_slice(&self.pass_tag).is_ok();
        user_ok & pass_ok
    }
}

fn tag(key: &[u8], value: &str) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(value.as_bytes());
    mac
}
