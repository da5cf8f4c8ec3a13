//! Identifier-like strings from the BeatSaver wire format.
//!
//! The two hex identifiers deliberately validate differently:
//! - [`HashId`] (version content hash) is lenient: malformed hashes exist in
//!   historical data, so a bad one is logged and kept rather than failing the
//!   whole record.
//! - [`LegacyKeyId`] (old-style map key) is strict: when present it is used
//!   for lookups, so a malformed one is an error.

use std::fmt;

use serde_json::Value;
use tracing::warn;

use crate::decode::FromValue;

fn is_hex(raw: &str) -> bool {
    !raw.is_empty() && raw.chars().all(|c| c.is_ascii_hexdigit())
}

/// Content hash of an uploaded map version, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HashId(String);

impl HashId {
    /// Uppercase `raw` and keep it. A value that is not valid hexadecimal is
    /// reported through `tracing` at warn level but still returned; upstream
    /// data has historically contained malformed hashes and rejecting them
    /// would make otherwise-valid records unparsable.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_uppercase();
        if !is_hex(&normalized) {
            warn!(hash = %normalized, "content hash is not valid hexadecimal");
        }
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HashId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromValue for HashId {
    const EXPECTED: &'static str = "a string";

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(HashId::parse)
    }
}

/// Old-style map key (e.g. `1a2b`), kept in its original case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegacyKeyId(String);

impl LegacyKeyId {
    /// Validate `raw` as hexadecimal. Unlike [`HashId::parse`] this fails on
    /// a malformed value; the returned reason is attached to a
    /// `Error::Validation` by the caller, which knows the field path.
    pub fn parse(raw: &str) -> Result<Self, String> {
        if is_hex(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(format!("`{raw}` is not a hexadecimal key"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegacyKeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::span;
    use tracing::{Event, Level, Metadata, Subscriber};

    /// Counts warn-level events so tests can assert on the side-channel.
    #[derive(Default)]
    struct WarnCounter {
        warns: AtomicUsize,
    }

    impl Subscriber for WarnCounter {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _attrs: &span::Attributes<'_>) -> span::Id {
            span::Id::from_u64(1)
        }

        fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {}

        fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {}

        fn event(&self, event: &Event<'_>) {
            if *event.metadata().level() == Level::WARN {
                self.warns.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn enter(&self, _span: &span::Id) {}

        fn exit(&self, _span: &span::Id) {}
    }

    fn count_warns(f: impl FnOnce()) -> usize {
        let counter = Arc::new(WarnCounter::default());
        tracing::subscriber::with_default(Arc::clone(&counter), f);
        counter.warns.load(Ordering::SeqCst)
    }

    #[test]
    fn test_hash_uppercases_valid_input_without_warning() {
        let warns = count_warns(|| {
            let hash = HashId::parse("deadBEEF");
            assert_eq!(hash.as_str(), "DEADBEEF");
        });
        assert_eq!(warns, 0);
    }

    #[test]
    fn test_hash_keeps_malformed_input_and_warns_once() {
        let warns = count_warns(|| {
            let hash = HashId::parse("not-hex!!");
            assert_eq!(hash.as_str(), "NOT-HEX!!");
        });
        assert_eq!(warns, 1);
    }

    #[test]
    fn test_legacy_key_accepts_hex() {
        let key = LegacyKeyId::parse("1a2b").unwrap();
        assert_eq!(key.as_str(), "1a2b");
    }

    #[test]
    fn test_legacy_key_rejects_non_hex() {
        assert!(LegacyKeyId::parse("zzzz").is_err());
        assert!(LegacyKeyId::parse("").is_err());
    }
}
