use chrono::{DateTime, Utc};
use rand::Rng;

/// Source of the current time. Tests pin it with [`FixedClock`].
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Mints record ids of the form `<prefix><millis>-<seq>-<rand>`, all base 36.
///
/// Ids from one generator never repeat, even within a millisecond. The random
/// tail keeps separate generators (two browser tabs) apart.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    seq: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, prefix: char, now: DateTime<Utc>) -> String {
        self.seq += 1;
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let tail: u32 = rand::thread_rng().gen_range(0..36u32.pow(4));
        format!(
            "{prefix}{}-{}-{:0>4}",
            base36(millis),
            base36(self.seq),
            base36(u64::from(tail))
        )
    }
}

fn base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn base36_encodes() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
    }

    #[test]
    fn same_tick_ids_are_distinct() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();
        let mut ids = IdGenerator::new();
        let minted: HashSet<_> = (0..1000).map(|_| ids.next_id('l', now)).collect();
        assert_eq!(minted.len(), 1000);
    }

    #[test]
    fn ids_carry_prefix() {
        let now = Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0).unwrap();
        let id = IdGenerator::new().next_id('b', now);
        assert!(id.starts_with('b'));
        assert_eq!(id.split('-').count(), 3);
    }
}
