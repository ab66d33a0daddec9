//! Reducer Environment
//!
//! Id generation and time are injected so reducers stay deterministic under test.

use chrono::{DateTime, Utc};

/// Source of new entity ids
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

const ID_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random base-36 ids from the browser's `Math.random`
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> String {
        base36_id(js_sys::Math::random)
    }
}

/// Build an id from a `[0, 1)` random source, one draw per character
fn base36_id(mut random: impl FnMut() -> f64) -> String {
    (0..ID_LEN)
        .map(|_| {
            let idx = ((random() * BASE36.len() as f64) as usize).min(BASE36.len() - 1);
            BASE36[idx] as char
        })
        .collect()
}

/// Deterministic ids "1", "2", ...
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        self.next.to_string()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
