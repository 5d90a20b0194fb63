// ============================================================================
// Powers of Ten
// Cached 10^k table spanning the decimal exponent range of an f64
// ============================================================================

use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Smallest decimal exponent of a nonzero f64 (5e-324).
pub const DOUBLE_EXP_MIN: i64 = -324;

/// Largest decimal exponent of a finite f64.
pub const DOUBLE_EXP_MAX: i64 = 308;

/// Table index holding 10^0.
const INDEX_OF_ZERO: i64 = -DOUBLE_EXP_MIN - 1;

/// Number of cached powers: 10^-323 through 10^308.
const TABLE_LEN: usize = (DOUBLE_EXP_MAX - DOUBLE_EXP_MIN) as usize;

/// Process-wide table. Populated once, read-only afterwards.
static SHARED: OnceCell<PowersOfTen> = OnceCell::new();

/// Lifecycle flag toggled by [`init`] and [`dispose`].
static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Lookup table of `10^k` for every decimal exponent an f64 can express.
///
/// Entries are produced by parsing `"1e{k}"`, so each one is the correctly
/// rounded double nearest to the exact power. Exponents outside the table
/// fall back to `10f64.powf(k)`.
#[derive(Debug, Clone)]
pub struct PowersOfTen {
    table: Box<[f64]>,
}

impl PowersOfTen {
    /// Build a fully populated table.
    pub fn new() -> Self {
        let table = (0..TABLE_LEN as i64)
            .map(|index| {
                let power = index - INDEX_OF_ZERO;
                format!("1e{}", power)
                    .parse::<f64>()
                    .unwrap_or_else(|_| slow_pow10(power))
            })
            .collect();

        Self { table }
    }

    /// Look up `10^power`.
    ///
    /// O(1) for `power` in `[-323, 308]`; computed directly otherwise.
    #[inline]
    pub fn lookup(&self, power: i64) -> f64 {
        let index = INDEX_OF_ZERO + power;
        if index < 0 || index >= self.table.len() as i64 {
            return slow_pow10(power);
        }

        self.table[index as usize]
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for PowersOfTen {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn slow_pow10(power: i64) -> f64 {
    10f64.powf(power as f64)
}

// ============================================================================
// Process-wide Cache
// ============================================================================

/// Populate the shared table and mark the cache active.
///
/// Idempotent. Concurrent first-time callers block inside the cell until one
/// of them has built the table; exactly one table is ever built.
pub fn init() {
    let _ = shared();
}

/// Mark the shared cache released.
///
/// Safe to call without a prior [`init`]. The table itself is immutable, so
/// references handed out by [`shared`] stay valid; the next lookup marks
/// the cache active again.
pub fn dispose() {
    if ACTIVE.swap(false, Ordering::AcqRel) {
        tracing::debug!("powers-of-ten cache released");
    }
}

/// Whether the shared cache is currently active.
pub fn is_initialized() -> bool {
    ACTIVE.load(Ordering::Acquire) && SHARED.get().is_some()
}

/// Shared handle to the process-wide table, populating it on first use.
pub fn shared() -> &'static PowersOfTen {
    let table = SHARED.get_or_init(|| {
        let table = PowersOfTen::new();
        tracing::debug!("powers-of-ten cache populated with {} entries", table.len());
        table
    });
    mark_active();
    table
}

/// Look up `10^power` in the process-wide table.
///
/// Once populated this is a plain read: no lock is taken.
#[inline]
pub fn lookup(power: i64) -> f64 {
    match SHARED.get() {
        Some(table) => {
            mark_active();
            table.lookup(power)
        }
        None => shared().lookup(power),
    }
}

#[inline]
fn mark_active() {
    if !ACTIVE.load(Ordering::Relaxed) {
        ACTIVE.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_bounds() {
        let powers = PowersOfTen::new();
        assert_eq!(powers.len(), 632);
        assert_eq!(powers.lookup(0), 1.0);
        assert_eq!(powers.lookup(3), 1000.0);
        assert_eq!(powers.lookup(-3), 0.001);
        assert_eq!(powers.lookup(308), 1e308);
        assert_eq!(powers.lookup(-323), 1e-323);
    }

    #[test]
    fn test_slow_path_outside_table() {
        let powers = PowersOfTen::new();
        assert_eq!(powers.lookup(309), f64::INFINITY);
        assert_eq!(powers.lookup(-400), 0.0);
    }

    #[test]
    fn test_entries_are_parsed_exactly() {
        let powers = PowersOfTen::new();
        for power in -323..=308i64 {
            let expected: f64 = format!("1e{}", power).parse().unwrap();
            assert_eq!(powers.lookup(power), expected, "10^{}", power);
        }
    }

    #[test]
    fn test_owned_table_lifecycle() {
        let table = PowersOfTen::default();
        assert!(!table.is_empty());
        assert_eq!(table.lookup(2), 100.0);

        let copy = table.clone();
        drop(table);
        assert_eq!(copy.lookup(-2), 0.01);
    }

    #[test]
    fn test_shared_table_is_built_once() {
        let first: *const PowersOfTen = shared();
        let second: *const PowersOfTen = shared();
        assert_eq!(first, second);
        assert_eq!(lookup(5), 1e5);
    }

    #[test]
    fn test_dispose_keeps_handed_out_tables_valid() {
        // the only test that calls dispose; others never assert on the flag
        let table = shared();
        dispose();
        dispose();
        assert_eq!(table.lookup(2), 100.0);

        assert_eq!(lookup(3), 1000.0);
        assert!(is_initialized());
    }

    #[test]
    fn test_concurrent_lookup_during_init() {
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                std::thread::spawn(move || {
                    if worker % 2 == 0 {
                        init();
                    }
                    (-20..=20i64)
                        .map(|power| (power, lookup(power)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for handle in handles {
            for (power, value) in handle.join().unwrap() {
                let expected: f64 = format!("1e{}", power).parse().unwrap();
                assert_eq!(value, expected, "10^{}", power);
            }
        }
    }
}
