//! Stable identity hash for per-actor timing offsets.
//!
//! Bubble phases are staggered by hashing the actor's slug into a millisecond
//! offset, so actors never blink in unison yet need no stored state.  The
//! function is part of the observable behavior (tests pin exact values) and
//! must never change: it is the classic 31-based polynomial hash over UTF-16
//! code units with wrapping 32-bit arithmetic, order-sensitive by
//! construction ("ab" ≠ "ba").

/// Hash `ident` into a stable non-negative 32-bit value.
pub fn ident_hash(ident: &str) -> u32 {
    let mut h: i32 = 0;
    for unit in ident.encode_utf16() {
        h = h.wrapping_mul(31).wrapping_add(unit as i32);
    }
    h.unsigned_abs()
}

/// `ident_hash` as fractional milliseconds, ready for phase arithmetic.
#[inline]
pub fn ident_hash_ms(ident: &str) -> f64 {
    ident_hash(ident) as f64
}
