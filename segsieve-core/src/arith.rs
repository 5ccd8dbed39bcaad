//! Integer helpers

/// Integer square root: the largest `r` with `r * r <= n`
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    // Float estimate, then correct for rounding in either direction
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
        r += 1;
    }
    r
}

/// Deterministic primality check by trial division over odd divisors
pub fn is_prime_u64(x: u64) -> bool {
    match x {
        0 | 1 => false,
        2 => true,
        _ if x % 2 == 0 => false,
        _ => {
            let limit = isqrt(x);
            let mut d = 3;
            while d <= limit {
                if x % d == 0 {
                    return false;
                }
                d += 2;
            }
            true
        }
    }
}
