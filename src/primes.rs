//! Prime numbers, collected into a [`DynamicArray`].

use crate::ds::DynamicArray;

/// Trial division by odd numbers up to `sqrt(n)`.
pub fn is_prime(n: u64) -> bool {
    match n {
        0 | 1 => false,
        2 | 3 => true,
        _ if n % 2 == 0 => false,
        _ => {
            let mut divisor = 3;
            while divisor * divisor <= n {
                if n % divisor == 0 {
                    return false
                }
                divisor += 2;
            }
            true
        }
    }
}

/// The first `n` primes in increasing order.
pub fn first_n_primes(n: usize) -> DynamicArray<u64> {
    let mut primes = DynamicArray::new();
    let mut candidate = 1;

    while primes.len() < n {
        candidate += 1;
        if is_prime(candidate) {
            primes.append(candidate);
        }
    }

    primes
}
