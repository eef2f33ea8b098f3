// 🔢 Integer Radix Sort - Base-10 digit bucketing, least significant digit first
//
// Each pass buckets values by one decimal digit of their magnitude, then
// concatenates buckets 0..9. After `max_digits` passes the values are ordered
// by magnitude. Sign is handled separately: negatives are sorted by magnitude
// and reversed, then placed ahead of the non-negatives.

const RADIX: u64 = 10;

/// Sort integers in ascending order using LSD radix sort.
///
/// O(d·(n+10)) where d is the digit count of the largest magnitude.
pub fn radix_sort(values: &[i64]) -> Vec<i64> {
    if values.len() < 2 {
        return values.to_vec();
    }

    let (negatives, non_negatives): (Vec<i64>, Vec<i64>) =
        values.iter().partition(|v| **v < 0);

    let mut sorted = sort_by_magnitude(negatives, |v| v.unsigned_abs());
    sorted.reverse();
    sorted.extend(sort_by_magnitude(non_negatives, |v| v.unsigned_abs()));
    sorted
}

/// Sort unsigned integers (ids, counts) in ascending order.
pub fn radix_sort_unsigned(values: &[u64]) -> Vec<u64> {
    sort_by_magnitude(values.to_vec(), |v| *v)
}

/// Number of base-10 digits in a magnitude. Zero has one digit.
pub fn digit_count(magnitude: u64) -> u32 {
    match magnitude.checked_ilog10() {
        Some(log) => log + 1,
        None => 1,
    }
}

/// Digit `position` (0 = least significant) of a magnitude.
fn digit_at(magnitude: u64, position: u32) -> usize {
    match RADIX.checked_pow(position) {
        Some(place) => ((magnitude / place) % RADIX) as usize,
        // Beyond u64 range every digit is zero
        None => 0,
    }
}

fn sort_by_magnitude<T, F>(mut values: Vec<T>, magnitude: F) -> Vec<T>
where
    F: Fn(&T) -> u64,
{
    let max_digits = values
        .iter()
        .map(|v| digit_count(magnitude(v)))
        .max()
        .unwrap_or(1);

    for position in 0..max_digits {
        let mut buckets: [Vec<T>; RADIX as usize] = Default::default();

        for value in values.drain(..) {
            buckets[digit_at(magnitude(&value), position)].push(value);
        }

        for bucket in buckets.iter_mut() {
            values.append(bucket);
        }
    }

    values
}

// ============================================================================
// TESTS
// ============================================================================
