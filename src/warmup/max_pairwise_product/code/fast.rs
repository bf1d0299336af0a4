//! Linear-time variants.
//!
//! Both work on positions, not values, so two equal maxima still multiply
//! with each other.

/// Find the largest and second-largest positions with two scans.
pub fn max_pairwise_product_fast(numbers: &[u64]) -> u64 {
    let Some(first) = index_of_max(numbers, None) else {
        return 0;
    };
    let Some(second) = index_of_max(numbers, Some(first)) else {
        return 0;
    };
    numbers[first] * numbers[second]
}

fn index_of_max(numbers: &[u64], skip: Option<usize>) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &value) in numbers.iter().enumerate() {
        if Some(i) == skip {
            continue;
        }
        match best {
            Some(b) if numbers[b] >= value => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Keep the two largest values seen so far in a single scan.
pub fn max_pairwise_product_single_pass(numbers: &[u64]) -> u64 {
    if numbers.len() < 2 {
        return 0;
    }

    let (mut top, mut second) = (0u64, 0u64);
    for &value in numbers {
        if value > top {
            second = top;
            top = value;
        } else if value > second {
            second = value;
        }
    }
    top * second
}
