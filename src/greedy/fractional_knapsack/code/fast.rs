use super::Item;

/// Sort by value density, densest first, and fill until the knapsack is full.
///
/// # Example
/// ```
/// use algo_toolbox::greedy::fractional_knapsack::{knapsack_fast, Item};
///
/// let items = [Item::new(60, 20), Item::new(100, 50), Item::new(120, 30)];
/// assert!((knapsack_fast(50, &items) - 180.0).abs() < 1e-9);
/// ```
pub fn knapsack_fast(capacity: u64, items: &[Item]) -> f64 {
    let mut sorted: Vec<Item> = items.iter().filter(|i| i.weight > 0).copied().collect();
    sorted.sort_unstable_by(|a, b| b.cmp_density(a));

    let mut capacity = capacity;
    let mut total = 0.0;
    for item in sorted {
        if capacity == 0 {
            break;
        }
        let amount = item.weight.min(capacity);
        total += item.value_of(amount);
        capacity -= amount;
    }
    total
}
