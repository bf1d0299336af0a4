use super::Item;

/// Repeatedly take as much as fits of the densest item left.
pub fn knapsack_naive(capacity: u64, items: &[Item]) -> f64 {
    let mut remaining: Vec<Item> = items.iter().filter(|i| i.weight > 0).copied().collect();
    let mut capacity = capacity;
    let mut total = 0.0;

    while capacity > 0 {
        let Some(best) = remaining
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.cmp_density(b))
            .map(|(index, _)| index)
        else {
            break;
        };
        let item = remaining.swap_remove(best);
        let amount = item.weight.min(capacity);
        total += item.value_of(amount);
        capacity -= amount;
    }

    total
}
