use super::COINS;

/// Fewest coins summing to `money`, computed for every smaller amount first.
pub fn change_naive(money: u64) -> u64 {
    let Ok(money) = usize::try_from(money) else {
        return 0;
    };

    let mut fewest = vec![0u64; money + 1];
    for amount in 1..=money {
        fewest[amount] = COINS
            .iter()
            .filter_map(|&coin| usize::try_from(coin).ok())
            .filter(|&coin| coin <= amount)
            .map(|coin| fewest[amount - coin] + 1)
            .min()
            .unwrap_or(0);
    }
    fewest[money]
}
