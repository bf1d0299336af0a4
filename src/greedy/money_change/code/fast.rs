/// Take as many tens as fit, then fives, then ones.
///
/// Optimal because every denomination divides the next larger one.
///
/// # Example
/// ```
/// use algo_toolbox::greedy::money_change::change_fast;
///
/// assert_eq!(change_fast(28), 6);
/// ```
pub fn change_fast(money: u64) -> u64 {
    money / 10 + (money % 10) / 5 + money % 5
}
