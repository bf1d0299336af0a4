/// Dynamic programming over the start, every stop and the destination.
///
/// `fewest[j]` is the minimum number of refills needed to arrive at
/// position `j`; leaving any stop other than the start costs one refill.
/// A position behind another is never reachable from it, so unsorted stops
/// or stops past `distance` give a (possibly `None`) answer, not a panic.
pub fn refills_naive(distance: u64, tank: u64, stops: &[u64]) -> Option<u32> {
    let positions: Vec<u64> = std::iter::once(0)
        .chain(stops.iter().copied())
        .chain(std::iter::once(distance))
        .collect();

    let mut fewest: Vec<Option<u32>> = vec![None; positions.len()];
    fewest[0] = Some(0);

    for j in 1..positions.len() {
        fewest[j] = (0..j)
            .filter(|&i| {
                positions[j]
                    .checked_sub(positions[i])
                    .is_some_and(|gap| gap <= tank)
            })
            .filter_map(|i| fewest[i].map(|count| count + u32::from(i > 0)))
            .min();
    }

    fewest[positions.len() - 1]
}
