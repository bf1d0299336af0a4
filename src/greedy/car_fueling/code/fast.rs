/// Refill only when the next stop is out of range, at the farthest stop
/// still within reach.
///
/// # Example
/// ```
/// use algo_toolbox::greedy::car_fueling::refills_fast;
///
/// assert_eq!(refills_fast(950, 400, &[200, 375, 550, 750]), Some(2));
/// assert_eq!(refills_fast(10, 3, &[1, 2, 5, 9]), None);
/// ```
pub fn refills_fast(distance: u64, tank: u64, stops: &[u64]) -> Option<u32> {
    let mut refills = 0;
    let mut reach = tank;
    let mut next = 0;

    while reach < distance {
        let mut farthest = None;
        while next < stops.len() && stops[next] <= reach {
            farthest = Some(stops[next]);
            next += 1;
        }
        reach = farthest? + tank;
        refills += 1;
    }

    Some(refills)
}
