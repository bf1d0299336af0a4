//! Greedy exercises, each checked against an exhaustive or dynamic
//! programming reference.

pub mod car_fueling;
pub mod fractional_knapsack;
pub mod money_change;
