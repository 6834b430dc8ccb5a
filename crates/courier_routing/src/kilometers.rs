use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use jiff::SignedDuration;
use serde::{Deserialize, Serialize};

use crate::kmh::Kmh;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Kilometers(f64);

impl Kilometers {
    pub const ZERO: Kilometers = Kilometers(0.0);
    pub const INFINITY: Kilometers = Kilometers(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Kilometers(value)
    }

    pub fn from_meters(meters: f64) -> Self {
        Kilometers(meters / 1000.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Travel time at a constant speed. `None` when the speed is not positive or the time does not
    /// fit in a [`SignedDuration`].
    pub fn travel_time(self, speed: Kmh) -> Option<SignedDuration> {
        if !speed.is_valid() {
            return None;
        }

        let seconds = self.0 * 3600.0 / speed.value();
        SignedDuration::try_from_secs_f64(seconds).ok()
    }
}

impl Eq for Kilometers {}

impl PartialOrd for Kilometers {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kilometers {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Kilometers {
    fn from(value: f64) -> Self {
        Kilometers::new(value)
    }
}

impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} km", self.0)
    }
}

impl Add for Kilometers {
    type Output = Kilometers;

    fn add(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 + other.0)
    }
}

impl AddAssign for Kilometers {
    fn add_assign(&mut self, other: Kilometers) {
        self.0 += other.0;
    }
}

impl Sub for Kilometers {
    type Output = Kilometers;

    fn sub(self, other: Kilometers) -> Kilometers {
        Kilometers(self.0 - other.0)
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Kilometers>>(iter: I) -> Kilometers {
        iter.fold(Kilometers::ZERO, |acc, x| acc + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_time() {
        let duration = Kilometers::new(90.0).travel_time(Kmh::new(60.0));
        assert_eq!(duration, Some(SignedDuration::from_mins(90)));
        assert_eq!(
            Kilometers::ZERO.travel_time(Kmh::new(60.0)),
            Some(SignedDuration::ZERO)
        );
    }

    #[test]
    fn test_travel_time_out_of_range() {
        assert_eq!(Kilometers::new(111.0).travel_time(Kmh::new(1e-15)), None);
        assert_eq!(Kilometers::new(10.0).travel_time(Kmh::new(0.0)), None);
        assert_eq!(Kilometers::INFINITY.travel_time(Kmh::new(60.0)), None);
    }

    #[test]
    fn test_ordering_puts_infinity_last() {
        let mut values = vec![Kilometers::INFINITY, Kilometers::new(3.0), Kilometers::ZERO];
        values.sort();

        assert_eq!(
            values,
            vec![Kilometers::ZERO, Kilometers::new(3.0), Kilometers::INFINITY]
        );
    }

    #[test]
    fn test_sum() {
        let total: Kilometers = [1.5, 2.5, 6.0].into_iter().map(Kilometers::new).sum();
        assert_eq!(total, Kilometers::new(10.0));
    }
}
