use std::{
    fmt,
    fmt::Display,
    iter::Sum,
    num::ParseIntError,
    ops::{Add, AddAssign},
    str::FromStr,
};

use rand::{
    distributions::uniform::{SampleBorrow, SampleUniform, UniformInt, UniformSampler},
    Rng,
};

use serde::Serialize;

/// The distance between two locations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cost(usize);

impl Cost {
    pub fn new(cost: usize) -> Self {
        Cost(cost)
    }

    pub fn zero() -> Self {
        Cost(0)
    }

    /// `None` if the sum does not fit into a `usize`.
    pub fn checked_add(self, rhs: Cost) -> Option<Cost> {
        self.0.checked_add(rhs.0).map(Cost)
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Cost) -> Self::Output {
        Cost(self.0 + rhs.0)
    }
}

impl Sum<Cost> for Cost {
    fn sum<I: Iterator<Item = Cost>>(iter: I) -> Self {
        iter.fold(Cost::new(0), |a, b| Cost::new(a.0 + b.0))
    }
}

impl<'a> Sum<&'a Cost> for Cost {
    fn sum<I: Iterator<Item = &'a Cost>>(iter: I) -> Self {
        iter.fold(Cost::new(0), |a, b| Cost::new(a.0 + b.0))
    }
}

impl AddAssign for Cost {
    fn add_assign(&mut self, rhs: Cost) {
        *self = Cost(self.0 + rhs.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Cost {
    fn from(cost: usize) -> Self {
        Cost::new(cost)
    }
}

impl FromStr for Cost {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map(Cost::new)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UniformCost(UniformInt<usize>);

impl UniformSampler for UniformCost {
    type X = Cost;
    fn new<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        UniformCost(UniformInt::<usize>::new(low.borrow().0, high.borrow().0))
    }
    fn new_inclusive<B1, B2>(low: B1, high: B2) -> Self
    where
        B1: SampleBorrow<Self::X> + Sized,
        B2: SampleBorrow<Self::X> + Sized,
    {
        UniformCost(UniformInt::<usize>::new_inclusive(
            low.borrow().0,
            high.borrow().0,
        ))
    }
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::X {
        Cost::new(self.0.sample(rng))
    }
}

impl SampleUniform for Cost {
    type Sampler = UniformCost;
}

#[cfg(test)]
mod test_cost {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_cost_sum() {
        let costs: Vec<Cost> = vec![464.into(), 141.into()];
        assert_eq!(costs.iter().sum::<Cost>(), 605.into());
        assert_eq!(costs.into_iter().sum::<Cost>(), Cost::new(605));
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(Cost::new(2).checked_add(3.into()), Some(5.into()));
        assert_eq!(Cost::new(usize::MAX - 1).checked_add(2.into()), None);
    }

    #[test]
    fn test_cost_from_str() {
        assert_eq!("518".parse::<Cost>(), Ok(Cost::new(518)));
        assert!("-3".parse::<Cost>().is_err());
        assert!("abc".parse::<Cost>().is_err());
    }

    #[test]
    fn test_sample_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let c: Cost = rng.gen_range(Cost::new(1)..Cost::new(5));
            assert!(c >= 1.into() && c < 5.into());
        }
    }
}
