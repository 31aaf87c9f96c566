use crate::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct RawBoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
}

impl TryFrom<RawBoxSpace> for BoxSpace {
    type Error = Error;

    fn try_from(raw: RawBoxSpace) -> Result<Self> {
        Self::new(raw.low, raw.high)
    }
}

/// A bounded box in `R^n`, as used for the action and observation spaces.
///
/// Every dimension has its own `[low, high]` interval. The bounds are
/// checked on construction, so `low[i] <= high[i]` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBoxSpace")]
pub struct BoxSpace {
    low: Vec<f32>,
    high: Vec<f32>,
}

impl BoxSpace {
    pub fn new(low: Vec<f32>, high: Vec<f32>) -> Result<Self> {
        if low.len() != high.len() {
            return Err(Error::BoundsLength {
                low: low.len(),
                high: high.len(),
            });
        }

        if let Some(index) = low
            .iter()
            .zip(&high)
            .position(|(lo, hi)| lo.is_nan() || hi.is_nan() || lo > hi)
        {
            return Err(Error::InvalidBounds {
                index,
                low: low[index],
                high: high[index],
            });
        }

        Ok(Self { low, high })
    }

    /// Same interval in every dimension.
    pub fn uniform(dim: usize, low: f32, high: f32) -> Result<Self> {
        Self::new(vec![low; dim], vec![high; dim])
    }

    pub fn dim(&self) -> usize {
        self.low.len()
    }

    pub fn low(&self) -> &[f32] {
        &self.low
    }

    pub fn high(&self) -> &[f32] {
        &self.high
    }

    pub fn contains(&self, values: &[f32]) -> bool {
        values.len() == self.dim()
            && values
                .iter()
                .zip(self.low.iter().zip(&self.high))
                .all(|(val, (lo, hi))| lo <= val && val <= hi)
    }

    /// Clamps an action into the box in place. NaN components stay NaN.
    pub fn clip(&self, action: &mut [f32]) -> Result<()> {
        if action.len() != self.dim() {
            return Err(Error::ActionShape {
                expected: self.dim(),
                actual: action.len(),
            });
        }

        for (val, (lo, hi)) in action.iter_mut().zip(self.low.iter().zip(&self.high)) {
            *val = val.clamp(*lo, *hi);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_bounds() {
        let err = BoxSpace::new(vec![0.0; 3], vec![1.0; 2]).unwrap_err();
        assert!(matches!(err, Error::BoundsLength { low: 3, high: 2 }));
    }

    #[test]
    fn rejects_inverted_and_nan_bounds() {
        let err = BoxSpace::new(vec![0.0, 2.0], vec![1.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { index: 1, .. }));

        let err = BoxSpace::new(vec![f32::NAN], vec![1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidBounds { index: 0, .. }));
    }

    #[test]
    fn clip_clamps_each_dimension() {
        let space = BoxSpace::new(vec![-1.0, 0.0, -0.5], vec![1.0, 2.0, 0.5]).unwrap();
        let mut action = vec![-3.0, 1.5, 0.75];
        space.clip(&mut action).unwrap();

        assert_eq!(action, vec![-1.0, 1.5, 0.5]);
        assert!(space.contains(&action));
    }

    #[test]
    fn clip_keeps_nan() {
        let space = BoxSpace::uniform(2, -1.0, 1.0).unwrap();
        let mut action = vec![f32::NAN, 4.0];
        space.clip(&mut action).unwrap();

        assert!(action[0].is_nan());
        assert_eq!(action[1], 1.0);
    }

    #[test]
    fn clip_checks_length() {
        let space = BoxSpace::uniform(9, -0.397, 0.397).unwrap();
        let err = space.clip(&mut [0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            Error::ActionShape {
                expected: 9,
                actual: 3
            }
        ));
    }

    #[test]
    fn contains_rejects_wrong_length() {
        let space = BoxSpace::uniform(3, -1.0, 1.0).unwrap();
        assert!(space.contains(&[0.0, 0.5, -0.5]));
        assert!(!space.contains(&[0.0, 0.5]));
        assert!(!space.contains(&[0.0; 4]));
        assert!(!space.contains(&[0.0, 2.0, 0.0]));
    }

    #[test]
    fn toml_round_trip() {
        let space = BoxSpace::new(vec![-0.397, -1.2], vec![0.397, 0.5]).unwrap();
        let toml_str = toml::to_string(&space).unwrap();
        let parsed: BoxSpace = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, space);
    }

    #[test]
    fn deserialize_validates_bounds() {
        let space: BoxSpace = toml::from_str("low = [-1.0, -2.0]\nhigh = [1.0, 2.0]").unwrap();
        assert_eq!(space.dim(), 2);
        assert_eq!(space.high(), &[1.0, 2.0]);

        assert!(toml::from_str::<BoxSpace>("low = [1.0]\nhigh = [-1.0]").is_err());
    }
}
