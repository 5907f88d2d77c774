use serde::Deserialize;

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Hash, Deserialize, PartialOrd)]
#[serde(transparent)]
pub struct Time(pub i64);

impl Time {
    /// `None` when the result does not fit.
    pub fn checked_add(self, rhs: i64) -> Option<Time> {
        self.0.checked_add(rhs).map(Time)
    }
}

impl std::fmt::Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add() {
        assert_eq!(Some(Time(163)), Time(100).checked_add(63));
        assert_eq!(Some(Time(97)), Time(100).checked_add(-3));
        assert_eq!(None, Time(i64::MAX).checked_add(1));
        assert_eq!(None, Time(i64::MIN).checked_add(-1));
    }
}
