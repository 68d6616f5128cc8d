/// Whether the boundaries of a range predicate match.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Inclusion {
    /// `start <= value <= end`
    #[default]
    StartInclusiveEndInclusive,

    /// `start <= value < end`
    StartInclusiveEndExclusive,

    /// `start < value <= end`
    StartExclusiveEndInclusive,

    /// `start < value < end`
    StartExclusiveEndExclusive,
}

impl Inclusion {
    pub fn is_start_inclusive(self) -> bool {
        matches!(
            self,
            Self::StartInclusiveEndInclusive | Self::StartInclusiveEndExclusive
        )
    }

    pub fn is_end_inclusive(self) -> bool {
        matches!(
            self,
            Self::StartInclusiveEndInclusive | Self::StartExclusiveEndInclusive
        )
    }

    /// `true` if `value` lies in the range `start..end` under this inclusion.
    pub fn contains<V: PartialOrd>(self, start: &V, end: &V, value: &V) -> bool {
        let after_start = if self.is_start_inclusive() {
            start <= value
        } else {
            start < value
        };

        let before_end = if self.is_end_inclusive() {
            value <= end
        } else {
            value < end
        };

        after_start && before_end
    }
}

#[cfg(test)]
mod tests {
    use super::Inclusion::*;
    use super::*;

    #[test]
    fn boundaries() {
        let cases = [
            (StartInclusiveEndInclusive, true, true),
            (StartInclusiveEndExclusive, true, false),
            (StartExclusiveEndInclusive, false, true),
            (StartExclusiveEndExclusive, false, false),
        ];

        for (inclusion, at_start, at_end) in cases {
            assert_eq!(inclusion.contains(&10, &20, &10), at_start, "{inclusion:?}");
            assert_eq!(inclusion.contains(&10, &20, &20), at_end, "{inclusion:?}");
            assert!(inclusion.contains(&10, &20, &15), "{inclusion:?}");
            assert!(!inclusion.contains(&10, &20, &9), "{inclusion:?}");
            assert!(!inclusion.contains(&10, &20, &21), "{inclusion:?}");
        }
    }

    #[test]
    fn default_is_fully_inclusive() {
        assert_eq!(Inclusion::default(), StartInclusiveEndInclusive);
    }
}
