use super::TypeMapper;
use crate::{Error, Result};

/// Maps integer columns holding `0` or `1` to `bool`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntToBoolMapper;

impl IntToBoolMapper {
    pub const fn new() -> Self {
        Self
    }
}

impl TypeMapper<i32, bool> for IntToBoolMapper {
    fn language_type(&self) -> &'static str {
        "bool"
    }

    fn database_type(&self) -> &'static str {
        "i32"
    }

    fn to_language_value(&self, value: Option<&i32>) -> Result<Option<bool>> {
        match value {
            None => Ok(None),
            Some(0) => Ok(Some(false)),
            Some(1) => Ok(Some(true)),
            Some(other) => Err(Error::type_conversion(format!(
                "expected 0 or 1 for a boolean column; value={other}"
            ))),
        }
    }

    fn to_database_value(&self, value: Option<&bool>) -> Result<Option<i32>> {
        Ok(value.map(|value| i32::from(*value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_zero_and_one() {
        let mapper = IntToBoolMapper;
        assert_eq!(mapper.to_language_value(Some(&0)).unwrap(), Some(false));
        assert_eq!(mapper.to_language_value(Some(&1)).unwrap(), Some(true));
        assert_eq!(mapper.to_database_value(Some(&true)).unwrap(), Some(1));
        assert_eq!(mapper.to_language_value(None).unwrap(), None);
    }

    #[test]
    fn other_integers_do_not_convert() {
        let err = IntToBoolMapper.to_language_value(Some(&2)).unwrap_err();
        assert!(err.is_type_conversion());
    }
}
