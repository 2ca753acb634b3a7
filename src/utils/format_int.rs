use std::fmt;

/// Counter formatted with `'` between groups of three digits, e.g. `12'345`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NiceInt(u128);

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as u128)
    }
}

impl fmt::Display for NiceInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (digits.len() - i) % 3 == 0 {
                f.write_str("'")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NiceInt;

    #[test]
    fn test_delimiters() {
        assert_eq!(NiceInt::from(0u64).to_string(), "0");
        assert_eq!(NiceInt::from(999usize).to_string(), "999");
        assert_eq!(NiceInt::from(1000usize).to_string(), "1'000");
        assert_eq!(NiceInt::from(1234567u64).to_string(), "1'234'567");
    }
}
