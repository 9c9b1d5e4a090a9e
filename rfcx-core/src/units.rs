//! Fixed-point quantities
//!
//! Readings are carried as hundredths so the report can be produced
//! without floating point.

use core::fmt::{self, Write};

use heapless::String;

/// A value in hundredths of its unit (2350 = 23.50)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Centi(pub i32);

impl Centi {
    pub const ZERO: Self = Self(0);

    /// Convert from thousandths, rounding half away from zero
    pub const fn from_milli(milli: i32) -> Self {
        if milli >= 0 {
            Self((milli + 5) / 10)
        } else {
            Self((milli - 5) / 10)
        }
    }

    /// Raw hundredths
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Two fractional digits; width and alignment flags are honoured
///
/// `{:>5}` reproduces the `dtostrf(v, 5, 2)` layout of the serial report.
impl fmt::Display for Centi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf: String<16> = String::new();
        let abs = self.0.unsigned_abs();
        if self.0 < 0 {
            buf.push('-').map_err(|_| fmt::Error)?;
        }
        write!(buf, "{}.{:02}", abs / 100, abs % 100)?;
        f.pad(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Centi(2350)), "23.50");
        assert_eq!(format!("{}", Centi(5)), "0.05");
        assert_eq!(format!("{}", Centi(-50)), "-0.50");
        assert_eq!(format!("{}", Centi(-1234)), "-12.34");
    }

    #[test]
    fn test_report_width() {
        assert_eq!(format!("{:>5}", Centi(330)), " 3.30");
        assert_eq!(format!("{:>5}", Centi(2350)), "23.50");
        assert_eq!(format!("{:>5}", Centi(123456)), "1234.56");
    }

    #[test]
    fn test_from_milli_rounds() {
        assert_eq!(Centi::from_milli(25125), Centi(2513));
        assert_eq!(Centi::from_milli(25124), Centi(2512));
        assert_eq!(Centi::from_milli(-125), Centi(-13));
        assert_eq!(Centi::from_milli(0), Centi::ZERO);
    }
}
