//! Charge status codes and their display text

/// Current charge classification of one battery channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeStatus {
    /// Status line held high on both samples
    Charging,
    /// Status line held low on both samples
    ChargeComplete,
    /// Status line followed the drive pin (high impedance)
    ///
    /// The probe cannot tell charger sleep from a thermal shutdown, so an
    /// over-temperature charger also lands here.
    SleepMode,
    /// Charger reported a temperature fault
    TemperatureFault,
    /// Not yet sampled, or the sample was unusable
    Error,
}

impl ChargeStatus {
    /// Display text used in the serial report
    pub const fn as_str(&self) -> &'static str {
        match self {
            ChargeStatus::Charging => "Charging",
            ChargeStatus::ChargeComplete => "Charge Complete",
            ChargeStatus::SleepMode => "Sleep Mode",
            ChargeStatus::TemperatureFault => "Temperature Fault",
            ChargeStatus::Error => "ERROR",
        }
    }

    /// Raw ordinal of this status
    pub const fn code(&self) -> u8 {
        match self {
            ChargeStatus::Charging => 0,
            ChargeStatus::ChargeComplete => 1,
            ChargeStatus::SleepMode => 2,
            ChargeStatus::TemperatureFault => 3,
            ChargeStatus::Error => 0xFF,
        }
    }

    /// Decode a raw ordinal
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(ChargeStatus::Charging),
            1 => Some(ChargeStatus::ChargeComplete),
            2 => Some(ChargeStatus::SleepMode),
            3 => Some(ChargeStatus::TemperatureFault),
            0xFF => Some(ChargeStatus::Error),
            _ => None,
        }
    }
}

impl core::fmt::Display for ChargeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Display text for a raw status code, `"UNKNOWN"` if unmapped
pub fn status_text(code: u8) -> &'static str {
    ChargeStatus::from_code(code).map_or("UNKNOWN", |status| status.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ChargeStatus; 5] = [
        ChargeStatus::Charging,
        ChargeStatus::ChargeComplete,
        ChargeStatus::SleepMode,
        ChargeStatus::TemperatureFault,
        ChargeStatus::Error,
    ];

    #[test]
    fn test_display_text() {
        assert_eq!(ChargeStatus::Charging.as_str(), "Charging");
        assert_eq!(ChargeStatus::ChargeComplete.as_str(), "Charge Complete");
        assert_eq!(ChargeStatus::SleepMode.as_str(), "Sleep Mode");
        assert_eq!(ChargeStatus::TemperatureFault.as_str(), "Temperature Fault");
        assert_eq!(ChargeStatus::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_codes_are_consistent() {
        for status in ALL {
            assert_eq!(ChargeStatus::from_code(status.code()), Some(status));
            assert_eq!(status_text(status.code()), status.as_str());
        }
    }

    #[test]
    fn test_unmapped_code_is_unknown() {
        assert_eq!(status_text(4), "UNKNOWN");
        assert_eq!(status_text(0x7F), "UNKNOWN");
        assert_eq!(ChargeStatus::from_code(4), None);
    }
}
