//! High-impedance probe for charger status lines
//!
//! The drive pin is pulled low, the sense pin sampled, the drive pin pulled
//! high and the sense pin sampled again:
//!
//! | first | second | status           |
//! |-------|--------|------------------|
//! | low   | high   | `SleepMode`      |
//! | high  | high   | `Charging`       |
//! | low   | low    | `ChargeComplete` |
//! | high  | low    | `Error`          |
//!
//! A line that follows the drive pin is floating: the charger is asleep or
//! thermally shut down.

use rfcx_hal::{InputPin, OutputPin};

use super::channel::{BatteryChannels, BatteryId, ProbeChannel};
use super::status::ChargeStatus;

/// Scoped ownership of a drive line
///
/// The line is driven inactive on acquisition and again on drop, so the
/// probe circuit is never left energized between cycles.
pub struct DriveGuard<'a, D: OutputPin> {
    pin: &'a mut D,
}

impl<'a, D: OutputPin> DriveGuard<'a, D> {
    /// Take the drive line and force it inactive
    pub fn acquire(pin: &'a mut D) -> Self {
        pin.set_low();
        Self { pin }
    }

    /// Drive the line active
    pub fn activate(&mut self) {
        self.pin.set_high();
    }
}

impl<D: OutputPin> Drop for DriveGuard<'_, D> {
    fn drop(&mut self) {
        self.pin.set_low();
    }
}

/// Classify a pair of sense samples
pub const fn classify_levels(first: bool, second: bool) -> ChargeStatus {
    match (first, second) {
        (false, true) => ChargeStatus::SleepMode,
        (true, true) => ChargeStatus::Charging,
        (false, false) => ChargeStatus::ChargeComplete,
        // Line fell while being pulled up; no charger state produces this
        (true, false) => ChargeStatus::Error,
    }
}

/// Take both sense samples with the drive line held by a guard
fn probe<S: InputPin, D: OutputPin>(
    channel: &mut ProbeChannel<S, D>,
) -> Result<(bool, bool), S::Error> {
    let mut drive = DriveGuard::acquire(&mut channel.drive);
    let first = channel.sense.is_high()?;
    drive.activate();
    let second = channel.sense.is_high()?;
    Ok((first, second))
}

/// Probe one channel and classify its charge state
///
/// A failed sense read yields [`ChargeStatus::Error`]. The drive pin is
/// inactive when this returns.
pub fn classify<S: InputPin, D: OutputPin>(channel: &mut ProbeChannel<S, D>) -> ChargeStatus {
    match probe(channel) {
        Ok((first, second)) => classify_levels(first, second),
        Err(_) => ChargeStatus::Error,
    }
}

impl<S: InputPin, D: OutputPin> BatteryChannels<S, D> {
    /// Classify a known battery
    pub fn classify(&mut self, id: BatteryId) -> ChargeStatus {
        classify(self.get_mut(id))
    }

    /// Classify by raw identifier
    ///
    /// Identifiers other than 1 and 2 return [`ChargeStatus::Error`].
    pub fn classify_raw(&mut self, raw: u8) -> ChargeStatus {
        match self.channel_mut(raw) {
            Ok(channel) => classify(channel),
            Err(_) => ChargeStatus::Error,
        }
    }
}


#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use proptest::prelude::*;

    use super::mock::{DrivePin, Line, SensePin};
    use super::*;

    fn channel(line: Line, level: &Cell<bool>) -> ProbeChannel<SensePin<'_>, DrivePin<'_>> {
        ProbeChannel::new(SensePin::new(line, level), DrivePin { level })
    }

    #[test]
    fn test_truth_table() {
        assert_eq!(classify_levels(false, true), ChargeStatus::SleepMode);
        assert_eq!(classify_levels(true, true), ChargeStatus::Charging);
        assert_eq!(classify_levels(false, false), ChargeStatus::ChargeComplete);
        assert_eq!(classify_levels(true, false), ChargeStatus::Error);
    }

    #[test]
    fn test_physical_lines() {
        let level = Cell::new(false);
        assert_eq!(
            classify(&mut channel(Line::Floating, &level)),
            ChargeStatus::SleepMode
        );
        assert_eq!(
            classify(&mut channel(Line::High, &level)),
            ChargeStatus::Charging
        );
        assert_eq!(
            classify(&mut channel(Line::Low, &level)),
            ChargeStatus::ChargeComplete
        );
    }

    #[test]
    fn test_drive_restored_after_read_failure() {
        for at in 0..2 {
            let level = Cell::new(false);
            let mut ch = channel(Line::FailAt(at), &level);
            assert_eq!(classify(&mut ch), ChargeStatus::Error);
            assert!(!level.get(), "drive left active after failure at sample {}", at);
        }
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let level = Cell::new(true);
        let mut pin = DrivePin { level: &level };
        {
            let mut guard = DriveGuard::acquire(&mut pin);
            assert!(!level.get());
            guard.activate();
            assert!(level.get());
        }
        assert!(!level.get());
    }

    #[test]
    fn test_unknown_raw_id_is_error() {
        let level_1 = Cell::new(false);
        let level_2 = Cell::new(false);
        let mut channels = BatteryChannels::new(
            channel(Line::High, &level_1),
            channel(Line::High, &level_2),
        );
        for raw in [0u8, 3, 42, 255] {
            assert_eq!(channels.classify_raw(raw), ChargeStatus::Error);
        }
        assert_eq!(channels.classify_raw(1), ChargeStatus::Charging);
    }

    #[test]
    fn test_repeated_classify_is_stable() {
        let level = Cell::new(false);
        let mut ch = channel(Line::Floating, &level);
        let first = classify(&mut ch);
        for _ in 0..10 {
            assert_eq!(classify(&mut ch), first);
        }
    }

    proptest! {
        #[test]
        fn prop_classify_matches_samples(first in any::<bool>(), second in any::<bool>()) {
            let level = Cell::new(false);
            let mut ch = channel(Line::Scripted(first, second), &level);
            prop_assert_eq!(classify(&mut ch), classify_levels(first, second));
            prop_assert!(!level.get());
        }

        #[test]
        fn prop_unknown_ids_never_panic(raw in 3u8..=255) {
            let level_1 = Cell::new(false);
            let level_2 = Cell::new(false);
            let mut channels = BatteryChannels::new(
                channel(Line::Floating, &level_1),
                channel(Line::Low, &level_2),
            );
            prop_assert_eq!(channels.classify_raw(raw), ChargeStatus::Error);
            prop_assert_eq!(channels.classify_raw(0), ChargeStatus::Error);
        }
    }
}
