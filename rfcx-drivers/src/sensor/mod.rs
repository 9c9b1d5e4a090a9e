//! I2C sensor drivers

pub mod ads1015;
pub mod hih6130;
pub mod lm75bd;

pub use ads1015::Ads1015;
pub use hih6130::Hih6130;
pub use lm75bd::Lm75bd;
