mod period;
mod profile;

pub use period::{ Period, YearMonth };
pub use profile::*;
