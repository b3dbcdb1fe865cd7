//! OSC timetags.
//!
//! A timetag is a 64-bit NTP fixed-point timestamp: the high 32 bits count
//! seconds since 1900-01-01, the low 32 bits are fractional seconds. The raw
//! value 0 means "execute immediately". The codec carries timetags as opaque
//! data — no scheduling happens here.

/// 64-bit NTP fixed-point timestamp (type tag `t`, bundle header field).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeTag(u64);

impl TimeTag {
    /// The special "execute immediately" timetag (raw value 0).
    pub const IMMEDIATE: TimeTag = TimeTag(0);

    /// Build a timetag from seconds since 1900-01-01 and fractional seconds.
    pub fn from_parts(seconds: u32, fraction: u32) -> Self {
        TimeTag(u64::from(seconds) << 32 | u64::from(fraction))
    }

    /// Seconds since 1900-01-01 (high 32 bits).
    pub fn seconds(self) -> u32 {
        (self.0 >> 32) as u32
    }

    /// Fractional seconds (low 32 bits, units of 2^-32 s).
    pub fn fraction(self) -> u32 {
        self.0 as u32
    }

    /// The raw 64-bit wire value.
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Whether this is the "execute immediately" timetag.
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for TimeTag {
    fn from(raw: u64) -> Self {
        TimeTag(raw)
    }
}

impl From<TimeTag> for u64 {
    fn from(tag: TimeTag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn immediate_is_zero() {
        assert!(TimeTag::IMMEDIATE.is_immediate());
        assert_eq!(TimeTag::IMMEDIATE.raw(), 0);
        assert!(!TimeTag::from(1u64).is_immediate());
    }

    #[test]
    fn parts_round_trip() {
        let tag = TimeTag::from_parts(3_913_056_000, 0x8000_0000);
        assert_eq!(tag.seconds(), 3_913_056_000);
        assert_eq!(tag.fraction(), 0x8000_0000);
        assert_eq!(TimeTag::from(tag.raw()), tag);
    }

    #[test]
    fn raw_layout_is_seconds_high_fraction_low() {
        let tag = TimeTag::from_parts(1, 2);
        assert_eq!(tag.raw(), 0x0000_0001_0000_0002);
    }
}
