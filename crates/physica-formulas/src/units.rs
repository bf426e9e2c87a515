//! SI prefixes and prefix-to-prefix scaling

use std::fmt;

use physica_core::Decimal;

/// Decimal SI prefix, from yocto (10⁻²⁴) to yotta (10²⁴)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    #[default]
    Base,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

impl SiPrefix {
    pub const ALL: [SiPrefix; 17] = [
        SiPrefix::Yocto,
        SiPrefix::Zepto,
        SiPrefix::Atto,
        SiPrefix::Femto,
        SiPrefix::Pico,
        SiPrefix::Nano,
        SiPrefix::Micro,
        SiPrefix::Milli,
        SiPrefix::Base,
        SiPrefix::Kilo,
        SiPrefix::Mega,
        SiPrefix::Giga,
        SiPrefix::Tera,
        SiPrefix::Peta,
        SiPrefix::Exa,
        SiPrefix::Zetta,
        SiPrefix::Yotta,
    ];

    /// Power of ten this prefix stands for
    pub fn exponent(&self) -> i64 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Base => 0,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    /// 10^exponent
    pub fn scale(&self) -> Decimal {
        Decimal::new(1, self.exponent())
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "μ",
            SiPrefix::Milli => "m",
            SiPrefix::Base => "",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }

    /// Parse a prefix symbol. Micro accepts both `μ` and `u`; the empty
    /// string is the unprefixed base unit.
    pub fn from_symbol(symbol: &str) -> Option<SiPrefix> {
        if symbol == "u" {
            return Some(SiPrefix::Micro);
        }
        Self::ALL.into_iter().find(|p| p.symbol() == symbol)
    }
}

impl fmt::Display for SiPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rescale `value` from one prefix to another, value·from/to.
/// Exact: the factor is a power of ten.
pub fn convert(value: &Decimal, from: SiPrefix, to: SiPrefix) -> Decimal {
    value * Decimal::new(1, from.exponent() - to.exponent())
}
