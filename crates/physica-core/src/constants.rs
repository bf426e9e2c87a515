//! Physical constants table
//!
//! CODATA-class literals, built once under the active precision and shared
//! by reference for the rest of the process. Derived entries (ħ, light-year)
//! are computed from the base entries with [`Decimal`] arithmetic.

use std::fmt;
use std::sync::OnceLock;

use crate::{Decimal, PhysicsError, PhysicsResult};

static TABLE: OnceLock<PhysicalConstants> = OnceLock::new();

/// Where a constant's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstantSource {
    /// Exact by SI definition
    Defined,
    /// Experimentally measured, carries uncertainty
    Measured,
    /// Computed from other table entries
    Derived,
    /// Agreed reference value (e.g. mean Earth radius)
    Conventional,
}

impl ConstantSource {
    pub fn name(&self) -> &'static str {
        match self {
            ConstantSource::Defined => "defined",
            ConstantSource::Measured => "measured",
            ConstantSource::Derived => "derived",
            ConstantSource::Conventional => "conventional",
        }
    }
}

impl fmt::Display for ConstantSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named physical constant
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    /// Lookup key
    pub name: &'static str,
    pub symbol: &'static str,
    pub value: Decimal,
    /// SI unit, documentation only
    pub unit: &'static str,
    pub source: ConstantSource,
}

impl Constant {
    fn new(
        name: &'static str,
        symbol: &'static str,
        value: Decimal,
        unit: &'static str,
        source: ConstantSource,
    ) -> Self {
        Constant {
            name,
            symbol,
            value,
            unit,
            source,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) = {} {} [{}]",
            self.name, self.symbol, self.value, self.unit, self.source
        )
    }
}

/// The full constants table
#[derive(Debug, Clone)]
pub struct PhysicalConstants {
    pub speed_of_light: Constant,
    pub planck_constant: Constant,
    /// h / 2π with the full-precision π of this table. Digits past the 16th
    /// deliberately differ from an ħ built on the binary-double π literal.
    pub reduced_planck_constant: Constant,
    pub gravitational_constant: Constant,
    pub elementary_charge: Constant,
    pub boltzmann_constant: Constant,
    pub coulomb_constant: Constant,
    pub vacuum_permittivity: Constant,
    pub vacuum_permeability: Constant,
    pub avogadro_number: Constant,
    pub gas_constant: Constant,
    pub electron_mass: Constant,
    pub proton_mass: Constant,
    pub neutron_mass: Constant,
    pub earth_mass: Constant,
    pub earth_radius: Constant,
    pub standard_gravity: Constant,
    pub hubble_constant: Constant,
    pub pi: Constant,
    pub julian_year: Constant,
    pub light_year: Constant,
    pub absolute_zero_celsius: Constant,
}

/// Source literal; the table is built from a fixed set of these
fn literal(s: &'static str) -> Decimal {
    s.parse()
        .unwrap_or_else(|err| panic!("malformed constant literal `{s}`: {err}"))
}

impl PhysicalConstants {
    fn build() -> PhysicsResult<Self> {
        use ConstantSource::*;

        let c = literal("299792458");
        let h = literal("6.62607015e-34");
        let pi = literal("3.1415926535897932384626433832795028841971693993751");
        let julian_year = literal("31557600");

        let two_pi = &Decimal::from(2) * &pi;
        let h_bar = h.checked_div(&two_pi)?;
        let light_year = &c * &julian_year;

        Ok(PhysicalConstants {
            speed_of_light: Constant::new("speed_of_light", "c", c, "m/s", Defined),
            planck_constant: Constant::new("planck_constant", "h", h, "J·s", Defined),
            reduced_planck_constant: Constant::new(
                "reduced_planck_constant",
                "ħ",
                h_bar,
                "J·s",
                Derived,
            ),
            gravitational_constant: Constant::new(
                "gravitational_constant",
                "G",
                literal("6.67430e-11"),
                "m³/(kg·s²)",
                Measured,
            ),
            elementary_charge: Constant::new(
                "elementary_charge",
                "e",
                literal("1.602176634e-19"),
                "C",
                Defined,
            ),
            boltzmann_constant: Constant::new(
                "boltzmann_constant",
                "k_B",
                literal("1.380649e-23"),
                "J/K",
                Defined,
            ),
            coulomb_constant: Constant::new(
                "coulomb_constant",
                "k_e",
                literal("8.9875517923e9"),
                "N·m²/C²",
                Measured,
            ),
            vacuum_permittivity: Constant::new(
                "vacuum_permittivity",
                "ε₀",
                literal("8.8541878128e-12"),
                "F/m",
                Measured,
            ),
            vacuum_permeability: Constant::new(
                "vacuum_permeability",
                "μ₀",
                literal("1.25663706212e-6"),
                "H/m",
                Measured,
            ),
            avogadro_number: Constant::new(
                "avogadro_number",
                "N_A",
                literal("6.02214076e23"),
                "1/mol",
                Defined,
            ),
            gas_constant: Constant::new(
                "gas_constant",
                "R",
                literal("8.314462618"),
                "J/(mol·K)",
                Defined,
            ),
            electron_mass: Constant::new(
                "electron_mass",
                "m_e",
                literal("9.10938356e-31"),
                "kg",
                Measured,
            ),
            proton_mass: Constant::new(
                "proton_mass",
                "m_p",
                literal("1.67262192369e-27"),
                "kg",
                Measured,
            ),
            neutron_mass: Constant::new(
                "neutron_mass",
                "m_n",
                literal("1.67492749804e-27"),
                "kg",
                Measured,
            ),
            earth_mass: Constant::new("earth_mass", "M_⊕", literal("5.972e24"), "kg", Measured),
            earth_radius: Constant::new(
                "earth_radius",
                "R_⊕",
                literal("6371000"),
                "m",
                Conventional,
            ),
            standard_gravity: Constant::new(
                "standard_gravity",
                "g₀",
                literal("9.80665"),
                "m/s²",
                Defined,
            ),
            hubble_constant: Constant::new(
                "hubble_constant",
                "H₀",
                literal("67400"),
                "(m/s)/Mpc",
                Measured,
            ),
            pi: Constant::new("pi", "π", pi, "1", Defined),
            julian_year: Constant::new("julian_year", "a_j", julian_year, "s", Defined),
            light_year: Constant::new("light_year", "ly", light_year, "m", Derived),
            absolute_zero_celsius: Constant::new(
                "absolute_zero_celsius",
                "T₀",
                literal("-273.15"),
                "°C",
                Defined,
            ),
        })
    }

    /// Every entry, in declaration order
    pub fn all(&self) -> [&Constant; 22] {
        [
            &self.speed_of_light,
            &self.planck_constant,
            &self.reduced_planck_constant,
            &self.gravitational_constant,
            &self.elementary_charge,
            &self.boltzmann_constant,
            &self.coulomb_constant,
            &self.vacuum_permittivity,
            &self.vacuum_permeability,
            &self.avogadro_number,
            &self.gas_constant,
            &self.electron_mass,
            &self.proton_mass,
            &self.neutron_mass,
            &self.earth_mass,
            &self.earth_radius,
            &self.standard_gravity,
            &self.hubble_constant,
            &self.pi,
            &self.julian_year,
            &self.light_year,
            &self.absolute_zero_celsius,
        ]
    }

    /// Find a constant by name or symbol
    pub fn get(&self, key: &str) -> Option<&Constant> {
        self.all()
            .into_iter()
            .find(|constant| constant.name == key || constant.symbol == key)
    }
}

/// The shared table, built on first access
pub fn constants() -> &'static PhysicalConstants {
    TABLE.get_or_init(|| {
        let table = PhysicalConstants::build()
            .unwrap_or_else(|err| panic!("physical constants table failed to build: {err}"));
        tracing::debug!(entries = table.all().len(), "physical constants table built");
        table
    })
}

/// Value of a constant by name or symbol
pub fn lookup(key: &str) -> PhysicsResult<&'static Decimal> {
    constants()
        .get(key)
        .map(|constant| &constant.value)
        .ok_or_else(|| PhysicsError::UnknownConstant(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_literals_match_codata() {
        let table = constants();
        assert_eq!(table.speed_of_light.value, Decimal::from(299792458));
        assert_eq!(table.gravitational_constant.value, dec("6.67430e-11"));
        assert_eq!(table.planck_constant.value, dec("6.62607015e-34"));
        assert_eq!(table.standard_gravity.value, dec("9.80665"));
        assert_eq!(table.pi.value.as_big_decimal().digits(), 50);
    }

    #[test]
    fn test_derived_constants() {
        let table = constants();
        let two_pi = &Decimal::from(2) * &table.pi.value;
        assert_eq!(
            table.reduced_planck_constant.value,
            table.planck_constant.value.checked_div(&two_pi).unwrap()
        );
        assert_eq!(table.light_year.value, dec("9460730472580800"));
        assert_eq!(table.reduced_planck_constant.source, ConstantSource::Derived);
    }

    #[test]
    fn test_h_bar_uses_full_pi() {
        // h / (2 · 3.141592653589793) is 1.05457181764615647e-34 from the 17th digit on
        let short_pi: Decimal = "3.141592653589793".parse().unwrap();
        let h = &constants().planck_constant.value;
        let coarse = h.checked_div(&(&Decimal::from(2) * &short_pi)).unwrap();
        let h_bar = &constants().reduced_planck_constant.value;
        assert_ne!(*h_bar, coarse);
        assert!((h_bar - &coarse).abs() < dec("1e-49"));
        assert!(h_bar.to_string().starts_with("1.0545718176461563"));
    }

    #[test]
    fn test_display_names_source() {
        let table = constants();
        assert_eq!(
            table.speed_of_light.to_string(),
            "speed_of_light (c) = 299792458 m/s [defined]"
        );
        assert!(table.light_year.to_string().ends_with("[derived]"));
        assert_eq!(ConstantSource::Measured.name(), "measured");
        assert_eq!(ConstantSource::Conventional.to_string(), "conventional");
    }

    #[test]
    fn test_lookup_by_name_and_symbol() {
        assert_eq!(lookup("speed_of_light").unwrap(), lookup("c").unwrap());
        assert_eq!(lookup("ħ").unwrap(), &constants().reduced_planck_constant.value);
        assert_eq!(
            lookup("warp_factor"),
            Err(PhysicsError::UnknownConstant("warp_factor".to_string()))
        );
    }

    #[test]
    fn test_names_are_unique() {
        let table = constants();
        let entries = table.all();
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert_ne!(a.name, b.name);
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_lookup_is_stable(index in 0usize..22) {
            let name = constants().all()[index].name;
            let first = lookup(name).unwrap().clone();
            let second = lookup(name).unwrap().clone();
            prop_assert_eq!(first, second);
            prop_assert!(std::ptr::eq(lookup(name).unwrap(), lookup(name).unwrap()));
        }
    }
}
