use serde::Serialize;

/// Symbol and name of the element selected by a proton count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ElementIdentity {
    pub symbol: &'static str,
    pub name: &'static str,
}

const ELEMENTS: [ElementIdentity; 21] = [
    ElementIdentity::new("", "Empty"),
    ElementIdentity::new("H", "Hydrogen"),
    ElementIdentity::new("He", "Helium"),
    ElementIdentity::new("Li", "Lithium"),
    ElementIdentity::new("Be", "Beryllium"),
    ElementIdentity::new("B", "Boron"),
    ElementIdentity::new("C", "Carbon"),
    ElementIdentity::new("N", "Nitrogen"),
    ElementIdentity::new("O", "Oxygen"),
    ElementIdentity::new("F", "Fluorine"),
    ElementIdentity::new("Ne", "Neon"),
    ElementIdentity::new("Na", "Sodium"),
    ElementIdentity::new("Mg", "Magnesium"),
    ElementIdentity::new("Al", "Aluminum"),
    ElementIdentity::new("Si", "Silicon"),
    ElementIdentity::new("P", "Phosphorus"),
    ElementIdentity::new("S", "Sulfur"),
    ElementIdentity::new("Cl", "Chlorine"),
    ElementIdentity::new("Ar", "Argon"),
    ElementIdentity::new("K", "Potassium"),
    ElementIdentity::new("Ca", "Calcium"),
];

impl ElementIdentity {
    pub const UNKNOWN: ElementIdentity = ElementIdentity::new("?", "Unknown");

    pub const fn new(symbol: &'static str, name: &'static str) -> Self {
        Self { symbol, name }
    }

    /// Looks up the element with the given atomic number.
    ///
    /// Index 0 is the "Empty" placeholder; anything past Calcium is [`Self::UNKNOWN`].
    pub fn identify(protons: u32) -> Self {
        usize::try_from(protons)
            .ok()
            .and_then(|index| ELEMENTS.get(index))
            .copied()
            .unwrap_or(Self::UNKNOWN)
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

pub fn identify(protons: u32) -> ElementIdentity {
    ElementIdentity::identify(protons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_hydrogen_to_calcium() {
        let symbols: Vec<_> = (0..=20).map(|z| identify(z).symbol).collect();
        assert_eq!(
            symbols,
            [
                "", "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si",
                "P", "S", "Cl", "Ar", "K", "Ca"
            ]
        );
    }

    #[test]
    fn zero_protons_is_empty_placeholder() {
        let empty = identify(0);
        assert_eq!(empty, ElementIdentity::new("", "Empty"));
        assert_ne!(empty, ElementIdentity::UNKNOWN);
    }

    #[test]
    fn out_of_table_is_unknown() {
        for z in [21, 26, 118, u32::MAX] {
            let element = identify(z);
            assert_eq!(element.symbol(), "?");
            assert_eq!(element.name(), "Unknown");
            assert_eq!(element, ElementIdentity::UNKNOWN);
        }
    }

    #[test]
    fn names_for_scenarios() {
        assert_eq!(identify(6), ElementIdentity::new("C", "Carbon"));
        assert_eq!(identify(11), ElementIdentity::new("Na", "Sodium"));
        assert_eq!(identify(13).name, "Aluminum");
    }
}
