/// A titled explanation card shown on the concepts tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Concept {
    pub title: &'static str,
    pub body: &'static str,
}

const CONCEPTS: [Concept; 4] = [
    Concept {
        title: "What is an Atom?",
        body: "An atom is the smallest unit of matter that retains the properties of an element. \
               It consists of a nucleus (containing protons and neutrons) surrounded by electrons \
               in shells or energy levels.",
    },
    Concept {
        title: "Atomic Structure",
        body: "The nucleus is at the center and contains positively charged protons and neutral \
               neutrons. Electrons with negative charge orbit the nucleus in specific energy levels \
               called electron shells.",
    },
    Concept {
        title: "Electron Shells",
        body: "Electrons occupy shells around the nucleus. The first shell (K) holds 2 electrons, \
               the second shell (L) holds 8 electrons, and the third shell (M) holds 8 electrons \
               for the first 18 elements.",
    },
    Concept {
        title: "Key Terms",
        body: "• Atomic Number: Number of protons\n\
               • Mass Number: Protons + Neutrons\n\
               • Ion: Atom with unequal protons and electrons\n\
               • Isotope: Same element with different neutrons",
    },
];

pub const FUN_FACT: &str = "If an atom were the size of a football stadium, the nucleus would be \
                            about the size of a marble at the center!";

pub fn all() -> &'static [Concept] {
    &CONCEPTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_terms_keep_one_line_per_term() {
        let key_terms = all().iter().find(|c| c.title == "Key Terms").unwrap();
        assert_eq!(key_terms.body.lines().count(), 4);
        assert!(key_terms.body.lines().all(|line| line.starts_with('•')));
    }

    #[test]
    fn shell_card_mentions_capacities() {
        let shells = &all()[2];
        assert!(shells.body.contains("(K) holds 2"));
        assert!(!shells.body.contains("  "));
    }
}
