//! Chemical element symbols and molecular-formula matching.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Symbols of the natural elements.
const ELEMENTS: &[&str] = &[
    "Ac", "Ag", "Al", "Am", "Ar", "As", "At", "Au", "Ba", "Be", "Bh", "Bi", "Bk", "Br", "B",
    "Ca", "Cd", "Ce", "Cf", "Cl", "Cm", "Cn", "Co", "Cr", "Cs", "Cu", "C", "Db", "Ds", "Dy",
    "Er", "Es", "Eu", "Fe", "Fl", "Fm", "Fr", "F", "Ga", "Gd", "Ge", "He", "Hf", "Hg", "Ho",
    "Hs", "H", "In", "Ir", "I", "Kr", "K", "La", "Li", "Lr", "Lu", "Lv", "Mc", "Md", "Mg",
    "Mn", "Mo", "Mt", "Na", "Nb", "Nd", "Ne", "Nh", "Ni", "No", "Np", "N", "Og", "Os", "O",
    "Pa", "Pb", "Pd", "Pm", "Po", "Pr", "Pt", "Pu", "P", "Ra", "Rb", "Re", "Rf", "Rg", "Rh",
    "Rn", "Ru", "Sb", "Sc", "Se", "Sg", "Si", "Sm", "Sn", "Sr", "S", "Ta", "Tb", "Tc", "Te",
    "Th", "Ti", "Tl", "Tm", "Ts", "U", "V", "W", "Xe", "Yb", "Y", "Zn", "Zr",
];

static ELEMENT_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ELEMENTS.iter().copied().collect());

/// Match a molecular formula at the start of `s`: one or more element
/// symbols, each optionally followed by a subscript count. Returns the
/// char length of the match; two-letter symbols take precedence.
pub fn molecule_prefix_len(s: &str) -> Option<usize> {
    let chars: Vec<char> = s.chars().collect();
    let mut pos = 0;
    while pos < chars.len() {
        let two: String = chars[pos..(pos + 2).min(chars.len())].iter().collect();
        let one: String = chars[pos..pos + 1].iter().collect();
        if two.chars().count() == 2 && ELEMENT_SET.contains(two.as_str()) {
            pos += 2;
        } else if ELEMENT_SET.contains(one.as_str()) {
            pos += 1;
        } else {
            break;
        }
        while pos < chars.len() && chars[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    if pos > 0 {
        Some(pos)
    } else {
        None
    }
}

/// A formula must contain at least one digit to be read as a molecule;
/// otherwise ordinary words ("BaNaNa") would qualify.
pub fn contains_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formulas() {
        assert_eq!(molecule_prefix_len("H2SO4"), Some(5));
        assert_eq!(molecule_prefix_len("CO2"), Some(3));
        assert_eq!(molecule_prefix_len("x2"), None);
    }

    #[test]
    fn two_letter_symbols_win() {
        // "Co" cobalt, not "C" + "o"
        assert_eq!(molecule_prefix_len("Co2"), Some(3));
        // "o" is not an element, so a bare "C" match stops there
        assert_eq!(molecule_prefix_len("Cow"), Some(1));
    }
}
