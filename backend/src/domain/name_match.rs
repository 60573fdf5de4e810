//! Case-insensitive name matching used when resolving taxonomy nodes from
//! URL segments.

/// `true` when `haystack` contains `needle`, ignoring case.
///
/// An empty needle matches everything.
///
/// # Examples
/// ```
/// use storefront::domain::name_match::contains_ignore_case;
///
/// assert!(contains_ignore_case("Power Tools", "power"));
/// assert!(!contains_ignore_case("Abrasives", "tools"));
/// ```
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// `true` when both names are equal, ignoring case.
pub fn equals_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

/// First item whose name contains `fragment`, ignoring case.
pub fn first_containing<'a, T>(
    items: &'a [T],
    fragment: &str,
    name: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let needle = fragment.to_lowercase();
    items
        .iter()
        .find(|item| name(item).to_lowercase().contains(&needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Power Tools", "TOOLS", true)]
    #[case("Power Tools", "", true)]
    #[case("Pneumatic", "power", false)]
    fn contains_ignores_case(#[case] haystack: &str, #[case] needle: &str, #[case] expected: bool) {
        assert_eq!(contains_ignore_case(haystack, needle), expected);
    }

    #[rstest]
    #[case("Bosch", "bosch", true)]
    #[case("Bosch", "Bosc", false)]
    fn equals_ignores_case(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(equals_ignore_case(left, right), expected);
    }

    #[rstest]
    fn first_containing_returns_first_match() {
        let names = ["Cutting Tools", "Power Tools"];
        let found = first_containing(&names, "tools", |name| name);
        assert_eq!(found, Some(&"Cutting Tools"));
    }
}
