/// Canonical form used for title matching: letters and digits only, lowercased.
#[must_use]
pub fn normalize(text: &str) -> String {
    // Lowercase first: some lowercase mappings emit combining marks that must not survive.
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| ch.is_alphanumeric())
        .collect()
}

/// Predicate that accepts any text normalizing to the same form as `query`.
pub fn matches(query: &str) -> impl Fn(&str) -> bool + use<> {
    let target = normalize(query);
    move |text| normalize(text) == target
}
