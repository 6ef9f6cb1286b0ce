/// Retrosheet team codes whose common abbreviation differs from the code.
pub const MLB_TEAM_ABBREVIATIONS: [(&str, &str); 11] = [
    ("NYA", "NYY"),
    ("NYN", "NYM"),
    ("SFN", "SF"),
    ("SDN", "SD"),
    ("TBA", "TB"),
    ("KCA", "KC"),
    ("CHA", "CWS"),
    ("CHN", "CHC"),
    ("ANA", "LAA"),
    ("LAN", "LAD"),
    ("SLN", "STL"),
];

#[must_use]
pub fn team_display_name(code: &str) -> &str {
    MLB_TEAM_ABBREVIATIONS
        .iter()
        .find(|(retro, _)| *retro == code)
        .map_or(code, |(_, display)| *display)
}

/// A selectable team in the filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamChoice {
    pub code: String,
    pub display: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_code() {
        assert_eq!(team_display_name("NYA"), "NYY");
        assert_eq!(team_display_name("BOS"), "BOS");
    }
}
