use std::fmt::{self, Display, Formatter};

/// Age rating attached to a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Rating {
    /// Especially recommended
    Er,
    /// Free for all audiences
    L,
    #[cfg_attr(feature = "serde", serde(rename = "AGE_10"))]
    Age10,
    #[cfg_attr(feature = "serde", serde(rename = "AGE_12"))]
    Age12,
    #[cfg_attr(feature = "serde", serde(rename = "AGE_14"))]
    Age14,
    #[cfg_attr(feature = "serde", serde(rename = "AGE_16"))]
    Age16,
    #[cfg_attr(feature = "serde", serde(rename = "AGE_18"))]
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Er,
        Rating::L,
        Rating::Age10,
        Rating::Age12,
        Rating::Age14,
        Rating::Age16,
        Rating::Age18,
    ];

    /// Resolve a rating from either its label (`"ER"`, `"L"`, `"10"`, ...) or
    /// its variant name (`"AGE_10"`), ignoring case.
    ///
    /// Returns `None` for blank or unrecognised input; callers treat both the
    /// same as a missing rating.
    pub fn of(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|rating| {
            rating.label().eq_ignore_ascii_case(raw)
                || rating.name().eq_ignore_ascii_case(raw)
        })
    }

    /// Short label shown to viewers
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "10",
            Rating::Age12 => "12",
            Rating::Age14 => "14",
            Rating::Age16 => "16",
            Rating::Age18 => "18",
        }
    }

    /// Stable variant name
    pub fn name(&self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "AGE_10",
            Rating::Age12 => "AGE_12",
            Rating::Age14 => "AGE_14",
            Rating::Age16 => "AGE_16",
            Rating::Age18 => "AGE_18",
        }
    }
}

impl Display for Rating {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_labels_and_names() {
        assert_eq!(Rating::of("L"), Some(Rating::L));
        assert_eq!(Rating::of("er"), Some(Rating::Er));
        assert_eq!(Rating::of("14"), Some(Rating::Age14));
        assert_eq!(Rating::of("age_18"), Some(Rating::Age18));
    }

    #[test]
    fn unknown_labels_resolve_to_none() {
        assert_eq!(Rating::of("JAJAJAJA"), None);
        assert_eq!(Rating::of(""), None);
        assert_eq!(Rating::of("11"), None);
    }
}
