/// Per-hole award. `None` is the unselected sentinel and stores as `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Medal {
    None,
    ChipIn,
    Gold,
    Silver,
    Bronze,
    Iron,
}

/// Selector options, in display order.
pub const MEDAL_OPTIONS: [Medal; 6] = [
    Medal::None,
    Medal::ChipIn,
    Medal::Gold,
    Medal::Silver,
    Medal::Bronze,
    Medal::Iron,
];

pub const UNSELECTED_TEXT: &str = "選択してください";

impl Medal {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Medal::None => "",
            Medal::ChipIn => "チップイン",
            Medal::Gold => "金",
            Medal::Silver => "銀",
            Medal::Bronze => "銅",
            Medal::Iron => "鉄",
        }
    }

    #[must_use]
    pub fn points(self) -> u8 {
        match self {
            Medal::None => 0,
            Medal::ChipIn => 5,
            Medal::Gold => 4,
            Medal::Silver => 3,
            Medal::Bronze => 2,
            Medal::Iron => 1,
        }
    }

    /// Text shown for the option; the unselected sentinel gets a prompt.
    #[must_use]
    pub fn option_text(self) -> &'static str {
        match self {
            Medal::None => UNSELECTED_TEXT,
            other => other.label(),
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        MEDAL_OPTIONS.into_iter().find(|m| m.label() == label)
    }
}

/// Point value for a stored label. Labels outside the table score 0.
#[must_use]
pub fn medal_points(label: &str) -> u8 {
    Medal::from_label(label).map_or(0, Medal::points)
}
