//! Which side of the displayed card is hidden

/// One side of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
}

/// Study direction, stored as `"AB"` (front to back) or `"BA"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealDirection {
    /// Show the front, hide the back
    #[default]
    FrontToBack,
    /// Show the back, hide the front
    BackToFront,
}

impl RevealDirection {
    /// Stored representation
    pub fn as_str(self) -> &'static str {
        match self {
            RevealDirection::FrontToBack => "AB",
            RevealDirection::BackToFront => "BA",
        }
    }

    /// Parse the stored representation
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "AB" => Some(RevealDirection::FrontToBack),
            "BA" => Some(RevealDirection::BackToFront),
            _ => None,
        }
    }

    /// The other direction
    pub fn flipped(self) -> Self {
        match self {
            RevealDirection::FrontToBack => RevealDirection::BackToFront,
            RevealDirection::BackToFront => RevealDirection::FrontToBack,
        }
    }

    /// Side hidden when a card is first shown
    pub fn hidden_side(self) -> Side {
        match self {
            RevealDirection::FrontToBack => Side::Back,
            RevealDirection::BackToFront => Side::Front,
        }
    }
}

/// Hidden flags for the card currently on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealState {
    pub front_hidden: bool,
    pub back_hidden: bool,
}

impl RevealState {
    /// Fresh state for a newly displayed card
    pub fn for_direction(direction: RevealDirection) -> Self {
        match direction.hidden_side() {
            Side::Front => Self { front_hidden: true, back_hidden: false },
            Side::Back => Self { front_hidden: false, back_hidden: true },
        }
    }

    /// Nothing hidden (used for an empty view)
    pub fn all_visible() -> Self {
        Self::default()
    }

    /// Whether `side` is hidden
    pub fn is_hidden(&self, side: Side) -> bool {
        match side {
            Side::Front => self.front_hidden,
            Side::Back => self.back_hidden,
        }
    }

    /// Uncover one side
    pub fn reveal(&mut self, side: Side) {
        match side {
            Side::Front => self.front_hidden = false,
            Side::Back => self.back_hidden = false,
        }
    }
}
