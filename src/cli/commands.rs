//! Actions accepted at the interactive prompt

/// An action the user can type at the menu prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
    /// Anything that is not a known action
    Unknown(String),
}

/// Known actions, in the order they are listed in the menu
const ACTIONS: &[(&str, Action)] = &[
    ("add", Action::Add),
    ("remove", Action::Remove),
    ("import", Action::Import),
    ("export", Action::Export),
    ("ask", Action::Ask),
    ("exit", Action::Exit),
    ("log", Action::Log),
    ("hardest card", Action::HardestCard),
    ("reset stats", Action::ResetStats),
];

impl Action {
    /// Parse a line typed at the menu prompt (surrounding whitespace ignored)
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        ACTIONS
            .iter()
            .find(|(name, _)| *name == input)
            .map(|(_, action)| action.clone())
            .unwrap_or_else(|| Action::Unknown(input.to_string()))
    }

    /// The menu prompt listing every action
    pub fn menu() -> String {
        let names: Vec<&str> = ACTIONS.iter().map(|(name, _)| *name).collect();
        format!("Input the action ({}):", names.join(", "))
    }
}
