use std::fmt;

/// The game mode a player is in on the server side. Which of these a client can
/// actually display depends on the protocol it speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Survival => "survival",
            Self::Creative => "creative",
            Self::Adventure => "adventure",
            Self::Spectator => "spectator",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::GameMode;

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(GameMode::Survival.to_string(), "survival");
        assert_eq!(GameMode::Spectator.to_string(), "spectator");
    }
}
