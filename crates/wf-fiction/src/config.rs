//! Game configuration.

/// Title information shown on the about frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    /// Game title.
    pub name: String,
    /// One-paragraph blurb.
    pub description: String,
    /// Who wrote it.
    pub author: String,
}

impl GameInfo {
    /// Create game info.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            author: author.into(),
        }
    }
}

impl Default for GameInfo {
    fn default() -> Self {
        Self::new("Untitled", "", "Anonymous")
    }
}

/// Options that shape how a game presents itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Title information.
    pub info: GameInfo,
    /// Label put in front of error messages.
    pub error_prefix: String,
    /// Whether frames list the commands that make sense right now.
    pub show_command_list: bool,
    /// Whether the map key is shown.
    pub show_key: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            info: GameInfo::default(),
            error_prefix: "Oops".to_string(),
            show_command_list: true,
            show_key: true,
        }
    }
}

impl GameConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title information.
    pub fn with_info(mut self, info: GameInfo) -> Self {
        self.info = info;
        self
    }

    /// Set the error label.
    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    /// Set whether the command list is shown.
    pub fn with_command_list(mut self, show: bool) -> Self {
        self.show_command_list = show;
        self
    }

    /// Set whether the map key is shown.
    pub fn with_key(mut self, show: bool) -> Self {
        self.show_key = show;
        self
    }
}
