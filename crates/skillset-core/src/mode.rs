//! Run-wide operating flags
//!
//! [`OperatingMode`] is resolved once from the command line and then passed by
//! value to every component. Nothing reads flags from global state, so a test
//! can drive a dry run and a real run side by side.

/// Immutable flags for one installer run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperatingMode {
    /// Assume yes at every confirmation prompt
    pub auto_confirm: bool,
    /// Show paths, byte sizes, size deltas and progress
    pub verbose: bool,
    /// Compute and report only; never touch the filesystem
    pub dry_run: bool,
}

impl OperatingMode {
    /// Mode with every flag off: prompt per package and apply.
    pub fn interactive() -> Self {
        Self::default()
    }

    /// Set auto-confirm.
    pub fn with_auto_confirm(mut self, auto_confirm: bool) -> Self {
        self.auto_confirm = auto_confirm;
        self
    }

    /// Set verbose output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Set dry-run.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether confirmation is implied without asking.
    ///
    /// A dry run never prompts, since it cannot mutate anything.
    pub fn confirms_implicitly(&self) -> bool {
        self.dry_run || self.auto_confirm
    }
}

/// What applying a package will do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The package is absent from the destination
    Install,
    /// The package is already installed and will be replaced
    Update,
}

impl Action {
    /// Present-tense verb for prompts and headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Update => "update",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
