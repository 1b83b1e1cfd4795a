use thiserror::Error;

/// Rejection reasons produced by the line validators.
///
/// These never leave the prompt loop: they are printed and the user is asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("null or empty input")]
    Empty,

    #[error("too many inputs")]
    TooManyInputs,

    #[error("cannot parse integer")]
    NotAnInteger,

    #[error("cannot have negative number")]
    Negative,

    #[error("too few words: expected at least {expected}, got {count}")]
    TooFewWords { expected: usize, count: usize },

    #[error("group must have at least one person")]
    EmptyGroup,

    #[error("unknown menu choice: {0}")]
    UnknownMenuChoice(String),
}

#[derive(Error, Debug)]
pub enum CinemaError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("could not find price group for age: {age}")]
    NoPriceBand { age: u32 },

    #[error("Input stream closed")]
    InputClosed,

    #[error("Processing error: {message}")]
    ProcessingError { message: String },
}

impl CinemaError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CinemaError::IoError(e) => format!("Could not talk to the terminal: {}", e),
            CinemaError::Input(e) => format!("Error: {}", e),
            CinemaError::ConfigParseError { .. } | CinemaError::InvalidConfigValueError { .. } => {
                format!("The price table is broken: {}", self)
            }
            CinemaError::NoPriceBand { age } => {
                format!("could not find price group for age: {}", age)
            }
            CinemaError::InputClosed => "No more input, goodbye.".to_string(),
            CinemaError::ProcessingError { message } => format!("Something went wrong: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CinemaError::IoError(_) => "Check that stdin and stdout are attached to a terminal or pipe",
            CinemaError::Input(_) => "Enter the value again",
            CinemaError::ConfigParseError { .. } => "Fix the TOML syntax of the price table",
            CinemaError::InvalidConfigValueError { .. } => {
                "Make sure every band has a name and lower bound below its upper bound"
            }
            CinemaError::NoPriceBand { .. } => "Add a fallback band without bounds to the price table",
            CinemaError::InputClosed => "Run the program again to start a new session",
            CinemaError::ProcessingError { .. } => "Try a smaller group",
        }
    }

    /// Whether the kiosk can report the error and go back to the menu.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CinemaError::Input(_) | CinemaError::NoPriceBand { .. } | CinemaError::ProcessingError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CinemaError>;
