//! Studio state and validation error types.

/// Studio error conditions.
///
/// Validation failures are raised before any service call or state mutation;
/// the remaining kinds report operations against state that is not there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StudioErrorKind {
    /// Upload submitted without a title
    MissingTitle,
    /// Upload submitted without a selected file
    MissingFile,
    /// Idea submitted with empty text
    EmptyIdea,
    /// Image edit requested with an empty instruction
    EmptyInstruction,
    /// Image operation requested with no active image
    NoActiveImage,
    /// Schedule requested with no timestamp
    EmptySchedule,
    /// Schedule timestamp could not be parsed
    InvalidSchedule(String),
    /// Operation requires generated content that is not ready
    ContentNotReady,
    /// No generated content exists for the platform
    UnknownPlatformContent(String),
    /// No post with the given id
    UnknownPost(String),
    /// Overlay index is outside the loaded suggestion bundle
    OverlayOutOfRange {
        /// Requested overlay index
        index: usize,
        /// Number of overlays in the loaded bundle
        bound: usize,
    },
}

impl std::fmt::Display for StudioErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudioErrorKind::MissingTitle => write!(f, "A title is required before generating"),
            StudioErrorKind::MissingFile => write!(f, "Select a video file before generating"),
            StudioErrorKind::EmptyIdea => write!(f, "Enter an idea before brainstorming"),
            StudioErrorKind::EmptyInstruction => {
                write!(f, "Enter an editing instruction")
            }
            StudioErrorKind::NoActiveImage => write!(f, "No image is active in this session"),
            StudioErrorKind::EmptySchedule => {
                write!(f, "Select a date and time to schedule")
            }
            StudioErrorKind::InvalidSchedule(input) => {
                write!(f, "'{}' is not a valid schedule time", input)
            }
            StudioErrorKind::ContentNotReady => {
                write!(f, "Generated content is not ready yet")
            }
            StudioErrorKind::UnknownPlatformContent(platform) => {
                write!(f, "No generated content for platform '{}'", platform)
            }
            StudioErrorKind::UnknownPost(id) => write!(f, "No post with id '{}'", id),
            StudioErrorKind::OverlayOutOfRange { index, bound } => {
                write!(
                    f,
                    "Overlay index {} is out of range for {} suggestions",
                    index, bound
                )
            }
        }
    }
}

/// Studio error with source location tracking.
#[derive(Debug, Clone)]
pub struct StudioError {
    /// The kind of error that occurred
    pub kind: StudioErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StudioError {
    /// Create a new StudioError of the given kind at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use vetrina_error::{StudioError, StudioErrorKind};
    ///
    /// let err = StudioError::new(StudioErrorKind::EmptyIdea);
    /// assert!(format!("{}", err).contains("idea"));
    /// ```
    #[track_caller]
    pub fn new(kind: StudioErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for StudioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Studio Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for StudioError {}
