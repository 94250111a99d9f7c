use thiserror::Error;

/// Placeholder from the sample environment file; treated the same as a missing key.
pub const PLACEHOLDER_API_KEY: &str = "your_gemini_api_key_here";

/// Keys of this length or shorter are rejected before any call is made.
pub const MIN_API_KEY_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnconfiguredReason {
    Missing,
    Placeholder,
    TooShort,
}

/// Configuration state of the model gateway.
///
/// A key that is present but rejected by the provider still counts as
/// `Configured`; that case only shows up as an upstream failure at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayState {
    Configured,
    Unconfigured(UnconfiguredReason),
}

impl GatewayState {
    pub fn classify(credential: Option<&str>) -> Self {
        match credential.map(str::trim) {
            None | Some("") => GatewayState::Unconfigured(UnconfiguredReason::Missing),
            Some(PLACEHOLDER_API_KEY) => {
                GatewayState::Unconfigured(UnconfiguredReason::Placeholder)
            }
            Some(key) if key.chars().count() <= MIN_API_KEY_LENGTH => {
                GatewayState::Unconfigured(UnconfiguredReason::TooShort)
            }
            Some(_) => GatewayState::Configured,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, GatewayState::Configured)
    }

    pub fn status_message(&self) -> &'static str {
        match self {
            GatewayState::Configured => "AI features are available",
            GatewayState::Unconfigured(UnconfiguredReason::Missing) => {
                "GEMINI_API_KEY environment variable not set"
            }
            GatewayState::Unconfigured(UnconfiguredReason::Placeholder) => {
                "Please replace placeholder API key with your actual Gemini API key"
            }
            GatewayState::Unconfigured(UnconfiguredReason::TooShort) => {
                "GEMINI_API_KEY appears to be invalid (too short)"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("AI service not configured. Please add your Gemini API key.")]
    Unconfigured,

    #[error("Failed to generate AI response: {0}")]
    UpstreamFailure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_blank_keys_are_unconfigured() {
        assert_eq!(
            GatewayState::classify(None),
            GatewayState::Unconfigured(UnconfiguredReason::Missing)
        );
        assert_eq!(
            GatewayState::classify(Some("   ")),
            GatewayState::Unconfigured(UnconfiguredReason::Missing)
        );
    }

    #[test]
    fn test_placeholder_key_is_unconfigured() {
        let state = GatewayState::classify(Some(PLACEHOLDER_API_KEY));
        assert_eq!(
            state,
            GatewayState::Unconfigured(UnconfiguredReason::Placeholder)
        );
        assert!(!state.is_configured());
    }

    #[test]
    fn test_short_key_is_unconfigured() {
        assert_eq!(
            GatewayState::classify(Some("0123456789")),
            GatewayState::Unconfigured(UnconfiguredReason::TooShort)
        );
        assert!(GatewayState::classify(Some("0123456789a")).is_configured());
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(
            GatewayState::Configured.status_message(),
            "AI features are available"
        );
        assert_eq!(
            GatewayState::classify(None).status_message(),
            "GEMINI_API_KEY environment variable not set"
        );
    }
}
