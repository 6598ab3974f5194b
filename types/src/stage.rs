//! The five stages of the onboarding ritual.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The user's position in the onboarding flow.
///
/// Exactly one stage is current at any time. The persisted form is the
/// upper-case name returned by [`Stage::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stage {
    #[default]
    Invite,
    Contract,
    Sign,
    Reject,
    Access,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized stage: {0:?}")]
pub struct ParseStageError(String);

impl ParseStageError {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Invite,
        Stage::Contract,
        Stage::Sign,
        Stage::Reject,
        Stage::Access,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Invite => "INVITE",
            Stage::Contract => "CONTRACT",
            Stage::Sign => "SIGN",
            Stage::Reject => "REJECT",
            Stage::Access => "ACCESS",
        }
    }

    /// Header label shown in the top-right corner of each screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Stage::Invite => "CONVITE EXCLUSIVO",
            Stage::Contract => "ACESSO RESTRITO",
            Stage::Sign => "ASSINATURA REQUERIDA",
            Stage::Reject => "ACESSO NEGADO",
            Stage::Access => "ACESSO CONCEDIDO",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is exact: only the five persisted names are accepted.
impl FromStr for Stage {
    type Err = ParseStageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| ParseStageError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::Stage;

    #[test]
    fn every_stage_parses_from_its_persisted_name() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>(), Ok(stage));
        }
    }

    #[test]
    fn parsing_is_case_sensitive_and_exact() {
        for raw in ["invite", "Contract", " SIGN", "ACCESS\n", "", "DONE"] {
            let err = raw.parse::<Stage>().unwrap_err();
            assert_eq!(err.raw(), raw);
        }
    }

    #[test]
    fn default_is_invite() {
        assert_eq!(Stage::default(), Stage::Invite);
    }
}
