use std::fmt;

#[derive(Debug)]
pub enum MatchTokenError {
    BadSignature,
    Expired,
    IssuerMismatch,
    AudienceMismatch,
    Malformed,
    Signing(String),
}

impl fmt::Display for MatchTokenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatchTokenError::BadSignature => write!(f, "Match token signature does not verify"),
            MatchTokenError::Expired => write!(f, "Match token has expired"),
            MatchTokenError::IssuerMismatch => write!(f, "Match token issuer is not recognized"),
            MatchTokenError::AudienceMismatch => {
                write!(f, "Match token audience is not recognized")
            }
            MatchTokenError::Malformed => write!(f, "Match token could not be parsed"),
            MatchTokenError::Signing(msg) => write!(f, "Failed to sign match token: {}", msg),
        }
    }
}

impl std::error::Error for MatchTokenError {}
