use thiserror::Error;

/// Errors that can arise while loading catalogs or driving the economy.
#[derive(Debug, Error)]
pub enum EconomyError {
    /// Catalog misconfiguration (missing common cards, non-monotonic tables).
    /// Fatal at load time; never produced per-call.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Wrapper around IO errors (seed file reads).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when an operation references an achievement the catalog
    /// does not define.
    #[error("unknown achievement: {0}")]
    UnknownAchievement(String),

    /// A tier claim was rejected. Recoverable; no state was changed.
    #[error("claim rejected: {0}")]
    Claim(#[from] ClaimError),
}

/// Why a tier claim was refused. Both cases are idempotent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClaimError {
    /// Progress has not reached the tier's target yet.
    #[error("progress below tier target")]
    NotEligible,

    /// The tier was already claimed; rewards are one-time.
    #[error("tier already claimed")]
    AlreadyClaimed,
}
