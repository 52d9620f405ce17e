// ============================================================
// Error codes
// Signalled through `require!` / `sc_panic!`; the host reverts
// every write of the failing transaction.
// ============================================================

/// Caller lacks the role the operation requires.
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";

/// Out-of-range vote type, bonus rate, quorum, or unknown proposal.
pub const ERR_INVALID_ARGUMENT: &str = "ERR_INVALID_ARGUMENT";

/// Execution attempted without sufficient support.
pub const ERR_QUORUM_NOT_MET: &str = "ERR_QUORUM_NOT_MET";

/// Claim with a zero balance.
pub const ERR_NOTHING_TO_CLAIM: &str = "ERR_NOTHING_TO_CLAIM";

/// A counter, tally or reward would leave the u64 domain.
pub const ERR_ARITHMETIC_OVERFLOW: &str = "ERR_ARITHMETIC_OVERFLOW";

/// Program is not in the `Active` lifecycle state.
pub const ERR_PROGRAM_INACTIVE: &str = "ERR_PROGRAM_INACTIVE";

pub const ERR_ALREADY_INITIALIZED: &str = "ERR_ALREADY_INITIALIZED";
