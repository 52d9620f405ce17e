multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use ledger_program::errors::{ERR_ARITHMETIC_OVERFLOW, ERR_QUORUM_NOT_MET};

use crate::{DEFAULT_QUORUM_THRESHOLD_PCT, DEFAULT_VOTING_PERIOD_SECONDS, PERCENT};

// ============================================================
// Vote Type — the three ballot outcomes
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VoteType {
    For,
    Against,
    Abstain,
}

impl VoteType {
    /// Argument codes: 1 = For, 2 = Against, 3 = Abstain.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            1 => Some(VoteType::For),
            2 => Some(VoteType::Against),
            3 => Some(VoteType::Abstain),
            _ => None,
        }
    }

    pub fn code(self) -> u64 {
        match self {
            VoteType::For => 1,
            VoteType::Against => 2,
            VoteType::Abstain => 3,
        }
    }
}

// ============================================================
// Proposal — the core governance record
// ============================================================

/// Tallies only ever grow, by one per accepted ballot. There is no closed
/// or executed state: a proposal stays open and can be executed whenever
/// quorum holds.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct Proposal {
    pub id: u64,
    pub created_at: u64,
    pub votes_for: u64,
    pub votes_against: u64,
    pub votes_abstain: u64,
}

impl Proposal {
    pub fn new(id: u64, created_at: u64) -> Self {
        Proposal {
            id,
            created_at,
            votes_for: 0,
            votes_against: 0,
            votes_abstain: 0,
        }
    }

    /// Counts one ballot. Returns `None`, leaving the tallies as they were,
    /// if the affected tally is already at `u64::MAX`.
    pub fn tally(&mut self, vote: VoteType) -> Option<()> {
        let slot = match vote {
            VoteType::For => &mut self.votes_for,
            VoteType::Against => &mut self.votes_against,
            VoteType::Abstain => &mut self.votes_abstain,
        };
        *slot = slot.checked_add(1)?;
        Some(())
    }

    /// For + against. Abstentions never count toward quorum.
    pub fn decisive_votes(&self) -> Option<u64> {
        self.votes_for.checked_add(self.votes_against)
    }

    pub fn total_votes(&self) -> Option<u64> {
        self.decisive_votes()?.checked_add(self.votes_abstain)
    }
}

// ============================================================
// Governance Config — admin-tunable parameters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug)]
pub struct GovernanceConfig {
    /// Whole percent of decisive votes that must be in favour (0-100).
    pub quorum_threshold_pct: u64,
    /// Informational only; ballots are accepted after it elapses.
    pub voting_period_seconds: u64,
}

impl Default for GovernanceConfig {
    fn default() -> Self {
        GovernanceConfig {
            quorum_threshold_pct: DEFAULT_QUORUM_THRESHOLD_PCT,
            voting_period_seconds: DEFAULT_VOTING_PERIOD_SECONDS,
        }
    }
}

impl GovernanceConfig {
    /// Quorum check for execution. On success returns the for-share of
    /// decisive votes in whole percent, truncated, so a proposal sitting
    /// exactly on the threshold passes.
    pub fn evaluate(&self, proposal: &Proposal) -> Result<u64, &'static str> {
        let decisive = proposal
            .decisive_votes()
            .ok_or(ERR_ARITHMETIC_OVERFLOW)?;
        if decisive == 0 {
            return Err(ERR_QUORUM_NOT_MET);
        }

        let support_pct = proposal
            .votes_for
            .checked_mul(PERCENT)
            .ok_or(ERR_ARITHMETIC_OVERFLOW)?
            / decisive;
        if support_pct < self.quorum_threshold_pct {
            return Err(ERR_QUORUM_NOT_MET);
        }

        Ok(support_pct)
    }

    pub fn voting_deadline(&self, proposal: &Proposal) -> u64 {
        proposal.created_at.saturating_add(self.voting_period_seconds)
    }
}
