#![no_std]

multiversx_sc::imports!();

pub mod types;

use ledger_program::errors::{ERR_ARITHMETIC_OVERFLOW, ERR_INVALID_ARGUMENT};
use types::{GovernanceConfig, Proposal, VoteType};

// ============================================================
// Constants
// ============================================================

/// 51% of decisive (for + against) votes must be in favour
pub const DEFAULT_QUORUM_THRESHOLD_PCT: u64 = 51;

/// 7 days in seconds. Not enforced as a voting cutoff.
pub const DEFAULT_VOTING_PERIOD_SECONDS: u64 = 604_800;

pub const MAX_QUORUM_THRESHOLD_PCT: u64 = 100;

/// Percentage denominator
pub const PERCENT: u64 = 100;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TernaryGovernance:
    ledger_program::access_control::AccessControlModule
    + ledger_program::lifecycle::LifecycleModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.init_program();
        self.config().set(GovernanceConfig::default());
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createProposal
    // Open to anyone. Ids are sequential from 1.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self) -> u64 {
        self.require_active();

        let proposal_id = match self.proposal_count().get().checked_add(1) {
            Some(id) => id,
            None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
        };
        let caller = self.blockchain().get_caller();
        let timestamp = self.blockchain().get_block_timestamp();

        self.proposals(proposal_id)
            .set(Proposal::new(proposal_id, timestamp));
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, timestamp);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One ballot per call; repeat ballots from the same account
    // are counted again.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, vote_type: u64) {
        self.require_active();

        let vote = match VoteType::from_code(vote_type) {
            Some(vote) => vote,
            None => sc_panic!(ERR_INVALID_ARGUMENT),
        };
        let mut proposal = self.require_proposal(proposal_id);
        require!(proposal.tally(vote).is_some(), ERR_ARITHMETIC_OVERFLOW);

        self.proposals(proposal_id).set(&proposal);

        let caller = self.blockchain().get_caller();
        self.vote_cast_event(proposal_id, &caller, vote.code());
    }

    // ========================================================
    // ENDPOINT: executeProposal
    // Check-and-log only: no state is written, so it can be
    // repeated while quorum holds.
    // ========================================================

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        self.require_active();

        let proposal = self.require_proposal(proposal_id);
        let config = self.config().get();
        let support_pct = match config.evaluate(&proposal) {
            Ok(pct) => pct,
            Err(err) => sc_panic!(err),
        };

        let caller = self.blockchain().get_caller();
        self.proposal_executed_event(proposal_id, &caller, support_pct);
    }

    // ========================================================
    // ENDPOINT: updateQuorum (admin)
    // ========================================================

    #[endpoint(updateQuorum)]
    fn update_quorum(&self, threshold_pct: u64) {
        self.require_active();
        let admin = self.require_admin();
        require!(
            threshold_pct <= MAX_QUORUM_THRESHOLD_PCT,
            ERR_INVALID_ARGUMENT
        );

        let mut config = self.config().get();
        config.quorum_threshold_pct = threshold_pct;
        self.config().set(&config);

        self.quorum_updated_event(&admin, threshold_pct);
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal {
        require!(
            !self.proposals(proposal_id).is_empty(),
            ERR_INVALID_ARGUMENT
        );
        self.proposals(proposal_id).get()
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count().get();
        if total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    /// (for, against, abstain)
    #[view(getVoteTally)]
    fn get_vote_tally(&self, proposal_id: u64) -> MultiValue3<u64, u64, u64> {
        let proposal = self.require_proposal(proposal_id);
        (
            proposal.votes_for,
            proposal.votes_against,
            proposal.votes_abstain,
        )
            .into()
    }

    #[view(isExecutable)]
    fn is_executable(&self, proposal_id: u64) -> bool {
        let proposal = self.require_proposal(proposal_id);
        self.config().get().evaluate(&proposal).is_ok()
    }

    #[view(getVotingDeadline)]
    fn get_voting_deadline(&self, proposal_id: u64) -> u64 {
        let proposal = self.require_proposal(proposal_id);
        self.config().get().voting_deadline(&proposal)
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        created_at: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        vote_type: u64,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] executor: &ManagedAddress,
        support_pct: u64,
    );

    #[event("quorumUpdated")]
    fn quorum_updated_event(&self, #[indexed] admin: &ManagedAddress, threshold_pct: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getGovernanceConfig)]
    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<GovernanceConfig>;

    #[view(getProposalCount)]
    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, id: u64) -> SingleValueMapper<Proposal>;
}
