multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::{BPS_DENOMINATOR, DEFAULT_EFFICIENCY_BONUS_RATE_BPS};

// ============================================================
// Reward Config — admin-tunable parameters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RewardConfig<M: ManagedTypeApi> {
    /// Zero address while unset. The zero address never matches a caller.
    pub oracle: ManagedAddress<M>,
    /// 0-10000, i.e. 0-100%
    pub efficiency_bonus_rate_bps: u64,
}

impl<M: ManagedTypeApi> Default for RewardConfig<M> {
    fn default() -> Self {
        RewardConfig {
            oracle: ManagedAddress::zero(),
            efficiency_bonus_rate_bps: DEFAULT_EFFICIENCY_BONUS_RATE_BPS,
        }
    }
}

impl<M: ManagedTypeApi> RewardConfig<M> {
    pub fn is_oracle(&self, caller: &ManagedAddress<M>) -> bool {
        !self.oracle.is_zero() && self.oracle == *caller
    }

    pub fn quote(&self, operation_value: u64) -> Option<RewardQuote> {
        RewardQuote::compute(operation_value, self.efficiency_bonus_rate_bps)
    }
}

// ============================================================
// Reward Quote — what one witnessed operation pays
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RewardQuote {
    pub bonus: u64,
    pub reward: u64,
}

impl RewardQuote {
    /// `bonus = value * rate_bps / 10000` (truncated), `reward = value + bonus`.
    /// `None` if either step leaves the u64 domain.
    pub fn compute(operation_value: u64, rate_bps: u64) -> Option<Self> {
        let bonus = operation_value.checked_mul(rate_bps)? / BPS_DENOMINATOR;
        let reward = operation_value.checked_add(bonus)?;
        Some(RewardQuote { bonus, reward })
    }
}

// ============================================================
// Account Rewards — per-account local state
// ============================================================

/// The balance only ever goes down through `settle`, which zeroes all of it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Eq, Debug, Default)]
pub struct AccountRewards {
    pub rewards_balance: u64,
    pub operations_count: u64,
    pub last_claim_timestamp: u64,
}

impl AccountRewards {
    /// Record after one more credited operation, or `None` on overflow.
    pub fn credited(&self, reward: u64) -> Option<Self> {
        Some(AccountRewards {
            rewards_balance: self.rewards_balance.checked_add(reward)?,
            operations_count: self.operations_count.checked_add(1)?,
            last_claim_timestamp: self.last_claim_timestamp,
        })
    }

    /// Record after a full claim at `now`, with the amount claimed.
    pub fn settle(&self, now: u64) -> (Self, u64) {
        let settled = AccountRewards {
            rewards_balance: 0,
            operations_count: self.operations_count,
            last_claim_timestamp: now,
        };
        (settled, self.rewards_balance)
    }
}
