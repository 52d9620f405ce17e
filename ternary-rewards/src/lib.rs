#![no_std]

multiversx_sc::imports!();

pub mod types;

use ledger_program::errors::{
    ERR_ARITHMETIC_OVERFLOW, ERR_INVALID_ARGUMENT, ERR_NOTHING_TO_CLAIM, ERR_UNAUTHORIZED,
};
use types::{AccountRewards, RewardConfig};

// ============================================================
// Constants
// ============================================================

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// 58.50% efficiency bonus on every recorded operation
pub const DEFAULT_EFFICIENCY_BONUS_RATE_BPS: u64 = 5_850;

/// Bonus rate can reach at most 100%
pub const MAX_EFFICIENCY_BONUS_RATE_BPS: u64 = BPS_DENOMINATOR;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TernaryRewards:
    ledger_program::access_control::AccessControlModule
    + ledger_program::lifecycle::LifecycleModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self) {
        self.init_program();
        let config: RewardConfig<Self::Api> = RewardConfig::default();
        self.config().set(&config);
        self.total_distributed().set(0u64);
        self.distribution_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: setOracle (admin)
    // The zero address un-sets the oracle.
    // ========================================================

    #[endpoint(setOracle)]
    fn set_oracle(&self, new_oracle: ManagedAddress) {
        self.require_active();
        let admin = self.require_admin();

        let mut config = self.config().get();
        config.oracle = new_oracle;
        self.config().set(&config);

        self.oracle_updated_event(&admin, &config.oracle);
    }

    // ========================================================
    // ENDPOINT: recordOperation (admin or oracle)
    // Credits value plus the efficiency bonus. `ternary_efficiency`
    // is reported in the event but does not enter the formula.
    // ========================================================

    #[endpoint(recordOperation)]
    fn record_operation(
        &self,
        account: ManagedAddress,
        operation_value: u64,
        ternary_efficiency: u64,
    ) {
        self.require_active();

        let caller = self.blockchain().get_caller();
        let config = self.config().get();
        require!(
            self.is_admin(&caller) || config.is_oracle(&caller),
            ERR_UNAUTHORIZED
        );

        // ── Compute everything before the first write ──
        let quote = match config.quote(operation_value) {
            Some(quote) => quote,
            None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
        };
        let record = match self.load_account_rewards(&account).credited(quote.reward) {
            Some(record) => record,
            None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
        };
        let distribution_count = match self.distribution_count().get().checked_add(1) {
            Some(count) => count,
            None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
        };

        self.store_account_rewards(&account, &record);
        self.distribution_count().set(distribution_count);

        self.operation_recorded_event(
            &account,
            &caller,
            operation_value,
            quote.bonus,
            ternary_efficiency,
            quote.reward,
        );
    }

    // ========================================================
    // ENDPOINT: claimRewards
    // Caller settles their own balance in full.
    // ========================================================

    #[endpoint(claimRewards)]
    fn claim_rewards(&self) -> u64 {
        self.require_active();

        let caller = self.blockchain().get_caller();
        let record = self.load_account_rewards(&caller);
        require!(record.rewards_balance > 0, ERR_NOTHING_TO_CLAIM);

        let now = self.blockchain().get_block_timestamp();
        let (settled, amount) = record.settle(now);
        let total_distributed = match self.total_distributed().get().checked_add(amount) {
            Some(total) => total,
            None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
        };

        self.store_account_rewards(&caller, &settled);
        self.total_distributed().set(total_distributed);

        self.rewards_claimed_event(&caller, now, amount);

        amount
    }

    // ========================================================
    // ENDPOINT: updateEfficiencyRate (admin)
    // ========================================================

    #[endpoint(updateEfficiencyRate)]
    fn update_efficiency_rate(&self, new_rate_bps: u64) {
        self.require_active();
        let admin = self.require_admin();
        require!(
            new_rate_bps <= MAX_EFFICIENCY_BONUS_RATE_BPS,
            ERR_INVALID_ARGUMENT
        );

        let mut config = self.config().get();
        config.efficiency_bonus_rate_bps = new_rate_bps;
        self.config().set(&config);

        self.efficiency_rate_updated_event(&admin, new_rate_bps);
    }

    // ========================================================
    // INTERNAL: per-account record
    // Each field is its own address-keyed slot, so an account
    // that was never credited reads as all zeroes.
    // ========================================================

    fn load_account_rewards(&self, account: &ManagedAddress) -> AccountRewards {
        AccountRewards {
            rewards_balance: self.rewards_balance(account).get(),
            operations_count: self.operations_count(account).get(),
            last_claim_timestamp: self.last_claim_timestamp(account).get(),
        }
    }

    fn store_account_rewards(&self, account: &ManagedAddress, record: &AccountRewards) {
        self.rewards_balance(account).set(record.rewards_balance);
        self.operations_count(account).set(record.operations_count);
        self.last_claim_timestamp(account)
            .set(record.last_claim_timestamp);
    }

    // ========================================================
    // VIEWS — read-only queries
    // ========================================================

    #[view(getOracle)]
    fn get_oracle(&self) -> ManagedAddress {
        self.config().get().oracle
    }

    #[view(getEfficiencyBonusRate)]
    fn get_efficiency_bonus_rate(&self) -> u64 {
        self.config().get().efficiency_bonus_rate_bps
    }

    #[view(getAccountRewards)]
    fn get_account_rewards(&self, account: &ManagedAddress) -> AccountRewards {
        self.load_account_rewards(account)
    }

    /// (bonus, reward) that `recordOperation` would credit right now.
    #[view(quoteReward)]
    fn quote_reward(&self, operation_value: u64) -> MultiValue2<u64, u64> {
        let quote = match self.config().get().quote(operation_value) {
            Some(quote) => quote,
            None => sc_panic!(ERR_ARITHMETIC_OVERFLOW),
        };
        (quote.bonus, quote.reward).into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("oracleUpdated")]
    fn oracle_updated_event(&self, #[indexed] admin: &ManagedAddress, oracle: &ManagedAddress);

    #[event("operationRecorded")]
    fn operation_recorded_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] reporter: &ManagedAddress,
        #[indexed] operation_value: u64,
        #[indexed] bonus: u64,
        #[indexed] ternary_efficiency: u64,
        reward: u64,
    );

    #[event("rewardsClaimed")]
    fn rewards_claimed_event(
        &self,
        #[indexed] account: &ManagedAddress,
        #[indexed] timestamp: u64,
        amount: u64,
    );

    #[event("efficiencyRateUpdated")]
    fn efficiency_rate_updated_event(&self, #[indexed] admin: &ManagedAddress, rate_bps: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[view(getRewardConfig)]
    #[storage_mapper("config")]
    fn config(&self) -> SingleValueMapper<RewardConfig<Self::Api>>;

    // ── Counters ──

    #[view(getTotalDistributed)]
    #[storage_mapper("totalDistributed")]
    fn total_distributed(&self) -> SingleValueMapper<u64>;

    #[view(getDistributionCount)]
    #[storage_mapper("distributionCount")]
    fn distribution_count(&self) -> SingleValueMapper<u64>;

    // ── Per-account ──

    #[view(getRewardsBalance)]
    #[storage_mapper("rewards")]
    fn rewards_balance(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getOperationsCount)]
    #[storage_mapper("operations")]
    fn operations_count(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;

    #[view(getLastClaimTimestamp)]
    #[storage_mapper("lastClaim")]
    fn last_claim_timestamp(&self, account: &ManagedAddress) -> SingleValueMapper<u64>;
}
