use ternary_rewards::{
    types::{AccountRewards, RewardQuote},
    DEFAULT_EFFICIENCY_BONUS_RATE_BPS, MAX_EFFICIENCY_BONUS_RATE_BPS,
};

#[test]
fn test_quote_default_rate() {
    let quote = RewardQuote::compute(1_000, DEFAULT_EFFICIENCY_BONUS_RATE_BPS).unwrap();
    assert_eq!(quote.bonus, 585);
    assert_eq!(quote.reward, 1_585);
}

#[test]
fn test_quote_truncates_bonus() {
    // 7 * 5850 / 10000 = 4.095
    assert_eq!(
        RewardQuote::compute(7, 5_850),
        Some(RewardQuote { bonus: 4, reward: 11 })
    );
    // 1 * 5850 / 10000 = 0.585
    assert_eq!(
        RewardQuote::compute(1, 5_850),
        Some(RewardQuote { bonus: 0, reward: 1 })
    );
}

#[test]
fn test_quote_rate_bounds() {
    assert_eq!(
        RewardQuote::compute(1_000, 0),
        Some(RewardQuote { bonus: 0, reward: 1_000 })
    );
    assert_eq!(
        RewardQuote::compute(1_000, MAX_EFFICIENCY_BONUS_RATE_BPS),
        Some(RewardQuote {
            bonus: 1_000,
            reward: 2_000
        })
    );
    assert_eq!(
        RewardQuote::compute(0, 5_850),
        Some(RewardQuote { bonus: 0, reward: 0 })
    );
}

#[test]
fn test_quote_overflow_fails_closed() {
    // value * rate overflows
    assert_eq!(RewardQuote::compute(u64::MAX, 5_850), None);
    assert_eq!(RewardQuote::compute(u64::MAX / 2, 3), None);

    // value * rate fits, value + bonus does not
    assert_eq!(RewardQuote::compute(u64::MAX, 1), None);

    let largest = u64::MAX / 10_000;
    assert_eq!(
        RewardQuote::compute(largest, 10_000),
        Some(RewardQuote {
            bonus: largest,
            reward: largest * 2,
        })
    );
}

#[test]
fn test_credit_accumulates() {
    let record = AccountRewards::default()
        .credited(1_585)
        .and_then(|r| r.credited(15))
        .unwrap();
    assert_eq!(record.rewards_balance, 1_600);
    assert_eq!(record.operations_count, 2);
    assert_eq!(record.last_claim_timestamp, 0);
}

#[test]
fn test_credit_overflow() {
    let record = AccountRewards {
        rewards_balance: u64::MAX - 1,
        operations_count: 4,
        last_claim_timestamp: 10,
    };
    assert_eq!(record.credited(2), None);
    assert_eq!(record.credited(1).map(|r| r.rewards_balance), Some(u64::MAX));

    let busy = AccountRewards {
        operations_count: u64::MAX,
        ..AccountRewards::default()
    };
    assert_eq!(busy.credited(1), None);
}

#[test]
fn test_settle_zeroes_whole_balance() {
    let record = AccountRewards {
        rewards_balance: 1_585,
        operations_count: 3,
        last_claim_timestamp: 100,
    };
    let (settled, amount) = record.settle(500);
    assert_eq!(amount, 1_585);
    assert_eq!(
        settled,
        AccountRewards {
            rewards_balance: 0,
            operations_count: 3,
            last_claim_timestamp: 500,
        }
    );
}
