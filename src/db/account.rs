use serenity::model::id::UserId;

use crate::models::{BalanceRecord, Balances};

/// Get the wallet for a user, creating an empty one if needed.
///
/// The record is only persisted once the caller saves the ledger.
pub fn get_or_create(balances: &mut Balances, user_id: UserId) -> &mut BalanceRecord {
    balances
        .entry(user_id.get().to_string())
        .or_default()
}

/// Current LTC balance for a user (creates the wallet in memory)
pub fn get_account_balance(balances: &mut Balances, user_id: UserId) -> f64 {
    get_or_create(balances, user_id).ltc
}

/// Add a signed amount to a user's balance
pub fn update_balance(balances: &mut Balances, user_id: UserId, amount: f64) {
    get_or_create(balances, user_id).ltc += amount;
}

/// Overwrite a user's balance
pub fn set_balance(balances: &mut Balances, user_id: UserId, balance: f64) {
    get_or_create(balances, user_id).ltc = balance;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_defaults_to_zero() {
        let mut balances = Balances::new();
        let record = get_or_create(&mut balances, UserId::new(1));
        assert_eq!(record.ltc, 0.0);
        assert!(balances.contains_key("1"));
    }

    #[test]
    fn test_get_or_create_is_stable() {
        let mut balances = Balances::new();
        set_balance(&mut balances, UserId::new(5), 3.5);

        let first = *get_or_create(&mut balances, UserId::new(5));
        let second = *get_or_create(&mut balances, UserId::new(5));
        assert_eq!(first, second);
        assert_eq!(second.ltc, 3.5);
        assert_eq!(balances.len(), 1);
    }

    #[test]
    fn test_update_and_set() {
        let mut balances = Balances::new();
        let user = UserId::new(9);

        update_balance(&mut balances, user, 2.0);
        update_balance(&mut balances, user, -0.5);
        assert_eq!(get_account_balance(&mut balances, user), 1.5);

        set_balance(&mut balances, user, 0.25);
        assert_eq!(get_account_balance(&mut balances, user), 0.25);
    }
}
