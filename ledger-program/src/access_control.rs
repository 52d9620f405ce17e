multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;

#[multiversx_sc::module]
pub trait AccessControlModule {
    /// True only for the account that deployed the program.
    fn is_admin(&self, caller: &ManagedAddress) -> bool {
        let admin = self.admin();
        !admin.is_empty() && admin.get() == *caller
    }

    /// Signals `ERR_UNAUTHORIZED` unless the caller is the admin; returns the caller.
    fn require_admin(&self) -> ManagedAddress {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), ERR_UNAUTHORIZED);
        caller
    }

    // Set once by `LifecycleModule::init_program`, never rewritten.
    #[view(getAdmin)]
    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;
}
