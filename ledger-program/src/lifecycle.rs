multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::access_control;
use crate::errors::{ERR_ALREADY_INITIALIZED, ERR_PROGRAM_INACTIVE};

// ============================================================
// Program Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProgramStatus {
    /// Deployed but `init` has not run. An empty storage slot decodes here.
    Uninitialized,
    /// Accepting operations.
    Active,
    /// Torn down by the admin. Terminal state.
    Deleted,
}

/// Host lifecycle events and the `Active` gate every operation passes
/// before touching state.
#[multiversx_sc::module]
pub trait LifecycleModule: access_control::AccessControlModule {
    /// Program-create: the deployer becomes admin and the program goes live.
    /// Called from the contract's `#[init]`.
    fn init_program(&self) -> ManagedAddress {
        require!(
            self.program_status().get() == ProgramStatus::Uninitialized,
            ERR_ALREADY_INITIALIZED
        );

        let caller = self.blockchain().get_caller();
        self.admin().set(&caller);
        self.program_status().set(ProgramStatus::Active);
        caller
    }

    fn require_active(&self) {
        require!(
            self.program_status().get() == ProgramStatus::Active,
            ERR_PROGRAM_INACTIVE
        );
    }

    #[endpoint(optIn)]
    fn opt_in(&self) {
        self.require_active();
    }

    #[endpoint(closeOut)]
    fn close_out(&self) {
        self.require_active();
    }

    /// Delete-program: admin only. Every later call fails with `ERR_PROGRAM_INACTIVE`.
    #[endpoint(deleteProgram)]
    fn delete_program(&self) {
        self.require_active();
        let admin = self.require_admin();

        self.program_status().set(ProgramStatus::Deleted);
        self.program_deleted_event(&admin, self.blockchain().get_block_timestamp());
    }

    #[event("programDeleted")]
    fn program_deleted_event(&self, #[indexed] admin: &ManagedAddress, timestamp: u64);

    #[view(getProgramStatus)]
    #[storage_mapper("programStatus")]
    fn program_status(&self) -> SingleValueMapper<ProgramStatus>;
}
