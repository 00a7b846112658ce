//! Pre-authorising transfers that another contract performs on our behalf.
//!
//! A contract's `require_auth` only passes implicitly for the contract it
//! calls directly. When the exchange or a pool pulls funds from the current
//! contract one call deeper, the exact `transfer` has to be authorised first.

use soroban_sdk::{
    auth::{ContractContext, InvokerContractAuthEntry, SubContractInvocation},
    vec, Address, Env, IntoVal, Symbol, Vec,
};

fn transfer_entry(env: &Env, token: &Address, to: &Address, amount: i128) -> InvokerContractAuthEntry {
    InvokerContractAuthEntry::Contract(SubContractInvocation {
        context: ContractContext {
            contract: token.clone(),
            fn_name: Symbol::new(env, "transfer"),
            args: (env.current_contract_address(), to.clone(), amount).into_val(env),
        },
        sub_invocations: vec![env],
    })
}

/// Authorise `token.transfer(self, to, amount)` for the next call.
pub fn authorize_transfer(env: &Env, token: &Address, to: &Address, amount: i128) {
    env.authorize_as_current_contract(vec![env, transfer_entry(env, token, to, amount)]);
}

/// Authorise several `(token, to, amount)` transfers at once.
pub fn authorize_transfers(env: &Env, transfers: &[(&Address, &Address, i128)]) {
    let mut entries: Vec<InvokerContractAuthEntry> = vec![env];
    for (token, to, amount) in transfers {
        entries.push_back(transfer_entry(env, token, to, *amount));
    }
    env.authorize_as_current_contract(entries);
}
