//! Integration tests for read-only views.
//!
//! Covers defaults for unknown accounts, enumeration of oracles and
//! whitelisted recipients, and the CW20-compatible token views.

use cosmwasm_std::{Addr, Uint128};
use cw20::{BalanceResponse, TokenInfoResponse};
use cw_multi_test::{App, ContractWrapper, Executor};

use btc_bridge::msg::{
    AccountsResponse, ExecuteMsg, InstantiateMsg, IsOracleResponse, IsProcessedResponse,
    IsWhitelistedResponse, QueryMsg, UserBalanceResponse,
};

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        btc_bridge::contract::execute,
        btc_bridge::contract::instantiate,
        btc_bridge::contract::query,
    );
    Box::new(contract)
}

fn setup() -> (App, Addr, Addr) {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");

    let code_id = app.store_code(contract_bridge());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg::default(),
            &[],
            "btc-bridge",
            None,
        )
        .unwrap();

    (app, contract_addr, owner)
}

#[test]
fn test_unknown_account_defaults() {
    let (app, contract_addr, _owner) = setup();

    let balance: UserBalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::UserBalance {
                account: "terra1nobody".to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::zero());

    let oracle: IsOracleResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::IsOracleAuthorized {
                account: "terra1nobody".to_string(),
            },
        )
        .unwrap();
    assert!(!oracle.is_oracle);

    let processed: IsProcessedResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::IsProcessed {
                tx_id: "c".repeat(64),
            },
        )
        .unwrap();
    assert!(!processed.processed);
}

#[test]
fn test_oracle_enumeration() {
    let (mut app, contract_addr, owner) = setup();

    for name in ["terra1oracle_c", "terra1oracle_a", "terra1oracle_b"] {
        app.execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::AddOracle {
                account: name.to_string(),
            },
            &[],
        )
        .unwrap();
    }
    app.execute_contract(
        owner,
        contract_addr.clone(),
        &ExecuteMsg::RemoveOracle {
            account: "terra1oracle_b".to_string(),
        },
        &[],
    )
    .unwrap();

    let res: AccountsResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Oracles {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(
        res.accounts,
        vec![
            Addr::unchecked("terra1oracle_a"),
            Addr::unchecked("terra1oracle_c"),
        ]
    );

    let res: AccountsResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Oracles {
                start_after: Some("terra1oracle_a".to_string()),
                limit: Some(1),
            },
        )
        .unwrap();
    assert_eq!(res.accounts, vec![Addr::unchecked("terra1oracle_c")]);
}

#[test]
fn test_whitelist_enumeration() {
    let (mut app, contract_addr, owner) = setup();

    for name in ["terra1alice", "terra1bob"] {
        app.execute_contract(
            owner.clone(),
            contract_addr.clone(),
            &ExecuteMsg::AddToWhitelist {
                account: name.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    let res: AccountsResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::WhitelistedAccounts {
                start_after: None,
                limit: Some(10),
            },
        )
        .unwrap();
    assert_eq!(
        res.accounts,
        vec![Addr::unchecked("terra1alice"), Addr::unchecked("terra1bob")]
    );
}

#[test]
fn test_cw20_token_views() {
    let (mut app, contract_addr, owner) = setup();
    let oracle = Addr::unchecked("terra1oracle");
    let alice = Addr::unchecked("terra1alice");

    for msg in [
        ExecuteMsg::AddOracle {
            account: oracle.to_string(),
        },
        ExecuteMsg::AddToWhitelist {
            account: alice.to_string(),
        },
    ] {
        app.execute_contract(owner.clone(), contract_addr.clone(), &msg, &[])
            .unwrap();
    }

    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.name, "Bridged Bitcoin");
    assert_eq!(info.symbol, "BBTC");
    assert_eq!(info.decimals, 8);
    assert_eq!(info.total_supply, Uint128::zero());

    app.execute_contract(
        oracle,
        contract_addr.clone(),
        &ExecuteMsg::Deposit {
            tx_id: "d".repeat(64),
            amount: Uint128::from(2_000u128),
            recipient: alice.to_string(),
        },
        &[],
    )
    .unwrap();
    app.execute_contract(
        alice.clone(),
        contract_addr.clone(),
        &ExecuteMsg::Withdraw {
            amount: Uint128::from(500u128),
        },
        &[],
    )
    .unwrap();

    let balance: BalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::Balance {
                address: alice.to_string(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::from(1_480u128));

    let info: TokenInfoResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::from(1_480u128));
}

#[test]
fn test_unnormalized_account_reads_as_empty() {
    let (app, contract_addr, _owner) = setup();
    let account = "TERRA1NOBODY".to_string();

    let balance: UserBalanceResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::UserBalance {
                account: account.clone(),
            },
        )
        .unwrap();
    assert_eq!(balance.balance, Uint128::zero());

    let oracle: IsOracleResponse = app
        .wrap()
        .query_wasm_smart(
            &contract_addr,
            &QueryMsg::IsOracleAuthorized {
                account: account.clone(),
            },
        )
        .unwrap();
    assert!(!oracle.is_oracle);

    let whitelisted: IsWhitelistedResponse = app
        .wrap()
        .query_wasm_smart(&contract_addr, &QueryMsg::IsWhitelisted { account })
        .unwrap();
    assert!(!whitelisted.is_whitelisted);
}
