//! End-to-end walkthrough of a deployment: contracts are deployed and wired,
//! donees registered, an investor seeded with test tokens, invested, and the
//! generated interest donated.

use crate::{SmartDonation, SmartDonationClient};
use donee_registry::{DoneeRegistry, DoneeRegistryClient};
use investment_pool::{InvestmentPool, InvestmentPoolClient};
use shared::{
    constants::SECONDS_PER_YEAR,
    math::scale_units,
    types::{DoneeSplit, TokenConfig},
};
use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, String, Symbol, Vec,
};
use yield_market::{YieldMarket, YieldMarketClient};

/// Test tokens handed to a seeded address, in whole units of each token
const SEED_AMOUNT: i128 = 100_000;
/// Cash each market starts with to pay interest
const MARKET_RESERVES: i128 = 1_000_000;

struct Token {
    symbol: Symbol,
    client: TokenClient<'static>,
    asset: StellarAssetClient<'static>,
    market: YieldMarketClient<'static>,
}

impl Token {
    fn units(&self, amount: i128) -> i128 {
        scale_units(amount, self.client.decimals()).unwrap()
    }
}

struct Deployment {
    env: Env,
    registry: DoneeRegistryClient<'static>,
    router: SmartDonationClient<'static>,
    tokens: [Token; 2],
}

impl Deployment {
    fn token(&self, symbol: &Symbol) -> &Token {
        self.tokens.iter().find(|t| t.symbol == *symbol).unwrap()
    }
}

fn deploy_token(env: &Env, admin: &Address, symbol: Symbol, supply_rate_bps: u32) -> Token {
    let underlying = env.register_stellar_asset_contract(admin.clone());
    let market = YieldMarketClient::new(env, &env.register_contract(None, YieldMarket));
    market.initialize(admin, &underlying, &supply_rate_bps);

    let token = Token {
        symbol,
        client: TokenClient::new(env, &underlying),
        asset: StellarAssetClient::new(env, &underlying),
        market,
    };
    token
        .asset
        .mint(&token.market.address, &token.units(MARKET_RESERVES));
    token
}

/// Deploy the markets, registry, pool and router and hand the pool and the
/// donation records over to the router.
fn deploy(env: &Env) -> Deployment {
    let admin = Address::generate(env);
    let tokens = [
        deploy_token(env, &admin, symbol_short!("DAI"), 500),
        deploy_token(env, &admin, symbol_short!("USDC"), 300),
    ];

    let registry = DoneeRegistryClient::new(env, &env.register_contract(None, DoneeRegistry));
    registry.initialize(&admin);

    let mut configs = Vec::new(env);
    for token in tokens.iter() {
        configs.push_back(TokenConfig {
            symbol: token.symbol.clone(),
            token: token.client.address.clone(),
            c_token: token.market.address.clone(),
        });
    }
    let pool = InvestmentPoolClient::new(env, &env.register_contract(None, InvestmentPool));
    pool.initialize(&admin, &configs);

    let router = SmartDonationClient::new(env, &env.register_contract(None, SmartDonation));
    router.initialize(&admin, &registry.address, &pool.address);
    pool.transfer_ownership(&router.address);
    registry.set_donation_recorder(&router.address);

    Deployment {
        env: env.clone(),
        registry,
        router,
        tokens,
    }
}

fn populate_donees(d: &Deployment) {
    for name in ["Red Cross", "Doctors Without Borders", "UNICEF"] {
        d.registry
            .add_donee(&String::from_str(&d.env, name), &Address::generate(&d.env));
    }
}

fn seed_address(d: &Deployment, address: &Address) {
    for token in d.tokens.iter() {
        token.asset.mint(address, &token.units(SEED_AMOUNT));
    }
}

fn invest(d: &Deployment, investor: &Address, symbol: &Symbol, amount: i128) {
    let token = d.token(symbol);
    let amount = token.units(amount);
    token.client.approve(
        investor,
        &d.router.address,
        &amount,
        &(d.env.ledger().sequence() + 100),
    );
    d.router.invest_token(investor, symbol, &amount);
}

fn accrue(d: &Deployment, seconds: u64) {
    let now = d.env.ledger().timestamp();
    d.env.ledger().set_timestamp(now + seconds);
    for token in d.tokens.iter() {
        token.market.accrue_interest();
    }
}

/// 60/40 split between the first two trusted donees
fn donate(d: &Deployment, investor: &Address) -> Vec<DoneeSplit> {
    let trusted = d.router.get_trusted_donees();
    let splits = vec![
        &d.env,
        DoneeSplit {
            donee: trusted.get(0).unwrap(),
            percentage: 60,
        },
        DoneeSplit {
            donee: trusted.get(1).unwrap(),
            percentage: 40,
        },
    ];
    d.router.donate_generated_interests(investor, &splits);
    splits
}

#[test]
fn test_simulation() {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let d = deploy(&env);
    populate_donees(&d);
    let investor = Address::generate(&env);
    seed_address(&d, &investor);

    let dai = symbol_short!("DAI");
    let usdc = symbol_short!("USDC");
    invest(&d, &investor, &usdc, 3_000);
    invest(&d, &investor, &dai, 5_000);

    assert_eq!(
        d.router.get_token_invested_amount(&investor, &usdc),
        d.token(&usdc).units(3_000)
    );
    assert_eq!(
        d.token(&dai).client.balance(&investor),
        d.token(&dai).units(SEED_AMOUNT - 5_000)
    );

    accrue(&d, SECONDS_PER_YEAR);

    assert_eq!(
        d.router.get_token_generated_interests(&investor, &dai),
        d.token(&dai).units(250)
    );
    assert_eq!(
        d.router.get_token_generated_interests(&investor, &usdc),
        d.token(&usdc).units(90)
    );

    let splits = donate(&d, &investor);
    let first = splits.get(0).unwrap().donee;
    let second = splits.get(1).unwrap().donee;

    assert_eq!(d.token(&dai).client.balance(&first), d.token(&dai).units(150));
    assert_eq!(d.token(&dai).client.balance(&second), d.token(&dai).units(100));
    assert_eq!(d.token(&usdc).client.balance(&first), d.token(&usdc).units(54));
    assert_eq!(d.token(&usdc).client.balance(&second), d.token(&usdc).units(36));

    // the principal keeps working for the next round
    assert_eq!(d.router.get_token_generated_interests(&investor, &dai), 0);
    assert_eq!(
        d.router.get_token_invested_amount(&investor, &dai),
        d.token(&dai).units(5_000)
    );
    assert_eq!(
        d.registry.get_donee(&first).total_donated.get(usdc.clone()),
        Some(d.token(&usdc).units(54))
    );
}
