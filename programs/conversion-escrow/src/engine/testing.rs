//! Deterministic fakes for the engine's external capabilities

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_error::ProgramError;
use crate::engine::{conversion, ledger, lifecycle, AssetLedger, BaseLedger, ClaimReceipt, Rate, RateSource};
use crate::errors::EscrowError;
use crate::state::{DepositorRecord, EngineState};

pub fn escrow_error(code: EscrowError) -> anchor_lang::error::Error {
    code.into()
}

pub fn initialized_state(admin: Pubkey, min_investment: u64) -> EngineState {
    let mut state = EngineState::default();
    lifecycle::initialize(
        &mut state,
        admin,
        vec![admin],
        Some(min_investment),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    )
    .unwrap();
    state
}

/// Account backed by leaked in-memory lamports and data
pub fn account_info(key: Pubkey, owner: Pubkey, lamports: u64, data: Vec<u8>) -> &'static AccountInfo<'static> {
    leak_account(key, owner, lamports, data, false)
}

/// Executable account standing in for a deployed program
pub fn program_info(id: Pubkey) -> &'static AccountInfo<'static> {
    leak_account(id, Pubkey::default(), 1, Vec::new(), true)
}

fn leak_account(
    key: Pubkey,
    owner: Pubkey,
    lamports: u64,
    data: Vec<u8>,
    executable: bool,
) -> &'static AccountInfo<'static> {
    let key: &'static Pubkey = Box::leak(Box::new(key));
    let owner: &'static Pubkey = Box::leak(Box::new(owner));
    let lamports: &'static mut u64 = Box::leak(Box::new(lamports));
    let data: &'static mut [u8] = Box::leak(data.into_boxed_slice());
    Box::leak(Box::new(AccountInfo::new(
        key, false, true, lamports, data, owner, executable, 0,
    )))
}

/// SPL token account layout without extensions (165 bytes)
pub fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut data = vec![0u8; 165];
    data[0..32].copy_from_slice(mint.as_ref());
    data[32..64].copy_from_slice(owner.as_ref());
    data[64..72].copy_from_slice(&amount.to_le_bytes());
    // state: Initialized
    data[108] = 1;
    data
}

/// SPL mint layout without extensions (82 bytes)
pub fn mint_data(decimals: u8) -> Vec<u8> {
    let mut data = vec![0u8; 82];
    data[44] = decimals;
    // is_initialized
    data[45] = 1;
    data
}

type ReceiveHook = Box<dyn FnMut(&Pubkey, u64) -> Result<()>>;

/// Rejection raised by a recipient that refuses value
fn rejected() -> anchor_lang::error::Error {
    ProgramError::Custom(0xdead).into()
}

#[derive(Clone, Copy, Debug)]
pub struct FakeRate {
    pub numerator: u64,
    pub denominator: u64,
    pub last_update_time: i64,
}

impl RateSource for FakeRate {
    fn current_rate(&self) -> Result<Rate> {
        Rate::new(self.numerator, self.denominator)
    }

    fn last_update_time(&self) -> Result<i64> {
        Ok(self.last_update_time)
    }
}

#[derive(Default)]
pub struct FakeAssets {
    pub balance: u64,
    pub delivered: BTreeMap<Pubkey, u64>,
    pub transfers: u32,
    pub reject: bool,
    hook: Option<ReceiveHook>,
}

impl FakeAssets {
    pub fn with_balance(balance: u64) -> Self {
        Self { balance, ..Default::default() }
    }

    /// Run `hook` inside every transfer, before the units move
    pub fn on_receive(&mut self, hook: impl FnMut(&Pubkey, u64) -> Result<()> + 'static) {
        self.hook = Some(Box::new(hook));
    }

    pub fn delivered_to(&self, who: &Pubkey) -> u64 {
        self.delivered.get(who).copied().unwrap_or(0)
    }

    fn checkpoint(&self) -> (u64, BTreeMap<Pubkey, u64>, u32) {
        (self.balance, self.delivered.clone(), self.transfers)
    }

    fn restore(&mut self, (balance, delivered, transfers): (u64, BTreeMap<Pubkey, u64>, u32)) {
        self.balance = balance;
        self.delivered = delivered;
        self.transfers = transfers;
    }
}

impl AssetLedger for FakeAssets {
    fn balance(&self) -> Result<u64> {
        Ok(self.balance)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        if self.reject {
            return Err(rejected());
        }
        if let Some(hook) = self.hook.as_mut() {
            hook(to, amount)?;
        }
        self.balance = self.balance
            .checked_sub(amount)
            .ok_or(EscrowError::Underflow)?;
        *self.delivered.entry(*to).or_default() += amount;
        self.transfers += 1;
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeBase {
    pub held: u64,
    pub paid: BTreeMap<Pubkey, u64>,
    pub reject: bool,
    hook: Option<ReceiveHook>,
}

impl FakeBase {
    pub fn with_held(held: u64) -> Self {
        Self { held, ..Default::default() }
    }

    pub fn on_receive(&mut self, hook: impl FnMut(&Pubkey, u64) -> Result<()> + 'static) {
        self.hook = Some(Box::new(hook));
    }

    pub fn paid_to(&self, who: &Pubkey) -> u64 {
        self.paid.get(who).copied().unwrap_or(0)
    }

    fn checkpoint(&self) -> (u64, BTreeMap<Pubkey, u64>) {
        (self.held, self.paid.clone())
    }

    fn restore(&mut self, (held, paid): (u64, BTreeMap<Pubkey, u64>)) {
        self.held = held;
        self.paid = paid;
    }
}

impl BaseLedger for FakeBase {
    fn held(&self) -> Result<u64> {
        Ok(self.held)
    }

    fn transfer(&mut self, to: &Pubkey, amount: u64) -> Result<()> {
        if self.reject {
            return Err(rejected());
        }
        if let Some(hook) = self.hook.as_mut() {
            hook(to, amount)?;
        }
        self.held = self.held
            .checked_sub(amount)
            .ok_or(EscrowError::Underflow)?;
        *self.paid.entry(*to).or_default() += amount;
        Ok(())
    }
}

/// An initialized engine wired to fakes, with a manual clock
///
/// A failed claim reverts the fakes too, the way the runtime discards a
/// failed transaction's transfers.
pub struct Harness {
    pub admin: Pubkey,
    pub now: i64,
    pub rates: FakeRate,
    pub assets: FakeAssets,
    pub base: FakeBase,
    engine: Rc<RefCell<EngineState>>,
    records: BTreeMap<Pubkey, Rc<RefCell<DepositorRecord>>>,
}

impl Harness {
    pub fn new(min_investment: u64, pool: u64) -> Self {
        let admin = Pubkey::new_unique();
        Self {
            admin,
            now: 1_000,
            rates: FakeRate { numerator: 1, denominator: 1, last_update_time: 0 },
            assets: FakeAssets::with_balance(pool),
            base: FakeBase::default(),
            engine: Rc::new(RefCell::new(initialized_state(admin, min_investment))),
            records: BTreeMap::new(),
        }
    }

    pub fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    /// Publish a new rate one second after the current time
    pub fn publish_rate(&mut self, numerator: u64, denominator: u64) {
        self.advance(1);
        self.rates = FakeRate {
            numerator,
            denominator,
            last_update_time: self.now,
        };
    }

    pub fn engine(&self) -> EngineState {
        self.engine.borrow().clone()
    }

    pub fn engine_cell(&self) -> Rc<RefCell<EngineState>> {
        Rc::clone(&self.engine)
    }

    pub fn engine_mut(&self) -> std::cell::RefMut<'_, EngineState> {
        self.engine.borrow_mut()
    }

    pub fn record(&self, who: &Pubkey) -> DepositorRecord {
        self.records
            .get(who)
            .map(|record| record.borrow().clone())
            .unwrap_or_default()
    }

    pub fn record_cell(&mut self, who: &Pubkey) -> Rc<RefCell<DepositorRecord>> {
        Rc::clone(self.records.entry(*who).or_default())
    }

    pub fn deposit(&mut self, who: Pubkey, amount: u64) -> Result<()> {
        let record = self.record_cell(&who);
        ledger::record_deposit(
            &mut self.engine.borrow_mut(),
            &mut record.borrow_mut(),
            who,
            amount,
            self.now,
        )?;
        self.base.held += amount;
        Ok(())
    }

    pub fn claim(&mut self, who: Pubkey) -> Result<ClaimReceipt> {
        let record = self.record_cell(&who);
        let assets = self.assets.checkpoint();
        let base = self.base.checkpoint();

        let result = conversion::claim(
            &self.engine,
            &record,
            &who,
            self.now,
            &self.rates,
            &mut self.assets,
            &mut self.base,
        );

        if result.is_err() {
            self.assets.restore(assets);
            self.base.restore(base);
        }
        result
    }
}
