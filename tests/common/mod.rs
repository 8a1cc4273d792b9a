//! Shared doubles for distribution and startup tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use token_scatter::blockchain::types::{
    BlockchainError, BlockchainResult, ConfirmationStatus, GasSettings, TransferRequest,
};
use token_scatter::blockchain::{TokenNetwork, Wallet};
use token_scatter::distribution::{Gap, Pacer};
use token_scatter::params::{ParameterSource, Prompt};

/// Anvil's first two funded accounts.
pub const KEY_A: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const KEY_B: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

pub const TOKEN: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// A submitted transfer as the network saw it.
#[derive(Debug, Clone)]
pub struct Submission {
    pub from: Address,
    pub request: TransferRequest,
    pub gas: GasSettings,
    pub tx_hash: TxHash,
}

/// In-memory token network with scripted failures.
pub struct MockNetwork {
    pub decimals: u8,
    pub fail_decimals: bool,
    pub fail_chain_check: bool,
    /// Wallets whose `balanceOf` query errors.
    pub fail_balance_for: HashSet<Address>,
    pub fail_gas_price: bool,
    pub gas_price: u128,
    pub default_balance: U256,
    pub balances: HashMap<Address, U256>,
    /// Zero-based submission indices (across the whole run) that are rejected.
    pub rejected_submissions: HashSet<usize>,
    /// Zero-based submission indices whose receipts show a revert.
    pub reverted_submissions: HashSet<usize>,
    /// Zero-based submission indices that never confirm.
    pub unconfirmed_submissions: HashSet<usize>,
    submissions: Mutex<Vec<Submission>>,
    confirmations: Mutex<Vec<TxHash>>,
    gas_queries: Mutex<usize>,
    attempts: Mutex<usize>,
    reverted_hashes: Mutex<HashSet<TxHash>>,
    unconfirmed_hashes: Mutex<HashSet<TxHash>>,
    chain_checks: Mutex<usize>,
}

impl MockNetwork {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            fail_decimals: false,
            fail_chain_check: false,
            fail_balance_for: HashSet::new(),
            fail_gas_price: false,
            gas_price: 1_000_000_000,
            default_balance: U256::from(10u64).pow(U256::from(30u64)),
            balances: HashMap::new(),
            rejected_submissions: HashSet::new(),
            reverted_submissions: HashSet::new(),
            unconfirmed_submissions: HashSet::new(),
            submissions: Mutex::new(Vec::new()),
            confirmations: Mutex::new(Vec::new()),
            gas_queries: Mutex::new(0),
            attempts: Mutex::new(0),
            reverted_hashes: Mutex::new(HashSet::new()),
            unconfirmed_hashes: Mutex::new(HashSet::new()),
            chain_checks: Mutex::new(0),
        }
    }

    pub fn with_balance(mut self, owner: Address, balance: U256) -> Self {
        self.balances.insert(owner, balance);
        self
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn confirmations(&self) -> Vec<TxHash> {
        self.confirmations.lock().unwrap().clone()
    }

    pub fn gas_queries(&self) -> usize {
        *self.gas_queries.lock().unwrap()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub fn chain_checks(&self) -> usize {
        *self.chain_checks.lock().unwrap()
    }
}

#[async_trait]
impl TokenNetwork for MockNetwork {
    async fn check_chain(&self) -> BlockchainResult<()> {
        *self.chain_checks.lock().unwrap() += 1;
        if self.fail_chain_check {
            return Err(BlockchainError::ChainMismatch {
                expected: 93384,
                actual: 1,
            });
        }
        Ok(())
    }

    async fn token_decimals(&self, _token: Address) -> BlockchainResult<u8> {
        if self.fail_decimals {
            return Err(BlockchainError::Contract("execution reverted".into()));
        }
        Ok(self.decimals)
    }

    async fn token_balance(&self, _token: Address, owner: Address) -> BlockchainResult<U256> {
        if self.fail_balance_for.contains(&owner) {
            return Err(BlockchainError::Rpc("balanceOf: connection reset".into()));
        }
        Ok(self.balances.get(&owner).copied().unwrap_or(self.default_balance))
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        *self.gas_queries.lock().unwrap() += 1;
        if self.fail_gas_price {
            return Err(BlockchainError::Timeout(10));
        }
        Ok(self.gas_price)
    }

    async fn submit_transfer(
        &self,
        wallet: &Wallet,
        request: &TransferRequest,
        gas: GasSettings,
    ) -> BlockchainResult<TxHash> {
        let index = {
            let mut attempts = self.attempts.lock().unwrap();
            let index = *attempts;
            *attempts += 1;
            index
        };
        if self.rejected_submissions.contains(&index) {
            return Err(BlockchainError::Transaction("insufficient funds for gas".into()));
        }

        let tx_hash = TxHash::with_last_byte(index as u8 + 1);
        if self.reverted_submissions.contains(&index) {
            self.reverted_hashes.lock().unwrap().insert(tx_hash);
        }
        if self.unconfirmed_submissions.contains(&index) {
            self.unconfirmed_hashes.lock().unwrap().insert(tx_hash);
        }
        self.submissions.lock().unwrap().push(Submission {
            from: wallet.address(),
            request: *request,
            gas,
            tx_hash,
        });
        Ok(tx_hash)
    }

    async fn wait_for_confirmation(&self, tx_hash: TxHash) -> BlockchainResult<ConfirmationStatus> {
        self.confirmations.lock().unwrap().push(tx_hash);
        if self.unconfirmed_hashes.lock().unwrap().contains(&tx_hash) {
            return Err(BlockchainError::ConfirmationTimeout(300));
        }
        if self.reverted_hashes.lock().unwrap().contains(&tx_hash) {
            return Ok(ConfirmationStatus::Failed("Transaction reverted".into()));
        }
        Ok(ConfirmationStatus::Confirmed { block_number: 42 })
    }
}

/// Records every pause without sleeping.
#[derive(Default)]
pub struct RecordingPacer {
    gaps: Mutex<Vec<Gap>>,
}

impl RecordingPacer {
    pub fn gaps(&self) -> Vec<Gap> {
        self.gaps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, gap: Gap) {
        self.gaps.lock().unwrap().push(gap);
    }
}

/// Answers prompts from a fixed script.
pub struct ScriptedSource {
    answers: VecDeque<String>,
    pub asked: Vec<Prompt>,
}

impl ScriptedSource {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl ParameterSource for ScriptedSource {
    fn read(&mut self, prompt: Prompt) -> std::io::Result<String> {
        self.asked.push(prompt);
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// JSON key list as it would appear in the environment.
pub fn keys_json(keys: &[&str]) -> String {
    serde_json::to_string(keys).unwrap()
}
