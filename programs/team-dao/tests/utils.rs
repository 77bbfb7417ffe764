// Test utilities for the team DAO program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::{types::TransactionMetadata, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const TEAM_DAO_PROGRAM_ID: Pubkey = Pubkey::new_from_array(team_dao::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as system_program;

// PDA seeds (must match constants.rs)
pub const TEAM_DAO_SEED: &[u8] = b"team_dao";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VAULT_SEED: &[u8] = b"vault";

pub const DECIMALS: u8 = 6;
pub const ONE_TOKEN: u64 = 1_000_000;

// ======================== SETUP ========================

// Load the SBF build of the program into LiteSVM
pub fn setup_svm() -> LiteSVM {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/team_dao.so");
    let program_bytes = std::fs::read(path)
        .unwrap_or_else(|_| panic!("{} not found, run `cargo build-sbf` first", path));

    let mut svm = LiteSVM::new();
    let _ = svm.add_program(TEAM_DAO_PROGRAM_ID, &program_bytes);
    svm
}

pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Mint creation should succeed")
}

pub fn create_token_account(
    svm: &mut LiteSVM,
    payer: &Keypair,
    mint: &Pubkey,
    owner: &Pubkey,
) -> Pubkey {
    CreateAssociatedTokenAccount::new(svm, payer, mint)
        .owner(owner)
        .send()
        .expect("ATA creation should succeed")
}

pub fn mint_tokens(svm: &mut LiteSVM, authority: &Keypair, mint: &Pubkey, to: &Pubkey, amount: u64) {
    MintTo::new(svm, authority, mint, to, amount)
        .owner(authority)
        .send()
        .expect("Minting should succeed");
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

// ======================== PDAs ========================

pub fn derive_team_dao_pda(creator: &Pubkey, dao_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[TEAM_DAO_SEED, creator.as_ref(), &dao_id.to_le_bytes()],
        &TEAM_DAO_PROGRAM_ID,
    )
}

pub fn derive_proposal_pda(team_dao: &Pubkey, proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL_SEED, team_dao.as_ref(), &proposal_id.to_le_bytes()],
        &TEAM_DAO_PROGRAM_ID,
    )
}

pub fn derive_vault_pda(team_dao: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, team_dao.as_ref()], &TEAM_DAO_PROGRAM_ID)
}

pub fn vault_token_account(team_dao: &Pubkey, mint: &Pubkey) -> Pubkey {
    let (vault, _) = derive_vault_pda(team_dao);
    get_associated_token_address(&vault, mint)
}

// ======================== INSTRUCTION BUILDERS ========================

/// First 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

pub fn build_create_team_dao_ix(creator: &Pubkey, dao_id: u64, admins: &[Pubkey]) -> Instruction {
    let (team_dao, _) = derive_team_dao_pda(creator, dao_id);
    let (vault, _) = derive_vault_pda(&team_dao);

    let mut data = anchor_discriminator("create_team_dao").to_vec();
    data.extend_from_slice(&dao_id.to_le_bytes());
    data.extend_from_slice(&(admins.len() as u32).to_le_bytes());
    for admin in admins {
        data.extend_from_slice(admin.as_ref());
    }

    Instruction {
        program_id: TEAM_DAO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new(team_dao, false),
            AccountMeta::new_readonly(vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_propose_batch_ix(
    proposer: &Pubkey,
    team_dao: &Pubkey,
    proposal_id: u64,
    token: &Pubkey,
    transfers: &[(Pubkey, u64)],
) -> Instruction {
    let (proposal, _) = derive_proposal_pda(team_dao, proposal_id);

    let mut data = anchor_discriminator("propose_batch").to_vec();
    data.extend_from_slice(token.as_ref());
    data.extend_from_slice(&(transfers.len() as u32).to_le_bytes());
    for (recipient, amount) in transfers {
        data.extend_from_slice(recipient.as_ref());
        data.extend_from_slice(&amount.to_le_bytes());
    }

    Instruction {
        program_id: TEAM_DAO_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*proposer, true),
            AccountMeta::new(*team_dao, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_approve_and_execute_ix(
    approver: &Pubkey,
    team_dao: &Pubkey,
    proposal_id: u64,
    mint: &Pubkey,
    recipient_token_accounts: &[Pubkey],
) -> Instruction {
    let (proposal, _) = derive_proposal_pda(team_dao, proposal_id);
    let (vault, _) = derive_vault_pda(team_dao);
    let vault_ata = get_associated_token_address(&vault, mint);

    let mut data = anchor_discriminator("approve_and_execute").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());

    let mut accounts = vec![
        AccountMeta::new_readonly(*approver, true),
        AccountMeta::new_readonly(*team_dao, false),
        AccountMeta::new(proposal, false),
        AccountMeta::new_readonly(vault, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(vault_ata, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];
    accounts.extend(
        recipient_token_accounts
            .iter()
            .map(|account| AccountMeta::new(*account, false)),
    );

    Instruction {
        program_id: TEAM_DAO_PROGRAM_ID,
        accounts,
        data,
    }
}

// ======================== TRANSACTIONS ========================

pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionMetadata {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .expect("Transaction should succeed")
}

pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

// Number of Anchor events emitted by a transaction
pub fn emitted_event_count(meta: &TransactionMetadata) -> usize {
    meta.logs
        .iter()
        .filter(|line| line.starts_with("Program data: "))
        .count()
}

// ======================== STATE READERS ========================

pub fn read_proposal(svm: &LiteSVM, team_dao: &Pubkey, proposal_id: u64) -> team_dao::Proposal {
    let (proposal, _) = derive_proposal_pda(team_dao, proposal_id);
    let account = svm.get_account(&proposal).expect("Proposal should exist");
    team_dao::Proposal::try_deserialize(&mut account.data.as_slice())
        .expect("Proposal should deserialize")
}

pub fn read_team_dao(svm: &LiteSVM, team_dao: &Pubkey) -> team_dao::TeamDao {
    let account = svm.get_account(team_dao).expect("Team DAO should exist");
    team_dao::TeamDao::try_deserialize(&mut account.data.as_slice())
        .expect("Team DAO should deserialize")
}

// ======================== SCENARIO HELPERS ========================

pub struct TeamDaoFixture {
    pub svm: LiteSVM,
    pub creator: Keypair,
    pub admins: Vec<Keypair>,
    pub team_dao: Pubkey,
    pub mint: Pubkey,
    pub vault_ata: Pubkey,
}

// Create a DAO with `admin_count` admins, a mint and an empty treasury ATA
pub fn setup_team_dao(admin_count: usize) -> TeamDaoFixture {
    let mut svm = setup_svm();

    let creator = create_funded_account(&mut svm, 10_000_000_000);
    let admins: Vec<Keypair> = (0..admin_count)
        .map(|_| create_funded_account(&mut svm, 10_000_000_000))
        .collect();
    let admin_keys: Vec<Pubkey> = admins.iter().map(|admin| admin.pubkey()).collect();

    let dao_id = 1u64;
    let ix = build_create_team_dao_ix(&creator.pubkey(), dao_id, &admin_keys);
    send_tx_expect_success(&mut svm, ix, &creator, &[&creator]);
    let (team_dao, _) = derive_team_dao_pda(&creator.pubkey(), dao_id);

    let mint = create_mint(&mut svm, &creator);
    let (vault, _) = derive_vault_pda(&team_dao);
    let vault_ata = create_token_account(&mut svm, &creator, &mint, &vault);

    TeamDaoFixture {
        svm,
        creator,
        admins,
        team_dao,
        mint,
        vault_ata,
    }
}

impl TeamDaoFixture {
    pub fn fund_treasury(&mut self, amount: u64) {
        mint_tokens(&mut self.svm, &self.creator, &self.mint, &self.vault_ata, amount);
    }

    pub fn new_recipient(&mut self) -> (Pubkey, Pubkey) {
        let recipient = Keypair::new().pubkey();
        let ata = create_token_account(&mut self.svm, &self.creator, &self.mint, &recipient);
        (recipient, ata)
    }

    pub fn propose(&mut self, admin: usize, proposal_id: u64, transfers: &[(Pubkey, u64)]) {
        let proposer = self.admins[admin].insecure_clone();
        let ix = build_propose_batch_ix(
            &proposer.pubkey(),
            &self.team_dao,
            proposal_id,
            &self.mint,
            transfers,
        );
        send_tx_expect_success(&mut self.svm, ix, &proposer, &[&proposer]);
    }

    pub fn approve_ix(&self, admin: usize, proposal_id: u64, recipient_atas: &[Pubkey]) -> Instruction {
        build_approve_and_execute_ix(
            &self.admins[admin].pubkey(),
            &self.team_dao,
            proposal_id,
            &self.mint,
            recipient_atas,
        )
    }
}

// Debug form of an Anchor custom error inside a failed transaction
pub fn custom_error(error: team_dao::TeamDaoError) -> String {
    format!("Custom({})", u32::from(error))
}
