// Incentive recipient selection
//
// Picks k = min(num_of_targets, candidates) distinct candidates:
// - TopN: highest scores, ties go to the earlier candidate
// - RankingWeighted: k * ranking_bps / 10000 by score, the rest uniformly
//   at random from the candidates left
// - WeightedRandom: k draws without replacement, weight = score, uniform
//   once every remaining weight is zero
//
// Randomness is a SHA-256 chain over ledger data (slot, timestamp, space,
// round). Validators and callers can predict it; it only spreads picks.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;
use std::cmp::Reverse;

use crate::{constants::*, errors::SpaceDaoError, state::*};

pub struct SeedRng {
    state: [u8; 32],
    counter: u64,
}

impl SeedRng {
    pub fn new(seed: [u8; 32]) -> Self {
        Self { state: seed, counter: 0 }
    }

    pub fn from_ledger(slot: u64, unix_timestamp: i64, space: &Pubkey, round: u64) -> Self {
        let seed = hashv(&[
            &slot.to_le_bytes(),
            &unix_timestamp.to_le_bytes(),
            space.as_ref(),
            &round.to_le_bytes(),
        ]);
        Self::new(seed.to_bytes())
    }

    pub fn next_u128(&mut self) -> u128 {
        let digest = hashv(&[&self.state, &self.counter.to_le_bytes()]).to_bytes();
        self.counter = self.counter.wrapping_add(1);

        let mut bytes = [0u8; 16];
        bytes.copy_from_slice(&digest[..16]);
        u128::from_le_bytes(bytes)
    }

    // bound must be non-zero
    pub fn below(&mut self, bound: u128) -> u128 {
        self.next_u128() % bound
    }
}

// First non-excluded index whose cumulative weight exceeds `draw`
pub fn find_index(weights: &[u64], excluded: &[bool], draw: u128) -> Option<usize> {
    let mut cumulative: u128 = 0;
    for (i, weight) in weights.iter().enumerate() {
        if excluded[i] {
            continue;
        }
        cumulative += *weight as u128;
        if cumulative > draw {
            return Some(i);
        }
    }
    None
}

// Indices ordered by score, highest first; stable so ties keep input order
pub fn rank_by_score(scores: &[u64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by_key(|&i| Reverse(scores[i]));
    order
}

fn nth_remaining(excluded: &[bool], n: usize) -> Option<usize> {
    excluded
        .iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .nth(n)
        .map(|(i, _)| i)
}

fn pick_uniform(excluded: &[bool], remaining: usize, rng: &mut SeedRng) -> Option<usize> {
    let n = rng.below(remaining as u128) as usize;
    nth_remaining(excluded, n)
}

fn pick_weighted(
    scores: &[u64],
    excluded: &[bool],
    remaining: usize,
    rng: &mut SeedRng,
) -> Option<usize> {
    let total: u128 = scores
        .iter()
        .zip(excluded.iter())
        .filter(|(_, taken)| !**taken)
        .map(|(score, _)| *score as u128)
        .sum();

    if total == 0 {
        return pick_uniform(excluded, remaining, rng);
    }
    find_index(scores, excluded, rng.below(total))
}

pub fn validate_candidates(candidates: &[Pubkey], scores: &[u64]) -> Result<()> {
    require!(
        candidates.len() == scores.len(),
        SpaceDaoError::LengthMismatch
    );
    require!(!candidates.is_empty(), SpaceDaoError::EmptyCandidateSet);

    for candidate in candidates.iter() {
        require!(
            *candidate != Pubkey::default(),
            SpaceDaoError::InvalidRecipient
        );
    }

    let mut sorted = candidates.to_vec();
    sorted.sort();
    require!(
        !sorted.windows(2).any(|pair| pair[0] == pair[1]),
        SpaceDaoError::DuplicateCandidate
    );

    Ok(())
}

pub fn select_recipients(
    candidates: &[Pubkey],
    scores: &[u64],
    config: &IncentiveDistributionConfig,
    rng: &mut SeedRng,
) -> Result<Vec<Pubkey>> {
    validate_candidates(candidates, scores)?;

    let k = (config.num_of_targets as usize).min(candidates.len());

    let ranked = match config.mode {
        SelectionMode::TopN => k,
        SelectionMode::RankingWeighted => {
            let ranked = (k as u64)
                .checked_mul(config.ranking_bps as u64)
                .ok_or(SpaceDaoError::MathOverflow)?
                / BPS_DENOMINATOR;
            (ranked as usize).min(k)
        }
        SelectionMode::WeightedRandom => 0,
    };

    let mut excluded = vec![false; candidates.len()];
    let mut selected = Vec::with_capacity(k);

    for i in rank_by_score(scores).into_iter().take(ranked) {
        excluded[i] = true;
        selected.push(candidates[i]);
    }

    while selected.len() < k {
        let remaining = candidates.len() - selected.len();
        let pick = match config.mode {
            SelectionMode::WeightedRandom => pick_weighted(scores, &excluded, remaining, rng),
            _ => pick_uniform(&excluded, remaining, rng),
        }
        .ok_or(SpaceDaoError::EmptyCandidateSet)?;

        excluded[pick] = true;
        selected.push(candidates[pick]);
    }

    Ok(selected)
}
