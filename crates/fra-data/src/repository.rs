//! In-memory claim store
//!
//! Claims live in a [`DashMap`] keyed by id so reads never block each other.
//! Filing a claim takes a short lock to allocate the next sequence number for
//! its type and state, then bumps the revision the atlas cache keys on.

use crate::error::{DataError, DataResult};
use crate::seed::SeedData;
use chrono::Local;
use dashmap::DashMap;
use fra_atlas::StateDataset;
use fra_core::{Claim, ClaimId, ClaimStatus, ClaimType, NewClaim, TargetState, Village};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{info, warn};

#[derive(Debug, Clone)]
struct StoredClaim {
    order: u64,
    claim: Claim,
}

/// Villages and claims served by the mock backend
#[derive(Debug)]
pub struct ClaimRepository {
    villages: Vec<Village>,
    claims: DashMap<ClaimId, StoredClaim>,
    next_order: AtomicU64,
    filing: Mutex<()>,
    revision: AtomicU64,
}

impl ClaimRepository {
    /// Repository over the seed villages and claims
    ///
    /// A claim whose id is already stored is skipped with a warning; seed
    /// files are checked for this when they are loaded.
    #[must_use]
    pub fn from_seed(seed: &SeedData) -> Self {
        let repo = Self {
            villages: seed.villages.clone(),
            claims: DashMap::with_capacity(seed.claims.len()),
            next_order: AtomicU64::new(0),
            filing: Mutex::new(()),
            revision: AtomicU64::new(0),
        };
        for claim in &seed.claims {
            if repo.claims.contains_key(&claim.id) {
                warn!(claim_id = %claim.id, "skipping duplicate seed claim");
                continue;
            }
            repo.store(claim.clone());
        }
        repo
    }

    fn store(&self, claim: Claim) {
        let order = self.next_order.fetch_add(1, Ordering::Relaxed);
        self.claims
            .insert(claim.id.clone(), StoredClaim { order, claim });
    }

    /// All villages
    #[inline]
    #[must_use]
    pub fn villages(&self) -> &[Village] {
        &self.villages
    }

    /// Village by id
    #[must_use]
    pub fn village(&self, id: u32) -> Option<&Village> {
        self.villages.iter().find(|v| v.id == id)
    }

    /// All claims in filing order
    #[must_use]
    pub fn claims(&self) -> Vec<Claim> {
        let mut stored: Vec<StoredClaim> = self.claims.iter().map(|e| e.value().clone()).collect();
        stored.sort_by_key(|s| s.order);
        stored.into_iter().map(|s| s.claim).collect()
    }

    /// Claim by id
    #[must_use]
    pub fn get(&self, id: &ClaimId) -> Option<Claim> {
        self.claims.get(id).map(|e| e.claim.clone())
    }

    /// Number of claims
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no claim is stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Monotonic counter bumped by every change
    #[inline]
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::Acquire)
    }

    /// Villages and claims of one state
    #[must_use]
    pub fn dataset(&self, state: TargetState) -> StateDataset {
        StateDataset {
            state,
            villages: self
                .villages
                .iter()
                .filter(|v| v.state == state)
                .cloned()
                .collect(),
            claims: self.claims().into_iter().filter(|c| c.state == state).collect(),
        }
    }

    /// File a new claim; it always starts out pending
    ///
    /// # Errors
    ///
    /// - [`DataError::MissingField`] if the claimant name is blank
    /// - [`DataError::VillageNotFound`] if the village id is unknown
    /// - [`DataError::SequenceExhausted`] if no sequence number is left for
    ///   the claim's type and state
    pub fn add_claim(&self, request: NewClaim) -> DataResult<ClaimId> {
        let holder = request.claimant_name.trim();
        if holder.is_empty() {
            warn!("rejected claim without claimant name");
            return Err(DataError::MissingField("claimant_name"));
        }
        let village = self
            .village(request.village_id)
            .ok_or(DataError::VillageNotFound(request.village_id))?;

        let _filing = self.filing.lock();
        let seq = self.next_sequence(request.claim_type, village.state)?;
        let id = ClaimId::compose(request.claim_type, village.state, seq);
        let mut claim = Claim::new(
            id.clone(),
            holder,
            &village.name,
            &village.district,
            village.state,
            ClaimStatus::Pending,
        );
        claim.coordinates = Some(village.center);
        claim.application_date = Some(Local::now().date_naive());
        self.store(claim);
        self.revision.fetch_add(1, Ordering::Release);

        info!(claim_id = %id, village = %village.name, "claim filed");
        Ok(id)
    }

    fn next_sequence(&self, claim_type: ClaimType, state: TargetState) -> DataResult<u32> {
        let prefix = format!("{}-{}-", claim_type.code(), state.code());
        let highest = self
            .claims
            .iter()
            .filter_map(|e| e.key().as_str().strip_prefix(&prefix)?.parse::<u32>().ok())
            .max();
        match highest {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or(DataError::SequenceExhausted(prefix)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo() -> ClaimRepository {
        ClaimRepository::from_seed(&SeedData::builtin())
    }

    fn request(name: &str, claim_type: ClaimType, village_id: u32) -> NewClaim {
        NewClaim {
            claimant_name: name.into(),
            claim_type,
            village_id,
        }
    }

    #[test]
    fn claims_keep_seed_order() {
        let repo = repo();
        let ids: Vec<String> = repo.claims().iter().map(|c| c.id.to_string()).collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(ids[0], "IFR-MP-0123");
        assert_eq!(ids[14], "IFR-TS-1155");
    }

    #[test]
    fn filed_claim_is_pending_with_next_sequence() {
        let repo = repo();
        let id = repo
            .add_claim(request("Kamla Bai", ClaimType::Individual, 1))
            .unwrap();
        assert_eq!(id.as_str(), "IFR-MP-1022");

        let claim = repo.get(&id).unwrap();
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.village, "Salapura");
        assert!(claim.application_date.is_some());
        assert_eq!(repo.claims().last().map(|c| c.id.clone()), Some(id));
    }

    #[test]
    fn first_claim_of_a_kind_starts_at_one() {
        let repo = repo();
        let id = repo
            .add_claim(request("Gond Community", ClaimType::Community, 15))
            .unwrap();
        assert_eq!(id.as_str(), "CFR-TS-0016");
        let id = repo
            .add_claim(request("Bhil Community", ClaimType::Community, 7))
            .unwrap();
        assert_eq!(id.as_str(), "CFR-MP-0012");

        let empty = ClaimRepository::from_seed(&SeedData {
            claims: Vec::new(),
            ..SeedData::builtin()
        });
        let id = empty
            .add_claim(request("Asha", ClaimType::Individual, 3))
            .unwrap();
        assert_eq!(id.as_str(), "IFR-TR-0001");
    }

    #[test]
    fn filing_bumps_revision() {
        let repo = repo();
        assert_eq!(repo.revision(), 0);
        repo.add_claim(request("Asha", ClaimType::Individual, 3))
            .unwrap();
        assert_eq!(repo.revision(), 1);
    }

    #[test]
    fn rejects_unknown_village_and_blank_name() {
        let repo = repo();
        let err = repo
            .add_claim(request("Asha", ClaimType::Individual, 99))
            .unwrap_err();
        assert!(err.is_not_found());
        let err = repo
            .add_claim(request("   ", ClaimType::Individual, 1))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(repo.len(), 15);
        assert_eq!(repo.revision(), 0);
    }

    #[test]
    fn exhausted_sequence_is_an_error() {
        let mut seed = SeedData::builtin();
        let mut last = seed.claims[0].clone();
        last.id = "IFR-MP-4294967295".parse().unwrap();
        seed.claims.push(last);
        let repo = ClaimRepository::from_seed(&seed);

        let err = repo
            .add_claim(request("Kamla Bai", ClaimType::Individual, 1))
            .unwrap_err();
        assert!(matches!(err, DataError::SequenceExhausted(ref p) if p == "IFR-MP-"));
        assert_eq!(repo.len(), 16);
        assert_eq!(repo.revision(), 0);

        // other prefixes still file normally
        let id = repo
            .add_claim(request("Bhil Community", ClaimType::Community, 7))
            .unwrap();
        assert_eq!(id.as_str(), "CFR-MP-0012");
    }

    #[test]
    fn duplicate_seed_claim_keeps_first() {
        let mut seed = SeedData::builtin();
        let mut copy = seed.claims[0].clone();
        copy.holder = "Someone Else".into();
        seed.claims.push(copy);

        let repo = ClaimRepository::from_seed(&seed);
        assert_eq!(repo.len(), 15);
        let first = &seed.claims[0];
        assert_eq!(repo.get(&first.id).unwrap().holder, first.holder);
    }

    #[test]
    fn dataset_is_partitioned_by_state() {
        let repo = repo();
        let tripura = repo.dataset(TargetState::Tripura);
        assert_eq!(tripura.villages.len(), 3);
        assert_eq!(tripura.claims.len(), 3);
        assert!(tripura.claims.iter().all(|c| c.state == TargetState::Tripura));

        let mp = repo.dataset(TargetState::MadhyaPradesh);
        assert_eq!(mp.villages.len(), 6);
        assert_eq!(mp.claims.len(), 4);
    }
}
