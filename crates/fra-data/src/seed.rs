//! Seed data for the mock backend
//!
//! [`SeedData::builtin`] carries the canned records the dashboard has always
//! shown. A YAML file with the same shape can replace any part of it; missing
//! sections keep their built-in content.

use crate::error::{DataError, DataResult};
use chrono::NaiveDate;
use fra_atlas::{FieldReport, OverlayCatalog, PotentialClaim};
use fra_core::{
    Claim, ClaimId, ClaimStatus, ClaimType, DashboardStats, Feature, FeatureCollection, Geometry,
    Grievance, GrievanceStatus, LatLng, Meeting, Metric, Recommendation, Ring, SchemeKey,
    TargetState, Village,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Half-width of a seeded village outline, degrees
const VILLAGE_SPAN: f64 = 0.02;
/// Half-width of a seeded claim parcel, degrees
const PARCEL_SPAN: f64 = 0.003;
/// Offset of a claim marker from its village center, degrees
const PARCEL_OFFSET: f64 = 0.004;

/// Everything the mock backend serves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    /// Overview counters
    pub stats: DashboardStats,
    /// Mapped villages
    pub villages: Vec<Village>,
    /// Filed claims
    pub claims: Vec<Claim>,
    /// Sample recommendations
    pub recommendations: Vec<Recommendation>,
    /// Logged grievances
    pub grievances: Vec<Grievance>,
    /// Recent gram sabha meetings
    pub meetings: Vec<Meeting>,
    /// Thematic overlays
    pub overlays: OverlayCatalog,
}

impl Default for SeedData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SeedData {
    /// Built-in seed
    #[must_use]
    pub fn builtin() -> Self {
        let villages = builtin_villages();
        let claims = builtin_claims(&villages);
        Self {
            stats: builtin_stats(),
            villages,
            claims,
            recommendations: builtin_recommendations(),
            grievances: builtin_grievances(),
            meetings: builtin_meetings(),
            overlays: builtin_overlays(),
        }
    }

    /// Parse seed YAML; absent sections fall back to the built-in seed
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Seed`] if the document does not match the schema
    /// and [`DataError::DuplicateSeedId`] if an id repeats.
    pub fn from_yaml_str(yaml: &str) -> DataResult<Self> {
        let seed: Self = serde_yaml::from_str(yaml).map_err(|source| DataError::Seed {
            path: "<inline>".into(),
            source,
        })?;
        seed.validate()?;
        Ok(seed)
    }

    /// Load seed YAML from a file
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be read and
    /// [`DataError::Seed`] if it is not valid seed YAML, or
    /// [`DataError::DuplicateSeedId`] if an id repeats.
    pub fn load(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let seed: Self = serde_yaml::from_str(&text).map_err(|source| DataError::Seed {
            path: path.to_path_buf(),
            source,
        })?;
        seed.validate()?;
        info!(
            path = %path.display(),
            villages = seed.villages.len(),
            claims = seed.claims.len(),
            "loaded seed data"
        );
        Ok(seed)
    }

    /// Village by id
    #[must_use]
    pub fn village(&self, id: u32) -> Option<&Village> {
        self.villages.iter().find(|v| v.id == id)
    }

    /// Check that village and claim ids are unique
    ///
    /// # Errors
    ///
    /// Returns [`DataError::DuplicateSeedId`] for the first repeated id.
    pub fn validate(&self) -> DataResult<()> {
        let mut villages = HashSet::with_capacity(self.villages.len());
        if let Some(dup) = self.villages.iter().find(|v| !villages.insert(v.id)) {
            return Err(DataError::DuplicateSeedId {
                kind: "village",
                id: dup.id.to_string(),
            });
        }
        let mut claims = HashSet::with_capacity(self.claims.len());
        if let Some(dup) = self.claims.iter().find(|c| !claims.insert(&c.id)) {
            return Err(DataError::DuplicateSeedId {
                kind: "claim",
                id: dup.id.to_string(),
            });
        }
        Ok(())
    }
}

fn builtin_stats() -> DashboardStats {
    DashboardStats {
        digitized_records: Metric::new(1_254_321, "+15k"),
        villages_mapped: Metric::new(4_820, "+120"),
        assets_identified: Metric::new(8_598_745, "+500k"),
        grievances_logged: Metric::new(1_245, "+58"),
    }
}

/// id, name, district, state, lat, lng, population, tribal population, forest acres
type VillageRow = (u32, &'static str, &'static str, TargetState, f64, f64, u32, u32, u32);

const VILLAGES: &[VillageRow] = &[
    (1, "Salapura", "Dindori", TargetState::MadhyaPradesh, 22.95, 81.08, 1840, 1520, 620),
    (2, "Jharigaon", "Koraput", TargetState::Odisha, 18.95, 82.70, 2310, 1980, 940),
    (3, "Korbong", "Dhalai", TargetState::Tripura, 23.78, 91.95, 1260, 1100, 480),
    (4, "Jainoor", "Adilabad", TargetState::Telangana, 19.40, 78.85, 3120, 2450, 1100),
    (5, "Bajag", "Dindori", TargetState::MadhyaPradesh, 22.85, 81.35, 2750, 2200, 1350),
    (6, "Kalimela", "Malkangiri", TargetState::Odisha, 18.07, 81.75, 2980, 2410, 760),
    (7, "Shahpur", "Betul", TargetState::MadhyaPradesh, 22.20, 77.90, 2140, 1390, 530),
    (8, "Ambassa", "Dhalai", TargetState::Tripura, 23.93, 91.86, 3560, 2480, 870),
    (9, "Aswaraopeta", "Khammam", TargetState::Telangana, 17.25, 81.10, 2620, 1710, 690),
    (10, "Bonai", "Sundargarh", TargetState::Odisha, 21.82, 84.95, 3240, 2300, 1020),
    (11, "Bhadrachalam", "Khammam", TargetState::Telangana, 17.67, 80.89, 4100, 2870, 1480),
    (12, "Amarpur", "Gomati", TargetState::Tripura, 23.52, 91.65, 2890, 2050, 640),
    (13, "Berasia", "Bhopal", TargetState::MadhyaPradesh, 23.63, 77.43, 3810, 1140, 410),
    (14, "Rayagada", "Koraput", TargetState::Odisha, 19.17, 83.42, 2470, 2190, 1560),
    (15, "Asifabad", "Adilabad", TargetState::Telangana, 19.36, 79.28, 2680, 1930, 820),
];

fn builtin_villages() -> Vec<Village> {
    let mut villages: Vec<Village> = VILLAGES
        .iter()
        .map(|&(id, name, district, state, lat, lng, population, tribal, forest)| Village {
            id,
            name: name.to_string(),
            district: district.to_string(),
            state,
            population,
            tribal_population: tribal,
            forest_area: format!("{forest} acres"),
            center: LatLng::new(lat, lng),
            boundary: Ring::rectangle(
                [lng - VILLAGE_SPAN, lat - VILLAGE_SPAN],
                [lng + VILLAGE_SPAN, lat + VILLAGE_SPAN],
            ),
        })
        .collect();

    // GeoPortal sample villages keep their surveyed outlines
    villages.push(Village {
        id: 16,
        name: "Sample Village A".into(),
        district: "Indore".into(),
        state: TargetState::MadhyaPradesh,
        population: 1250,
        tribal_population: 800,
        forest_area: "250 acres".into(),
        center: LatLng::new(22.75, 75.85),
        boundary: Ring::rectangle([75.8, 22.7], [75.9, 22.8]),
    });
    villages.push(Village {
        id: 17,
        name: "Sample Village B".into(),
        district: "Bhopal".into(),
        state: TargetState::MadhyaPradesh,
        population: 1890,
        tribal_population: 1200,
        forest_area: "420 acres".into(),
        center: LatLng::new(23.15, 77.25),
        boundary: Ring::rectangle([77.2, 23.1], [77.3, 23.2]),
    });
    villages
}

/// type, sequence, holder, village id, status, acres, date (y, m, d)
type ClaimRow = (ClaimType, u32, &'static str, u32, ClaimStatus, f64, (i32, u32, u32));

const CLAIMS: &[ClaimRow] = &[
    (ClaimType::Individual, 123, "Ram Singh", 1, ClaimStatus::Granted, 3.5, (2023, 3, 14)),
    (ClaimType::Community, 89, "Jharigaon Community", 2, ClaimStatus::Pending, 210.0, (2024, 6, 2)),
    (ClaimType::Individual, 456, "Sunita Devi", 3, ClaimStatus::Rejected, 2.0, (2023, 11, 20)),
    (ClaimType::Individual, 789, "Lachiram Gond", 4, ClaimStatus::Granted, 4.2, (2022, 8, 9)),
    (ClaimType::Community, 11, "Baiga Community", 5, ClaimStatus::Granted, 340.0, (2021, 12, 1)),
    (ClaimType::Individual, 321, "Soma Majhi", 6, ClaimStatus::Pending, 2.8, (2024, 9, 17)),
    (ClaimType::Individual, 124, "Gita Bai", 7, ClaimStatus::Rejected, 1.6, (2024, 1, 25)),
    (ClaimType::Community, 23, "Reang Community", 8, ClaimStatus::Pending, 180.0, (2024, 4, 11)),
    (ClaimType::Individual, 790, "Raju Naik", 9, ClaimStatus::Granted, 3.1, (2023, 5, 30)),
    (ClaimType::Individual, 322, "Manglu Kisan", 10, ClaimStatus::Granted, 2.4, (2022, 2, 18)),
    (ClaimType::Community, 15, "Koya Tribe", 11, ClaimStatus::Pending, 265.0, (2024, 10, 5)),
    (ClaimType::Individual, 457, "Biplab Jamatia", 12, ClaimStatus::Granted, 1.9, (2023, 7, 7)),
    (ClaimType::Individual, 1021, "Ramesh Yadav", 13, ClaimStatus::Pending, 2.2, (2025, 1, 13)),
    (ClaimType::Community, 134, "Dongria Kondh Community", 14, ClaimStatus::Granted, 520.0, (2022, 10, 21)),
    (ClaimType::Individual, 1155, "Komaram Bheem", 15, ClaimStatus::Rejected, 5.0, (2023, 9, 4)),
];

fn builtin_claims(villages: &[Village]) -> Vec<Claim> {
    CLAIMS
        .iter()
        .filter_map(|&(claim_type, seq, holder, village_id, status, acres, (y, m, d))| {
            let village = villages.iter().find(|v| v.id == village_id)?;
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(seeded_claim(village, claim_type, seq, holder, status, acres, date))
        })
        .collect()
}

fn seeded_claim(
    village: &Village,
    claim_type: ClaimType,
    seq: u32,
    holder: &str,
    status: ClaimStatus,
    acres: f64,
    date: NaiveDate,
) -> Claim {
    let id = ClaimId::compose(claim_type, village.state, seq);
    let at = LatLng::new(
        village.center.lat + PARCEL_OFFSET,
        village.center.lng + PARCEL_OFFSET,
    );
    let parcel = Ring::rectangle(
        [at.lng - PARCEL_SPAN, at.lat - PARCEL_SPAN],
        [at.lng + PARCEL_SPAN, at.lat + PARCEL_SPAN],
    );
    let mut claim = Claim::new(id, holder, &village.name, &village.district, village.state, status)
        .with_geometry(at, parcel)
        .with_area(acres);
    claim.resolution = Some(format!("GS-{}-{seq:04}", village.state.code()));
    match status {
        ClaimStatus::Granted => claim.grant_date = Some(date),
        ClaimStatus::Pending | ClaimStatus::UnderReview => claim.application_date = Some(date),
        ClaimStatus::Rejected => {
            claim.rejection_date = Some(date);
            claim.rejection_reason = Some("Insufficient evidence of occupation before 2005".into());
        }
    }
    claim
}

fn builtin_recommendations() -> Vec<Recommendation> {
    use SchemeKey::{Emrs, Jjm, Mgnrega, Nfsm, Pmgsy, Pmkisan, Pmksy, Ssa, Vandhan};
    vec![
        Recommendation::new(
            "Salapura, Dindori (Madhya Pradesh)",
            "Low Water Index & Limited Agricultural Land",
            [Jjm, Mgnrega, Pmkisan],
        ),
        Recommendation::new(
            "Kalimela, Malkangiri (Odisha)",
            "High soil erosion & low crop yield",
            [Pmksy, Nfsm],
        ),
        Recommendation::new(
            "Korbong, Dhalai (Tripura)",
            "Lack of access to markets for non-timber products",
            [Vandhan, Pmgsy],
        ),
        Recommendation::new(
            "Jainoor, Adilabad (Telangana)",
            "Poor educational infrastructure",
            [Ssa, Emrs],
        ),
    ]
}

fn builtin_grievances() -> Vec<Grievance> {
    vec![
        Grievance::new(
            "GRV-451",
            "Salapura, Dindori (MP)",
            "Incorrect land parcel mapping",
            GrievanceStatus::InProgress,
            60,
        ),
        Grievance::new(
            "GRV-452",
            "Korbong, Dhalai (TR)",
            "Delay in patta issuance",
            GrievanceStatus::Resolved,
            100,
        ),
        Grievance::new(
            "GRV-453",
            "Jharigaon, Koraput (OD)",
            "Dispute over CFR boundary",
            GrievanceStatus::New,
            10,
        ),
        Grievance::new(
            "GRV-454",
            "Jainoor, Adilabad (TS)",
            "Lack of drinking water facility",
            GrievanceStatus::InProgress,
            40,
        ),
    ]
}

fn builtin_meetings() -> Vec<Meeting> {
    [
        (1, "Aswaraopeta, Khammam (TS)", 15, "Verification of new IFR claims"),
        (2, "Bajag, Dindori (MP)", 12, "Community Forest Resource management plan"),
        (3, "Amarpur, Gomati (TR)", 10, "Awareness drive for FRA provisions"),
    ]
    .into_iter()
    .filter_map(|(id, village, day, topic)| {
        Some(Meeting {
            id,
            village: village.into(),
            date: NaiveDate::from_ymd_opt(2025, 9, day)?,
            topic: topic.into(),
        })
    })
    .collect()
}

fn builtin_overlays() -> OverlayCatalog {
    let land_use = [
        ("Agricultural Land", "agriculture", "1200 acres", [75.7, 22.6], [75.8, 22.7]),
        ("Forest Area", "forest", "800 acres", [75.9, 22.8], [76.0, 22.9]),
    ]
    .into_iter()
    .zip(1u32..)
    .map(|((name, kind, area, min, max), id)| {
        Feature::new(Geometry::polygon(Ring::rectangle(min, max)))
            .with_property("id", id)
            .with_property("name", name)
            .with_property("type", kind)
            .with_property("area", area)
    })
    .collect();

    let water_bodies = FeatureCollection::new(vec![
        Feature::new(Geometry::LineString {
            coordinates: vec![[75.75, 22.65], [75.85, 22.75], [75.95, 22.85]],
        })
        .with_property("id", 1)
        .with_property("name", "Main River")
        .with_property("type", "river"),
        Feature::new(Geometry::polygon(Ring::rectangle([77.1, 23.0], [77.2, 23.1])))
            .with_property("id", 2)
            .with_property("name", "Lake View")
            .with_property("type", "lake"),
    ]);

    let change_detection = FeatureCollection::new(vec![Feature::new(Geometry::polygon(
        Ring::rectangle([75.77, 22.67], [75.79, 22.69]),
    ))
    .with_property("id", 1)
    .with_property("name", "Deforested Area")
    .with_property("type", "deforestation")
    .with_property("changeDate", "2024-12-01")
    .with_property("area", "50 acres")]);

    let field_reports = [
        (
            1,
            LatLng::new(22.72, 75.82),
            "Forest Boundary Dispute",
            "Community reported unclear forest boundaries near village X",
            15,
            "Field Officer A",
            "Pending Review",
        ),
        (
            2,
            LatLng::new(23.12, 77.22),
            "Illegal Logging Activity",
            "Evidence of illegal logging in CFR area",
            20,
            "Forest Guard B",
            "Under Investigation",
        ),
    ]
    .into_iter()
    .filter_map(|(id, coordinates, title, description, day, reporter, status)| {
        Some(FieldReport {
            id,
            coordinates,
            title: title.into(),
            description: description.into(),
            date: NaiveDate::from_ymd_opt(2025, 1, day)?,
            reporter: reporter.into(),
            status: status.into(),
        })
    })
    .collect();

    let potential_claims = vec![
        PotentialClaim {
            id: 1,
            coordinates: LatLng::new(22.73, 75.83),
            title: "Potential CFR Claim".into(),
            description: "Community eligible for CFR claim based on traditional use".into(),
            confidence: "High".into(),
            area: "150 acres".into(),
        },
        PotentialClaim {
            id: 2,
            coordinates: LatLng::new(23.13, 77.23),
            title: "Potential IFR Claim".into(),
            description: "Individual eligible for IFR claim based on documentation".into(),
            confidence: "Medium".into(),
            area: "5 acres".into(),
        },
    ];

    debug!("built-in overlay catalog assembled");
    OverlayCatalog {
        land_use,
        water_bodies,
        field_reports,
        potential_claims,
        change_detection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_has_every_record() {
        let seed = SeedData::builtin();
        assert_eq!(seed.claims.len(), 15);
        assert_eq!(seed.villages.len(), 17);
        assert_eq!(seed.recommendations.len(), 4);
        assert_eq!(seed.grievances.len(), 4);
        assert_eq!(seed.meetings.len(), 3);
        assert_eq!(seed.claims[0].id.as_str(), "IFR-MP-0123");
        assert_eq!(seed.claims[12].id.as_str(), "IFR-MP-1021");
        assert_eq!(seed.claims[13].id.as_str(), "CFR-OD-0134");
    }

    #[test]
    fn every_claim_sits_in_a_known_village() {
        let seed = SeedData::builtin();
        for claim in &seed.claims {
            let village = seed
                .villages
                .iter()
                .find(|v| v.name == claim.village)
                .unwrap();
            assert_eq!(village.district, claim.district);
            assert_eq!(village.state, claim.state);
        }
    }

    #[test]
    fn dates_follow_status() {
        let seed = SeedData::builtin();
        let rejected = seed
            .claims
            .iter()
            .find(|c| c.status == ClaimStatus::Rejected)
            .unwrap();
        assert!(rejected.rejection_date.is_some());
        assert!(rejected.rejection_reason.is_some());
        assert!(rejected.grant_date.is_none());
    }

    #[test]
    fn partial_yaml_keeps_builtin_sections() {
        let yaml = r"
grievances:
  - id: GRV-900
    village: Bonai, Sundargarh (OD)
    issue: Survey pending
    status: New
    progress: 250
";
        let seed = SeedData::from_yaml_str(yaml).unwrap();
        assert_eq!(seed.grievances.len(), 1);
        assert_eq!(seed.grievances[0].progress(), 100);
        assert_eq!(seed.claims.len(), 15);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SeedData::load(dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn load_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(&path, "claims: 12").unwrap();
        let err = SeedData::load(&path).unwrap_err();
        assert!(matches!(err, DataError::Seed { .. }));
    }

    #[test]
    fn load_rejects_repeated_ids() {
        let mut seed = SeedData::builtin();
        seed.claims.push(seed.claims[3].clone());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.yaml");
        std::fs::write(&path, serde_yaml::to_string(&seed).unwrap()).unwrap();

        let err = SeedData::load(&path).unwrap_err();
        match err {
            DataError::DuplicateSeedId { kind, id } => {
                assert_eq!(kind, "claim");
                assert_eq!(id, seed.claims[3].id.to_string());
            }
            other => panic!("unexpected error: {other}"),
        }

        let mut seed = SeedData::builtin();
        seed.villages.push(seed.villages[0].clone());
        assert!(matches!(
            seed.validate(),
            Err(DataError::DuplicateSeedId { kind: "village", .. })
        ));
        assert!(SeedData::builtin().validate().is_ok());
    }
}
