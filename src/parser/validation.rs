//! Admission of candidate records into the result set.

use tracing::debug;

use super::fields::CandidateRecord;
use crate::models::AttractionRecord;

/// A candidate is admitted when it has a name and at least one score
pub fn is_admissible(candidate: &CandidateRecord) -> bool {
    candidate.name.is_some() && (candidate.popularity.is_some() || candidate.rating.is_some())
}

/// Filter candidates by the admission rule, returning admitted records and
/// the number rejected.
pub fn admit(candidates: Vec<CandidateRecord>) -> (Vec<AttractionRecord>, usize) {
    let total = candidates.len();

    let admitted: Vec<CandidateRecord> = candidates
        .into_iter()
        .filter(|candidate| {
            let keep = is_admissible(candidate);
            if !keep {
                debug!(
                    "Rejected segment {}: name={:?} popularity={:?} rating={:?}",
                    candidate.sequence_number,
                    candidate.name,
                    candidate.popularity,
                    candidate.rating
                );
            }
            keep
        })
        .collect();

    // Second pass: only named candidates become records
    let records: Vec<AttractionRecord> = admitted
        .into_iter()
        .filter_map(|candidate| {
            let name = candidate.name?;
            Some(AttractionRecord {
                sequence_number: candidate.sequence_number,
                name,
                popularity: candidate.popularity,
                rating: candidate.rating,
                comments: candidate.comments,
            })
        })
        .collect();

    let rejected = total - records.len();
    (records, rejected)
}
