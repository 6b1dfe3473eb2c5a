//! JSON shapes for the external boundary.
//!
//! Seats are positional everywhere inside the crate; the 1-based
//! `"Player N"` labels exist only here, where requests come in and
//! results go out.

use crate::cards::board::Board;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::equity::equities::Equities;
use crate::equity::request::Request;
use crate::error::Error;
use crate::Probability;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// An equity question as it arrives over the wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub num_players: usize,
    pub hole_cards: Vec<Vec<String>>,
    #[serde(default)]
    pub community_cards: Vec<String>,
}

impl TryFrom<&EvaluationRequest> for Request {
    type Error = Error;
    fn try_from(dto: &EvaluationRequest) -> Result<Self, Self::Error> {
        if dto.num_players != dto.hole_cards.len() {
            return Err(Error::invalid(format!(
                "{} players but {} hole card pairs",
                dto.num_players,
                dto.hole_cards.len()
            )));
        }
        let holes = dto
            .hole_cards
            .iter()
            .map(|pair| Hole::try_from(pair.join("").as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::invalid)?;
        let board = dto
            .community_cards
            .iter()
            .map(|card| Card::try_from(card.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(Error::invalid)
            .and_then(|cards| Board::try_from(cards).map_err(Error::invalid))?;
        Request::new(holes, board)
    }
}

/// Win percentages keyed by 1-based player label.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResponse(pub BTreeMap<String, Probability>);

impl From<&Equities> for EvaluationResponse {
    fn from(equities: &Equities) -> Self {
        Self(
            equities
                .iter()
                .enumerate()
                .map(|(seat, percent)| (format!("Player {}", seat + 1), percent))
                .collect(),
        )
    }
}

/// One recorded scenario with previously collected win rates to check
/// against.
#[derive(Debug, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(flatten)]
    pub request: EvaluationRequest,
    pub collected_win_rates: BTreeMap<String, Probability>,
}

/// The outcome of replaying one [`TestCase`].
#[derive(Debug, Serialize)]
pub struct TestReport {
    pub case: usize,
    pub calculated: BTreeMap<String, Probability>,
    pub expected: BTreeMap<String, Probability>,
    pub worst_difference: Probability,
    pub seconds: f64,
    pub passed: bool,
}
