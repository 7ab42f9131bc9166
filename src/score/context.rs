use ahash::RandomState;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

use crate::HOLES;
use crate::handicap::{allocate_strokes, course_handicap};
use crate::model::{
    CourseLookup, CourseTee, EventSnapshot, Game, GamePreference, Golfer, GolferId,
    GolferIdentity, Profile, Scorecard, ordinal_stroke_indexes,
};
use crate::score::net_scores;

/// One golfer with everything the calculators need, resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: GolferId,
    pub display_name: String,
    pub games: GamePreference,
    pub group_id: Option<String>,
    pub handicap_index: Option<f64>,
    /// `None` when no handicap index is known; such golfers receive no strokes.
    pub course_handicap: Option<i32>,
    pub strokes: [i32; HOLES],
    pub gross: [Option<i32>; HOLES],
    pub net: [Option<i32>; HOLES],
    pub pinkies: u32,
    pub greenies: u32,
}

impl Participant {
    /// Score on a 1-based hole, net or gross.
    #[must_use]
    pub fn score(&self, hole: usize, net: bool) -> Option<i32> {
        let idx = hole.checked_sub(1)?;
        if net {
            *self.net.get(idx)?
        } else {
            *self.gross.get(idx)?
        }
    }
}

/// Per-computation view of an event: golfers keyed by resolved id, with
/// strokes and net scores computed once.
#[derive(Debug, Clone)]
pub struct RoundContext {
    participants: Vec<Participant>,
    index: HashMap<GolferId, usize, RandomState>,
    hole_pars: Option<[i32; HOLES]>,
}

impl RoundContext {
    #[must_use]
    pub fn build(event: &EventSnapshot, profiles: &[Profile], courses: &dyn CourseLookup) -> Self {
        let profiles_by_id: HashMap<&str, &Profile, RandomState> =
            profiles.iter().map(|p| (p.id.as_str(), p)).collect();

        let known: HashSet<GolferId, RandomState> = event.golfers.iter().map(Golfer::id).collect();
        let mut cards_by_id: HashMap<GolferId, &Scorecard, RandomState> = HashMap::default();
        for card in &event.scorecards {
            let id = card.golfer.id();
            if known.contains(&id) {
                cards_by_id.entry(id).or_insert(card);
            } else {
                warn!(golfer = %id, "skipping scorecard for golfer not in event");
            }
        }

        let reference = event
            .course_id
            .as_deref()
            .and_then(|course_id| courses.tee(course_id, event.reference_tee.as_deref()));
        if reference.is_none() {
            debug!(event = ?event.event_id, "no course data, handicaps fall back to rounded index");
        }

        let mut participants = Vec::with_capacity(event.golfers.len());
        let mut index: HashMap<GolferId, usize, RandomState> = HashMap::default();
        for golfer in &event.golfers {
            let id = golfer.id();
            if index.contains_key(&id) {
                warn!(golfer = %id, "duplicate golfer in event, keeping first entry");
                continue;
            }
            let tee = golfer_tee(event, golfer, courses).or(reference);
            let participant = resolve_participant(
                golfer,
                id.clone(),
                &profiles_by_id,
                tee,
                reference,
                cards_by_id.get(&id).copied(),
            );
            index.insert(id, participants.len());
            participants.push(participant);
        }

        Self {
            participants,
            index,
            hole_pars: reference.and_then(CourseTee::hole_pars),
        }
    }

    #[must_use]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    #[must_use]
    pub fn get(&self, id: &GolferId) -> Option<&Participant> {
        self.index.get(id).map(|&i| &self.participants[i])
    }

    #[must_use]
    pub fn contains(&self, id: &GolferId) -> bool {
        self.index.contains_key(id)
    }

    /// Par of a 1-based hole on the reference tee, when known.
    #[must_use]
    pub fn hole_par(&self, hole: usize) -> Option<i32> {
        let pars = self.hole_pars.as_ref()?;
        pars.get(hole.checked_sub(1)?).copied()
    }

    /// Golfers admitted to `game`, in event order, narrowed to `subset` when given.
    #[must_use]
    pub fn eligible(&self, game: Game, subset: Option<&[GolferIdentity]>) -> Vec<&Participant> {
        let subset: Option<HashSet<GolferId, RandomState>> =
            subset.map(|ids| ids.iter().map(GolferIdentity::id).collect());
        self.participants
            .iter()
            .filter(|p| p.games.admits(game))
            .filter(|p| subset.as_ref().is_none_or(|ids| ids.contains(&p.id)))
            .collect()
    }
}

fn golfer_tee<'a>(
    event: &EventSnapshot,
    golfer: &Golfer,
    courses: &'a dyn CourseLookup,
) -> Option<&'a CourseTee> {
    let course_id = event.course_id.as_deref()?;
    let tee_name = golfer.tee.as_deref()?;
    let tee = courses.tee(course_id, Some(tee_name));
    if tee.is_none() {
        debug!(golfer = %golfer.id(), tee = tee_name, "tee not found, using reference tee");
    }
    tee
}

fn resolve_participant(
    golfer: &Golfer,
    id: GolferId,
    profiles_by_id: &HashMap<&str, &Profile, RandomState>,
    tee: Option<&CourseTee>,
    reference: Option<&CourseTee>,
    card: Option<&Scorecard>,
) -> Participant {
    let profile = match &golfer.identity {
        GolferIdentity::Profile { profile_id } => profiles_by_id.get(profile_id.trim()).copied(),
        GolferIdentity::Guest { .. } => None,
    };
    let display_name = match (&golfer.identity, profile) {
        (_, Some(profile)) => profile.display_name.clone(),
        (GolferIdentity::Profile { profile_id }, None) => profile_id.clone(),
        (GolferIdentity::Guest { name }, None) => name.clone(),
    };

    let handicap_index = golfer
        .handicap_override
        .or_else(|| profile.and_then(|p| p.handicap_index));
    let course_handicap = handicap_index.map(|hi| course_handicap(hi, tee, reference));
    let strokes = match course_handicap {
        Some(ch) => {
            let indexes = tee.map_or_else(ordinal_stroke_indexes, CourseTee::stroke_indexes);
            allocate_strokes(ch, &indexes)
        }
        None => {
            debug!(golfer = %id, "no handicap index, no strokes allocated");
            [0; HOLES]
        }
    };

    let gross = card.map_or([None; HOLES], Scorecard::strokes_by_hole);
    Participant {
        id,
        display_name,
        games: golfer.games,
        group_id: golfer.group_id.clone(),
        handicap_index,
        course_handicap,
        strokes,
        gross,
        net: net_scores(&gross, &strokes),
        pinkies: card.map_or(0, |c| c.pinkies),
        greenies: card.map_or(0, |c| c.greenies),
    }
}
