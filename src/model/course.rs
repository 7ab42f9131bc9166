use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::HOLES;
use crate::error::WagerError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoleInfo {
    pub number: u8,
    pub par: i32,
    /// 1 is the hardest hole.
    #[serde(default)]
    pub stroke_index: Option<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CourseTee {
    #[serde(default)]
    pub name: String,
    pub par: i32,
    pub course_rating: f64,
    pub slope_rating: f64,
    #[serde(default)]
    pub holes: Vec<HoleInfo>,
}

impl CourseTee {
    /// Checks hole numbers and stroke indexes are unique within 1..=18.
    ///
    /// # Errors
    /// Returns `WagerError::InvalidCourse` naming the first offending hole.
    pub fn validate(&self) -> Result<(), WagerError> {
        if self.slope_rating <= 0.0 {
            return Err(WagerError::InvalidCourse(format!(
                "tee '{}' has non-positive slope {}",
                self.name, self.slope_rating
            )));
        }

        let mut seen_numbers = [false; HOLES];
        let mut seen_indexes = [false; HOLES];
        for hole in &self.holes {
            let number = usize::from(hole.number);
            if !(1..=HOLES).contains(&number) || seen_numbers[number - 1] {
                return Err(WagerError::InvalidCourse(format!(
                    "tee '{}' has invalid or repeated hole number {}",
                    self.name, hole.number
                )));
            }
            seen_numbers[number - 1] = true;

            if let Some(stroke_index) = hole.stroke_index {
                let si = usize::from(stroke_index);
                if !(1..=HOLES).contains(&si) || seen_indexes[si - 1] {
                    return Err(WagerError::InvalidCourse(format!(
                        "tee '{}' hole {} has invalid or repeated stroke index {}",
                        self.name, hole.number, stroke_index
                    )));
                }
                seen_indexes[si - 1] = true;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn hole(&self, number: usize) -> Option<&HoleInfo> {
        self.holes.iter().find(|h| usize::from(h.number) == number)
    }

    /// Stroke index per hole, falling back to the hole number where missing.
    #[must_use]
    pub fn stroke_indexes(&self) -> [u8; HOLES] {
        let mut indexes = ordinal_stroke_indexes();
        for hole in &self.holes {
            let number = usize::from(hole.number);
            if let Some(si) = hole.stroke_index {
                if (1..=HOLES).contains(&number) {
                    indexes[number - 1] = si;
                }
            }
        }
        indexes
    }

    /// Per-hole pars, only when all 18 holes are described.
    #[must_use]
    pub fn hole_pars(&self) -> Option<[i32; HOLES]> {
        let mut pars = [0; HOLES];
        for (idx, par) in pars.iter_mut().enumerate() {
            *par = self.hole(idx + 1)?.par;
        }
        Some(pars)
    }
}

/// Hole number as stroke index, used when a tee carries no index metadata.
#[must_use]
pub fn ordinal_stroke_indexes() -> [u8; HOLES] {
    let mut indexes = [0u8; HOLES];
    for (idx, si) in indexes.iter_mut().enumerate() {
        *si = u8::try_from(idx + 1).unwrap_or(u8::MAX);
    }
    indexes
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Course {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub tees: Vec<CourseTee>,
}

/// Course and tee reference data, keyed by course id.
pub trait CourseLookup {
    /// A `None` tee name selects the course's default (first) tee.
    fn tee(&self, course_id: &str, tee_name: Option<&str>) -> Option<&CourseTee>;
}

#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: HashMap<String, Course, RandomState>,
}

impl CourseCatalog {
    /// # Errors
    /// Returns an error if any tee fails validation.
    pub fn new(courses: Vec<Course>) -> Result<Self, WagerError> {
        let mut map: HashMap<String, Course, RandomState> = HashMap::default();
        for course in courses {
            for tee in &course.tees {
                tee.validate()?;
            }
            map.insert(course.id.clone(), course);
        }
        Ok(Self { courses: map })
    }

    /// Parse a JSON array of courses.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a tee is invalid.
    pub fn from_json(json: &str) -> Result<Self, WagerError> {
        let courses: Vec<Course> = serde_json::from_str(json)?;
        Self::new(courses)
    }

    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.get(course_id)
    }
}

impl CourseLookup for CourseCatalog {
    fn tee(&self, course_id: &str, tee_name: Option<&str>) -> Option<&CourseTee> {
        let course = self.courses.get(course_id)?;
        match tee_name {
            Some(name) => course
                .tees
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(name.trim())),
            None => course.tees.first(),
        }
    }
}
