use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// A solar sample retained because its apparent elevation clears the
/// obstruction cutoff, augmented with the horizontal shadow angle.
///
/// The hsa is signed, the sign tells on which side of the facade normal
/// the sun sits.
#[derive(Serialize, Clone, PartialEq)]
pub struct FilteredSample {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub elevation: f64,
    pub hsa: f64,
}
