use std::fmt;

/// The solved fin array, the gap between consecutive fins and the number
/// of fins that fit across the window width
pub struct FinLayout {
    pub spacing: f64,
    pub count: usize,
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for FinLayout {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "spacing {:.2} m, {} fins", self.spacing, self.count)
    }
}

/// Solves the fin array for the design shadow angle.
///
/// The spacing is the horizontal gap at which each fin's shadow just reaches
/// the base of the next fin at the design angle. The count is the greatest
/// number of fins, each taking one thickness plus one gap, whose footprint
/// fits across the window width plus one trailing gap.
///
/// A design angle of zero packs the fins edge to edge.
///
/// # Arguments
///
/// * 'design_hsa' - the design horizontal shadow angle in degrees
/// * 'fin_depth' - fin depth in meters
/// * 'fin_thickness' - fin thickness in meters
/// * 'window_width' - window width in meters
pub fn solve(design_hsa: f64, fin_depth: f64, fin_thickness: f64, window_width: f64) -> FinLayout {
    let spacing = fin_depth * design_hsa.to_radians().tan();
    let count = ((window_width + spacing) / (fin_thickness + spacing)).floor() as usize;

    FinLayout { spacing, count }
}
