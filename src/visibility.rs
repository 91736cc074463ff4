/// Returns the minimum solar altitude in degrees above which the sun is not
/// blocked by the building on the opposite side of the street.
///
/// The street width must be positive, which the configuration boundary
/// guarantees before any geometry reaches this function.
///
/// # Arguments
///
/// * 'building_height' - height in meters of the opposing building
/// * 'street_width' - horizontal distance in meters to the opposing building
pub fn cutoff_altitude(building_height: f64, street_width: f64) -> f64 {
    (building_height / street_width).atan().to_degrees()
}
