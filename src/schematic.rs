use crate::config::Orientation;
use crate::layout::FinLayout;

/// Room outline side in meters
pub const ROOM_SIZE: f64 = 4.0;

/// Wall thickness in meters
const WALL_THICKNESS: f64 = 0.2;

/// Radius in meters of the angle indicator arc
const ARC_RADIUS: f64 = 0.5;

/// Thickness in meters of the window marker band
const WINDOW_BAND: f64 = 0.1;

/// Lower edge of the drawing area in meters
pub const VIEW_MIN: f64 = -1.0;

/// Upper edge of the drawing area in meters
pub const VIEW_MAX: f64 = ROOM_SIZE + 1.5;

const COLOR_WALL: &str = "black";
const COLOR_INNER_WALL: &str = "gray";
const COLOR_WINDOW: &str = "red";
const COLOR_FIN: &str = "steelblue";
const COLOR_SUN: &str = "orange";

/// A drawing primitive in room coordinates, y axis pointing up
pub enum Primitive {
    Rect { x: f64, y: f64, width: f64, height: f64, color: &'static str, filled: bool, hatched: bool },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: &'static str, dashed: bool },
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64, color: &'static str },
    Text { x: f64, y: f64, content: String, color: &'static str },
}

/// The composed plan. The number of fins actually drawn can be lower than
/// the solved count since a fin whose far edge would leave the window span
/// is skipped in the drawing only.
pub struct Schematic {
    pub primitives: Vec<Primitive>,
    pub fins_drawn: usize,
}

/// Returns a rect primitive normalized to a non negative width and height
fn rect(x: f64, y: f64, width: f64, height: f64,
        color: &'static str, filled: bool, hatched: bool) -> Primitive {
    let (x, width) = if width < 0.0 { (x + width, -width) } else { (x, width) };
    let (y, height) = if height < 0.0 { (y + height, -height) } else { (y, height) };

    Primitive::Rect { x, y, width, height, color, filled, hatched }
}

/// Composes the top down room schematic with walls, window marker, fin
/// array, sun ray and angle indicator.
///
/// # Arguments
///
/// * 'orientation' - the facade orientation
/// * 'window_width' - window width in meters
/// * 'fin_thickness' - fin thickness in meters
/// * 'fin_depth' - fin depth in meters
/// * 'layout' - the solved fin array
/// * 'design_hsa' - the design horizontal shadow angle in degrees
pub fn build(orientation: Orientation, window_width: f64, fin_thickness: f64,
             fin_depth: f64, layout: &FinLayout, design_hsa: f64) -> Schematic {

    let mut primitives: Vec<Primitive> = Vec::new();

    // Room outline and inner wall face
    primitives.push(rect(0.0, 0.0, ROOM_SIZE, ROOM_SIZE, COLOR_WALL, false, false));
    primitives.push(rect(WALL_THICKNESS, WALL_THICKNESS,
                         ROOM_SIZE - 2.0 * WALL_THICKNESS, ROOM_SIZE - 2.0 * WALL_THICKNESS,
                         COLOR_INNER_WALL, false, true));

    // North marker beside the north east corner
    primitives.push(Primitive::Line {
        x1: ROOM_SIZE + 0.5, y1: ROOM_SIZE - 0.5,
        x2: ROOM_SIZE + 0.5, y2: ROOM_SIZE - 0.1,
        color: COLOR_INNER_WALL, dashed: false,
    });
    primitives.push(Primitive::Text {
        x: ROOM_SIZE + 0.4, y: ROOM_SIZE, content: "N".to_string(), color: COLOR_WALL,
    });

    primitives.push(Primitive::Text {
        x: 0.9, y: ROOM_SIZE + 1.2,
        content: "Schematic plan with shading fins".to_string(), color: COLOR_WALL,
    });

    let pitch = fin_thickness + layout.spacing;
    let third = window_width / 3.0;
    let mut fins_drawn: usize = 0;

    match orientation {
        Orientation::East | Orientation::West => {
            let east = orientation == Orientation::East;
            let cx = if east { ROOM_SIZE } else { 0.0 };
            let cy = ROOM_SIZE / 2.0;

            let band = if east { WINDOW_BAND } else { -WINDOW_BAND };
            primitives.push(rect(cx, cy - third, band, 2.0 * third, COLOR_WINDOW, true, false));

            for i in 0..layout.count {
                let fy = cy - third + i as f64 * pitch;
                if fy + fin_thickness <= cy + third {
                    let fx = if east { cx } else { cx - fin_depth };
                    primitives.push(rect(fx, fy, fin_depth, fin_thickness, COLOR_FIN, true, false));
                    fins_drawn += 1;
                }
            }

            let dx = fin_depth;
            let dy = dx * design_hsa.to_radians().tan();
            let x_end = if east { cx + dx } else { cx - dx };
            primitives.push(Primitive::Line {
                x1: cx, y1: cy, x2: x_end, y2: cy + dy, color: COLOR_SUN, dashed: true,
            });

            let (start, end) = if east { (0.0, design_hsa) } else { (180.0 - design_hsa, 180.0) };
            primitives.push(Primitive::Arc {
                cx, cy, radius: ARC_RADIUS, start, end, color: COLOR_SUN,
            });

            let tx = if east { cx + ARC_RADIUS + 0.1 } else { cx - ARC_RADIUS - 0.5 };
            primitives.push(Primitive::Text {
                x: tx, y: cy + 0.1,
                content: format!("HSA \u{2248} {:.1}\u{b0}", design_hsa), color: COLOR_SUN,
            });
        }

        Orientation::North | Orientation::South => {
            let north = orientation == Orientation::North;
            let cy = if north { ROOM_SIZE } else { 0.0 };
            let cx = ROOM_SIZE / 2.0;

            let band = if north { WINDOW_BAND } else { -WINDOW_BAND };
            primitives.push(rect(cx - third, cy, 2.0 * third, band, COLOR_WINDOW, true, false));

            for i in 0..layout.count {
                let fx = cx - third + i as f64 * pitch;
                if fx + fin_thickness <= cx + third {
                    let fy = if north { cy } else { cy - fin_depth };
                    primitives.push(rect(fx, fy, fin_thickness, fin_depth, COLOR_FIN, true, false));
                    fins_drawn += 1;
                }
            }

            let dy = fin_depth;
            let dx = dy * design_hsa.to_radians().tan();
            let y_end = if north { cy + dy } else { cy - dy };
            primitives.push(Primitive::Line {
                x1: cx, y1: cy, x2: cx + dx, y2: y_end, color: COLOR_SUN, dashed: true,
            });

            let base = if north { 90.0 } else { 270.0 };
            primitives.push(Primitive::Arc {
                cx, cy, radius: ARC_RADIUS, start: base, end: base + design_hsa, color: COLOR_SUN,
            });

            let ty = if north { cy + ARC_RADIUS + 0.1 } else { cy - ARC_RADIUS - 0.5 };
            primitives.push(Primitive::Text {
                x: cx + 0.1, y: ty,
                content: format!("HSA \u{2248} {:.1}\u{b0}", design_hsa), color: COLOR_SUN,
            });
        }
    }

    Schematic { primitives, fins_drawn }
}
