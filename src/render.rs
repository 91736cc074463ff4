use std::fs;
use anyhow::Result;
use crate::errors::RenderError;
use crate::schematic::{Primitive, Schematic, VIEW_MAX, VIEW_MIN};

/// Side of the emitted square document in pixels
const CANVAS: f64 = 640.0;

/// Pixels per meter of room coordinates
const SCALE: f64 = CANVAS / (VIEW_MAX - VIEW_MIN);

fn px(x: f64) -> f64 {
    (x - VIEW_MIN) * SCALE
}

/// The y axis points up in room coordinates and down in the document
fn py(y: f64) -> f64 {
    CANVAS - (y - VIEW_MIN) * SCALE
}

/// Emits the schematic as a standalone svg document
///
/// # Arguments
///
/// * 'schematic' - the composed plan to emit
pub fn to_svg(schematic: &Schematic) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{0}\" height=\"{0}\" style=\"background:white\">\n\
         <defs><pattern id=\"hatch\" width=\"8\" height=\"8\" patternUnits=\"userSpaceOnUse\">\
         <path d=\"M0 8 L8 0\" stroke=\"gray\" stroke-width=\"0.5\"/></pattern></defs>\n",
        CANVAS);

    for primitive in &schematic.primitives {
        match primitive {
            Primitive::Rect { x, y, width, height, color, filled, hatched } => {
                let fill = if *hatched {
                    "url(#hatch)".to_string()
                } else if *filled {
                    color.to_string()
                } else {
                    "none".to_string()
                };
                svg.push_str(&format!(
                    "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" \
                     fill=\"{}\" stroke=\"{}\" stroke-width=\"1.5\"/>\n",
                    px(*x), py(y + height), width * SCALE, height * SCALE, fill, color));
            }
            Primitive::Line { x1, y1, x2, y2, color, dashed } => {
                let dash = if *dashed { " stroke-dasharray=\"8 5\"" } else { "" };
                svg.push_str(&format!(
                    "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" \
                     stroke=\"{}\" stroke-width=\"1.5\"{}/>\n",
                    px(*x1), py(*y1), px(*x2), py(*y2), color, dash));
            }
            Primitive::Arc { cx, cy, radius, start, end, color } => {
                let x1 = cx + radius * start.to_radians().cos();
                let y1 = cy + radius * start.to_radians().sin();
                let x2 = cx + radius * end.to_radians().cos();
                let y2 = cy + radius * end.to_radians().sin();
                // spans below 180 degrees, counterclockwise in room coordinates
                svg.push_str(&format!(
                    "<path d=\"M {:.1} {:.1} A {:.1} {:.1} 0 0 0 {:.1} {:.1}\" \
                     fill=\"none\" stroke=\"{}\" stroke-width=\"1.5\" stroke-dasharray=\"8 5\"/>\n",
                    px(x1), py(y1), radius * SCALE, radius * SCALE, px(x2), py(y2), color));
            }
            Primitive::Text { x, y, content, color } => {
                svg.push_str(&format!(
                    "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"{}\" \
                     font-family=\"sans-serif\" font-size=\"16\">{}</text>\n",
                    px(*x), py(*y), color, content));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Writes the schematic svg document to file
///
/// # Arguments
///
/// * 'path' - the file to write to
/// * 'schematic' - the composed plan
pub fn save_schematic(path: &str, schematic: &Schematic) -> Result<(), RenderError> {
    fs::write(path, to_svg(schematic))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Orientation;
    use crate::layout;
    use crate::schematic::build;

    fn west_schematic() -> Schematic {
        let solved = layout::solve(30.0, 0.4, 0.06, 1.5);
        build(Orientation::West, 1.5, 0.06, 0.4, &solved, 30.0)
    }

    #[test]
    fn emits_a_standalone_document() {
        let svg = to_svg(&west_schematic());

        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("<pattern id=\"hatch\""));
    }

    #[test]
    fn draws_fins_ray_and_angle() {
        let schematic = west_schematic();
        let svg = to_svg(&schematic);

        let fins = svg.matches("fill=\"steelblue\"").count();
        assert_eq!(fins, schematic.fins_drawn);
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains(" A "));
        assert!(svg.contains("HSA"));
    }

    #[test]
    fn y_axis_is_flipped() {
        // room floor line y=0 must land below the ceiling line y=4
        assert!(py(0.0) > py(4.0));
        assert_eq!(px(VIEW_MIN), 0.0);
    }
}
