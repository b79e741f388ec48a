use std::io::Write;

use anyhow::Result;

use crate::geometry::Point;
use crate::relations::RectReport;

/// Write the relation reports as a human-readable text listing.
///
/// One block per rectangle, each relation on its own line, `None` when a
/// relation has no partners.
pub fn write_text(reports: &[RectReport], mut out: impl Write) -> Result<()> {
    for report in reports {
        writeln!(out, "=> [{}]", report.name)?;

        let intersects: Vec<String> = report
            .intersects
            .iter()
            .map(|i| {
                format!(
                    "{} (intersection points: {})",
                    i.other,
                    format_points(&i.points)
                )
            })
            .collect();

        writeln!(out, "  => Intersects: {}", join_or_none(&intersects))?;
        writeln!(out, "  => Contains: {}", join_or_none(&report.contains))?;
        writeln!(
            out,
            "  => Is adjacent to: {}",
            join_or_none(&report.adjacent_to)
        )?;
    }

    Ok(())
}

fn format_points(points: &[Point]) -> String {
    let rendered: Vec<String> = points.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
    format!("[{}]", rendered.join(", "))
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::Intersection;

    #[test]
    fn test_write_text_report() {
        let reports = vec![
            RectReport {
                name: "F".to_string(),
                intersects: vec![Intersection {
                    other: "G".to_string(),
                    points: vec![Point::new(-3, -4), Point::new(-2, -3)],
                }],
                contains: vec![],
                adjacent_to: vec![],
            },
            RectReport {
                name: "H".to_string(),
                intersects: vec![],
                contains: vec!["I".to_string()],
                adjacent_to: vec!["X".to_string(), "Y".to_string()],
            },
        ];

        let mut buf = Vec::new();
        write_text(&reports, &mut buf).expect("writing to a Vec cannot fail");

        let rendered = String::from_utf8(buf).expect("output should be UTF-8");
        let expected = "\
=> [F]
  => Intersects: G (intersection points: [(-3, -4), (-2, -3)])
  => Contains: None
  => Is adjacent to: None
=> [H]
  => Intersects: None
  => Contains: I
  => Is adjacent to: X, Y
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_format_points_empty() {
        assert_eq!(format_points(&[]), "[]");
    }
}
