use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::geometry::Point;
use crate::relations::RectReport;

#[derive(Serialize)]
struct JsonOutput<'a> {
    meta: Meta,
    rectangles: Vec<JsonReport<'a>>,
}

#[derive(Serialize)]
struct Meta {
    app: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    name: &'a str,
    intersects: Vec<JsonIntersection<'a>>,
    contains: &'a [String],
    adjacent_to: &'a [String],
}

#[derive(Serialize)]
struct JsonIntersection<'a> {
    other: &'a str,
    points: &'a [Point],
}

/// Write the relation reports as JSON.
pub fn write_json(reports: &[RectReport], mut out: impl Write) -> Result<()> {
    let rectangles = reports
        .iter()
        .map(|report| JsonReport {
            name: &report.name,
            intersects: report
                .intersects
                .iter()
                .map(|i| JsonIntersection {
                    other: &i.other,
                    points: &i.points,
                })
                .collect(),
            contains: &report.contains,
            adjacent_to: &report.adjacent_to,
        })
        .collect();

    let output = JsonOutput {
        meta: Meta {
            app: "recto",
            version: env!("CARGO_PKG_VERSION"),
        },
        rectangles,
    };

    serde_json::to_writer_pretty(&mut out, &output)?;
    writeln!(out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::Intersection;

    #[test]
    fn test_write_json_report() {
        let reports = vec![RectReport {
            name: "K".to_string(),
            intersects: vec![Intersection {
                other: "J".to_string(),
                points: vec![Point::new(-4, 5), Point::new(-3, 6)],
            }],
            contains: vec![],
            adjacent_to: vec!["L".to_string()],
        }];

        let mut buf = Vec::new();
        write_json(&reports, &mut buf).expect("writing to a Vec cannot fail");

        let value: serde_json::Value =
            serde_json::from_slice(&buf).expect("output should be valid JSON");

        assert_eq!(value["meta"]["app"], "recto");
        assert_eq!(value["rectangles"][0]["name"], "K");
        assert_eq!(value["rectangles"][0]["intersects"][0]["other"], "J");
        assert_eq!(value["rectangles"][0]["intersects"][0]["points"][0]["x"], -4);
        assert_eq!(value["rectangles"][0]["adjacent_to"][0], "L");
        assert_eq!(
            value["rectangles"][0]["contains"],
            serde_json::Value::Array(vec![])
        );
    }
}
