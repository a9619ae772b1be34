use super::document::IdfDocument;
use super::objects::IdfObject;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// 欄位值與 `!-` 註解之間的對齊寬度
const VALUE_COLUMN_WIDTH: usize = 26;

pub fn to_idf_string(doc: &IdfDocument) -> String {
    to_idf_string_at(doc, Utc::now())
}

pub fn to_idf_string_at(doc: &IdfDocument, generated_at: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "!- Generated by idf-convert on {}",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    for object in doc.objects() {
        out.push('\n');
        write_object(&mut out, object);
    }

    out
}

fn write_object(out: &mut String, object: &IdfObject) {
    let _ = writeln!(out, "{},", object.display_class());

    let fields = object.fields();
    let last = fields.len().saturating_sub(1);
    for (index, (_, label, value)) in fields.iter().enumerate() {
        let terminator = if index == last { ';' } else { ',' };
        let cell = format!("{}{}", value, terminator);
        let _ = writeln!(
            out,
            "    {:<width$}!- {}",
            cell,
            label,
            width = VALUE_COLUMN_WIDTH
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idf::objects::{Building, SiteLocation, Terrain};
    use chrono::TimeZone;

    #[test]
    fn test_render_document() {
        let mut doc = IdfDocument::new("9.4");
        doc.add(
            Building::builder("Tower A")
                .terrain(Terrain::City)
                .build()
                .unwrap(),
        );
        doc.add(
            SiteLocation::builder("Shanghai")
                .latitude(39.9)
                .longitude(116.4)
                .time_zone(8.0)
                .elevation(50.0)
                .build()
                .unwrap(),
        );

        let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        let text = to_idf_string_at(&doc, at);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "!- Generated by idf-convert on 2024-05-01 08:30:00 UTC");
        assert_eq!(lines[2], "Version,");
        assert!(lines[3].starts_with("    9.4;"));
        assert!(lines[3].ends_with("!- Version Identifier"));

        assert!(text.contains("Building,\n    Tower A,"));
        assert!(text.contains("    City;                     !- Terrain\n"));
        assert!(text.contains("Site:Location,\n    Shanghai,"));
        assert!(text.contains("    116.4,                    !- Longitude {deg}\n"));
        assert!(text.contains("    50;                       !- Elevation {m}\n"));
    }
}
