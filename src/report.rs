// SPDX-License-Identifier: MIT
//! Plain-text report artifact for the current interview.

use crate::record::InterviewRecord;

/// Suggested filename for the exported artifact.
pub const REPORT_FILENAME: &str = "Interview_Report.txt";

/// Render the record as pretty-printed JSON text. The artifact is built
/// entirely in memory; the caller decides whether it ever touches disk.
pub fn render(record: &InterviewRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn report_is_pretty_json_with_wire_keys() {
        let text = render(&seed::demo_current()).unwrap();
        assert!(text.contains('\n'), "pretty output is multi-line");
        assert!(text.contains("\"improvementAreas\""));
        assert!(text.contains("\"Interview with Sarah Johnson\""));
        assert!(!text.contains("\"id\""), "live record carries no id");
    }

    #[test]
    fn report_round_trips_the_record() {
        let record = seed::demo_current();
        let text = render(&record).unwrap();
        let parsed: InterviewRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn filename_is_stable() {
        assert_eq!(REPORT_FILENAME, "Interview_Report.txt");
    }
}
