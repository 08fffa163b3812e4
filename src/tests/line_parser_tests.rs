//! tests/line_parser_tests.rs
//! Pruebas unitarias de los parsers de filas.

#[cfg(test)]
mod tests {
    use crate::models::student_model::{AdmissionStatus, Gender, ResultStatus};
    use crate::services::line_parser::{
        extract_ern, is_seat_number_line, is_valid_ern, parse_component_line,
        parse_header_line, parse_summary, parse_tot_line,
    };
    use crate::tests::fixtures::{KT_HEADER, PASS_HEADER, PASS_TOT, REPEATER_HEADER};

    #[test]
    fn test_ern_validation() {
        assert!(is_valid_ern("MU0341120250220778"));
        assert!(is_valid_ern("(MU0341120250220778)"));
        assert!(is_valid_ern("mu0341120250220778"));
        assert!(!is_valid_ern("MU034112025022077"));
        assert!(!is_valid_ern(""));
        assert!(!is_valid_ern("MU-0524"));
    }

    #[test]
    fn test_extract_ern_from_text() {
        assert_eq!(
            extract_ern("Regular MALE (MU0341120250220778) MU-0524: X").as_deref(),
            Some("MU0341120250220778")
        );
        assert_eq!(extract_ern("MU-0524: Vidyalankar"), None);
    }

    #[test]
    fn test_seat_number_line_detection() {
        assert!(is_seat_number_line(PASS_HEADER));
        assert!(is_seat_number_line("  1401767 ANTARA"));
        assert!(!is_seat_number_line("SEAT NO NAME"));
        assert!(!is_seat_number_line("140176 SHORT SEAT"));
        assert!(!is_seat_number_line("1401767 lowercase"));
    }

    #[test]
    fn test_header_with_inline_ern() {
        let header = parse_header_line(PASS_HEADER, None).expect("header");
        assert_eq!(header.seat_number, "1401763");
        assert_eq!(header.name, "Aayush Ramesh Kapadia");
        assert_eq!(header.gender, Some(Gender::Male));
        assert_eq!(header.ern.as_deref(), Some("MU0341120250220778"));
        assert_eq!(header.college, "Vidyalankar Institute of Technology");
        assert_eq!(header.status, AdmissionStatus::Regular);
    }

    #[test]
    fn test_header_uses_pending_ern() {
        let header = parse_header_line(KT_HEADER, Some("MU0341120250220999")).expect("header");
        assert_eq!(header.gender, Some(Gender::Female));
        assert_eq!(header.ern.as_deref(), Some("MU0341120250220999"));

        let header = parse_header_line(KT_HEADER, Some("MU12")).expect("header");
        assert_eq!(header.ern, None);
    }

    #[test]
    fn test_header_inline_ern_wins_over_pending() {
        let header = parse_header_line(PASS_HEADER, Some("MU0341120250220999")).expect("header");
        assert_eq!(header.ern.as_deref(), Some("MU0341120250220778"));
    }

    #[test]
    fn test_header_repeater_name_excludes_status() {
        let header = parse_header_line(REPEATER_HEADER, None).expect("header");
        assert_eq!(header.name, "Chavan Daksh Jayendra");
        assert_eq!(header.status, AdmissionStatus::Repeater);
    }

    #[test]
    fn test_header_without_status_keyword() {
        let header =
            parse_header_line("1234567 JOHN D0E SMITH MALE (MU0341120250220001) MU-0101: ABC", None)
                .expect("header");
        assert_eq!(header.name, "John Smith");
        assert_eq!(header.status, AdmissionStatus::Regular);
        assert_eq!(header.college, "ABC");

        let header = parse_header_line("7654321 PRIYA SHAH ATKT FEMALE", None).expect("header");
        assert_eq!(header.status, AdmissionStatus::Atkt);
        assert_eq!(header.college, "");
    }

    #[test]
    fn test_header_rejects_non_seat_line() {
        assert!(parse_header_line("TOT 65 8 A 2 16.0", None).is_none());
    }

    #[test]
    fn test_tot_line_extracts_subjects_and_sgpa() {
        let tot = parse_tot_line(PASS_TOT).unwrap();
        assert_eq!(tot.subjects.len(), 13);
        assert!((tot.sgpa - 7.57143).abs() < 1e-9);

        let first = &tot.subjects[0];
        assert_eq!(first.total, 65);
        assert_eq!(first.grade_point, 8);
        assert_eq!(first.grade, "A");
        assert_eq!(first.credits, 2.0);
        assert_eq!(first.credit_points, 16.0);

        assert_eq!(tot.subjects[1].grade, "B+");
        assert_eq!(tot.subjects[12].grade, "A+");
        assert_eq!(tot.subjects[12].total, 85);
    }

    #[test]
    fn test_tot_line_grace_and_split_grade() {
        let tot = parse_tot_line("TOT 50+ @2 6 B + 2 12.0 20 150.0 7.50000").unwrap();
        assert_eq!(tot.subjects.len(), 1);
        assert_eq!(tot.subjects[0].total, 52);
        assert_eq!(tot.subjects[0].grade, "B+");
        assert_eq!(tot.subjects[0].credits, 2.0);
        assert!((tot.sgpa - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_tot_line_failed_subject() {
        let tot = parse_tot_line("TOT 15 0 F 0 0.0 61 7 B+ 2 14.0 2 14.0 0.00000").unwrap();
        assert_eq!(tot.sgpa, 0.0);
        assert_eq!(tot.subjects.len(), 2);
        assert_eq!(tot.subjects[0].grade, "F");
        assert_eq!(tot.subjects[0].grade_point, 0);
    }

    #[test]
    fn test_tot_line_skips_invalid_grade() {
        let tot = parse_tot_line("TOT 40 5 X 2 10.0 61 7 B 2 14.0 4 24.0 6.00000").unwrap();
        assert_eq!(tot.subjects.len(), 1);
        assert_eq!(tot.subjects[0].total, 61);
    }

    #[test]
    fn test_tot_line_rejects_out_of_range_values() {
        assert!(parse_tot_line("TOT 4294967296 8 A 2 16.0 4 32.0 7.50000").is_err());
        // la gracia empuja el total fuera de u32
        assert!(parse_tot_line("TOT 4294967295 @1 8 A 2 16.0 4 32.0 7.50000").is_err());
        // una gracia no numérica se sigue ignorando
        assert_eq!(
            parse_tot_line("TOT 50 @x 61 7 B 2 14.0 2 14.0 7.00000")
                .unwrap()
                .subjects
                .len(),
            1
        );
    }

    #[test]
    fn test_component_line_with_pass_markers() {
        assert_eq!(
            parse_component_line("T1 20 P 21 P 22 P", "T1").unwrap(),
            vec![20, 21, 22]
        );
    }

    #[test]
    fn test_component_line_skips_grade_point_trailer() {
        // "22 0 F 0.0": nota 22, GP 0, grado F, puntos 0.0
        assert_eq!(
            parse_component_line("E1 22 0 F 0.0 19 P", "E1").unwrap(),
            vec![22, 19]
        );
    }

    #[test]
    fn test_component_line_adds_grace() {
        assert_eq!(
            parse_component_line("E1 23 @3 P 45 P", "E1").unwrap(),
            vec![26, 45]
        );
    }

    #[test]
    fn test_component_line_rejects_out_of_range_values() {
        assert!(parse_component_line("E1 4294967296 P 45 P", "E1").is_err());
        assert!(parse_component_line("E1 4294967295 @1 P", "E1").is_err());
    }

    #[test]
    fn test_component_line_strips_trailers() {
        assert_eq!(
            parse_component_line("I1 15 16 (512) PASS", "I1").unwrap(),
            vec![15, 16]
        );
        assert_eq!(parse_component_line("I1 15 16 (480) failed", "I1").unwrap(), vec![15, 16]);
        assert_eq!(parse_component_line("O1 12 MARKS", "O1").unwrap(), vec![12]);
        assert_eq!(parse_component_line("T1 10 P ... P", "T1").unwrap(), vec![10]);
        assert_eq!(parse_component_line("T1 10 P 11 ...", "T1").unwrap(), vec![10, 11]);
    }

    #[test]
    fn test_summary_from_lines() {
        let lines = ["E1 50 P", "I1 15 P (512) PASS"];
        let summary = parse_summary(&lines).expect("summary");
        assert_eq!(summary.total_marks, 512);
        assert_eq!(summary.result, ResultStatus::Pass);

        let lines = ["I1 15 P (301) FAIL"];
        let summary = parse_summary(&lines).expect("summary");
        assert_eq!(summary.result, ResultStatus::Failed);
    }

    #[test]
    fn test_summary_defaults_when_missing() {
        let summary = parse_summary(&["T1 20 P"]).expect("summary");
        assert_eq!(summary.total_marks, 0);
        assert_eq!(summary.result, ResultStatus::Failed);
    }

    #[test]
    fn test_summary_overflow_is_an_error() {
        assert!(parse_summary(&["I1 (99999999999) PASS"]).is_err());
    }
}
