//! services/analysis_service.rs
//! Estadísticas agregadas sobre los estudiantes de un documento.

use crate::models::analysis_model::{Analysis, KtDistribution, MarksDistribution};
use crate::models::student_model::{ResultStatus, StudentRecord};

pub fn generate_analysis(students: &[StudentRecord]) -> Analysis {
    if students.is_empty() {
        return Analysis::default();
    }

    let total = students.len() as u32;
    let passed = students.iter().filter(|s| s.passed()).count() as u32;
    let failed = students
        .iter()
        .filter(|s| s.result == ResultStatus::Failed)
        .count() as u32;
    let with_kt = students.iter().filter(|s| s.kt.has_kt).count() as u32;

    let marks: Vec<u32> = students
        .iter()
        .map(|s| s.total_marks)
        .filter(|m| *m > 0)
        .collect();
    let sgpas: Vec<f64> = students.iter().map(|s| s.sgpa).filter(|g| *g > 0.0).collect();

    let average_marks = if marks.is_empty() {
        0
    } else {
        (marks.iter().map(|m| *m as f64).sum::<f64>() / marks.len() as f64).round_ties_even() as u32
    };
    let average_sgpa = if sgpas.is_empty() {
        0.0
    } else {
        round2(sgpas.iter().sum::<f64>() / sgpas.len() as f64)
    };

    let total_kts: u32 = students.iter().map(|s| s.kt.total_kt).sum();
    let average_kt_per_student = if with_kt == 0 {
        0.0
    } else {
        round2(total_kts as f64 / with_kt as f64)
    };

    Analysis {
        total_students: total,
        passed_count: passed,
        failed_count: failed,
        pass_percentage: round2(passed as f64 / total as f64 * 100.0),
        students_with_kt: with_kt,
        average_kt_per_student,
        highest_marks: marks.iter().copied().max().unwrap_or(0),
        lowest_marks: marks.iter().copied().min().unwrap_or(0),
        average_marks,
        average_sgpa,
        marks_distribution: marks_distribution(students),
        kt_distribution: kt_distribution(students),
    }
}

/// Clasificación por porcentaje sobre `max_marks`.
pub fn marks_distribution(students: &[StudentRecord]) -> MarksDistribution {
    let mut dist = MarksDistribution::default();
    for s in students {
        let pct = if s.max_marks == 0 {
            0.0
        } else {
            s.total_marks as f64 / s.max_marks as f64 * 100.0
        };

        if pct >= 75.0 {
            dist.distinction += 1;
        } else if pct >= 60.0 {
            dist.first_class += 1;
        } else if pct >= 50.0 {
            dist.second_class += 1;
        } else if pct >= 40.0 && s.passed() {
            dist.pass_class += 1;
        } else {
            dist.fail += 1;
        }
    }
    dist
}

pub fn kt_distribution(students: &[StudentRecord]) -> KtDistribution {
    let mut dist = KtDistribution::default();
    for s in students {
        match s.kt.total_kt {
            0 => dist.no_kt += 1,
            1 => dist.one_kt += 1,
            2 => dist.two_kt += 1,
            _ => dist.three_or_more_kt += 1,
        }
    }
    dist
}

/// Redondeo a 2 decimales; los empates van al par (500.5 -> 500).
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
