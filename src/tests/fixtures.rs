//! tests/fixtures.rs
//! Líneas de ledger y PDFs sintéticos compartidos por las pruebas.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::models::student_model::{
    AdmissionStatus, KtSummary, ResultStatus, StudentRecord,
};

pub const PASS_HEADER: &str = "1401763 AAYUSH RAMESH KAPADIA Regular MALE (MU0341120250220778) MU-0524: Vidyalankar Institute of Technology";
pub const PASS_T1: &str = "T1 20 P 21 P 22 P 23 P 24 P 18 P 40 P 45 P";
pub const PASS_O1: &str = "O1 15 P 16 P 17 P";
pub const PASS_E1: &str = "E1 50 P 45 P 40 P 42 P 48 P 30 P";
pub const PASS_I1: &str = "I1 15 P 16 P 17 P 18 P 19 P 14 P 20 P (512) PASS";
/// 13 materias + el hueco "..." de 10424; 21 créditos, 159 puntos.
pub const PASS_TOT: &str = "TOT 65 8 A 2 16.0 61 7 B+ 2 14.0 57 7 B 2 14.0 59 7 B 2 14.0 67 8 A 2 16.0 20 6 C 1 6.0 22 7 B 1 7.0 40 8 A 1 8.0 41 8 A 1 8.0 44 7 B 2 14.0 18 6 C 1 6.0 40 9 A+ 2 18.0 85 9 A+ 2 18.0 ... 21 159.0 7.57143";

/// Cabecera sin ERN: el ERN quedó en la línea anterior (salto de página).
pub const KT_HEADER: &str =
    "1401767 ANTARA VINAY KARVIR Regular FEMALE MU-0524: Vidyalankar Institute of Technology";
pub const KT_FLOATING_ERN: &str = "(MU0341120250220999";
pub const KT_E1: &str = "E1 0 0 F 0.0 45 P 40 P 42 P 48 P 30 P";
pub const KT_I1: &str = "I1 15 P 16 P 17 P 18 P 19 P 14 P 20 P (420) FAILED";
pub const KT_TOT: &str = "TOT 15 0 F 0 0.0 61 7 B+ 2 14.0 2 14.0 0.00000";

pub const REPEATER_HEADER: &str = "1011999 CHAVAN DAKSH JAYENDRA Repeater MALE (MU0341120240205853) MU-0524: Vidyalankar Institute of Technology";

/// Documento de dos páginas ya "aplanado" en líneas.
pub fn ledger_lines() -> Vec<String> {
    [
        "UNIVERSITY OF MUMBAI",
        "SEAT NO NAME STATUS GENDER ERN COLLEGE",
        PASS_HEADER,
        PASS_T1,
        PASS_O1,
        PASS_E1,
        PASS_I1,
        PASS_TOT,
        "",
        KT_FLOATING_ERN,
        ")",
        KT_HEADER,
        KT_E1,
        KT_I1,
        KT_TOT,
        "SEAT NO NAME STATUS GENDER ERN COLLEGE",
        "TOT GP G C G*C",
        REPEATER_HEADER,
        PASS_E1,
        PASS_TOT,
    ]
    .iter()
    .map(|l| l.to_string())
    .collect()
}

/// Estudiante mínimo para pruebas de análisis.
pub fn student(key: &str, total_marks: u32, result: ResultStatus, sgpa: f64, kts: u32) -> StudentRecord {
    StudentRecord {
        seat_number: key.to_string(),
        name: format!("Student {}", key),
        gender: None,
        ern: None,
        college: String::new(),
        status: AdmissionStatus::Regular,
        subjects: Vec::new(),
        total_marks,
        max_marks: 800,
        result,
        sgpa,
        cgpa: None,
        total_credits: 0.0,
        total_credit_points: 0.0,
        kt: KtSummary {
            total_kt: kts,
            has_kt: kts > 0,
            ..Default::default()
        },
    }
}

/// PDF de una página con una línea de texto por renglón (Courier, base-14).
pub fn sample_pdf(lines: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut operations = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec!["F1".into(), 9.into()]),
        Operation::new("Td", vec![20.into(), 800.into()]),
    ];
    for line in lines {
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("Td", vec![0.into(), (-14).into()]));
    }
    operations.push(Operation::new("ET", vec![]));

    let content = Content { operations };
    let content_id = doc.add_object(Stream::new(
        dictionary! {},
        content.encode().expect("content stream"),
    ));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), 842.into(), 595.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("save pdf");
    buffer
}
