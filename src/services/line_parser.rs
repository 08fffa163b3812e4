//! services/line_parser.rs
//! Parsers de filas individuales del ledger: cabecera del estudiante,
//! fila TOT, filas de componentes (T1/O1/E1/I1) y resumen "(NNN) PASS".

use std::sync::LazyLock;

use anyhow::{anyhow, Context, Result};
use regex::Regex;

use crate::models::student_model::{AdmissionStatus, Gender, ResultStatus};

static ERN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MU[0-9]{16}").expect("regex ERN inválida"));
static ERN_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^MU[0-9]{16}$").expect("regex ERN inválida"));
static SEAT_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7}\s+[A-Z]").expect("regex asiento inválida"));
static SEAT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{7})\s+").expect("regex asiento inválida"));
static STATUS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(Regular|Repeater|ATKT)\b").expect("regex estado inválida")
});
static GENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(MALE|FEMALE)\b").expect("regex género inválida"));
static COLLEGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"MU-[0-9]+:\s*(.+?)\s*$").expect("regex colegio inválida"));
static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\(([0-9]+)\)\s*(PASS|FAILED|FAIL)\s*$").expect("regex resumen inválida")
});
static GRADE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ABCDFO]\+?$").expect("regex grado inválida"));

/// Colas que se eliminan de una fila de componentes antes de tokenizar (en este orden).
static COMPONENT_TRAILERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\s+MARKS\s*$",
        r"(?i)\s+\([0-9]+\)\s*(PASS|FAILED|FAIL)\s*$",
        r"\s+\.\.\.\s+P\s*$",
        r"\s+\.\.\.\s*$",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("regex de cola inválida"))
    .collect()
});

/// Una materia de la fila TOT.
#[derive(Debug, Clone, PartialEq)]
pub struct TotEntry {
    pub total: u32,
    pub grade_point: u32,
    pub grade: String,
    pub credits: f64,
    pub credit_points: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotLine {
    pub subjects: Vec<TotEntry>,
    pub sgpa: f64,
}

/// Datos de la primera línea de un bloque de estudiante.
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub seat_number: String,
    pub name: String,
    pub gender: Option<Gender>,
    pub ern: Option<String>,
    pub college: String,
    pub status: AdmissionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub total_marks: u32,
    pub result: ResultStatus,
}

pub fn is_valid_ern(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    let clean: String = text
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .collect();
    ERN_EXACT_RE.is_match(&clean)
}

pub fn extract_ern(text: &str) -> Option<String> {
    ERN_RE.find(text).map(|m| m.as_str().to_string())
}

/// Una cabecera de estudiante empieza con un asiento de 7 dígitos.
pub fn is_seat_number_line(text: &str) -> bool {
    SEAT_LINE_RE.is_match(text.trim())
}

/// Parsea la fila TOT.
///
/// La fila termina en `... créditos puntosDeCrédito SGPA`, p.ej. `23 178.0 7.73913`.
/// Esos tres valores se retiran antes de leer los grupos por materia:
/// `total[+] [@gracia] GP grado créditos puntos`.
pub fn parse_tot_line(line: &str) -> Result<TotLine> {
    let content = strip_row_prefix(line.trim(), "TOT");
    let mut tokens: Vec<&str> = content.split_whitespace().collect();

    let mut sgpa = 0.0;
    if let Some(last) = tokens.last().and_then(|t| t.parse::<f64>().ok()) {
        if (0.0..=10.0).contains(&last) {
            sgpa = last;
            tokens.pop();
            // total de puntos de crédito y total de créditos
            for _ in 0..2 {
                if tokens.last().is_some_and(|t| t.parse::<f64>().is_ok()) {
                    tokens.pop();
                }
            }
        }
    }

    let mut subjects = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        // "..." es el hueco de la materia 10424
        if token == "..." || !is_total_token(token) {
            i += 1;
            continue;
        }
        let mut total = parse_mark(token.trim_end_matches('+'))?;
        i += 1;

        if let Some(grace_token) = tokens.get(i).filter(|t| t.starts_with('@')) {
            let grace = &grace_token[1..];
            i += 1;
            if !is_digits(grace) {
                continue;
            }
            total = add_grace(total, parse_mark(grace)?)?;
        }

        let Some(grade_point) = tokens.get(i).filter(|t| is_digits(t)) else {
            continue;
        };
        let grade_point = parse_mark(grade_point)?;
        i += 1;

        let Some(grade_token) = tokens.get(i) else {
            break;
        };
        let mut grade = grade_token.to_string();
        i += 1;
        // "B+" puede venir partido en "B" "+"
        if tokens.get(i) == Some(&"+") {
            grade.push('+');
            i += 1;
        }
        if !GRADE_RE.is_match(&grade) {
            continue;
        }

        let Some(credits_token) = tokens.get(i) else {
            break;
        };
        let Ok(credits) = credits_token.parse::<f64>() else {
            i += 1;
            continue;
        };
        i += 1;

        let Some(points_token) = tokens.get(i) else {
            break;
        };
        let Ok(credit_points) = points_token.parse::<f64>() else {
            i += 1;
            continue;
        };
        i += 1;

        subjects.push(TotEntry {
            total,
            grade_point,
            grade,
            credits,
            credit_points,
        });
    }

    Ok(TotLine { subjects, sgpa })
}

/// Extrae las notas de una fila de componentes (T1, O1, E1, I1).
///
/// Después de una nota puede venir `P`/`F` o el bloque `GP grado [puntos]`
/// (p.ej. `22 0 F 0.0`). Ese GP no es una nota y se descarta.
pub fn parse_component_line(line: &str, prefix: &str) -> Result<Vec<u32>> {
    let mut content = strip_row_prefix(line.trim(), prefix).to_string();
    for trailer in COMPONENT_TRAILERS.iter() {
        content = trailer.replace(&content, "").into_owned();
    }

    let tokens: Vec<&str> = content.split_whitespace().collect();
    let mut marks = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if matches!(token, "P" | "F" | "...") || is_decimal(token) || !is_digits(token) {
            i += 1;
            continue;
        }
        let mut mark = parse_mark(token)?;
        i += 1;

        if let Some(grace_token) = tokens.get(i).filter(|t| t.starts_with('@')) {
            let grace = &grace_token[1..];
            if is_digits(grace) {
                mark = add_grace(mark, parse_mark(grace)?)?;
            }
            i += 1;
        }
        marks.push(mark);

        if tokens.get(i).is_some_and(|t| is_pass_fail(t)) {
            i += 1;
            if tokens.get(i).is_some_and(|t| is_decimal(t)) {
                i += 1;
            }
        } else if tokens.get(i).is_some_and(|t| is_digits(t))
            && tokens.get(i + 1).is_some_and(|t| is_pass_fail(t))
        {
            // GP + grado
            i += 2;
            if tokens.get(i).is_some_and(|t| is_decimal(t)) {
                i += 1;
            }
        }
    }

    Ok(marks)
}

/// Parsea la cabecera del estudiante.
///
/// ```text
/// 1401763 AAYUSH RAMESH KAPADIA Regular MALE (MU0341120250220778) MU-0524: ...
/// 1401767 ANTARA VINAY KARVIR Regular FEMALE MU-0524: ...
/// ```
/// En el segundo caso el ERN quedó en otra línea y llega como `pending_ern`.
pub fn parse_header_line(line: &str, pending_ern: Option<&str>) -> Option<Header> {
    let line = line.trim();
    let caps = SEAT_PREFIX_RE.captures(line)?;
    let seat_number = caps.get(1)?.as_str().to_string();
    let rest = &line[caps.get(0)?.end()..];

    let status_match = STATUS_RE.find(rest);
    let status = status_match
        .and_then(|m| AdmissionStatus::from_label(m.as_str()))
        .unwrap_or(AdmissionStatus::Regular);

    let gender = GENDER_RE
        .find(rest)
        .and_then(|m| match m.as_str().to_ascii_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        });

    let ern = extract_ern(rest).or_else(|| {
        pending_ern
            .filter(|e| is_valid_ern(e))
            .map(str::to_string)
    });

    let college = COLLEGE_RE
        .captures(rest)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let name_part = match status_match {
        Some(m) => rest[..m.start()].trim(),
        None => rest
            .split('(')
            .next()
            .and_then(|s| s.split("MU-").next())
            .unwrap_or_default()
            .trim(),
    };

    let name = name_part
        .split_whitespace()
        .filter(|w| w.chars().all(char::is_alphabetic))
        .filter(|w| !matches!(w.to_uppercase().as_str(), "MALE" | "FEMALE"))
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");

    Some(Header {
        seat_number,
        name,
        gender,
        ern,
        college,
        status,
    })
}

/// Busca el primer `(NNN) PASS|FAILED` al final de una línea del bloque.
/// Sin coincidencia: 0 marcas y FAILED.
pub fn parse_summary<S: AsRef<str>>(lines: &[S]) -> Result<Summary> {
    for line in lines {
        if let Some(caps) = SUMMARY_RE.captures(line.as_ref()) {
            let total_marks = caps[1]
                .parse::<u32>()
                .with_context(|| format!("Total de marcas inválido: {}", &caps[1]))?;
            let result = if caps[2].to_ascii_uppercase().contains("PASS") {
                ResultStatus::Pass
            } else {
                ResultStatus::Failed
            };
            return Ok(Summary {
                total_marks,
                result,
            });
        }
    }

    Ok(Summary {
        total_marks: 0,
        result: ResultStatus::Failed,
    })
}

/// Quita "TOT ", "T1 "... del inicio. Sin espacio detrás, la línea queda igual.
fn strip_row_prefix<'a>(line: &'a str, prefix: &str) -> &'a str {
    match line.strip_prefix(prefix) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => line,
    }
}

/// Entero de una fila; uno fuera de rango invalida el bloque.
fn parse_mark(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .with_context(|| format!("Valor fuera de rango: {}", token))
}

fn add_grace(mark: u32, grace: u32) -> Result<u32> {
    mark.checked_add(grace)
        .ok_or_else(|| anyhow!("Gracia fuera de rango: {} + @{}", mark, grace))
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// `^\d+\.\d+$`
fn is_decimal(token: &str) -> bool {
    match token.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => false,
    }
}

/// `^\d+\+?$`
fn is_total_token(token: &str) -> bool {
    is_digits(token.strip_suffix('+').unwrap_or(token))
}

fn is_pass_fail(token: &str) -> bool {
    matches!(token, "P" | "F")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
