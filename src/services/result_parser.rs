//! services/result_parser.rs
//! Convierte las líneas de texto de un ledger completo en registros de estudiantes.
//!
//! Todas las páginas se procesan como un único flujo de líneas, así un ERN
//! que quedó al final de una página se puede asociar al estudiante siguiente.

use std::collections::HashMap;
use std::sync::LazyLock;

use anyhow::{anyhow, Result};
use regex::Regex;

use crate::config::subject_config::{Component, MAX_MARKS, NUM_SUBJECTS, SUBJECTS};
use crate::models::student_model::{
    KtSummary, KtType, MarkStatus, StudentRecord, SubjectMarks, SubjectResult,
};
use crate::services::line_parser::{
    extract_ern, is_seat_number_line, parse_component_line, parse_header_line, parse_summary,
    parse_tot_line, TotEntry,
};

/// Distancia máxima (en líneas) entre un ERN suelto y la cabecera a la que pertenece.
const FLOATING_ERN_MAX_DISTANCE: usize = 5;

static REPEATER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bRepeater\b").expect("regex repeater inválida"));

#[derive(Debug, Default)]
pub struct ParseOutcome {
    /// En orden de primera aparición
    pub students: Vec<StudentRecord>,
    /// Bloques que fallaron, con la línea donde empiezan
    pub errors: Vec<String>,
    pub blocks_found: usize,
    pub total_lines: usize,
}

/// Notas por fila de componentes de un bloque.
#[derive(Debug, Default)]
struct ComponentRows {
    term_work: Vec<u32>,
    oral: Vec<u32>,
    external: Vec<u32>,
    internal: Vec<u32>,
}

impl ComponentRows {
    fn row(&self, component: Component) -> &[u32] {
        match component {
            Component::TermWork => &self.term_work,
            Component::Oral => &self.oral,
            Component::External => &self.external,
            Component::Internal => &self.internal,
        }
    }

    fn set(&mut self, component: Component, mut marks: Vec<u32>) {
        marks.truncate(component.max_values());
        match component {
            Component::TermWork => self.term_work = marks,
            Component::Oral => self.oral = marks,
            Component::External => self.external = marks,
            Component::Internal => self.internal = marks,
        }
    }

    /// Nota de la materia `subject_index` en la fila `component`, si la tiene.
    fn mark_for(&self, component: Component, subject_index: usize) -> Option<u32> {
        component
            .position_for(subject_index)
            .and_then(|position| self.row(component).get(position).copied())
    }
}

pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> ParseOutcome {
    let block_starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_seat_number_line(line.as_ref()))
        .map(|(idx, _)| idx)
        .collect();

    log::debug!("{} bloques de estudiante encontrados", block_starts.len());

    let ern_for_block = map_floating_erns(lines, &block_starts);

    let mut outcome = ParseOutcome {
        blocks_found: block_starts.len(),
        total_lines: lines.len(),
        ..Default::default()
    };
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (n, &start) in block_starts.iter().enumerate() {
        let end = block_starts.get(n + 1).copied().unwrap_or(lines.len());
        let block = block_lines(&lines[start..end]);
        let Some(header_line) = block.first() else {
            continue;
        };

        // Los repetidores no se reportan
        if REPEATER_RE.is_match(header_line) {
            continue;
        }

        let pending_ern = ern_for_block.get(&start).map(String::as_str);
        match parse_student_block(&block, pending_ern) {
            Ok(Some(student)) => {
                let key = student.key().to_string();
                match positions.get(&key).copied() {
                    Some(pos) => outcome.students[pos] = student,
                    None => {
                        positions.insert(key, outcome.students.len());
                        outcome.students.push(student);
                    }
                }
            }
            Ok(None) => {}
            Err(e) => outcome
                .errors
                .push(format!("Block at line {}: {:#}", start, e)),
        }
    }

    outcome
}

/// Un ERN en una línea que no es cabecera se asigna al bloque que empieza
/// a continuación, siempre que esté a no más de 5 líneas.
fn map_floating_erns<S: AsRef<str>>(lines: &[S], block_starts: &[usize]) -> HashMap<usize, String> {
    let mut ern_for_block = HashMap::new();

    for (idx, line) in lines.iter().enumerate() {
        let line = line.as_ref().trim();
        if is_seat_number_line(line) {
            continue;
        }
        let Some(ern) = extract_ern(line) else {
            continue;
        };

        let next = block_starts.partition_point(|&start| start <= idx);
        if let Some(&start) = block_starts.get(next) {
            if start - idx <= FLOATING_ERN_MAX_DISTANCE {
                ern_for_block.insert(start, ern);
            }
        }
    }

    ern_for_block
}

/// Líneas útiles de un bloque: sin vacías y cortadas en la primera
/// repetición de la cabecera de página.
fn block_lines<S: AsRef<str>>(raw: &[S]) -> Vec<&str> {
    let mut lines = Vec::new();
    for line in raw.iter().map(|l| l.as_ref().trim()).filter(|l| !l.is_empty()) {
        if is_page_header(line) {
            break;
        }
        // ")" huérfano del ERN partido
        if line == ")" {
            continue;
        }
        lines.push(line);
    }
    lines
}

fn is_page_header(line: &str) -> bool {
    line.starts_with("SEAT NO")
        || line.starts_with("10411 :")
        || (line.starts_with("WORK)") && line.contains("Engineering"))
        || (line.starts_with("TOT GP G") && line.contains("C G*C"))
        || line.starts_with("TERM WORK")
        || line.starts_with("ORAL (")
        || line.starts_with("External (")
        || line.starts_with("Internal(")
        || line.starts_with("Mathematics-I")
}

/// Parsea un bloque ya filtrado. `Ok(None)` si el bloque no describe un estudiante
/// (cabecera inválida o sin fila TOT).
pub fn parse_student_block<S: AsRef<str>>(
    lines: &[S],
    pending_ern: Option<&str>,
) -> Result<Option<StudentRecord>> {
    if lines.len() < 2 {
        return Ok(None);
    }
    let Some(header) = parse_header_line(lines[0].as_ref(), pending_ern) else {
        return Ok(None);
    };

    let mut rows = ComponentRows::default();
    let mut tot = None;
    for line in lines.iter().map(|l| l.as_ref().trim()) {
        if line.starts_with("TOT ") {
            tot = Some(parse_tot_line(line)?);
            continue;
        }
        for component in Component::ALL {
            let prefix = component.row_prefix();
            if line.strip_prefix(prefix).is_some_and(|r| r.starts_with(' ')) {
                rows.set(component, parse_component_line(line, prefix)?);
                break;
            }
        }
    }

    let Some(tot) = tot.filter(|t| !t.subjects.is_empty()) else {
        return Ok(None);
    };

    let subjects: Vec<SubjectResult> = tot
        .subjects
        .iter()
        .take(NUM_SUBJECTS)
        .enumerate()
        .map(|(index, entry)| build_subject(index, entry, &rows))
        .collect();

    let summary = parse_summary(lines)?;
    let total_marks = if summary.total_marks > 0 {
        summary.total_marks
    } else {
        subjects
            .iter()
            .try_fold(0u32, |acc, s| acc.checked_add(s.marks.total))
            .ok_or_else(|| anyhow!("La suma de totales por materia desborda"))?
    };

    Ok(Some(StudentRecord {
        seat_number: header.seat_number,
        name: header.name,
        gender: header.gender,
        ern: header.ern,
        college: header.college,
        status: header.status,
        total_marks,
        max_marks: MAX_MARKS,
        result: summary.result,
        sgpa: tot.sgpa,
        cgpa: None,
        total_credits: subjects.iter().map(|s| s.marks.credits).sum(),
        total_credit_points: subjects.iter().map(|s| s.marks.credit_points).sum(),
        kt: KtSummary::from_subjects(&subjects),
        subjects,
    }))
}

fn build_subject(index: usize, entry: &TotEntry, rows: &ComponentRows) -> SubjectResult {
    let (code, name) = SUBJECTS[index];
    let failed = entry.grade == "F";

    let marks = SubjectMarks {
        term_work: rows.mark_for(Component::TermWork, index),
        oral: rows.mark_for(Component::Oral, index),
        external: rows.mark_for(Component::External, index),
        internal: rows.mark_for(Component::Internal, index),
        total: entry.total,
        grade_point: entry.grade_point,
        grade: entry.grade.clone(),
        credits: entry.credits,
        credit_points: entry.credit_points,
        status: if failed {
            MarkStatus::Fail
        } else {
            MarkStatus::Pass
        },
    };

    SubjectResult {
        code: code.to_string(),
        name: name.to_string(),
        is_kt: failed || entry.grade_point == 0,
        kt_type: detect_kt_type(entry, &marks),
        marks,
    }
}

/// Tipo de KT: el primer componente en 0 (externo, interno, term work, oral);
/// si ninguno está en 0, el KT es `overall`.
pub fn detect_kt_type(entry: &TotEntry, marks: &SubjectMarks) -> Option<KtType> {
    if entry.grade != "F" && entry.grade_point > 0 {
        return None;
    }
    let candidates = [
        (marks.external, KtType::External),
        (marks.internal, KtType::Internal),
        (marks.term_work, KtType::TermWork),
        (marks.oral, KtType::Oral),
    ];
    let kind = candidates
        .into_iter()
        .find(|(mark, _)| *mark == Some(0))
        .map(|(_, kind)| kind)
        .unwrap_or(KtType::Overall);
    Some(kind)
}
