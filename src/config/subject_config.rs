//! config/subject_config.rs
//! Catálogo de materias del FE Semestre I (orden de columnas del ledger)
//! y el mapeo de cada fila de componentes (T1/O1/E1/I1) a las materias.

/// (código, nombre) en el orden en que aparecen en la fila TOT.
pub const SUBJECTS: [(&str, &str); 14] = [
    ("10411", "Applied Mathematics-I"),
    ("10412", "Applied Physics"),
    ("10413", "Applied Chemistry"),
    ("10414", "Engineering Mechanics"),
    ("10415", "Basic Electrical & Electronics Engineering"),
    ("10416", "Applied Physics Lab"),
    ("10417", "Applied Chemistry Lab"),
    ("10418", "Engineering Mechanics Lab"),
    ("10419", "Basic Electrical & Electronics Lab"),
    ("10420", "Professional Communication Ethics"),
    ("10421", "Professional Communication Ethics TW"),
    ("10422", "Engineering Workshop-I"),
    ("10423", "C Programming"),
    ("10424", "Induction cum Universal Human Values"),
];

pub const NUM_SUBJECTS: usize = SUBJECTS.len();

/// Puntaje máximo del semestre
pub const MAX_MARKS: u32 = 800;

/// Fila de componentes del ledger. Cada una cubre solo algunas materias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    TermWork,
    Oral,
    External,
    Internal,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::TermWork,
        Component::Oral,
        Component::External,
        Component::Internal,
    ];

    /// Prefijo de la fila en el texto ("T1 ...", "O1 ...").
    pub fn row_prefix(self) -> &'static str {
        match self {
            Component::TermWork => "T1",
            Component::Oral => "O1",
            Component::External => "E1",
            Component::Internal => "I1",
        }
    }

    /// Pares (índice de materia, posición en la fila).
    pub fn columns(self) -> &'static [(usize, usize)] {
        match self {
            Component::TermWork => &[
                (0, 0),
                (5, 1),
                (6, 2),
                (7, 3),
                (8, 4),
                (10, 5),
                (11, 6),
                (12, 7),
            ],
            // Solo 10418, 10419 y 10423 tienen oral
            Component::Oral => &[(7, 0), (8, 1), (12, 2)],
            // Los laboratorios no tienen examen externo
            Component::External => &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4), (9, 5)],
            Component::Internal => &[
                (0, 0),
                (1, 1),
                (2, 2),
                (3, 3),
                (4, 4),
                (9, 5),
                (13, 6),
            ],
        }
    }

    /// Cantidad máxima de valores que puede traer la fila.
    pub fn max_values(self) -> usize {
        self.columns().len()
    }

    /// Posición dentro de la fila para la materia `subject_index`, si la tiene.
    pub fn position_for(self, subject_index: usize) -> Option<usize> {
        self.columns()
            .iter()
            .find(|(subject, _)| *subject == subject_index)
            .map(|(_, position)| *position)
    }
}

pub fn subject_at(index: usize) -> Option<(&'static str, &'static str)> {
    SUBJECTS.get(index).copied()
}
