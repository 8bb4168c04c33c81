use crate::models::Subject;

/// Reference curriculum used to pre-fill a semester sheet: subject names and
/// credit counts only, grades are left for the student to enter. Keyed by
/// program code and semester number.
pub fn template(program: &str, semester: u32) -> Option<Vec<Subject>> {
    let subjects: Vec<(&str, u32)> = match (program, semester) {
        ("cse", 1) => vec![
            ("Engineering Mathematics I", 4),
            ("Engineering Physics", 3),
            ("Programming in C", 4),
            ("Basic Electrical Engineering", 3),
            ("Engineering Graphics", 2),
            ("Physics Laboratory", 1),
            ("Programming Laboratory", 1),
        ],
        ("cse", 2) => vec![
            ("Engineering Mathematics II", 4),
            ("Engineering Chemistry", 3),
            ("Data Structures", 4),
            ("Digital Logic Design", 3),
            ("Environmental Science", 2),
            ("Chemistry Laboratory", 1),
            ("Data Structures Laboratory", 1),
        ],
        ("cse", 3) => vec![
            ("Discrete Mathematics", 4),
            ("Object Oriented Programming", 4),
            ("Computer Organization", 3),
            ("Operating Systems", 4),
            ("Professional Communication", 2),
            ("OOP Laboratory", 1),
        ],
        ("cse", 4) => vec![
            ("Probability and Statistics", 4),
            ("Design and Analysis of Algorithms", 4),
            ("Database Management Systems", 3),
            ("Computer Networks", 3),
            ("Software Engineering", 3),
            ("DBMS Laboratory", 1),
        ],
        ("ece", 1) => vec![
            ("Engineering Mathematics I", 4),
            ("Engineering Physics", 3),
            ("Basic Electronics", 4),
            ("Programming in C", 3),
            ("Engineering Graphics", 2),
            ("Electronics Laboratory", 1),
        ],
        ("ece", 2) => vec![
            ("Engineering Mathematics II", 4),
            ("Circuit Theory", 4),
            ("Signals and Systems", 3),
            ("Engineering Chemistry", 3),
            ("Environmental Science", 2),
            ("Circuits Laboratory", 1),
        ],
        ("mech", 1) => vec![
            ("Engineering Mathematics I", 4),
            ("Engineering Physics", 3),
            ("Engineering Mechanics", 4),
            ("Workshop Practice", 2),
            ("Engineering Graphics", 3),
            ("Mechanics Laboratory", 1),
        ],
        ("mech", 2) => vec![
            ("Engineering Mathematics II", 4),
            ("Thermodynamics", 4),
            ("Material Science", 3),
            ("Engineering Chemistry", 3),
            ("Environmental Science", 2),
            ("Thermal Laboratory", 1),
        ],
        _ => return None,
    };

    Some(
        subjects
            .into_iter()
            .map(|(name, credits)| Subject {
                name: name.to_string(),
                credits: Some(credits),
                grade: None,
            })
            .collect(),
    )
}

/// Program codes with at least one semester template.
pub fn known_programs() -> &'static [&'static str] {
    &["cse", "ece", "mech"]
}
