//! Builds parameterized SELECT, INSERT and UPDATE statements for the students table.
//! Identifiers come from configuration only; values are always positional parameters.

/// Table holding student records.
pub const STUDENTS_TABLE: &str = "students";

/// Columns in the order they are selected and returned.
pub const STUDENT_COLUMNS: &[&str] = &["id", "name", "course", "email", "phone", "created_at", "updated_at"];

/// Business columns written by insert and update, in parameter order.
pub const WRITABLE_COLUMNS: &[&str] = &["name", "course", "email", "phone"];

/// Quote identifier for PostgreSQL.
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified, quoted table name.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

fn column_list() -> String {
    STUDENT_COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT every row, ordered by primary key.
pub fn select_all(schema: &str) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(),
        qualified_table(schema, STUDENTS_TABLE),
        quoted("id")
    )
}

/// SELECT by primary key. Caller binds id as $1.
pub fn select_by_id(schema: &str) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        column_list(),
        qualified_table(schema, STUDENTS_TABLE),
        quoted("id")
    )
}

/// INSERT the writable columns plus created_at. Caller binds them as $1..$5 in
/// `WRITABLE_COLUMNS` order followed by the timestamp. updated_at stays NULL.
pub fn insert(schema: &str) -> String {
    let mut cols: Vec<String> = WRITABLE_COLUMNS.iter().map(|c| quoted(c)).collect();
    cols.push(quoted("created_at"));
    let placeholders: Vec<String> = (1..=cols.len()).map(|n| format!("${}", n)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema, STUDENTS_TABLE),
        cols.join(", "),
        placeholders.join(", "),
        column_list()
    )
}

/// UPDATE by id: replaces the writable columns and sets updated_at. Caller binds the
/// writable values as $1..$4, the timestamp as $5 and the id as $6.
pub fn update(schema: &str) -> String {
    let mut sets: Vec<String> = WRITABLE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c), i + 1))
        .collect();
    let ts_param = sets.len() + 1;
    sets.push(format!("{} = ${}", quoted("updated_at"), ts_param));
    format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        qualified_table(schema, STUDENTS_TABLE),
        sets.join(", "),
        quoted("id"),
        ts_param + 1,
        column_list()
    )
}
