//! Built-in sample roster used on first run and after corrupt data recovery.

use chrono::NaiveDate;

use super::types::StudentRecord;

const SAMPLE_ROWS: [(&str, &str, (i32, u32, u32), &str, f64); 10] = [
    ("2023045", "Nguyễn Văn A", (2006, 4, 12), "CT02", 3.5),
    ("2023012", "Trần Thị B", (2006, 9, 5), "CT03", 3.9),
    ("2023089", "Lê Văn C", (2007, 1, 22), "CT01", 3.2),
    ("2023092", "Phạm Thị D", (2007, 3, 15), "CT01", 3.7),
    ("2023101", "Đặng Văn E", (2005, 11, 30), "CT05", 2.8),
    ("2024001", "Hoàng Văn F", (2008, 5, 20), "CT01", 3.8),
    ("2024002", "Vũ Thị G", (2007, 8, 15), "CT02", 4.0),
    ("2024003", "Bùi Văn H", (2008, 2, 10), "CT01", 3.2),
    ("2024004", "Dương Thị I", (2006, 12, 25), "CT07", 3.9),
    ("2024005", "Cao Văn K", (2007, 7, 8), "CT03", 2.9),
];

/// Returns the sample roster in its fixed order.
pub fn sample_records() -> Vec<StudentRecord> {
    SAMPLE_ROWS
        .iter()
        .filter_map(|&(id, name, (y, m, d), class, gpa)| {
            let dob = NaiveDate::from_ymd_opt(y, m, d)?;
            StudentRecord::new(id, name, dob, class, gpa).ok()
        })
        .collect()
}
