//! Remote employee directory client.
//!
//! The directory is a static JSON document served over HTTP: read-only,
//! unauthenticated, no pagination. It is only browsed and searched; nothing
//! from it flows into the record store.

use crate::errors::{AppError, AppResult};
use crate::models::employee::{DirectoryDocument, Employee};

pub const DEFAULT_DIRECTORY_URL: &str = "https://gist.githubusercontent.com/EmilenyRochaLeal/4e22d0ab8a76c9e8774928ce6ac8634d/raw/644b704288a98fdb49adbaf552aceeb44189a7f4/dados.json";

/// Fetch the full directory.
/// A non-success status or an unexpected document shape is an error, never
/// a silent empty list.
pub fn fetch(url: &str) -> AppResult<Vec<Employee>> {
    let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;

    let doc: DirectoryDocument = serde_json::from_str(&body)
        .map_err(|e| AppError::Directory(format!("unexpected directory payload: {e}")))?;

    Ok(doc.employees)
}

/// Case-insensitive name search over a fetched directory.
pub fn search<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    let q = query.to_lowercase();
    employees
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
    {
      "employees": [
        {
          "id": 1,
          "name": "Maria Clara",
          "job": "Back-end",
          "admission_date": "2019-12-02T00:00:00.000Z",
          "phone": "5551234567890",
          "image": "https://example.com/maria.png"
        },
        {
          "id": 2,
          "name": "João Pedro",
          "job": "Front-end",
          "admission_date": "2020-05-12T00:00:00.000Z",
          "phone": "5551234567891",
          "image": "https://example.com/joao.png"
        }
      ]
    }
    "#;

    #[test]
    fn parses_the_directory_document() {
        let doc: DirectoryDocument = serde_json::from_str(SAMPLE).expect("parse");
        assert_eq!(doc.employees.len(), 2);
        assert_eq!(doc.employees[0].job, "Back-end");
    }

    #[test]
    fn search_is_case_insensitive() {
        let doc: DirectoryDocument = serde_json::from_str(SAMPLE).expect("parse");
        let hits = search(&doc.employees, "maria");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Maria Clara");

        assert!(search(&doc.employees, "nobody").is_empty());
        assert_eq!(search(&doc.employees, "").len(), 2);
    }

    #[test]
    fn unexpected_shape_is_a_typed_error() {
        let err = serde_json::from_str::<DirectoryDocument>(r#"[{"id": 1}]"#)
            .map_err(|e| AppError::Directory(format!("unexpected directory payload: {e}")))
            .expect_err("shape mismatch");
        assert!(matches!(err, AppError::Directory(_)));
    }
}
