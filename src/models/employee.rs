use serde::Deserialize;

/// One entry of the remote employee directory.
#[derive(Debug, Clone, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub admission_date: String,
    pub phone: String,
    pub image: String,
}

/// The directory endpoint wraps the list in an `employees` object.
#[derive(Debug, Deserialize)]
pub struct DirectoryDocument {
    pub employees: Vec<Employee>,
}
