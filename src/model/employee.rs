use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "name": "Alice Johnson",
        "email": "alice@company.com",
        "department": "Engineering",
        "join_date": "2024-01-01"
    })
)]
pub struct Employee {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "Alice Johnson")]
    pub name: String,

    #[schema(example = "alice@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2024-01-01",
        value_type = String,
        format = "date"
    )]
    pub join_date: NaiveDate,
}

impl Employee {
    pub fn in_department(&self, department: &str) -> bool {
        department.eq_ignore_ascii_case("all") || self.department.eq_ignore_ascii_case(department)
    }
}
