pub mod employee;
pub mod leave_request;
pub mod policy;
pub mod report;
pub mod request;
