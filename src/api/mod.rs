pub mod admin;
mod body;
pub mod employee;
mod error;
pub mod leave_request;
pub mod policy;
pub mod tools;

#[cfg(test)]
mod tests;
