pub mod employees;
pub mod patients;
