pub mod employee;
pub mod family_contact;
pub mod patient;
