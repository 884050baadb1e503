pub mod common;
pub mod u501_rfid_registration;
pub mod u502_rfid_checking;
pub mod u503_rfid_reject;
